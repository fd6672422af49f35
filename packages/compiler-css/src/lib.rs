use stylecopy_common::Declarations;
use stylecopy_extractor::NodeStyleRecord;
use tracing::debug;

/// A single class-scoped rule
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule<'a> {
    pub selector: String,
    pub declarations: &'a Declarations,
}

impl<'a> CssRule<'a> {
    /// `None` when the record has nothing left after diffing
    pub fn from_record(record: &'a NodeStyleRecord) -> Option<Self> {
        if record.declarations.is_empty() {
            return None;
        }
        Some(Self {
            selector: format!(".{}", record.class_name),
            declarations: &record.declarations,
        })
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();
        css.push_str(&self.selector);
        css.push_str(" {\n");

        for declaration in self.declarations {
            css.push_str("  ");
            css.push_str(&declaration.property);
            css.push_str(": ");
            css.push_str(&declaration.value);
            css.push_str(";\n");
        }

        css.push('}');
        css
    }
}

/// Serialize one record as a rule block
pub fn serialize_rule(record: &NodeStyleRecord) -> Option<String> {
    CssRule::from_record(record).map(|rule| rule.to_css())
}

/// Serialize every non-empty record, rule blocks separated by a blank line
pub fn serialize_stylesheet(records: &[NodeStyleRecord]) -> String {
    let rules: Vec<String> = records.iter().filter_map(serialize_rule).collect();
    debug!(
        rules = rules.len(),
        skipped = records.len() - rules.len(),
        "Serialized stylesheet"
    );
    rules.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecopy_parser::NodeId;

    fn record(class_name: &str, declarations: &[(&str, &str)]) -> NodeStyleRecord {
        NodeStyleRecord {
            node: NodeId(0),
            tag: "div".to_string(),
            class_name: class_name.to_string(),
            declarations: declarations.iter().copied().collect(),
        }
    }

    #[test]
    fn test_serialize_rule() {
        let css = serialize_rule(&record(
            "copied-el",
            &[("padding", "8px"), ("background-color", "#2563eb")],
        ))
        .expect("rule");

        assert_eq!(
            css,
            ".copied-el {\n  padding: 8px;\n  background-color: #2563eb;\n}"
        );
    }

    #[test]
    fn test_empty_record_has_no_rule() {
        assert_eq!(serialize_rule(&record("copied-el", &[])), None);
    }

    #[test]
    fn test_stylesheet_skips_empty_records() {
        let records = vec![
            record("copied-el", &[("display", "flex")]),
            record("copied-el-c1", &[]),
            record("copied-el-c2", &[("color", "#111827")]),
        ];
        let css = serialize_stylesheet(&records);

        assert_eq!(
            css,
            ".copied-el {\n  display: flex;\n}\n\n.copied-el-c2 {\n  color: #111827;\n}"
        );
    }

    #[test]
    fn test_empty_stylesheet() {
        assert_eq!(serialize_stylesheet(&[record("copied-el", &[])]), "");
    }
}
