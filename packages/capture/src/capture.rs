use crate::options::CaptureOptions;
use serde::Serialize;
use stylecopy_compiler_css::serialize_stylesheet;
use stylecopy_compiler_html::{clean_markup, MarkupCleaner, PrettyPrinter};
use stylecopy_compiler_utility::{compile_records, utility_class_map};
use stylecopy_extractor::{class_map, StyleExtractor, StyleResolver, StyleSnapshot};
use stylecopy_parser::{Document, NodeId};
use tracing::{info, instrument};

/// The three renditions of a captured subtree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOutput {
    /// Cleaned, pretty-printed markup carrying the generated class names
    pub markup: String,
    /// One rule block per generated class that has declarations
    pub stylesheet: String,
    /// The cleaned markup with utility classes in place of generated names
    pub utility_markup: String,
    /// Utility tokens of the captured root
    pub root_utility_tokens: Vec<String>,
}

impl CaptureOutput {
    /// All three renditions in one copyable text
    pub fn bundle(&self) -> String {
        let root_tokens = format!(
            "<!-- Tailwind classes: {} -->",
            self.root_utility_tokens.join(" ")
        );
        [
            "/* ── HTML ── */",
            self.markup.as_str(),
            "",
            "/* ── CSS ── */",
            self.stylesheet.as_str(),
            "",
            "/* ── Tailwind ── */",
            root_tokens.as_str(),
            self.utility_markup.as_str(),
        ]
        .join("\n")
    }
}

/// Capture the subtree at `root`.
///
/// `resolver` is queried once per tracked property per element; everything
/// after that runs over the snapshot. The source document is never modified.
#[instrument(skip(doc, resolver, options), fields(root = root.index(), root_class = %options.root_class))]
pub fn capture<R: StyleResolver + ?Sized>(
    doc: &Document,
    root: NodeId,
    resolver: &R,
    options: &CaptureOptions,
) -> CaptureOutput {
    info!("Starting capture");

    let snapshot = StyleSnapshot::capture(doc, root, resolver);
    let extractor = StyleExtractor::new()
        .with_root_class(options.root_class.as_str())
        .with_ignore_id_prefix(options.ignore_id_prefix.clone());
    let records = extractor.extract(doc, root, &snapshot);

    let stylesheet = serialize_stylesheet(&records);

    let compiled = compile_records(&records);
    let root_utility_tokens = compiled
        .iter()
        .find(|(node, _)| *node == root)
        .map(|(_, tokens)| tokens.as_slice().to_vec())
        .unwrap_or_default();

    let cleaner = MarkupCleaner::new().with_ignore_id_prefix(options.ignore_id_prefix.clone());
    let printer = PrettyPrinter::new(options.pretty_options());
    let markup = printer.pretty_print(&clean_markup(&cleaner, doc, root, &class_map(&records)));
    let utility_markup =
        printer.pretty_print(&clean_markup(&cleaner, doc, root, &utility_class_map(&compiled)));

    info!(
        records = records.len(),
        rules = records.iter().filter(|r| !r.declarations.is_empty()).count(),
        root_tokens = root_utility_tokens.len(),
        "Capture complete"
    );

    CaptureOutput {
        markup,
        stylesheet,
        utility_markup,
        root_utility_tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecopy_extractor::ComputedStyles;
    use stylecopy_parser::parse;

    #[test]
    fn test_bundle_layout() {
        let output = CaptureOutput {
            markup: "<div class=\"copied-el\"></div>".to_string(),
            stylesheet: ".copied-el {\n  padding: 8px;\n}".to_string(),
            utility_markup: "<div class=\"p-2\"></div>".to_string(),
            root_utility_tokens: vec!["p-2".to_string()],
        };

        assert_eq!(
            output.bundle(),
            "/* ── HTML ── */\n<div class=\"copied-el\"></div>\n\n/* ── CSS ── */\n.copied-el {\n  padding: 8px;\n}\n\n/* ── Tailwind ── */\n<!-- Tailwind classes: p-2 -->\n<div class=\"p-2\"></div>"
        );
    }

    #[test]
    fn test_output_serializes_camel_case() {
        let doc = parse("<div></div>").expect("Failed to parse");
        let root = doc.first_root_element().unwrap();
        let output = capture(&doc, root, &ComputedStyles::new(), &CaptureOptions::default());
        let json = serde_json::to_value(&output).unwrap();

        assert!(json.get("utilityMarkup").is_some());
        assert_eq!(json["rootUtilityTokens"], serde_json::json!([]));
        assert_eq!(json["markup"], "<div class=\"copied-el\"></div>");
    }

    #[test]
    fn test_ignored_root_yields_empty_output() {
        let doc = parse("<div id=\"__picker\"><p>x</p></div>").expect("Failed to parse");
        let root = doc.first_root_element().unwrap();
        let options = CaptureOptions {
            ignore_id_prefix: Some("__picker".to_string()),
            ..CaptureOptions::default()
        };
        let output = capture(&doc, root, &ComputedStyles::new(), &options);

        assert_eq!(output.markup, "");
        assert_eq!(output.stylesheet, "");
        assert!(output.root_utility_tokens.is_empty());
    }
}
