use stylecopy_parser::{escape_attribute, escape_text, is_void_tag, parse, Document, NodeId, NodeKind};
use tracing::debug;

/// Tags whose text content always stays on one line
pub const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "dfn", "em", "i", "kbd", "mark", "q", "s",
    "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var", "wbr",
];

/// Options for pretty printing
#[derive(Debug, Clone, PartialEq)]
pub struct PrettyOptions {
    /// Indentation string
    pub indent: String,
    /// Text shorter than this many characters stays on the tag's line
    pub inline_text_limit: usize,
}

impl Default for PrettyOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            inline_text_limit: 80,
        }
    }
}

/// Output buffer with indentation tracking
struct Context<'o> {
    options: &'o PrettyOptions,
    depth: usize,
    buffer: String,
}

impl<'o> Context<'o> {
    fn new(options: &'o PrettyOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    /// Start a new line at the current depth; lines are newline-separated
    /// with no trailing newline
    fn add_line(&mut self, text: &str) {
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
        self.buffer.push_str(text);
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Re-serializes markup fragments with stable indentation
#[derive(Debug, Clone, Default)]
pub struct PrettyPrinter {
    options: PrettyOptions,
}

impl PrettyPrinter {
    pub fn new(options: PrettyOptions) -> Self {
        Self { options }
    }

    /// Pretty print the first root element of `fragment`.
    ///
    /// The input is returned unchanged when it does not parse or contains no
    /// element.
    pub fn pretty_print(&self, fragment: &str) -> String {
        let doc = match parse(fragment) {
            Ok(doc) => doc,
            Err(error) => {
                debug!(error = %error, "Fragment failed to parse, returning it unformatted");
                return fragment.to_string();
            }
        };
        match doc.first_root_element() {
            Some(root) => self.print_element(&doc, root),
            None => fragment.to_string(),
        }
    }

    /// Pretty print an element of an existing document
    pub fn print_element(&self, doc: &Document, root: NodeId) -> String {
        let mut ctx = Context::new(&self.options);
        self.element(doc, root, &mut ctx);
        ctx.get_output()
    }

    fn element(&self, doc: &Document, id: NodeId, ctx: &mut Context) {
        let Some(tag) = doc.tag(id) else {
            return;
        };
        let open = open_tag(doc, id, tag);
        let empty = format!("{}</{}>", open, tag);

        if is_void_tag(tag) {
            ctx.add_line(&open);
            return;
        }

        let children = doc.children(id);
        if children.is_empty() {
            ctx.add_line(&empty);
            return;
        }

        let text_only = children
            .iter()
            .all(|child| matches!(doc.kind(*child), Some(NodeKind::Text { .. })));
        if text_only {
            let text: String = children.iter().filter_map(|child| doc.text(*child)).collect();
            let text = text.trim();
            if text.is_empty() {
                ctx.add_line(&empty);
                return;
            }
            if text.chars().count() < self.options.inline_text_limit || INLINE_TAGS.contains(&tag) {
                ctx.add_line(&format!("{}{}</{}>", open, escape_text(text), tag));
                return;
            }
        }

        let has_content = children.iter().any(|child| match doc.kind(*child) {
            Some(NodeKind::Element { .. }) => true,
            Some(NodeKind::Text { content }) => !content.trim().is_empty(),
            _ => false,
        });
        if !has_content {
            ctx.add_line(&empty);
            return;
        }

        ctx.add_line(&open);
        ctx.indent();
        for child in children {
            match doc.kind(*child) {
                Some(NodeKind::Element { .. }) => self.element(doc, *child, ctx),
                Some(NodeKind::Text { content }) => {
                    let text = content.trim();
                    if !text.is_empty() {
                        ctx.add_line(&escape_text(text));
                    }
                }
                // Comments are dropped
                _ => {}
            }
        }
        ctx.dedent();
        ctx.add_line(&format!("</{}>", tag));
    }
}

fn open_tag(doc: &Document, id: NodeId, tag: &str) -> String {
    let mut open = format!("<{}", tag);
    for attr in doc.attributes(id) {
        open.push(' ');
        open.push_str(&attr.name);
        if !attr.value.is_empty() {
            open.push_str("=\"");
            open.push_str(&escape_attribute(&attr.value));
            open.push('"');
        }
    }
    open.push('>');
    open
}

/// Pretty print with the default options
pub fn pretty_print(fragment: &str) -> String {
    PrettyPrinter::default().pretty_print(fragment)
}
