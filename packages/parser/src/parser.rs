use crate::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::tokenizer::{tokenize, Token};

/// Parser for markup fragments.
///
/// Builds an arena [`Document`] from a flat fragment. It is lenient the way
/// browsers are about unclosed elements (they are closed at end of input or
/// when an ancestor's closing tag appears) but rejects closing tags with no
/// matching open element.
pub struct Parser<'src> {
    tokens: Vec<(Token<'src>, std::ops::Range<usize>)>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let tokens = tokenize(source)?;
        Ok(Self {
            tokens,
            pos: 0,
        })
    }

    /// Parse the whole fragment
    pub fn parse_document(&mut self) -> ParseResult<Document> {
        let mut doc = Document::new();
        // Currently open elements, innermost last
        let mut stack: Vec<NodeId> = Vec::new();

        while let Some((token, span)) = self.advance() {
            let start = span.start;
            let node = match token {
                Token::Doctype => continue,
                Token::Comment(content) => doc.create_comment(content),
                Token::Text(text) => doc.create_text(decode_entities(text)),
                Token::OpenTag(raw) => {
                    let tag = parse_open_tag(raw, start)?;
                    let id = doc.create_element(tag.name);
                    for (name, value) in tag.attributes {
                        doc.set_attribute(id, &name, value);
                    }
                    attach(&mut doc, &stack, id);
                    if !tag.self_closing && !is_void_tag(doc.tag(id).unwrap_or_default()) {
                        stack.push(id);
                    }
                    continue;
                }
                Token::CloseTag(name) => {
                    let name = name.to_ascii_lowercase();
                    match stack
                        .iter()
                        .rposition(|open| doc.tag(*open) == Some(name.as_str()))
                    {
                        Some(index) => stack.truncate(index),
                        // `</br>` and friends are tolerated
                        None if is_void_tag(&name) => {}
                        None => return Err(ParseError::unexpected_close_tag(start, name)),
                    }
                    continue;
                }
            };
            attach(&mut doc, &stack, node);
        }

        Ok(doc)
    }

    fn advance(&mut self) -> Option<(Token<'src>, std::ops::Range<usize>)> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }
}

fn attach(doc: &mut Document, stack: &[NodeId], node: NodeId) {
    match stack.last() {
        Some(parent) => doc.append_child(*parent, node),
        None => doc.append_root(node),
    };
}

struct OpenTag {
    name: String,
    attributes: Vec<(String, String)>,
    self_closing: bool,
}

/// Split a lexed opening tag into its name and attributes.
///
/// The lexer has already validated the overall shape, so this only needs to
/// scan names, `=` and (un)quoted values.
fn parse_open_tag(raw: &str, pos: usize) -> ParseResult<OpenTag> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| ParseError::invalid_syntax(pos, "malformed tag"))?;
    let (inner, self_closing) = match inner.trim_end().strip_suffix('/') {
        Some(rest) => (rest, true),
        None => (inner, false),
    };

    let name_end = inner
        .find(|c: char| c.is_ascii_whitespace())
        .unwrap_or(inner.len());
    let name = inner[..name_end].to_ascii_lowercase();
    if name.is_empty() {
        return Err(ParseError::invalid_syntax(pos, "empty tag name"));
    }

    let mut attributes = Vec::new();
    let bytes = inner.as_bytes();
    let mut i = name_end;
    while i < bytes.len() {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        let attr_start = i;
        while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'=' {
            i += 1;
        }
        let attr_name = inner[attr_start..i].to_ascii_lowercase();

        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        let mut value = String::new();
        if j < bytes.len() && bytes[j] == b'=' {
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            match bytes.get(j).copied() {
                Some(quote @ (b'"' | b'\'')) => {
                    let close = inner[j + 1..]
                        .find(quote as char)
                        .map(|offset| j + 1 + offset)
                        .ok_or_else(|| {
                            ParseError::invalid_syntax(pos + j, "unterminated attribute value")
                        })?;
                    value = decode_entities(&inner[j + 1..close]);
                    j = close + 1;
                }
                Some(_) => {
                    let value_start = j;
                    while j < bytes.len() && !bytes[j].is_ascii_whitespace() {
                        j += 1;
                    }
                    value = decode_entities(&inner[value_start..j]);
                }
                None => {}
            }
            i = j;
        }

        if !attr_name.is_empty() && !attributes.iter().any(|(n, _): &(String, String)| *n == attr_name) {
            attributes.push((attr_name, value));
        }
    }

    Ok(OpenTag {
        name,
        attributes,
        self_closing,
    })
}

/// Decode the character references a serializer is expected to produce
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        let decoded = candidate
            .find(';')
            .filter(|end| *end <= 10)
            .and_then(|end| decode_reference(&candidate[1..end]).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_reference(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Parse a markup fragment into a [`Document`]
pub fn parse(source: &str) -> ParseResult<Document> {
    Parser::new(source)?.parse_document()
}
