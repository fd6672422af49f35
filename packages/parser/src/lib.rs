pub mod ast;
pub mod error;
pub mod parser;
pub mod serializer;
pub mod tokenizer;

pub use ast::{is_void_tag, Attribute, Document, Node, NodeId, NodeKind, VOID_TAGS};
pub use error::{ParseError, ParseResult};
pub use parser::{decode_entities, parse, Parser};
pub use serializer::{escape_attribute, escape_text, serialize, Serializer};
pub use tokenizer::{tokenize, Token};
