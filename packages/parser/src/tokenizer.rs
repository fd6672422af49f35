use crate::error::{ParseError, ParseResult};
use logos::{Lexer, Logos};
use std::fmt;

/// Token types for markup fragments
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token<'src> {
    #[regex(r"<![dD][oO][cC][tT][yY][pP][eE][^>]*>")]
    Doctype,

    // Comment body without the `<!--` / `-->` delimiters
    #[token("<!--", comment_body)]
    Comment(&'src str),

    // Whole opening tag including attributes, e.g. `<a href="/x">`
    #[regex(
        r#"<[a-zA-Z][a-zA-Z0-9:_-]*([ \t\r\n]+[^ \t\r\n"'>/=]+([ \t\r\n]*=[ \t\r\n]*("[^"]*"|'[^']*'|[^ \t\r\n"'=<>`]+))?)*[ \t\r\n]*/?>"#,
        |lex| lex.slice()
    )]
    OpenTag(&'src str),

    // Tag name of a closing tag
    #[regex(r"</[a-zA-Z][a-zA-Z0-9:_-]*[ \t\r\n]*>", |lex| {
        let s = lex.slice();
        s[2..s.len() - 1].trim_end()
    })]
    CloseTag(&'src str),

    #[regex(r"[^<]+", |lex| lex.slice())]
    Text(&'src str),
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Doctype => write!(f, "doctype"),
            Token::Comment(_) => write!(f, "comment"),
            Token::OpenTag(s) => write!(f, "open tag {}", s),
            Token::CloseTag(s) => write!(f, "close tag </{}>", s),
            Token::Text(s) => write!(f, "text '{}'", s),
        }
    }
}

// Body runs to the first `-->`; dashes inside it are allowed
fn comment_body<'src>(lex: &mut Lexer<'src, Token<'src>>) -> Option<&'src str> {
    let remainder = lex.remainder();
    let end = remainder.find("-->")?;
    lex.bump(end + 3);
    Some(&remainder[..end])
}

/// Tokenize a fragment, failing on the first unlexable byte (e.g. a stray `<`)
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token<'_>, std::ops::Range<usize>)>> {
    Token::lexer(source)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok((token, span)),
            Err(()) => Err(ParseError::lexer_error(span.start)),
        })
        .collect()
}
