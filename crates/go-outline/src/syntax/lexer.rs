use logos::Logos;

use crate::syntax::ast::Span;
use crate::syntax::kind::{SyntaxKind, TokenKind};

/// One lexed token with its source text and byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub span: Span,
}

/// A lexer that wraps `logos::Lexer` to produce `SyntaxKind` tokens with
/// spans. Unmatched input becomes `SyntaxKind::Error` instead of stopping
/// the stream.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token_result = self.inner.next()?;
        let text = self.inner.slice();
        let range = self.inner.span();

        let kind = match token_result {
            Ok(token) => token.into(),
            Err(_) => SyntaxKind::Error,
        };

        Some(Token {
            kind,
            text,
            span: Span::new(range.start, range.end),
        })
    }
}
