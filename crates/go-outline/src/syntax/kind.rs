use logos::Logos;

/// Token classification used by the declaration parser. `Error` covers any
/// input the lexer cannot match (operators inside skipped expressions,
/// stray bytes); the parser treats it as an opaque token and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Error,
    Eof,

    // Trivia. Newlines are kept separate from other whitespace because Go
    // terminates declarations at line ends and doc-comment grouping is
    // sensitive to blank lines.
    Space,
    Newline,
    LineComment,
    BlockComment,

    // Identifiers & literals
    Ident,
    Int,
    Float,
    String,
    RawString,
    Rune,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Ellipsis,
    Dot,
    Star,
    Eq,
    Arrow,

    // Keywords the declaration grammar cares about. Everything else
    // (`return`, `if`, ...) lexes as `Ident`; those only occur inside
    // skipped bodies and initializers.
    KwPackage,
    KwImport,
    KwFunc,
    KwType,
    KwConst,
    KwVar,
    KwStruct,
    KwInterface,
    KwMap,
    KwChan,
}

impl SyntaxKind {
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::Space
                | SyntaxKind::Newline
                | SyntaxKind::LineComment
                | SyntaxKind::BlockComment
        )
    }
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = ())]
pub enum TokenKind {
    #[regex(r"[ \t\r\f]+")]
    Space,
    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,
    // Equivalent to /\*([^*]|\*+[^*/])*\*+/ but written in the DFA-friendly
    // form; logos 0.15 miscompiles the alternation version.
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    // Keywords
    #[token("package")]
    KwPackage,
    #[token("import")]
    KwImport,
    #[token("func")]
    KwFunc,
    #[token("type")]
    KwType,
    #[token("const")]
    KwConst,
    #[token("var")]
    KwVar,
    #[token("struct")]
    KwStruct,
    #[token("interface")]
    KwInterface,
    #[token("map")]
    KwMap,
    #[token("chan")]
    KwChan,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("...")]
    Ellipsis,
    #[token(".")]
    Dot,
    #[token("*")]
    Star,
    #[token("=")]
    Eq,
    #[token("<-")]
    Arrow,

    // Literals
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    String,
    #[regex(r"`[^`]*`")]
    RawString,
    #[regex(r"'([^'\\\n]|\\[^\n])*'")]
    Rune,
    #[regex(r"0[xX][0-9A-Fa-f_]+")]
    #[regex(r"0[bB][01_]+")]
    #[regex(r"0[oO][0-7_]+")]
    #[regex(r"[0-9][0-9_]*i?")]
    Int,
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?i?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?i?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+i?")]
    Float,
}

impl From<TokenKind> for SyntaxKind {
    fn from(token: TokenKind) -> Self {
        match token {
            TokenKind::Space => SyntaxKind::Space,
            TokenKind::Newline => SyntaxKind::Newline,
            TokenKind::LineComment => SyntaxKind::LineComment,
            TokenKind::BlockComment => SyntaxKind::BlockComment,
            TokenKind::KwPackage => SyntaxKind::KwPackage,
            TokenKind::KwImport => SyntaxKind::KwImport,
            TokenKind::KwFunc => SyntaxKind::KwFunc,
            TokenKind::KwType => SyntaxKind::KwType,
            TokenKind::KwConst => SyntaxKind::KwConst,
            TokenKind::KwVar => SyntaxKind::KwVar,
            TokenKind::KwStruct => SyntaxKind::KwStruct,
            TokenKind::KwInterface => SyntaxKind::KwInterface,
            TokenKind::KwMap => SyntaxKind::KwMap,
            TokenKind::KwChan => SyntaxKind::KwChan,
            TokenKind::LParen => SyntaxKind::LParen,
            TokenKind::RParen => SyntaxKind::RParen,
            TokenKind::LBrace => SyntaxKind::LBrace,
            TokenKind::RBrace => SyntaxKind::RBrace,
            TokenKind::LBracket => SyntaxKind::LBracket,
            TokenKind::RBracket => SyntaxKind::RBracket,
            TokenKind::Comma => SyntaxKind::Comma,
            TokenKind::Semicolon => SyntaxKind::Semicolon,
            TokenKind::Ellipsis => SyntaxKind::Ellipsis,
            TokenKind::Dot => SyntaxKind::Dot,
            TokenKind::Star => SyntaxKind::Star,
            TokenKind::Eq => SyntaxKind::Eq,
            TokenKind::Arrow => SyntaxKind::Arrow,
            TokenKind::Ident => SyntaxKind::Ident,
            TokenKind::String => SyntaxKind::String,
            TokenKind::RawString => SyntaxKind::RawString,
            TokenKind::Rune => SyntaxKind::Rune,
            TokenKind::Int => SyntaxKind::Int,
            TokenKind::Float => SyntaxKind::Float,
        }
    }
}
