pub mod ast;
pub mod kind;
pub mod lexer;
pub mod parser;

use thiserror::Error;

/// Fatal parse failures. Everything else the parser can recover from by
/// skipping tokens; these two mean the file cannot be meaningfully
/// outlined at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing package clause")]
    MissingPackageClause,
    #[error("missing package name")]
    MissingPackageName,
    #[error("unexpected end of file")]
    UnexpectedEof,
}

/// Parse one Go source file into its declaration tree.
pub fn parse(source: &str) -> Result<ast::SourceFile, ParseError> {
    parser::Parser::new(source).parse_file()
}
