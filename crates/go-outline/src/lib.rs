pub mod outline;
pub mod syntax;
pub mod text_pos;

pub use outline::{OutlineResult, Symbol, SymbolKind, produce_outline};
pub use syntax::ParseError;
pub use text_pos::LineIndex;

/// Parse source text and build its outline in one step.
pub fn outline_source(source: &str) -> Result<OutlineResult, ParseError> {
    let file = syntax::parse(source)?;
    let lines = LineIndex::new(source);
    Ok(produce_outline(&file, &lines))
}
