pub mod docs;
pub mod render;
pub mod scanner;
pub mod types;

pub use scanner::{build_symbols, extract_imports, produce_outline};
pub use types::{OutlineResult, Symbol, SymbolKind};
