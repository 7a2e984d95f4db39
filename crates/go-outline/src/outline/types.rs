use serde::Serialize;

/// Classification of one outline entry. `MethodStub` (an interface
/// requirement) serializes with the same tag as `Method` (a bound
/// implementation), matching the wire format consumers already parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Method,
    Struct,
    Interface,
    Type,
    Field,
    #[serde(rename = "method")]
    MethodStub,
    Constant,
    Variable,
}

/// One entry in the file outline. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// 1-based source line span of the declaration.
    pub start_line: u32,
    pub end_line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Reserved for future use; no current rule populates it.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Symbol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
    pub is_exported: bool,
}

/// The whole-file result. A fatal error and an outline are mutually
/// exclusive: error results carry nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<Vec<Symbol>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OutlineResult {
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            package: None,
            imports: Vec::new(),
            symbols: None,
            error: Some(message.into()),
        }
    }
}
