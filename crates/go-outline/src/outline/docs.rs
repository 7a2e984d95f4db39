//! Doc-comment summarization and the export rule.

use crate::syntax::ast::DocComment;

/// First line of the joined doc-comment text, trimmed. Absent or empty
/// docs yield `None`.
pub fn doc_summary(doc: Option<&DocComment>) -> Option<String> {
    let doc = doc?;
    if doc.lines.is_empty() {
        return None;
    }
    let text = doc.lines.join("\n");
    let first = text.split('\n').next().unwrap_or("").trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

/// Go's visibility rule: exported iff the name starts with an uppercase
/// ASCII letter. Applied uniformly to every declaration category.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
