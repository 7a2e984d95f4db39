//! Walks the declaration tree of one file and assembles the outline.
//!
//! Symbols come out in source declaration order. Each declaration is
//! processed independently; an unclassifiable type shape degrades to
//! `SymbolKind::Type` rather than failing.

use tracing::debug;

use crate::outline::docs::{doc_summary, is_exported};
use crate::outline::render::{render_signature, render_type, render_type_opt};
use crate::outline::types::{OutlineResult, Symbol, SymbolKind};
use crate::syntax::ast::{
    Decl, Field, FuncDecl, ImportSpec, InterfaceItem, SourceFile, TypeDecl, TypeExpr, ValueDecl,
    ValueKeyword,
};
use crate::text_pos::LineIndex;

/// Build the whole-file outline. Stateless; one call per file.
pub fn produce_outline(file: &SourceFile, lines: &LineIndex) -> OutlineResult {
    let symbols = build_symbols(&file.decls, lines);
    debug!(
        "outlined package {}: {} imports, {} symbols",
        file.package,
        file.imports.len(),
        symbols.len()
    );
    OutlineResult {
        package: Some(file.package.clone()),
        imports: extract_imports(&file.imports),
        symbols: Some(symbols),
        error: None,
    }
}

/// Render import clauses in source order: the bare path, or `alias path`
/// when an explicit alias other than the `.` and `_` markers is present.
pub fn extract_imports(imports: &[ImportSpec]) -> Vec<String> {
    imports
        .iter()
        .map(|imp| match imp.alias.as_deref() {
            Some(alias) if alias != "." && alias != "_" => format!("{alias} {}", imp.path),
            _ => imp.path.clone(),
        })
        .collect()
}

pub fn build_symbols(decls: &[Decl], lines: &LineIndex) -> Vec<Symbol> {
    let mut symbols = Vec::new();
    for decl in decls {
        match decl {
            Decl::Type(type_decl) => collect_type_symbols(type_decl, lines, &mut symbols),
            Decl::Value(value_decl) => collect_value_symbols(value_decl, lines, &mut symbols),
            Decl::Func(func_decl) => symbols.push(func_symbol(func_decl, lines)),
        }
    }
    symbols
}

fn symbol(name: String, kind: SymbolKind, start_line: u32, end_line: u32) -> Symbol {
    let is_exported = is_exported(&name);
    Symbol {
        name,
        kind,
        start_line,
        end_line,
        signature: None,
        modifiers: Vec::new(),
        children: Vec::new(),
        docstring: None,
        is_exported,
    }
}

fn collect_type_symbols(decl: &TypeDecl, lines: &LineIndex, out: &mut Vec<Symbol>) {
    for spec in &decl.specs {
        // Prefer the doc bound to the spec inside a group, else the doc on
        // the enclosing declaration.
        let doc = spec.doc.as_ref().or(decl.doc.as_ref());
        // The span is the whole declaration, matching how grouped type
        // declarations have always been reported.
        let mut sym = symbol(
            spec.name.clone(),
            SymbolKind::Type,
            lines.line(decl.span.start),
            lines.line(decl.span.end),
        );
        sym.docstring = doc_summary(doc);
        match &spec.ty {
            TypeExpr::Struct(fields) => {
                sym.kind = SymbolKind::Struct;
                for field in fields {
                    for name in &field.names {
                        let mut child = symbol(
                            name.clone(),
                            SymbolKind::Field,
                            lines.line(field.span.start),
                            lines.line(field.span.end),
                        );
                        child.signature = Some(render_type_opt(field.ty.as_ref()));
                        sym.children.push(child);
                    }
                }
            }
            TypeExpr::Interface(items) => {
                sym.kind = SymbolKind::Interface;
                for item in items {
                    // Embedded references carry no method name and are not
                    // outline children.
                    if let InterfaceItem::Method(method) = item {
                        let mut child = symbol(
                            method.name.clone(),
                            SymbolKind::MethodStub,
                            lines.line(method.span.start),
                            lines.line(method.span.end),
                        );
                        child.signature = Some(render_signature(&method.sig));
                        sym.children.push(child);
                    }
                }
            }
            _ => {}
        }
        out.push(sym);
    }
}

fn collect_value_symbols(decl: &ValueDecl, lines: &LineIndex, out: &mut Vec<Symbol>) {
    let kind = match decl.keyword {
        ValueKeyword::Const => SymbolKind::Constant,
        ValueKeyword::Var => SymbolKind::Variable,
    };
    for spec in &decl.specs {
        for name in &spec.names {
            if name == "_" {
                continue;
            }
            let mut sym = symbol(
                name.clone(),
                kind,
                lines.line(spec.span.start),
                lines.line(spec.span.end),
            );
            sym.docstring = doc_summary(decl.doc.as_ref());
            sym.signature = spec.ty.as_ref().map(render_type);
            out.push(sym);
        }
    }
}

fn func_symbol(decl: &FuncDecl, lines: &LineIndex) -> Symbol {
    let mut sym = symbol(
        decl.name.clone(),
        SymbolKind::Function,
        lines.line(decl.span.start),
        lines.line(decl.span.end),
    );
    sym.docstring = doc_summary(decl.doc.as_ref());
    let rendered = render_signature(&decl.sig);
    match &decl.receiver {
        Some(receiver) => {
            let receiver_type = render_type_opt(receiver.ty.as_ref());
            sym.kind = SymbolKind::Method;
            sym.signature = Some(format!("({receiver_type}) {}{rendered}", decl.name));
            // Display name drops the pointer from the receiver so both
            // value and pointer methods group under the same type.
            sym.name = format!("{}.{}", receiver_base_name(receiver), decl.name);
            sym.is_exported = is_exported(&decl.name);
        }
        None => {
            sym.signature = Some(rendered);
        }
    }
    sym
}

fn receiver_base_name(receiver: &Field) -> String {
    match receiver.ty.as_ref() {
        Some(TypeExpr::Pointer(inner)) => render_type(inner),
        other => render_type_opt(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax;
    use crate::text_pos::LineIndex;

    fn outline(source: &str) -> Vec<Symbol> {
        let file = syntax::parse(source).expect("parse should succeed");
        build_symbols(&file.decls, &LineIndex::new(source))
    }

    #[test]
    fn method_name_is_dot_qualified_without_pointer() {
        let symbols = outline("package main\n\nfunc (s *Server) Start() error {\n}\n");
        assert_eq!(symbols[0].name, "Server.Start");
        assert_eq!(symbols[0].kind, SymbolKind::Method);
        assert_eq!(
            symbols[0].signature.as_deref(),
            Some("(*Server) Start() error")
        );
        assert!(symbols[0].is_exported);
    }

    #[test]
    fn value_receiver_method() {
        let symbols = outline("package main\n\nfunc (p Point) Norm() float64 {\n}\n");
        assert_eq!(symbols[0].name, "Point.Norm");
        assert_eq!(symbols[0].signature.as_deref(), Some("(Point) Norm() float64"));
    }

    #[test]
    fn discard_names_are_skipped() {
        let symbols = outline("package main\n\nvar _, keep = 1, 2\n");
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "keep");
        assert_eq!(symbols[0].kind, SymbolKind::Variable);
    }

    #[test]
    fn unclassifiable_type_degrades_to_generic() {
        let symbols = outline("package main\n\ntype Handler func(int) error\n");
        assert_eq!(symbols[0].kind, SymbolKind::Type);
        assert!(symbols[0].children.is_empty());
        assert!(symbols[0].signature.is_none());
    }

    #[test]
    fn aliased_imports_render_with_alias() {
        let file = syntax::parse(
            "package main\n\nimport (\n\tq \"strings\"\n\t\"os\"\n\t. \"math\"\n\t_ \"embed\"\n)\n",
        )
        .expect("parse should succeed");
        assert_eq!(
            extract_imports(&file.imports),
            vec!["q strings", "os", "math", "embed"]
        );
    }

    #[test]
    fn source_order_is_preserved() {
        let src = "package main\n\nvar b = 2\n\nfunc A() {}\n\ntype C struct{}\n\nconst a = 1\n";
        let names: Vec<String> = outline(src).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["b", "A", "C", "a"]);
    }
}
