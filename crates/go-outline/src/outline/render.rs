//! Canonical text rendering for type expressions and field lists.
//!
//! `render_type` is total: every shape produces some string, with `?` as
//! the sentinel for anything unrecognized, so a single exotic type can
//! never abort outlining the rest of the file.

use crate::syntax::ast::{Field, Signature, TypeExpr};

pub fn render_type(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Ident(name) => name.clone(),
        TypeExpr::Qualified(qualifier, name) => format!("{}.{name}", render_type(qualifier)),
        TypeExpr::Pointer(inner) => format!("*{}", render_type(inner)),
        TypeExpr::Slice(elem) => format!("[]{}", render_type(elem)),
        TypeExpr::Map(key, value) => {
            format!("map[{}]{}", render_type(key), render_type(value))
        }
        TypeExpr::Chan(elem) => format!("chan {}", render_type(elem)),
        TypeExpr::Variadic(elem) => format!("...{}", render_type(elem)),
        // Inline composite shapes are opaque placeholders; their members
        // are not recursively rendered.
        TypeExpr::Interface(_) => "interface{}".to_string(),
        TypeExpr::Struct(_) => "struct{}".to_string(),
        TypeExpr::Func(_) => "func(...)".to_string(),
        TypeExpr::Unknown => "?".to_string(),
    }
}

pub fn render_type_opt(ty: Option<&TypeExpr>) -> String {
    ty.map(render_type).unwrap_or_default()
}

fn expand_entries(fields: &[Field]) -> Vec<String> {
    let mut parts = Vec::new();
    for field in fields {
        let type_str = render_type_opt(field.ty.as_ref());
        if field.names.is_empty() {
            parts.push(type_str);
        } else {
            for name in &field.names {
                parts.push(format!("{name} {type_str}"));
            }
        }
    }
    parts
}

/// Parameters are always parenthesized, one entry per declared name.
pub fn render_params(fields: &[Field]) -> String {
    if fields.is_empty() {
        return "()".to_string();
    }
    format!("({})", expand_entries(fields).join(", "))
}

/// Results keep Go's conventional asymmetry: nothing for zero results, a
/// bare ` T` for a single unnamed result, and a parenthesized list with a
/// leading space for everything else.
pub fn render_results(fields: &[Field]) -> String {
    if fields.is_empty() {
        return String::new();
    }
    if fields.len() == 1 && fields[0].names.is_empty() {
        return format!(" {}", render_type_opt(fields[0].ty.as_ref()));
    }
    format!(" ({})", expand_entries(fields).join(", "))
}

pub fn render_signature(sig: &Signature) -> String {
    format!("{}{}", render_params(&sig.params), render_results(&sig.results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::ast::Span;

    fn ident(name: &str) -> TypeExpr {
        TypeExpr::Ident(name.to_string())
    }

    fn field(names: &[&str], ty: TypeExpr) -> Field {
        Field {
            names: names.iter().map(|n| n.to_string()).collect(),
            ty: Some(ty),
            span: Span::new(0, 0),
        }
    }

    #[test]
    fn render_type_table() {
        let cases: Vec<(TypeExpr, &str)> = vec![
            (ident("int"), "int"),
            (
                TypeExpr::Qualified(Box::new(ident("io")), "Reader".to_string()),
                "io.Reader",
            ),
            (TypeExpr::Pointer(Box::new(ident("Server"))), "*Server"),
            (TypeExpr::Slice(Box::new(ident("byte"))), "[]byte"),
            (
                TypeExpr::Map(Box::new(ident("string")), Box::new(ident("int"))),
                "map[string]int",
            ),
            (TypeExpr::Chan(Box::new(ident("error"))), "chan error"),
            (TypeExpr::Variadic(Box::new(ident("any"))), "...any"),
            (TypeExpr::Struct(Vec::new()), "struct{}"),
            (TypeExpr::Interface(Vec::new()), "interface{}"),
            (TypeExpr::Func(Box::new(Signature::default())), "func(...)"),
            (TypeExpr::Unknown, "?"),
        ];
        for (ty, expected) in cases {
            assert_eq!(render_type(&ty), expected, "rendering {ty:?}");
        }
    }

    #[test]
    fn nested_types_render_recursively() {
        let ty = TypeExpr::Map(
            Box::new(ident("string")),
            Box::new(TypeExpr::Slice(Box::new(TypeExpr::Pointer(Box::new(
                TypeExpr::Qualified(Box::new(ident("pkg")), "T".to_string()),
            ))))),
        );
        assert_eq!(render_type(&ty), "map[string][]*pkg.T");
    }

    #[test]
    fn absent_type_renders_empty() {
        assert_eq!(render_type_opt(None), "");
    }

    #[test]
    fn params_empty() {
        assert_eq!(render_params(&[]), "()");
    }

    #[test]
    fn params_expand_per_name() {
        let fields = vec![field(&["a", "b"], ident("int")), field(&[], ident("string"))];
        assert_eq!(render_params(&fields), "(a int, b int, string)");
    }

    #[test]
    fn results_zero_renders_empty() {
        assert_eq!(render_results(&[]), "");
    }

    #[test]
    fn results_single_unnamed_has_no_parens() {
        let fields = vec![field(&[], ident("error"))];
        assert_eq!(render_results(&fields), " error");
    }

    #[test]
    fn results_multiple_are_parenthesized() {
        let fields = vec![field(&[], ident("string")), field(&[], ident("error"))];
        assert_eq!(render_results(&fields), " (string, error)");
    }

    #[test]
    fn results_single_named_is_parenthesized() {
        let fields = vec![field(&["err"], ident("error"))];
        assert_eq!(render_results(&fields), " (err error)");
    }

    #[test]
    fn rendering_is_deterministic() {
        let ty = TypeExpr::Slice(Box::new(TypeExpr::Map(
            Box::new(ident("string")),
            Box::new(TypeExpr::Unknown),
        )));
        assert_eq!(render_type(&ty), render_type(&ty));
        assert_eq!(render_type(&ty), "[]map[string]?");
    }
}
