use expect_test::expect;
use go_outline::{ParseError, Symbol, outline_source};

fn outline_json(source: &str) -> String {
    let result = outline_source(source).expect("outline should succeed");
    serde_json::to_string(&result).expect("serialize")
}

fn symbols(source: &str) -> Vec<Symbol> {
    outline_source(source)
        .expect("outline should succeed")
        .symbols
        .expect("symbols present")
}

#[test]
fn struct_with_doc_and_fields() {
    let src = "package config\n\n// Config holds application configuration.\ntype Config struct {\n\tHost string\n\tPort int\n}\n";
    expect![[r#"{"package":"config","symbols":[{"name":"Config","kind":"struct","startLine":4,"endLine":7,"children":[{"name":"Host","kind":"field","startLine":5,"endLine":5,"signature":"string","isExported":true},{"name":"Port","kind":"field","startLine":6,"endLine":6,"signature":"int","isExported":true}],"docstring":"Config holds application configuration.","isExported":true}]}"#]]
    .assert_eq(&outline_json(src));
}

#[test]
fn bound_method_gets_receiver_qualified_name() {
    let src = "package server\n\nfunc (s *Server) Start() error {\n\treturn nil\n}\n";
    expect![[r#"{"package":"server","symbols":[{"name":"Server.Start","kind":"method","startLine":3,"endLine":5,"signature":"(*Server) Start() error","isExported":true}]}"#]]
    .assert_eq(&outline_json(src));
}

#[test]
fn interface_children_skip_embedded_entries() {
    let src = "package store\n\n// Store persists key/value pairs.\ntype Store interface {\n\tGet(key string) (string, error)\n\tio.Closer\n\tClose() error\n}\n";
    expect![[r#"{"package":"store","symbols":[{"name":"Store","kind":"interface","startLine":4,"endLine":8,"children":[{"name":"Get","kind":"method","startLine":5,"endLine":5,"signature":"(key string) (string, error)","isExported":true},{"name":"Close","kind":"method","startLine":7,"endLine":7,"signature":"() error","isExported":true}],"docstring":"Store persists key/value pairs.","isExported":true}]}"#]]
    .assert_eq(&outline_json(src));
}

#[test]
fn imports_keep_order_and_aliases() {
    let src = "package app\n\nimport (\n\t\"fmt\"\n\tq \"strings\"\n\t. \"math\"\n\t_ \"embed\"\n)\n";
    expect![[r#"{"package":"app","imports":["fmt","q strings","math","embed"],"symbols":[]}"#]]
        .assert_eq(&outline_json(src));
}

#[test]
fn value_declarations_use_group_doc_and_spec_spans() {
    let src = "package values\n\nconst (\n\t// MaxRetries bounds reconnect attempts.\n\tMaxRetries int = 5\n\tminDelay       = 10\n)\n\n// Debug enables verbose output.\nvar Debug bool\n";
    let syms = symbols(src);
    assert_eq!(syms.len(), 3);

    // Per-spec comments inside a const group do not bind; only the doc on
    // the whole declaration does.
    assert_eq!(syms[0].name, "MaxRetries");
    assert_eq!(syms[0].docstring, None);
    assert_eq!(syms[0].signature.as_deref(), Some("int"));
    assert_eq!((syms[0].start_line, syms[0].end_line), (5, 5));
    assert!(syms[0].is_exported);

    assert_eq!(syms[1].name, "minDelay");
    assert_eq!(syms[1].signature, None);
    assert!(!syms[1].is_exported);

    assert_eq!(syms[2].name, "Debug");
    assert_eq!(
        syms[2].docstring.as_deref(),
        Some("Debug enables verbose output.")
    );
    assert_eq!(syms[2].signature.as_deref(), Some("bool"));
}

#[test]
fn functions_render_full_signatures() {
    let src = "package funcs\n\n// Split returns both halves.\nfunc Split(s string, sep string) (left, right string) {\n\treturn \"\", \"\"\n}\n\nfunc fetch(urls ...string) {}\n";
    let syms = symbols(src);
    assert_eq!(syms.len(), 2);
    assert_eq!(
        syms[0].signature.as_deref(),
        Some("(s string, sep string) (left string, right string)")
    );
    assert_eq!(syms[0].docstring.as_deref(), Some("Split returns both halves."));
    assert_eq!(syms[1].signature.as_deref(), Some("(urls ...string)"));
    assert!(!syms[1].is_exported);
}

#[test]
fn exotic_type_shapes_never_fail() {
    let src = "package weird\n\ntype Bag struct {\n\tIn <-chan int\n\tOut chan<- string\n\tFns []func(int) error\n\tM map[string]*Config\n\tInline struct{ x int }\n}\n\nvar done chan struct{}\n\nvar l List[int]\n";
    let syms = symbols(src);
    let bag = &syms[0];
    let sigs: Vec<&str> = bag
        .children
        .iter()
        .map(|c| c.signature.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(
        sigs,
        vec![
            "chan int",
            "chan string",
            "[]func(...)",
            "map[string]*Config",
            "struct{}",
        ]
    );
    assert_eq!(syms[1].signature.as_deref(), Some("chan struct{}"));
    // Generic instantiations degrade to the sentinel instead of failing.
    assert_eq!(syms[2].signature.as_deref(), Some("?"));
}

#[test]
fn symbol_order_matches_source_order() {
    let src = "package order\n\nvar b = 2\n\nfunc A() {}\n\ntype C struct{}\n\nconst a = 1\n\nfunc (C) m() {}\n";
    let syms = symbols(src);
    let names: Vec<&str> = syms.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["b", "A", "C", "a", "C.m"]);
    let mut last = 0;
    for sym in &syms {
        assert!(sym.start_line >= last, "symbols out of order");
        last = sym.start_line;
    }
}

#[test]
fn visibility_law_holds_across_kinds() {
    let src = "package vis\n\ntype T struct {\n\tPub int\n\tpriv int\n}\n\ntype i interface {\n\tDo()\n\tstop()\n}\n\nconst Max = 1\n\nvar min = 2\n\nfunc Go() {}\n\nfunc no() {}\n";
    fn check(symbols: &[Symbol]) {
        for sym in symbols {
            let expected = sym
                .name
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_uppercase());
            assert_eq!(
                sym.is_exported, expected,
                "visibility mismatch for {}",
                sym.name
            );
            check(&sym.children);
        }
    }
    check(&symbols(src));
}

#[test]
fn composite_member_completeness() {
    let src = "package members\n\ntype Rec struct {\n\tA int\n\tB, C string\n\tio.Reader\n\td bool\n}\n";
    let syms = symbols(src);
    let children: Vec<&str> = syms[0].children.iter().map(|c| c.name.as_str()).collect();
    // One child per named member, declaration order, embedded skipped.
    assert_eq!(children, vec!["A", "B", "C", "d"]);
    assert!(
        syms[0]
            .children
            .iter()
            .all(|c| c.kind == go_outline::SymbolKind::Field)
    );
}

#[test]
fn outline_is_deterministic() {
    let src = "package det\n\ntype X struct{ a map[string][]*Y }\n\nfunc (x *X) Do(n int) (bool, error) { return false, nil }\n";
    assert_eq!(outline_json(src), outline_json(src));
}

#[test]
fn empty_file_outline_has_no_symbols() {
    expect![[r#"{"package":"empty","symbols":[]}"#]]
        .assert_eq(&outline_json("package empty\n"));
}

#[test]
fn parse_failures_surface_as_errors() {
    assert_eq!(
        outline_source("func main() {}\n"),
        Err(ParseError::MissingPackageClause)
    );
    assert_eq!(
        outline_source("package broken\n\nfunc f() {\n"),
        Err(ParseError::UnexpectedEof)
    );
    let message = format!("parse error: {}", ParseError::MissingPackageClause);
    assert_eq!(message, "parse error: missing package clause");
}

#[test]
fn error_results_carry_nothing_else() {
    let result = go_outline::OutlineResult::from_error("parse error: boom");
    expect![[r#"{"error":"parse error: boom"}"#]]
        .assert_eq(&serde_json::to_string(&result).expect("serialize"));
}
