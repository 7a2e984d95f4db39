//! Declaration-level syntax tree for one Go source file.
//!
//! This is the immutable input the outline walker consumes: top-level
//! declarations only, with function bodies and initializer expressions
//! already discarded by the parser. Every node that can become an outline
//! symbol carries a byte `Span`; line numbers are resolved later through
//! `LineIndex`.

/// Half-open byte range into the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A doc comment bound to a declaration: marker-stripped comment lines,
/// in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub package: String,
    pub imports: Vec<ImportSpec>,
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Explicit alias, including the `.` and `_` markers when present.
    pub alias: Option<String>,
    /// Unquoted import path.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Type(TypeDecl),
    Value(ValueDecl),
    Func(FuncDecl),
}

/// A `type` declaration, single or parenthesized group. The span covers the
/// whole declaration including the group parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub doc: Option<DocComment>,
    pub specs: Vec<TypeSpec>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Doc bound to this spec inside a group; falls back to the group doc.
    pub doc: Option<DocComment>,
    pub name: String,
    pub ty: TypeExpr,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKeyword {
    Const,
    Var,
}

/// A `const` or `var` declaration, single or parenthesized group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDecl {
    pub keyword: ValueKeyword,
    pub doc: Option<DocComment>,
    pub specs: Vec<ValueSpec>,
    pub span: Span,
}

/// One name list inside a value declaration: `A, B int = 1, 2`. The span
/// covers names through the end of the initializer expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub names: Vec<String>,
    /// Explicit declared type; `None` when inferred from the initializer.
    pub ty: Option<TypeExpr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub doc: Option<DocComment>,
    pub name: String,
    /// Receiver field for methods; `None` for free functions.
    pub receiver: Option<Field>,
    pub sig: Signature,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

/// One field entry in a struct body, parameter list, or result list.
/// Embedded/anonymous entries have an empty name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: Option<TypeExpr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceItem {
    Method(MethodElem),
    /// Embedded interface reference or type-set element; carries no name
    /// and never becomes an outline child.
    Embedded(TypeExpr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodElem {
    pub name: String,
    pub sig: Signature,
    pub span: Span,
}

/// Closed sum of the type-expression shapes the renderer knows how to
/// print. Anything the parser cannot classify lands in `Unknown`, which
/// renders as the `?` sentinel rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `int`, `Config`, ...
    Ident(String),
    /// `pkg.Name` — qualifier rendered recursively.
    Qualified(Box<TypeExpr>, String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T` and `[N]T`; the fixed length is not preserved.
    Slice(Box<TypeExpr>),
    /// `map[K]V`
    Map(Box<TypeExpr>, Box<TypeExpr>),
    /// `chan T`, `chan<- T`, `<-chan T`; direction is not preserved.
    Chan(Box<TypeExpr>),
    /// `...T` trailing variadic parameter.
    Variadic(Box<TypeExpr>),
    /// Inline struct type. Field structure is kept for declared types
    /// (outline children) but renders opaquely as `struct{}`.
    Struct(Vec<Field>),
    /// Inline interface type; renders opaquely as `interface{}`.
    Interface(Vec<InterfaceItem>),
    /// Inline function type; renders opaquely as `func(...)`.
    Func(Box<Signature>),
    /// Anything else, generic instantiations included. Renders as `?`.
    Unknown,
}
