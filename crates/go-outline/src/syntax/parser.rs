//! Tolerant recursive-descent parser for Go top-level declarations.
//!
//! Only the declaration grammar is parsed: package clause, imports,
//! `type`/`const`/`var` groups, and `func` declarations. Function bodies,
//! initializer expressions, generic parameter lists, and array lengths are
//! skipped with bracket-depth tracking. Unrecognized tokens are consumed
//! and ignored so one bad construct never poisons the rest of the file;
//! the two hard failures are a missing package clause and unbalanced
//! grouping at end of file.

use crate::syntax::ParseError;
use crate::syntax::ast::{
    Decl, DocComment, Field, FuncDecl, ImportSpec, InterfaceItem, MethodElem, Signature,
    SourceFile, Span, TypeDecl, TypeExpr, TypeSpec, ValueDecl, ValueKeyword, ValueSpec,
};
use crate::syntax::kind::SyntaxKind;
use crate::syntax::lexer::{Lexer, Token};

pub(crate) struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    src_len: usize,
    /// End offset of the last significant (non-trivia) token consumed.
    last_end: usize,
    last_kind: SyntaxKind,
    unterminated: bool,
}

enum Candidate {
    /// A lone type expression; may turn out to be a parameter name.
    Bare(TypeExpr, Span),
    Named { name: String, ty: TypeExpr, span: Span },
}

fn is_type_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Ident
            | SyntaxKind::Star
            | SyntaxKind::LBracket
            | SyntaxKind::KwMap
            | SyntaxKind::KwChan
            | SyntaxKind::KwFunc
            | SyntaxKind::KwStruct
            | SyntaxKind::KwInterface
            | SyntaxKind::Arrow
            | SyntaxKind::Ellipsis
    )
}

/// Token kinds that suppress Go's implicit statement termination when they
/// end a line inside an initializer expression.
fn continues_line(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Comma
            | SyntaxKind::Eq
            | SyntaxKind::Dot
            | SyntaxKind::Star
            | SyntaxKind::Arrow
            | SyntaxKind::Error
    )
}

fn strip_comment(text: &str) -> Vec<String> {
    if let Some(rest) = text.strip_prefix("//") {
        vec![rest.strip_prefix(' ').unwrap_or(rest).to_string()]
    } else {
        let body = text
            .strip_prefix("/*")
            .and_then(|t| t.strip_suffix("*/"))
            .unwrap_or(text);
        body.split('\n').map(|line| line.trim().to_string()).collect()
    }
}

fn unquote(raw: &str) -> String {
    raw.trim_matches(|c| c == '"' || c == '`').to_string()
}

impl<'a> Parser<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            tokens: Lexer::new(source).collect(),
            pos: 0,
            src_len: source.len(),
            last_end: 0,
            last_kind: SyntaxKind::Eof,
            unterminated: false,
        }
    }

    pub(crate) fn parse_file(mut self) -> Result<SourceFile, ParseError> {
        self.skip_separators();
        if !self.at(SyntaxKind::KwPackage) {
            return Err(ParseError::MissingPackageClause);
        }
        self.bump();
        self.skip_space();
        if !self.at(SyntaxKind::Ident) {
            return Err(ParseError::MissingPackageName);
        }
        let package = self.bump_text();

        let mut imports = Vec::new();
        let mut decls = Vec::new();
        loop {
            self.skip_separators();
            match self.peek() {
                SyntaxKind::Eof => break,
                SyntaxKind::KwImport => self.parse_import_decl(&mut imports),
                SyntaxKind::KwType => decls.push(Decl::Type(self.parse_type_decl())),
                SyntaxKind::KwConst | SyntaxKind::KwVar => {
                    decls.push(Decl::Value(self.parse_value_decl()));
                }
                SyntaxKind::KwFunc => {
                    if let Some(func) = self.parse_func_decl() {
                        decls.push(Decl::Func(func));
                    }
                }
                _ => self.bump(),
            }
        }
        if self.unterminated {
            return Err(ParseError::UnexpectedEof);
        }
        Ok(SourceFile {
            package,
            imports,
            decls,
        })
    }

    // --- token plumbing -------------------------------------------------

    fn peek(&self) -> SyntaxKind {
        self.tokens.get(self.pos).map_or(SyntaxKind::Eof, |t| t.kind)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.peek() == kind
    }

    fn cur_start(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.src_len, |t| t.span.start)
    }

    fn bump(&mut self) {
        if let Some(tok) = self.tokens.get(self.pos) {
            if !tok.kind.is_trivia() {
                self.last_end = tok.span.end;
                self.last_kind = tok.kind;
            }
            self.pos += 1;
        }
    }

    fn bump_text(&mut self) -> String {
        let text = self
            .tokens
            .get(self.pos)
            .map(|t| t.text.to_string())
            .unwrap_or_default();
        self.bump();
        text
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skip spaces and block comments on the current line. Used where Go's
    /// grammar is newline-sensitive (result lists, spec terminators).
    fn skip_space(&mut self) {
        while matches!(self.peek(), SyntaxKind::Space | SyntaxKind::BlockComment) {
            self.pos += 1;
        }
    }

    fn skip_trivia(&mut self) {
        while self.peek().is_trivia() {
            self.pos += 1;
        }
    }

    fn skip_separators(&mut self) {
        while self.peek().is_trivia() || self.at(SyntaxKind::Semicolon) {
            self.pos += 1;
        }
    }

    /// Consume a balanced bracket pair starting at the current `open`
    /// token. Strings and comments are single tokens, so brackets inside
    /// them cannot confuse the depth count.
    fn skip_balanced(&mut self, open: SyntaxKind, close: SyntaxKind) {
        self.bump();
        let mut depth = 1u32;
        while depth > 0 {
            let kind = self.peek();
            if kind == SyntaxKind::Eof {
                self.unterminated = true;
                return;
            }
            if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
            }
            self.bump();
        }
    }

    // --- doc comments ---------------------------------------------------

    /// Collect the comment group directly above the current token, Go
    /// doc-comment style: each comment alone on its line, no blank line
    /// between the group and the declaration. A trailing comment after
    /// code on the previous line does not bind.
    fn doc_before(&self) -> Option<DocComment> {
        let mut lines: Vec<String> = Vec::new();
        let mut i = self.pos;
        while i > 0 && self.tokens[i - 1].kind == SyntaxKind::Space {
            i -= 1;
        }
        if i == 0 || self.tokens[i - 1].kind != SyntaxKind::Newline {
            return None;
        }
        i -= 1;
        loop {
            let mut j = i;
            while j > 0 && self.tokens[j - 1].kind == SyntaxKind::Space {
                j -= 1;
            }
            if j == 0 {
                break;
            }
            let tok = self.tokens[j - 1];
            if !matches!(
                tok.kind,
                SyntaxKind::LineComment | SyntaxKind::BlockComment
            ) {
                break;
            }
            let mut k = j - 1;
            while k > 0 && self.tokens[k - 1].kind == SyntaxKind::Space {
                k -= 1;
            }
            if k > 0 && self.tokens[k - 1].kind != SyntaxKind::Newline {
                break;
            }
            for line in strip_comment(tok.text).into_iter().rev() {
                lines.insert(0, line);
            }
            if k == 0 {
                break;
            }
            i = k - 1;
        }
        if lines.is_empty() {
            None
        } else {
            Some(DocComment { lines })
        }
    }

    // --- declarations ---------------------------------------------------

    fn parse_import_decl(&mut self, out: &mut Vec<ImportSpec>) {
        self.bump();
        self.skip_space();
        if self.at(SyntaxKind::LParen) {
            self.bump();
            loop {
                self.skip_separators();
                match self.peek() {
                    SyntaxKind::RParen => {
                        self.bump();
                        break;
                    }
                    SyntaxKind::Eof => {
                        self.unterminated = true;
                        break;
                    }
                    _ => {
                        if !self.parse_import_spec(out) {
                            self.bump();
                        }
                    }
                }
            }
        } else {
            self.parse_import_spec(out);
        }
    }

    fn parse_import_spec(&mut self, out: &mut Vec<ImportSpec>) -> bool {
        let alias = match self.peek() {
            SyntaxKind::Ident => Some(self.bump_text()),
            SyntaxKind::Dot => {
                self.bump();
                Some(".".to_string())
            }
            _ => None,
        };
        self.skip_space();
        match self.peek() {
            SyntaxKind::String | SyntaxKind::RawString => {
                let raw = self.bump_text();
                out.push(ImportSpec {
                    alias,
                    path: unquote(&raw),
                });
                true
            }
            _ => alias.is_some(),
        }
    }

    fn parse_type_decl(&mut self) -> TypeDecl {
        let doc = self.doc_before();
        let start = self.cur_start();
        self.bump();
        self.skip_space();
        let mut specs = Vec::new();
        if self.at(SyntaxKind::LParen) {
            self.bump();
            loop {
                self.skip_separators();
                match self.peek() {
                    SyntaxKind::RParen => {
                        self.bump();
                        break;
                    }
                    SyntaxKind::Eof => {
                        self.unterminated = true;
                        break;
                    }
                    SyntaxKind::Ident => {
                        let spec_doc = self.doc_before();
                        if let Some(spec) = self.parse_type_spec(spec_doc) {
                            specs.push(spec);
                        }
                    }
                    _ => self.bump(),
                }
            }
        } else if let Some(spec) = self.parse_type_spec(None) {
            specs.push(spec);
        }
        TypeDecl {
            doc,
            specs,
            span: Span::new(start, self.last_end),
        }
    }

    fn parse_type_spec(&mut self, doc: Option<DocComment>) -> Option<TypeSpec> {
        if !self.at(SyntaxKind::Ident) {
            return None;
        }
        let start = self.cur_start();
        let name = self.bump_text();
        self.skip_space();
        if self.at(SyntaxKind::LBracket) {
            // generic type parameters
            self.skip_balanced(SyntaxKind::LBracket, SyntaxKind::RBracket);
            self.skip_space();
        }
        self.eat(SyntaxKind::Eq); // alias form `type A = B`
        self.skip_space();
        let ty = if is_type_start(self.peek()) {
            self.parse_type()
        } else {
            TypeExpr::Unknown
        };
        Some(TypeSpec {
            doc,
            name,
            ty,
            span: Span::new(start, self.last_end),
        })
    }

    fn parse_value_decl(&mut self) -> ValueDecl {
        let doc = self.doc_before();
        let start = self.cur_start();
        let keyword = if self.at(SyntaxKind::KwConst) {
            ValueKeyword::Const
        } else {
            ValueKeyword::Var
        };
        self.bump();
        self.skip_space();
        let mut specs = Vec::new();
        if self.at(SyntaxKind::LParen) {
            self.bump();
            loop {
                self.skip_separators();
                match self.peek() {
                    SyntaxKind::RParen => {
                        self.bump();
                        break;
                    }
                    SyntaxKind::Eof => {
                        self.unterminated = true;
                        break;
                    }
                    SyntaxKind::Ident => specs.push(self.parse_value_spec()),
                    _ => self.bump(),
                }
            }
        } else if self.at(SyntaxKind::Ident) {
            specs.push(self.parse_value_spec());
        }
        ValueDecl {
            keyword,
            doc,
            specs,
            span: Span::new(start, self.last_end),
        }
    }

    fn parse_value_spec(&mut self) -> ValueSpec {
        let start = self.cur_start();
        let mut names = vec![self.bump_text()];
        loop {
            self.skip_space();
            if !self.at(SyntaxKind::Comma) {
                break;
            }
            self.bump();
            self.skip_space();
            if self.at(SyntaxKind::Ident) {
                names.push(self.bump_text());
            } else {
                break;
            }
        }
        self.skip_space();
        let ty = if is_type_start(self.peek()) {
            Some(self.parse_type())
        } else {
            None
        };
        self.skip_space();
        if self.eat(SyntaxKind::Eq) {
            self.skip_initializer();
        }
        ValueSpec {
            names,
            ty,
            span: Span::new(start, self.last_end),
        }
    }

    /// Consume an initializer expression through its logical end: a
    /// newline at bracket depth zero (unless the previous token keeps the
    /// statement open), a semicolon, or the closing token of an enclosing
    /// group.
    fn skip_initializer(&mut self) {
        let mut depth = 0u32;
        loop {
            match self.peek() {
                SyntaxKind::Eof => break,
                SyntaxKind::LParen | SyntaxKind::LBracket | SyntaxKind::LBrace => {
                    depth += 1;
                    self.bump();
                }
                SyntaxKind::RParen | SyntaxKind::RBracket | SyntaxKind::RBrace => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                    self.bump();
                }
                SyntaxKind::Semicolon if depth == 0 => break,
                SyntaxKind::Newline if depth == 0 => {
                    if continues_line(self.last_kind) {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                _ => self.bump(),
            }
        }
    }

    fn parse_func_decl(&mut self) -> Option<FuncDecl> {
        let doc = self.doc_before();
        let start = self.cur_start();
        self.bump();
        self.skip_space();
        let receiver = if self.at(SyntaxKind::LParen) {
            let mut fields = self.parse_paren_field_list();
            if fields.is_empty() {
                None
            } else {
                Some(fields.remove(0))
            }
        } else {
            None
        };
        self.skip_space();
        if !self.at(SyntaxKind::Ident) {
            // damaged declaration; drop it but keep scanning the file
            self.skip_decl_remainder();
            return None;
        }
        let name = self.bump_text();
        self.skip_space();
        if self.at(SyntaxKind::LBracket) {
            // generic type parameters
            self.skip_balanced(SyntaxKind::LBracket, SyntaxKind::RBracket);
            self.skip_space();
        }
        let params = if self.at(SyntaxKind::LParen) {
            self.parse_paren_field_list()
        } else {
            Vec::new()
        };
        let results = self.parse_results();
        self.skip_space();
        if self.at(SyntaxKind::LBrace) {
            self.skip_balanced(SyntaxKind::LBrace, SyntaxKind::RBrace);
        }
        Some(FuncDecl {
            doc,
            name,
            receiver,
            sig: Signature { params, results },
            span: Span::new(start, self.last_end),
        })
    }

    fn skip_decl_remainder(&mut self) {
        loop {
            match self.peek() {
                SyntaxKind::Eof | SyntaxKind::Newline | SyntaxKind::Semicolon => break,
                SyntaxKind::LBrace => {
                    self.skip_balanced(SyntaxKind::LBrace, SyntaxKind::RBrace);
                    break;
                }
                SyntaxKind::LParen => self.skip_balanced(SyntaxKind::LParen, SyntaxKind::RParen),
                SyntaxKind::LBracket => {
                    self.skip_balanced(SyntaxKind::LBracket, SyntaxKind::RBracket)
                }
                _ => self.bump(),
            }
        }
    }

    // --- types and field lists ------------------------------------------

    /// Results must sit on the same line as the closing parenthesis of the
    /// parameter list, so only inline trivia is skipped before deciding.
    fn parse_results(&mut self) -> Vec<Field> {
        self.skip_space();
        match self.peek() {
            SyntaxKind::LParen => self.parse_paren_field_list(),
            kind if is_type_start(kind) => {
                let start = self.cur_start();
                let ty = self.parse_type();
                vec![Field {
                    names: Vec::new(),
                    ty: Some(ty),
                    span: Span::new(start, self.last_end),
                }]
            }
            _ => Vec::new(),
        }
    }

    fn parse_paren_field_list(&mut self) -> Vec<Field> {
        self.bump();
        let mut candidates = Vec::new();
        loop {
            self.skip_trivia();
            match self.peek() {
                SyntaxKind::RParen => {
                    self.bump();
                    break;
                }
                SyntaxKind::RBrace => break, // unbalanced, bail to enclosing level
                SyntaxKind::Eof => {
                    self.unterminated = true;
                    break;
                }
                SyntaxKind::Comma | SyntaxKind::Semicolon => self.bump(),
                _ => candidates.push(self.parse_field_candidate()),
            }
        }
        resolve_fields(candidates)
    }

    fn parse_field_candidate(&mut self) -> Candidate {
        let start = self.cur_start();
        if self.at(SyntaxKind::Ident) {
            let name = self.bump_text();
            self.skip_space();
            match self.peek() {
                SyntaxKind::Dot => {
                    let ty = self.parse_type_after_ident(name);
                    Candidate::Bare(ty, Span::new(start, self.last_end))
                }
                kind if is_type_start(kind) => {
                    let ty = self.parse_type();
                    Candidate::Named {
                        name,
                        ty,
                        span: Span::new(start, self.last_end),
                    }
                }
                _ => Candidate::Bare(TypeExpr::Ident(name), Span::new(start, self.last_end)),
            }
        } else {
            let ty = self.parse_type();
            Candidate::Bare(ty, Span::new(start, self.last_end))
        }
    }

    /// Total over all inputs: anything unrecognized degrades to
    /// `TypeExpr::Unknown`. Structural closers are left unconsumed so an
    /// enclosing list parser can recover.
    fn parse_type(&mut self) -> TypeExpr {
        self.skip_space();
        match self.peek() {
            SyntaxKind::Star => {
                self.bump();
                TypeExpr::Pointer(Box::new(self.parse_type()))
            }
            SyntaxKind::Ellipsis => {
                self.bump();
                TypeExpr::Variadic(Box::new(self.parse_type()))
            }
            SyntaxKind::Arrow => {
                self.bump();
                self.skip_space();
                if self.eat(SyntaxKind::KwChan) {
                    TypeExpr::Chan(Box::new(self.parse_type()))
                } else {
                    TypeExpr::Unknown
                }
            }
            SyntaxKind::KwChan => {
                self.bump();
                self.skip_space();
                self.eat(SyntaxKind::Arrow);
                TypeExpr::Chan(Box::new(self.parse_type()))
            }
            SyntaxKind::LBracket => {
                // slice or array; a fixed length is skipped, not preserved
                self.skip_balanced(SyntaxKind::LBracket, SyntaxKind::RBracket);
                TypeExpr::Slice(Box::new(self.parse_type()))
            }
            SyntaxKind::KwMap => {
                self.bump();
                self.skip_space();
                if !self.eat(SyntaxKind::LBracket) {
                    return TypeExpr::Unknown;
                }
                let key = self.parse_type();
                self.skip_space();
                self.eat(SyntaxKind::RBracket);
                let value = self.parse_type();
                TypeExpr::Map(Box::new(key), Box::new(value))
            }
            SyntaxKind::KwFunc => {
                self.bump();
                self.skip_space();
                let params = if self.at(SyntaxKind::LParen) {
                    self.parse_paren_field_list()
                } else {
                    Vec::new()
                };
                let results = self.parse_results();
                TypeExpr::Func(Box::new(Signature { params, results }))
            }
            SyntaxKind::KwStruct => {
                self.bump();
                self.skip_space();
                let fields = if self.at(SyntaxKind::LBrace) {
                    self.parse_struct_body()
                } else {
                    Vec::new()
                };
                TypeExpr::Struct(fields)
            }
            SyntaxKind::KwInterface => {
                self.bump();
                self.skip_space();
                let items = if self.at(SyntaxKind::LBrace) {
                    self.parse_interface_body()
                } else {
                    Vec::new()
                };
                TypeExpr::Interface(items)
            }
            SyntaxKind::Ident => {
                let name = self.bump_text();
                self.parse_type_after_ident(name)
            }
            SyntaxKind::LParen => {
                // parenthesized type, structure not preserved
                self.skip_balanced(SyntaxKind::LParen, SyntaxKind::RParen);
                TypeExpr::Unknown
            }
            SyntaxKind::RParen
            | SyntaxKind::RBrace
            | SyntaxKind::RBracket
            | SyntaxKind::Comma
            | SyntaxKind::Newline
            | SyntaxKind::Semicolon
            | SyntaxKind::Eof => TypeExpr::Unknown,
            _ => {
                self.bump();
                TypeExpr::Unknown
            }
        }
    }

    /// Continue a type that began with an already-consumed identifier:
    /// `pkg.Name` selector chains, or a generic instantiation (which loses
    /// its structure).
    fn parse_type_after_ident(&mut self, name: String) -> TypeExpr {
        let mut ty = TypeExpr::Ident(name);
        loop {
            self.skip_space();
            match self.peek() {
                SyntaxKind::Dot => {
                    self.bump();
                    self.skip_space();
                    if self.at(SyntaxKind::Ident) {
                        let selector = self.bump_text();
                        ty = TypeExpr::Qualified(Box::new(ty), selector);
                    } else {
                        return TypeExpr::Unknown;
                    }
                }
                SyntaxKind::LBracket => {
                    self.skip_balanced(SyntaxKind::LBracket, SyntaxKind::RBracket);
                    return TypeExpr::Unknown;
                }
                _ => return ty,
            }
        }
    }

    fn parse_struct_body(&mut self) -> Vec<Field> {
        self.bump();
        let mut fields = Vec::new();
        loop {
            self.skip_separators();
            match self.peek() {
                SyntaxKind::RBrace => {
                    self.bump();
                    break;
                }
                SyntaxKind::Eof => {
                    self.unterminated = true;
                    break;
                }
                SyntaxKind::Ident => fields.push(self.parse_struct_field()),
                kind if is_type_start(kind) => {
                    // embedded field such as `*pkg.Reader`
                    let start = self.cur_start();
                    let ty = self.parse_type();
                    self.finish_struct_field_line();
                    fields.push(Field {
                        names: Vec::new(),
                        ty: Some(ty),
                        span: Span::new(start, self.last_end),
                    });
                }
                _ => self.bump(),
            }
        }
        fields
    }

    fn parse_struct_field(&mut self) -> Field {
        let start = self.cur_start();
        let first = self.bump_text();
        self.skip_space();
        match self.peek() {
            SyntaxKind::Comma => {
                let mut names = vec![first];
                while self.eat(SyntaxKind::Comma) {
                    self.skip_space();
                    if self.at(SyntaxKind::Ident) {
                        names.push(self.bump_text());
                        self.skip_space();
                    } else {
                        break;
                    }
                }
                let ty = if is_type_start(self.peek()) {
                    Some(self.parse_type())
                } else {
                    None
                };
                self.finish_struct_field_line();
                Field {
                    names,
                    ty,
                    span: Span::new(start, self.last_end),
                }
            }
            SyntaxKind::Dot => {
                let ty = self.parse_type_after_ident(first);
                self.finish_struct_field_line();
                Field {
                    names: Vec::new(),
                    ty: Some(ty),
                    span: Span::new(start, self.last_end),
                }
            }
            kind if is_type_start(kind) => {
                let ty = self.parse_type();
                self.finish_struct_field_line();
                Field {
                    names: vec![first],
                    ty: Some(ty),
                    span: Span::new(start, self.last_end),
                }
            }
            _ => {
                // embedded plain identifier, possibly tagged
                self.finish_struct_field_line();
                Field {
                    names: Vec::new(),
                    ty: Some(TypeExpr::Ident(first)),
                    span: Span::new(start, self.last_end),
                }
            }
        }
    }

    fn finish_struct_field_line(&mut self) {
        self.skip_space();
        if matches!(self.peek(), SyntaxKind::String | SyntaxKind::RawString) {
            self.bump();
        }
    }

    fn parse_interface_body(&mut self) -> Vec<InterfaceItem> {
        self.bump();
        let mut items = Vec::new();
        loop {
            self.skip_separators();
            match self.peek() {
                SyntaxKind::RBrace => {
                    self.bump();
                    break;
                }
                SyntaxKind::Eof => {
                    self.unterminated = true;
                    break;
                }
                SyntaxKind::Ident => {
                    let start = self.cur_start();
                    let name = self.bump_text();
                    self.skip_space();
                    if self.at(SyntaxKind::LParen) {
                        let params = self.parse_paren_field_list();
                        let results = self.parse_results();
                        items.push(InterfaceItem::Method(MethodElem {
                            name,
                            sig: Signature { params, results },
                            span: Span::new(start, self.last_end),
                        }));
                    } else {
                        let ty = self.parse_type_after_ident(name);
                        items.push(InterfaceItem::Embedded(ty));
                    }
                }
                kind if is_type_start(kind) => {
                    let ty = self.parse_type();
                    items.push(InterfaceItem::Embedded(ty));
                }
                _ => self.bump(),
            }
        }
        items
    }
}

fn resolve_fields(candidates: Vec<Candidate>) -> Vec<Field> {
    let has_named = candidates
        .iter()
        .any(|c| matches!(c, Candidate::Named { .. }));
    let mut fields = Vec::new();
    if !has_named {
        // `(int, string)` — every entry is an unnamed type
        for candidate in candidates {
            if let Candidate::Bare(ty, span) = candidate {
                fields.push(Field {
                    names: Vec::new(),
                    ty: Some(ty),
                    span,
                });
            }
        }
        return fields;
    }
    // `(a, b int)` — bare identifiers accumulate as names for the next
    // entry that carries a type
    let mut pending: Vec<(String, Span)> = Vec::new();
    for candidate in candidates {
        match candidate {
            Candidate::Bare(TypeExpr::Ident(name), span) => pending.push((name, span)),
            Candidate::Bare(ty, span) => fields.push(Field {
                names: Vec::new(),
                ty: Some(ty),
                span,
            }),
            Candidate::Named { name, ty, span } => {
                let start = pending.first().map_or(span.start, |(_, s)| s.start);
                let mut names: Vec<String> = pending.drain(..).map(|(n, _)| n).collect();
                names.push(name);
                fields.push(Field {
                    names,
                    ty: Some(ty),
                    span: Span::new(start, span.end),
                });
            }
        }
    }
    for (name, span) in pending {
        fields.push(Field {
            names: Vec::new(),
            ty: Some(TypeExpr::Ident(name)),
            span,
        });
    }
    fields
}
