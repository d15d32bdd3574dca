#![forbid(unsafe_code)]

//! Docstring extraction from tree-sitter syntax trees
//!
//! The extractor parses a source unit with the Python grammar and walks the
//! tree depth-first, emitting the module node followed by every class and
//! function definition in the order their headers appear.

use crate::error::CheckError;
use crate::extract::{Docstring, DocstringNode, SourceUnit};
use crate::types::{OwnerKind, QuoteStyle};
use std::collections::HashSet;
use tree_sitter::{Node, Parser};

/// Extracts docstring-bearing definitions from Python source
///
/// Owns a tree-sitter parser, so one extractor is used per thread.
pub struct DocstringExtractor {
    parser: Parser,
}

impl std::fmt::Debug for DocstringExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocstringExtractor")
            .field("parser", &"<tree_sitter::Parser>")
            .finish()
    }
}

impl DocstringExtractor {
    /// Creates an extractor with the Python grammar loaded
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Grammar` if the grammar is incompatible with the
    /// linked tree-sitter runtime.
    pub fn new() -> Result<Self, CheckError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::language())
            .map_err(|e| CheckError::Grammar(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Extracts the module node and every class/function definition
    ///
    /// # Errors
    ///
    /// Returns `CheckError::Syntax` with the position of the first error node
    /// when the unit is not valid Python.
    pub fn extract(&mut self, unit: &SourceUnit) -> Result<Vec<DocstringNode>, CheckError> {
        let text = unit.text();
        let src = SourceText::new(text);

        let tree = self
            .parser
            .parse(text, None)
            .ok_or_else(|| CheckError::Syntax {
                label: unit.label().to_string(),
                line: 1,
                column: 1,
            })?;
        let root = tree.root_node();

        if root.has_error() {
            let (line, column) = first_error(root)
                .map(|node| src.position(node))
                .unwrap_or((1, 1));
            return Err(CheckError::Syntax {
                label: unit.label().to_string(),
                line,
                column,
            });
        }

        let mut nodes = Vec::new();

        let module_end = src.lines.len().saturating_sub(1);
        nodes.push(DocstringNode {
            owner_kind: OwnerKind::Module,
            name: String::new(),
            is_public: true,
            is_package: unit.label().is_package_init(),
            start_line: 1,
            start_column: 1,
            docstring: body_docstring(root, 0, module_end, &src),
        });

        let all = module_all(root, &src);
        visit(root, &Scope::Module { all: all.as_ref() }, &src, &mut nodes);

        Ok(nodes)
    }
}

/// Enclosing definition of the nodes being visited
enum Scope<'a> {
    Module { all: Option<&'a HashSet<String>> },
    Class { public: bool },
    Function,
}

impl Scope<'_> {
    fn is_public(&self, kind: OwnerKind, name: &str) -> bool {
        match self {
            Scope::Module { all: Some(all) } => all.contains(name),
            Scope::Module { all: None } => !name.starts_with('_'),
            Scope::Class { public } => {
                *public && (!name.starts_with('_') || (kind == OwnerKind::Method && is_magic(name)))
            }
            Scope::Function => false,
        }
    }
}

fn is_magic(name: &str) -> bool {
    name.len() > 4 && name.starts_with("__") && name.ends_with("__")
}

fn visit(node: Node<'_>, scope: &Scope<'_>, src: &SourceText<'_>, out: &mut Vec<DocstringNode>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "class_definition" => {
                let def = definition(child, OwnerKind::Class, scope, src);
                let public = def.is_public;
                out.push(def);
                if let Some(body) = child.child_by_field_name("body") {
                    visit(body, &Scope::Class { public }, src, out);
                }
            }
            "function_definition" => {
                let kind = match scope {
                    Scope::Class { .. } => OwnerKind::Method,
                    _ => OwnerKind::Function,
                };
                out.push(definition(child, kind, scope, src));
                if let Some(body) = child.child_by_field_name("body") {
                    visit(body, &Scope::Function, src, out);
                }
            }
            _ => visit(child, scope, src, out),
        }
    }
}

fn definition(
    node: Node<'_>,
    kind: OwnerKind,
    scope: &Scope<'_>,
    src: &SourceText<'_>,
) -> DocstringNode {
    let name = node
        .child_by_field_name("name")
        .map(|n| src.slice(n).to_string())
        .unwrap_or_default();
    let (start_line, start_column) = src.position(node);
    let docstring = node.child_by_field_name("body").and_then(|body| {
        body_docstring(
            body,
            node.start_position().row,
            node.end_position().row,
            src,
        )
    });

    DocstringNode {
        owner_kind: kind,
        is_public: scope.is_public(kind, &name),
        name,
        is_package: false,
        start_line,
        start_column,
        docstring,
    }
}

/// Returns the docstring of a module or block, if its first statement is a string literal
fn body_docstring(
    body: Node<'_>,
    owner_start_row: usize,
    owner_end_row: usize,
    src: &SourceText<'_>,
) -> Option<Docstring> {
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment")?;

    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return None;
    }
    let literal = first.named_child(0)?;
    if !matches!(literal.kind(), "string" | "concatenated_string") {
        return None;
    }

    Some(build_docstring(literal, owner_start_row, owner_end_row, src))
}

fn build_docstring(
    literal: Node<'_>,
    owner_start_row: usize,
    owner_end_row: usize,
    src: &SourceText<'_>,
) -> Docstring {
    let concatenated = literal.kind() == "concatenated_string";
    let first_part = if concatenated {
        let mut cursor = literal.walk();
        let part = literal
            .named_children(&mut cursor)
            .find(|child| child.kind() == "string");
        part.unwrap_or(literal)
    } else {
        literal
    };

    let parts = LiteralParts::split(src.slice(first_part));
    let quote_style = if concatenated {
        QuoteStyle::Other
    } else {
        parts.style
    };

    let start = literal.start_position();
    let end = literal.end_position();

    let blank_lines_before = (owner_start_row..start.row)
        .rev()
        .take_while(|&row| src.is_blank(row))
        .count();

    let following: Vec<bool> = (end.row + 1..=owner_end_row)
        .map(|row| src.is_blank(row))
        .collect();
    let blank_lines_after = if following.iter().all(|blank| *blank) {
        None
    } else {
        Some(following.iter().take_while(|blank| **blank).count())
    };

    Docstring {
        raw: src.slice(literal).to_string(),
        prefix: parts.prefix.to_string(),
        quote_style,
        quotes: parts.quotes.to_string(),
        body: parts.body.to_string(),
        indent: src
            .line(start.row)
            .get(..start.column)
            .unwrap_or_default()
            .to_string(),
        start_line: start.row as u32 + 1,
        end_line: end.row as u32 + 1,
        blank_lines_before,
        blank_lines_after,
    }
}

/// A single string literal split into prefix, delimiter and body
struct LiteralParts<'a> {
    prefix: &'a str,
    style: QuoteStyle,
    quotes: &'a str,
    body: &'a str,
}

impl<'a> LiteralParts<'a> {
    fn split(raw: &'a str) -> Self {
        let prefix_len = raw.find(['"', '\'']).unwrap_or(0);
        let (prefix, quoted) = raw.split_at(prefix_len);
        let style = QuoteStyle::detect(quoted).unwrap_or(QuoteStyle::Other);
        let quote_len = style.delimiter().map_or(0, str::len);
        let quotes = quoted.get(..quote_len).unwrap_or_default();
        let body = quoted
            .get(quote_len..quoted.len().saturating_sub(quote_len))
            .unwrap_or_default();
        Self {
            prefix,
            style,
            quotes,
            body,
        }
    }
}

/// Names listed in a module-level `__all__ = [...]` or `(...)` literal
///
/// The last such assignment wins. Any other form of `__all__` is ignored.
fn module_all(root: Node<'_>, src: &SourceText<'_>) -> Option<HashSet<String>> {
    let mut all = None;
    let mut cursor = root.walk();
    for statement in root.named_children(&mut cursor) {
        if statement.kind() != "expression_statement" {
            continue;
        }
        let Some(assignment) = statement.named_child(0) else {
            continue;
        };
        if assignment.kind() != "assignment" {
            continue;
        }
        let (Some(left), Some(right)) = (
            assignment.child_by_field_name("left"),
            assignment.child_by_field_name("right"),
        ) else {
            continue;
        };
        if src.slice(left) != "__all__" || !matches!(right.kind(), "list" | "tuple") {
            continue;
        }

        let mut names = HashSet::new();
        let mut items = right.walk();
        for item in right.named_children(&mut items) {
            if item.kind() == "string" {
                names.insert(LiteralParts::split(src.slice(item)).body.to_string());
            }
        }
        all = Some(names);
    }
    all
}

/// Depth-first search for the first ERROR or MISSING node
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

/// Source text with line access for position and blank-line queries
struct SourceText<'a> {
    text: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> SourceText<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: text.split('\n').collect(),
        }
    }

    fn slice(&self, node: Node<'_>) -> &'a str {
        self.text.get(node.byte_range()).unwrap_or_default()
    }

    fn line(&self, row: usize) -> &'a str {
        self.lines.get(row).copied().unwrap_or_default()
    }

    fn is_blank(&self, row: usize) -> bool {
        self.line(row).trim().is_empty()
    }

    /// 1-indexed line and character column of a node's start
    fn position(&self, node: Node<'_>) -> (u32, u32) {
        let point = node.start_position();
        let column = self
            .line(point.row)
            .get(..point.column)
            .map_or(point.column, |prefix| prefix.chars().count());
        (point.row as u32 + 1, column as u32 + 1)
    }
}
