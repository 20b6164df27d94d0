//! PHP parser adapter built on Tree-sitter.
//!
//! Tree-sitter is error-tolerant: it always produces a tree and marks bad
//! regions with ERROR/missing nodes instead of failing. The adapter converts
//! that into the fail-fast contract the rule engine needs: a parse either
//! yields a clean tree or a [`ParseError`] carrying the first offending
//! position.
use lazy_static::lazy_static;
use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree};

lazy_static! {
    // Grammar construction is not free; share one Language for the process.
    static ref PHP_LANGUAGE: Language = tree_sitter_php::LANGUAGE_PHP.into();
}

/// Syntax failure reported against 1-based line/column coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Parse PHP source into a syntax tree, or fail with the position of the
/// first syntax error. Tolerates any PHP7-era syntax including doc comments.
pub fn parse(code: &str, file_name: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&PHP_LANGUAGE).map_err(|e| {
        tracing::error!(file = file_name, error = %e, "failed to load PHP grammar");
        ParseError {
            message: format!("failed to initialize PHP grammar: {e}"),
            line: 1,
            column: 1,
        }
    })?;

    let tree = parser.parse(code, None).ok_or_else(|| ParseError {
        message: "parser produced no syntax tree".to_string(),
        line: 1,
        column: 1,
    })?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(match first_error_node(root) {
            Some(node) => syntax_error_at(node, code),
            // has_error() without a locatable node should not happen; keep
            // the contract instead of panicking.
            None => ParseError {
                message: "syntax error".to_string(),
                line: 1,
                column: 1,
            },
        });
    }

    Ok(tree)
}

/// For a `function_call_expression` node, the callee text when the callee is
/// a bare function name. `None` for method calls, variable calls, etc.
pub fn bare_callee<'a>(node: Node<'_>, source: &'a str) -> Option<&'a str> {
    if node.kind() != "function_call_expression" {
        return None;
    }
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "name" {
        return None;
    }
    callee.utf8_text(source.as_bytes()).ok()
}

/// Pre-order depth-first scan for the first ERROR or missing node.
fn first_error_node(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn syntax_error_at(node: Node<'_>, code: &str) -> ParseError {
    let point = node.start_position();
    let message = if node.is_missing() {
        format!("missing '{}'", node.kind())
    } else {
        match node.utf8_text(code.as_bytes()) {
            Ok(text) if !text.trim().is_empty() => {
                format!("unexpected '{}'", snippet(text.trim(), 24))
            }
            _ => "unexpected token".to_string(),
        }
    };
    ParseError {
        message,
        line: point.row + 1,
        column: point.column + 1,
    }
}

/// Character-safe truncation so multi-byte PHP source never splits mid-char.
fn snippet(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}
