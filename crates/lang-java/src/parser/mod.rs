use crate::error::{JavaParseError, Result};
use jstruct_api::CompilationUnit;
use tracing::debug;
use tree_sitter::{Node, Tree};

mod declarations;
mod members;
mod types;

pub struct JavaParser {
    pub language: tree_sitter::Language,
}

impl JavaParser {
    pub fn new() -> Result<Self> {
        let language: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();

        // Fail early on an ABI mismatch between tree-sitter and the grammar.
        let mut probe = tree_sitter::Parser::new();
        probe.set_language(&language)?;

        Ok(Self { language })
    }

    pub fn parse_tree(&self, source: &str) -> Result<Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&self.language)?;
        parser.parse(source, None).ok_or(JavaParseError::NoTree)
    }

    /// Parse one compilation unit. Any syntax error in the file is reported
    /// instead of lowering a partially recovered tree.
    pub fn parse_unit(&self, source: &str) -> Result<CompilationUnit> {
        let tree = self.parse_tree(source)?;
        let root = tree.root_node();
        if root.has_error() {
            return Err(first_error(root));
        }

        let unit = self.lower_unit(root, source);
        debug!(
            package = unit.package.as_deref().unwrap_or(""),
            imports = unit.imports.len(),
            types = unit.types.len(),
            "parsed compilation unit"
        );
        Ok(unit)
    }

    pub(crate) fn lower_unit(&self, root: Node, source: &str) -> CompilationUnit {
        let mut unit = CompilationUnit::default();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "package_declaration" => {
                    unit.package = qualified_name_child(child, source);
                }
                "import_declaration" => {
                    if let Some(mut name) = qualified_name_child(child, source) {
                        let mut inner = child.walk();
                        if child.children(&mut inner).any(|c| c.kind() == "asterisk") {
                            name.push_str(".*");
                        }
                        unit.imports.push(name);
                    }
                }
                _ => {
                    if let Some(decl) = self.lower_type_declaration(child, source) {
                        unit.types.push(decl);
                    }
                }
            }
        }

        unit
    }
}

fn qualified_name_child(node: Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))
        .map(|c| node_text(c, source).to_string())
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(root: Node) -> JavaParseError {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let pos = node.start_position();
            return JavaParseError::Syntax {
                line: pos.row + 1,
                column: pos.column + 1,
            };
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        // Reversed so the leftmost child is popped first.
        stack.extend(children.into_iter().rev());
    }

    let pos = root.start_position();
    JavaParseError::Syntax {
        line: pos.row + 1,
        column: pos.column + 1,
    }
}

pub(crate) fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

/// Source text with all whitespace removed, e.g. `Map<K, V>` -> `Map<K,V>`.
pub(crate) fn compact_text(node: Node, source: &str) -> String {
    node_text(node, source).split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_syntax_error_position() {
        let parser = JavaParser::new().unwrap();
        let err = parser
            .parse_unit("public class A {\n  void m( {\n}\n")
            .unwrap_err();
        match err {
            JavaParseError::Syntax { line, column } => assert!(line >= 1 && column >= 1),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn collects_package_and_imports() {
        let parser = JavaParser::new().unwrap();
        let unit = parser
            .parse_unit("package com.acme.shop;\nimport java.util.List;\nimport java.io.*;\nclass A {}")
            .unwrap();
        assert_eq!(unit.package.as_deref(), Some("com.acme.shop"));
        assert_eq!(unit.imports, ["java.util.List", "java.io.*"]);
        assert_eq!(unit.types.len(), 1);
    }

    #[test]
    fn empty_source_has_no_types() {
        let parser = JavaParser::new().unwrap();
        let unit = parser.parse_unit("// nothing here\n").unwrap();
        assert!(unit.types.is_empty());
    }
}
