use super::declarations::extract_modifiers;
use super::types::count_dimensions;
use super::{JavaParser, node_text};
use jstruct_api::{
    AnnotationElementDeclaration, ConstructorDeclaration, FieldDeclaration, Member,
    MethodDeclaration, TypeRef, VariableDeclarator,
};
use tracing::trace;
use tree_sitter::Node;

fn name_of(node: Node, source: &str) -> String {
    node.child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default()
}

impl JavaParser {
    /// Lower one body child. Returns `None` for anything that is not a
    /// field, constructor, method or annotation element: enum constants,
    /// initializer blocks, compact constructors, comments and punctuation.
    pub(crate) fn lower_member(&self, node: Node, source: &str) -> Option<Member> {
        let member = match node.kind() {
            "field_declaration" | "constant_declaration" => {
                Member::Field(self.lower_field(node, source))
            }
            "method_declaration" => Member::Method(self.lower_method(node, source)),
            "constructor_declaration" => {
                Member::Constructor(self.lower_constructor(node, source))
            }
            "annotation_type_element_declaration" => {
                Member::AnnotationElement(self.lower_annotation_element(node, source))
            }
            "compact_constructor_declaration" | "static_initializer" | "block" => {
                trace!(kind = node.kind(), "skipping body member");
                return None;
            }
            _ => return None,
        };
        Some(member)
    }

    fn lower_field(&self, node: Node, source: &str) -> FieldDeclaration {
        let (modifiers, _) = extract_modifiers(node, source);
        let type_ref = node
            .child_by_field_name("type")
            .map(|t| self.parse_type_node(t, source))
            .unwrap_or_default();

        let mut cursor = node.walk();
        let variables = node
            .children_by_field_name("declarator", &mut cursor)
            .map(|declarator| VariableDeclarator {
                name: name_of(declarator, source),
                dimensions: count_dimensions(declarator.child_by_field_name("dimensions"), source),
            })
            .collect();

        FieldDeclaration {
            modifiers,
            type_ref,
            variables,
        }
    }

    fn lower_method(&self, node: Node, source: &str) -> MethodDeclaration {
        let (modifiers, _) = extract_modifiers(node, source);
        // `int m()[]` is legal and means `int[] m()`
        let dims = count_dimensions(node.child_by_field_name("dimensions"), source);
        let return_type = node
            .child_by_field_name("type")
            .map(|t| self.parse_type_node(t, source))
            .unwrap_or_else(|| TypeRef::raw("void"))
            .array_of(dims);

        MethodDeclaration {
            name: name_of(node, source),
            modifiers,
            return_type,
            parameters: self.extract_parameters(node, source),
            throws: self.throws_clause(node, source),
        }
    }

    fn lower_constructor(&self, node: Node, source: &str) -> ConstructorDeclaration {
        let (modifiers, _) = extract_modifiers(node, source);
        ConstructorDeclaration {
            name: name_of(node, source),
            modifiers,
            parameters: self.extract_parameters(node, source),
            throws: self.throws_clause(node, source),
        }
    }

    fn lower_annotation_element(&self, node: Node, source: &str) -> AnnotationElementDeclaration {
        let (modifiers, _) = extract_modifiers(node, source);
        let dims = count_dimensions(node.child_by_field_name("dimensions"), source);
        let return_type = node
            .child_by_field_name("type")
            .map(|t| self.parse_type_node(t, source))
            .unwrap_or_default()
            .array_of(dims);

        let has_default = node.child_by_field_name("value").is_some() || {
            let mut cursor = node.walk();
            node.children(&mut cursor).any(|c| c.kind() == "default")
        };

        AnnotationElementDeclaration {
            name: name_of(node, source),
            modifiers,
            return_type,
            has_default,
        }
    }

    fn throws_clause(&self, node: Node, source: &str) -> Vec<TypeRef> {
        let mut cursor = node.walk();
        node.children(&mut cursor)
            .find(|c| c.kind() == "throws")
            .map(|clause| self.parse_type_list(clause, source))
            .unwrap_or_default()
    }
}
