use super::{JavaParser, compact_text, node_text};
use jstruct_api::{Parameter, TypeRef};
use tree_sitter::Node;

fn is_annotation(node: &Node) -> bool {
    matches!(node.kind(), "marker_annotation" | "annotation")
}

/// Number of `[]` pairs in a `dimensions` node.
pub(crate) fn count_dimensions(node: Option<Node>, source: &str) -> usize {
    node.map(|d| node_text(d, source).matches('[').count())
        .unwrap_or(0)
}

impl JavaParser {
    pub fn parse_type_node(&self, node: Node, source: &str) -> TypeRef {
        match node.kind() {
            "generic_type" => {
                let mut base = None;
                let mut args = Vec::new();

                let mut cursor = node.walk();
                for child in node.named_children(&mut cursor) {
                    if child.kind() == "type_arguments" {
                        let mut args_cursor = child.walk();
                        for arg in child.named_children(&mut args_cursor) {
                            if !is_annotation(&arg) {
                                args.push(self.parse_type_node(arg, source));
                            }
                        }
                    } else if base.is_none() {
                        base = Some(self.parse_type_node(child, source));
                    }
                }

                TypeRef::Generic {
                    base: Box::new(base.unwrap_or_else(|| TypeRef::raw(compact_text(node, source)))),
                    args,
                }
            }
            "array_type" => {
                let element = node
                    .child_by_field_name("element")
                    .map(|e| self.parse_type_node(e, source))
                    .unwrap_or_else(|| TypeRef::raw(compact_text(node, source)));

                let dimensions = count_dimensions(node.child_by_field_name("dimensions"), source);
                element.array_of(dimensions.max(1))
            }
            "wildcard" => {
                let mut bound = None;
                let mut is_upper = true;

                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    match child.kind() {
                        "super" => is_upper = false,
                        "extends" => is_upper = true,
                        "?" => {}
                        _ if child.is_named() && !is_annotation(&child) => {
                            bound = Some(self.parse_type_node(child, source));
                        }
                        _ => {}
                    }
                }

                TypeRef::wildcard(bound, is_upper)
            }
            "annotated_type" => {
                // Type annotations are not part of the canonical form.
                let mut cursor = node.walk();
                let inner = node
                    .named_children(&mut cursor)
                    .filter(|c| !is_annotation(c))
                    .last();
                match inner {
                    Some(t) => self.parse_type_node(t, source),
                    None => TypeRef::raw(compact_text(node, source)),
                }
            }
            // Primitives, identifiers, qualified names (`Map.Entry`) and
            // anything the grammar adds later: keep the written text.
            _ => TypeRef::raw(compact_text(node, source)),
        }
    }

    /// Types listed after `extends`/`implements`/`throws`. Accepts either the
    /// clause node itself or a `type_list` inside it.
    pub(crate) fn parse_type_list(&self, clause: Node, source: &str) -> Vec<TypeRef> {
        let mut result = Vec::new();
        let mut cursor = clause.walk();
        for child in clause.named_children(&mut cursor) {
            if child.kind() == "type_list" {
                result.extend(self.parse_type_list(child, source));
            } else if !is_annotation(&child) {
                result.push(self.parse_type_node(child, source));
            }
        }
        result
    }

    /// Extracts parameters from the `parameters` field of a method,
    /// constructor or record declaration.
    ///
    /// For varargs (`spread_parameter`) the element type is kept and the
    /// parameter is flagged; the `...` suffix is added at render time.
    pub fn extract_parameters(&self, declaration_node: Node, source: &str) -> Vec<Parameter> {
        let Some(params_node) = declaration_node.child_by_field_name("parameters") else {
            return vec![];
        };

        let mut result = Vec::new();
        let mut cursor = params_node.walk();
        for child in params_node.children(&mut cursor) {
            match child.kind() {
                "formal_parameter" => {
                    if let Some(type_node) = child.child_by_field_name("type") {
                        // `int values[]` puts the brackets on the name
                        let dims = count_dimensions(child.child_by_field_name("dimensions"), source);
                        let type_ref = self.parse_type_node(type_node, source).array_of(dims);
                        let name = child
                            .child_by_field_name("name")
                            .map(|n| node_text(n, source))
                            .unwrap_or("arg");

                        result.push(Parameter::new(name, type_ref));
                    }
                }
                "spread_parameter" => {
                    let mut type_ref = None;
                    let mut name = "arg".to_string();

                    let mut inner_cursor = child.walk();
                    for gc in child.named_children(&mut inner_cursor) {
                        match gc.kind() {
                            "variable_declarator" => {
                                if let Some(n) = gc.child_by_field_name("name") {
                                    name = node_text(n, source).to_string();
                                }
                            }
                            "modifiers" | "marker_annotation" | "annotation" => {}
                            _ if type_ref.is_none() => {
                                type_ref = Some(self.parse_type_node(gc, source));
                            }
                            _ => {}
                        }
                    }

                    result.push(Parameter::varargs(name, type_ref.unwrap_or_default()));
                }
                _ => {}
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse `class T { <field_type> f; }` and return the lowered field type.
    fn field_type(field_type: &str) -> TypeRef {
        let parser = JavaParser::new().unwrap();
        let source = format!("class T {{ {field_type} f; }}");
        let unit = parser.parse_unit(&source).unwrap();
        unit.types[0].fields().next().unwrap().type_ref.clone()
    }

    #[test]
    fn generic_with_wildcards() {
        let t = field_type("Map<? extends Number, ? super Integer>");
        assert_eq!(
            t,
            TypeRef::Generic {
                base: Box::new(TypeRef::raw("Map")),
                args: vec![
                    TypeRef::wildcard(Some(TypeRef::raw("Number")), true),
                    TypeRef::wildcard(Some(TypeRef::raw("Integer")), false),
                ],
            }
        );
    }

    #[test]
    fn unbounded_wildcard() {
        assert_eq!(
            field_type("List<?>"),
            TypeRef::generic("List", vec![TypeRef::wildcard(None, true)])
        );
    }

    #[test]
    fn array_of_generic() {
        let t = field_type("List<String>[][]");
        assert_eq!(
            t,
            TypeRef::generic("List", vec![TypeRef::raw("String")]).array_of(2)
        );
    }

    #[test]
    fn qualified_and_annotated_types_keep_written_name() {
        assert_eq!(field_type("java.util.Map.Entry"), TypeRef::raw("java.util.Map.Entry"));
        assert_eq!(field_type("@Nullable String"), TypeRef::raw("String"));
    }
}
