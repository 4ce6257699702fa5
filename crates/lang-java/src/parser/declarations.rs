use super::{JavaParser, compact_text, node_text};
use jstruct_api::{DeclarationCategory, Member, Modifier, TypeDeclaration};
use tracing::trace;
use tree_sitter::Node;

/// Category for tree-sitter declaration kinds; `None` for non-declarations.
pub(crate) fn declaration_category(kind: &str) -> Option<DeclarationCategory> {
    let category = match kind {
        "class_declaration" => DeclarationCategory::Class,
        "interface_declaration" => DeclarationCategory::Interface,
        "enum_declaration" => DeclarationCategory::Enum,
        "record_declaration" => DeclarationCategory::Record,
        "annotation_type_declaration" => DeclarationCategory::Annotation,
        _ => return None,
    };
    Some(category)
}

/// Keywords and annotation names written in a declaration's `modifiers` node.
pub(crate) fn extract_modifiers(node: Node, source: &str) -> (Vec<Modifier>, Vec<String>) {
    let mut modifiers = Vec::new();
    let mut annotations = Vec::new();

    let mut cursor = node.walk();
    let Some(mods_node) = node.children(&mut cursor).find(|c| c.kind() == "modifiers") else {
        return (modifiers, annotations);
    };

    let mut cursor = mods_node.walk();
    for child in mods_node.children(&mut cursor) {
        match child.kind() {
            "marker_annotation" | "annotation" => {
                let name_node = child.child_by_field_name("name").unwrap_or(child);
                let name = compact_text(name_node, source);
                annotations.push(name.trim_start_matches('@').to_string());
            }
            keyword => {
                if let Some(m) = Modifier::from_keyword(keyword) {
                    if !modifiers.contains(&m) {
                        modifiers.push(m);
                    }
                }
            }
        }
    }

    (modifiers, annotations)
}

impl JavaParser {
    pub(crate) fn lower_type_declaration(
        &self,
        node: Node,
        source: &str,
    ) -> Option<TypeDeclaration> {
        let category = declaration_category(node.kind())?;
        let name = node
            .child_by_field_name("name")
            .map(|n| node_text(n, source).to_string())
            .unwrap_or_default();

        let mut decl = TypeDeclaration::new(name, category);
        (decl.modifiers, decl.annotations) = extract_modifiers(node, source);

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "superclass" | "extends_interfaces" => {
                    decl.extends.extend(self.parse_type_list(child, source));
                }
                "super_interfaces" => {
                    decl.implements.extend(self.parse_type_list(child, source));
                }
                _ => {}
            }
        }

        if decl.category == DeclarationCategory::Record {
            decl.components = self.extract_parameters(node, source);
        }

        if let Some(body) = node.child_by_field_name("body") {
            self.lower_body(body, source, &mut decl.members);
        }

        trace!(name = %decl.name, category = ?decl.category, members = decl.members.len(), "lowered declaration");
        Some(decl)
    }

    /// Lower the members of a class, interface, enum, record or annotation body.
    fn lower_body(&self, body: Node, source: &str, members: &mut Vec<Member>) {
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            match child.kind() {
                // enum constants come first; the members follow the `;`
                "enum_body_declarations" => self.lower_body(child, source, members),
                kind if declaration_category(kind).is_some() => {
                    if let Some(nested) = self.lower_type_declaration(child, source) {
                        members.push(Member::Type(nested));
                    }
                }
                _ => {
                    if let Some(member) = self.lower_member(child, source) {
                        members.push(member);
                    }
                }
            }
        }
    }
}
