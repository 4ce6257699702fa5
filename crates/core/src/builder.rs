//! Recursive construction of [`TypeDescriptor`] trees.

use crate::modifiers;
use crate::render::{render_params, render_type, render_types};
use jstruct_api::{
    AnnotationElementDescriptor, ConstructorDescriptor, DeclarationCategory, FieldDescriptor,
    HasModifiers, MethodDescriptor, MethodEntry, Modifier, TypeDeclaration, TypeDescriptor,
    TypeKind,
};
use tracing::trace;

/// Map a syntactic category onto the closed descriptor kind.
pub fn classify(category: &DeclarationCategory) -> TypeKind {
    match category {
        DeclarationCategory::Class => TypeKind::Class,
        DeclarationCategory::Interface => TypeKind::Interface,
        DeclarationCategory::Enum => TypeKind::Enumeration,
        DeclarationCategory::Record => TypeKind::Record,
        DeclarationCategory::Annotation => TypeKind::Annotation,
        DeclarationCategory::Other(_) => TypeKind::Unknown,
    }
}

/// Build the descriptor for `decl`. `enclosing` is the kind of the directly
/// enclosing declaration, `None` at top level.
pub fn build(decl: &TypeDeclaration, enclosing: Option<TypeKind>) -> TypeDescriptor {
    let kind = classify(&decl.category);
    if let DeclarationCategory::Other(category) = &decl.category {
        trace!(name = %decl.name, %category, "unrecognised declaration category");
    }

    let has_explicit_abstract_method = decl
        .methods()
        .any(|m| m.has_modifier(Modifier::Abstract));
    let flags = modifiers::type_flags(
        kind,
        &decl.modifiers,
        has_explicit_abstract_method,
        enclosing,
    );

    let (extends, implements) = match kind {
        TypeKind::Class | TypeKind::Interface => {
            (render_types(&decl.extends), render_types(&decl.implements))
        }
        TypeKind::Record => (Vec::new(), render_types(&decl.implements)),
        TypeKind::Enumeration | TypeKind::Annotation | TypeKind::Unknown => {
            (Vec::new(), Vec::new())
        }
    };

    let descriptor = TypeDescriptor {
        name: decl.name.clone(),
        kind,
        flags,
        extends,
        implements,
        annotations: decl
            .annotations
            .iter()
            .map(|a| simple_annotation_name(a).to_string())
            .collect(),
        fields: build_fields(decl, kind),
        constructors: build_constructors(decl),
        methods: build_methods(decl, kind),
        inners: decl
            .nested_types()
            .map(|nested| build(nested, Some(kind)))
            .collect(),
    };

    trace!(
        name = %descriptor.name,
        kind = ?descriptor.kind,
        fields = descriptor.fields.len(),
        methods = descriptor.methods.len(),
        inners = descriptor.inners.len(),
        "built descriptor"
    );
    descriptor
}

/// `javax.annotation.Nonnull` -> `Nonnull`
fn simple_annotation_name(name: &str) -> &str {
    let name = name.trim_start_matches('@');
    name.rsplit('.').next().unwrap_or(name)
}

fn build_fields(decl: &TypeDeclaration, kind: TypeKind) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();

    if kind == TypeKind::Record {
        // Components are rendered by their declared type; a varargs component keeps its element type.
        fields.extend(decl.components.iter().map(|component| FieldDescriptor {
            name: component.name.clone(),
            type_name: render_type(&component.type_ref),
            flags: modifiers::record_component_flags(),
        }));
    }

    for field in decl.fields() {
        let flags = modifiers::field_flags(&field.modifiers, kind);
        for var in &field.variables {
            let type_ref = field.type_ref.clone().array_of(var.dimensions);
            fields.push(FieldDescriptor {
                name: var.name.clone(),
                type_name: render_type(&type_ref),
                flags,
            });
        }
    }

    fields
}

fn build_constructors(decl: &TypeDeclaration) -> Vec<ConstructorDescriptor> {
    decl.constructors()
        .map(|ctor| ConstructorDescriptor {
            name: ctor.name.clone(),
            flags: modifiers::constructor_flags(&ctor.modifiers),
            params: render_params(&ctor.parameters),
            throws: render_types(&ctor.throws),
        })
        .collect()
}

fn build_methods(decl: &TypeDeclaration, kind: TypeKind) -> Vec<MethodEntry> {
    match kind {
        TypeKind::Annotation => decl
            .annotation_elements()
            .map(|element| {
                MethodEntry::Element(AnnotationElementDescriptor {
                    name: element.name.clone(),
                    return_type: render_type(&element.return_type),
                    has_default: element.has_default,
                })
            })
            .collect(),
        TypeKind::Class
        | TypeKind::Interface
        | TypeKind::Enumeration
        | TypeKind::Record
        | TypeKind::Unknown => decl
            .methods()
            .map(|method| {
                MethodEntry::Method(MethodDescriptor {
                    name: method.name.clone(),
                    return_type: render_type(&method.return_type),
                    flags: modifiers::method_flags(&method.modifiers, kind),
                    params: render_params(&method.parameters),
                    throws: render_types(&method.throws),
                })
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstruct_api::{
        AnnotationElementDeclaration, ConstructorDeclaration, FieldDeclaration, Member,
        MethodDeclaration, Parameter, TypeRef, VariableDeclarator,
    };

    fn method(name: &str, modifiers: Vec<Modifier>) -> Member {
        Member::Method(MethodDeclaration {
            name: name.into(),
            modifiers,
            return_type: TypeRef::raw("void"),
            ..Default::default()
        })
    }

    #[test]
    fn unrecognised_category_degrades_to_unknown() {
        let decl = TypeDeclaration::new("Mystery", DeclarationCategory::Other("module".into()));
        let d = build(&decl, None);
        assert_eq!(d.kind, TypeKind::Unknown);
        assert!(d.extends.is_empty() && d.implements.is_empty());
    }

    #[test]
    fn record_components_precede_declared_fields() {
        let mut decl = TypeDeclaration::new("Point", DeclarationCategory::Record);
        decl.components = vec![
            Parameter::new("x", TypeRef::raw("int")),
            Parameter::new("y", TypeRef::raw("int")),
        ];
        decl.extends = vec![TypeRef::raw("Ignored")];
        decl.implements = vec![TypeRef::generic("Comparable", vec![TypeRef::raw("Point")])];
        decl.members = vec![Member::Field(FieldDeclaration {
            modifiers: vec![Modifier::Private, Modifier::Static, Modifier::Final],
            type_ref: TypeRef::raw("Point"),
            variables: vec![VariableDeclarator::named("ORIGIN")],
        })];

        let d = build(&decl, None);
        let names: Vec<_> = d.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["x", "y", "ORIGIN"]);
        assert!(d.fields[0].flags.private && d.fields[0].flags.is_final);
        assert!(!d.fields[0].flags.is_static);
        assert!(d.fields[2].flags.is_static);
        assert!(d.extends.is_empty());
        assert_eq!(d.implements, ["Comparable<Point>"]);
        assert!(d.flags.is_final);
    }

    #[test]
    fn multi_variable_field_expands_per_variable() {
        let mut decl = TypeDeclaration::new("Coords", DeclarationCategory::Class);
        decl.members = vec![Member::Field(FieldDeclaration {
            modifiers: vec![Modifier::Protected, Modifier::Volatile],
            type_ref: TypeRef::raw("int"),
            variables: vec![
                VariableDeclarator::named("x"),
                VariableDeclarator {
                    name: "y".into(),
                    dimensions: 1,
                },
                VariableDeclarator::named("z"),
            ],
        })];

        let d = build(&decl, None);
        assert_eq!(d.fields.len(), 3);
        assert_eq!(d.fields[1].type_name, "int[]");
        assert!(d.fields.iter().all(|f| f.flags.protected && f.flags.volatile));
    }

    #[test]
    fn interface_implicit_abstract_does_not_mark_interface_abstract() {
        let mut decl = TypeDeclaration::new("Shape", DeclarationCategory::Interface);
        decl.members = vec![method("area", vec![])];
        let d = build(&decl, None);
        assert!(d.method("area").unwrap().flags.is_abstract);
        assert!(!d.flags.is_abstract);

        decl.members = vec![method("area", vec![Modifier::Abstract])];
        assert!(build(&decl, None).flags.is_abstract);
    }

    #[test]
    fn annotation_types_list_elements() {
        let mut decl = TypeDeclaration::new("Config", DeclarationCategory::Annotation);
        decl.members = vec![
            Member::AnnotationElement(AnnotationElementDeclaration {
                name: "value".into(),
                return_type: TypeRef::raw("String"),
                has_default: false,
                ..Default::default()
            }),
            Member::AnnotationElement(AnnotationElementDeclaration {
                name: "tags".into(),
                return_type: TypeRef::raw("String").array_of(1),
                has_default: true,
                ..Default::default()
            }),
        ];

        let d = build(&decl, None);
        assert_eq!(d.element("value").map(|e| e.has_default), Some(false));
        let tags = d.element("tags").unwrap();
        assert!(tags.has_default);
        assert_eq!(tags.return_type, "String[]");
    }

    #[test]
    fn constructors_always_carry_throws() {
        let mut decl = TypeDeclaration::new("Conn", DeclarationCategory::Class);
        decl.members = vec![
            Member::Constructor(ConstructorDeclaration {
                name: "Conn".into(),
                modifiers: vec![Modifier::Public],
                parameters: vec![Parameter::varargs("hosts", TypeRef::raw("String"))],
                throws: vec![],
            }),
            Member::Constructor(ConstructorDeclaration {
                name: "Conn".into(),
                parameters: vec![],
                throws: vec![TypeRef::raw("IOException")],
                ..Default::default()
            }),
        ];

        let d = build(&decl, None);
        assert_eq!(d.constructors[0].params, ["String..."]);
        assert!(d.constructors[0].throws.is_empty());
        assert_eq!(d.constructors[1].throws, ["IOException"]);
    }

    #[test]
    fn nested_declarations_recurse_with_enclosing_kind() {
        let mut outer = TypeDeclaration::new("Api", DeclarationCategory::Interface);
        let mut inner = TypeDeclaration::new("Impl", DeclarationCategory::Class);
        inner
            .members
            .push(Member::Type(TypeDeclaration::new("Deep", DeclarationCategory::Class)));
        outer.members.push(Member::Type(inner));

        let d = build(&outer, None);
        let impl_ = d.inner("Impl").unwrap();
        assert!(impl_.flags.is_static);
        assert!(!impl_.inner("Deep").unwrap().flags.is_static);
    }

    #[test]
    fn annotations_are_stripped_to_simple_names() {
        let mut decl = TypeDeclaration::new("Svc", DeclarationCategory::Class);
        decl.annotations = vec![
            "javax.annotation.Nonnull".into(),
            "Tag".into(),
            "Tag".into(),
        ];
        assert_eq!(build(&decl, None).annotations, ["Nonnull", "Tag", "Tag"]);
    }
}
