//! Effective modifier flags.
//!
//! Every function here is a pure function of the entity's own kind, the
//! keywords written on it, and the kind of the declaration that encloses it.
//! Explicit keywords always count; the implicit rules only ever add flags,
//! except for interface `default`/`static` methods, which are never abstract.

use jstruct_api::{ConstructorFlags, FieldFlags, MethodFlags, Modifier, TypeFlags, TypeKind};

fn has(modifiers: &[Modifier], m: Modifier) -> bool {
    modifiers.contains(&m)
}

/// Flags of a type declaration.
///
/// `has_explicit_abstract_method` must only reflect methods written with the
/// `abstract` keyword. Interface methods that are abstract by the implicit
/// rule do not make their interface abstract.
pub fn type_flags(
    kind: TypeKind,
    modifiers: &[Modifier],
    has_explicit_abstract_method: bool,
    enclosing: Option<TypeKind>,
) -> TypeFlags {
    let implicit_static = match enclosing {
        None => false,
        Some(outer) => {
            outer.is_interface_like()
                || match kind {
                    TypeKind::Interface
                    | TypeKind::Enumeration
                    | TypeKind::Annotation
                    | TypeKind::Record => true,
                    TypeKind::Class | TypeKind::Unknown => false,
                }
        }
    };

    TypeFlags {
        public: has(modifiers, Modifier::Public),
        protected: has(modifiers, Modifier::Protected),
        private: has(modifiers, Modifier::Private),
        is_abstract: has(modifiers, Modifier::Abstract) || has_explicit_abstract_method,
        is_final: has(modifiers, Modifier::Final) || kind == TypeKind::Record,
        is_static: has(modifiers, Modifier::Static) || implicit_static,
    }
}

/// Flags of an explicitly declared field inside a declaration of kind `owner`.
pub fn field_flags(modifiers: &[Modifier], owner: TypeKind) -> FieldFlags {
    let constant = owner.is_interface_like();
    FieldFlags {
        public: constant || has(modifiers, Modifier::Public),
        protected: has(modifiers, Modifier::Protected),
        private: has(modifiers, Modifier::Private),
        is_final: constant || has(modifiers, Modifier::Final),
        is_static: constant || has(modifiers, Modifier::Static),
        transient: has(modifiers, Modifier::Transient),
        volatile: has(modifiers, Modifier::Volatile),
    }
}

/// Flags of the synthetic field backing a record component.
pub fn record_component_flags() -> FieldFlags {
    FieldFlags {
        private: true,
        is_final: true,
        ..FieldFlags::default()
    }
}

pub fn constructor_flags(modifiers: &[Modifier]) -> ConstructorFlags {
    ConstructorFlags {
        public: has(modifiers, Modifier::Public),
        protected: has(modifiers, Modifier::Protected),
        private: has(modifiers, Modifier::Private),
    }
}

/// Flags of a method declared inside a declaration of kind `owner`.
pub fn method_flags(modifiers: &[Modifier], owner: TypeKind) -> MethodFlags {
    let is_default = has(modifiers, Modifier::Default);
    let is_static = has(modifiers, Modifier::Static);

    let (public, is_abstract) = match owner {
        TypeKind::Interface => (true, !is_default && !is_static),
        TypeKind::Class
        | TypeKind::Enumeration
        | TypeKind::Record
        | TypeKind::Annotation
        | TypeKind::Unknown => (
            has(modifiers, Modifier::Public),
            has(modifiers, Modifier::Abstract),
        ),
    };

    MethodFlags {
        public,
        protected: has(modifiers, Modifier::Protected),
        private: has(modifiers, Modifier::Private),
        is_abstract,
        is_final: has(modifiers, Modifier::Final),
        is_static,
        synchronized: has(modifiers, Modifier::Synchronized),
        native: has(modifiers, Modifier::Native),
        default: is_default,
    }
}
