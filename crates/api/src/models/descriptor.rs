//! Canonical structural description of a type declaration.
//!
//! Field order in every struct is the serialized key order, so do not
//! reorder fields without also changing the output format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum TypeKind {
    Class,
    Interface,
    Enumeration,
    Record,
    Annotation,
    Unknown,
}

impl TypeKind {
    /// Containers whose members are implicitly public (and fields constant).
    pub fn is_interface_like(&self) -> bool {
        matches!(self, TypeKind::Interface | TypeKind::Annotation)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
pub struct TypeFlags {
    pub public: bool,
    pub protected: bool,
    pub private: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
pub struct FieldFlags {
    pub public: bool,
    pub protected: bool,
    pub private: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub transient: bool,
    pub volatile: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
pub struct ConstructorFlags {
    pub public: bool,
    pub protected: bool,
    pub private: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
pub struct MethodFlags {
    pub public: bool,
    pub protected: bool,
    pub private: bool,
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    #[serde(rename = "final")]
    pub is_final: bool,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub synchronized: bool,
    pub native: bool,
    pub default: bool,
}

/// One declaration and, transitively, everything nested in it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct TypeDescriptor {
    pub name: String,
    pub kind: TypeKind,
    #[serde(flatten)]
    pub flags: TypeFlags,
    pub extends: Vec<String>,
    pub implements: Vec<String>,
    pub annotations: Vec<String>,
    pub fields: Vec<FieldDescriptor>,
    pub constructors: Vec<ConstructorDescriptor>,
    pub methods: Vec<MethodEntry>,
    pub inners: Vec<TypeDescriptor>,
}

impl TypeDescriptor {
    pub fn method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find_map(|m| match m {
            MethodEntry::Method(md) if md.name == name => Some(md),
            _ => None,
        })
    }

    pub fn element(&self, name: &str) -> Option<&AnnotationElementDescriptor> {
        self.methods.iter().find_map(|m| match m {
            MethodEntry::Element(e) if e.name == name => Some(e),
            _ => None,
        })
    }

    pub fn inner(&self, name: &str) -> Option<&TypeDescriptor> {
        self.inners.iter().find(|t| t.name == name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(flatten)]
    pub flags: FieldFlags,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct ConstructorDescriptor {
    pub name: String,
    #[serde(flatten)]
    pub flags: ConstructorFlags,
    pub params: Vec<String>,
    pub throws: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(rename = "returnType")]
    pub return_type: String,
    #[serde(flatten)]
    pub flags: MethodFlags,
    pub params: Vec<String>,
    pub throws: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct AnnotationElementDescriptor {
    pub name: String,
    #[serde(rename = "returnType")]
    pub return_type: String,
    #[serde(rename = "hasDefault")]
    pub has_default: bool,
}

/// Entry of a descriptor's `methods` list. Annotation types list their
/// elements here; every other kind lists methods.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum MethodEntry {
    Method(MethodDescriptor),
    Element(AnnotationElementDescriptor),
}
