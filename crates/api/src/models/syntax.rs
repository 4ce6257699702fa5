//! Typed declaration nodes handed over by a language front end.
//!
//! The model is purely syntactic. Modifiers are the keywords actually written,
//! members keep source order, and type references are unresolved text.

use super::types::TypeRef;
use serde::{Deserialize, Serialize};

/// One parsed source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub package: Option<String>,
    /// Front-end metadata only; descriptors never read imports.
    pub imports: Vec<String>,
    /// Top-level declarations in source order.
    pub types: Vec<TypeDeclaration>,
}

/// Syntactic category of a type declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationCategory {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
    /// Anything the front end could not map to one of the above.
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Default,
    Strictfp,
    Sealed,
    NonSealed,
}

impl Modifier {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let m = match keyword {
            "public" => Modifier::Public,
            "protected" => Modifier::Protected,
            "private" => Modifier::Private,
            "abstract" => Modifier::Abstract,
            "static" => Modifier::Static,
            "final" => Modifier::Final,
            "transient" => Modifier::Transient,
            "volatile" => Modifier::Volatile,
            "synchronized" => Modifier::Synchronized,
            "native" => Modifier::Native,
            "default" => Modifier::Default,
            "strictfp" => Modifier::Strictfp,
            "sealed" => Modifier::Sealed,
            "non-sealed" => Modifier::NonSealed,
            _ => return None,
        };
        Some(m)
    }
}

/// Anything that carries explicitly written modifier keywords.
pub trait HasModifiers {
    fn modifiers(&self) -> &[Modifier];

    fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers().contains(&modifier)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub name: String,
    pub category: DeclarationCategory,
    pub modifiers: Vec<Modifier>,
    /// Annotation names as written, e.g. `Override` or `javax.annotation.Nonnull`.
    pub annotations: Vec<String>,
    pub extends: Vec<TypeRef>,
    pub implements: Vec<TypeRef>,
    /// Record components; empty for every other category.
    pub components: Vec<Parameter>,
    pub members: Vec<Member>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, category: DeclarationCategory) -> Self {
        Self {
            name: name.into(),
            category,
            ..Default::default()
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDeclaration> {
        self.members.iter().filter_map(|m| match m {
            Member::Field(f) => Some(f),
            _ => None,
        })
    }

    pub fn constructors(&self) -> impl Iterator<Item = &ConstructorDeclaration> {
        self.members.iter().filter_map(|m| match m {
            Member::Constructor(c) => Some(c),
            _ => None,
        })
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.members.iter().filter_map(|m| match m {
            Member::Method(m) => Some(m),
            _ => None,
        })
    }

    pub fn annotation_elements(&self) -> impl Iterator<Item = &AnnotationElementDeclaration> {
        self.members.iter().filter_map(|m| match m {
            Member::AnnotationElement(e) => Some(e),
            _ => None,
        })
    }

    pub fn nested_types(&self) -> impl Iterator<Item = &TypeDeclaration> {
        self.members.iter().filter_map(|m| match m {
            Member::Type(t) => Some(t),
            _ => None,
        })
    }
}

impl HasModifiers for TypeDeclaration {
    fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Member {
    Field(FieldDeclaration),
    Constructor(ConstructorDeclaration),
    Method(MethodDeclaration),
    AnnotationElement(AnnotationElementDeclaration),
    Type(TypeDeclaration),
}

/// A field statement. `int x, y[];` is one declaration with two variables
/// sharing `type_ref` and `modifiers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub modifiers: Vec<Modifier>,
    pub type_ref: TypeRef,
    pub variables: Vec<VariableDeclarator>,
}

impl HasModifiers for FieldDeclaration {
    fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    pub name: String,
    /// C-style brackets after the name (`int a[]`).
    pub dimensions: usize,
}

impl VariableDeclarator {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimensions: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorDeclaration {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<TypeRef>,
}

impl HasModifiers for ConstructorDeclaration {
    fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeRef,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<TypeRef>,
}

impl HasModifiers for MethodDeclaration {
    fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationElementDeclaration {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeRef,
    pub has_default: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Element type for varargs parameters.
    pub type_ref: TypeRef,
    pub is_varargs: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            is_varargs: false,
        }
    }

    pub fn varargs(name: impl Into<String>, element: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref: element,
            is_varargs: true,
        }
    }
}
