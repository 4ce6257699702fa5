use serde::{Deserialize, Serialize};

/// A syntactic type reference as written in source.
///
/// Nothing here is resolved: names keep whatever qualification the author
/// wrote, and unknown symbols are just text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    /// Primitive or named type (e.g., "int", "String", "java.util.List")
    Raw(String),

    /// Generic instantiation (e.g., List<String>)
    Generic {
        base: Box<TypeRef>,
        args: Vec<TypeRef>,
    },

    /// Array type (e.g., String[][])
    Array {
        element: Box<TypeRef>,
        dimensions: usize,
    },

    /// Wildcard type argument (e.g., ? extends Number)
    Wildcard {
        bound: Option<Box<TypeRef>>,
        is_upper_bound: bool, // true: extends, false: super
    },
}

impl TypeRef {
    /// Helper to create a Raw type
    pub fn raw(s: impl Into<String>) -> Self {
        TypeRef::Raw(s.into())
    }

    pub fn generic(base: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Generic {
            base: Box::new(TypeRef::raw(base)),
            args,
        }
    }

    /// Wrap `self` in `dimensions` array levels; zero leaves it untouched.
    /// Nested arrays are flattened so `int[][]` is always one `Array` node.
    pub fn array_of(self, dimensions: usize) -> Self {
        if dimensions == 0 {
            return self;
        }
        match self {
            TypeRef::Array {
                element,
                dimensions: inner,
            } => TypeRef::Array {
                element,
                dimensions: inner + dimensions,
            },
            other => TypeRef::Array {
                element: Box::new(other),
                dimensions,
            },
        }
    }

    pub fn wildcard(bound: Option<TypeRef>, is_upper_bound: bool) -> Self {
        TypeRef::Wildcard {
            bound: bound.map(Box::new),
            is_upper_bound,
        }
    }
}

impl Default for TypeRef {
    fn default() -> Self {
        TypeRef::Raw(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_of_flattens_nested_dimensions() {
        let t = TypeRef::raw("int").array_of(2).array_of(1);
        assert_eq!(
            t,
            TypeRef::Array {
                element: Box::new(TypeRef::raw("int")),
                dimensions: 3,
            }
        );
    }

    #[test]
    fn array_of_zero_is_identity() {
        assert_eq!(TypeRef::raw("String").array_of(0), TypeRef::raw("String"));
    }
}
