//! Unit-level pipeline: select, prune, serialize.

use crate::builder::build;
use crate::error::Result;
use crate::prune::prune;
use crate::select::select_root;
use crate::serialize::{empty_document, serialize, to_document};
use jstruct_api::CompilationUnit;
use serde_json::{Map, Value};
use tracing::debug;

/// Which declarations of a unit end up in the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputScope {
    /// One root type, chosen by [`select_root`].
    #[default]
    Root,
    /// `{"package": .., "types": [..]}` with every top-level type.
    All,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Prune `false`, `[]` and `{}` from the output.
    pub strict: bool,
    pub scope: OutputScope,
}

pub fn extract_unit(unit: &CompilationUnit, options: &ExtractOptions) -> Result<Value> {
    debug!(
        types = unit.types.len(),
        strict = options.strict,
        scope = ?options.scope,
        "extracting unit"
    );

    match options.scope {
        OutputScope::Root => {
            let Some(root) = select_root(&unit.types) else {
                return Ok(empty_document());
            };
            Ok(prune(to_document(&root)?, options.strict))
        }
        OutputScope::All => {
            let mut doc = Map::new();
            if let Some(package) = &unit.package {
                doc.insert("package".to_string(), Value::String(package.clone()));
            }
            let types = unit
                .types
                .iter()
                .map(|decl| to_document(&build(decl, None)).map(|v| prune(v, options.strict)))
                .collect::<Result<Vec<_>>>()?;
            doc.insert("types".to_string(), Value::Array(types));
            Ok(Value::Object(doc))
        }
    }
}

pub fn render_unit(unit: &CompilationUnit, options: &ExtractOptions) -> Result<String> {
    serialize(&extract_unit(unit, options)?)
}
