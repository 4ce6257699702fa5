//! Canonical JSON text for descriptor documents.
//!
//! Key order comes from the descriptor structs and is carried through
//! `serde_json::Value` by the `preserve_order` feature, so identical trees
//! always produce identical bytes.

use crate::error::Result;
use jstruct_api::TypeDescriptor;
use serde_json::{Map, Value};

pub fn to_document(descriptor: &TypeDescriptor) -> Result<Value> {
    Ok(serde_json::to_value(descriptor)?)
}

/// Document emitted for a unit without declarations.
pub fn empty_document() -> Value {
    Value::Object(Map::new())
}

pub fn serialize(document: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

pub fn serialize_descriptor(descriptor: &TypeDescriptor) -> Result<String> {
    serialize(&to_document(descriptor)?)
}

/// JSON Schema of the unpruned descriptor document.
pub fn descriptor_schema() -> Result<Value> {
    Ok(serde_json::to_value(schemars::schema_for!(TypeDescriptor))?)
}
