//! Structural descriptor engine.
//!
//! [`build`] turns one syntactic declaration into a [`TypeDescriptor`] tree,
//! [`select_root`] picks the declaration a unit is represented by, [`prune`]
//! strips falsy noise, and [`serialize`] renders canonical JSON.
//!
//! [`TypeDescriptor`]: jstruct_api::TypeDescriptor

pub mod builder;
pub mod error;
pub mod extract;
pub mod logging;
pub mod modifiers;
pub mod prune;
pub mod render;
pub mod select;
pub mod serialize;

pub use builder::{build, classify};
pub use error::{JstructError, Result};
pub use extract::{ExtractOptions, OutputScope, extract_unit, render_unit};
pub use prune::prune;
pub use select::{pick_root, select_root};
pub use serialize::{serialize, serialize_descriptor};
