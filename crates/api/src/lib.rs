//! Shared data model for jstruct.
//!
//! Two halves live here: the syntax model a front end produces for one source
//! unit, and the descriptor model the core engine builds and serializes.

pub mod models;

pub use models::*;
