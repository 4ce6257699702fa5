//! Java front end: lowers Java source text into the jstruct syntax model.

pub mod error;
pub mod parser;

pub use error::JavaParseError;
pub use parser::JavaParser;
