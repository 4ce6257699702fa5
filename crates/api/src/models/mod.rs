pub mod descriptor;
pub mod syntax;
pub mod types;

pub use descriptor::*;
pub use syntax::*;
pub use types::*;
