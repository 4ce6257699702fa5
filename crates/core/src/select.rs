use crate::builder::build;
use jstruct_api::{TypeDeclaration, TypeDescriptor};
use tracing::debug;

/// Build every top-level declaration of a unit and pick the one to emit.
///
/// Returns `None` for a unit without declarations.
pub fn select_root(declarations: &[TypeDeclaration]) -> Option<TypeDescriptor> {
    let built = declarations.iter().map(|decl| build(decl, None)).collect();
    pick_root(built)
}

/// The first public descriptor wins. Without one, the *last* declared type is
/// chosen, not the first.
pub fn pick_root(mut descriptors: Vec<TypeDescriptor>) -> Option<TypeDescriptor> {
    let index = match descriptors.len() {
        0 => return None,
        1 => 0,
        n => match descriptors.iter().position(|d| d.flags.public) {
            Some(i) => i,
            None => {
                debug!(count = n, "no public top-level type, falling back to the last one");
                n - 1
            }
        },
    };
    debug!(root = %descriptors[index].name, "selected root type");
    Some(descriptors.swap_remove(index))
}
