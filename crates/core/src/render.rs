//! Canonical text form of type references.
//!
//! Generic arguments are joined with a bare `,`, array brackets follow any
//! generic suffix, and varargs use `...` in place of the outermost `[]`.

use jstruct_api::{Parameter, TypeRef};

pub fn render_type(type_ref: &TypeRef) -> String {
    let mut out = String::new();
    write_type(&mut out, type_ref);
    out
}

/// Parameter-position rendering: varargs print their element type followed by `...`.
pub fn render_param(param: &Parameter) -> String {
    let mut out = render_type(&param.type_ref);
    if param.is_varargs {
        out.push_str("...");
    }
    out
}

pub fn render_types(refs: &[TypeRef]) -> Vec<String> {
    refs.iter().map(render_type).collect()
}

pub fn render_params(params: &[Parameter]) -> Vec<String> {
    params.iter().map(render_param).collect()
}

fn write_type(out: &mut String, type_ref: &TypeRef) {
    match type_ref {
        TypeRef::Raw(name) => out.push_str(name),
        TypeRef::Generic { base, args } => {
            write_type(out, base);
            out.push('<');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_type(out, arg);
            }
            out.push('>');
        }
        TypeRef::Array {
            element,
            dimensions,
        } => {
            write_type(out, element);
            for _ in 0..*dimensions {
                out.push_str("[]");
            }
        }
        TypeRef::Wildcard {
            bound,
            is_upper_bound,
        } => {
            out.push('?');
            if let Some(bound) = bound {
                out.push_str(if *is_upper_bound { " extends " } else { " super " });
                write_type(out, bound);
            }
        }
    }
}
