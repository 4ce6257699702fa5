use jstruct_core::serialize::{descriptor_schema, serialize};

pub fn run() -> anyhow::Result<()> {
    let schema = descriptor_schema()?;
    println!("{}", serialize(&schema)?);
    Ok(())
}
