use anyhow::Context;
use jstruct_core::{ExtractOptions, JstructError, OutputScope, render_unit};
use jstruct_java::JavaParser;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub struct ExtractArgs {
    pub input: PathBuf,
    /// `None` prints to stdout.
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub all: bool,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    if !args.input.is_file() {
        return Err(JstructError::InputNotFound(args.input).into());
    }

    let source = fs::read_to_string(&args.input)
        .map_err(JstructError::Io)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let parser = JavaParser::new()?;
    let unit = parser
        .parse_unit(&source)
        .map_err(|e| JstructError::Parsing(format!("{}: {e}", args.input.display())))?;

    let options = ExtractOptions {
        strict: args.strict,
        scope: if args.all {
            OutputScope::All
        } else {
            OutputScope::Root
        },
    };
    let json = render_unit(&unit, &options)?;

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{json}\n"))
                .map_err(JstructError::Io)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Extracted {} type(s) from {} into {}",
                unit.types.len(),
                args.input.display(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
