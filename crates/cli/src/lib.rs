mod extract;
mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jstruct",
    version,
    about = "Extract the structure of a Java source file as JSON",
    long_about = "jstruct parses one Java compilation unit and emits a structural descriptor of its \
                  primary type: kind, modifiers, supertypes, annotations, fields, constructors, \
                  methods and nested types."
)]
pub struct Cli {
    /// Directory for a daily-rolling log file in addition to stderr
    #[arg(long, global = true, env = "JSTRUCT_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the descriptor of a Java source file
    #[command(
        long_about = "Parses INPUT and writes the descriptor of its root type. The root is the first \
                            public top-level type, or the last declared one when none is public."
    )]
    Extract {
        /// Java source file to read
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Where to write the JSON document
        #[arg(short, long, value_name = "PATH", default_value = "output.json")]
        output: PathBuf,

        /// Drop false flags and empty lists from the output
        #[arg(short = 't', long)]
        strict: bool,

        /// Emit every top-level type instead of only the root
        #[arg(long)]
        all: bool,

        /// Print the document to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Print the JSON Schema of the descriptor document
    Schema,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Extract { .. } => "extract",
        Commands::Schema => "schema",
    };
    let _guard = jstruct_core::logging::init_logging(component, cli.log_dir.as_deref());

    match cli.command {
        Commands::Extract {
            input,
            output,
            strict,
            all,
            stdout,
        } => extract::run(extract::ExtractArgs {
            input,
            output: (!stdout).then_some(output),
            strict,
            all,
        }),
        Commands::Schema => schema::run(),
    }
}
