use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cs_translator::cli::commands::{engines, listen};
use cs_translator::cli::{Args, Command};
use cs_translator::output::{self, OutputConfig};
use cs_translator::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    init_tracing(args.verbose);

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Engines) => {
            engines::print_engines()?;
        }
        None => {
            listen::run_listen(args.resolve_options()).await?;
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level chosen here.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,cs_translator=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!output::is_no_color())
        .with_target(false)
        .init();
}
