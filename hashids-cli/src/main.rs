use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use hashids_cli::commands::Command;
use hashids_cli::config::Settings;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogOutputFormat {
    Json,
    Pretty,
}

/// Command line arguments for the hashids tool.
#[derive(Debug, Parser)]
#[clap(name = "hashids", version, about)]
struct HashidsArgs {
    /// Optional path to the configuration file. If not provided, it is expected
    /// that all parameters are provided via environment variables.
    #[clap(short = 'c', long, required = false)]
    config: Option<PathBuf>,

    #[clap(short = 'o', long = "output-format", default_value = "pretty")]
    output_format: Option<LogOutputFormat>,

    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse the command line arguments.
    let args = HashidsArgs::parse();

    // Configure the binary's stderr output based on the provided output format.
    let pretty = matches!(args.output_format, Some(LogOutputFormat::Pretty));
    hashids_cli::logging::setup_logging("warn,hashids=info,hashids_cli=info", pretty);

    // Load the configuration file and/or environment variables.
    let settings = Settings::new(args.config.as_ref()).inspect_err(|error| {
        tracing::error!(%error, "failed to load the configuration");
    })?;
    let hashids = settings.hashids.codec()?;

    let output = args.command.run(&hashids).inspect_err(|error| {
        tracing::error!(%error, "command failed");
    })?;
    println!("{output}");

    Ok(())
}
