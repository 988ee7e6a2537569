use anyhow::{Context, Result};
use clap::Parser;
use report_converter::{ConversionOutcome, Family, convert, split_lines};
use std::io::Read;
use std::path::PathBuf;
use tracing::{Level, info};

/// Creates a report directory from the given code analyzer output which can
/// be stored to a report server.
#[derive(Parser, Debug)]
#[command(name = "report-converter", version)]
struct Args {
    /// Code analyzer output file. Standard input is read when omitted.
    input: Option<PathBuf>,

    /// Directory the report files are written to
    #[arg(short, long = "output")]
    output_dir: PathBuf,

    /// Format of the analyzer output: clang-tidy, asan, msan, ubsan or tsan
    #[arg(short = 't', long = "type", value_name = "TYPE", value_parser = parse_family)]
    family: Family,

    /// Delete files stored in the output directory before writing
    #[arg(short, long)]
    clean: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_family(value: &str) -> Result<Family, String> {
    value.parse::<Family>().map_err(|e| e.to_string())
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read analyzer output {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read analyzer output from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let text = read_input(args.input.as_ref())?;
    let lines = split_lines(&text);

    let outcome = convert(&lines, args.family, &args.output_dir, args.clean)
        .with_context(|| format!("Failed to convert '{}' output", args.family))?;

    match outcome {
        ConversionOutcome::Written(files) => {
            info!("{} report file(s) written to '{}'.", files.len(), args.output_dir.display());
        }
        ConversionOutcome::NothingFound => {}
    }

    Ok(())
}
