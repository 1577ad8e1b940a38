use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use numbump::cli::{run_bump_workflow, BumpWorkflowArgs};
use numbump::config;
use numbump::ui;

#[derive(clap::Parser)]
#[command(
    name = "numbump",
    version,
    about = "Set or increment the numeric version in a JSON file",
    after_help = "Works on any JSON file with a top-level version key holding an integer, \
a float or a numeric string. The new version keeps the style of the old one."
)]
struct Args {
    #[arg(help = "metadata.json file path (default: read from stdin)")]
    metadata: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "NUM",
        value_parser = parse_finite,
        allow_negative_numbers = true,
        conflicts_with = "set",
        help = "Add NUM to the version number (default: 0.1)"
    )]
    inc: Option<f64>,

    #[arg(
        short,
        long,
        value_name = "NUM",
        value_parser = parse_finite,
        allow_negative_numbers = true,
        help = "Set the version number to NUM"
    )]
    set: Option<f64>,

    #[arg(
        short = 'n',
        long,
        value_name = "NUM",
        help = "Round version to NUM digits after the decimal (default: deduce)"
    )]
    places: Option<u32>,

    #[arg(short, long, value_name = "PATH", help = "Write output to PATH (default: stdout)")]
    out: Option<PathBuf>,

    #[arg(
        short = 'O',
        long,
        requires = "metadata",
        conflicts_with = "out",
        help = "Overwrite file in-place (implies -o=<metadata>)"
    )]
    overwrite: bool,

    #[arg(long, help = "Do not create a backup file when overwriting the input file")]
    no_backup: bool,

    #[arg(short, long, value_name = "NAME", help = "Top-level field holding the version")]
    field: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn parse_finite(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' is not a finite number", s))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = BumpWorkflowArgs {
        input: args.metadata,
        output: args.out,
        overwrite: args.overwrite,
        no_backup: args.no_backup,
        set: args.set,
        increment: args.inc,
        places: args.places,
        field: args.field,
    };

    let mut reporter = ui::StderrReporter;
    let mut stdout = io::stdout().lock();
    if let Err(e) = run_bump_workflow(&workflow_args, &config, &mut reporter, &mut stdout) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
