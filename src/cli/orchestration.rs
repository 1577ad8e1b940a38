//! Main workflow orchestration logic
//!
//! Reads the document, updates its version, takes a backup when the input
//! file is about to be overwritten, and writes the result. Kept apart from
//! `main.rs` so the workflow can run without clap.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::backup;
use crate::config::Config;
use crate::document::Document;
use crate::domain::{self, ChangeReporter, VersionRepr, VersionUpdateRequest};
use crate::error::{NumbumpError, Result};
use crate::ui;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Document to read; standard input when `None`
    pub input: Option<PathBuf>,

    /// File to write instead of standard output
    pub output: Option<PathBuf>,

    /// Write back to `input`
    pub overwrite: bool,

    /// Skip the backup when the input file is overwritten
    pub no_backup: bool,

    /// Absolute version to set
    pub set: Option<f64>,

    /// Amount to add; the configured default is used when neither this nor `set` is given
    pub increment: Option<f64>,

    /// Decimal places to round to instead of the inferred count
    pub places: Option<u32>,

    /// Field holding the version; the configured field when `None`
    pub field: Option<String>,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The version before the update
    pub previous: VersionRepr,

    /// The version written to the document
    pub version: VersionRepr,

    /// Human-readable summary of the change
    pub description: String,

    /// File written, or `None` for standard output
    pub output: Option<PathBuf>,

    /// Backup taken before overwriting the input
    pub backup: Option<PathBuf>,

    /// Bytes of serialized document written
    pub bytes_written: usize,
}

/// Main bump workflow
///
/// 1. Refuse `overwrite` without an input file
/// 2. Read the document and update its version
/// 3. Back up the input file if it is also the output
/// 4. Write the document to the output file or `stdout`
///
/// # Arguments
/// * `args` - Workflow arguments
/// * `config` - numbump configuration
/// * `reporter` - Receives the description of the version change
/// * `stdout` - Destination when no output file is selected
pub fn run_bump_workflow(
    args: &BumpWorkflowArgs,
    config: &Config,
    reporter: &mut dyn ChangeReporter,
    stdout: &mut dyn Write,
) -> Result<WorkflowResult> {
    if args.overwrite && args.input.is_none() {
        return Err(NumbumpError::config(
            "--overwrite requires a filename; can't overwrite stdin",
        ));
    }

    let field = args.field.as_deref().unwrap_or(config.field.as_str());
    let mut document = Document::read(args.input.as_deref())?;
    let previous = document.version(field)?;

    let mut request = VersionUpdateRequest::new(previous.clone());
    request.places_override = args.places;
    match args.set {
        Some(value) => request.set_to = Some(value),
        None => request.increment_by = Some(args.increment.unwrap_or(config.default_increment)),
    }

    let update = domain::update(&request, reporter)?;
    document.set_version(field, &update.rendered)?;

    let output = if args.overwrite {
        args.input.clone()
    } else {
        args.output.clone()
    };

    let mut backup_file = None;
    if let (Some(output), Some(input)) = (output.as_deref(), args.input.as_deref()) {
        if is_same_file(output, input) {
            if config.backup.enabled && !args.no_backup {
                let (bytes, path) = backup::create_backup(input, &config.backup.suffix)?;
                ui::display_status(&format!(
                    "Copied {} to {} ({} bytes)",
                    input.display(),
                    path.display(),
                    bytes
                ));
                backup_file = Some(path);
            } else {
                ui::display_warning(&format!("about to overwrite {}!", input.display()));
            }
        }
    }

    let mut out = document.to_pretty_string(config.output.indent)?;
    out.push('\n');
    match output.as_deref() {
        Some(path) => {
            fs::write(path, &out)?;
            ui::display_success(&format!("Wrote {} bytes to {}", out.len(), path.display()));
        }
        None => stdout.write_all(out.as_bytes())?,
    }

    Ok(WorkflowResult {
        previous,
        version: update.rendered,
        description: update.description,
        output,
        backup: backup_file,
        bytes_written: out.len(),
    })
}

/// Whether both paths exist and name the same file (hard links included)
fn is_same_file(a: &Path, b: &Path) -> bool {
    same_file::is_same_file(a, b).unwrap_or(false)
}
