//! Binary entrypoint: validate, score, and emit audit reports
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use afq_core::AuditError;
use afq_engine::{Evaluator, RubricEvaluator};
use afq_schema::{SchemaConfig, SchemaStore};
use clap::Parser;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "afq")]
#[command(version, about = "Affiliate content quality audit")]
#[command(after_help = "Examples:
  afq -i article.json                 Score an article, report on stdout
  afq -i article.json -o report.json  Write the report to a file
  afq -i article.json --validate-only Check the input against the schema only")]
struct Cli {
    /// Input JSON file path
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output JSON file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Directory holding the published schema documents
    #[arg(long, value_name = "DIR", default_value = "schemas", env = "AFQ_SCHEMA_DIR")]
    schema_dir: PathBuf,

    /// Verbose progress messages on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Only validate the input, do not evaluate
    #[arg(long)]
    validate_only: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AuditError> {
    let config = SchemaConfig::from_dir(&cli.schema_dir);
    tracing::info!("loading input schema from {}", config.input_schema.display());
    tracing::info!("loading output schema from {}", config.output_schema.display());
    let store = SchemaStore::load(&config)?;

    let raw = fs::read_to_string(&cli.input).map_err(|e| {
        AuditError::InputParse(format!("cannot read input file {}: {}", cli.input.display(), e))
    })?;
    let input: Value = serde_json::from_str(&raw).map_err(|e| {
        AuditError::InputParse(format!("input file {} is not valid JSON: {}", cli.input.display(), e))
    })?;

    if !store.validate_input(&input) {
        return Err(AuditError::InputValidation(
            "input document failed schema validation".to_string(),
        ));
    }
    tracing::info!("input validation passed");

    if cli.validate_only {
        println!("Validation complete - input is valid");
        return Ok(());
    }

    tracing::info!("starting content evaluation");
    let document = serde_json::from_value(input).map_err(|e| {
        AuditError::InputParse(format!("input does not bind to the document model: {}", e))
    })?;
    let evaluator = RubricEvaluator::new();
    let report = evaluator.evaluate(&document);

    let report_json =
        serde_json::to_value(&report).map_err(|e| AuditError::Serialize(e.to_string()))?;
    if !store.validate_output(&report_json) {
        return Err(AuditError::OutputValidation(
            "produced report failed output schema validation".to_string(),
        ));
    }
    tracing::info!("output validation passed");

    // Render the full report before touching the destination: either
    // the whole valid report is written, or nothing is.
    let rendered = serde_json::to_string_pretty(&report_json)
        .map_err(|e| AuditError::Serialize(e.to_string()))?;

    match &cli.output {
        Some(path) => {
            write_report(path, &rendered)?;
            tracing::info!("results written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Write the report through a temporary file in the target directory,
/// renamed into place: a mid-write failure must never leave a
/// truncated report at the destination.
fn write_report(path: &Path, rendered: &str) -> Result<(), AuditError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err =
        |e| AuditError::Io(format!("cannot write report to {}: {}", path.display(), e));

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(rendered.as_bytes()).map_err(io_err)?;
    tmp.persist(path)
        .map_err(|e| AuditError::Io(format!("cannot write report to {}: {}", path.display(), e)))?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
