//! Generates typed "next event" accessors for an event-driven bot framework.
//!
//! The generator reads the event names declared in `tools/events.rs`, renders
//! a blocking accessor and a channel accessor for each of them, formats the
//! result and writes it to `nextevent.rs` in the working directory.

pub mod codegen;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{CliArgs, GeneratorConfig, INPUT_PATH, OUTPUT_FILE_NAME};
pub use error::{
    ExtractionError, FormattingError, GenerateError, NameError, PersistenceError, RenderError,
};
pub use logging::{LogFormat, LoggingConfig, init_logging};

use codegen::{AccessorRenderer, GenerationContext};
use std::path::PathBuf;

/// Summary of a completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub event_count: usize,
    /// `false` when the rendered module did not parse and was written raw.
    pub formatted: bool,
    /// Hex SHA-256 of the written bytes.
    pub digest: String,
}

/// Result of [`check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// Rendered module for `config`, before anything touches the output path.
#[derive(Debug)]
struct Generated {
    event_count: usize,
    source: String,
    formatted: bool,
}

fn build(config: &GeneratorConfig) -> Result<Generated, GenerateError> {
    let names = codegen::extract_names(&config.input_path)?;
    let context = GenerationContext::from_names(names);
    if context.is_empty() {
        tracing::warn!(
            input = %config.input_path.display(),
            "event list declares no events"
        );
    }
    let rendered = AccessorRenderer::new()?.render(&context)?;
    let canonical = codegen::canonicalize(rendered);
    Ok(Generated {
        event_count: context.len(),
        source: canonical.source,
        formatted: canonical.formatted,
    })
}

/// Runs the whole pipeline and overwrites the output file.
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport, GenerateError> {
    let span = tracing::info_span!("generate", input = %config.input_path.display());
    let _enter = span.enter();

    let generated = build(config)?;
    codegen::write_output(&config.output_path, generated.source.as_bytes())?;

    let report = GenerationReport {
        output_path: config.output_path.clone(),
        event_count: generated.event_count,
        formatted: generated.formatted,
        digest: codegen::content_digest(generated.source.as_bytes()),
    };
    tracing::info!(
        output = %report.output_path.display(),
        events = report.event_count,
        formatted = report.formatted,
        digest = %report.digest,
        "generated accessors"
    );
    Ok(report)
}

/// Compares what [`generate`] would write with the file on disk.
pub fn check(config: &GeneratorConfig) -> Result<CheckOutcome, GenerateError> {
    let span = tracing::info_span!("check", input = %config.input_path.display());
    let _enter = span.enter();

    let generated = build(config)?;
    let expected = codegen::content_digest(generated.source.as_bytes());
    let current =
        codegen::file_digest(&config.output_path).map_err(|source| GenerateError::ReadOutput {
            path: config.output_path.clone(),
            source,
        })?;

    let outcome = match current {
        None => CheckOutcome::Missing,
        Some(digest) if digest == expected => CheckOutcome::UpToDate,
        Some(_) => CheckOutcome::Stale,
    };
    tracing::info!(
        output = %config.output_path.display(),
        outcome = ?outcome,
        "checked generated accessors"
    );
    Ok(outcome)
}
