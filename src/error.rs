//! Error types for the generation pipeline.
//!
//! Each stage owns its error type so the caller can tell which stage failed:
//!
//! - [`ExtractionError`]: the event list could not be read or parsed (fatal)
//! - [`RenderError`]: the accessor template failed to expand (fatal)
//! - [`FormattingError`]: the rendered module is not valid Rust (recoverable)
//! - [`PersistenceError`]: the generated module could not be written (fatal)
//!
//! [`GenerateError`] wraps the fatal ones and prefixes the stage name.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The event list file could not be turned into a set of names.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse {}:{line}:{column}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        #[source]
        source: syn::Error,
    },
}

/// An event name violated the transformer precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("event name must not be empty")]
    Empty,
}

/// The accessor template could not be expanded.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("invalid event name: {source}")]
    Name {
        #[from]
        source: NameError,
    },

    #[error("events `{first}` and `{second}` both generate `{ident}`")]
    Collision {
        first: String,
        second: String,
        ident: String,
    },
}

/// Rendered text did not parse as a Rust module.
#[derive(Debug, Error)]
#[error("generated source is not valid Rust at {line}:{column}: {source}")]
pub struct FormattingError {
    pub line: usize,
    pub column: usize,
    #[source]
    pub source: syn::Error,
}

/// The generated module could not be written.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not create a temporary file in {}: {source}", dir.display())]
    TempFile {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A fatal pipeline failure, tagged with the stage it came from.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("writing output failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("reading existing output failed: {}: {source}", path.display())]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Short stage label used in log fields.
    pub fn stage(&self) -> &'static str {
        match self {
            GenerateError::Extraction(_) => "extract",
            GenerateError::Render(_) => "render",
            GenerateError::Persistence(_) => "write",
            GenerateError::ReadOutput { .. } => "check",
        }
    }
}

/// Line and column (1-based line, 0-based column) where a syn error starts.
pub(crate) fn error_position(err: &syn::Error) -> (usize, usize) {
    let start = err.span().start();
    (start.line, start.column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_labels() {
        let err = GenerateError::from(RenderError::from(NameError::Empty));
        assert_eq!(err.stage(), "render");
        assert!(err.to_string().starts_with("rendering failed:"));

        let err = GenerateError::from(PersistenceError::Write {
            path: PathBuf::from("nextevent.rs"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(err.stage(), "write");
        assert!(err.to_string().contains("nextevent.rs"));
    }

    #[test]
    fn test_collision_names_both_events() {
        let err = RenderError::Collision {
            first: "GuildID".to_string(),
            second: "GuildId".to_string(),
            ident: "GUILD_ID".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "events `GuildID` and `GuildId` both generate `GUILD_ID`"
        );
    }

    #[test]
    fn test_parse_error_reports_position() {
        let source = "struct Ready;\nstruct ;\n";
        let err = syn::parse_file(source).err().expect("source should not parse");
        let (line, _column) = error_position(&err);
        assert_eq!(line, 2);
    }
}
