//! Canonical formatting of generated modules.
//!
//! Canonical form is whatever `prettyplease` prints for the `syn` tree of
//! the module. Text that does not parse is passed through untouched so the
//! defect stays visible in the written file.

use crate::error::{FormattingError, error_position};

/// Output of [`canonicalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    pub source: String,
    /// `false` when the input did not parse and `source` is the raw text.
    pub formatted: bool,
}

/// Parses `source` as a Rust module and pretty-prints it.
pub fn format_source(source: &str) -> Result<String, FormattingError> {
    let file = syn::parse_file(source).map_err(|source| {
        let (line, column) = error_position(&source);
        FormattingError {
            line,
            column,
            source,
        }
    })?;
    Ok(prettyplease::unparse(&file))
}

/// Formats `source`, falling back to the raw text with a warning.
pub fn canonicalize(source: String) -> Canonical {
    match format_source(&source) {
        Ok(formatted) => Canonical {
            source: formatted,
            formatted: true,
        },
        Err(error) => {
            tracing::warn!(%error, "generated source is not valid Rust, keeping it unformatted");
            Canonical {
                source,
                formatted: false,
            }
        }
    }
}
