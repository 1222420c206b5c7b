//! Reads the declarative event list.
//!
//! The list is an ordinary Rust source file that is parsed but never
//! compiled. Every top-level item that introduces a name contributes that
//! name, so a list usually looks like:
//!
//! ```rust,ignore
//! struct MessageCreate;
//! struct PresenceUpdate;
//! struct Ready;
//! ```

use crate::error::{ExtractionError, error_position};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use syn::ext::IdentExt;
use syn::{Ident, Item};

/// Returns the names declared at the top level of `path`.
pub fn extract_names(path: &Path) -> Result<BTreeSet<String>, ExtractionError> {
    let source = fs::read_to_string(path).map_err(|source| ExtractionError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let names = names_in_source(&source).map_err(|source| {
        let (line, column) = error_position(&source);
        ExtractionError::Parse {
            path: path.to_path_buf(),
            line,
            column,
            source,
        }
    })?;
    tracing::debug!(path = %path.display(), count = names.len(), "extracted event names");
    Ok(names)
}

/// Parses `source` and collects the declared top-level names.
pub fn names_in_source(source: &str) -> syn::Result<BTreeSet<String>> {
    let file = syn::parse_file(source)?;
    Ok(file
        .items
        .iter()
        .filter_map(declared_ident)
        .map(|ident| ident.unraw().to_string())
        .collect())
}

fn declared_ident(item: &Item) -> Option<&Ident> {
    match item {
        Item::Struct(item) => Some(&item.ident),
        Item::Enum(item) => Some(&item.ident),
        Item::Union(item) => Some(&item.ident),
        Item::Type(item) => Some(&item.ident),
        Item::Trait(item) => Some(&item.ident),
        Item::TraitAlias(item) => Some(&item.ident),
        Item::Fn(item) => Some(&item.sig.ident),
        Item::Const(item) => Some(&item.ident),
        Item::Static(item) => Some(&item.ident),
        Item::Mod(item) => Some(&item.ident),
        _ => None,
    }
}
