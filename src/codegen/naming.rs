//! Name transformations applied to event names during rendering.
//!
//! All functions are pure. The free functions assume a non-empty name;
//! [`EventName::parse`] is the checked entry point used by the renderer.

use crate::error::NameError;
use std::fmt;

/// Names the framework defines for its own session lifecycle. Their
/// constants are wrapped in a sentinel so they never collide with the
/// framework's own.
pub const RESERVED_NAMES: [&str; 5] = ["Connect", "Disconnect", "Event", "RateLimit", "Interface"];

const SENTINEL: &str = "__";

/// A single event name taken from the declarative list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventName<'a> {
    raw: &'a str,
}

impl<'a> EventName<'a> {
    pub fn parse(raw: &'a str) -> Result<Self, NameError> {
        if raw.is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self { raw })
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// `false` for the reserved session names, `true` for everything else.
    pub fn is_external_event(&self) -> bool {
        is_external_event(self.raw)
    }

    /// Upper snake case, sentinel-wrapped for reserved names.
    pub fn constant_form(&self) -> String {
        const_name(self.raw)
    }

    /// The name with its first character lower-cased.
    pub fn private_form(&self) -> String {
        private_name(self.raw)
    }

    /// Lower snake case without any sentinel; used for method names.
    pub fn snake_form(&self) -> String {
        snake_name(self.raw)
    }
}

impl fmt::Display for EventName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

pub fn is_external_event(name: &str) -> bool {
    !RESERVED_NAMES.contains(&name)
}

/// Inserts `_` between every ASCII lowercase letter and a following ASCII
/// uppercase letter, then upper-cases the result.
///
/// `MessageCreate` becomes `MESSAGE_CREATE`. Runs of capitals are left
/// alone, so `HTTPError` becomes `HTTPERROR`.
pub fn const_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + name.len() / 4);
    let mut prev: Option<char> = None;
    for ch in name.chars() {
        if let Some(p) = prev {
            if p.is_ascii_lowercase() && ch.is_ascii_uppercase() {
                out.push('_');
            }
        }
        out.push(ch);
        prev = Some(ch);
    }
    out.to_uppercase()
}

pub fn const_name(name: &str) -> String {
    let constant = const_case(name);
    if is_external_event(name) {
        constant
    } else {
        format!("{SENTINEL}{constant}{SENTINEL}")
    }
}

pub fn private_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn snake_name(name: &str) -> String {
    const_case(name).to_lowercase()
}
