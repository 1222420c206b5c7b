//! Accessor generation pipeline.
//!
//! ```text
//! tools/events.rs → extract → sort → render → canonicalize → nextevent.rs
//! ```
//!
//! ## Modules
//!
//! - **extract**: collects the top-level names of the declarative event list
//! - **naming**: constant, private and snake forms of an event name
//! - **render**: expands the accessor template over a [`GenerationContext`]
//! - **format**: `prettyplease` canonical form, raw fallback on failure
//! - **writer**: atomic overwrite of the output file, content digests
//!
//! ## Generated code
//!
//! For every event `N` the module defines `Bot::next_n`, which blocks on a
//! fresh channel, and `Bot::next_n_chan`, which registers a one-shot handler
//! with `self.dispatcher` and hands back the receiving end. The dispatcher
//! itself belongs to the host crate; the generated code only calls
//! `add_handler_once(kind, handler)` on it.

pub mod extract;
pub mod format;
pub mod naming;
pub mod render;
pub mod writer;

pub use extract::{extract_names, names_in_source};
pub use format::{Canonical, canonicalize, format_source};
pub use naming::{
    EventName, RESERVED_NAMES, const_name, is_external_event, private_name, snake_name,
};
pub use render::{AccessorRenderer, GenerationContext};
pub use writer::{content_digest, file_digest, write_output};
