//! Reporting and serialization.
//!
//! # Responsibilities
//! - Render channel listings and single-channel dumps for the operator
//! - Re-flatten the model and encode it in the console's file format
//! - Write output files atomically, after the stereo check passes
//!
//! # Design Decisions
//! - Output keys sorted, 2-space indent, trailing newline, UTF-8 literal
//! - The overwrite prompt lives in the shell; this module only asks a
//!   yes/no question through a callback
//! - Writes go to a sibling temp file that is renamed over the target

pub mod summary;
pub mod writer;

pub use summary::{render_channel_dump, render_channel_list};
pub use writer::{encode_flat, may_write, write_model, WriteOutcome};
