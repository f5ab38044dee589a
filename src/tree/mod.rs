//! Path tree subsystem.
//!
//! # Data Flow
//! ```text
//! flat JSON object ("i.3.name" → "Kick")
//!     → flat.rs::nest (split on '.', build branches)
//!     → PathNode tree (owned by the model)
//!     → flat.rs::flatten (join segments back with '.')
//!     → flat JSON object
//! ```
//!
//! # Design Decisions
//! - A path may be both a value and a prefix; branches carry an optional payload
//! - Nesting is insertion-order independent
//! - The top-level `LOCAL` key is opaque and never split
//! - No knowledge of the console schema lives here

pub mod flat;
pub mod node;

pub use flat::{flatten, nest, FlatConfig, LOCAL_KEY};
pub use node::PathNode;
