//! Channel swap subsystem.
//!
//! # Data Flow
//! ```text
//! swap_inputs(a, b):
//!     plan.rs (existence, stereo partner, range checks; no mutation)
//!     → engine.rs applies each slot pair:
//!         exchange records → rebind src/scsrc → remap view groups
//!
//! swap_auxes(a, b):
//!     existence checks
//!     → exchange aux records
//!     → exchange sends on every feed channel
//!     → remap view groups at aux offset
//! ```
//!
//! # Design Decisions
//! - All checks happen before the first mutation; a rejected swap leaves the
//!   model untouched
//! - Hardware bindings belong to the slot, not the record
//! - Aux swaps do not follow stereo partners

pub mod engine;
pub mod plan;

pub use engine::{ChannelSwapEngine, SwapReport};
pub use plan::SlotPair;
