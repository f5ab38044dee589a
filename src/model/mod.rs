//! Console configuration model.
//!
//! # Data Flow
//! ```text
//! flat JSON text
//!     → console.rs (schema check, nest into PathNode)
//!     → ConfigModel (sole mutable state for the session)
//!     → channel.rs / view_group.rs (typed read views)
//!     → to_flat() on write
//! ```
//!
//! # Design Decisions
//! - Unknown fields are kept verbatim in the tree
//! - Typed views borrow the tree; they never copy it
//! - Only schema "6" loads

pub mod channel;
pub mod console;
pub mod types;
pub mod view_group;

pub use channel::{AuxSendTable, ChannelRecord};
pub use console::{ConfigModel, SCHEMA_KEY, SUPPORTED_SCHEMA};
pub use types::{parse_channel_id, ChannelId, ChannelKind, MixerError, MixerResult, StereoSide};
pub use view_group::ViewGroup;
