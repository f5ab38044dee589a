//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stderr of the operator's terminal
//! ```
//!
//! # Design Decisions
//! - Mutations log at info with the ids involved
//! - Rejected commands log at warn
//! - Planning detail logs at debug

pub mod logging;
