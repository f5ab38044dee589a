//! Operator shell.
//!
//! # Data Flow
//! ```text
//! stdin / script file
//!     → repl.rs (read line, prompt)
//!     → command.rs (name lookup, arity check)
//!     → Editor operation (semantic validation, mutation)
//!     → output writer
//! ```
//!
//! # Design Decisions
//! - Commands are a closed enum with arity fixed in one table
//! - Interactive errors are reported and the loop continues
//! - Overwrite confirmation reads from the same input as commands

pub mod command;
pub mod repl;

pub use command::{parse_command, Command, CommandError, CommandKind};
pub use repl::{CommandStatus, Mode, Shell};
