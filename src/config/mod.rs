//! Editor settings subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML, optional)
//!     → loader.rs (read, parse TOML)
//!     → validation.rs (ranges, templates, namespaces)
//!     → EditorConfig (validated)
//!     → console section handed to the editor, shell section to the REPL
//! ```
//!
//! # Design Decisions
//! - CLI flags override the file after loading
//! - All fields have defaults so no file is needed
//! - serde rejects malformed shapes; validation.rs reports every bad value at once

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_overrides, load_config, load_or_default, ConfigError};
pub use schema::{ConsoleConfig, EditorConfig, ObservabilityConfig, ShellConfig};
