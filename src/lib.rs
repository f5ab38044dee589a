//! Mixing console configuration editor library.

pub mod config;
pub mod editor;
pub mod model;
pub mod observability;
pub mod report;
pub mod shell;
pub mod swap;
pub mod tree;
pub mod validation;

pub use config::EditorConfig;
pub use editor::Editor;
pub use model::{ConfigModel, MixerError, MixerResult};
pub use shell::Shell;
