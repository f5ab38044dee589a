//! Editor settings schema.
//!
//! Settings describe the console layout the editor assumes and how the shell
//! and logging behave. All types derive Serde traits for deserialization from
//! a TOML settings file; every field has a default so the file is optional.

use serde::{Deserialize, Serialize};

use crate::model::ChannelId;

/// Root settings for the editor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Console layout assumptions.
    pub console: ConsoleConfig,

    /// Interactive shell behaviour.
    pub shell: ShellConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Console layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Number of input slots; valid input ids are `0..input_count`.
    pub input_count: ChannelId,

    /// Offset added to aux ids inside view-group index lists.
    pub aux_view_offset: ChannelId,

    /// Namespaces whose channels carry aux-send tables.
    pub feed_namespaces: Vec<String>,

    /// Template for an input's `src` binding; `{id}` is the slot id.
    pub src_template: String,

    /// Template for an input's `scsrc` binding; `{id}` is the slot id.
    pub scsrc_template: String,

    /// Key inside the `LOCAL` blob holding raw view-group lists.
    pub local_view_group_key: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            input_count: 24,
            aux_view_offset: 38,
            feed_namespaces: ["f", "i", "l", "p"].map(String::from).to_vec(),
            src_template: "hw.{id}".to_string(),
            scsrc_template: "hw.{id}".to_string(),
            local_view_group_key: "vg".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// `src` binding for an input slot.
    pub fn src_for(&self, id: ChannelId) -> String {
        self.src_template.replace("{id}", &id.to_string())
    }

    /// `scsrc` binding for an input slot.
    pub fn scsrc_for(&self, id: ChannelId) -> String {
        self.scsrc_template.replace("{id}", &id.to_string())
    }

    /// Whether `id` names an input slot the console has.
    pub fn input_in_range(&self, id: i64) -> bool {
        (0..i64::from(self.input_count)).contains(&id)
    }
}

/// Shell settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt printed before each command.
    pub prompt: String,

    /// Overwrite existing files without asking.
    pub assume_yes: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "mixer> ".to_string(),
            assume_yes: false,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
