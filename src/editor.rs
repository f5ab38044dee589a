//! Operation API used by the shell.
//!
//! Every operation takes the operator's raw string arguments and does all
//! semantic validation itself, so callers only need to check arity.

use std::fs;
use std::path::Path;

use crate::config::ConsoleConfig;
use crate::model::{ConfigModel, MixerResult};
use crate::report::{render_channel_dump, render_channel_list, write_model, WriteOutcome};
use crate::swap::{ChannelSwapEngine, SwapReport};

/// An editing session over one loaded configuration.
#[derive(Debug, Clone)]
pub struct Editor {
    model: ConfigModel,
    console: ConsoleConfig,
}

impl Editor {
    pub fn new(model: ConfigModel, console: ConsoleConfig) -> Self {
        Self { model, console }
    }

    /// Parse a flat JSON document. Fails on any schema other than "6".
    pub fn from_json(text: &str, console: ConsoleConfig) -> MixerResult<Self> {
        Ok(Self::new(ConfigModel::from_json(text)?, console))
    }

    /// Read and parse a configuration file.
    pub fn load_file(path: &Path, console: ConsoleConfig) -> MixerResult<Self> {
        let text = fs::read_to_string(path)?;
        let editor = Self::from_json(&text, console)?;
        tracing::info!(
            path = %path.display(),
            inputs = editor.model.inputs().len(),
            auxes = editor.model.auxes().len(),
            view_groups = editor.model.view_groups().len(),
            "Configuration loaded"
        );
        Ok(editor)
    }

    pub fn model(&self) -> &ConfigModel {
        &self.model
    }

    pub fn console(&self) -> &ConsoleConfig {
        &self.console
    }

    pub fn dump_aux(&self, id: &str) -> MixerResult<String> {
        Ok(render_channel_dump(&self.model.aux(id)?))
    }

    pub fn dump_input(&self, id: &str) -> MixerResult<String> {
        Ok(render_channel_dump(&self.model.input(id)?))
    }

    pub fn print_auxes(&self) -> String {
        render_channel_list(&self.model.auxes())
    }

    pub fn print_inputs(&self) -> String {
        render_channel_list(&self.model.inputs())
    }

    /// Rename an input; returns the name as stored.
    pub fn rename_input(&mut self, id: &str, name: &str) -> MixerResult<String> {
        let stored = self.model.rename_input(id, name)?;
        tracing::info!(id, name = %stored, "Input renamed");
        Ok(stored)
    }

    pub fn swap_auxes(&mut self, a: &str, b: &str) -> MixerResult<SwapReport> {
        ChannelSwapEngine::new(&self.console).swap_auxes(&mut self.model, a, b)
    }

    pub fn swap_inputs(&mut self, a: &str, b: &str) -> MixerResult<SwapReport> {
        ChannelSwapEngine::new(&self.console).swap_inputs(&mut self.model, a, b)
    }

    /// Write the model to `path`. `confirm` is asked only when the path
    /// already exists.
    pub fn write_file(
        &self,
        path: &str,
        confirm: impl FnOnce(&Path) -> bool,
    ) -> MixerResult<WriteOutcome> {
        write_model(&self.model, Path::new(path), confirm)
    }
}
