//! Flat JSON output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::{ConfigModel, MixerError, MixerResult};
use crate::tree::FlatConfig;
use crate::validation::validate_stereo_pairs;

/// Result of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// Number of top-level entries written.
    pub entries: usize,
}

/// Encode flat pairs the way the console stores them: sorted keys, 2-space
/// indentation, non-ASCII kept literal, trailing newline.
pub fn encode_flat(flat: &FlatConfig) -> MixerResult<String> {
    let mut text = serde_json::to_string_pretty(flat)?;
    text.push('\n');
    Ok(text)
}

/// Decide whether `path` may be written. New paths are always fine;
/// existing ones need `confirm` to agree.
pub fn may_write(path: &Path, confirm: impl FnOnce(&Path) -> bool) -> bool {
    !path.exists() || confirm(path)
}

/// Validate, encode and write the model to `path`.
///
/// Nothing touches the filesystem unless the stereo check passes and the
/// overwrite decision allows it.
pub fn write_model(
    model: &ConfigModel,
    path: &Path,
    confirm: impl FnOnce(&Path) -> bool,
) -> MixerResult<WriteOutcome> {
    if let Err(violation) = validate_stereo_pairs(model) {
        tracing::warn!(path = %path.display(), %violation, "Write aborted");
        return Err(violation.into());
    }
    if !may_write(path, confirm) {
        return Err(MixerError::WriteDeclined(path.to_path_buf()));
    }

    let flat = model.to_flat();
    let text = encode_flat(&flat)?;

    let tmp = temp_path(path)?;
    if let Err(e) = fs::write(&tmp, text).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    tracing::info!(path = %path.display(), entries = flat.len(), "Configuration written");
    Ok(WriteOutcome {
        path: path.to_path_buf(),
        entries: flat.len(),
    })
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
