//! Channel identifiers and error definitions.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::validation::StereoViolation;

/// Numeric channel identifier, unique within its namespace.
pub type ChannelId = u32;

/// Channel namespaces known to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChannelKind {
    Input,
    Aux,
    Fx,
    Line,
    Player,
}

impl ChannelKind {
    /// Top-level path segment holding channels of this kind.
    pub fn namespace(self) -> &'static str {
        match self {
            ChannelKind::Input => "i",
            ChannelKind::Aux => "a",
            ChannelKind::Fx => "f",
            ChannelKind::Line => "l",
            ChannelKind::Player => "p",
        }
    }

    pub fn from_namespace(namespace: &str) -> Option<Self> {
        match namespace {
            "i" => Some(ChannelKind::Input),
            "a" => Some(ChannelKind::Aux),
            "f" => Some(ChannelKind::Fx),
            "l" => Some(ChannelKind::Line),
            "p" => Some(ChannelKind::Player),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ChannelKind::Input => "input",
            ChannelKind::Aux => "aux",
            ChannelKind::Fx => "fx",
            ChannelKind::Line => "line",
            ChannelKind::Player => "player",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of a channel inside a stereo pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StereoSide {
    Left,
    Right,
}

impl StereoSide {
    /// Decode a `stereoIndex` value. Anything other than 0 or 1 is mono.
    pub fn from_value(value: &Value) -> Option<Self> {
        let index = match value {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        if index == 0.0 {
            Some(StereoSide::Left)
        } else if index == 1.0 {
            Some(StereoSide::Right)
        } else {
            None
        }
    }

    /// Distance from this channel to its partner: +1 for left, -1 for right.
    pub fn offset(self) -> i64 {
        match self {
            StereoSide::Left => 1,
            StereoSide::Right => -1,
        }
    }

    /// Identifier of the partner channel, if representable.
    pub fn partner(self, id: ChannelId) -> Option<ChannelId> {
        ChannelId::try_from(i64::from(id) + self.offset()).ok()
    }

    /// Marker used in channel listings.
    pub fn marker(self) -> &'static str {
        match self {
            StereoSide::Left => "L",
            StereoSide::Right => "R",
        }
    }
}

/// Parse an operator-supplied identifier for a channel of `kind`.
///
/// Only the canonical decimal form names a channel, so `03` and `+3` do not
/// resolve to channel 3.
pub fn parse_channel_id(kind: ChannelKind, raw: &str) -> MixerResult<ChannelId> {
    let trimmed = raw.trim();
    trimmed
        .parse::<ChannelId>()
        .ok()
        .filter(|id| id.to_string() == trimmed)
        .ok_or_else(|| MixerError::ChannelNotFound {
            kind,
            id: raw.to_string(),
        })
}

/// Errors raised while loading, editing or writing a mixer configuration.
#[derive(Debug, Error)]
pub enum MixerError {
    /// The file's `schema` tag is missing or not the supported version.
    #[error("unsupported schema version {found}; expected \"{expected}\"")]
    SchemaMismatch { found: String, expected: &'static str },

    /// No channel with that identifier in the namespace.
    #[error("{kind} channel {id} not found")]
    ChannelNotFound { kind: ChannelKind, id: String },

    /// A swap would move a stereo partner somewhere it cannot go.
    #[error("invalid stereo pairing: {0}")]
    InvalidStereoPairing(String),

    /// Stereo adjacency is broken; nothing was written.
    #[error("structural invariant violated: {0}")]
    StructuralInvariantViolation(#[from] StereoViolation),

    /// The configuration document is not a JSON object.
    #[error("configuration root must be a JSON object")]
    NotAnObject,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The operator declined to overwrite an existing file.
    #[error("not overwriting {}", .0.display())]
    WriteDeclined(PathBuf),
}

/// Result type for mixer operations.
pub type MixerResult<T> = Result<T, MixerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stereo_side_decoding() {
        assert_eq!(StereoSide::from_value(&json!(0)), Some(StereoSide::Left));
        assert_eq!(StereoSide::from_value(&json!(1)), Some(StereoSide::Right));
        assert_eq!(StereoSide::from_value(&json!("1")), Some(StereoSide::Right));
        assert_eq!(StereoSide::from_value(&json!(-1)), None);
        assert_eq!(StereoSide::from_value(&json!(null)), None);
    }

    #[test]
    fn test_partner() {
        assert_eq!(StereoSide::Left.partner(4), Some(5));
        assert_eq!(StereoSide::Right.partner(5), Some(4));
        assert_eq!(StereoSide::Right.partner(0), None);
    }

    #[test]
    fn test_parse_channel_id() {
        assert_eq!(parse_channel_id(ChannelKind::Input, "12").unwrap(), 12);
        let err = parse_channel_id(ChannelKind::Aux, "x1").unwrap_err();
        assert_eq!(err.to_string(), "aux channel x1 not found");
        assert_eq!(parse_channel_id(ChannelKind::Input, " 0 ").unwrap(), 0);
        for raw in ["03", "+3", "-0", "3.0", ""] {
            assert!(
                parse_channel_id(ChannelKind::Input, raw).is_err(),
                "{raw:?} should not name a channel"
            );
        }
    }

    #[test]
    fn test_namespace_mapping() {
        for kind in [
            ChannelKind::Input,
            ChannelKind::Aux,
            ChannelKind::Fx,
            ChannelKind::Line,
            ChannelKind::Player,
        ] {
            assert_eq!(ChannelKind::from_namespace(kind.namespace()), Some(kind));
        }
        assert_eq!(ChannelKind::from_namespace("vg"), None);
    }
}
