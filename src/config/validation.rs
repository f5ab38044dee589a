//! Settings validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check value ranges and template placeholders
//! - Keep aux view indices clear of the input range
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: EditorConfig → Result<(), Vec<ValidationError>>
//! - Runs before settings are accepted

use std::fmt;

use crate::config::schema::EditorConfig;
use crate::model::ChannelKind;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate settings, collecting every problem found.
pub fn validate_config(config: &EditorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let console = &config.console;

    if console.input_count == 0 {
        errors.push(ValidationError::new("console.input_count", "must be greater than 0"));
    }
    if console.aux_view_offset < console.input_count {
        errors.push(ValidationError::new(
            "console.aux_view_offset",
            format!("must be at least input_count ({})", console.input_count),
        ));
    }
    if console.feed_namespaces.is_empty() {
        errors.push(ValidationError::new("console.feed_namespaces", "must not be empty"));
    }
    for namespace in &console.feed_namespaces {
        match ChannelKind::from_namespace(namespace) {
            None => errors.push(ValidationError::new(
                "console.feed_namespaces",
                format!("unknown namespace '{namespace}'"),
            )),
            Some(ChannelKind::Aux) => errors.push(ValidationError::new(
                "console.feed_namespaces",
                "aux channels do not feed themselves",
            )),
            Some(_) => {}
        }
    }
    if !console.src_template.contains("{id}") {
        errors.push(ValidationError::new("console.src_template", "must contain {id}"));
    }
    if !console.scsrc_template.contains("{id}") {
        errors.push(ValidationError::new("console.scsrc_template", "must contain {id}"));
    }
    if console.local_view_group_key.is_empty() {
        errors.push(ValidationError::new("console.local_view_group_key", "must not be empty"));
    }
    if config.shell.prompt.is_empty() {
        errors.push(ValidationError::new("shell.prompt", "must not be empty"));
    }
    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("expected one of {}", LOG_LEVELS.join(", ")),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&EditorConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = EditorConfig::default();
        config.console.input_count = 40;
        config.console.feed_namespaces = vec!["i".into(), "a".into(), "zz".into()];
        config.console.src_template = "hw".into();
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        let fields = errors.iter().map(|e| e.field).collect::<Vec<_>>();
        assert_eq!(
            fields,
            vec![
                "console.aux_view_offset",
                "console.feed_namespaces",
                "console.feed_namespaces",
                "console.src_template",
                "observability.log_level",
            ]
        );
    }
}
