//! Engine settings loaded from TOML.
//!
//! - `EngineSettings::default()` parses the embedded `default_settings.toml`
//! - `parse_settings_toml(toml_content)` parses and validates custom settings
//!
//! Settings are a plain value handed to `Engine::with_settings`; there is no
//! process-wide instance.

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSettings {
    pub suggestions: SuggestionSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestionSettings {
    pub default_limit: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<EngineSettings, SettingsError> {
    let s: EngineSettings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &EngineSettings) -> Result<(), SettingsError> {
    if s.suggestions.default_limit == 0 {
        return Err(SettingsError::InvalidValue {
            field: "suggestions.default_limit".to_string(),
            reason: "must be > 0".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = EngineSettings::default();
        assert_eq!(s.suggestions.default_limit, 5);
    }

    #[test]
    fn test_custom_settings() {
        let s = parse_settings_toml("[suggestions]\ndefault_limit = 12\n").unwrap();
        assert_eq!(s.suggestions.default_limit, 12);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = parse_settings_toml("[suggestions]\ndefault_limit = 0\n").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "suggestions.default_limit"));
    }

    #[test]
    fn test_missing_section_rejected() {
        let err = parse_settings_toml("").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err =
            parse_settings_toml("[suggestions]\ndefault_limit = 5\nfuzzy = true\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_negative_limit_is_parse_error() {
        let err = parse_settings_toml("[suggestions]\ndefault_limit = -1\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
