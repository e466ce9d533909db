//! Startup configuration for the guard registries.
//!
//! A deployment can override any subset of the compiled-in limits with a TOML
//! document, loaded once at startup. Tables and fields are all optional;
//! whatever the document does not name keeps its default:
//!
//! ```toml
//! [button]
//! max_size = 600.0
//!
//! [otp]
//! max_attempts = 3
//! lockout_secs = 60
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::{
    AppBarBounds, ButtonBounds, OtpBounds, SearchBarBounds, TextBounds, TextFieldBounds,
};

/// Failure while reading or writing a guard config document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document did not parse or did not match the schema.
    #[error("malformed guard config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered back to TOML.
    #[error("unrenderable guard config: {0}")]
    Render(#[from] toml::ser::Error),
}

/// The full set of guard registries, as loaded from (or written to) a config
/// document.
///
/// `Default` is the compiled-in state; widgets usually borrow individual
/// registries out of one of these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Button limits.
    pub button: ButtonBounds,
    /// App bar limits.
    pub app_bar: AppBarBounds,
    /// Display text limits.
    pub text: TextBounds,
    /// Text field limits.
    pub text_field: TextFieldBounds,
    /// Search bar limits.
    pub search_bar: SearchBarBounds,
    /// One-time-code limits.
    pub otp: OtpBounds,
}

impl GuardConfig {
    /// Parses a TOML document, filling anything unspecified from defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(raw)?;
        Ok(config)
    }

    /// Renders the current limits as a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] if serialization fails; with this
    /// schema that does not happen in practice.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        let raw = toml::to_string_pretty(self)?;
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::BoundsRegistry;

    #[test]
    fn empty_document_is_all_defaults() {
        let config = GuardConfig::from_toml_str("").unwrap();
        assert_eq!(config, GuardConfig::default());
        assert!(config.button.is_enforcing());
    }

    #[test]
    fn partial_table_overrides_only_named_fields() {
        let config = GuardConfig::from_toml_str(
            r#"
            [button]
            max_size = 600.0

            [otp]
            max_attempts = 3
            enforce_validation = false
            "#,
        )
        .unwrap();

        assert_eq!(config.button.max_size, 600.0);
        assert_eq!(config.button.min_size, ButtonBounds::default().min_size);
        assert_eq!(config.otp.max_attempts, 3);
        assert!(!config.otp.enforce_validation);
        assert_eq!(config.text, TextBounds::default());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = GuardConfig::from_toml_str("[button]\nmax_size = \"huge\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = GuardConfig::default();
        config.search_bar.max_queries_per_minute = 5;
        config.text_field.enforce_validation = false;

        let raw = config.to_toml_string().unwrap();
        let back = GuardConfig::from_toml_str(&raw).unwrap();
        assert_eq!(back, config);
    }
}
