//! User settings for Budget Shell
//!
//! Manages user preferences: currency presentation, audit logging and the
//! interactive prompt.

use serde::{Deserialize, Serialize};

use super::paths::ShellPaths;
use crate::error::ShellError;

/// User settings for Budget Shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Optional currency code printed after amounts (e.g. "USD")
    #[serde(default)]
    pub currency_code: String,

    /// Whether executed mutations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Prompt shown by the interactive shell
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

fn default_prompt() -> String {
    "budget> ".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            currency_code: String::new(),
            audit_enabled: default_audit_enabled(),
            prompt: default_prompt(),
        }
    }
}

impl Settings {
    /// Currency code with a leading space, or nothing when no code is set
    pub fn currency_suffix(&self) -> String {
        if self.currency_code.is_empty() {
            String::new()
        } else {
            format!(" {}", self.currency_code)
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ShellPaths) -> Result<Self, ShellError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ShellError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ShellError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ShellPaths) -> Result<(), ShellError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ShellError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| ShellError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.currency_code.is_empty());
        assert!(settings.audit_enabled);
        assert_eq!(settings.prompt, "budget> ");
    }

    #[test]
    fn test_currency_suffix() {
        let mut settings = Settings::default();
        assert_eq!(settings.currency_suffix(), "");

        settings.currency_code = "USD".into();
        assert_eq!(settings.currency_suffix(), " USD");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ShellPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".into();
        settings.audit_enabled = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert!(!loaded.audit_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_code": "CAD"}"#).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.currency_code, "CAD");
        assert!(settings.audit_enabled);
    }
}
