//! Configuration handling for the form engine

use crate::engine::{CurrencyLocale, TransformRegistry};
use crate::error::{FormError, Result};
use crate::schema::FieldKind;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the engine
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Currency separators, symbol and precision
    pub currency: CurrencyLocale,
    /// Extra type tag spellings, mapped to a known tag
    pub type_aliases: BTreeMap<String, String>,
}

impl EngineConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "schema-form", "schema-form")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, or defaults when absent
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| FormError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let io_err = |source| FormError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    /// Resolve a type tag, consulting aliases first
    pub fn resolve_kind(&self, tag: &str) -> FieldKind {
        match self.type_aliases.get(tag) {
            Some(alias) => FieldKind::from_tag(alias),
            None => FieldKind::from_tag(tag),
        }
    }

    /// Transform registry using the configured currency locale
    pub fn transforms(&self) -> TransformRegistry {
        TransformRegistry::new(self.currency.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.currency.symbol, "R$");
        assert_eq!(config.currency.decimal_separator, ',');
        assert_eq!(config.currency.grouping_separator, '.');
        assert_eq!(config.currency.precision, 2);
        assert!(config.type_aliases.is_empty());
    }

    #[test]
    fn test_serialization() {
        let mut config = EngineConfig::default();
        config.currency.symbol = "US$".to_string();
        config
            .type_aliases
            .insert("phone".to_string(), "digits-only".to_string());

        let json = serde_json::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_currency_keeps_other_defaults() {
        let json = r#"{"currency": {"symbol": "€"}}"#;
        let parsed: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.currency.symbol, "€");
        assert_eq!(parsed.currency.decimal_separator, ',');
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, EngineConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"typeAliases": {"cep": "digits-only"}, "unknown_field": "value"}"#;
        let parsed: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.resolve_kind("cep"), FieldKind::DigitsOnly);
    }

    #[test]
    fn test_resolve_kind_without_alias() {
        let config = EngineConfig::default();
        assert_eq!(config.resolve_kind("money"), FieldKind::Currency);
        assert_eq!(
            config.resolve_kind("stars"),
            FieldKind::Other("stars".to_string())
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = EngineConfig::default();
        config.currency.precision = 3;

        config.save_to(&path).unwrap();
        let loaded = EngineConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        let err = EngineConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, FormError::Config { .. }));
    }

    #[test]
    fn test_load_returns_ok() {
        // Defaults when no file exists; may read a real user file otherwise
        assert!(EngineConfig::load().is_ok());
    }

    #[test]
    fn test_transforms_use_configured_locale() {
        let mut config = EngineConfig::default();
        config.currency.symbol = "€".to_string();
        assert_eq!(config.transforms().locale().symbol, "€");
    }
}
