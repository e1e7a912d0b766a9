//! # Job Configuration
//!
//! The typed key→value mapping the engine propagates to every task of a
//! transfer job. Keys are dotted property names (see [`crate::constants`]
//! and [`crate::db`]); values are stored as strings and read back through
//! typed accessors with caller-supplied defaults.
//!
//! Configuration carries no validation of its own: last write wins, absent
//! keys resolve to the accessor's default, and a stored value that fails to
//! parse as the requested type also resolves to the default (logged at
//! `warn`).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Mutable property map scoped to one transfer job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobConfiguration {
    entries: BTreeMap<String, String>,
}

impl JobConfiguration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property value, if set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a string property. Overwrites any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get an integer property, falling back to `default` when the key is
    /// absent or its stored value does not parse.
    pub fn get_i64(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            None => default,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(key, value = raw, default, "Non-integer property value, using default");
                default
            }),
        }
    }

    /// Set an integer property.
    pub fn set_i64(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, value.to_string());
    }

    /// Get a boolean property, falling back to `default` when the key is
    /// absent or its stored value is neither `true` nor `false`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(raw) => match raw.trim() {
                "true" => true,
                "false" => false,
                other => {
                    tracing::warn!(key, value = other, default, "Non-boolean property value, using default");
                    default
                }
            },
        }
    }

    /// Set a boolean property.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, value.to_string());
    }

    /// Overlay a properties file onto this configuration, dispatching on the
    /// file extension (`.toml` or `.json`). Returns the number of keys merged.
    pub fn merge_file(&mut self, path: &Path) -> ConfigResult<usize> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => self.merge_toml_file(path),
            Some("json") => self.merge_json_file(path),
            _ => Err(ConfigError::UnsupportedConfFile {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Overlay a flat TOML table of scalar properties onto this
    /// configuration. Returns the number of keys merged.
    pub fn merge_toml_file(&mut self, path: &Path) -> ConfigResult<usize> {
        let contents = std::fs::read_to_string(path)?;
        let table: toml::Table =
            toml::from_str(&contents).map_err(|source| ConfigError::TomlParse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut merged = 0;
        for (key, value) in table {
            let rendered = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    tracing::warn!(?path, key, value_type = other.type_str(), "Skipping non-scalar property");
                    continue;
                }
            };
            self.set(key, rendered);
            merged += 1;
        }
        tracing::debug!(?path, merged, "Merged TOML properties file");
        Ok(merged)
    }

    /// Overlay a flat JSON object of scalar properties onto this
    /// configuration. Returns the number of keys merged.
    pub fn merge_json_file(&mut self, path: &Path) -> ConfigResult<usize> {
        let contents = std::fs::read_to_string(path)?;
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&contents).map_err(|source| ConfigError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut merged = 0;
        for (key, value) in object {
            let rendered = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                other => {
                    tracing::warn!(?path, key, %other, "Skipping non-scalar property");
                    continue;
                }
            };
            self.set(key, rendered);
            merged += 1;
        }
        tracing::debug!(?path, merged, "Merged JSON properties file");
        Ok(merged)
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no properties are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_unset_key() {
        let conf = JobConfiguration::new();
        assert_eq!(conf.get("gridpump.job.map.tasks"), None);
        assert!(conf.is_empty());
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut conf = JobConfiguration::new();
        conf.set("gridpump.jdbc.url", "jdbc:postgresql://db:5432/app");
        assert_eq!(
            conf.get("gridpump.jdbc.url"),
            Some("jdbc:postgresql://db:5432/app")
        );
        assert_eq!(conf.len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut conf = JobConfiguration::new();
        conf.set("key", "first");
        conf.set("key", "second");
        assert_eq!(conf.get("key"), Some("second"));
        assert_eq!(conf.len(), 1);
    }

    #[test]
    fn test_i64_roundtrip_and_default() {
        let mut conf = JobConfiguration::new();
        assert_eq!(conf.get_i64("missing", 1), 1);

        conf.set_i64("count", 42);
        assert_eq!(conf.get_i64("count", 1), 42);

        conf.set_i64("negative", -7);
        assert_eq!(conf.get_i64("negative", 1), -7);
    }

    #[test]
    fn test_i64_malformed_value_uses_default() {
        let mut conf = JobConfiguration::new();
        conf.set("count", "not-a-number");
        assert_eq!(conf.get_i64("count", 3), 3);
    }

    #[test]
    fn test_bool_roundtrip_and_default() {
        let mut conf = JobConfiguration::new();
        assert!(conf.get_bool("missing", true));
        assert!(!conf.get_bool("missing", false));

        conf.set_bool("flag", true);
        assert!(conf.get_bool("flag", false));

        conf.set_bool("flag", false);
        assert!(!conf.get_bool("flag", true));
    }

    #[test]
    fn test_bool_malformed_value_uses_default() {
        let mut conf = JobConfiguration::new();
        conf.set("flag", "yes");
        assert!(conf.get_bool("flag", true));
        assert!(!conf.get_bool("flag", false));
    }

    #[test]
    fn test_merge_file_unsupported_extension() {
        let mut conf = JobConfiguration::new();
        let err = conf.merge_file(Path::new("props.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedConfFile { .. }));
    }

    #[test]
    fn test_serde_transparent_map() {
        let mut conf = JobConfiguration::new();
        conf.set("a", "1");
        conf.set("b", "2");
        let json = serde_json::to_string(&conf).unwrap();
        assert_eq!(json, r#"{"a":"1","b":"2"}"#);

        let back: JobConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, conf);
    }
}
