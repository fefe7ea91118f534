//! Unvalidated configuration as supplied by the caller.
//!
//! With the `config` feature the same shape loads from TOML or JSON:
//!
//! ```toml
//! capabilities = ["Pet", "Animal"]
//! auto_reset = true
//!
//! [discovery.Animal]
//! siblings = ["Animal"]
//! ```

use indexmap::IndexMap;

/// capability -> function name -> target capabilities, as written.
pub type RawDiscovery = IndexMap<String, IndexMap<String, Vec<String>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct RawConfig {
    /// Capabilities checked for direct matches, highest priority first.
    pub capabilities: Vec<String>,
    pub discovery: RawDiscovery,
    /// Clear visited/yielded state at the start of every `collect` call.
    pub auto_reset: bool,
}

impl Default for RawConfig {
    fn default() -> Self {
        RawConfig {
            capabilities: Vec::new(),
            discovery: RawDiscovery::new(),
            auto_reset: true,
        }
    }
}

impl RawConfig {
    pub fn new<I>(discovery: RawDiscovery, capabilities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        RawConfig {
            capabilities: capabilities.into_iter().map(Into::into).collect(),
            discovery,
            auto_reset: true,
        }
    }

    pub fn with_auto_reset(mut self, auto_reset: bool) -> Self {
        self.auto_reset = auto_reset;
        self
    }
}

#[cfg(feature = "config")]
mod load {
    use std::path::Path;

    use super::RawConfig;
    use crate::error::{Error, Result};

    impl RawConfig {
        pub fn from_toml_str(source: &str) -> Result<Self> {
            Ok(toml::from_str(source)?)
        }

        pub fn from_json_str(source: &str) -> Result<Self> {
            Ok(serde_json::from_str(source)?)
        }

        /// Load from a `.toml` or `.json` file.
        pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;

            match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => Self::from_toml_str(&source),
                Some("json") => Self::from_json_str(&source),
                _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
            }
        }
    }
}

#[cfg(all(test, feature = "config"))]
mod tests {
    use super::*;

    #[test]
    fn test_toml_preserves_order() {
        let raw = RawConfig::from_toml_str(
            r#"
            capabilities = ["Pet", "Animal"]

            [discovery.Zebra]
            stripes = ["Animal"]

            [discovery.Animal]
            siblings = ["Animal", "Pet"]
            parents = ["Animal"]
            "#,
        )
        .unwrap();

        assert_eq!(raw.capabilities, vec!["Pet", "Animal"]);
        assert!(raw.auto_reset);
        let keys: Vec<_> = raw.discovery.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Zebra", "Animal"]);
        let functions: Vec<_> = raw.discovery["Animal"].keys().map(String::as_str).collect();
        assert_eq!(functions, vec!["siblings", "parents"]);
    }

    #[test]
    fn test_json_auto_reset_flag() {
        let raw = RawConfig::from_json_str(
            r#"{"capabilities": ["Pet"], "discovery": {}, "auto_reset": false}"#,
        )
        .unwrap();
        assert!(!raw.auto_reset);
        assert!(raw.discovery.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(RawConfig::from_json_str(r#"{"interfaces": []}"#).is_err());
    }
}
