//! Client configuration as a flat key/value mapping.
//!
//! Keys follow the dotted naming the Jellyfin clients use (`auth.server`,
//! `auth.token`). The call layer only ever reads from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Key holding the server base address, e.g. `https://media.example.com/`.
pub const SERVER_KEY: &str = "auth.server";

/// Key holding an access token an executor may attach to requests.
pub const TOKEN_KEY: &str = "auth.token";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientConfig {
    data: BTreeMap<String, String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a config holding only the server base address.
    pub fn with_server(server: &str) -> Self {
        let mut config = Self::new();
        config.set(SERVER_KEY, server);
        config
    }

    /// Parse a JSON object of string values, e.g. `{"auth.server": "..."}`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Like `get`, but a missing key is a `ConfigError::MissingKey`.
    pub fn require(&self, key: &str) -> Result<&str, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    pub fn server(&self) -> Result<&str, ConfigError> {
        self.require(SERVER_KEY)
    }

    pub fn token(&self) -> Option<&str> {
        self.get(TOKEN_KEY)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ClientConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_server_sets_server_key() {
        let config = ClientConfig::with_server("https://example.com/");
        assert_eq!(config.server().unwrap(), "https://example.com/");
        assert_eq!(config.get(SERVER_KEY), Some("https://example.com/"));
    }

    #[test]
    fn missing_server_is_a_lookup_fault() {
        let err = ClientConfig::new().server().unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey(ref k) if k == "auth.server"));
        assert_eq!(err.to_string(), "missing configuration key `auth.server`");
    }

    #[test]
    fn from_json_reads_flat_object() {
        let config =
            ClientConfig::from_json(r#"{"auth.server":"http://localhost:8096","auth.token":"abc"}"#)
                .unwrap();
        assert_eq!(config.server().unwrap(), "http://localhost:8096");
        assert_eq!(config.token(), Some("abc"));
    }

    #[test]
    fn from_json_rejects_non_string_values() {
        let err = ClientConfig::from_json(r#"{"auth.server":8096}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn collects_from_pairs() {
        let config: ClientConfig = [("auth.server", "http://a"), ("auth.token", "t")]
            .into_iter()
            .collect();
        assert_eq!(config.server().unwrap(), "http://a");
        assert_eq!(config.token(), Some("t"));
    }
}
