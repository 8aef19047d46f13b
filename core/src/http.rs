//! Request descriptors handed to the executor.
//!
//! # Design
//! A `RequestDescriptor` describes one outbound call as plain data: the verb,
//! the handler path relative to the server, the query parameters and the JSON
//! body. It carries no base address; the executor resolves `handler` against
//! its `ClientConfig` at send time, so a descriptor stays valid if the server
//! address changes between build and execution.
//!
//! Parameters keep their JSON value (`true`, `1964`, `"FullRefresh"`) so test
//! doubles can compare them exactly. `query_pairs` renders them the way they
//! appear on the wire.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError};
use crate::url;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One outbound API call.
///
/// Built fresh by every `ApiClient` method and consumed once by the executor.
/// Two calls with identical arguments produce equal descriptors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub handler: String,
    pub params: BTreeMap<String, Value>,
    pub json: Option<Map<String, Value>>,
}

impl RequestDescriptor {
    /// Absolute URL of `handler` on the configured server, without query.
    pub fn url(&self, config: &ClientConfig) -> Result<String, ConfigError> {
        url::resolve(config, &self.handler)
    }

    /// Query parameters as wire strings. JSON strings lose their quotes,
    /// everything else uses its JSON rendering.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(name, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (name.clone(), rendered)
            })
            .collect()
    }

    /// Serialized JSON body, if the action sends one.
    pub fn body(&self) -> Result<Option<String>, ApiError> {
        self.json
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(ApiError::from)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn descriptor() -> RequestDescriptor {
        let mut params = BTreeMap::new();
        params.insert("Recursive".to_string(), json!(true));
        params.insert("ImageRefreshMode".to_string(), json!("FullRefresh"));
        params.insert("limit".to_string(), json!(20));
        RequestDescriptor {
            method: HttpMethod::Post,
            handler: "Items/abc/Refresh".to_string(),
            params,
            json: None,
        }
    }

    #[test]
    fn method_defaults_to_post() {
        assert_eq!(RequestDescriptor::default().method, HttpMethod::Post);
    }

    #[test]
    fn query_pairs_render_wire_strings() {
        let pairs = descriptor().query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("ImageRefreshMode".to_string(), "FullRefresh".to_string()),
                ("Recursive".to_string(), "true".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn url_resolves_handler_against_config() {
        let config = ClientConfig::with_server("http://localhost:8096/");
        assert_eq!(
            descriptor().url(&config).unwrap(),
            "http://localhost:8096/Items/abc/Refresh"
        );
    }

    #[test]
    fn body_is_none_without_json() {
        assert!(descriptor().body().unwrap().is_none());
    }

    #[test]
    fn body_keeps_null_fields() {
        let mut req = descriptor();
        let mut body = Map::new();
        body.insert("Name".to_string(), Value::Null);
        req.json = Some(body);
        assert_eq!(req.body().unwrap().as_deref(), Some(r#"{"Name":null}"#));
    }

    #[test]
    fn method_serializes_uppercase() {
        assert_eq!(serde_json::to_value(HttpMethod::Delete).unwrap(), json!("DELETE"));
        assert_eq!(HttpMethod::Get.as_str(), "GET");
    }
}
