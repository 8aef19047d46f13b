//! Joins the configured server address with a relative handler path.

use crate::config::ClientConfig;
use crate::error::ConfigError;

/// Join `base` and `handler` with exactly one `/`.
///
/// At most one trailing `/` is stripped from `base`; anything else about the
/// address is passed through untouched. `handler` is expected to carry no
/// leading `/`.
pub fn build_url(base: &str, handler: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}/{handler}")
}

/// Resolve `handler` against the `auth.server` entry of `config`.
pub fn resolve(config: &ClientConfig, handler: &str) -> Result<String, ConfigError> {
    Ok(build_url(config.server()?, handler))
}
