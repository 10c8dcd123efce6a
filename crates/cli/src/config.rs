//! CLI runtime configuration.
//!
//! Resolved once at startup from the environment (after `.env` has been loaded) and then passed
//! into command handlers, so handlers never read process-wide environment variables themselves.

use crate::{CliError, CliResult};
use rfc_uuid::Uuid;

/// Environment variable naming the default namespace for `v5`.
pub const NAMESPACE_ENV: &str = "RUUID_NAMESPACE";

/// Namespace used when neither `--namespace` nor [`NAMESPACE_ENV`] is given.
pub const DEFAULT_NAMESPACE: Uuid = Uuid::NAMESPACE_DNS;

/// CLI configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CliConfig {
    default_namespace: Uuid,
}

impl CliConfig {
    pub fn new(default_namespace: Uuid) -> Self {
        Self { default_namespace }
    }

    /// Build the configuration from the raw value of [`NAMESPACE_ENV`].
    ///
    /// `None` or an empty/whitespace value falls back to [`DEFAULT_NAMESPACE`].
    pub fn from_env_value(value: Option<String>) -> CliResult<Self> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let default_namespace = match value {
            Some(v) => namespace_from_str(&v).map_err(|e| {
                CliError::InvalidConfig(format!("{} is not a namespace: {}", NAMESPACE_ENV, e))
            })?,
            None => DEFAULT_NAMESPACE,
        };

        Ok(Self::new(default_namespace))
    }

    pub fn default_namespace(&self) -> Uuid {
        self.default_namespace
    }
}

/// Resolve a namespace argument: one of `dns`, `url`, `oid`, `x500` (any case), or a canonical
/// UUID string.
pub fn namespace_from_str(value: &str) -> CliResult<Uuid> {
    match value.to_ascii_lowercase().as_str() {
        "dns" => Ok(Uuid::NAMESPACE_DNS),
        "url" => Ok(Uuid::NAMESPACE_URL),
        "oid" => Ok(Uuid::NAMESPACE_OID),
        "x500" => Ok(Uuid::NAMESPACE_X500),
        _ => Ok(Uuid::parse_str(value)?),
    }
}
