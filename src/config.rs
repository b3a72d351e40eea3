//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::host::HostPolicy;

/// Default bound for one liveness probe.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;
/// Default bound for one POST.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Host policy and network bounds for a [`ProtocolClient`](crate::client::ProtocolClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Candidate hosts in priority order.
    pub hosts: HostPolicy,
    /// Per-host liveness probe timeout. Must be non-zero: a zero bound makes
    /// every probe time out and every call fail with `Connectivity`.
    pub probe_timeout_ms: u64,
    /// POST timeout. Must be non-zero.
    pub request_timeout_ms: u64,
    /// User agent override for the default transport.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hosts: HostPolicy::default(),
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            user_agent: None,
        }
    }
}

/// Rejected client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`ClientConfig`].
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    /// A timeout field is zero.
    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

impl ClientConfig {
    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that both timeouts are non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout("probe_timeout_ms"));
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout("request_timeout_ms"));
        }
        Ok(())
    }

    /// Probe timeout as a [`Duration`].
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Host, Scheme};

    #[test]
    fn empty_json_is_default() {
        let cfg = ClientConfig::from_json_str("{}").expect("parse");
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(cfg.probe_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn hosts_parse_in_order() {
        let cfg = ClientConfig::from_json_str(
            r#"{
                "hosts": [
                    {"address": "www.hrdlog.net", "scheme": "http"},
                    {"address": "127.0.0.1", "scheme": "https", "port": 8443}
                ],
                "request_timeout_ms": 1500
            }"#,
        )
        .expect("parse");
        assert_eq!(
            cfg.hosts.hosts(),
            &[
                Host::new("www.hrdlog.net", Scheme::Http),
                Host::new("127.0.0.1", Scheme::Https).with_port(8443),
            ]
        );
        assert_eq!(cfg.request_timeout_ms, 1500);
        assert_eq!(cfg.probe_timeout_ms, DEFAULT_PROBE_TIMEOUT_MS);
    }

    #[test]
    fn empty_host_list_is_rejected() {
        assert!(matches!(
            ClientConfig::from_json_str(r#"{"hosts": []}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let err = ClientConfig::from_json_str(r#"{"probe_timeout_ms": 0}"#).expect_err("zero probe");
        assert!(matches!(err, ConfigError::ZeroTimeout("probe_timeout_ms")));
        assert_eq!(err.to_string(), "probe_timeout_ms must be greater than zero");

        let err = ClientConfig::from_json_str(r#"{"request_timeout_ms": 0}"#).expect_err("zero request");
        assert!(matches!(err, ConfigError::ZeroTimeout("request_timeout_ms")));

        assert!(ClientConfig::default().validate().is_ok());
    }
}
