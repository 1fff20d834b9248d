//! Connector settings.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

pub const TIMEOUT_ENV_VAR: &str = "DISPATCH_HTTP_TIMEOUT_SECS";

/// Settings for `HttpConnector`. The default blocks until the server answers
/// or the transport fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConnectorConfig {
    /// Upper bound on a whole round-trip.
    #[serde(default, rename = "timeout_secs", deserialize_with = "secs")]
    pub timeout: Option<Duration>,
}

impl ConnectorConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    /// Read settings from the environment. An unset variable keeps the
    /// default; a value that is not a whole number of seconds is an error.
    pub fn from_env() -> Result<Self> {
        match std::env::var(TIMEOUT_ENV_VAR) {
            Ok(raw) => Self::from_timeout_secs(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    fn from_timeout_secs(raw: &str) -> Result<Self> {
        let secs: u64 = raw
            .trim()
            .parse()
            .map_err(|_| Error::Config {
                message: format!("{TIMEOUT_ENV_VAR} must be a whole number of seconds, got [{raw}]"),
            })?;
        Ok(Self::with_timeout(Duration::from_secs(secs)))
    }
}

fn secs<'de, D>(deserializer: D) -> std::result::Result<Option<Duration>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
}
