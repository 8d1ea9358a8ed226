use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::init::InitError;

/// 10 MiB
const DEFAULT_MAX_BODY_SIZE: usize = 10 << 20;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Eq, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct UploadConfig {
    /// Upper bound on the whole multipart request body, in bytes.
    /// set via env vars: `AIRPORT_SERVICE__UPLOAD__MAX_BODY_SIZE`
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    /// Upper bound on a single write to the object store.
    /// set via env vars: `AIRPORT_SERVICE__UPLOAD__STORE_TIMEOUT`
    #[serde(with = "humantime_serde", default = "default_store_timeout")]
    pub store_timeout: Duration,
}

impl UploadConfig {
    pub fn validate(&self) -> Result<(), InitError> {
        if self.max_body_size == 0 {
            return Err(InitError::InvalidUploadConfig(
                "max-body-size must be greater than zero",
            ));
        }
        if self.store_timeout.is_zero() {
            return Err(InitError::InvalidUploadConfig(
                "store-timeout must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_body_size: default_max_body_size(),
            store_timeout: default_store_timeout(),
        }
    }
}

fn default_max_body_size() -> usize {
    DEFAULT_MAX_BODY_SIZE
}

fn default_store_timeout() -> Duration {
    Duration::from_secs(50)
}

#[cfg(feature = "testing")]
impl crate::tests::TestDefault for UploadConfig {
    fn test_default() -> Self {
        Self {
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            store_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_limits() {
        let config = UploadConfig::default();
        assert_eq!(config.max_body_size, 10 * 1024 * 1024);
        assert_eq!(config.store_timeout, Duration::from_secs(50));
    }

    #[test]
    fn zero_limits_are_rejected() {
        let no_body = UploadConfig {
            max_body_size: 0,
            ..UploadConfig::default()
        };
        assert!(no_body.validate().is_err());
        let no_time = UploadConfig {
            store_timeout: Duration::ZERO,
            ..UploadConfig::default()
        };
        assert!(no_time.validate().is_err());
    }
}
