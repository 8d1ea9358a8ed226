use std::{
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
    time::Duration,
};

use displaydoc::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize, Display)]
#[serde(rename_all = "kebab-case", tag = "mode")]
pub enum TlsConfig {
    /// disabled
    #[default]
    Disabled,
    /// enabled
    Enabled { cert: PathBuf, key: PathBuf },
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ServerConfig {
    /// set via env vars: `AIRPORT_SERVICE__SERVER__ADDRESS`
    #[serde(default = "default_address")]
    pub address: IpAddr,
    /// set via env vars: `AIRPORT_SERVICE__SERVER__PORT`
    #[serde(default = "default_port")]
    pub port: u16,
    /// How long in-flight requests get to finish once shutdown starts.
    #[serde(with = "humantime_serde", default = "default_shutdown_timeout")]
    pub shutdown_timeout: Duration,
    #[serde(default)]
    pub tls: TlsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            shutdown_timeout: default_shutdown_timeout(),
            tls: TlsConfig::default(),
        }
    }
}

fn default_address() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_shutdown_timeout() -> Duration {
    Duration::from_secs(10)
}

#[cfg(feature = "testing")]
impl crate::tests::TestDefault for ServerConfig {
    fn test_default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            shutdown_timeout: Duration::from_millis(100),
            tls: TlsConfig::Disabled,
        }
    }
}
