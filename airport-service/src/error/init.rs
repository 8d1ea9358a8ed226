use displaydoc::Display;
use thiserror::Error;

#[derive(Debug, Error, Display)]
pub enum InitError {
    /// Failed to initialize telemetry: {0}
    Telemetry(#[from] telemetry::TelemetryError),
    /// Invalid storage bucket: {0}
    InvalidBucket(#[from] rusty_s3::BucketError),
    /// Failed to create reqwest client: {0}
    CreateReqwestClient(reqwest::Error),
    /// Invalid storage config: {0}
    InvalidStorageConfig(&'static str),
    /// Invalid upload config: {0}
    InvalidUploadConfig(&'static str),
    /// Failed to load TLS certificate: {0}
    Tls(std::io::Error),
}
