use serde::{Deserialize, Serialize};
use url::Url;

use crate::{error::init::InitError, types::secret::Secret};

/// The request url format of a S3 bucket.
#[derive(
    Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "kebab-case")]
pub enum UrlStyle {
    /// `https://<host>/<bucket>/<key>`, what local S3 emulators and the
    /// GCS XML API expect.
    #[default]
    Path,
    /// `https://<bucket>.<host>/<key>`.
    VirtualHost,
}

impl From<UrlStyle> for rusty_s3::UrlStyle {
    fn from(value: UrlStyle) -> Self {
        match value {
            UrlStyle::Path => rusty_s3::UrlStyle::Path,
            UrlStyle::VirtualHost => rusty_s3::UrlStyle::VirtualHost,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct StorageConfig {
    #[serde(default)]
    pub url_style: UrlStyle,
    /// set via env vars: `AIRPORT_SERVICE__STORAGE__BUCKET_NAME`
    #[serde(default = "default_bucket_name")]
    pub bucket_name: String,
    /// Object-store endpoint the uploads are sent to.
    ///
    /// set via env vars: `AIRPORT_SERVICE__STORAGE__HOST`
    #[serde(default = "default_host")]
    pub host: Url,
    #[serde(default = "default_region")]
    pub region: String,
    /// Domain the bucket is publicly served from. Image urls handed back to
    /// clients are `https://<public-domain>/<bucket-name>/<object>`.
    ///
    /// set via env vars: `AIRPORT_SERVICE__STORAGE__PUBLIC_DOMAIN`
    #[serde(default = "default_public_domain")]
    pub public_domain: String,
    /// set via env vars: `AIRPORT_SERVICE__STORAGE__ACCESS_KEY`
    ///
    /// Never serialized, so the masked value can't leak back in when the
    /// defaults are merged with the input config.
    #[serde(default = "default_access_key", skip_serializing)]
    pub access_key: Secret<String>,
    /// set via env vars: `AIRPORT_SERVICE__STORAGE__SECRET_KEY`
    #[serde(default = "default_secret_key", skip_serializing)]
    pub secret_key: Secret<String>,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), InitError> {
        if self.bucket_name.is_empty() {
            return Err(InitError::InvalidStorageConfig(
                "bucket-name must not be empty",
            ));
        }
        if self.public_domain.is_empty() {
            return Err(InitError::InvalidStorageConfig(
                "public-domain must not be empty",
            ));
        }
        if self.public_domain.contains("://") || self.public_domain.contains('/')
        {
            return Err(InitError::InvalidStorageConfig(
                "public-domain must be a bare host without scheme or path",
            ));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url_style: UrlStyle::default(),
            bucket_name: default_bucket_name(),
            host: default_host(),
            region: default_region(),
            public_domain: default_public_domain(),
            access_key: default_access_key(),
            secret_key: default_secret_key(),
        }
    }
}

fn default_bucket_name() -> String {
    "bd-airport-data".to_string()
}

fn default_host() -> Url {
    Url::parse("http://localhost:9000").unwrap()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_public_domain() -> String {
    "storage.googleapis.com".to_string()
}

fn default_access_key() -> Secret<String> {
    Secret::from("minioadmin".to_string())
}

fn default_secret_key() -> Secret<String> {
    Secret::from("minioadmin".to_string())
}

#[cfg(feature = "testing")]
impl crate::tests::TestDefault for StorageConfig {
    fn test_default() -> Self {
        Self {
            host: Url::parse("http://localhost:9190").unwrap(),
            bucket_name: "test-airport-images".to_string(),
            public_domain: "images.airports.test".to_string(),
            ..Self::default()
        }
    }
}
