use std::time::Duration;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use reqwest::Client;
use rusty_s3::{Bucket, Credentials, S3Action, actions::PutObject};

use crate::{
    config::{storage::StorageConfig, upload::UploadConfig},
    error::{init::InitError, storage::StorageError},
};

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const PUT_OBJECT_SIGN_DURATION: Duration = Duration::from_secs(120);

/// Client for the S3-compatible bucket holding airport images.
///
/// Built once at startup and shared by every request.
#[derive(Debug)]
pub struct ObjectStore {
    bucket: Bucket,
    client: Client,
    credentials: Credentials,
    public_domain: String,
    store_timeout: Duration,
}

impl ObjectStore {
    pub fn new(
        config: &StorageConfig,
        upload: &UploadConfig,
    ) -> Result<Self, InitError> {
        let bucket = Bucket::new(
            config.host.clone(),
            config.url_style.into(),
            config.bucket_name.clone(),
            config.region.clone(),
        )?;
        let client = Client::builder()
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .tcp_nodelay(true)
            .build()
            .map_err(InitError::CreateReqwestClient)?;
        let credentials = Credentials::new(
            config.access_key.expose(),
            config.secret_key.expose(),
        );
        Ok(Self {
            bucket,
            client,
            credentials,
            public_domain: config.public_domain.clone(),
            store_timeout: upload.store_timeout,
        })
    }

    #[must_use]
    pub fn put_object<'obj, 'client>(
        &'client self,
        object: &'obj str,
    ) -> PutObject<'obj>
    where
        'client: 'obj,
    {
        PutObject::new(&self.bucket, Some(&self.credentials), object)
    }

    /// Writes `body` to `object`, overwriting whatever was there.
    ///
    /// Succeeds only once the store has acknowledged the write with a 2xx.
    /// The whole exchange is bounded by the configured store timeout.
    #[tracing::instrument(skip_all, fields(object = %object, size = body.len()))]
    pub async fn upload(
        &self,
        object: &str,
        content_type: Option<&str>,
        body: Bytes,
    ) -> Result<(), StorageError> {
        let signed_url = self.put_object(object).sign(PUT_OBJECT_SIGN_DURATION);
        let mut request = self
            .client
            .put(signed_url)
            .timeout(self.store_timeout)
            .body(body);
        if let Some(content_type) = content_type {
            request = request.header(CONTENT_TYPE, content_type);
        }

        request
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "failed to send upload to object store");
                StorageError::from_send(e)
            })?
            .error_for_status()
            .map_err(|e| {
                tracing::error!(error = %e, "object store rejected upload");
                StorageError::UploadRejected(e)
            })?;
        tracing::trace!("object store acknowledged upload");
        Ok(())
    }

    /// Public url an object is served from once uploaded.
    #[must_use]
    pub fn public_url(&self, object: &str) -> String {
        format!(
            "https://{}/{}/{}",
            self.public_domain,
            self.bucket.name(),
            object
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ObjectStore {
        ObjectStore::new(&StorageConfig::default(), &UploadConfig::default())
            .expect("default config builds")
    }

    #[test]
    fn public_url_uses_domain_bucket_and_object() {
        assert_eq!(
            store().public_url("zyl.jpg"),
            "https://storage.googleapis.com/bd-airport-data/zyl.jpg"
        );
    }

    #[test]
    fn put_object_is_path_style_against_the_endpoint() {
        let store = store();
        let url = store.put_object("zyl.jpg").sign(PUT_OBJECT_SIGN_DURATION);
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.path(), "/bd-airport-data/zyl.jpg");
        assert!(url.query().is_some_and(|q| q.contains("X-Amz-Signature")));
    }
}
