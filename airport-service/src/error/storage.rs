use displaydoc::Display;
use thiserror::Error;

/// Object store errors
#[derive(Debug, Error, Display, strum::AsRefStr)]
pub enum StorageError {
    /// Object store did not answer within the store timeout
    Timeout,
    /// Failed to send request to object store: {0}
    FailedToSendRequest(reqwest::Error),
    /// Object store rejected the upload: {0}
    UploadRejected(reqwest::Error),
}

impl StorageError {
    pub(crate) fn from_send(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::FailedToSendRequest(error)
        }
    }
}
