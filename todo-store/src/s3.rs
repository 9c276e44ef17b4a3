use crate::{ObjectLocation, ObjectStore, StoreError};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    Client,
};
use bytes::Bytes;
use tracing::debug;

/// Objects read from Amazon S3.
#[derive(Debug, Clone)]
pub struct S3Store {
    // Client wraps an Arc so cloning the store is cheap
    client: Client,
}

impl S3Store {
    /// Build a store from an already loaded SDK configuration.
    pub fn new(config: &SdkConfig) -> Self {
        Self::from_client(Client::new(config))
    }

    /// Wrap an existing S3 client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    #[tracing::instrument(level = "debug", skip(self, location), fields(bucket = location.bucket, key = location.key))]
    async fn get_object(&self, location: ObjectLocation) -> Result<Bytes, StoreError> {
        let output = self
            .client
            .get_object()
            .bucket(location.bucket)
            .key(location.key)
            .send()
            .await
            .map_err(|err| match err.as_service_error() {
                Some(service) if service.is_no_such_key() => StoreError::NotFound {
                    bucket: location.bucket.to_string(),
                    key: location.key.to_string(),
                },
                _ => StoreError::Service {
                    bucket: location.bucket.to_string(),
                    key: location.key.to_string(),
                    message: service_message(&err),
                },
            })?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|err| StoreError::Body {
                bucket: location.bucket.to_string(),
                key: location.key.to_string(),
                message: err.to_string(),
            })?
            .into_bytes();

        debug!(size = body.len(), "read object");
        Ok(body)
    }
}

/// Error code and message of a failed request, without the raw HTTP response.
fn service_message<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    match err {
        SdkError::ServiceError(_) => match (err.code(), err.message()) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            (Some(code), None) => code.to_string(),
            (None, Some(message)) => message.to_string(),
            (None, None) => "unhandled service error".to_string(),
        },
        // dispatch and timeout failures carry no response body
        _ => DisplayErrorContext(err).to_string(),
    }
}
