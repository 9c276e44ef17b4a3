use thiserror::Error;

/// Failure to read an object.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The bucket has no object under the key
    #[error("object s3://{bucket}/{key} does not exist")]
    NotFound {
        /// Bucket that was read
        bucket: String,
        /// Key that was requested
        key: String,
    },
    /// The storage service rejected the request or could not be reached
    #[error("failed to get s3://{bucket}/{key}: {message}")]
    Service {
        /// Bucket that was read
        bucket: String,
        /// Key that was requested
        key: String,
        /// Error reported by the service client
        message: String,
    },
    /// The response body could not be read to the end
    #[error("failed to read body of s3://{bucket}/{key}: {message}")]
    Body {
        /// Bucket that was read
        bucket: String,
        /// Key that was requested
        key: String,
        /// Error reported while streaming the body
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::StoreError;

    #[test]
    fn not_found_display() {
        let err = StoreError::NotFound {
            bucket: "grp3-cap2b-data".into(),
            key: "todo-data.json".into(),
        };
        assert_eq!(err.to_string(), "object s3://grp3-cap2b-data/todo-data.json does not exist");
    }

    #[test]
    fn service_display() {
        let err = StoreError::Service {
            bucket: "grp3-cap2b-data".into(),
            key: "todo-data.json".into(),
            message: "AccessDenied".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to get s3://grp3-cap2b-data/todo-data.json: AccessDenied"
        );
    }
}
