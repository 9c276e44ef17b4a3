//! Function configuration.
//!
//! Region and credentials come from the execution environment through the AWS
//! default provider chain. The object location is fixed.

use aws_config::{BehaviorVersion, SdkConfig};
use todo_store::ObjectLocation;

/// Settings shared by every invocation served by one execution environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ambient AWS configuration used to build service clients
    pub sdk: SdkConfig,
    /// Object returned by the function
    pub location: ObjectLocation,
}

impl Config {
    /// Load the AWS configuration from the environment.
    ///
    /// This reads `AWS_REGION`, the function role's credentials and any
    /// `AWS_ENDPOINT_URL` override.
    pub async fn load() -> Self {
        let sdk = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Self::from_sdk(sdk)
    }

    /// Use an already built SDK configuration.
    pub fn from_sdk(sdk: SdkConfig) -> Self {
        Config {
            sdk,
            location: ObjectLocation::TODO_DATA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use aws_config::{BehaviorVersion, Region, SdkConfig};
    use todo_store::ObjectLocation;

    #[test]
    fn location_is_todo_data() {
        let sdk = SdkConfig::builder()
            .region(Region::new("us-west-2"))
            .behavior_version(BehaviorVersion::latest())
            .build();
        let config = Config::from_sdk(sdk);
        assert_eq!(config.location, ObjectLocation::TODO_DATA);
        assert_eq!(config.sdk.region().map(|r| r.as_ref()), Some("us-west-2"));
    }
}
