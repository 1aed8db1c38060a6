use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::FeatureFlags;
use crate::transport::{HttpTransport, Method};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn feature_flags(&self) -> Result<FeatureFlags, ApiError> {
        self.get("/feature-flags").await
    }

    pub async fn set_feature_flag(&self, key: &str, value: &Value) -> Result<(), ApiError> {
        self.send_json(Method::Put, &format!("/feature-flags/{key}"), value)
            .await?;
        Ok(())
    }
}
