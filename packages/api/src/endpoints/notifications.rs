use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::models::Notification;
use crate::transport::HttpTransport;

impl<T: HttpTransport> ApiClient<T> {
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("/notifications").await
    }

    pub async fn mark_notification_read(&self, id: i64) -> Result<(), ApiError> {
        self.request(&format!("/notifications/{id}/read"), RequestOptions::post())
            .await?;
        Ok(())
    }
}
