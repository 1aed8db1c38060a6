use api::models::Notification;
use api::{ApiClient, ApiError, HttpTransport};

use crate::error::ActionError;
use crate::state::AppState;

pub async fn load_notifications<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<Vec<Notification>, ApiError> {
    client.notifications().await
}

/// Mark `id` read, then re-fetch the list.
pub async fn mark_read<T: HttpTransport>(
    client: &ApiClient<T>,
    id: i64,
) -> Result<Vec<Notification>, ActionError> {
    client.mark_notification_read(id).await?;
    Ok(client.notifications().await?)
}

impl AppState {
    /// Background load: failures are only logged. Ignored once signed out.
    pub fn notifications_loaded(&mut self, result: Result<Vec<Notification>, ApiError>) {
        if self.session.is_none() {
            return;
        }
        match result {
            Ok(list) => self.notifications = list,
            Err(e) => tracing::warn!("Could not load notifications: {e}"),
        }
    }

    pub fn notification_marked(&mut self, result: Result<Vec<Notification>, ActionError>) {
        if self.session.is_none() {
            return;
        }
        match result {
            Ok(list) => self.notifications = list,
            Err(e) => {
                self.fail(&e);
            }
        }
    }
}
