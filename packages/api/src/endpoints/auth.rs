use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiError;
use crate::transport::HttpTransport;
use store::{Session, UserInfo};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session::new(response.user, response.token)
    }
}

impl<T: HttpTransport> ApiClient<T> {
    /// Exchange credentials for a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let options = RequestOptions::post().with_json(&LoginRequest { email, password })?;
        let response: LoginResponse = self.fetch("/auth/login", options).await?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::mock::MockTransport;
    use crate::transport::{HttpResponse, Method};
    use store::Role;

    #[tokio::test]
    async fn test_login_builds_session() {
        let mock = MockTransport::new();
        mock.on(
            Method::Post,
            "/auth/login",
            HttpResponse::json(
                200,
                json!({"token": "jwt", "user": {"id": 1, "name": "Sup", "email": "supervisor@example.com", "role": "supervisor"}}),
            ),
        );

        let session = mock.client().login("supervisor@example.com", "pw").await.unwrap();
        assert_eq!(session.token, "jwt");
        assert_eq!(session.role(), Role::Supervisor);
    }

    #[tokio::test]
    async fn test_login_failure_message() {
        let mock = MockTransport::new();
        mock.on(
            Method::Post,
            "/auth/login",
            HttpResponse::json(401, json!({"detail": "Invalid credentials"})),
        );

        let err = mock.client().login("x@example.com", "bad").await.unwrap_err();
        assert_eq!(err.message(), "Invalid credentials");
    }
}
