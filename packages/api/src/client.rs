//! # ApiClient — request shaping and response normalisation
//!
//! [`ApiClient::request`] is the single path every call takes:
//!
//! 1. join the relative path onto the configured base URL;
//! 2. add `Authorization: Bearer <token>` when the client carries a token;
//! 3. serialise [`RequestBody::Json`] and set `Content-Type: application/json`,
//!    passing [`RequestBody::Form`] and [`RequestBody::Text`] through untouched;
//! 4. on `204 No Content` return `None` whatever the headers say;
//! 5. decode the body as JSON when the content type says so, as text otherwise;
//! 6. turn any non-2xx status into [`ApiError::Http`] (see [`error_message`]).
//!
//! Typed helpers ([`get`](ApiClient::get), [`send_json`](ApiClient::send_json))
//! sit on top and are what the endpoint wrappers use.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, FALLBACK_MESSAGE};
use crate::transport::{HttpRequest, HttpTransport, Method, WireBody};

/// Request body as supplied by the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Serialised to JSON by the client.
    Json(Value),
    /// Multipart form fields, sent as-is.
    Form(Vec<(String, String)>),
    /// Raw text, sent as-is. Set the content type through extra headers.
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<RequestBody>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::Get,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    pub fn put() -> Self {
        Self::new(Method::Put)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach a serialisable value as a JSON body.
    pub fn with_json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(self.with_body(RequestBody::Json(value)))
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Decoded response body.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Deserialize into `T`. Text bodies are parsed as JSON as a last resort,
    /// for servers that omit the content type.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ResponseBody::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            ResponseBody::Text(text) => {
                serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
            }
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text,
        }
    }
}

/// Pick the user-facing message out of a failed response body.
///
/// Priority: `detail`, then `message`, then the raw body, then
/// [`FALLBACK_MESSAGE`]. Empty strings and nulls count as absent.
pub fn error_message(body: Option<&ResponseBody>) -> String {
    fn readable(value: &Value) -> Option<String> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    let message = match body {
        Some(ResponseBody::Json(value)) => value
            .get("detail")
            .and_then(readable)
            .or_else(|| value.get("message").and_then(readable))
            .or_else(|| readable(value)),
        Some(ResponseBody::Text(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    };
    message.unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

/// REST client bound to one backend and, optionally, one bearer token.
#[derive(Clone, Debug)]
pub struct ApiClient<T: HttpTransport> {
    transport: T,
    base_url: String,
    token: Option<String>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Builder method to set (or drop) the bearer token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the response.
    ///
    /// Returns `Ok(None)` for `204 No Content`.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<ResponseBody>, ApiError> {
        let RequestOptions {
            method,
            body,
            mut headers,
        } = options;

        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let body = match body {
            Some(RequestBody::Json(value)) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(WireBody::Text(value.to_string()))
            }
            Some(RequestBody::Form(fields)) => Some(WireBody::Multipart(fields)),
            Some(RequestBody::Text(text)) => Some(WireBody::Text(text)),
            None => None,
        };

        let request = HttpRequest {
            method,
            url: self.url(path),
            headers,
            body,
        };
        tracing::debug!("{} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        let status = response.status;
        let success = response.is_success();
        if status == 204 {
            return Ok(None);
        }

        let decoded = if response.is_json() {
            match serde_json::from_str::<Value>(&response.body) {
                Ok(value) => ResponseBody::Json(value),
                Err(e) if success => return Err(ApiError::Decode(e.to_string())),
                Err(_) => ResponseBody::Text(response.body),
            }
        } else {
            ResponseBody::Text(response.body)
        };

        if !success {
            let message = error_message(Some(&decoded));
            tracing::warn!("{} {path} failed with {status}: {message}", method.as_str());
            return Err(ApiError::Http { status, message });
        }

        Ok(Some(decoded))
    }

    /// GET `path` and deserialize the JSON body.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.fetch(path, RequestOptions::get()).await
    }

    /// Send `options` and deserialize the JSON body, which must be present.
    pub async fn fetch<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        match self.request(path, options).await? {
            Some(body) => body.into_json(),
            None => Err(ApiError::Decode(format!("{path} returned no content"))),
        }
    }

    /// Send `body` as JSON with the given method.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<ResponseBody>, ApiError> {
        let options = RequestOptions::new(method).with_json(body)?;
        self.request(path, options).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::mock::MockTransport;
    use crate::transport::HttpResponse;

    #[tokio::test]
    async fn test_bearer_token_injected_when_present() {
        let mock = MockTransport::new();
        mock.on(Method::Get, "/notifications", HttpResponse::json(200, json!([])));

        let client = mock.client().with_token(Some("abc".to_string()));
        client.request("/notifications", RequestOptions::get()).await.unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.url, "http://mock.test/notifications");
        assert_eq!(sent.header("authorization"), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn test_no_authorization_without_token() {
        let mock = MockTransport::new();
        mock.on(Method::Get, "/notifications", HttpResponse::json(200, json!([])));

        mock.client().request("/notifications", RequestOptions::get()).await.unwrap();
        assert!(mock.last_request().unwrap().header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_json_body_serialised_with_content_type() {
        let mock = MockTransport::new();
        mock.on(Method::Post, "/auth/login", HttpResponse::json(200, json!({})));

        let options = RequestOptions::post()
            .with_json(&json!({"email": "a@b.c", "password": "pw"}))
            .unwrap();
        mock.client().request("/auth/login", options).await.unwrap();

        let sent = mock.last_request().unwrap();
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        let body: Value = serde_json::from_str(sent.text_body().unwrap()).unwrap();
        assert_eq!(body["email"], "a@b.c");
    }

    #[tokio::test]
    async fn test_form_body_left_untouched() {
        let mock = MockTransport::new();
        mock.on(Method::Post, "/upload", HttpResponse::no_content());

        let fields = vec![("name".to_string(), "x".to_string())];
        let options = RequestOptions::post().with_body(RequestBody::Form(fields.clone()));
        mock.client().request("/upload", options).await.unwrap();

        let sent = mock.last_request().unwrap();
        assert!(sent.header("Content-Type").is_none());
        assert_eq!(sent.body, Some(WireBody::Multipart(fields)));
    }

    #[tokio::test]
    async fn test_no_content_yields_none_regardless_of_content_type() {
        let mock = MockTransport::new();
        mock.on(
            Method::Post,
            "/notifications/1/read",
            HttpResponse::text(204, "application/json", ""),
        );

        let result = mock
            .client()
            .request("/notifications/1/read", RequestOptions::post())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_text_content_type_decoded_as_text() {
        let mock = MockTransport::new();
        mock.on(Method::Get, "/report", HttpResponse::text(200, "text/csv", "a,b\n1,2\n"));

        let result = mock.client().request("/report", RequestOptions::get()).await.unwrap();
        assert_eq!(result, Some(ResponseBody::Text("a,b\n1,2\n".to_string())));
    }

    #[tokio::test]
    async fn test_error_prefers_detail() {
        let mock = MockTransport::new();
        mock.on(
            Method::Get,
            "/x",
            HttpResponse::json(400, json!({"detail": "Bad input", "message": "ignored"})),
        );
        let err = mock.client().request("/x", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err, ApiError::Http { status: 400, message: "Bad input".to_string() });
    }

    #[tokio::test]
    async fn test_error_falls_back_to_message() {
        let mock = MockTransport::new();
        mock.on(Method::Get, "/x", HttpResponse::json(403, json!({"message": "Forbidden here"})));
        let err = mock.client().request("/x", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err.message(), "Forbidden here");
        assert_eq!(err.status(), Some(403));
    }

    #[tokio::test]
    async fn test_error_falls_back_to_raw_body() {
        let mock = MockTransport::new();
        mock.on(Method::Get, "/x", HttpResponse::text(500, "text/plain", "Database is down"));
        let err = mock.client().request("/x", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err.message(), "Database is down");
    }

    #[tokio::test]
    async fn test_error_falls_back_to_generic_message() {
        let mock = MockTransport::new();
        mock.on(Method::Get, "/x", HttpResponse::text(502, "text/plain", ""));
        let err = mock.client().request("/x", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err.message(), FALLBACK_MESSAGE);
        assert!(err.is_unexplained());
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/x", "connection refused");
        let err = mock.client().request("/x", RequestOptions::get()).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_get_requires_body() {
        let mock = MockTransport::new();
        mock.on(Method::Get, "/x", HttpResponse::no_content());
        let err = mock.client().get::<Vec<i64>>("/x").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_error_message_skips_empty_detail() {
        let body = ResponseBody::Json(json!({"detail": "", "message": "Second"}));
        assert_eq!(error_message(Some(&body)), "Second");
        assert_eq!(error_message(None), FALLBACK_MESSAGE);
    }
}
