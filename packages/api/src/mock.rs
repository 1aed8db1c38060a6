//! In-memory transport for tests.
//!
//! Responses are registered per `(method, path)` and served for every matching
//! request until replaced. Requests without a registration get a 404 with a
//! `detail` naming the missing route. Every request is recorded.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Method};

#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<(Method, String), Result<HttpResponse, String>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    /// Base URL used by [`MockTransport::client`].
    pub const BASE_URL: &'static str = "http://mock.test";

    pub fn new() -> Self {
        Self::default()
    }

    /// A client pointed at this transport, without a token.
    pub fn client(&self) -> ApiClient<MockTransport> {
        ApiClient::new(self.clone(), Self::BASE_URL)
    }

    /// Serve `response` for `method path` (path includes any query string).
    pub fn on(&self, method: Method, path: &str, response: HttpResponse) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Ok(response));
    }

    /// Fail `method path` at the transport level.
    pub fn fail(&self, method: Method, path: &str, reason: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), Err(reason.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Number of recorded requests for `method path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && Self::path_of(&r.url) == path)
            .count()
    }

    pub fn reset_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn path_of(url: &str) -> &str {
        url.strip_prefix(Self::BASE_URL).unwrap_or(url)
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let key = (request.method, Self::path_of(&request.url).to_string());
        self.requests.lock().unwrap().push(request);

        match self.routes.lock().unwrap().get(&key) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(reason)) => Err(ApiError::Network(reason.clone())),
            None => Ok(HttpResponse::json(
                404,
                json!({"detail": format!("no mock for {} {}", key.0.as_str(), key.1)}),
            )),
        }
    }
}
