//! # API crate — REST client for the attendance backend
//!
//! Every screen of the client talks to the backend through [`ApiClient`]. The
//! backend owns authentication, attendance rules, reports and feature flags;
//! this crate only shapes requests and normalises responses.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL joining, bearer-token injection, JSON body encoding, status/content-type driven decoding |
//! | [`transport`] | [`HttpTransport`] seam plus the `reqwest` implementation used in the browser |
//! | [`mock`] | In-memory [`MockTransport`] for tests |
//! | [`error`] | [`ApiError`], the single error type surfaced to the UI |
//! | [`models`] | Wire types for rosters, attendance, notifications, reports and flags |
//! | [`endpoints`] | One typed method per consumed endpoint, grouped by role |
//!
//! ## Error messages
//!
//! A non-2xx response becomes [`ApiError::Http`]. Its message is picked from the
//! decoded body in this order: `detail`, `message`, the raw body, and finally
//! [`error::FALLBACK_MESSAGE`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod mock;
pub mod models;
pub mod transport;

pub use client::{ApiClient, RequestBody, RequestOptions, ResponseBody};
pub use error::ApiError;
pub use mock::MockTransport;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport, WireBody};

pub use store::{Role, Session, UserInfo};

/// Client type used by the browser build.
pub type WebClient = ApiClient<ReqwestTransport>;
