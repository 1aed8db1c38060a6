//! Typed wrappers for every endpoint the client consumes.
//!
//! Each submodule adds an `impl ApiClient` block for one area of the backend,
//! so call sites read `client.supervisor_teachers().await?`.

mod auth;
mod flags;
mod notifications;
mod reports;
mod student;
mod supervisor;
mod teacher;

pub use auth::LoginResponse;
