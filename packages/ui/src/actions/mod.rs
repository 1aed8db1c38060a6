//! # Actions — async workflows behind every user trigger
//!
//! Each workflow is split in two halves so it can be tested without a
//! renderer:
//!
//! 1. an `async fn` that talks to the backend through any
//!    [`ApiClient`](api::ApiClient) and returns what it fetched;
//! 2. an `AppState` method that applies that result, including the flash
//!    message the user sees.
//!
//! | Module | Workflows |
//! |--------|-----------|
//! | [`session`] | login, logout, role-specific initial load |
//! | [`notifications`] | background notification load, mark-as-read |
//! | [`supervisor`] | roster load, create/delete, bulk import, reports, feature flags |
//! | [`teacher`] | class and session selection, attendance submission |
//! | [`student`] | courses with their attendance summaries |
//!
//! Mutations never update state optimistically: they call the backend, then
//! re-fetch the affected slice and replace it.

pub mod notifications;
pub mod session;
pub mod student;
pub mod supervisor;
pub mod teacher;

pub use session::{load_initial, login, logout, InitialData, RoleData};
