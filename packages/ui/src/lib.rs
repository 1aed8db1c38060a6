//! This crate contains the application state, the async action workflows
//! and all UI for the attendance client.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod app;
pub use app::{dispatch, make_store, use_app, use_sessions, AppProvider, PlatformStore};

pub mod actions;
pub mod error;
pub use error::ActionError;

pub mod forms;
pub mod state;
pub use state::{AppState, Screen};

pub mod views;
pub use views::AppShell;

#[cfg(test)]
mod testing;
