//! # Views
//!
//! Pure components take plain data plus event handlers and never touch the
//! application state; [`AppShell`] is the one connected container that reads
//! the [`AppState`](crate::state::AppState) signal and turns events into
//! actions.

mod flash;
pub use flash::{FlashBanner, FlashView};

mod header;
pub use header::HeaderView;

mod login;
pub use login::{LoginView, DEMO_USERS};

mod notifications;
pub use notifications::NotificationList;

pub mod supervisor;
pub use supervisor::{SupervisorEvent, SupervisorView};

mod teacher;
pub use teacher::{TeacherEvent, TeacherView};

mod student;
pub use student::StudentView;

mod shell;
pub use shell::AppShell;

#[cfg(test)]
mod tests;
