//! # Application state
//!
//! Everything the views render from lives in one [`AppState`], held in a
//! `Signal` provided by [`AppProvider`](crate::AppProvider).
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`flash`] | [`FlashState`]: the transient banner and its expiry ids |
//! | [`pending`] | [`InFlight`]: actions currently running, used to disable their controls |
//! | [`supervisor`] | [`SupervisorState`], [`SupervisorTab`] and roster updates |
//! | [`teacher`] | [`TeacherState`]: class, session and attendance selection |
//! | [`student`] | [`StudentState`] and the derived [`CourseCard`]s |
//!
//! The active [`Screen`] is picked solely by the session's role. There is no
//! transition from one role screen to another; logout always goes back
//! through [`Screen::Unauthenticated`].

pub mod flash;
pub mod pending;
pub mod student;
pub mod supervisor;
pub mod teacher;

pub use flash::{Flash, FlashKind, FlashState, FLASH_DURATION};
pub use pending::{InFlight, PendingAction, Ticket};
pub use student::{CourseCard, StudentState, DEFAULT_THRESHOLD};
pub use supervisor::{RosterSlice, RosterUpdate, SupervisorLoad, SupervisorState, SupervisorTab};
pub use teacher::{AttendanceRow, TeacherState};

use api::models::notification::unread_count;
use api::models::Notification;
use api::{ApiClient, HttpTransport};
use store::{ClientConfig, Role, Session};

use crate::error::ActionError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Screen {
    #[default]
    Unauthenticated,
    Supervisor(SupervisorState),
    Teacher(TeacherState),
    Student(StudentState),
}

impl Screen {
    /// Fresh, not yet loaded screen for `role`.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Supervisor => Screen::Supervisor(SupervisorState::default()),
            Role::Teacher => Screen::Teacher(TeacherState::default()),
            Role::Student => Screen::Student(StudentState::default()),
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Screen::Unauthenticated => None,
            Screen::Supervisor(_) => Some(Role::Supervisor),
            Screen::Teacher(_) => Some(Role::Teacher),
            Screen::Student(_) => Some(Role::Student),
        }
    }

    /// Whether the role's initial data load has completed.
    pub fn is_loaded(&self) -> bool {
        match self {
            Screen::Unauthenticated => true,
            Screen::Supervisor(s) => s.loaded,
            Screen::Teacher(s) => s.loaded,
            Screen::Student(s) => s.loaded,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub api_base: String,
    pub session: Option<Session>,
    pub screen: Screen,
    pub flash: FlashState,
    pub notifications: Vec<Notification>,
    pub in_flight: InFlight,
}

impl AppState {
    /// Initial state, entering the role screen straight away when a session
    /// was restored.
    pub fn new(config: &ClientConfig, session: Option<Session>) -> Self {
        let screen = match &session {
            Some(session) => Screen::for_role(session.role()),
            None => Screen::Unauthenticated,
        };
        Self {
            api_base: config.api_base.clone(),
            session,
            screen,
            flash: FlashState::default(),
            notifications: Vec::new(),
            in_flight: InFlight::default(),
        }
    }

    /// Client for the current session over `transport`.
    pub fn client<T: HttpTransport>(&self, transport: T) -> ApiClient<T> {
        ApiClient::new(transport, self.api_base.clone())
            .with_token(self.session.as_ref().map(|s| s.token.clone()))
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }

    pub fn logged_in(&mut self, session: Session) {
        tracing::info!("Signed in as {} ({})", session.user.name, session.role());
        self.screen = Screen::for_role(session.role());
        self.session = Some(session);
        self.notifications.clear();
    }

    pub fn logged_out(&mut self) {
        self.session = None;
        self.screen = Screen::Unauthenticated;
        self.notifications.clear();
        self.in_flight.clear();
    }

    /// Apply the result of the action behind `ticket`, unless the user
    /// signed out after it started. Returns whether it was applied.
    pub fn settle<R>(&mut self, ticket: &Ticket, result: R, apply: impl FnOnce(&mut AppState, R)) -> bool {
        if !self.in_flight.settle(ticket) {
            tracing::debug!("Dropping result of {:?}: started before sign-out", ticket.action());
            return false;
        }
        apply(self, result);
        true
    }

    pub fn unread_count(&self) -> usize {
        unread_count(&self.notifications)
    }

    /// Show `error` as an alert flash.
    pub fn fail(&mut self, error: &ActionError) -> u64 {
        self.flash.alert(error.message())
    }

    pub fn supervisor_mut(&mut self) -> Option<&mut SupervisorState> {
        match &mut self.screen {
            Screen::Supervisor(state) => Some(state),
            _ => None,
        }
    }

    pub fn teacher_mut(&mut self) -> Option<&mut TeacherState> {
        match &mut self.screen {
            Screen::Teacher(state) => Some(state),
            _ => None,
        }
    }

    pub fn student_mut(&mut self) -> Option<&mut StudentState> {
        match &mut self.screen {
            Screen::Student(state) => Some(state),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use store::UserInfo;

    use super::*;

    fn session_for(role: Role) -> Session {
        Session::new(
            UserInfo {
                id: 1,
                name: "Deniz".to_string(),
                email: format!("{role}@example.com"),
                role,
            },
            "tok".to_string(),
        )
    }

    #[test]
    fn test_restored_session_selects_role_screen() {
        let state = AppState::new(&ClientConfig::default(), Some(session_for(Role::Teacher)));
        assert_eq!(state.screen.role(), Some(Role::Teacher));
        assert!(!state.screen.is_loaded());

        let state = AppState::new(&ClientConfig::default(), None);
        assert_eq!(state.screen, Screen::Unauthenticated);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut state = AppState::new(&ClientConfig::default(), None);
        state.logged_in(session_for(Role::Student));
        assert_eq!(state.role(), Some(Role::Student));

        state.logged_out();
        assert!(state.session.is_none());
        assert_eq!(state.screen, Screen::Unauthenticated);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_result_started_before_logout_is_dropped() {
        let mut state = AppState::new(&ClientConfig::default(), Some(session_for(Role::Student)));
        let ticket = state.in_flight.start(PendingAction::MarkRead(3)).unwrap();

        state.logged_out();
        state.logged_in(session_for(Role::Student));
        let again = state.in_flight.start(PendingAction::MarkRead(3)).unwrap();

        let applied = state.settle(&ticket, "late", |state, message| {
            state.flash.alert(message);
        });
        assert!(!applied);
        assert!(state.flash.current().is_none());
        assert!(state.in_flight.is_pending(&PendingAction::MarkRead(3)));

        assert!(state.settle(&again, (), |_, _| {}));
        assert!(state.in_flight.is_idle());
    }

    #[test]
    fn test_client_carries_session_token() {
        let state = AppState::new(&ClientConfig::default(), Some(session_for(Role::Student)));
        let client = state.client(api::MockTransport::new());
        assert_eq!(client.token(), Some("tok"));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
