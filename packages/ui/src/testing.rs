//! Fixtures shared by the unit tests of this crate.

use api::MockTransport;
use store::{ClientConfig, Role, Session, UserInfo};

use crate::state::AppState;

pub fn session_for(role: Role) -> Session {
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

/// State whose clients talk to [`MockTransport`].
pub fn mock_state(session: Option<Session>) -> AppState {
    let config = ClientConfig::default().with_api_base(MockTransport::BASE_URL);
    AppState::new(&config, session)
}

/// Signed-in state on `role`'s screen, not yet loaded.
pub fn state_for(role: Role) -> AppState {
    mock_state(Some(session_for(role)))
}
