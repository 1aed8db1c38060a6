//! Login, logout and the initial load that follows entering a role screen.

use api::models::Notification;
use api::{ApiClient, ApiError, HttpTransport};
use store::{KeyValueStore, Role, Session, SessionStore};

use super::notifications::load_notifications;
use super::student::{load_student, StudentLoad};
use super::supervisor::load_supervisor;
use super::teacher::load_teacher;
use crate::error::ActionError;
use crate::forms::LoginForm;
use crate::state::{AppState, SupervisorLoad};
use api::models::TeacherClass;

/// Everything fetched on entering a role screen.
#[derive(Clone, Debug)]
pub struct InitialData {
    pub notifications: Result<Vec<Notification>, ApiError>,
    pub role: RoleData,
}

#[derive(Clone, Debug)]
pub enum RoleData {
    Supervisor(SupervisorLoad),
    Teacher(Result<Vec<TeacherClass>, ApiError>),
    Student(Result<StudentLoad, ApiError>),
}

pub async fn login<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &LoginForm,
) -> Result<Session, ActionError> {
    let (email, password) = form.credentials()?;
    Ok(client.login(&email, &password).await?)
}

/// Fetch notifications and the role's own data concurrently.
pub async fn load_initial<T: HttpTransport>(client: &ApiClient<T>, role: Role) -> InitialData {
    let role_data = async {
        match role {
            Role::Supervisor => RoleData::Supervisor(load_supervisor(client).await),
            Role::Teacher => RoleData::Teacher(load_teacher(client).await),
            Role::Student => RoleData::Student(load_student(client).await),
        }
    };
    let (notifications, role) = futures::join!(load_notifications(client), role_data);
    InitialData {
        notifications,
        role,
    }
}

/// Drop the session from memory and storage.
pub fn logout<S: KeyValueStore>(state: &mut AppState, sessions: &SessionStore<S>) {
    sessions.clear();
    state.logged_out();
    tracing::info!("Signed out");
}

impl AppState {
    /// Apply a login attempt. Returns the role whose screen was entered.
    pub fn login_finished<S: KeyValueStore>(
        &mut self,
        sessions: &SessionStore<S>,
        result: Result<Session, ActionError>,
    ) -> Option<Role> {
        match result {
            Ok(session) => {
                if let Err(e) = sessions.persist(Some(&session)) {
                    tracing::error!("Failed to persist session: {e}");
                }
                let role = session.role();
                self.logged_in(session);
                Some(role)
            }
            Err(e) => {
                self.fail(&e);
                None
            }
        }
    }

    /// Apply the initial load. Ignored once signed out.
    pub fn initial_loaded(&mut self, data: InitialData) {
        if self.session.is_none() {
            tracing::debug!("Dropping initial load: signed out");
            return;
        }
        self.notifications_loaded(data.notifications);
        match data.role {
            RoleData::Supervisor(load) => self.supervisor_loaded(load),
            RoleData::Teacher(result) => self.teacher_loaded(result),
            RoleData::Student(result) => self.student_loaded(result),
        }
    }
}
