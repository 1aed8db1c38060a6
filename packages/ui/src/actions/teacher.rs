//! Teacher workflows: drill down from class to session, then take attendance.

use api::models::{AttendanceBatch, SessionAttendance, TeacherClass, TeacherSession};
use api::{ApiClient, ApiError, HttpTransport};

use crate::error::ActionError;
use crate::state::{AppState, Screen};

/// Shown when a submission is rejected without an explanation.
pub const LOCKED_MESSAGE: &str = "Attendance is locked for this session";
pub const SAVED_MESSAGE: &str = "Attendance saved";

pub async fn load_teacher<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<Vec<TeacherClass>, ApiError> {
    client.teacher_classes().await
}

pub async fn load_sessions<T: HttpTransport>(
    client: &ApiClient<T>,
    class_id: i64,
) -> Result<Vec<TeacherSession>, ActionError> {
    Ok(client.teacher_sessions(class_id).await?)
}

pub async fn open_session<T: HttpTransport>(
    client: &ApiClient<T>,
    session_id: i64,
) -> Result<SessionAttendance, ActionError> {
    Ok(client.session_attendance(session_id).await?)
}

/// Submit the batch, then reload the session's attendance.
pub async fn submit_attendance<T: HttpTransport>(
    client: &ApiClient<T>,
    session_id: i64,
    batch: &AttendanceBatch,
) -> Result<SessionAttendance, ActionError> {
    client.submit_attendance(session_id, batch).await?;
    Ok(client.session_attendance(session_id).await?)
}

impl AppState {
    /// The open session's id and the batch built from its rows.
    pub fn attendance_submission(&self) -> Option<(i64, AttendanceBatch)> {
        match &self.screen {
            Screen::Teacher(teacher) => {
                let session = teacher.selected_session.as_ref()?;
                Some((session.id, teacher.batch()))
            }
            _ => None,
        }
    }

    pub fn teacher_loaded(&mut self, result: Result<Vec<TeacherClass>, ApiError>) {
        let Some(teacher) = self.teacher_mut() else {
            return;
        };
        teacher.loaded = true;
        match result {
            Ok(classes) => teacher.classes = classes,
            Err(e) => {
                tracing::error!("Failed to load classes: {e}");
                self.fail(&e.into());
            }
        }
    }

    /// Start selecting `class_id`. Clears the previous session.
    pub fn class_selected(&mut self, class_id: i64) {
        if let Some(teacher) = self.teacher_mut() {
            teacher.select_class(class_id);
        }
    }

    /// Apply the sessions fetched for `class_id`. Dropped when another class
    /// was selected since.
    pub fn sessions_loaded(&mut self, class_id: i64, result: Result<Vec<TeacherSession>, ActionError>) {
        let Some(teacher) = self.teacher_mut() else {
            return;
        };
        if teacher.selected_class != Some(class_id) {
            tracing::debug!("Dropping sessions for class {class_id}: no longer selected");
            return;
        }
        match result {
            Ok(sessions) => teacher.sessions_loaded(class_id, sessions),
            Err(e) => {
                self.fail(&e);
            }
        }
    }

    /// Start opening `session_id`; its attendance is fetched next.
    pub fn session_selected(&mut self, session_id: i64) {
        if let Some(teacher) = self.teacher_mut() {
            teacher.open_session(session_id);
        }
    }

    /// Apply the attendance fetched for `session_id`. Dropped when another
    /// session was selected since.
    pub fn session_opened(&mut self, session_id: i64, result: Result<SessionAttendance, ActionError>) {
        let Some(teacher) = self.teacher_mut() else {
            return;
        };
        if teacher.opening != Some(session_id) {
            tracing::debug!("Dropping attendance for session {session_id}: no longer selected");
            return;
        }
        match result {
            Ok(data) => {
                teacher.session_loaded(session_id, data);
            }
            Err(e) => {
                teacher.opening = None;
                self.fail(&e);
            }
        }
    }

    pub fn attendance_submitted(&mut self, result: Result<SessionAttendance, ActionError>) {
        match result {
            Ok(data) => {
                self.flash.success(SAVED_MESSAGE);
                if let Some(teacher) = self.teacher_mut() {
                    teacher.attendance_loaded(data);
                }
            }
            Err(ActionError::Api(e)) if e.is_unexplained() => {
                self.flash.alert(LOCKED_MESSAGE);
            }
            Err(e) => {
                self.fail(&e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use api::models::AttendanceStatus;
    use api::{HttpResponse, Method, MockTransport};
    use serde_json::{json, Value};
    use store::Role;

    use super::*;
    use crate::state::{FlashKind, PendingAction, TeacherState};
    use crate::testing::state_for;

    fn attendance_json(statuses: [&str; 3]) -> Value {
        json!({
            "session": {"id": 9, "course_id": 3, "course_name": "Math", "date": "2024-10-01", "start_time": "09:00", "end_time": "09:40", "is_locked": false},
            "attendance": [
                {"student_id": 1, "student_name": "Ada", "status": statuses[0]},
                {"student_id": 2, "student_name": "Can", "status": statuses[1]},
                {"student_id": 3, "student_name": "Ece", "status": statuses[2]}
            ]
        })
    }

    fn teacher(state: &AppState) -> &TeacherState {
        match &state.screen {
            Screen::Teacher(t) => t,
            other => panic!("expected teacher screen, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_sends_one_item_per_row_and_reloads() {
        let mock = MockTransport::new();
        mock.on(
            Method::Get,
            "/teacher/sessions/9/attendance",
            HttpResponse::json(200, attendance_json(["present", "present", "present"])),
        );

        let mut state = state_for(Role::Teacher);
        state.session_selected(9);
        let result = open_session(&state.client(mock.clone()), 9).await;
        state.session_opened(9, result);

        let t = state.teacher_mut().unwrap();
        t.set_status(2, AttendanceStatus::Excused);
        t.set_status(3, AttendanceStatus::Unexcused);
        let batch = t.batch();

        mock.on(Method::Post, "/teacher/sessions/9/attendance", HttpResponse::no_content());
        mock.on(
            Method::Get,
            "/teacher/sessions/9/attendance",
            HttpResponse::json(200, attendance_json(["present", "excused", "unexcused"])),
        );
        let result = submit_attendance(&state.client(mock.clone()), 9, &batch).await;
        state.attendance_submitted(result);

        let posted = mock
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Post)
            .unwrap();
        let body: Value = serde_json::from_str(posted.text_body().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"items": [
                {"student_id": 1, "status": "present"},
                {"student_id": 2, "status": "excused"},
                {"student_id": 3, "status": "unexcused"}
            ]})
        );
        assert_eq!(mock.count(Method::Get, "/teacher/sessions/9/attendance"), 2);
        assert_eq!(state.flash.current().unwrap().message, SAVED_MESSAGE);
        assert_eq!(teacher(&state).attendance[2].status, AttendanceStatus::Unexcused);
    }

    #[tokio::test]
    async fn test_locked_session_with_server_message() {
        let mock = MockTransport::new();
        mock.on(
            Method::Post,
            "/teacher/sessions/9/attendance",
            HttpResponse::json(403, json!({"detail": "Session is locked"})),
        );

        let mut state = state_for(Role::Teacher);
        let result = submit_attendance(&state.client(mock), 9, &AttendanceBatch::default()).await;
        state.attendance_submitted(result);

        let flash = state.flash.current().unwrap();
        assert_eq!(flash.kind, FlashKind::Alert);
        assert_eq!(flash.message, "Session is locked");
    }

    #[tokio::test]
    async fn test_locked_session_without_message() {
        let mock = MockTransport::new();
        mock.on(
            Method::Post,
            "/teacher/sessions/9/attendance",
            HttpResponse::text(403, "text/plain", ""),
        );

        let mut state = state_for(Role::Teacher);
        let result = submit_attendance(&state.client(mock), 9, &AttendanceBatch::default()).await;
        state.attendance_submitted(result);

        assert_eq!(state.flash.current().unwrap().message, LOCKED_MESSAGE);
    }

    #[tokio::test]
    async fn test_select_class_replaces_sessions() {
        let mock = MockTransport::new();
        mock.on(
            Method::Get,
            "/teacher/classes/1/sessions",
            HttpResponse::json(
                200,
                json!([{"id": 9, "date": "2024-10-01", "start_time": "09:00", "end_time": "09:40", "is_locked": 0, "course_name": "Math"}]),
            ),
        );

        let mut state = state_for(Role::Teacher);
        state.class_selected(1);
        let result = load_sessions(&state.client(mock), 1).await;
        state.sessions_loaded(1, result);

        let t = teacher(&state);
        assert_eq!(t.selected_class, Some(1));
        assert_eq!(t.sessions.len(), 1);
        assert!(t.selected_session.is_none());
    }

    #[tokio::test]
    async fn test_second_class_click_replaces_first() {
        let mock = MockTransport::new();
        mock.on(
            Method::Get,
            "/teacher/classes/1/sessions",
            HttpResponse::json(
                200,
                json!([{"id": 9, "date": "2024-10-01", "start_time": "09:00", "end_time": "09:40", "course_name": "Math"}]),
            ),
        );
        mock.on(
            Method::Get,
            "/teacher/classes/2/sessions",
            HttpResponse::json(
                200,
                json!([{"id": 12, "date": "2024-10-02", "start_time": "10:00", "end_time": "10:40", "course_name": "Physics"}]),
            ),
        );

        let mut state = state_for(Role::Teacher);
        let first = state.in_flight.start(PendingAction::SelectClass(1)).unwrap();
        state.class_selected(1);
        let second = state.in_flight.start(PendingAction::SelectClass(2)).unwrap();
        state.class_selected(2);

        let client = state.client(mock);
        let late = load_sessions(&client, 1).await;
        let latest = load_sessions(&client, 2).await;
        assert!(state.settle(&second, latest, |state, result| state.sessions_loaded(2, result)));
        assert!(state.settle(&first, late, |state, result| state.sessions_loaded(1, result)));

        let t = teacher(&state);
        assert_eq!(t.selected_class, Some(2));
        assert_eq!(t.sessions.iter().map(|s| s.id).collect::<Vec<_>>(), vec![12]);
        assert!(state.in_flight.is_idle());
    }
}
