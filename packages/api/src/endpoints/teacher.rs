use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AttendanceBatch, SessionAttendance, TeacherClass, TeacherSession};
use crate::transport::{HttpTransport, Method};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn teacher_classes(&self) -> Result<Vec<TeacherClass>, ApiError> {
        self.get("/teacher/classes").await
    }

    pub async fn teacher_sessions(&self, class_id: i64) -> Result<Vec<TeacherSession>, ApiError> {
        self.get(&format!("/teacher/classes/{class_id}/sessions")).await
    }

    pub async fn session_attendance(&self, session_id: i64) -> Result<SessionAttendance, ApiError> {
        self.get(&format!("/teacher/sessions/{session_id}/attendance")).await
    }

    /// Submit a full attendance batch. Locked sessions are rejected by the
    /// backend with a 403.
    pub async fn submit_attendance(
        &self,
        session_id: i64,
        batch: &AttendanceBatch,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::Post,
            &format!("/teacher/sessions/{session_id}/attendance"),
            batch,
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::mock::MockTransport;
    use crate::models::{AttendanceBatch, AttendanceItem, AttendanceStatus};
    use crate::transport::{HttpResponse, Method};

    #[tokio::test]
    async fn test_session_attendance_defaults_missing_status() {
        let mock = MockTransport::new();
        mock.on(
            Method::Get,
            "/teacher/sessions/9/attendance",
            HttpResponse::json(
                200,
                json!({
                    "session": {"id": 9, "course_id": 3, "date": "2024-10-01", "start_time": "09:00", "end_time": "09:40", "is_locked": 0},
                    "attendance": [
                        {"student_id": 1, "student_name": "Ada", "status": "excused"},
                        {"student_id": 2, "student_name": "Can", "status": null}
                    ]
                }),
            ),
        );

        let loaded = mock.client().session_attendance(9).await.unwrap();
        assert!(!loaded.session.is_locked);
        assert_eq!(loaded.attendance[0].status, Some(AttendanceStatus::Excused));
        assert_eq!(loaded.attendance[1].status.unwrap_or_default(), AttendanceStatus::Present);
    }

    #[tokio::test]
    async fn test_submit_attendance_posts_items() {
        let mock = MockTransport::new();
        mock.on(Method::Post, "/teacher/sessions/9/attendance", HttpResponse::no_content());

        let batch = AttendanceBatch {
            items: vec![
                AttendanceItem { student_id: 1, status: AttendanceStatus::Present },
                AttendanceItem { student_id: 2, status: AttendanceStatus::Unexcused },
            ],
        };
        mock.client().submit_attendance(9, &batch).await.unwrap();

        let sent = mock.last_request().unwrap();
        let body: Value = serde_json::from_str(sent.text_body().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"items": [{"student_id": 1, "status": "present"}, {"student_id": 2, "status": "unexcused"}]})
        );
    }

    #[tokio::test]
    async fn test_locked_session_surfaces_server_message() {
        let mock = MockTransport::new();
        mock.on(
            Method::Post,
            "/teacher/sessions/9/attendance",
            HttpResponse::json(403, json!({"detail": "Session locked"})),
        );

        let err = mock
            .client()
            .submit_attendance(9, &AttendanceBatch::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.message(), "Session locked");
    }
}
