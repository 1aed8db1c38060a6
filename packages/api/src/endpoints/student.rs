use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AttendanceSummary, StudentCourse};
use crate::transport::HttpTransport;

impl<T: HttpTransport> ApiClient<T> {
    pub async fn student_courses(&self) -> Result<Vec<StudentCourse>, ApiError> {
        self.get("/student/courses").await
    }

    pub async fn course_summary(&self, course_id: i64) -> Result<AttendanceSummary, ApiError> {
        self.get(&format!("/student/courses/{course_id}/attendance-summary"))
            .await
    }
}
