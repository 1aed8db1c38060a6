use crate::client::{ApiClient, RequestBody, RequestOptions};
use crate::error::ApiError;
use crate::models::{
    BulkImportResult, Course, Created, NewClass, NewCourse, NewScheduleSession, NewStudent,
    NewTeacher, NewTerm, ScheduleSession, SchoolClass, Student, Teacher, Term,
};
use crate::transport::{HttpTransport, Method};

impl<T: HttpTransport> ApiClient<T> {
    pub async fn supervisor_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.get("/supervisor/teachers").await
    }

    pub async fn create_teacher(&self, teacher: &NewTeacher) -> Result<Created, ApiError> {
        self.create("/supervisor/teachers", teacher).await
    }

    pub async fn delete_teacher(&self, id: i64) -> Result<(), ApiError> {
        self.request(&format!("/supervisor/teachers/{id}"), RequestOptions::delete())
            .await?;
        Ok(())
    }

    pub async fn supervisor_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get("/supervisor/students").await
    }

    pub async fn create_student(&self, student: &NewStudent) -> Result<Created, ApiError> {
        self.create("/supervisor/students", student).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.request(&format!("/supervisor/students/{id}"), RequestOptions::delete())
            .await?;
        Ok(())
    }

    /// Upload a CSV with a `name,email,student_no` header row.
    pub async fn import_students_csv(&self, csv: &str) -> Result<BulkImportResult, ApiError> {
        let options = RequestOptions::post()
            .with_header("Content-Type", "text/csv")
            .with_body(RequestBody::Text(csv.to_string()));
        self.fetch("/supervisor/students/bulk", options).await
    }

    pub async fn supervisor_classes(&self) -> Result<Vec<SchoolClass>, ApiError> {
        self.get("/supervisor/classes").await
    }

    pub async fn create_class(&self, class: &NewClass) -> Result<Created, ApiError> {
        self.create("/supervisor/classes", class).await
    }

    pub async fn supervisor_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.get("/supervisor/courses").await
    }

    pub async fn create_course(&self, course: &NewCourse) -> Result<Created, ApiError> {
        self.create("/supervisor/courses", course).await
    }

    pub async fn supervisor_terms(&self) -> Result<Vec<Term>, ApiError> {
        self.get("/supervisor/terms").await
    }

    pub async fn create_term(&self, term: &NewTerm) -> Result<Created, ApiError> {
        self.create("/supervisor/terms", term).await
    }

    pub async fn supervisor_sessions(&self) -> Result<Vec<ScheduleSession>, ApiError> {
        self.get("/supervisor/schedule-sessions").await
    }

    pub async fn create_schedule_session(
        &self,
        session: &NewScheduleSession,
    ) -> Result<Created, ApiError> {
        self.create("/supervisor/schedule-sessions", session).await
    }

    async fn create<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Created, ApiError> {
        match self.send_json(Method::Post, path, body).await? {
            Some(body) => body.into_json(),
            None => Err(ApiError::Decode(format!("{path} returned no id"))),
        }
    }
}
