//! Student workflow: enrolled courses and one attendance summary per course.

use api::models::{AttendanceSummary, StudentCourse};
use api::{ApiClient, ApiError, HttpTransport};
use futures::future::join_all;

use crate::state::AppState;

#[derive(Clone, Debug)]
pub struct StudentLoad {
    pub courses: Vec<StudentCourse>,
    pub summaries: Vec<(i64, Result<AttendanceSummary, ApiError>)>,
}

/// Fetch the course list, then every course's summary concurrently.
pub async fn load_student<T: HttpTransport>(
    client: &ApiClient<T>,
) -> Result<StudentLoad, ApiError> {
    let courses = client.student_courses().await?;
    let summaries = join_all(courses.iter().map(|course| async move {
        (course.id, client.course_summary(course.id).await)
    }))
    .await;
    Ok(StudentLoad { courses, summaries })
}

impl AppState {
    pub fn student_loaded(&mut self, result: Result<StudentLoad, ApiError>) {
        let Some(student) = self.student_mut() else {
            return;
        };
        student.loaded = true;
        match result {
            Ok(load) => {
                student.courses = load.courses;
                student.summaries.clear();
                for (course_id, summary) in load.summaries {
                    match summary {
                        Ok(summary) => {
                            student.summaries.insert(course_id, summary);
                        }
                        Err(e) => tracing::warn!("No attendance summary for course {course_id}: {e}"),
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed to load courses: {e}");
                self.fail(&e.into());
            }
        }
    }
}
