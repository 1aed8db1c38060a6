use serde::{Deserialize, Serialize};

use super::roster::default_color;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentCourse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default = "default_color")]
    pub display_color: String,
}

/// `GET /student/courses/{id}/attendance-summary`
///
/// `percent` is computed by the backend (it honours the
/// `absence_only_unexcused` flag); the client never recomputes it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    #[serde(default)]
    pub course_id: i64,
    #[serde(default)]
    pub percent: Option<f64>,
    #[serde(default)]
    pub threshold: Option<f64>,
}
