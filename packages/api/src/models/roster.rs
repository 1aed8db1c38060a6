//! Supervisor rosters and creation payloads.

use serde::{Deserialize, Serialize};

use super::flexible_bool;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_color")]
    pub display_color: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub student_no: String,
    #[serde(default)]
    pub guardian_contact: Option<String>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub grade: i64,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub supervisor_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub weekly_hours: Option<i64>,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub teacher_name: String,
    #[serde(default = "default_color")]
    pub display_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default = "default_threshold")]
    pub absence_threshold_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSession {
    pub id: i64,
    pub course_id: i64,
    #[serde(default)]
    pub term_id: Option<i64>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_locked: bool,
}

/// `{"id": ...}` returned by creation endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Created {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTeacher {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub display_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub student_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewClass {
    pub name: String,
    pub grade: i64,
    pub branch: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCourse {
    pub name: String,
    pub code: String,
    pub class_id: i64,
    pub teacher_id: i64,
    pub weekly_hours: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTerm {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub absence_threshold_percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewScheduleSession {
    pub course_id: i64,
    pub term_id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

pub(crate) fn default_color() -> String {
    "#2563eb".to_string()
}

fn default_threshold() -> f64 {
    30.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_from_sqlite_row() {
        let teacher: Teacher = serde_json::from_str(
            r##"{"id": 4, "name": "Ali", "email": "ali@example.com", "display_color": "#ff0000", "is_active": 1}"##,
        )
        .unwrap();
        assert!(teacher.is_active);
        assert_eq!(teacher.display_color, "#ff0000");
    }

    #[test]
    fn test_new_teacher_omits_empty_password() {
        let payload = NewTeacher {
            name: "Ali".into(),
            email: "ali@example.com".into(),
            password: None,
            display_color: "#2563eb".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_session_lock_flag() {
        let session: ScheduleSession = serde_json::from_str(
            r#"{"id": 1, "course_id": 2, "term_id": 3, "date": "2024-09-10", "start_time": "09:00", "end_time": "09:40", "is_locked": 0}"#,
        )
        .unwrap();
        assert!(!session.is_locked);
        assert_eq!(session.term_id, Some(3));
    }
}
