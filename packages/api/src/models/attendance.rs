//! Teacher-side classes, sessions and attendance.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::flexible_bool;
use super::roster::default_color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Excused,
    Unexcused,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Excused,
        AttendanceStatus::Unexcused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Excused => "excused",
            AttendanceStatus::Unexcused => "unexcused",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Excused => "Excused",
            AttendanceStatus::Unexcused => "Unexcused",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A class the teacher has at least one course in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherClass {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub grade: i64,
    #[serde(default)]
    pub branch: String,
    #[serde(default = "default_color")]
    pub display_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeacherSession {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_locked: bool,
    #[serde(default)]
    pub course_name: String,
}

/// Session header returned alongside its attendance roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSessionInfo {
    pub id: i64,
    #[serde(default)]
    pub course_id: i64,
    #[serde(default)]
    pub class_id: Option<i64>,
    #[serde(default)]
    pub course_name: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub is_locked: bool,
}

impl AttendanceSessionInfo {
    /// Course name, or the course id when the backend sent no name.
    pub fn title(&self) -> String {
        match &self.course_name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self.course_id.to_string(),
        }
    }
}

/// One student's row. `status` is `None` until attendance has been taken.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub student_name: String,
    #[serde(default)]
    pub status: Option<AttendanceStatus>,
}

/// `GET /teacher/sessions/{id}/attendance`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionAttendance {
    pub session: AttendanceSessionInfo,
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceItem {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

/// `POST /teacher/sessions/{id}/attendance` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceBatch {
    pub items: Vec<AttendanceItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_with_missing_status() {
        let data: SessionAttendance = serde_json::from_str(
            r#"{
                "session": {"id": 9, "course_id": 2, "date": "2024-10-01", "start_time": "10:00", "end_time": "10:40", "is_locked": 1, "course_name": "Math"},
                "attendance": [
                    {"id": null, "student_id": 1, "student_name": "Can", "status": null},
                    {"id": 5, "student_id": 2, "student_name": "Ece", "status": "excused"}
                ]
            }"#,
        )
        .unwrap();
        assert!(data.session.is_locked);
        assert_eq!(data.attendance[0].status, None);
        assert_eq!(data.attendance[1].status, Some(AttendanceStatus::Excused));
    }

    #[test]
    fn test_title_falls_back_to_course_id() {
        let info = AttendanceSessionInfo {
            id: 1,
            course_id: 42,
            class_id: None,
            course_name: None,
            date: "2024-10-01".into(),
            start_time: "10:00".into(),
            end_time: "10:40".into(),
            is_locked: false,
        };
        assert_eq!(info.title(), "42");
    }
}
