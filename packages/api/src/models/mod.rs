//! # Wire models
//!
//! Shapes of the JSON the backend sends and accepts, grouped by area:
//!
//! | Module | Types |
//! |--------|-------|
//! | [`roster`] | Supervisor rosters (`Teacher`, `Student`, `SchoolClass`, `Course`, `Term`, `ScheduleSession`) and their creation payloads |
//! | [`attendance`] | Teacher-side classes, sessions, attendance rows and the submission batch |
//! | [`student`] | Student courses and per-course attendance summaries |
//! | [`notification`] | In-app notifications |
//! | [`flags`] | Feature-flag map with typed accessors |
//! | [`report`] | Attendance report query, rows and bulk-import results |
//!
//! The backend is SQLite-backed and serialises booleans as `0`/`1`; fields
//! like `is_locked` and `is_active` go through [`flexible_bool`] so both forms
//! decode. Response structs default missing fields so that an older backend
//! that omits a column still renders.

use serde::{Deserialize, Deserializer};

pub mod attendance;
pub mod flags;
pub mod notification;
pub mod report;
pub mod roster;
pub mod student;

pub use attendance::{
    AttendanceBatch, AttendanceEntry, AttendanceItem, AttendanceSessionInfo, AttendanceStatus,
    SessionAttendance, TeacherClass, TeacherSession,
};
pub use flags::FeatureFlags;
pub use notification::Notification;
pub use report::{BulkImportError, BulkImportResult, Report, ReportFormat, ReportQuery, ReportRow};
pub use roster::{
    Course, Created, NewClass, NewCourse, NewScheduleSession, NewStudent, NewTeacher, NewTerm,
    ScheduleSession, SchoolClass, Student, Teacher, Term,
};
pub use student::{AttendanceSummary, StudentCourse};

pub use store::{Role, Session, UserInfo};

/// Accept `true`/`false`, `0`/`1` or `null` (as `false`).
pub fn flexible_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Bool(b)) => b,
        Some(Raw::Int(n)) => n != 0,
        None => false,
    })
}
