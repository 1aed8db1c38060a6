//! Teacher screen state: class → session → attendance drill-down.

use api::models::{
    AttendanceBatch, AttendanceItem, AttendanceSessionInfo, AttendanceStatus, SessionAttendance,
    TeacherClass, TeacherSession,
};

/// One student's row in the attendance form.
#[derive(Clone, Debug, PartialEq)]
pub struct AttendanceRow {
    pub student_id: i64,
    pub student_name: String,
    pub status: AttendanceStatus,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TeacherState {
    pub loaded: bool,
    pub classes: Vec<TeacherClass>,
    pub selected_class: Option<i64>,
    pub sessions: Vec<TeacherSession>,
    pub selected_session: Option<AttendanceSessionInfo>,
    pub attendance: Vec<AttendanceRow>,
    /// Session whose attendance is being fetched. Only the latest click
    /// is applied.
    pub opening: Option<i64>,
}

impl TeacherState {
    /// Start showing `class_id`: its sessions are about to be fetched, and
    /// whatever session was open belongs to the previous class.
    pub fn select_class(&mut self, class_id: i64) {
        self.selected_class = Some(class_id);
        self.sessions.clear();
        self.selected_session = None;
        self.attendance.clear();
        self.opening = None;
    }

    /// Start opening `session_id`, superseding any earlier click.
    pub fn open_session(&mut self, session_id: i64) {
        self.opening = Some(session_id);
    }

    /// Attendance for `session_id` arrived. Returns `false`, leaving the
    /// open session untouched, if another session was clicked since.
    pub fn session_loaded(&mut self, session_id: i64, data: SessionAttendance) -> bool {
        if self.opening != Some(session_id) {
            return false;
        }
        self.opening = None;
        self.attendance_loaded(data);
        true
    }

    /// Sessions for `class_id` arrived. Ignored if another class has been
    /// selected since.
    pub fn sessions_loaded(&mut self, class_id: i64, sessions: Vec<TeacherSession>) {
        if self.selected_class == Some(class_id) {
            self.sessions = sessions;
        }
    }

    /// Replace the open session and its rows wholesale.
    pub fn attendance_loaded(&mut self, data: SessionAttendance) {
        self.selected_session = Some(data.session);
        self.attendance = data
            .attendance
            .into_iter()
            .map(|entry| AttendanceRow {
                student_id: entry.student_id,
                student_name: entry.student_name,
                status: entry.status.unwrap_or_default(),
            })
            .collect();
    }

    pub fn set_status(&mut self, student_id: i64, status: AttendanceStatus) {
        if let Some(row) = self.attendance.iter_mut().find(|r| r.student_id == student_id) {
            row.status = status;
        }
    }

    /// One item per row, in row order.
    pub fn batch(&self) -> AttendanceBatch {
        AttendanceBatch {
            items: self
                .attendance
                .iter()
                .map(|row| AttendanceItem {
                    student_id: row.student_id,
                    status: row.status,
                })
                .collect(),
        }
    }
}
