//! Supervisor screen state: the active tab and every roster it renders from.

use api::models::{
    BulkImportResult, Course, FeatureFlags, Report, ScheduleSession, SchoolClass, Student, Teacher,
    Term,
};
use api::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SupervisorTab {
    #[default]
    Teachers,
    Students,
    Classes,
    Courses,
    Terms,
    Sessions,
    Reports,
    Flags,
    Notifications,
}

impl SupervisorTab {
    pub const ALL: [SupervisorTab; 9] = [
        SupervisorTab::Teachers,
        SupervisorTab::Students,
        SupervisorTab::Classes,
        SupervisorTab::Courses,
        SupervisorTab::Terms,
        SupervisorTab::Sessions,
        SupervisorTab::Reports,
        SupervisorTab::Flags,
        SupervisorTab::Notifications,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SupervisorTab::Teachers => "teachers",
            SupervisorTab::Students => "students",
            SupervisorTab::Classes => "classes",
            SupervisorTab::Courses => "courses",
            SupervisorTab::Terms => "terms",
            SupervisorTab::Sessions => "sessions",
            SupervisorTab::Reports => "reports",
            SupervisorTab::Flags => "flags",
            SupervisorTab::Notifications => "notifications",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupervisorTab::Teachers => "Teachers",
            SupervisorTab::Students => "Students",
            SupervisorTab::Classes => "Classes",
            SupervisorTab::Courses => "Courses",
            SupervisorTab::Terms => "Terms",
            SupervisorTab::Sessions => "Sessions",
            SupervisorTab::Reports => "Reports",
            SupervisorTab::Flags => "Feature flags",
            SupervisorTab::Notifications => "Notifications",
        }
    }
}

/// One independently fetched roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterSlice {
    Teachers,
    Students,
    Classes,
    Courses,
    Terms,
    Sessions,
    Flags,
}

impl RosterSlice {
    pub fn label(&self) -> &'static str {
        match self {
            RosterSlice::Teachers => "teachers",
            RosterSlice::Students => "students",
            RosterSlice::Classes => "classes",
            RosterSlice::Courses => "courses",
            RosterSlice::Terms => "terms",
            RosterSlice::Sessions => "sessions",
            RosterSlice::Flags => "feature flags",
        }
    }
}

/// A freshly fetched roster, replacing the one held in state.
#[derive(Clone, Debug, PartialEq)]
pub enum RosterUpdate {
    Teachers(Vec<Teacher>),
    Students(Vec<Student>),
    Classes(Vec<SchoolClass>),
    Courses(Vec<Course>),
    Terms(Vec<Term>),
    Sessions(Vec<ScheduleSession>),
    Flags(FeatureFlags),
}

/// Result of the initial supervisor load. Every slice succeeds or fails on
/// its own.
#[derive(Clone, Debug)]
pub struct SupervisorLoad {
    pub teachers: Result<Vec<Teacher>, ApiError>,
    pub students: Result<Vec<Student>, ApiError>,
    pub classes: Result<Vec<SchoolClass>, ApiError>,
    pub courses: Result<Vec<Course>, ApiError>,
    pub terms: Result<Vec<Term>, ApiError>,
    pub sessions: Result<Vec<ScheduleSession>, ApiError>,
    pub flags: Result<FeatureFlags, ApiError>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SupervisorState {
    pub tab: SupervisorTab,
    pub loaded: bool,
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
    pub classes: Vec<SchoolClass>,
    pub courses: Vec<Course>,
    pub terms: Vec<Term>,
    pub sessions: Vec<ScheduleSession>,
    pub flags: FeatureFlags,
    pub report: Option<Report>,
    pub last_import: Option<BulkImportResult>,
}

impl SupervisorState {
    /// Show another tab. Renders from what is already loaded.
    pub fn switch_tab(&mut self, tab: SupervisorTab) {
        self.tab = tab;
    }

    pub fn apply(&mut self, update: RosterUpdate) {
        match update {
            RosterUpdate::Teachers(list) => self.teachers = list,
            RosterUpdate::Students(list) => self.students = list,
            RosterUpdate::Classes(list) => self.classes = list,
            RosterUpdate::Courses(list) => self.courses = list,
            RosterUpdate::Terms(list) => self.terms = list,
            RosterUpdate::Sessions(list) => self.sessions = list,
            RosterUpdate::Flags(flags) => self.flags = flags,
        }
    }

    /// Apply every slice that loaded and return the ones that failed.
    pub fn apply_load(&mut self, load: SupervisorLoad) -> Vec<RosterSlice> {
        let mut failed = Vec::new();
        let mut take = |slice: RosterSlice, result: Result<RosterUpdate, ApiError>| match result {
            Ok(update) => self.apply(update),
            Err(e) => {
                tracing::error!("Failed to load {}: {e}", slice.label());
                failed.push(slice);
            }
        };

        take(RosterSlice::Teachers, load.teachers.map(RosterUpdate::Teachers));
        take(RosterSlice::Students, load.students.map(RosterUpdate::Students));
        take(RosterSlice::Classes, load.classes.map(RosterUpdate::Classes));
        take(RosterSlice::Courses, load.courses.map(RosterUpdate::Courses));
        take(RosterSlice::Terms, load.terms.map(RosterUpdate::Terms));
        take(RosterSlice::Sessions, load.sessions.map(RosterUpdate::Sessions));
        take(RosterSlice::Flags, load.flags.map(RosterUpdate::Flags));

        self.loaded = true;
        failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(id: i64, name: &str) -> Teacher {
        Teacher {
            id,
            name: name.to_string(),
            email: format!("{name}@example.com"),
            display_color: "#2563eb".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_switch_tab_keeps_rosters() {
        let mut state = SupervisorState::default();
        state.apply(RosterUpdate::Teachers(vec![teacher(1, "ayse")]));
        state.switch_tab(SupervisorTab::Classes);
        assert_eq!(state.tab, SupervisorTab::Classes);
        assert_eq!(state.teachers.len(), 1);
    }

    #[test]
    fn test_partial_load_keeps_successful_slices() {
        let mut state = SupervisorState::default();
        let down = || ApiError::Network("connection refused".to_string());
        let failed = state.apply_load(SupervisorLoad {
            teachers: Ok(vec![teacher(1, "ayse")]),
            students: Err(down()),
            classes: Ok(Vec::new()),
            courses: Ok(Vec::new()),
            terms: Err(down()),
            sessions: Ok(Vec::new()),
            flags: Ok(FeatureFlags::default()),
        });

        assert!(state.loaded);
        assert_eq!(state.teachers.len(), 1);
        assert_eq!(failed, vec![RosterSlice::Students, RosterSlice::Terms]);
    }
}
