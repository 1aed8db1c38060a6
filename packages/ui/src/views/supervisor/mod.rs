//! # Supervisor screen
//!
//! A tab bar over nine bodies. Every body renders from the rosters already
//! held in [`SupervisorState`]; switching tabs never fetches.
//!
//! | Tab | Body | Actions |
//! |-----|------|---------|
//! | Teachers | [`TeachersTab`] | create, delete |
//! | Students | [`StudentsTab`] | create, delete, CSV bulk import |
//! | Classes | [`ClassesTab`] | create |
//! | Courses | [`CoursesTab`] | create (class and teacher pickers) |
//! | Terms | [`TermsTab`] | create |
//! | Sessions | [`SessionsTab`] | create (course and term pickers) |
//! | Reports | [`ReportsTab`] | JSON table or CSV preview/download |
//! | Feature flags | [`FlagsTab`] | save both flags |
//! | Notifications | [`NotificationList`] | mark as read |

use api::models::{Notification, ReportQuery};
use dioxus::prelude::*;

use crate::forms::{ClassForm, CourseForm, FlagsForm, SessionForm, StudentForm, TeacherForm, TermForm};
use crate::state::{InFlight, PendingAction, SupervisorState, SupervisorTab};
use crate::views::NotificationList;

mod classes;
mod courses;
mod flags;
mod reports;
mod sessions;
mod students;
mod teachers;
mod terms;

pub use classes::ClassesTab;
pub use courses::CoursesTab;
pub use flags::FlagsTab;
pub use reports::ReportsTab;
pub use sessions::SessionsTab;
pub use students::StudentsTab;
pub use teachers::TeachersTab;
pub use terms::TermsTab;

/// Everything the supervisor screen can ask for.
#[derive(Clone, Debug, PartialEq)]
pub enum SupervisorEvent {
    SwitchTab(SupervisorTab),
    CreateTeacher(TeacherForm),
    DeleteTeacher(i64),
    CreateStudent(StudentForm),
    DeleteStudent(i64),
    ImportStudents(String),
    CreateClass(ClassForm),
    CreateCourse(CourseForm),
    CreateTerm(TermForm),
    CreateSession(SessionForm),
    FetchReport(ReportQuery),
    SaveFlags(FlagsForm),
    MarkRead(i64),
}

/// Ids of keyed actions currently in flight, for per-row disabling.
pub(crate) fn pending_ids(in_flight: &InFlight, ids: impl Iterator<Item = i64>, key: fn(i64) -> PendingAction) -> Vec<i64> {
    ids.filter(|id| in_flight.is_pending(&key(*id))).collect()
}

#[component]
pub fn SupervisorView(
    state: SupervisorState,
    notifications: Vec<Notification>,
    in_flight: InFlight,
    on_event: EventHandler<SupervisorEvent>,
) -> Element {
    let tab = state.tab;
    let busy = |action: PendingAction| in_flight.is_pending(&action);

    let body = match tab {
        SupervisorTab::Teachers => rsx! {
            TeachersTab {
                teachers: state.teachers.clone(),
                creating: busy(PendingAction::CreateTeacher),
                deleting: pending_ids(&in_flight, state.teachers.iter().map(|t| t.id), PendingAction::DeleteTeacher),
                on_event,
            }
        },
        SupervisorTab::Students => rsx! {
            StudentsTab {
                students: state.students.clone(),
                creating: busy(PendingAction::CreateStudent),
                importing: busy(PendingAction::ImportStudents),
                deleting: pending_ids(&in_flight, state.students.iter().map(|s| s.id), PendingAction::DeleteStudent),
                last_import: state.last_import.clone(),
                on_event,
            }
        },
        SupervisorTab::Classes => rsx! {
            ClassesTab {
                classes: state.classes.clone(),
                creating: busy(PendingAction::CreateClass),
                on_event,
            }
        },
        SupervisorTab::Courses => rsx! {
            CoursesTab {
                courses: state.courses.clone(),
                classes: state.classes.clone(),
                teachers: state.teachers.clone(),
                creating: busy(PendingAction::CreateCourse),
                on_event,
            }
        },
        SupervisorTab::Terms => rsx! {
            TermsTab {
                terms: state.terms.clone(),
                creating: busy(PendingAction::CreateTerm),
                on_event,
            }
        },
        SupervisorTab::Sessions => rsx! {
            SessionsTab {
                sessions: state.sessions.clone(),
                courses: state.courses.clone(),
                terms: state.terms.clone(),
                creating: busy(PendingAction::CreateSession),
                on_event,
            }
        },
        SupervisorTab::Reports => rsx! {
            ReportsTab {
                report: state.report.clone(),
                fetching: busy(PendingAction::FetchReport),
                on_event,
            }
        },
        SupervisorTab::Flags => rsx! {
            FlagsTab {
                flags: state.flags.clone(),
                saving: busy(PendingAction::SaveFlags),
                on_event,
            }
        },
        SupervisorTab::Notifications => rsx! {
            h2 { "Notifications" }
            NotificationList {
                pending: pending_ids(&in_flight, notifications.iter().map(|n| n.id), PendingAction::MarkRead),
                notifications: notifications.clone(),
                on_mark_read: move |id| on_event.call(SupervisorEvent::MarkRead(id)),
            }
        },
    };

    rsx! {
        div {
            class: "grid",
            div {
                class: "card",
                nav {
                    class: "navbar",
                    for t in SupervisorTab::ALL {
                        button {
                            key: "{t.key()}",
                            class: if t == tab { "active" },
                            "data-tab": t.key(),
                            onclick: move |_| on_event.call(SupervisorEvent::SwitchTab(t)),
                            "{t.label()}"
                        }
                    }
                }
            }
            div {
                class: "card",
                id: "supervisor-content",
                {body}
            }
        }
    }
}
