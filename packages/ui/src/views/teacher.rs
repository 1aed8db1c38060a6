//! Teacher screen: classes, then the selected class's sessions, then the
//! selected session's attendance form.

use api::models::AttendanceStatus;
use dioxus::prelude::*;

use crate::components::Button;
use crate::state::TeacherState;

#[derive(Clone, Debug, PartialEq)]
pub enum TeacherEvent {
    SelectClass(i64),
    SelectSession(i64),
    SetStatus(i64, AttendanceStatus),
    Submit,
}

#[component]
pub fn TeacherView(
    state: TeacherState,
    /// Whether the current session's submission is in flight.
    submitting: bool,
    on_event: EventHandler<TeacherEvent>,
) -> Element {
    rsx! {
        div {
            class: "grid two",
            div {
                class: "card wide",
                h2 { "My classes" }
                div {
                    class: "grid two",
                    if state.classes.is_empty() {
                        p { class: "empty", "No classes found." }
                    }
                    for item in state.classes.iter().cloned() {
                        button {
                            key: "{item.id}",
                            class: pick_class(state.selected_class == Some(item.id)),
                            "data-class": "{item.id}",
                            onclick: move |_| on_event.call(TeacherEvent::SelectClass(item.id)),
                            span {
                                class: "badge",
                                span { class: "dot", style: "background:{item.display_color}" }
                                "{item.name}"
                            }
                            p { "Grade {item.grade} {item.branch}" }
                        }
                    }
                }
            }
            SessionList { state: state.clone(), on_event }
            AttendancePanel { state, submitting, on_event }
        }
    }
}

fn pick_class(selected: bool) -> &'static str {
    if selected {
        "card pick selected"
    } else {
        "card pick"
    }
}

#[component]
fn SessionList(state: TeacherState, on_event: EventHandler<TeacherEvent>) -> Element {
    let selected = state.selected_session.as_ref().map(|s| s.id);
    rsx! {
        div {
            class: "card",
            id: "teacher-sessions",
            h3 { "Sessions" }
            if state.selected_class.is_none() {
                p { class: "empty", "Select a class to see its sessions." }
            } else if state.sessions.is_empty() {
                p { class: "empty", "No sessions for this class." }
            }
            div {
                class: "grid",
                for session in state.sessions {
                    button {
                        key: "{session.id}",
                        class: pick_class(selected == Some(session.id)),
                        "data-session": "{session.id}",
                        onclick: move |_| on_event.call(TeacherEvent::SelectSession(session.id)),
                        strong { "{session.course_name}" }
                        p { "{session.date} {session.start_time}-{session.end_time}" }
                        small { if session.is_locked { "Locked" } else { "Open" } }
                    }
                }
            }
        }
    }
}

#[component]
fn AttendancePanel(state: TeacherState, submitting: bool, on_event: EventHandler<TeacherEvent>) -> Element {
    let Some(session) = state.selected_session else {
        return rsx! {
            div {
                class: "card",
                id: "teacher-attendance",
                p { class: "empty", "Select a session to take attendance." }
            }
        };
    };

    rsx! {
        div {
            class: "card",
            id: "teacher-attendance",
            h3 { "Attendance" }
            p {
                strong { "{session.title()}" }
                " | {session.date} {session.start_time}-{session.end_time}"
                if session.is_locked {
                    span { class: "badge locked", "Locked" }
                }
            }
            form {
                id: "attendance-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_event.call(TeacherEvent::Submit);
                },
                table {
                    class: "table",
                    thead {
                        tr { th { "Student" } th { "Status" } }
                    }
                    tbody {
                        for row in state.attendance {
                            tr {
                                key: "{row.student_id}",
                                td { "{row.student_name}" }
                                td {
                                    class: "attendance-status",
                                    for status in AttendanceStatus::ALL {
                                        label {
                                            key: "{status}",
                                            input {
                                                r#type: "radio",
                                                name: "student-{row.student_id}",
                                                value: status.as_str(),
                                                checked: row.status == status,
                                                onchange: move |_| on_event.call(TeacherEvent::SetStatus(row.student_id, status)),
                                            }
                                            " {status.label()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Button { r#type: "submit", disabled: submitting, "Save attendance" }
            }
        }
    }
}
