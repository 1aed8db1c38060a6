use api::models::{Course, ScheduleSession, Term};
use dioxus::prelude::*;

use super::SupervisorEvent;
use crate::components::{Button, Field, Select};
use crate::forms::SessionForm;

#[component]
pub fn SessionsTab(
    sessions: Vec<ScheduleSession>,
    courses: Vec<Course>,
    terms: Vec<Term>,
    creating: bool,
    on_event: EventHandler<SupervisorEvent>,
) -> Element {
    let mut form = use_signal(SessionForm::default);
    let course_options: Vec<(String, String)> = courses
        .iter()
        .map(|c| (c.id.to_string(), format!("{} ({})", c.name, c.class_name)))
        .collect();
    let term_options: Vec<(String, String)> = terms
        .iter()
        .map(|t| (t.id.to_string(), t.name.clone()))
        .collect();

    rsx! {
        h2 { "Sessions" }
        form {
            id: "create-session",
            class: "grid two",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(SupervisorEvent::CreateSession(form()));
            },
            Select {
                id: "session-course",
                label: "Course",
                options: course_options,
                value: form().course_id,
                onchange: move |v: String| form.write().course_id = v,
            }
            Select {
                id: "session-term",
                label: "Term",
                options: term_options,
                value: form().term_id,
                onchange: move |v: String| form.write().term_id = v,
            }
            Field {
                id: "session-date",
                label: "Date",
                r#type: "date",
                required: true,
                value: form().date,
                oninput: move |v: String| form.write().date = v,
            }
            Field {
                id: "session-start",
                label: "Start",
                r#type: "time",
                required: true,
                value: form().start_time,
                oninput: move |v: String| form.write().start_time = v,
            }
            Field {
                id: "session-end",
                label: "End",
                r#type: "time",
                required: true,
                value: form().end_time,
                oninput: move |v: String| form.write().end_time = v,
            }
            div {
                Button { r#type: "submit", disabled: creating, "Create" }
            }
        }
        table {
            class: "table",
            thead {
                tr { th { "ID" } th { "Course" } th { "Date" } th { "Time" } th { "Status" } }
            }
            tbody {
                if sessions.is_empty() {
                    tr { td { colspan: "5", "No sessions yet." } }
                }
                for session in sessions {
                    tr {
                        key: "{session.id}",
                        td { "{session.id}" }
                        td { "{session.course_id}" }
                        td { "{session.date}" }
                        td { "{session.start_time} - {session.end_time}" }
                        td { if session.is_locked { "Locked" } else { "Open" } }
                    }
                }
            }
        }
    }
}
