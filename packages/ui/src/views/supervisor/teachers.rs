use api::models::Teacher;
use dioxus::prelude::*;

use super::SupervisorEvent;
use crate::components::{Button, ButtonVariant, Field, Label};
use crate::forms::TeacherForm;
use crate::icons::FaTrash;
use crate::Icon;

#[component]
pub fn TeachersTab(
    teachers: Vec<Teacher>,
    creating: bool,
    deleting: Vec<i64>,
    on_event: EventHandler<SupervisorEvent>,
) -> Element {
    let mut form = use_signal(TeacherForm::default);

    rsx! {
        h2 { "Teachers" }
        form {
            id: "create-teacher",
            class: "grid two",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(SupervisorEvent::CreateTeacher(form()));
            },
            Field {
                id: "teacher-name",
                label: "Name",
                required: true,
                value: form().name,
                oninput: move |v: String| form.write().name = v,
            }
            Field {
                id: "teacher-email",
                label: "Email",
                r#type: "email",
                required: true,
                value: form().email,
                oninput: move |v: String| form.write().email = v,
            }
            Field {
                id: "teacher-password",
                label: "Password",
                r#type: "password",
                placeholder: "Optional",
                value: form().password,
                oninput: move |v: String| form.write().password = v,
            }
            div {
                class: "field",
                Label { html_for: "teacher-color", "Color" }
                input {
                    id: "teacher-color",
                    r#type: "color",
                    value: "{form().display_color}",
                    oninput: move |evt| form.write().display_color = evt.value(),
                }
            }
            div {
                Button { r#type: "submit", disabled: creating, "Create" }
            }
        }
        table {
            class: "table",
            thead {
                tr { th { "Name" } th { "Email" } th { "Status" } th {} }
            }
            tbody {
                if teachers.is_empty() {
                    tr { td { colspan: "4", "No teachers yet." } }
                }
                for teacher in teachers {
                    tr {
                        key: "{teacher.id}",
                        td {
                            span {
                                class: "badge",
                                span { class: "dot", style: "background:{teacher.display_color}" }
                                "{teacher.name}"
                            }
                        }
                        td { "{teacher.email}" }
                        td { if teacher.is_active { "Active" } else { "Inactive" } }
                        td {
                            Button {
                                variant: ButtonVariant::Danger,
                                title: "Delete",
                                disabled: deleting.contains(&teacher.id),
                                onclick: move |_| on_event.call(SupervisorEvent::DeleteTeacher(teacher.id)),
                                Icon { icon: FaTrash, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
        }
    }
}
