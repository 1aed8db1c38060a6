use api::models::{BulkImportResult, Student};
use dioxus::prelude::*;

use super::SupervisorEvent;
use crate::components::{Button, ButtonVariant, Field, Label};
use crate::forms::StudentForm;
use crate::icons::{FaFileImport, FaTrash};
use crate::Icon;

const CSV_HINT: &str = "name,email,student_no\nAda Yilmaz,ada@example.com,1001";

#[component]
pub fn StudentsTab(
    students: Vec<Student>,
    creating: bool,
    importing: bool,
    deleting: Vec<i64>,
    last_import: Option<BulkImportResult>,
    on_event: EventHandler<SupervisorEvent>,
) -> Element {
    let mut form = use_signal(StudentForm::default);
    let mut csv = use_signal(String::new);

    rsx! {
        h2 { "Students" }
        form {
            id: "create-student",
            class: "grid two",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(SupervisorEvent::CreateStudent(form()));
            },
            Field {
                id: "student-name",
                label: "Name",
                required: true,
                value: form().name,
                oninput: move |v: String| form.write().name = v,
            }
            Field {
                id: "student-email",
                label: "Email",
                r#type: "email",
                required: true,
                value: form().email,
                oninput: move |v: String| form.write().email = v,
            }
            Field {
                id: "student-no",
                label: "Student number",
                required: true,
                value: form().student_no,
                oninput: move |v: String| form.write().student_no = v,
            }
            Field {
                id: "student-guardian",
                label: "Guardian contact",
                value: form().guardian_contact,
                oninput: move |v: String| form.write().guardian_contact = v,
            }
            Field {
                id: "student-password",
                label: "Password",
                r#type: "password",
                placeholder: "Optional",
                value: form().password,
                oninput: move |v: String| form.write().password = v,
            }
            div {
                Button { r#type: "submit", disabled: creating, "Create" }
            }
        }

        form {
            id: "bulk-students",
            class: "grid bulk-import",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(SupervisorEvent::ImportStudents(csv()));
            },
            Label { html_for: "bulk-csv", "Bulk import (CSV)" }
            textarea {
                id: "bulk-csv",
                class: "input",
                rows: "5",
                placeholder: CSV_HINT,
                value: "{csv}",
                oninput: move |evt| csv.set(evt.value()),
            }
            div {
                Button {
                    variant: ButtonVariant::Outline,
                    r#type: "submit",
                    disabled: importing,
                    Icon { icon: FaFileImport, width: 12, height: 12 }
                    " Import"
                }
            }
        }
        if let Some(result) = last_import {
            div {
                class: "card import-result",
                p { "{result.inserted.len()} inserted" }
                if !result.errors.is_empty() {
                    ul {
                        for error in result.errors {
                            li { key: "{error.line}", "Line {error.line}: {error.error}" }
                        }
                    }
                }
            }
        }

        table {
            class: "table",
            thead {
                tr { th { "Name" } th { "Email" } th { "Student number" } th {} }
            }
            tbody {
                if students.is_empty() {
                    tr { td { colspan: "4", "No students yet." } }
                }
                for student in students {
                    tr {
                        key: "{student.id}",
                        td { "{student.name}" }
                        td { "{student.email}" }
                        td { "{student.student_no}" }
                        td {
                            Button {
                                variant: ButtonVariant::Danger,
                                title: "Delete",
                                disabled: deleting.contains(&student.id),
                                onclick: move |_| on_event.call(SupervisorEvent::DeleteStudent(student.id)),
                                Icon { icon: FaTrash, width: 12, height: 12 }
                            }
                        }
                    }
                }
            }
        }
    }
}
