use api::models::SchoolClass;
use dioxus::prelude::*;

use super::SupervisorEvent;
use crate::components::{Button, Field};
use crate::forms::ClassForm;

#[component]
pub fn ClassesTab(
    classes: Vec<SchoolClass>,
    creating: bool,
    on_event: EventHandler<SupervisorEvent>,
) -> Element {
    let mut form = use_signal(ClassForm::default);

    rsx! {
        h2 { "Classes" }
        form {
            id: "create-class",
            class: "grid two",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(SupervisorEvent::CreateClass(form()));
            },
            Field {
                id: "class-name",
                label: "Name",
                required: true,
                value: form().name,
                oninput: move |v: String| form.write().name = v,
            }
            Field {
                id: "class-grade",
                label: "Grade",
                r#type: "number",
                required: true,
                value: form().grade,
                oninput: move |v: String| form.write().grade = v,
            }
            Field {
                id: "class-branch",
                label: "Branch",
                required: true,
                value: form().branch,
                oninput: move |v: String| form.write().branch = v,
            }
            div {
                Button { r#type: "submit", disabled: creating, "Create" }
            }
        }
        table {
            class: "table",
            thead {
                tr { th { "Name" } th { "Grade" } th { "Branch" } th { "Supervisor" } }
            }
            tbody {
                if classes.is_empty() {
                    tr { td { colspan: "4", "No classes yet." } }
                }
                for class in classes {
                    tr {
                        key: "{class.id}",
                        td { "{class.name}" }
                        td { "{class.grade}" }
                        td { "{class.branch}" }
                        td { {class.supervisor_name.clone().unwrap_or_default()} }
                    }
                }
            }
        }
    }
}
