use api::models::Term;
use dioxus::prelude::*;

use super::SupervisorEvent;
use crate::components::{Button, Field};
use crate::forms::TermForm;

#[component]
pub fn TermsTab(terms: Vec<Term>, creating: bool, on_event: EventHandler<SupervisorEvent>) -> Element {
    let mut form = use_signal(TermForm::default);

    rsx! {
        h2 { "Terms" }
        form {
            id: "create-term",
            class: "grid two",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(SupervisorEvent::CreateTerm(form()));
            },
            Field {
                id: "term-name",
                label: "Name",
                required: true,
                value: form().name,
                oninput: move |v: String| form.write().name = v,
            }
            Field {
                id: "term-start",
                label: "Start date",
                r#type: "date",
                required: true,
                value: form().start_date,
                oninput: move |v: String| form.write().start_date = v,
            }
            Field {
                id: "term-end",
                label: "End date",
                r#type: "date",
                required: true,
                value: form().end_date,
                oninput: move |v: String| form.write().end_date = v,
            }
            Field {
                id: "term-threshold",
                label: "Absence threshold (%)",
                r#type: "number",
                value: form().absence_threshold_percent,
                oninput: move |v: String| form.write().absence_threshold_percent = v,
            }
            div {
                Button { r#type: "submit", disabled: creating, "Create" }
            }
        }
        table {
            class: "table",
            thead {
                tr { th { "Name" } th { "Start" } th { "End" } th { "Threshold" } }
            }
            tbody {
                if terms.is_empty() {
                    tr { td { colspan: "4", "No terms yet." } }
                }
                for term in terms {
                    tr {
                        key: "{term.id}",
                        td { "{term.name}" }
                        td { "{term.start_date}" }
                        td { "{term.end_date}" }
                        td { "{term.absence_threshold_percent}%" }
                    }
                }
            }
        }
    }
}
