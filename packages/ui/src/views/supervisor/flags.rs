use api::models::FeatureFlags;
use dioxus::prelude::*;

use super::SupervisorEvent;
use crate::components::Button;
use crate::forms::FlagsForm;

#[component]
pub fn FlagsTab(flags: FeatureFlags, saving: bool, on_event: EventHandler<SupervisorEvent>) -> Element {
    let mut form = use_signal(|| FlagsForm::from_flags(&flags));

    rsx! {
        h2 { "Feature flags" }
        form {
            id: "flags-form",
            class: "grid",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(SupervisorEvent::SaveFlags(form()));
            },
            label {
                class: "card flag",
                div {
                    strong { "Count only unexcused absences" }
                    p { "When enabled, only unexcused records count toward absence percentages." }
                }
                input {
                    r#type: "checkbox",
                    name: "absence_only_unexcused",
                    checked: form().absence_only_unexcused,
                    onchange: move |evt| form.write().absence_only_unexcused = evt.checked(),
                }
            }
            label {
                class: "card flag",
                div {
                    strong { "Grace period after a session (minutes)" }
                    p { "Extra time during which teachers can still update attendance." }
                }
                input {
                    r#type: "number",
                    name: "attendance_grace_period",
                    min: "0",
                    class: "input",
                    value: "{form().grace_minutes}",
                    oninput: move |evt| form.write().grace_minutes = evt.value(),
                }
            }
            div {
                Button { r#type: "submit", disabled: saving, "Save" }
            }
        }
    }
}
