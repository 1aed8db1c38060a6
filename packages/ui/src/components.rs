//! Small form primitives shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn primary",
            ButtonVariant::Outline => "btn outline",
            ButtonVariant::Danger => "btn danger",
            ButtonVariant::Ghost => "btn ghost",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{r#type}",
            title: "{title}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            name: "{name}",
            class: "input {class}",
            r#type: "{r#type}",
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "label",
            {children}
        }
    }
}

/// Label and input stacked in one grid cell.
#[component]
pub fn Field(
    id: String,
    label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            Input {
                id: id.clone(),
                name: id,
                r#type: r#type,
                placeholder,
                required,
                value,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

/// A `<select>` over `(value, label)` pairs with an empty "Choose" entry.
#[component]
pub fn Select(
    id: String,
    label: String,
    options: Vec<(String, String)>,
    value: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            select {
                id: "{id}",
                name: "{id}",
                class: "input",
                value: "{value}",
                onchange: move |evt| onchange.call(evt.value()),
                option { value: "", "Choose…" }
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: "{option_value}",
                        selected: option_value == value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
