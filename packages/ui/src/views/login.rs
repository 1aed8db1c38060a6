use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Field};
use crate::forms::LoginForm;

/// Accounts seeded by the backend's demo data.
pub const DEMO_USERS: [(&str, &str, &str); 3] = [
    ("Supervisor", "supervisor@example.com", "Supervisor123!"),
    ("Teacher", "teacher@example.com", "Teacher123!"),
    ("Student", "student@example.com", "Student123!"),
];

#[component]
pub fn LoginView(pending: bool, on_login: EventHandler<LoginForm>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        div {
            class: "card login-wrapper",
            h2 { "Sign in" }
            form {
                class: "grid",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_login.call(LoginForm { email: email(), password: password() });
                },
                Field {
                    id: "login-email",
                    label: "Email",
                    r#type: "email",
                    placeholder: "supervisor@example.com",
                    required: true,
                    value: email(),
                    oninput: move |v: String| email.set(v),
                }
                Field {
                    id: "login-password",
                    label: "Password",
                    r#type: "password",
                    required: true,
                    value: password(),
                    oninput: move |v: String| password.set(v),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: pending,
                    if pending { "Signing in…" } else { "Sign in" }
                }
            }
            div {
                class: "card demo-users",
                h3 { "Demo users" }
                ul {
                    for (role, address, secret) in DEMO_USERS {
                        li { key: "{address}", "{role}: {address} / {secret}" }
                    }
                }
            }
        }
    }
}
