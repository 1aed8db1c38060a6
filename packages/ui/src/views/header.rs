use dioxus::prelude::*;
use store::UserInfo;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaBell, FaRightFromBracket};
use crate::Icon;

/// Signed-in user, unread notification count and the logout button.
#[component]
pub fn HeaderView(user: Option<UserInfo>, unread: usize, on_logout: EventHandler<()>) -> Element {
    let Some(user) = user else {
        return rsx! {
            header { class: "app-header", h1 { "Attendance" } }
        };
    };
    let dot = if unread > 0 { "dot unread" } else { "dot" };

    rsx! {
        header {
            class: "app-header",
            h1 { "Attendance" }
            div {
                class: "user-info",
                span { class: "user-name", "{user.name} ({user.role})" }
                span {
                    class: "badge",
                    title: "Unread notifications",
                    span { class: "{dot}" }
                    Icon { icon: FaBell, width: 12, height: 12 }
                    " {unread}"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket, width: 12, height: 12 }
                    " Log out"
                }
            }
        }
    }
}
