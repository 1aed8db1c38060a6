use api::models::Notification;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Notification cards. Unread ones get a mark-as-read button, disabled while
/// its request is running.
#[component]
pub fn NotificationList(
    notifications: Vec<Notification>,
    pending: Vec<i64>,
    on_mark_read: EventHandler<i64>,
) -> Element {
    if notifications.is_empty() {
        return rsx! {
            p { class: "empty", "No notifications." }
        };
    }

    rsx! {
        div {
            class: "grid notifications",
            for notification in notifications {
                div {
                    key: "{notification.id}",
                    class: card_class(notification.is_read()),
                    strong { "{notification.title}" }
                    p { "{notification.body}" }
                    small { "{notification.created_at}" }
                    if notification.is_read() {
                        span { class: "badge", "Read" }
                    } else {
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: pending.contains(&notification.id),
                            onclick: move |_| on_mark_read.call(notification.id),
                            "Mark as read"
                        }
                    }
                }
            }
        }
    }
}

fn card_class(read: bool) -> &'static str {
    if read {
        "card notification read"
    } else {
        "card notification"
    }
}
