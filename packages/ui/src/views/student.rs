use api::models::Notification;
use dioxus::prelude::*;

use crate::state::CourseCard;
use crate::views::NotificationList;

#[component]
pub fn StudentView(
    cards: Vec<CourseCard>,
    notifications: Vec<Notification>,
    pending_reads: Vec<i64>,
    on_mark_read: EventHandler<i64>,
) -> Element {
    rsx! {
        div {
            class: "grid",
            div {
                class: "card",
                h2 { "My courses" }
                div {
                    class: "grid two",
                    if cards.is_empty() {
                        p { class: "empty", "No courses found." }
                    }
                    for card in cards {
                        div {
                            key: "{card.course_id}",
                            class: "card course",
                            style: "border-top: 4px solid {card.display_color};",
                            h3 { "{card.name}" }
                            p { "{card.class_name}" }
                            p { "Absence rate: %{card.percent_label()}" }
                            p { "Threshold: %{card.threshold_label()}" }
                            if card.exceeded {
                                div { class: "alert threshold", "Absence threshold exceeded!" }
                            }
                        }
                    }
                }
            }
            div {
                class: "card",
                h2 { "Notifications" }
                NotificationList { notifications, pending: pending_reads, on_mark_read }
            }
        }
    }
}
