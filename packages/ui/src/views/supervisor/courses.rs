use api::models::{Course, SchoolClass, Teacher};
use dioxus::prelude::*;

use super::SupervisorEvent;
use crate::components::{Button, Field, Select};
use crate::forms::CourseForm;

#[component]
pub fn CoursesTab(
    courses: Vec<Course>,
    classes: Vec<SchoolClass>,
    teachers: Vec<Teacher>,
    creating: bool,
    on_event: EventHandler<SupervisorEvent>,
) -> Element {
    let mut form = use_signal(CourseForm::default);
    let class_options: Vec<(String, String)> = classes
        .iter()
        .map(|c| (c.id.to_string(), c.name.clone()))
        .collect();
    let teacher_options: Vec<(String, String)> = teachers
        .iter()
        .map(|t| (t.id.to_string(), t.name.clone()))
        .collect();

    rsx! {
        h2 { "Courses" }
        form {
            id: "create-course",
            class: "grid two",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(SupervisorEvent::CreateCourse(form()));
            },
            Field {
                id: "course-name",
                label: "Name",
                required: true,
                value: form().name,
                oninput: move |v: String| form.write().name = v,
            }
            Field {
                id: "course-code",
                label: "Code",
                required: true,
                value: form().code,
                oninput: move |v: String| form.write().code = v,
            }
            Select {
                id: "course-class",
                label: "Class",
                options: class_options,
                value: form().class_id,
                onchange: move |v: String| form.write().class_id = v,
            }
            Select {
                id: "course-teacher",
                label: "Teacher",
                options: teacher_options,
                value: form().teacher_id,
                onchange: move |v: String| form.write().teacher_id = v,
            }
            Field {
                id: "course-hours",
                label: "Weekly hours",
                r#type: "number",
                value: form().weekly_hours,
                oninput: move |v: String| form.write().weekly_hours = v,
            }
            div {
                Button { r#type: "submit", disabled: creating, "Create" }
            }
        }
        table {
            class: "table",
            thead {
                tr { th { "Name" } th { "Code" } th { "Class" } th { "Teacher" } }
            }
            tbody {
                if courses.is_empty() {
                    tr { td { colspan: "4", "No courses yet." } }
                }
                for course in courses {
                    tr {
                        key: "{course.id}",
                        td { "{course.name}" }
                        td { "{course.code}" }
                        td { "{course.class_name}" }
                        td {
                            span {
                                class: "badge",
                                span { class: "dot", style: "background:{course.display_color}" }
                                "{course.teacher_name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
