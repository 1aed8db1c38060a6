use api::models::{Report, ReportFormat, ReportQuery, ReportRow};
use dioxus::prelude::*;

use super::SupervisorEvent;
use crate::components::{Button, Field, Label};
use crate::icons::FaDownload;
use crate::Icon;

/// `data:` URL for saving a CSV report. The text is fetched with the bearer
/// token, so the download never hits the backend again.
#[cfg(target_arch = "wasm32")]
fn csv_download_href(csv: &str) -> Option<String> {
    let encoded: String = js_sys::encode_uri_component(csv).into();
    Some(format!("data:text/csv;charset=utf-8,{encoded}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn csv_download_href(_csv: &str) -> Option<String> {
    None
}

#[component]
pub fn ReportsTab(report: Option<Report>, fetching: bool, on_event: EventHandler<SupervisorEvent>) -> Element {
    let mut query = use_signal(ReportQuery::default);

    rsx! {
        h2 { "Attendance report" }
        form {
            id: "report-form",
            class: "grid two",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_event.call(SupervisorEvent::FetchReport(query()));
            },
            Field {
                id: "report-class",
                label: "Class ID",
                value: query().class_id,
                oninput: move |v: String| query.write().class_id = v,
            }
            Field {
                id: "report-course",
                label: "Course ID",
                value: query().course_id,
                oninput: move |v: String| query.write().course_id = v,
            }
            Field {
                id: "report-from",
                label: "From",
                r#type: "date",
                value: query().from,
                oninput: move |v: String| query.write().from = v,
            }
            Field {
                id: "report-to",
                label: "To",
                r#type: "date",
                value: query().to,
                oninput: move |v: String| query.write().to = v,
            }
            div {
                class: "field",
                Label { html_for: "report-format", "Format" }
                select {
                    id: "report-format",
                    class: "input",
                    value: query().format.as_str(),
                    onchange: move |evt| query.write().format = ReportFormat::parse(&evt.value()),
                    option { value: "json", "JSON" }
                    option { value: "csv", "CSV" }
                }
            }
            div {
                Button { r#type: "submit", disabled: fetching, "Get report" }
            }
        }
        div {
            id: "report-result",
            {match report {
                None => rsx! {},
                Some(Report::Rows(rows)) => rsx! { ReportTable { rows } },
                Some(Report::Csv(csv)) => rsx! { CsvPreview { csv } },
            }}
        }
    }
}

#[component]
fn ReportTable(rows: Vec<ReportRow>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "empty", "No attendance records match these filters." }
        };
    }
    rsx! {
        table {
            class: "table",
            thead {
                tr {
                    th { "Class" }
                    th { "Course" }
                    th { "Student" }
                    th { "Absent" }
                    th { "Unexcused" }
                    th { "Sessions" }
                }
            }
            tbody {
                for (index, row) in rows.into_iter().enumerate() {
                    tr {
                        key: "{index}",
                        td { "{row.class_name}" }
                        td { "{row.course_name}" }
                        td { "{row.student_name}" }
                        td { "{row.total_absent}" }
                        td { "{row.total_unexcused}" }
                        td { "{row.total_sessions}" }
                    }
                }
            }
        }
    }
}

#[component]
fn CsvPreview(csv: String) -> Element {
    let href = csv_download_href(&csv);
    rsx! {
        if let Some(href) = href {
            a {
                class: "btn outline",
                href: "{href}",
                download: "attendance-report.csv",
                Icon { icon: FaDownload, width: 12, height: 12 }
                " Download CSV"
            }
        }
        pre { class: "csv-preview", "{csv}" }
    }
}
