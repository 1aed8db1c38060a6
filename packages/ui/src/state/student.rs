//! Student screen state and the per-course summary cards derived from it.

use std::collections::HashMap;

use api::models::{AttendanceSummary, StudentCourse};

/// Threshold used when the backend does not send one.
pub const DEFAULT_THRESHOLD: f64 = 30.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentState {
    pub loaded: bool,
    pub courses: Vec<StudentCourse>,
    pub summaries: HashMap<i64, AttendanceSummary>,
}

/// What the student sees for one course.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseCard {
    pub course_id: i64,
    pub name: String,
    pub class_name: String,
    pub display_color: String,
    /// Absence percentage rounded to one decimal.
    pub percent: f64,
    pub threshold: f64,
    pub exceeded: bool,
}

impl CourseCard {
    pub fn percent_label(&self) -> String {
        format!("{:.1}", self.percent)
    }

    pub fn threshold_label(&self) -> String {
        format!("{}", self.threshold)
    }
}

impl StudentState {
    pub fn cards(&self) -> Vec<CourseCard> {
        self.courses
            .iter()
            .map(|course| {
                let summary = self.summaries.get(&course.id);
                let percent = round_one(summary.and_then(|s| s.percent).unwrap_or(0.0));
                let threshold = summary
                    .and_then(|s| s.threshold)
                    .unwrap_or(DEFAULT_THRESHOLD);
                CourseCard {
                    course_id: course.id,
                    name: course.name.clone(),
                    class_name: course.class_name.clone(),
                    display_color: course.display_color.clone(),
                    percent,
                    threshold,
                    exceeded: percent >= threshold,
                }
            })
            .collect()
    }
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
