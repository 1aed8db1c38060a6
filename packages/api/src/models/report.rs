//! Attendance reports and bulk student import.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Json,
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "csv" => ReportFormat::Csv,
            _ => ReportFormat::Json,
        }
    }
}

/// Filters for `GET /supervisor/reports/attendance`. Blank filters are
/// omitted from the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportQuery {
    pub class_id: String,
    pub course_id: String,
    pub from: String,
    pub to: String,
    pub format: ReportFormat,
}

impl ReportQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for (key, value) in [
            ("classId", &self.class_id),
            ("courseId", &self.course_id),
            ("from", &self.from),
            ("to", &self.to),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_string()));
            }
        }
        pairs.push(("format", self.format.as_str().to_string()));
        pairs
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub class_name: String,
    pub course_name: String,
    pub student_name: String,
    #[serde(default)]
    pub total_absent: i64,
    #[serde(default)]
    pub total_unexcused: i64,
    #[serde(default)]
    pub total_sessions: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Report {
    Rows(Vec<ReportRow>),
    Csv(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BulkImportError {
    pub line: i64,
    pub error: String,
}

/// `POST /supervisor/students/bulk` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkImportResult {
    #[serde(default)]
    pub inserted: Vec<String>,
    #[serde(default)]
    pub errors: Vec<BulkImportError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_omitted() {
        let query = ReportQuery {
            class_id: "3".into(),
            from: "  ".into(),
            format: ReportFormat::Csv,
            ..ReportQuery::default()
        };
        assert_eq!(
            query.query_pairs(),
            vec![("classId", "3".to_string()), ("format", "csv".to_string())]
        );
    }
}
