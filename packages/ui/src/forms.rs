//! Raw form fields and their conversion into request payloads.
//!
//! Every field is held as the string the input produced. Conversion trims
//! text, drops optional fields left blank, and coerces numeric fields
//! explicitly: a value that does not parse fails locally with
//! [`ActionError::Invalid`] and no request is sent.

use api::models::{
    FeatureFlags, NewClass, NewCourse, NewScheduleSession, NewStudent, NewTeacher, NewTerm,
};

use crate::error::ActionError;
use crate::state::DEFAULT_THRESHOLD;

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn required(label: &str, value: &str) -> Result<String, ActionError> {
    optional(value).ok_or_else(|| ActionError::Invalid(format!("{label} is required")))
}

fn integer(label: &str, value: &str) -> Result<i64, ActionError> {
    let value = value.trim();
    value
        .parse::<i64>()
        .map_err(|_| ActionError::Invalid(format!("{label} must be a whole number")))
}

fn integer_or(label: &str, value: &str, default: i64) -> Result<i64, ActionError> {
    if value.trim().is_empty() {
        Ok(default)
    } else {
        integer(label, value)
    }
}

fn number_or(label: &str, value: &str, default: f64) -> Result<f64, ActionError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(default);
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ActionError::Invalid(format!("{label} must be a number"))),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeacherForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub display_color: String,
}

impl Default for TeacherForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            display_color: "#2563eb".to_string(),
        }
    }
}

impl TeacherForm {
    pub fn payload(&self) -> Result<NewTeacher, ActionError> {
        Ok(NewTeacher {
            name: required("Name", &self.name)?,
            email: required("Email", &self.email)?,
            password: optional(&self.password),
            display_color: self.display_color.trim().to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub student_no: String,
    pub guardian_contact: String,
    pub password: String,
}

impl StudentForm {
    pub fn payload(&self) -> Result<NewStudent, ActionError> {
        Ok(NewStudent {
            name: required("Name", &self.name)?,
            email: required("Email", &self.email)?,
            student_no: required("Student number", &self.student_no)?,
            guardian_contact: optional(&self.guardian_contact),
            password: optional(&self.password),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassForm {
    pub name: String,
    pub grade: String,
    pub branch: String,
}

impl ClassForm {
    pub fn payload(&self) -> Result<NewClass, ActionError> {
        Ok(NewClass {
            name: required("Name", &self.name)?,
            grade: integer("Grade", &self.grade)?,
            branch: required("Branch", &self.branch)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CourseForm {
    pub name: String,
    pub code: String,
    pub class_id: String,
    pub teacher_id: String,
    pub weekly_hours: String,
}

impl Default for CourseForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            class_id: String::new(),
            teacher_id: String::new(),
            weekly_hours: "1".to_string(),
        }
    }
}

impl CourseForm {
    pub fn payload(&self) -> Result<NewCourse, ActionError> {
        Ok(NewCourse {
            name: required("Name", &self.name)?,
            code: required("Code", &self.code)?,
            class_id: integer("Class", &self.class_id)?,
            teacher_id: integer("Teacher", &self.teacher_id)?,
            weekly_hours: integer_or("Weekly hours", &self.weekly_hours, 1)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TermForm {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub absence_threshold_percent: String,
}

impl Default for TermForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            absence_threshold_percent: "30".to_string(),
        }
    }
}

impl TermForm {
    pub fn payload(&self) -> Result<NewTerm, ActionError> {
        Ok(NewTerm {
            name: required("Name", &self.name)?,
            start_date: required("Start date", &self.start_date)?,
            end_date: required("End date", &self.end_date)?,
            absence_threshold_percent: number_or(
                "Absence threshold",
                &self.absence_threshold_percent,
                DEFAULT_THRESHOLD,
            )?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionForm {
    pub course_id: String,
    pub term_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

impl SessionForm {
    pub fn payload(&self) -> Result<NewScheduleSession, ActionError> {
        Ok(NewScheduleSession {
            course_id: integer("Course", &self.course_id)?,
            term_id: integer("Term", &self.term_id)?,
            date: required("Date", &self.date)?,
            start_time: required("Start time", &self.start_time)?,
            end_time: required("End time", &self.end_time)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlagsForm {
    pub absence_only_unexcused: bool,
    pub grace_minutes: String,
}

impl FlagsForm {
    /// Form pre-filled from the currently loaded flags.
    pub fn from_flags(flags: &FeatureFlags) -> Self {
        Self {
            absence_only_unexcused: flags.absence_only_unexcused(),
            grace_minutes: flags.grace_period_minutes().to_string(),
        }
    }

    pub fn grace_minutes(&self) -> Result<i64, ActionError> {
        integer_or("Grace period", &self.grace_minutes, 0)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn credentials(&self) -> Result<(String, String), ActionError> {
        Ok((
            required("Email", &self.email)?,
            required("Password", &self.password)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_grade_coerced() {
        let form = ClassForm {
            name: "9-A".into(),
            grade: " 9 ".into(),
            branch: "A".into(),
        };
        assert_eq!(form.payload().unwrap().grade, 9);
    }

    #[test]
    fn test_invalid_number_fails_locally() {
        let form = ClassForm {
            name: "9-A".into(),
            grade: "nine".into(),
            branch: "A".into(),
        };
        assert_eq!(
            form.payload().unwrap_err(),
            ActionError::Invalid("Grade must be a whole number".into())
        );
    }

    #[test]
    fn test_course_defaults_weekly_hours() {
        let form = CourseForm {
            name: "Math".into(),
            code: "M1".into(),
            class_id: "2".into(),
            teacher_id: "3".into(),
            weekly_hours: String::new(),
        };
        let payload = form.payload().unwrap();
        assert_eq!(payload.weekly_hours, 1);
        assert_eq!((payload.class_id, payload.teacher_id), (2, 3));
    }

    #[test]
    fn test_unselected_course_rejected() {
        let form = SessionForm {
            course_id: String::new(),
            term_id: "1".into(),
            date: "2024-10-01".into(),
            start_time: "09:00".into(),
            end_time: "09:40".into(),
        };
        assert!(matches!(form.payload(), Err(ActionError::Invalid(_))));
    }

    #[test]
    fn test_term_threshold_default() {
        let form = TermForm {
            name: "Fall".into(),
            start_date: "2024-09-01".into(),
            end_date: "2025-01-20".into(),
            absence_threshold_percent: String::new(),
        };
        assert_eq!(form.payload().unwrap().absence_threshold_percent, 30.0);
    }

    #[test]
    fn test_blank_password_omitted() {
        let form = TeacherForm {
            name: "Ayse".into(),
            email: "ayse@example.com".into(),
            ..TeacherForm::default()
        };
        let payload = form.payload().unwrap();
        assert!(payload.password.is_none());
        assert_eq!(payload.display_color, "#2563eb");
    }
}
