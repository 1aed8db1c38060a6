//! Supervisor workflows.

use api::models::{BulkImportResult, FeatureFlags, Report, ReportQuery};
use api::{ApiClient, HttpTransport};

use crate::error::ActionError;
use crate::forms::{ClassForm, CourseForm, FlagsForm, SessionForm, StudentForm, TeacherForm, TermForm};
use crate::state::{AppState, RosterUpdate, SupervisorLoad, SupervisorTab};

/// Fetch all seven rosters concurrently. A failing fetch does not affect the
/// others.
pub async fn load_supervisor<T: HttpTransport>(client: &ApiClient<T>) -> SupervisorLoad {
    let (teachers, students, classes, courses, terms, sessions, flags) = futures::join!(
        client.supervisor_teachers(),
        client.supervisor_students(),
        client.supervisor_classes(),
        client.supervisor_courses(),
        client.supervisor_terms(),
        client.supervisor_sessions(),
        client.feature_flags(),
    );
    SupervisorLoad {
        teachers,
        students,
        classes,
        courses,
        terms,
        sessions,
        flags,
    }
}

pub async fn create_teacher<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &TeacherForm,
) -> Result<RosterUpdate, ActionError> {
    let payload = form.payload()?;
    client.create_teacher(&payload).await?;
    Ok(RosterUpdate::Teachers(client.supervisor_teachers().await?))
}

pub async fn delete_teacher<T: HttpTransport>(
    client: &ApiClient<T>,
    id: i64,
) -> Result<RosterUpdate, ActionError> {
    client.delete_teacher(id).await?;
    Ok(RosterUpdate::Teachers(client.supervisor_teachers().await?))
}

pub async fn create_student<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &StudentForm,
) -> Result<RosterUpdate, ActionError> {
    let payload = form.payload()?;
    client.create_student(&payload).await?;
    Ok(RosterUpdate::Students(client.supervisor_students().await?))
}

pub async fn delete_student<T: HttpTransport>(
    client: &ApiClient<T>,
    id: i64,
) -> Result<RosterUpdate, ActionError> {
    client.delete_student(id).await?;
    Ok(RosterUpdate::Students(client.supervisor_students().await?))
}

/// Upload pasted CSV, then re-fetch students.
pub async fn import_students<T: HttpTransport>(
    client: &ApiClient<T>,
    csv: &str,
) -> Result<(BulkImportResult, RosterUpdate), ActionError> {
    if csv.trim().is_empty() {
        return Err(ActionError::Invalid("Paste at least a header row".to_string()));
    }
    let result = client.import_students_csv(csv).await?;
    let students = client.supervisor_students().await?;
    Ok((result, RosterUpdate::Students(students)))
}

pub async fn create_class<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &ClassForm,
) -> Result<RosterUpdate, ActionError> {
    let payload = form.payload()?;
    client.create_class(&payload).await?;
    Ok(RosterUpdate::Classes(client.supervisor_classes().await?))
}

pub async fn create_course<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &CourseForm,
) -> Result<RosterUpdate, ActionError> {
    let payload = form.payload()?;
    client.create_course(&payload).await?;
    Ok(RosterUpdate::Courses(client.supervisor_courses().await?))
}

pub async fn create_term<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &TermForm,
) -> Result<RosterUpdate, ActionError> {
    let payload = form.payload()?;
    client.create_term(&payload).await?;
    Ok(RosterUpdate::Terms(client.supervisor_terms().await?))
}

pub async fn create_session<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &SessionForm,
) -> Result<RosterUpdate, ActionError> {
    let payload = form.payload()?;
    client.create_schedule_session(&payload).await?;
    Ok(RosterUpdate::Sessions(client.supervisor_sessions().await?))
}

pub async fn fetch_report<T: HttpTransport>(
    client: &ApiClient<T>,
    query: &ReportQuery,
) -> Result<Report, ActionError> {
    Ok(client.attendance_report(query).await?)
}

/// Save both known flags in order, then re-fetch the flag map.
pub async fn save_flags<T: HttpTransport>(
    client: &ApiClient<T>,
    form: &FlagsForm,
) -> Result<RosterUpdate, ActionError> {
    let grace = form.grace_minutes()?;
    for (key, body) in FeatureFlags::update_bodies(form.absence_only_unexcused, grace) {
        client.set_feature_flag(key, &body).await?;
    }
    Ok(RosterUpdate::Flags(client.feature_flags().await?))
}

impl AppState {
    /// Show another supervisor tab, rendering from the rosters already held.
    pub fn tab_switched(&mut self, tab: SupervisorTab) {
        if let Some(supervisor) = self.supervisor_mut() {
            supervisor.switch_tab(tab);
        }
    }

    pub fn supervisor_loaded(&mut self, load: SupervisorLoad) {
        let Some(supervisor) = self.supervisor_mut() else {
            return;
        };
        let failed = supervisor.apply_load(load);
        if !failed.is_empty() {
            let names: Vec<&str> = failed.iter().map(|s| s.label()).collect();
            self.flash.alert(format!("Could not load {}", names.join(", ")));
        }
    }

    /// Apply a create/delete/save result: replace the roster and flash
    /// `success`, or flash the error.
    pub fn roster_changed(&mut self, result: Result<RosterUpdate, ActionError>, success: &str) {
        match result {
            Ok(update) => {
                if let Some(supervisor) = self.supervisor_mut() {
                    supervisor.apply(update);
                }
                self.flash.success(success);
            }
            Err(e) => {
                self.fail(&e);
            }
        }
    }

    pub fn import_finished(&mut self, result: Result<(BulkImportResult, RosterUpdate), ActionError>) {
        match result {
            Ok((outcome, update)) => {
                let message = format!(
                    "{} students imported, {} rows rejected",
                    outcome.inserted.len(),
                    outcome.errors.len()
                );
                if let Some(supervisor) = self.supervisor_mut() {
                    supervisor.apply(update);
                    supervisor.last_import = Some(outcome);
                }
                self.flash.success(message);
            }
            Err(e) => {
                self.fail(&e);
            }
        }
    }

    pub fn report_finished(&mut self, result: Result<Report, ActionError>) {
        match result {
            Ok(report) => {
                if let Some(supervisor) = self.supervisor_mut() {
                    supervisor.report = Some(report);
                }
            }
            Err(e) => {
                self.fail(&e);
            }
        }
    }
}
