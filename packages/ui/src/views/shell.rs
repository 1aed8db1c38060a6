use std::future::Future;

use api::WebClient;
use dioxus::prelude::*;

use crate::actions::{self, notifications, supervisor, teacher};
use crate::app::{dispatch, use_app, use_sessions};
use crate::error::ActionError;
use crate::forms::LoginForm;
use crate::state::{AppState, PendingAction, RosterUpdate, Screen};
use crate::views::{
    FlashBanner, HeaderView, LoginView, StudentView, SupervisorEvent, SupervisorView, TeacherEvent,
    TeacherView,
};

/// Top-level connected view: header, flash banner and the screen for the
/// current role.
#[component]
pub fn AppShell() -> Element {
    let mut app = use_app();
    let sessions = use_sessions();

    // Entering a role screen runs that role's initial load.
    let needs_load = use_memo(move || {
        let state = app.read();
        if state.screen.is_loaded() {
            None
        } else {
            state.screen.role()
        }
    });
    use_effect(move || {
        if let Some(role) = needs_load() {
            dispatch(
                app,
                PendingAction::InitialLoad(role),
                move |client| async move { actions::load_initial(&client, role).await },
                AppState::initial_loaded,
            );
        }
    });

    let state = app.read().clone();
    let logout_sessions = sessions.clone();
    let notifications = state.notifications.clone();
    let pending_reads: Vec<i64> = notifications
        .iter()
        .map(|n| n.id)
        .filter(|id| state.in_flight.is_pending(&PendingAction::MarkRead(*id)))
        .collect();

    let body = match state.screen.clone() {
        Screen::Unauthenticated => rsx! {
            LoginView {
                pending: state.in_flight.is_pending(&PendingAction::Login),
                on_login: move |form: LoginForm| {
                    let sessions = sessions.clone();
                    dispatch(
                        app,
                        PendingAction::Login,
                        move |client| async move { actions::login(&client, &form).await },
                        move |state, result| {
                            state.login_finished(&sessions, result);
                        },
                    );
                },
            }
        },
        ref screen if !screen.is_loaded() => rsx! {
            p { class: "loading", "Loading…" }
        },
        Screen::Supervisor(supervisor_state) => rsx! {
            SupervisorView {
                state: supervisor_state,
                notifications,
                in_flight: state.in_flight.clone(),
                on_event: move |event| on_supervisor_event(app, event),
            }
        },
        Screen::Teacher(teacher_state) => {
            let submitting = teacher_state
                .selected_session
                .as_ref()
                .is_some_and(|s| state.in_flight.is_pending(&PendingAction::SubmitAttendance(s.id)));
            rsx! {
                TeacherView {
                    state: teacher_state,
                    submitting,
                    on_event: move |event| on_teacher_event(app, event),
                }
            }
        }
        Screen::Student(student_state) => rsx! {
            StudentView {
                cards: student_state.cards(),
                notifications,
                pending_reads,
                on_mark_read: move |id| mark_read(app, id),
            }
        },
    };

    rsx! {
        HeaderView {
            user: state.session.as_ref().map(|s| s.user.clone()),
            unread: state.unread_count(),
            on_logout: move |_| actions::logout(&mut app.write(), &logout_sessions),
        }
        main {
            class: "container",
            FlashBanner {}
            {body}
        }
    }
}

fn mark_read(app: Signal<AppState>, id: i64) {
    dispatch(
        app,
        PendingAction::MarkRead(id),
        move |client| async move { notifications::mark_read(&client, id).await },
        AppState::notification_marked,
    );
}

/// Dispatch a roster mutation whose success shows `success`.
fn mutate<Fut>(
    app: Signal<AppState>,
    action: PendingAction,
    work: impl FnOnce(WebClient) -> Fut + 'static,
    success: &'static str,
) where
    Fut: Future<Output = Result<RosterUpdate, ActionError>> + 'static,
{
    dispatch(app, action, work, move |state, result| {
        state.roster_changed(result, success)
    });
}

fn on_supervisor_event(mut app: Signal<AppState>, event: SupervisorEvent) {
    match event {
        SupervisorEvent::SwitchTab(tab) => app.write().tab_switched(tab),
        SupervisorEvent::CreateTeacher(form) => mutate(
            app,
            PendingAction::CreateTeacher,
            move |client| async move { supervisor::create_teacher(&client, &form).await },
            "Teacher created",
        ),
        SupervisorEvent::DeleteTeacher(id) => mutate(
            app,
            PendingAction::DeleteTeacher(id),
            move |client| async move { supervisor::delete_teacher(&client, id).await },
            "Teacher deleted",
        ),
        SupervisorEvent::CreateStudent(form) => mutate(
            app,
            PendingAction::CreateStudent,
            move |client| async move { supervisor::create_student(&client, &form).await },
            "Student created",
        ),
        SupervisorEvent::DeleteStudent(id) => mutate(
            app,
            PendingAction::DeleteStudent(id),
            move |client| async move { supervisor::delete_student(&client, id).await },
            "Student deleted",
        ),
        SupervisorEvent::ImportStudents(csv) => dispatch(
            app,
            PendingAction::ImportStudents,
            move |client| async move { supervisor::import_students(&client, &csv).await },
            AppState::import_finished,
        ),
        SupervisorEvent::CreateClass(form) => mutate(
            app,
            PendingAction::CreateClass,
            move |client| async move { supervisor::create_class(&client, &form).await },
            "Class created",
        ),
        SupervisorEvent::CreateCourse(form) => mutate(
            app,
            PendingAction::CreateCourse,
            move |client| async move { supervisor::create_course(&client, &form).await },
            "Course created",
        ),
        SupervisorEvent::CreateTerm(form) => mutate(
            app,
            PendingAction::CreateTerm,
            move |client| async move { supervisor::create_term(&client, &form).await },
            "Term created",
        ),
        SupervisorEvent::CreateSession(form) => mutate(
            app,
            PendingAction::CreateSession,
            move |client| async move { supervisor::create_session(&client, &form).await },
            "Session created",
        ),
        SupervisorEvent::FetchReport(query) => dispatch(
            app,
            PendingAction::FetchReport,
            move |client| async move { supervisor::fetch_report(&client, &query).await },
            AppState::report_finished,
        ),
        SupervisorEvent::SaveFlags(form) => mutate(
            app,
            PendingAction::SaveFlags,
            move |client| async move { supervisor::save_flags(&client, &form).await },
            "Feature flags updated",
        ),
        SupervisorEvent::MarkRead(id) => mark_read(app, id),
    }
}

fn on_teacher_event(mut app: Signal<AppState>, event: TeacherEvent) {
    match event {
        TeacherEvent::SelectClass(class_id) => {
            app.write().class_selected(class_id);
            dispatch(
                app,
                PendingAction::SelectClass(class_id),
                move |client| async move { teacher::load_sessions(&client, class_id).await },
                move |state, result| state.sessions_loaded(class_id, result),
            );
        }
        TeacherEvent::SelectSession(session_id) => {
            app.write().session_selected(session_id);
            dispatch(
                app,
                PendingAction::SelectSession(session_id),
                move |client| async move { teacher::open_session(&client, session_id).await },
                move |state, result| state.session_opened(session_id, result),
            );
        }
        TeacherEvent::SetStatus(student_id, status) => {
            if let Some(state) = app.write().teacher_mut() {
                state.set_status(student_id, status);
            }
        }
        TeacherEvent::Submit => {
            let Some((session_id, batch)) = app.peek().attendance_submission() else {
                return;
            };
            dispatch(
                app,
                PendingAction::SubmitAttendance(session_id),
                move |client| async move { teacher::submit_attendance(&client, session_id, &batch).await },
                AppState::attendance_submitted,
            );
        }
    }
}
