use api::models::{AttendanceSessionInfo, AttendanceStatus, SchoolClass, Teacher};
use dioxus::prelude::*;

use crate::state::{
    AttendanceRow, CourseCard, Flash, FlashKind, InFlight, SupervisorState, SupervisorTab,
    TeacherState,
};
use crate::views::{FlashView, LoginView, StudentView, SupervisorView, TeacherView};

fn render(mut dom: VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[component]
fn SupervisorFixture(state: SupervisorState) -> Element {
    rsx! {
        SupervisorView {
            state,
            notifications: Vec::new(),
            in_flight: InFlight::default(),
            on_event: move |_| {},
        }
    }
}

#[component]
fn StudentFixture(cards: Vec<CourseCard>) -> Element {
    rsx! {
        StudentView {
            cards,
            notifications: Vec::new(),
            pending_reads: Vec::new(),
            on_mark_read: move |_| {},
        }
    }
}

#[component]
fn TeacherFixture(state: TeacherState) -> Element {
    rsx! {
        TeacherView { state, submitting: false, on_event: move |_| {} }
    }
}

#[component]
fn FlashFixture(flash: Option<Flash>) -> Element {
    rsx! {
        FlashView { flash }
    }
}

#[component]
fn LoginFixture() -> Element {
    rsx! {
        LoginView { pending: false, on_login: move |_| {} }
    }
}

fn roster() -> SupervisorState {
    SupervisorState {
        loaded: true,
        teachers: vec![Teacher {
            id: 1,
            name: "Elif Kaya".into(),
            email: "elif@example.com".into(),
            display_color: "#2563eb".into(),
            is_active: true,
        }],
        classes: vec![SchoolClass {
            id: 4,
            name: "10-B".into(),
            grade: 10,
            branch: "B".into(),
            supervisor_name: None,
        }],
        ..SupervisorState::default()
    }
}

fn card(percent: f64) -> CourseCard {
    CourseCard {
        course_id: 3,
        name: "Physics".into(),
        class_name: "10-B".into(),
        display_color: "#16a34a".into(),
        percent,
        threshold: 30.0,
        exceeded: percent >= 30.0,
    }
}

#[test]
fn test_supervisor_tab_body_follows_state() {
    let mut state = roster();
    let html = render(VirtualDom::new_with_props(
        SupervisorFixture,
        SupervisorFixtureProps { state: state.clone() },
    ));
    assert!(html.contains("Elif Kaya"));
    assert!(!html.contains("10-B"));

    state.switch_tab(SupervisorTab::Classes);
    let html = render(VirtualDom::new_with_props(
        SupervisorFixture,
        SupervisorFixtureProps { state },
    ));
    assert!(html.contains("10-B"));
    assert!(!html.contains("Elif Kaya"));
    assert!(html.contains("data-tab=\"classes\""));
}

#[test]
fn test_student_card_warns_over_threshold() {
    let html = render(VirtualDom::new_with_props(
        StudentFixture,
        StudentFixtureProps { cards: vec![card(32.0)] },
    ));
    assert!(html.contains("Absence rate: %32.0"));
    assert!(html.contains("Threshold: %30"));
    assert!(html.contains("Absence threshold exceeded!"));

    let html = render(VirtualDom::new_with_props(
        StudentFixture,
        StudentFixtureProps { cards: vec![card(29.9)] },
    ));
    assert!(html.contains("Absence rate: %29.9"));
    assert!(!html.contains("Absence threshold exceeded!"));
}

#[test]
fn test_student_without_courses() {
    let html = render(VirtualDom::new_with_props(
        StudentFixture,
        StudentFixtureProps { cards: Vec::new() },
    ));
    assert!(html.contains("No courses found."));
}

#[test]
fn test_login_lists_demo_users() {
    let html = render(VirtualDom::new(LoginFixture));
    assert!(html.contains("Sign in"));
    assert!(html.contains("supervisor@example.com / Supervisor123!"));
    assert!(html.contains("teacher@example.com / Teacher123!"));
    assert!(html.contains("student@example.com / Student123!"));
}

#[test]
fn test_flash_view_kind_class() {
    let html = render(VirtualDom::new_with_props(
        FlashFixture,
        FlashFixtureProps {
            flash: Some(Flash {
                id: 1,
                message: "Teacher created".into(),
                kind: FlashKind::Success,
            }),
        },
    ));
    assert!(html.contains("alert success"));
    assert!(html.contains("Teacher created"));

    let html = render(VirtualDom::new_with_props(
        FlashFixture,
        FlashFixtureProps { flash: None },
    ));
    assert!(!html.contains("alert"));
}

#[test]
fn test_attendance_form_has_radio_per_status() {
    let state = TeacherState {
        loaded: true,
        selected_class: Some(4),
        selected_session: Some(AttendanceSessionInfo {
            id: 9,
            course_id: 3,
            class_id: Some(4),
            course_name: Some("Physics".into()),
            date: "2024-10-01".into(),
            start_time: "09:00".into(),
            end_time: "09:40".into(),
            is_locked: false,
        }),
        attendance: vec![
            AttendanceRow {
                student_id: 1,
                student_name: "Can Demir".into(),
                status: AttendanceStatus::Present,
            },
            AttendanceRow {
                student_id: 2,
                student_name: "Ada Yilmaz".into(),
                status: AttendanceStatus::Unexcused,
            },
        ],
        ..TeacherState::default()
    };
    let html = render(VirtualDom::new_with_props(
        TeacherFixture,
        TeacherFixtureProps { state },
    ));
    assert!(html.contains("Can Demir"));
    assert!(html.contains("Ada Yilmaz"));
    assert_eq!(html.matches("type=\"radio\"").count(), 6);
    assert!(html.contains("name=\"student-2\""));
    assert!(html.contains("Save attendance"));
}

#[test]
fn test_teacher_prompts_for_class() {
    let html = render(VirtualDom::new_with_props(
        TeacherFixture,
        TeacherFixtureProps { state: TeacherState::default() },
    ));
    assert!(html.contains("No classes found."));
    assert!(html.contains("Select a class to see its sessions."));
    assert!(html.contains("Select a session to take attendance."));
}
