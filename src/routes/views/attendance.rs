use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    routing::get,
};
use chrono::Local;

use super::{HtmlResult, PageId, PageMeta, render};
use crate::{
    db::entities::{attendance_entry, classroom, student},
    services::{ServiceContext, input::RollCallForm},
    state::AppState,
};

#[derive(Template)]
#[template(path = "roll_call.html")]
struct RollCallTemplate {
    meta: PageMeta,
    classroom: classroom::Model,
    students: Vec<student::Model>,
    today: String,
}

#[derive(Template)]
#[template(path = "roll_call_done.html")]
struct RollCallDoneTemplate {
    meta: PageMeta,
    classroom: classroom::Model,
    date: String,
    present: usize,
    absent: usize,
}

#[derive(Template)]
#[template(path = "attendance_lookup.html")]
struct LookupTemplate {
    meta: PageMeta,
    classrooms: Vec<classroom::Model>,
    students: Vec<student::Model>,
}

#[derive(Template)]
#[template(path = "student_attendance.html")]
struct StudentAttendanceTemplate {
    meta: PageMeta,
    student: student::Model,
    entries: Vec<attendance_entry::Model>,
    present: usize,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/classrooms/{classroom_id}/roll-call",
            get(roll_call_form).post(submit_roll_call),
        )
        .route("/attendance", get(lookup))
        .route("/attendance/{student_id}", get(student_attendance))
        .with_state(state)
}

async fn roll_call_form(
    State(state): State<Arc<AppState>>,
    PageId(classroom_id): PageId,
) -> HtmlResult {
    let (classroom, students) = ServiceContext::from_state(state.as_ref())
        .attendance()
        .roster(classroom_id)
        .await?;
    render(
        &RollCallTemplate {
            meta: PageMeta::current(),
            classroom,
            students,
            today: Local::now().format("%Y-%m-%d").to_string(),
        },
        "roll call",
    )
}

async fn submit_roll_call(
    State(state): State<Arc<AppState>>,
    PageId(classroom_id): PageId,
    Form(pairs): Form<Vec<(String, String)>>,
) -> HtmlResult {
    let form = RollCallForm::from_pairs(pairs)?;
    let services = ServiceContext::from_state(state.as_ref());
    let entries = services
        .attendance()
        .record_form(classroom_id, &form)
        .await?;
    let classroom = services.classroom().get(classroom_id).await?;

    let present = entries.iter().filter(|entry| entry.is_present()).count();
    render(
        &RollCallDoneTemplate {
            meta: PageMeta::current(),
            classroom,
            date: form.date,
            present,
            absent: entries.len() - present,
        },
        "roll call summary",
    )
}

async fn lookup(State(state): State<Arc<AppState>>) -> HtmlResult {
    let services = ServiceContext::from_state(state.as_ref());
    let classrooms = services.classroom().list().await?;
    let students = services.student().list_all().await?;
    render(
        &LookupTemplate {
            meta: PageMeta::current(),
            classrooms,
            students,
        },
        "attendance lookup",
    )
}

async fn student_attendance(
    State(state): State<Arc<AppState>>,
    PageId(student_id): PageId,
) -> HtmlResult {
    let (student, entries) = ServiceContext::from_state(state.as_ref())
        .attendance()
        .query_by_student_id(student_id)
        .await?;
    let present = entries.iter().filter(|entry| entry.is_present()).count();
    render(
        &StudentAttendanceTemplate {
            meta: PageMeta::current(),
            student,
            entries,
            present,
        },
        "student attendance",
    )
}
