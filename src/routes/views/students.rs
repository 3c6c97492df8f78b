use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::{Query, State},
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use super::{HtmlError, HtmlResult, PageId, PageMeta, render};
use crate::{services::ServiceContext, services::input, state::AppState};

struct ClassroomOption {
    id: i32,
    name: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "student_form.html")]
struct StudentFormTemplate {
    meta: PageMeta,
    classrooms: Vec<ClassroomOption>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudentForm {
    pub name: String,
    pub classroom_id: String,
    pub guardian_phone: String,
}

/// `/students/new?classroom_id=3` preselects the classroom.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewStudentQuery {
    pub classroom_id: Option<i32>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/students/new", get(new_student).post(create_student))
        .route("/students/{student_id}/delete", post(delete_student))
        .with_state(state)
}

async fn new_student(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewStudentQuery>,
) -> HtmlResult {
    let classrooms = ServiceContext::from_state(state.as_ref())
        .classroom()
        .list()
        .await?
        .into_iter()
        .map(|classroom| ClassroomOption {
            selected: query.classroom_id == Some(classroom.id),
            id: classroom.id,
            name: classroom.name,
        })
        .collect();
    render(
        &StudentFormTemplate {
            meta: PageMeta::current(),
            classrooms,
        },
        "student form",
    )
}

async fn create_student(
    State(state): State<Arc<AppState>>,
    Form(form): Form<StudentForm>,
) -> Result<Redirect, HtmlError> {
    let classroom_id = input::parse_id("Classroom", &form.classroom_id)?;
    let student = ServiceContext::from_state(state.as_ref())
        .student()
        .create_from_text(&form.name, classroom_id, &form.guardian_phone)
        .await?;
    Ok(Redirect::to(&format!("/classrooms/{}", student.classroom_id)))
}

async fn delete_student(
    State(state): State<Arc<AppState>>,
    PageId(student_id): PageId,
) -> Result<Redirect, HtmlError> {
    ServiceContext::from_state(state.as_ref())
        .student()
        .delete(student_id)
        .await?;
    Ok(Redirect::to("/classrooms"))
}
