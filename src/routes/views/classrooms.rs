use std::sync::Arc;

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    response::Redirect,
    routing::{get, post},
};
use serde::Deserialize;

use super::{HtmlError, HtmlResult, PageId, PageMeta, render};
use crate::{
    db::entities::{classroom, student},
    services::ServiceContext,
    state::AppState,
};

#[derive(Template)]
#[template(path = "classrooms.html")]
struct ClassroomsTemplate {
    meta: PageMeta,
    classrooms: Vec<classroom::Model>,
}

#[derive(Template)]
#[template(path = "classroom.html")]
struct ClassroomTemplate {
    meta: PageMeta,
    classroom: classroom::Model,
    students: Vec<student::Model>,
}

#[derive(Template)]
#[template(path = "classroom_form.html")]
struct ClassroomFormTemplate {
    meta: PageMeta,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClassroomForm {
    pub name: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/classrooms", get(list_classrooms))
        .route("/classrooms/new", get(new_classroom).post(create_classroom))
        .route("/classrooms/{classroom_id}", get(show_classroom))
        .route("/classrooms/{classroom_id}/delete", post(delete_classroom))
        .with_state(state)
}

async fn list_classrooms(State(state): State<Arc<AppState>>) -> HtmlResult {
    let classrooms = ServiceContext::from_state(state.as_ref())
        .classroom()
        .list()
        .await?;
    render(
        &ClassroomsTemplate {
            meta: PageMeta::current(),
            classrooms,
        },
        "classrooms",
    )
}

async fn new_classroom() -> HtmlResult {
    render(
        &ClassroomFormTemplate {
            meta: PageMeta::current(),
        },
        "classroom form",
    )
}

async fn create_classroom(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ClassroomForm>,
) -> Result<Redirect, HtmlError> {
    ServiceContext::from_state(state.as_ref())
        .classroom()
        .create(&form.name)
        .await?;
    Ok(Redirect::to("/classrooms"))
}

async fn show_classroom(
    State(state): State<Arc<AppState>>,
    PageId(classroom_id): PageId,
) -> HtmlResult {
    let services = ServiceContext::from_state(state.as_ref());
    let classroom = services.classroom().get(classroom_id).await?;
    let students = services.student().list_by_classroom(classroom_id).await?;
    render(
        &ClassroomTemplate {
            meta: PageMeta::current(),
            classroom,
            students,
        },
        "classroom",
    )
}

async fn delete_classroom(
    State(state): State<Arc<AppState>>,
    PageId(classroom_id): PageId,
) -> Result<Redirect, HtmlError> {
    ServiceContext::from_state(state.as_ref())
        .classroom()
        .delete(classroom_id)
        .await?;
    Ok(Redirect::to("/classrooms"))
}
