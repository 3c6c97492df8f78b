use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::classroom,
    response::{ApiResult, JsonApiResponse},
    routes::api::students::StudentResponse,
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CreateClassroomRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ClassroomResponse {
    pub id: i32,
    pub name: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/classrooms", get(list_classrooms).post(create_classroom))
        .route(
            "/classrooms/{classroom_id}",
            get(get_classroom).delete(delete_classroom),
        )
        .route("/classrooms/{classroom_id}/students", get(list_roster))
        .with_state(state)
}

async fn create_classroom(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateClassroomRequest>,
) -> ApiResult<ClassroomResponse> {
    let service = ServiceContext::from_state(state.as_ref()).classroom();
    let classroom = service.create(&body.name).await?;
    JsonApiResponse::with_status(StatusCode::CREATED, "created", classroom.into())
}

async fn list_classrooms(State(state): State<Arc<AppState>>) -> ApiResult<Vec<ClassroomResponse>> {
    let service = ServiceContext::from_state(state.as_ref()).classroom();
    let classrooms = service.list().await?;
    JsonApiResponse::ok(classrooms.into_iter().map(ClassroomResponse::from).collect())
}

async fn get_classroom(
    State(state): State<Arc<AppState>>,
    Path(classroom_id): Path<i32>,
) -> ApiResult<ClassroomResponse> {
    let service = ServiceContext::from_state(state.as_ref()).classroom();
    let classroom = service.get(classroom_id).await?;
    JsonApiResponse::ok(classroom.into())
}

async fn delete_classroom(
    State(state): State<Arc<AppState>>,
    Path(classroom_id): Path<i32>,
) -> ApiResult<serde_json::Value> {
    let service = ServiceContext::from_state(state.as_ref()).classroom();
    service.delete(classroom_id).await?;
    JsonApiResponse::with_status(StatusCode::OK, "deleted", serde_json::Value::Null)
}

async fn list_roster(
    State(state): State<Arc<AppState>>,
    Path(classroom_id): Path<i32>,
) -> ApiResult<Vec<StudentResponse>> {
    let services = ServiceContext::from_state(state.as_ref());
    services.classroom().get(classroom_id).await?;
    let students = services.student().list_by_classroom(classroom_id).await?;
    JsonApiResponse::ok(students.into_iter().map(StudentResponse::from).collect())
}

impl From<classroom::Model> for ClassroomResponse {
    fn from(model: classroom::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
