use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::attendance_entry,
    response::{ApiResult, JsonApiResponse},
    services::ServiceContext,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RecordAttendanceRequest {
    pub date: String,
    pub names: Vec<String>,
    pub flags: Vec<i32>,
}

#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct AttendanceEntryResponse {
    pub id: i32,
    pub date: String,
    pub student_name: String,
    pub present: i32,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/classrooms/{classroom_id}/attendance",
            post(record_attendance),
        )
        .route("/attendance", get(query_attendance))
        .with_state(state)
}

async fn record_attendance(
    State(state): State<Arc<AppState>>,
    Path(classroom_id): Path<i32>,
    Json(body): Json<RecordAttendanceRequest>,
) -> ApiResult<Vec<AttendanceEntryResponse>> {
    let service = ServiceContext::from_state(state.as_ref()).attendance();
    let entries = service
        .record_batch(classroom_id, &body.date, &body.names, &body.flags)
        .await?;
    JsonApiResponse::with_status(
        StatusCode::CREATED,
        "recorded",
        entries
            .into_iter()
            .map(AttendanceEntryResponse::from)
            .collect(),
    )
}

async fn query_attendance(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AttendanceQuery>,
) -> ApiResult<Vec<AttendanceEntryResponse>> {
    let service = ServiceContext::from_state(state.as_ref()).attendance();
    let entries = service.query_by_student_name(&query.name).await?;
    JsonApiResponse::ok(
        entries
            .into_iter()
            .map(AttendanceEntryResponse::from)
            .collect(),
    )
}

impl From<attendance_entry::Model> for AttendanceEntryResponse {
    fn from(model: attendance_entry::Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            student_name: model.student_name,
            present: model.present,
        }
    }
}
