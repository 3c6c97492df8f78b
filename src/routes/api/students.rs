use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::entities::student,
    response::{ApiResult, JsonApiResponse},
    routes::api::attendance::AttendanceEntryResponse,
    services::ServiceContext,
    state::AppState,
};

/// Guardian phone as sent by the client: a JSON number or the digits as a
/// string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GuardianPhone {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub classroom_id: i32,
    pub guardian_phone: GuardianPhone,
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: i32,
    pub name: String,
    pub classroom_id: i32,
    pub guardian_phone: i64,
}

#[derive(Debug, Serialize)]
pub struct StudentAttendanceResponse {
    pub student: StudentResponse,
    pub entries: Vec<AttendanceEntryResponse>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{student_id}",
            get(get_student).delete(delete_student),
        )
        .route("/students/{student_id}/attendance", get(student_attendance))
        .with_state(state)
}

async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateStudentRequest>,
) -> ApiResult<StudentResponse> {
    let service = ServiceContext::from_state(state.as_ref()).student();
    let student = match &body.guardian_phone {
        GuardianPhone::Number(phone) => {
            service.create(&body.name, body.classroom_id, *phone).await?
        }
        GuardianPhone::Text(phone) => {
            service
                .create_from_text(&body.name, body.classroom_id, phone)
                .await?
        }
    };
    JsonApiResponse::with_status(StatusCode::CREATED, "created", student.into())
}

async fn list_students(State(state): State<Arc<AppState>>) -> ApiResult<Vec<StudentResponse>> {
    let service = ServiceContext::from_state(state.as_ref()).student();
    let students = service.list_all().await?;
    JsonApiResponse::ok(students.into_iter().map(StudentResponse::from).collect())
}

async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i32>,
) -> ApiResult<StudentResponse> {
    let service = ServiceContext::from_state(state.as_ref()).student();
    let student = service.get(student_id).await?;
    JsonApiResponse::ok(student.into())
}

async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i32>,
) -> ApiResult<serde_json::Value> {
    let service = ServiceContext::from_state(state.as_ref()).student();
    service.delete(student_id).await?;
    JsonApiResponse::with_status(StatusCode::OK, "deleted", serde_json::Value::Null)
}

async fn student_attendance(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<i32>,
) -> ApiResult<StudentAttendanceResponse> {
    let service = ServiceContext::from_state(state.as_ref()).attendance();
    let (student, entries) = service.query_by_student_id(student_id).await?;
    JsonApiResponse::ok(StudentAttendanceResponse {
        student: student.into(),
        entries: entries
            .into_iter()
            .map(AttendanceEntryResponse::from)
            .collect(),
    })
}

impl From<student::Model> for StudentResponse {
    fn from(model: student::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            classroom_id: model.classroom_id,
            guardian_phone: model.guardian_phone,
        }
    }
}
