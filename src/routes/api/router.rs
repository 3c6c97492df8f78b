use std::sync::Arc;

use axum::Router;

use crate::{error::AppError, state::AppState};

use super::{attendance, classrooms, public, students};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(classrooms::router(state.clone()))
        .merge(students::router(state.clone()))
        .merge(attendance::router(state))
        .fallback(unknown_endpoint)
}

async fn unknown_endpoint() -> AppError {
    AppError::not_found("No such endpoint")
}
