use std::{path::PathBuf, sync::Arc};

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

use super::{attendance, classrooms, public, students};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(classrooms::router(state.clone()))
        .merge(students::router(state.clone()))
        .merge(attendance::router(state))
        .nest_service("/static", ServeDir::new(resolve_public_dir()))
        .fallback(public::page_not_found)
}

fn resolve_public_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("APP_PUBLIC_DIR") {
        return PathBuf::from(path);
    }

    if let Ok(current_dir) = std::env::current_dir() {
        let candidate = current_dir.join("public");
        if candidate.exists() {
            return candidate;
        }
    }

    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}
