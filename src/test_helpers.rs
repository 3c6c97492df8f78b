use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    routes::app,
    state::AppState,
};

/// A fresh, empty in-memory database with the schema applied.
pub async fn memory_db() -> DatabaseConnection {
    connection::connect(&DatabaseConfig::in_memory())
        .await
        .expect("connect to in-memory sqlite")
}

pub async fn test_state() -> Arc<AppState> {
    let cfg = AppConfig {
        database: DatabaseConfig::in_memory(),
        ..AppConfig::default()
    };
    let db = connection::connect(&cfg.database)
        .await
        .expect("connect to in-memory sqlite");
    AppState::new(cfg, db)
}

/// The full application, middleware included, over `state`.
pub fn test_app(state: &Arc<AppState>) -> Router {
    app(Arc::clone(state))
}
