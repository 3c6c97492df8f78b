use std::sync::Arc;

use axum::{Router, middleware as axum_middleware};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::{api, middleware, views};

pub const API_PREFIX: &str = "/api/v1";

pub fn router(state: Arc<AppState>) -> Router {
    compose(api::router(state.clone()), views::router(state))
}

/// [`router`] wrapped in the error and tracing layers used in production.
pub fn app(state: Arc<AppState>) -> Router {
    with_layers(router(state))
}

/// Mounts the API under [`API_PREFIX`] next to the pages. Each side catches
/// its own panics so a page never answers with a JSON envelope.
fn compose(api: Router, pages: Router) -> Router {
    Router::new()
        .nest(API_PREFIX, api.layer(middleware::catch_panic_layer()))
        .merge(pages.layer(middleware::catch_panic_page_layer()))
}

fn with_layers(router: Router) -> Router {
    router
        .layer(axum_middleware::from_fn(middleware::json_error_middleware))
        .layer(TraceLayer::new_for_http())
}
