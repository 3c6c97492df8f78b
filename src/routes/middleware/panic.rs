use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::{response::JsonApiResponse, routes::views::error_page};

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Turns a panicking API handler into a 500 JSON envelope.
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_to_json as PanicHandler)
}

/// Turns a panicking page handler into the 500 error page.
pub fn catch_panic_page_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_to_page as PanicHandler)
}

fn panic_to_json(panic: Box<dyn Any + Send + 'static>) -> Response {
    JsonApiResponse {
        status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        message: client_message(panic.as_ref()),
        data: serde_json::Value::Null,
    }
    .into_response()
}

fn panic_to_page(panic: Box<dyn Any + Send + 'static>) -> Response {
    error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        client_message(panic.as_ref()),
    )
    .into_response()
}

fn client_message(panic: &(dyn Any + Send)) -> String {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %details, "request handler panicked");

    if cfg!(debug_assertions) {
        format!("internal server error: {details}")
    } else {
        "internal server error".to_string()
    }
}
