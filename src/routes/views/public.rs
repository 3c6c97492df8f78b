use askama::Template;
use axum::{Router, http::StatusCode, http::Uri, routing::get};

use super::{HtmlError, HtmlResult, PageMeta, error_page, render};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    meta: PageMeta,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    meta: PageMeta,
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
}

async fn index() -> HtmlResult {
    render(
        &IndexTemplate {
            meta: PageMeta::current(),
        },
        "index",
    )
}

async fn about() -> HtmlResult {
    render(
        &AboutTemplate {
            meta: PageMeta::current(),
        },
        "about",
    )
}

pub(crate) async fn page_not_found(uri: Uri) -> HtmlError {
    error_page(
        StatusCode::NOT_FOUND,
        format!("Page ({}) does not exist", uri.path()),
    )
}
