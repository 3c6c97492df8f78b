use askama::Template;
use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::Html,
};
use chrono::Local;

use crate::{error::AppError, response::status_for};

pub mod attendance;
pub mod classrooms;
pub mod public;
mod router;
pub mod students;

pub use router::router;

pub(crate) type HtmlError = (StatusCode, Html<String>);
pub(crate) type HtmlResult = Result<Html<String>, HtmlError>;

/// Values every page layout shows.
#[derive(Clone)]
pub(crate) struct PageMeta {
    pub now: String,
    pub project_name: String,
}

impl PageMeta {
    pub fn current() -> Self {
        Self {
            now: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            project_name: project_name(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    meta: PageMeta,
    status: u16,
    message: String,
}

pub(crate) fn render<T: Template>(template: &T, what: &'static str) -> HtmlResult {
    template.render().map(Html).map_err(|err| {
        tracing::error!(page = what, error = %err, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("failed to render {what}")))
    })
}

pub(crate) fn error_page(status: StatusCode, message: impl Into<String>) -> HtmlError {
    let template = ErrorTemplate {
        meta: PageMeta::current(),
        status: status.as_u16(),
        message: message.into(),
    };
    match render(&template, "error page") {
        Ok(html) => (status, html),
        Err(err) => err,
    }
}

impl From<AppError> for (StatusCode, Html<String>) {
    fn from(err: AppError) -> Self {
        error_page(status_for(&err), err.message())
    }
}

/// An integer id taken from the path. A malformed id renders the 400 error
/// page instead of axum's plain-text rejection.
pub(crate) struct PageId(pub i32);

impl<S> FromRequestParts<S> for PageId
where
    S: Send + Sync,
{
    type Rejection = HtmlError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => Err(error_page(rejection.status(), rejection.body_text())),
        }
    }
}

pub(crate) fn project_name() -> String {
    env!("CARGO_PKG_NAME")
        .split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::project_name;

    #[test]
    fn project_name_is_title_cased() {
        assert_eq!(project_name(), "Roll Call");
    }
}
