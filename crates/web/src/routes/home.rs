//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

/// Query parameters for flashed notices.
///
/// Admin form flows redirect here with a message instead of returning a
/// structured error body.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub notice: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate, Default)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub notice: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

/// Display the home page.
pub async fn index(Query(query): Query<FlashQuery>) -> impl IntoResponse {
    HomeTemplate {
        notice: query.notice,
        warning: query.warning,
        error: query.error,
    }
}
