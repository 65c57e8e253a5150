use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum GateError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Template render error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    #[error("Template registration error: {0}")]
    TemplateError(#[from] handlebars::TemplateError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] figment::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Served for every internal failure; carries no detail about the cause.
pub const INTERNAL_ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Error</title></head>
<body>
<h1>Something went wrong</h1>
<p>The request could not be completed. Please try again later.</p>
</body>
</html>
"#;

impl IntoResponse for GateError {
    fn into_response(self) -> axum::response::Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
    }
}
