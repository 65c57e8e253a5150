use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::handlers::pictures::picture_path;
use crate::templates::{HOME, PSERROR};
use crate::{GateError, router::GateState};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// POST /lsuccess/ -> landing page with the user's picture, or the failure page.
pub async fn login_handler(
    State(state): State<GateState>,
    Form(form): Form<LoginForm>,
) -> Result<Html<String>, GateError> {
    let Some(cred) = state
        .credentials
        .find_by_login(&form.username, &form.password)
        .await?
    else {
        info!(username = %form.username, "login rejected");
        return state.templates.render(PSERROR, &json!({}));
    };

    let picname = state
        .pictures
        .find_for_owner(&cred.username)
        .await?
        .map(|pic| pic.name);
    let picture_url = picname.as_deref().and_then(picture_path);

    info!(username = %cred.username, picture = ?picname, "login accepted");
    state.templates.render(
        HOME,
        &json!({
            "username": cred.username,
            "picname": picname,
            "picture_url": picture_url,
        }),
    )
}
