use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::db::InsertOutcome;
use crate::templates::REGIST;
use crate::{GateError, router::GateState};

pub const USERNAME_TAKEN: &str = "该用户名已被注册！";
pub const PASSWORD_MISMATCH: &str = "两次密码不相同！";

#[derive(Debug, Deserialize)]
pub struct RegistForm {
    pub rename: String,
    pub repwd: String,
    pub repwd2: String,
}

/// POST /rsuccess/ -> redirect to the login page, or the form again with an inline error.
pub async fn regist_handler(
    State(state): State<GateState>,
    Form(form): Form<RegistForm>,
) -> Result<Response, GateError> {
    if form.repwd != form.repwd2 {
        return reject(&state, PASSWORD_MISMATCH);
    }

    if state
        .credentials
        .find_by_username(&form.rename)
        .await?
        .is_some()
    {
        return reject(&state, USERNAME_TAKEN);
    }

    match state.credentials.insert(&form.rename, &form.repwd).await? {
        InsertOutcome::Created(id) => {
            info!(id, username = %form.rename, "registered new user");
            Ok(Redirect::to("/").into_response())
        }
        InsertOutcome::UsernameTaken => reject(&state, USERNAME_TAKEN),
    }
}

fn reject(state: &GateState, message: &str) -> Result<Response, GateError> {
    Ok(state
        .templates
        .render(REGIST, &json!({ "error": message }))?
        .into_response())
}
