use axum::{extract::State, response::Html};
use serde_json::json;

use crate::templates::{LOGIN, REGIST};
use crate::{GateError, router::GateState};

/// GET / -> login form.
pub async fn login_page(State(state): State<GateState>) -> Result<Html<String>, GateError> {
    state.templates.render(LOGIN, &json!({}))
}

/// GET /regist/ -> registration form.
pub async fn regist_page(State(state): State<GateState>) -> Result<Html<String>, GateError> {
    state.templates.render(REGIST, &json!({}))
}
