use crate::db::{CredentialsStorage, PicturesStorage, SqlitePool};
use crate::handlers::{login, pages, pictures, register};
use crate::templates::Templates;
use axum::{
    Router,
    routing::{get, post},
};

/// Process-wide context handed to every handler through `State`.
#[derive(Clone)]
pub struct GateState {
    pub credentials: CredentialsStorage,
    pub pictures: PicturesStorage,
    pub templates: Templates,
}

impl GateState {
    pub fn new(pool: SqlitePool, templates: Templates) -> Self {
        Self {
            credentials: CredentialsStorage::new(pool.clone()),
            pictures: PicturesStorage::new(pool),
            templates,
        }
    }
}

pub fn gate_router(state: GateState) -> Router {
    Router::new()
        .route("/", get(pages::login_page))
        .route("/regist/", get(pages::regist_page))
        .route("/lsuccess/", post(login::login_handler))
        .route("/rsuccess/", post(register::regist_handler))
        .route("/pictures/{name}", get(pictures::picture_handler))
        .with_state(state)
}
