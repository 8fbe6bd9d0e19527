use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    login::{__path_login, login},
    logout::{__path_logout, logout},
    refresh::{__path_refresh, refresh},
    register::{__path_register, register},
    verify::{__path_verify, verify},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(register, login, logout, refresh, verify))]
pub struct AuthApiDoc;

pub fn auth_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/auth/register"), post(register))
        .route(&format!("{root_path}/auth/login"), post(login))
        .route(&format!("{root_path}/auth/logout"), post(logout))
        .route(&format!("{root_path}/auth/refresh"), post(refresh))
        .route(&format!("{root_path}/auth/verify"), get(verify))
}
