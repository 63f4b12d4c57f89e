//! Login form and credential submission.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::extract::session_cookie;
use crate::state::AppState;

const LOGIN_PAGE: &str = include_str!("../../assets/login.html");

/// Login routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/login", get(login_form).post(login))
}

/// Submitted login form.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

async fn login_form() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// Check the submitted credentials; on success set the session cookie and
/// redirect to the dashboard.
async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let token = state.auth.login(&form.username, &form.password)?;
    let cookie = session_cookie(&token, state.config.secure_cookies);

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, "/".to_string()), (header::SET_COOKIE, cookie)],
    )
        .into_response())
}
