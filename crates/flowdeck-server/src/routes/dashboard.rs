//! The login-gated control panel.

use axum::{response::Html, routing::get, Router};

use crate::extract::SessionUser;
use crate::state::AppState;

const DASHBOARD_PAGE: &str = include_str!("../../assets/dashboard.html");

/// Dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

async fn dashboard(SessionUser(username): SessionUser) -> Html<String> {
    Html(DASHBOARD_PAGE.replace("{{username}}", &escape_html(&username)))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
