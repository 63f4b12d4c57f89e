//! HTTP integration tests for the dashboard.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::{header, HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use flowdeck_core::auth::{CredentialStore, SessionClaims, SessionTokens};
use flowdeck_core::{AuthConfig, FlowError, FlowTrigger, NoopFlowTrigger};
use flowdeck_server::{create_router, AppState, ServerConfig};
use serde_json::Value;

const SECRET: &str = "integration-test-secret";

struct TestContext {
    server: TestServer,
    log_dir: tempfile::TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self::with_trigger(Arc::new(NoopFlowTrigger), false)
    }

    fn with_trigger(trigger: Arc<dyn FlowTrigger>, secure_cookies: bool) -> Self {
        let log_dir = tempfile::tempdir().unwrap();
        let users = CredentialStore::new()
            .with_user("admin", "secret")
            .with_user("<operator>", "hunter2");
        let config = ServerConfig::default()
            .with_log_dir(log_dir.path())
            .with_secure_cookies(secure_cookies);

        let state = AppState::new(AuthConfig::new(SECRET, users), trigger, config);
        let server = TestServer::new(create_router(state)).unwrap();

        Self { server, log_dir }
    }

    fn write_log(&self, file_name: &str, contents: &str) {
        std::fs::write(self.log_dir.path().join(file_name), contents).unwrap();
    }

    async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.server
            .post("/login")
            .form(&[("username", username), ("password", password)])
            .await
    }

    async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        self.server
            .get(path)
            .add_header(
                header::COOKIE,
                HeaderValue::from_str(&format!("access_token={token}")).unwrap(),
            )
            .await
    }
}

fn set_cookie(response: &TestResponse) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .map(|value| value.to_str().unwrap().to_string())
}

fn token_from_cookie(cookie: &str) -> String {
    let pair = cookie.split(';').next().unwrap();
    pair.strip_prefix("access_token=").unwrap().to_string()
}

fn assert_challenge(response: &TestResponse) {
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_form() {
    let ctx = TestContext::new();
    let response = ctx.server.get("/login").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let html = response.text();
    assert!(html.contains(r#"action="/login""#));
    assert!(html.contains(r#"name="username""#));
    assert!(html.contains(r#"name="password""#));
}

#[tokio::test]
async fn test_login_success_sets_cookie_and_redirects() {
    let ctx = TestContext::new();
    let response = ctx.login("admin", "secret").await;

    assert_eq!(response.status_code(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let cookie = set_cookie(&response).expect("session cookie");
    assert!(cookie.starts_with("access_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let ctx = TestContext::new();
    let response = ctx.login("admin", "wrong").await;

    assert_challenge(&response);
    assert!(set_cookie(&response).is_none());

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_CREDENTIALS");
    assert_eq!(body["message"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_unknown_user_is_indistinguishable() {
    let ctx = TestContext::new();
    let unknown = ctx.login("mallory", "secret").await;
    let wrong = ctx.login("admin", "wrong").await;

    assert_challenge(&unknown);
    assert!(set_cookie(&unknown).is_none());
    assert_eq!(unknown.text(), wrong.text());
}

#[tokio::test]
async fn test_secure_cookie_flag() {
    let ctx = TestContext::with_trigger(Arc::new(NoopFlowTrigger), true);
    let response = ctx.login("admin", "secret").await;

    let cookie = set_cookie(&response).unwrap();
    assert!(cookie.ends_with("; Secure"));
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_dashboard_requires_cookie() {
    let ctx = TestContext::new();
    let response = ctx.server.get("/").await;

    assert_challenge(&response);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_dashboard_after_login() {
    let ctx = TestContext::new();
    let login = ctx.login("admin", "secret").await;
    let token = token_from_cookie(&set_cookie(&login).unwrap());

    let response = ctx.get_with_token("/", &token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Signed in as <strong>admin</strong>"));
}

#[tokio::test]
async fn test_dashboard_escapes_username() {
    let ctx = TestContext::new();
    let login = ctx.login("<operator>", "hunter2").await;
    let token = token_from_cookie(&set_cookie(&login).unwrap());

    let html = ctx.get_with_token("/", &token).await.text();

    assert!(html.contains("&lt;operator&gt;"));
    assert!(!html.contains("<operator>"));
}

#[tokio::test]
async fn test_dashboard_rejects_garbage_token() {
    let ctx = TestContext::new();
    let response = ctx.get_with_token("/", "not-a-token").await;

    assert_challenge(&response);
}

#[tokio::test]
async fn test_dashboard_rejects_foreign_token() {
    let ctx = TestContext::new();
    let foreign = SessionTokens::new(b"someone-elses-secret", Duration::from_secs(3600))
        .issue("admin")
        .unwrap();

    let response = ctx.get_with_token("/", &foreign).await;
    assert_challenge(&response);
}

#[tokio::test]
async fn test_dashboard_rejects_expired_token() {
    let ctx = TestContext::new();
    let expired = SessionTokens::new(SECRET.as_bytes(), Duration::from_secs(3600))
        .sign(&SessionClaims {
            sub: "admin".to_string(),
            exp: 1,
        })
        .unwrap();

    let response = ctx.get_with_token("/", &expired).await;
    assert_challenge(&response);
}

// ============================================================================
// Logs
// ============================================================================

async fn fetch_log(ctx: &TestContext, slug: &str) -> String {
    let response = ctx.server.get(&format!("/logs/{slug}")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    body["log"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_missing_logs_report_unavailable() {
    let ctx = TestContext::new();

    for slug in ["server", "oLogic", "uvicorn"] {
        assert_eq!(fetch_log(&ctx, slug).await, "Log file not available.");
    }
}

#[tokio::test]
async fn test_log_tail_is_cleaned() {
    let ctx = TestContext::new();
    ctx.write_log(
        "orchestration_logic.log",
        "2024-01-01 10:00:00 - orchestration - INFO - started\n\
         2024-01-01 10:00:01 - orchestration - ERROR - failed\n",
    );

    assert_eq!(
        fetch_log(&ctx, "oLogic").await,
        "INFO - started<br>ERROR - failed"
    );
}

#[tokio::test]
async fn test_log_tail_keeps_last_thirty_lines() {
    let ctx = TestContext::new();
    let contents: String = (1..=31)
        .map(|n| format!("2024-01-01 10:00:00 - server - INFO - line {n}\n"))
        .collect();
    ctx.write_log("o-server.log", &contents);

    let log = fetch_log(&ctx, "server").await;
    let lines: Vec<&str> = log.split("<br>").collect();

    assert_eq!(lines.len(), 30);
    assert_eq!(lines[0], "INFO - line 2");
    assert_eq!(lines[29], "INFO - line 31");
}

#[tokio::test]
async fn test_each_log_route_reads_its_own_file() {
    let ctx = TestContext::new();
    ctx.write_log("o-server.log", "a - INFO - server\n");
    ctx.write_log("orchestration_logic.log", "a - INFO - orchestration\n");
    ctx.write_log("access.log", "a - INFO - access\n");

    assert_eq!(fetch_log(&ctx, "server").await, "INFO - server");
    assert_eq!(fetch_log(&ctx, "oLogic").await, "INFO - orchestration");
    assert_eq!(fetch_log(&ctx, "uvicorn").await, "INFO - access");
}

#[tokio::test]
async fn test_unreadable_log_is_server_error() {
    let ctx = TestContext::new();
    std::fs::create_dir(ctx.log_dir.path().join("access.log")).unwrap();

    let response = ctx.server.get("/logs/uvicorn").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Flow
// ============================================================================

struct SlowTrigger;

#[async_trait]
impl FlowTrigger for SlowTrigger {
    fn name(&self) -> &str {
        "slow"
    }

    async fn execute(&self) -> Result<(), FlowError> {
        tokio::time::sleep(Duration::from_millis(300)).await;
        Ok(())
    }
}

struct BrokenTrigger;

#[async_trait]
impl FlowTrigger for BrokenTrigger {
    fn name(&self) -> &str {
        "broken"
    }

    async fn execute(&self) -> Result<(), FlowError> {
        Err(FlowError::Failed("orchestration service unreachable".to_string()))
    }
}

#[tokio::test]
async fn test_manual_flow_run() {
    let ctx = TestContext::new();
    let response = ctx.server.get("/test").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Test execution of Globus Flow completed at "));
}

#[tokio::test]
async fn test_overlapping_manual_runs() {
    let ctx = TestContext::with_trigger(Arc::new(SlowTrigger), false);

    let first = async { ctx.server.get("/test").await };
    let second = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        ctx.server.get("/test").await
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_failed_flow_is_reported() {
    let ctx = TestContext::with_trigger(Arc::new(BrokenTrigger), false);
    let response = ctx.server.get("/test").await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], "FLOW_FAILED");
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let response = ctx.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "flowdeck-server");
    assert_eq!(body["flow"]["running"], false);
}
