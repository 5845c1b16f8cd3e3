use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::{Matcher, Server};
use predicates::prelude::*;

fn seo_api() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("seo-api"));
    cmd.env_remove("API_URL").env("RUST_LOG", "info");
    cmd
}

/// A local address with nothing listening on it.
fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[test]
fn test_get_uses_api_url_and_logs_request() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/users")
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"name":"alice"}]"#)
        .create();

    seo_api()
        .env("API_URL", server.url())
        .args(["get", "/users"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "alice""#))
        .stderr(predicate::str::contains("[API] GET /users RequestDescriptor"));

    mock.assert();
}

#[test]
fn test_base_url_flag_overrides_env() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(r#"{"message":"SEO backend is running"}"#)
        .create();

    seo_api()
        .env("API_URL", "http://127.0.0.1:1")
        .args(["--base-url", &server.url(), "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SEO backend is running"));

    mock.assert();
}

#[test]
fn test_post_sends_data() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/check-domain")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({"domain": "example.com"})))
        .with_status(200)
        .with_body(
            r#"{
                "fixed_domain": "https://example.com",
                "dns_status": "ok",
                "http_status": 200,
                "is_live": true,
                "redirected": false,
                "final_url": "https://example.com/",
                "redirect_chain": [],
                "response_time": 0.05,
                "message": "Site is live"
            }"#,
        )
        .create();

    seo_api()
        .env("API_URL", server.url())
        .args(["check-domain", "example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""is_live": true"#))
        .stderr(predicate::str::contains("[API] POST /check-domain"));

    mock.assert();
}

#[test]
fn test_error_status_is_logged_and_fails() {
    let mut server = Server::new();

    let mock = server
        .mock("DELETE", "/items/7")
        .with_status(500)
        .create();

    seo_api()
        .env("API_URL", server.url())
        .args(["delete", "/items/7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "[API ERROR] Request failed with status code 500",
        ));

    mock.assert();
}

#[test]
fn test_connection_refused_is_logged_and_fails() {
    seo_api()
        .env("API_URL", refused_url())
        .args(["get", "/users"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("[API] GET /users"))
        .stderr(predicate::str::contains("[API ERROR] Network error"));
}

#[test]
fn test_crate_log_filter_shows_interceptor_lines() {
    let mut server = Server::new();

    let mock = server.mock("GET", "/users").with_status(200).create();

    seo_api()
        .env("API_URL", server.url())
        .env("RUST_LOG", "seo_api_client=info")
        .args(["get", "/users"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[API] GET /users"));

    mock.assert();
}

#[test]
fn test_invalid_data_fails_before_request() {
    seo_api()
        .env("API_URL", refused_url())
        .args(["post", "/items", "--data", "{oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--data is not valid JSON"))
        .stderr(predicate::str::contains("[API]").not());
}
