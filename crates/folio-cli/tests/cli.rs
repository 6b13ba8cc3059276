use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn folio_cli(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio-cli").expect("bin");
    cmd.env_remove("FOLIO_RELAY_URL")
        .env_remove("FOLIO_CONFIG")
        .arg("--config")
        .arg(config);
    cmd
}

fn config_file(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("config.toml")
}

#[test]
fn show_single_section() {
    let dir = TempDir::new().expect("tempdir");
    folio_cli(&config_file(&dir))
        .args(["show", "home", "--no-color", "--width", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Name"))
        .stdout(predicate::str::contains("Home"));
}

#[test]
fn show_accepts_fragment_form() {
    let dir = TempDir::new().expect("tempdir");
    folio_cli(&config_file(&dir))
        .args(["show", "#contact", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello@example.com"));
}

#[test]
fn show_rejects_unknown_section() {
    let dir = TempDir::new().expect("tempdir");
    folio_cli(&config_file(&dir))
        .args(["show", "blog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blog"));
}

#[test]
fn config_set_then_show() {
    let dir = TempDir::new().expect("tempdir");
    let config = config_file(&dir);

    folio_cli(&config)
        .args(["config", "set", "layout.breakpoint", "110"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved successfully."));

    let saved = fs::read_to_string(&config).expect("config written");
    assert!(saved.contains("breakpoint = 110"));

    folio_cli(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("breakpoint = 110"));
}

#[test]
fn config_show_json() {
    let dir = TempDir::new().expect("tempdir");
    let output = folio_cli(&config_file(&dir))
        .args(["config", "show", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(value["layout"]["lookahead_rows"], 4);
}

#[test]
fn config_set_unknown_key_fails_with_hint() {
    let dir = TempDir::new().expect("tempdir");
    folio_cli(&config_file(&dir))
        .args(["config", "set", "theme", "dark"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key 'theme'"))
        .stderr(predicate::str::contains("Hint: Valid keys"));
}

#[test]
fn config_set_rejects_non_http_endpoint() {
    let dir = TempDir::new().expect("tempdir");
    let config = config_file(&dir);
    folio_cli(&config)
        .args(["config", "set", "relay.endpoint", "ftp://relay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must start with http:// or https://"));
    assert!(!config.exists());
}

#[test]
fn contact_send_validates_before_network() {
    let dir = TempDir::new().expect("tempdir");
    folio_cli(&config_file(&dir))
        .env("FOLIO_RELAY_URL", "http://127.0.0.1:1/f/unreachable")
        .args([
            "contact",
            "send",
            "--name",
            "Ada",
            "--email",
            "ada-at-example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid email address"));
}

#[tokio::test(flavor = "multi_thread")]
async fn contact_send_posts_to_relay() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/f/test"))
        .and(body_partial_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "to": "hello@example.com"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("tempdir");
    folio_cli(&config_file(&dir))
        .env("FOLIO_RELAY_URL", format!("{}/f/test", server.uri()))
        .args([
            "contact",
            "send",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message sent successfully!"));
}

#[tokio::test(flavor = "multi_thread")]
async fn contact_send_reports_relay_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("tempdir");
    folio_cli(&config_file(&dir))
        .env("FOLIO_RELAY_URL", format!("{}/f/test", server.uri()))
        .args([
            "contact",
            "send",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contact me directly at hello@example.com"));
}

#[test]
fn contact_send_with_bad_endpoint_offers_direct_email() {
    let dir = TempDir::new().expect("tempdir");
    folio_cli(&config_file(&dir))
        .env("FOLIO_RELAY_URL", "ftp://relay")
        .args([
            "contact",
            "send",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contact me directly at hello@example.com"))
        .stderr(predicate::str::contains("relay.endpoint"));
}
