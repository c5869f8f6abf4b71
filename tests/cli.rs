use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config file so the binary never touches the user's real config
fn create_config_file() -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    fs::write(file.path(), "[output]\npreview_bytes = 16\n").expect("Failed to write config");
    file
}

async fn setup_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/bad"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad request"))
        .mount(&server)
        .await;

    server
}

fn mget(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("mget").unwrap();
    cmd.arg("--config").arg(config.path());
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_all_ok_exits_zero() {
    let server = setup_server().await;
    let config = create_config_file();

    mget(&config)
        .arg(format!("{}/ok", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("(5 bytes) \"hello\""))
        .stdout(predicate::str::contains("1 fetched, 0 failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failure_exits_one() {
    let server = setup_server().await;
    let config = create_config_file();

    mget(&config)
        .arg(format!("{}/ok", server.uri()))
        .arg(format!("{}/bad", server.uri()))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Status code: 400"))
        .stdout(predicate::str::contains("1 fetched, 1 failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_report_from_input_file() {
    let server = setup_server().await;
    let config = create_config_file();
    let input = NamedTempFile::new().unwrap();
    fs::write(
        input.path(),
        format!("# batch\n{}/ok\n\n{}/bad\n", server.uri(), server.uri()),
    )
    .unwrap();

    let output = mget(&config)
        .arg("--json")
        .arg("--input")
        .arg(input.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["url"], format!("{}/bad", server.uri()));
    assert_eq!(entries[0]["status"], 400);
    assert_eq!(entries[1]["ok"], true);
    assert_eq!(entries[1]["bytes"], 5);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_output_dir_receives_payloads() {
    let server = setup_server().await;
    let config = create_config_file();
    let out = TempDir::new().unwrap();
    let url = format!("{}/ok", server.uri());

    mget(&config)
        .arg("--output-dir")
        .arg(out.path())
        .arg(&url)
        .assert()
        .success();

    let saved = out.path().join(mget::report::payload_file_name(&url));
    assert_eq!(fs::read(saved).unwrap(), b"hello");
}

#[test]
fn test_no_urls_exits_two() {
    let config = create_config_file();

    mget(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No URLs given"));
}

#[test]
fn test_bad_config_exits_two() {
    let config = NamedTempFile::new().unwrap();
    fs::write(config.path(), "[http]\ngzip = \"maybe\"\n").unwrap();

    mget(&config)
        .arg("http://127.0.0.1:9/")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
