//
//  cloudfoundry-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use common::*;

const PACKAGE: &str = "guid-9067cc41-b832-4de9-89a2-0987dab65e8e";

/// `cf` with an isolated configuration file and no ambient API settings.
fn cf(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cf").unwrap();
    cmd.env("CF_CONFIG", home.path().join("config.toml"))
        .env_remove("CF_API")
        .env_remove("CF_TOKEN")
        .env_remove("CF_DEBUG");
    cmd
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    cf(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cf version "));
}

#[test]
fn test_config_set_then_get() {
    let home = TempDir::new().unwrap();

    cf(&home)
        .args(["config", "set", "api", "https://api.example.com"])
        .assert()
        .success();

    cf(&home)
        .args(["config", "get", "api"])
        .assert()
        .success()
        .stdout("https://api.example.com\n");

    assert!(home.path().join("config.toml").is_file());
}

#[test]
fn test_config_list_masks_token() {
    let home = TempDir::new().unwrap();

    cf(&home)
        .args(["config", "set", "token", "super-secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("super-secret").not());

    cf(&home)
        .args(["config", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn test_config_path_honours_override() {
    let home = TempDir::new().unwrap();
    let expected = home.path().join("config.toml");

    cf(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_unknown_key_fails() {
    let home = TempDir::new().unwrap();
    cf(&home)
        .args(["config", "get", "editor"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_missing_argument_is_usage_error() {
    let home = TempDir::new().unwrap();
    cf(&home).args(["package", "get"]).assert().code(2);
}

#[test]
fn test_invalid_paging_never_reaches_the_network() {
    let home = TempDir::new().unwrap();
    cf(&home)
        .args(["package", "list", "--page", "0", "--api", "http://127.0.0.1:9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("page"));
}

#[test]
fn test_package_get_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", format!("/v3/packages/{}", PACKAGE).as_str())
        .match_header("authorization", auth_header().as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture("v3/packages/GET_id_response.json"))
        .expect(1)
        .create();

    let home = TempDir::new().unwrap();
    let output = cf(&home)
        .args(["package", "get", PACKAGE, "--json", "--token", TOKEN])
        .args(["--api", server.url().as_str()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["guid"], PACKAGE);

    mock.assert();
}

#[test]
fn test_platform_error_exit_code() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", format!("/v3/packages/{}", PACKAGE).as_str())
        .with_status(400)
        .with_body(error_body())
        .expect(1)
        .create();

    let home = TempDir::new().unwrap();
    cf(&home)
        .args(["package", "get", PACKAGE, "--token", TOKEN])
        .args(["--api", server.url().as_str()])
        .assert()
        .code(16)
        .stderr(predicate::str::contains("CF-MessageParseError"));

    mock.assert();
}

#[test]
fn test_not_found_exit_code() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("DELETE", "/v2/domains/missing")
        .with_status(404)
        .with_body(
            r#"{"code": 130002, "description": "The domain could not be found: missing", "error_code": "CF-DomainNotFound"}"#,
        )
        .expect(1)
        .create();

    let home = TempDir::new().unwrap();
    cf(&home)
        .args(["domain", "delete", "missing", "--token", TOKEN])
        .args(["--api", server.url().as_str()])
        .assert()
        .code(8);

    mock.assert();
}

#[test]
fn test_api_from_environment() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v2/domains")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(fixture("v2/domains/GET_response.json"))
        .expect(1)
        .create();

    let home = TempDir::new().unwrap();
    cf(&home)
        .args(["domain", "list"])
        .env("CF_API", server.url())
        .env("CF_TOKEN", TOKEN)
        .assert()
        .success()
        .stdout(predicate::str::contains("vcap.me"));

    mock.assert();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_download_leaves_no_file_behind() {
    let root = serve_raw(
        "HTTP/1.1 200 OK\r\n\
         content-type: application/octet-stream\r\n\
         content-length: 4096\r\n\
         \r\n\
         PK\x03\x04",
    )
    .await;

    let home = TempDir::new().unwrap();
    let output = home.path().join("bits.zip");

    cf(&home)
        .args(["package", "download", PACKAGE, "--token", TOKEN])
        .args(["--api", root.as_str()])
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1);

    assert!(!output.exists());
    assert!(!home.path().join("bits.zip.part").exists());
}

#[test]
fn test_download_writes_output_file() {
    let expected = std::fs::read(fixture_path("v3/packages/GET_id_download_response.bin")).unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", format!("/v3/packages/{}/download", PACKAGE).as_str())
        .with_status(200)
        .with_body(expected.clone())
        .expect(1)
        .create();

    let home = TempDir::new().unwrap();
    let output = home.path().join("bits.zip");

    cf(&home)
        .args(["package", "download", PACKAGE, "--json", "--token", TOKEN])
        .args(["--api", server.url().as_str()])
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read(&output).unwrap(), expected);
    assert!(!home.path().join("bits.zip.part").exists());
    mock.assert();
}
