//! Integration tests for the tms CLI
//!
//! Each test runs the compiled binary with an isolated config directory.
//! Commands that talk to a server are pointed at a local mock server.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run tms with the given arguments against an isolated config directory
fn run_tms(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tms"))
        .args(args)
        .env("TMS_CONFIG_DIR", config_dir)
        .env_remove("TMS_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute tms command")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({e}): {}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

/// Config directory with a "mock" profile pointing at the given server
fn setup_server(server: &MockServer) -> TempDir {
    let config_dir = tempfile::tempdir().unwrap();
    let output = run_tms(
        &["server", "set", "mock", &server.uri(), "--token", "t0ken"],
        config_dir.path(),
    );
    assert!(
        output.status.success(),
        "server set failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    config_dir
}

mod server_profiles {
    use super::*;

    #[test]
    fn test_set_list_remove() {
        let config_dir = tempfile::tempdir().unwrap();

        let output = run_tms(
            &["server", "set", "prod", "https://tms.example.com", "--token", "secret"],
            config_dir.path(),
        );
        assert!(output.status.success());

        let output = run_tms(&["server", "list", "--json"], config_dir.path());
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert_eq!(json["servers"][0]["name"], "prod");
        assert_eq!(json["servers"][0]["has_token"], true);
        assert!(!String::from_utf8_lossy(&output.stdout).contains("secret"));

        let output = run_tms(&["server", "remove", "prod"], config_dir.path());
        assert!(output.status.success());

        let output = run_tms(&["server", "remove", "prod"], config_dir.path());
        assert_eq!(output.status.code(), Some(5));
    }

    #[test]
    fn test_set_rejects_relative_endpoint() {
        let config_dir = tempfile::tempdir().unwrap();
        let output = run_tms(&["server", "set", "bad", "tms.example.com"], config_dir.path());
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_unknown_server_is_not_found() {
        let config_dir = tempfile::tempdir().unwrap();
        let output = run_tms(&["project", "get", "nowhere", "p1"], config_dir.path());
        assert_eq!(output.status.code(), Some(5));
        assert!(String::from_utf8_lossy(&output.stderr).contains("nowhere"));
    }

    #[test]
    fn test_completions_bash() {
        let config_dir = tempfile::tempdir().unwrap();
        let output = run_tms(&["completions", "bash"], config_dir.path());
        assert!(
            output.status.success(),
            "{}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert!(String::from_utf8_lossy(&output.stdout).contains("tms"));
    }

    #[test]
    fn test_help_for_every_command_group() {
        let config_dir = tempfile::tempdir().unwrap();
        for group in ["server", "project", "template", "version", "permission"] {
            let output = run_tms(&[group, "--help"], config_dir.path());
            assert!(output.status.success(), "{group} --help failed");
        }
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        let config_dir = tempfile::tempdir().unwrap();
        let output = run_tms(&["project", "get"], config_dir.path());
        assert_eq!(output.status.code(), Some(2));
    }
}

mod remote {
    use super::*;

    const PROJECTS: &str = "/api/projectserver/v2/projects";

    #[tokio::test(flavor = "multi_thread")]
    async fn test_project_list_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PROJECTS))
            .and(header("Authorization", "Bearer t0ken"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Count": 12,
                "Items": [{"ProjectId": "p1", "Name": "Andrea", "Status": 2}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let config_dir = setup_server(&server);

        let output = run_tms(
            &["project", "list", "mock", "--limit", "5", "--json"],
            config_dir.path(),
        );
        assert!(
            output.status.success(),
            "{}",
            String::from_utf8_lossy(&output.stderr)
        );
        let json = stdout_json(&output);
        assert_eq!(json["Count"], 12);
        assert_eq!(json["Items"][0]["ProjectId"], "p1");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_project_download_writes_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{PROJECTS}/p1/download/SourceFiles")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04".to_vec()))
            .expect(1)
            .mount(&server)
            .await;
        let config_dir = setup_server(&server);
        let target = config_dir.path().join("out/p1.zip");
        let target_arg = target.to_string_lossy().to_string();

        let output = run_tms(
            &[
                "project", "download", "mock", "p1", "--type", "source", "-o", &target_arg,
                "--json",
            ],
            config_dir.path(),
        );
        assert!(output.status.success());
        assert_eq!(stdout_json(&output)["size_bytes"], 4);
        assert_eq!(std::fs::read(&target).unwrap(), b"PK\x03\x04");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_forbidden_maps_to_auth_exit_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/management/v2/permissions"))
            .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
            .mount(&server)
            .await;
        let config_dir = setup_server(&server);

        let output = run_tms(&["permission", "list", "mock", "--json"], config_dir.path());
        assert_eq!(output.status.code(), Some(4));

        let stderr: Value = serde_json::from_slice(&output.stderr).unwrap();
        assert!(stderr["error"].as_str().unwrap().contains("denied"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_version_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{PROJECTS}/fileversions/lf1")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"LanguageFileId": "lf1", "Version": 2},
                {"LanguageFileId": "lf1", "Version": 1}
            ])))
            .mount(&server)
            .await;
        let config_dir = setup_server(&server);

        let output = run_tms(&["version", "list", "mock", "lf1", "--json"], config_dir.path());
        assert!(output.status.success());
        let json = stdout_json(&output);
        assert_eq!(json[0]["Version"], 1);
        assert_eq!(json[1]["Version"], 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_version_download_defaults_to_latest() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{PROJECTS}/fileversions/lf1")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"LanguageFileId": "lf1", "Version": 1},
                {"LanguageFileId": "lf1", "Version": 3}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{PROJECTS}/p1/fileversions/download/lf1/3")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"<xliff/>".to_vec()))
            .expect(1)
            .mount(&server)
            .await;
        let config_dir = setup_server(&server);
        let target = config_dir.path().join("lf1.sdlxliff");
        let target_arg = target.to_string_lossy().to_string();

        let output = run_tms(
            &["version", "download", "mock", "p1", "lf1", "-o", &target_arg, "--json"],
            config_dir.path(),
        );
        assert!(
            output.status.success(),
            "{}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert_eq!(stdout_json(&output)["version"], 3);
        assert_eq!(std::fs::read(&target).unwrap(), b"<xliff/>");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_version_download_explicit_version() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{PROJECTS}/p1/fileversions/download/lf1/2")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"v2".to_vec()))
            .expect(1)
            .mount(&server)
            .await;
        let config_dir = setup_server(&server);
        let target = config_dir.path().join("v2.sdlxliff");
        let target_arg = target.to_string_lossy().to_string();

        let output = run_tms(
            &[
                "version", "download", "mock", "p1", "lf1", "--file-version", "2", "-o", &target_arg,
            ],
            config_dir.path(),
        );
        assert!(output.status.success());
        assert_eq!(std::fs::read(&target).unwrap(), b"v2");
    }
}
