/*
[INPUT]:  Built global-tagging binary
[OUTPUT]: Test results for CLI argument handling and dispatch
[POS]:    Integration tests - command line front end
[UPDATE]: When CLI flags or output format change
*/

use std::process::{Command, Output};

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BINARY: &str = env!("CARGO_BIN_EXE_global-tagging");

fn run(args: &[&str]) -> Output {
    Command::new(BINARY)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to start global-tagging binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn help_lists_subcommands() {
    let output = run(&["--help"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for subcommand in ["list", "create", "delete", "delete-all", "attach", "detach"] {
        assert!(text.contains(subcommand), "missing {subcommand} in help:\n{text}");
    }
}

#[test]
fn dry_run_list_prints_request() {
    let output = run(&[
        "--dry-run",
        "--account-id",
        "acct-1",
        "list",
        "--limit",
        "5",
        "--providers",
        "ghost,ims",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("GET https://tags.global-search-tagging.cloud.ibm.com/v3/tags?"));
    assert!(text.contains("account_id=acct-1"));
    assert!(text.contains("limit=5"));
    assert!(text.contains("providers=ghost%2Cims"));
}

#[test]
fn dry_run_delete_uses_service_url_and_path() {
    let output = run(&[
        "--dry-run",
        "--service-url",
        "https://tags.example.com",
        "delete",
        "env:dev",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim(),
        "DELETE https://tags.example.com/v3/tags/env:dev"
    );
}

#[test]
fn dry_run_attach_prints_body() {
    let output = run(&[
        "--dry-run",
        "attach",
        "--resource",
        "crn:v1:a",
        "--tag",
        "env:dev",
        "--tag",
        "team:core",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    let (request_line, body) = text.split_once('\n').expect("request line and body");
    assert_eq!(
        request_line,
        "POST https://tags.global-search-tagging.cloud.ibm.com/v3/tags/attach"
    );

    let body: serde_json::Value = serde_json::from_str(body).expect("json body");
    assert_eq!(
        body,
        json!({
            "resources": [{ "resource_id": "crn:v1:a" }],
            "tag_names": ["env:dev", "team:core"],
        })
    );
}

#[test]
fn create_without_names_reports_missing_parameters() {
    let output = run(&["--dry-run", "create"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Missing required parameters: tag_names"));
}

#[test]
fn detach_without_resources_reports_missing_parameters() {
    let output = run(&["--dry-run", "detach", "--tag", "env:dev"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Missing required parameters: resources"));
}

#[tokio::test]
async fn list_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/tags"))
        .and(query_param("tag_type", "service"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "offset": 0,
            "limit": 100,
            "items": [{ "name": "owner:platform" }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = tokio::process::Command::new(BINARY)
        .args(["--service-url", &server.uri(), "--tag-type", "service", "list"])
        .env("RUST_LOG", "error")
        .env("GLOBAL_TAGGING_AUTH_TYPE", "noauth")
        .output()
        .await
        .expect("Failed to start global-tagging binary");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(result["items"][0]["name"], "owner:platform");
    assert_eq!(result["total_count"], 1);
}

#[test]
fn config_file_supplies_account_and_url() {
    let path = std::env::temp_dir().join(format!("global-tagging-cli-{}.yaml", std::process::id()));
    std::fs::write(
        &path,
        "service_url: https://file.example.com\naccount_id: acct-file\ntag_type: access\n",
    )
    .expect("write config");

    let output = run(&[
        "--dry-run",
        "--config",
        path.to_str().expect("utf-8 path"),
        "delete-all",
        "--provider",
        "ims",
    ]);
    let _ = std::fs::remove_file(&path);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.starts_with("DELETE https://file.example.com/v3/tags?"));
    assert!(text.contains("providers=ims"));
    assert!(text.contains("account_id=acct-file"));
    assert!(text.contains("tag_type=access"));
}

#[tokio::test]
async fn config_file_auth_type_keeps_environment_url() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/tags/env:dev"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "provider": "ghost", "is_error": false }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = std::env::temp_dir().join(format!(
        "global-tagging-cli-auth-{}.yaml",
        std::process::id()
    ));
    std::fs::write(&config, "auth_type: noauth\n").expect("write config");

    let output = tokio::process::Command::new(BINARY)
        .args(["--config", config.to_str().expect("utf-8 path"), "delete", "env:dev"])
        .env("RUST_LOG", "error")
        .env("GLOBAL_TAGGING_URL", server.uri())
        .env_remove("GLOBAL_TAGGING_AUTH_TYPE")
        .output()
        .await
        .expect("Failed to start global-tagging binary");
    let _ = std::fs::remove_file(&config);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let result: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(result["results"][0]["provider"], "ghost");
}
