//! Integration tests running the `xivapi` binary against a mock API.

use mockito::{Matcher, Server};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Run the binary with an isolated config directory and the API at `base_url`
fn run_xivapi(args: &[&str], base_url: &str, home: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_xivapi"))
        .args(args)
        .env("XIVAPI_BASE_URL", base_url)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run xivapi");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn base_url(server: &Server) -> String {
    format!("{}/api/", server.url())
}

#[test]
fn test_versions_output() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/version")
        .with_status(200)
        .with_body(r#"{"versions": [{"key": "abc123", "names": ["7.0", "latest"]}]}"#)
        .create();
    let home = TempDir::new().unwrap();

    let (stdout, _, ok) = run_xivapi(&["versions"], &base_url(&server), home.path());
    assert!(ok);
    assert_eq!(stdout, "abc123  7.0, latest\n");
}

#[test]
fn test_search_builds_query_from_flags() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "query".into(),
                r#"+Name~"Potion" -IsUntradable=true LevelItem>=50"#.into(),
            ),
            Matcher::UrlEncoded("sheets".into(), "Item".into()),
            Matcher::UrlEncoded("language".into(), "en".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"results": [{"score": 0.5, "sheet": "Item", "row_id": 4554, "fields": {"Name": "Potion"}}],
                "schema": "s", "version": "v"}"#,
        )
        .create();
    let home = TempDir::new().unwrap();

    let (stdout, stderr, ok) = run_xivapi(
        &[
            "search",
            "--sheets",
            "Item",
            "--must",
            "Name~Potion",
            "--must-not",
            "IsUntradable=true",
            "--should",
            "LevelItem>=50",
            "--language",
            "en",
        ],
        &base_url(&server),
        home.path(),
    );

    assert!(ok, "stderr: {}", stderr);
    mock.assert();
    assert_eq!(stdout, "Item#4554  0.500  Name=Potion\n");
}

#[test]
fn test_search_json_output() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("cursor".into(), "next-page".into()))
        .with_status(200)
        .with_body(r#"{"results": [], "schema": "s", "version": "v"}"#)
        .create();
    let home = TempDir::new().unwrap();

    let (stdout, _, ok) = run_xivapi(
        &["search", "--cursor", "next-page", "--json"],
        &base_url(&server),
        home.path(),
    );
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["results"], serde_json::json!([]));
    assert_eq!(value["schema"], "s");
}

#[test]
fn test_invalid_condition_fails() {
    let server = Server::new();
    let home = TempDir::new().unwrap();

    let (_, stderr, ok) = run_xivapi(
        &["search", "--sheets", "Item", "--must", "Name!=Potion"],
        &base_url(&server),
        home.path(),
    );
    assert!(!ok);
    assert!(stderr.contains("Unknown operator: !="), "stderr: {}", stderr);
}

#[test]
fn test_api_error_is_reported() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/sheet/Nope/1")
        .with_status(404)
        .with_body(r#"{"code": 404, "message": "unknown sheet"}"#)
        .create();
    let home = TempDir::new().unwrap();

    let (_, stderr, ok) = run_xivapi(&["row", "Nope", "1"], &base_url(&server), home.path());
    assert!(!ok);
    assert!(stderr.contains("API error (404): unknown sheet"), "stderr: {}", stderr);
}

#[test]
fn test_map_writes_file() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/asset/map/s1d1/00")
        .with_status(200)
        .with_body("jpeg-bytes")
        .create();
    let home = TempDir::new().unwrap();
    let out = home.path().join("map.jpg");

    let (stdout, _, ok) = run_xivapi(
        &["map", "s1d1", "00", "-o", out.to_str().unwrap()],
        &base_url(&server),
        home.path(),
    );
    assert!(ok);
    assert_eq!(std::fs::read(&out).unwrap(), b"jpeg-bytes");
    assert!(stdout.starts_with("Wrote 10 bytes"));
}

#[test]
fn test_config_shows_effective_values() {
    let server = Server::new();
    let home = TempDir::new().unwrap();
    let url = base_url(&server);

    let (stdout, _, ok) = run_xivapi(&["config", "--schema", "exdschema@2"], &url, home.path());
    assert!(ok);
    assert!(stdout.starts_with("Config file: "));
    assert!(stdout.contains(&format!("\"base_url\": \"{}\"", url)));
    assert!(stdout.contains("\"schema\": \"exdschema@2\""));
}

#[test]
fn test_config_save_keeps_env_base_url_out_of_file() {
    let server = Server::new();
    let home = TempDir::new().unwrap();
    let url = base_url(&server);

    let (stdout, stderr, ok) = run_xivapi(
        &["config", "--save", "--schema", "exdschema@2"],
        &url,
        home.path(),
    );
    assert!(ok, "stderr: {}", stderr);
    assert!(stdout.starts_with("Saved config to "));

    let saved = std::fs::read_to_string(home.path().join(".config/xivapi/config.json")).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(saved["base_url"], "https://v2.xivapi.com/api/");
    assert_eq!(saved["schema"], "exdschema@2");
}
