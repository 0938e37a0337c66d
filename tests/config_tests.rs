// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::json;
use spendwise::config::load_from;
use spendwise::models::LoginResponse;
use spendwise::session::Session;
use tempfile::tempdir;

#[test]
fn defaults_apply_without_a_file() {
    let dir = tempdir().unwrap();
    let cfg = load_from(&dir.path().join("config.toml"), None).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:8000/");
    assert_eq!(cfg.currency, "Ft");
    assert_eq!(cfg.timeout_secs, 15);
}

#[test]
fn file_values_are_read_and_url_normalised() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "api_base_url = \"https://money.example.org\"\ncurrency = \"EUR\"\n",
    )
    .unwrap();
    let cfg = load_from(&path, None).unwrap();
    assert_eq!(cfg.api_base_url, "https://money.example.org/");
    assert_eq!(cfg.currency, "EUR");
    assert_eq!(cfg.timeout_secs, 15);
}

#[test]
fn override_wins_unless_blank() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "api_base_url = \"https://a.example.org/\"\n").unwrap();

    let cfg = load_from(&path, Some("  http://10.0.0.2:9000 ".into())).unwrap();
    assert_eq!(cfg.api_base_url, "http://10.0.0.2:9000/");

    let cfg = load_from(&path, Some("   ".into())).unwrap();
    assert_eq!(cfg.api_base_url, "https://a.example.org/");
}

#[test]
fn broken_config_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "timeout_secs = \"soon\"\n").unwrap();
    assert!(load_from(&path, None).is_err());
}

#[test]
fn session_round_trips_and_clears() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");
    assert_eq!(Session::load_from(&path).unwrap(), None);

    let resp: LoginResponse = serde_json::from_value(json!({
        "access": "acc",
        "refresh": "ref",
        "user": {"id": 12, "name": "Anna"}
    }))
    .unwrap();
    let session = Session::from_login(resp);
    session.save_to(&path).unwrap();
    assert_eq!(Session::load_from(&path).unwrap(), Some(session.clone()));
    assert_eq!(session.user_id, 12);

    Session::clear_at(&path).unwrap();
    assert!(!path.exists());
    // clearing twice is fine
    Session::clear_at(&path).unwrap();
}

#[test]
fn corrupt_session_file_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(Session::load_from(&path).is_err());
}
