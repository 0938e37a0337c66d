// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendwise::api::ApiClient;
use spendwise::cli;
use spendwise::commands::{Context, goals};
use spendwise::config::AppConfig;
use tempfile::tempdir;

fn offline_context() -> (Context, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let config = AppConfig::default();
    let ctx = Context {
        client: ApiClient::new(&config, None).unwrap(),
        config,
        session_path: dir.path().join("session.json"),
    };
    (ctx, dir)
}

#[test]
fn tx_add_parses_typed_arguments() {
    let m = cli::build_cli().get_matches_from([
        "spendwise",
        "tx",
        "add",
        "--amount",
        "12.50",
        "--kind",
        "expense",
        "--category",
        "4",
        "--force",
    ]);
    let (name, tx) = m.subcommand().unwrap();
    assert_eq!(name, "tx");
    let (name, add) = tx.subcommand().unwrap();
    assert_eq!(name, "add");
    assert_eq!(add.get_one::<String>("amount").unwrap(), "12.50");
    assert_eq!(*add.get_one::<i64>("category").unwrap(), 4);
    assert!(add.get_flag("force"));
}

#[test]
fn json_and_jsonl_conflict() {
    let res = cli::build_cli().try_get_matches_from(["spendwise", "goal", "list", "--json", "--jsonl"]);
    assert!(res.is_err());
}

#[test]
fn ids_must_be_numeric() {
    let res = cli::build_cli().try_get_matches_from(["spendwise", "tx", "rm", "--id", "seven"]);
    assert!(res.is_err());
    let res = cli::build_cli().try_get_matches_from(["spendwise", "limit", "rm"]);
    assert!(res.is_err());
}

#[test]
fn goal_estimate_runs_offline() {
    let (ctx, _dir) = offline_context();
    let m = cli::build_cli().get_matches_from([
        "spendwise",
        "goal",
        "estimate",
        "--target",
        "100000",
        "--monthly",
        "10000",
        "--start",
        "2024-01-01",
        "--deadline",
        "2024-06-30",
    ]);
    let (_, goal) = m.subcommand().unwrap();
    goals::handle(&ctx, goal).unwrap();
}

#[test]
fn goal_estimate_rejects_zero_contribution() {
    let (ctx, _dir) = offline_context();
    let m = cli::build_cli().get_matches_from([
        "spendwise",
        "goal",
        "estimate",
        "--target",
        "1000",
        "--monthly",
        "0",
    ]);
    let (_, goal) = m.subcommand().unwrap();
    let err = goals::handle(&ctx, goal).unwrap_err();
    assert!(err.to_string().contains("greater than 0"));
}

#[test]
fn logged_out_commands_fail_before_any_request() {
    let (ctx, _dir) = offline_context();
    let m = cli::build_cli().get_matches_from(["spendwise", "category", "list"]);
    let (_, sub) = m.subcommand().unwrap();
    let err = spendwise::commands::categories::handle(&ctx, sub).unwrap_err();
    assert!(err.to_string().contains("Not logged in"));
}
