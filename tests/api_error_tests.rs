// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendwise::api::ApiClient;
use spendwise::config::AppConfig;
use spendwise::errors::ApiError;
use spendwise::models::HistoryFilter;

#[test]
fn unauthorized_ends_the_session() {
    let e = ApiError::classify(401, r#"{"detail": "Given token not valid"}"#);
    assert!(e.is_unauthorized());
}

#[test]
fn forbidden_and_not_found_keep_the_server_message() {
    match ApiError::classify(403, r#"{"error": "Premium feature"}"#) {
        ApiError::Forbidden(msg) => assert_eq!(msg, "Premium feature"),
        other => panic!("unexpected {:?}", other),
    }
    match ApiError::classify(404, r#"{"detail": "Not found."}"#) {
        ApiError::NotFound(msg) => assert_eq!(msg, "Not found."),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn goal_confirmation_payload_is_recognised() {
    let body = r#"{
        "requires_confirmation": true,
        "message": "This contribution exceeds 1/3 of your balance",
        "current_balance": "3000.00",
        "monthly_contribution": "1500.00",
        "one_third_balance": "1000.00"
    }"#;
    match ApiError::classify(400, body) {
        ApiError::ConfirmationRequired(req) => {
            assert_eq!(req.monthly_contribution, Decimal::from(1500));
            assert_eq!(req.one_third_balance, Decimal::from(1000));
            assert!(req.message.contains("1/3"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn contribution_permission_payload_is_recognised() {
    let body = r#"{
        "requires_permission": true,
        "message": "Insufficient balance",
        "current_balance": 900,
        "total_contribution": 600,
        "one_third_balance": 300
    }"#;
    match ApiError::classify(400, body) {
        ApiError::PermissionRequired(g) => {
            assert_eq!(g.total_contribution, Decimal::from(600));
            assert_eq!(g.current_balance, Decimal::from(900));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn field_errors_become_validation_messages() {
    match ApiError::classify(400, r#"{"username": ["A user with that username already exists."]}"#) {
        ApiError::Validation(msg) => {
            assert_eq!(msg, "username: A user with that username already exists.")
        }
        other => panic!("unexpected {:?}", other),
    }
    // confirmation flag with an incomplete payload is a plain validation error
    match ApiError::classify(400, r#"{"requires_confirmation": true, "error": "bad"}"#) {
        ApiError::Validation(msg) => assert_eq!(msg, "bad"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn other_statuses_fall_back_to_the_raw_body() {
    match ApiError::classify(502, "  Bad Gateway  ") {
        ApiError::Status { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn urls_are_rooted_under_api() {
    let cfg = AppConfig {
        api_base_url: "https://money.example.org/".into(),
        ..AppConfig::default()
    };
    let client = ApiClient::new(&cfg, None).unwrap();
    assert_eq!(
        client.url("savings-goals/3/"),
        "https://money.example.org/api/savings-goals/3/"
    );
    assert!(client.session().is_none());
}

#[test]
fn calls_needing_a_user_fail_without_a_session() {
    let client = ApiClient::new(&AppConfig::default(), None).unwrap();
    assert!(matches!(client.categories(), Err(ApiError::NotLoggedIn)));
}

#[test]
fn history_filter_sends_only_what_is_set() {
    let f = HistoryFilter {
        is_income: Some(false),
        category_id: Some(4),
        description: Some("coffee".into()),
        ..HistoryFilter::default()
    };
    assert_eq!(
        f.query_pairs(7),
        vec![
            ("user_id", "7".to_string()),
            ("description", "coffee".to_string()),
            ("is_income", "0".to_string()),
            ("category_id", "4".to_string()),
        ]
    );
}
