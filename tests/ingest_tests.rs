// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde_json::json;
use spendwise::ingest::decode_records;
use spendwise::models::{GoalStatus, SavingsGoal, Transaction};

#[test]
fn malformed_records_are_rejected_individually() {
    let body = json!([
        {"id": 1, "amount": "12.50", "is_income": false, "date": "2024-03-05T10:00:00Z"},
        {"id": 2, "amount": "lots", "is_income": false, "date": "2024-03-05T10:00:00Z"},
        {"id": 3, "amount": 40, "is_income": true, "date": "2024-03-06", "category": 4},
        {"amount": "5", "is_income": false, "date": "2024-03-07"},
        {"id": 5, "amount": "5", "is_income": false, "date": "not a date"}
    ]);
    let out = decode_records::<Transaction>(body).unwrap();
    assert!(!out.is_clean());

    let ids: Vec<i64> = out.records.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(out.records[0].amount, "12.50".parse::<Decimal>().unwrap());
    assert_eq!(out.records[1].category, Some(4));
    assert_eq!(out.records[1].description, "");

    let rejected: Vec<(usize, Option<i64>)> = out.rejected.iter().map(|r| (r.index, r.id)).collect();
    assert_eq!(rejected, vec![(1, Some(2)), (3, None), (4, Some(5))]);
    assert!(out.rejected.iter().all(|r| !r.reason.is_empty()));
}

#[test]
fn data_wrapper_is_unwrapped() {
    let body = json!({"data": [
        {"id": 8, "amount": "1", "is_income": true, "date": "2024-01-01T00:00:00"}
    ]});
    let out = decode_records::<Transaction>(body).unwrap();
    assert!(out.is_clean());
    assert_eq!(out.records.len(), 1);
}

#[test]
fn non_list_bodies_are_errors() {
    assert!(decode_records::<Transaction>(json!({"detail": "nope"})).is_err());
    assert!(decode_records::<Transaction>(json!("hello")).is_err());
    assert!(decode_records::<Transaction>(json!(null)).is_err());
}

#[test]
fn goals_decode_with_optional_fields_missing() {
    let body = json!([
        {
            "id": 1,
            "name": "Bike",
            "target_amount": "1500.00",
            "monthly_contribution": "250.00",
            "status": "active"
        },
        {
            "id": 2,
            "name": "Trip",
            "target_amount": "900",
            "monthly_contribution": "100",
            "current_amount": "900",
            "deadline": "2025-06-01",
            "last_contribution_date": "2025-05-02",
            "status": "completed"
        },
        {"id": 3, "name": "Broken", "target_amount": "1", "monthly_contribution": "1", "status": "archived"}
    ]);
    let out = decode_records::<SavingsGoal>(body).unwrap();
    assert_eq!(out.records.len(), 2);
    assert_eq!(out.records[0].current_amount, Decimal::ZERO);
    assert_eq!(out.records[0].deadline, None);
    assert_eq!(out.records[1].status, GoalStatus::Completed);
    assert_eq!(out.rejected.len(), 1);
    assert_eq!(out.rejected[0].id, Some(3));
}
