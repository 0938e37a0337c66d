// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendwise::commands::limits::status_label;
use spendwise::engine::{LimitUsage, LimitVerdict, evaluate_category_limit, predictive_verdict};
use spendwise::models::{CategoryLimit, CategorySpending, LimitStatus};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn usage(spent: &str, limit: &str) -> LimitUsage {
    LimitUsage {
        limit_amount: d(limit),
        total_spent: d(spent),
    }
}

#[test]
fn below_warning_band() {
    let e = evaluate_category_limit(&usage("750", "1000"), None);
    assert_eq!(e.percentage, d("75"));
    assert_eq!(e.remaining, d("250"));
    assert!(!e.warning);
    assert!(!e.exceeded);
    assert_eq!(status_label(&e), "ok");
}

#[test]
fn proposed_amount_pushes_into_warning() {
    let e = evaluate_category_limit(&usage("750", "1000"), Some(d("100")));
    assert_eq!(e.percentage, d("85"));
    assert_eq!(e.remaining, d("150"));
    assert!(e.warning);
    assert!(!e.exceeded);
    assert_eq!(status_label(&e), "warning");
}

#[test]
fn warning_starts_at_exactly_eighty_percent() {
    let e = evaluate_category_limit(&usage("800", "1000"), None);
    assert!(e.warning);
    let e = evaluate_category_limit(&usage("799.99", "1000"), None);
    assert!(!e.warning);
}

#[test]
fn spending_equal_to_the_limit_is_not_exceeded() {
    let e = evaluate_category_limit(&usage("1000", "1000"), None);
    assert_eq!(e.percentage, d("100"));
    assert_eq!(e.remaining, Decimal::ZERO);
    assert!(!e.exceeded);
    assert!(e.warning);
}

#[test]
fn one_over_the_limit_is_exceeded_without_warning() {
    let e = evaluate_category_limit(&usage("1001", "1000"), None);
    assert!(e.exceeded);
    assert!(!e.warning);
    assert_eq!(e.remaining, d("-1"));
    assert_eq!(e.percentage, d("100.1"));
    assert_eq!(status_label(&e), "exceeded");
}

#[test]
fn percentage_is_not_capped() {
    let e = evaluate_category_limit(&usage("500", "200"), None);
    assert_eq!(e.percentage, d("250"));
}

#[test]
fn zero_limit_reports_zero_percent() {
    let e = evaluate_category_limit(&usage("0", "0"), None);
    assert_eq!(e.percentage, Decimal::ZERO);
    assert!(!e.exceeded);

    let e = evaluate_category_limit(&usage("5", "0"), None);
    assert_eq!(e.percentage, Decimal::ZERO);
    assert!(e.exceeded);
}

#[test]
fn usage_from_limit_without_spending_is_zero() {
    let limit = CategoryLimit {
        id: 3,
        category: 7,
        category_name: Some("Food".into()),
        limit_amount: d("400"),
        current_spending: None,
    };
    assert_eq!(LimitUsage::from_limit(&limit), usage("0", "400"));

    let limit = CategoryLimit {
        current_spending: Some(LimitStatus {
            total_spent: d("120"),
            remaining: d("280"),
            percentage: d("30"),
            exceeded: false,
            warning: false,
        }),
        ..limit
    };
    assert_eq!(LimitUsage::from_limit(&limit), usage("120", "400"));
}

#[test]
fn usage_from_spending_requires_a_configured_limit() {
    let mut s = CategorySpending {
        category_id: Some(7),
        category_name: Some("Food".into()),
        has_limit: false,
        total_spent: d("50"),
        limit_amount: None,
    };
    assert!(LimitUsage::from_spending(&s).is_none());

    s.has_limit = true;
    assert!(LimitUsage::from_spending(&s).is_none());

    s.limit_amount = Some(d("60"));
    assert_eq!(LimitUsage::from_spending(&s), Some(usage("50", "60")));
}

#[test]
fn pending_expense_over_the_limit_is_blocked_unless_forced() {
    let e = evaluate_category_limit(&usage("950", "1000"), Some(d("100")));
    assert_eq!(predictive_verdict(&e, false), LimitVerdict::Blocked);
    assert_eq!(predictive_verdict(&e, true), LimitVerdict::Forced);
}

#[test]
fn pending_expense_in_the_warning_band_warns() {
    let e = evaluate_category_limit(&usage("750", "1000"), Some(d("100")));
    assert_eq!(predictive_verdict(&e, false), LimitVerdict::Warn);
    // reaching the limit exactly is still allowed
    let e = evaluate_category_limit(&usage("900", "1000"), Some(d("100")));
    assert_eq!(predictive_verdict(&e, false), LimitVerdict::Warn);
}

#[test]
fn pending_expense_well_below_the_limit_proceeds() {
    let e = evaluate_category_limit(&usage("100", "1000"), Some(d("50")));
    assert_eq!(predictive_verdict(&e, false), LimitVerdict::Proceed);
    assert_eq!(predictive_verdict(&e, true), LimitVerdict::Proceed);
}
