// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendwise::engine::{Period, UNCATEGORIZED, spend_by_category};
use spendwise::models::{Category, Transaction};
use spendwise::utils::{
    ensure_whole, fmt_money, fmt_pct, parse_amount, parse_datetime, parse_kind, parse_month,
    parse_whole_amount,
};

fn d(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(id: i64, ymd: (i32, u32, u32), amount: &str, is_income: bool, category: Option<i64>) -> Transaction {
    Transaction {
        id,
        user: Some(1),
        category,
        amount: d(amount),
        is_income,
        date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
        description: String::new(),
    }
}

fn cat(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.into(),
        description: None,
    }
}

#[test]
fn parses_and_prints_months() {
    let p = Period::parse("2024-02").unwrap();
    assert_eq!(p, Period::new(2024, 2).unwrap());
    assert_eq!(p.to_string(), "2024-02");
    assert_eq!((p.year(), p.month()), (2024, 2));
    assert_eq!(p.month_index(), 1);
    assert_eq!(Period::parse("2024-01").unwrap().month_index(), 0);
    assert_eq!(p.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

    assert!(Period::parse("2024-13").is_none());
    assert!(Period::parse("March").is_none());
    assert!(Period::new(2024, 0).is_none());
    assert!(parse_month(" 2024-12 ").is_ok());
    assert!(parse_month("12/2024").is_err());
}

#[test]
fn current_period_follows_today() {
    let today = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    assert_eq!(Period::current(today), Period::new(2025, 12).unwrap());
}

#[test]
fn filter_drops_same_month_of_other_years() {
    let txs = vec![
        tx(1, (2024, 3, 1), "10", false, None),
        tx(2, (2023, 3, 15), "20", false, None),
        tx(3, (2024, 4, 1), "30", false, None),
        tx(4, (2024, 3, 31), "40", true, None),
    ];
    let kept: Vec<i64> = Period::new(2024, 3)
        .unwrap()
        .filter(&txs)
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(kept, vec![1, 4]);
}

#[test]
fn breakdown_groups_by_category_largest_first() {
    let cats = vec![cat(1, "Food"), cat(2, "Rent"), cat(3, "Salary")];
    let txs = vec![
        tx(1, (2024, 3, 1), "25.50", false, Some(1)),
        tx(2, (2024, 3, 2), "700", false, Some(2)),
        tx(3, (2024, 3, 3), "14.50", false, Some(1)),
        tx(4, (2024, 3, 4), "5", false, None),
        tx(5, (2024, 3, 5), "12", false, Some(42)),
        tx(6, (2024, 3, 6), "300", true, Some(3)),
        tx(7, (2024, 3, 7), "-99", false, Some(1)),
    ];
    let b = spend_by_category(&txs, &cats);

    let expenses: Vec<(&str, Decimal)> = b
        .expenses
        .iter()
        .map(|c| (c.name.as_str(), c.amount))
        .collect();
    assert_eq!(
        expenses,
        vec![
            ("Rent", d("700")),
            ("Food", d("40")),
            ("Category #42", d("12")),
            (UNCATEGORIZED, d("5")),
        ]
    );
    assert_eq!(b.income.len(), 1);
    assert_eq!(b.income[0].name, "Salary");
    assert_eq!(b.income[0].category_id, Some(3));
}

#[test]
fn amounts_must_be_positive() {
    assert_eq!(parse_amount(" 12.50 ").unwrap(), d("12.5"));
    assert!(parse_amount("0").is_err());
    assert!(parse_amount("-3").is_err());
    assert!(parse_amount("abc").is_err());
}

#[test]
fn kinds_map_to_income_flag() {
    assert!(parse_kind("Income").unwrap());
    assert!(!parse_kind("expense").unwrap());
    assert!(parse_kind("transfer").is_err());
}

#[test]
fn backend_timestamps_in_several_shapes() {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(10, 15, 0)
        .unwrap();
    assert_eq!(parse_datetime("2024-03-05T10:15:00Z"), Some(expected));
    assert_eq!(parse_datetime("2024-03-05T10:15:00+02:00"), Some(expected));
    assert_eq!(parse_datetime("2024-03-05T10:15:00"), Some(expected));
    assert_eq!(parse_datetime("2024-03-05 10:15:00"), Some(expected));
    assert_eq!(
        parse_datetime("2024-03-05"),
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(0, 0, 0)
    );
    assert_eq!(parse_datetime("yesterday"), None);
}

#[test]
fn money_and_percent_formatting() {
    assert_eq!(fmt_money(&d("1234.5"), "Ft"), "1234.50 Ft");
    assert_eq!(fmt_money(&d("-3"), "EUR"), "-3.00 EUR");
    assert_eq!(fmt_pct(&d("85")), "85.00%");
    assert_eq!(fmt_pct(&d("33.3333")), "33.33%");
}

#[test]
fn backend_amounts_are_whole_units() {
    let a = parse_whole_amount("1000.00").unwrap();
    assert_eq!(a, d("1000"));
    assert_eq!(serde_json::to_string(&a).unwrap(), "\"1000\"");
    assert!(parse_whole_amount("1000.50").is_err());
    assert!(parse_whole_amount("0").is_err());
    assert_eq!(ensure_whole(d("0"), "0").unwrap(), Decimal::ZERO);
    assert!(ensure_whole(d("12.5"), "12.5").is_err());
}
