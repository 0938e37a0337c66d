// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

use crate::models::Transaction;

/// A calendar month. Dashboard figures are always scoped to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Period { year, month })
    }

    pub fn current(today: NaiveDate) -> Self {
        Period {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parses `YYYY-MM`.
    pub fn parse(s: &str) -> Option<Self> {
        let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()?;
        Some(Self::current(d))
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Zero-based month number, as the transaction listing endpoint expects.
    pub fn month_index(&self) -> u32 {
        self.month - 1
    }

    pub fn contains(&self, dt: &NaiveDateTime) -> bool {
        dt.year() == self.year && dt.month() == self.month
    }

    pub fn contains_date(&self, d: &NaiveDate) -> bool {
        d.year() == self.year && d.month() == self.month
    }

    /// The listing endpoint filters on month number only, so records from the
    /// same month of another year must be dropped here.
    pub fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|t| self.contains(&t.date))
            .cloned()
            .collect()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
