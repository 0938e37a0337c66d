// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod account;
pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod exporter;
pub mod goals;
pub mod limits;
pub mod transactions;

use std::path::PathBuf;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::engine::{BalanceSummary, Period, compute_balance};
use crate::ingest::Ingested;

/// Everything a command handler needs, built once in `main`.
pub struct Context {
    pub client: ApiClient,
    pub config: AppConfig,
    pub session_path: PathBuf,
}

impl Context {
    pub fn money(&self, d: &rust_decimal::Decimal) -> String {
        crate::utils::fmt_money(d, &self.config.currency)
    }
}

/// Unwraps an ingested list, telling the user about records that were dropped.
pub(crate) fn report_rejected<T>(what: &str, ingested: Ingested<T>) -> Vec<T> {
    for r in &ingested.rejected {
        match r.id {
            Some(id) => eprintln!("warning: skipped {} #{}: {}", what, id, r.reason),
            None => eprintln!("warning: skipped {} at position {}: {}", what, r.index, r.reason),
        }
    }
    ingested.records
}

pub(crate) fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

/// Fetches the account and this month's transactions and computes the
/// balance from them.
pub(crate) fn current_balance(ctx: &Context) -> anyhow::Result<BalanceSummary> {
    let period = Period::current(today());
    let account = ctx.client.account()?;
    let txs = period.filter(&report_rejected(
        "transaction",
        ctx.client.transactions(period)?,
    ));
    Ok(compute_balance(&account, &txs))
}
