// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use std::path::Path;

use super::{Context, report_rejected, today};
use crate::commands::transactions::{TransactionRow, rows_for};
use crate::engine::Period;
use crate::utils::parse_month;

pub fn handle(ctx: &Context, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ctx, sub),
        _ => Ok(()),
    }
}

fn export_transactions(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim().to_string();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    let period = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => Period::current(today()),
    };

    let txs = period.filter(&report_rejected("transaction", ctx.client.transactions(period)?));
    let cats = report_rejected("category", ctx.client.categories()?);
    let rows = rows_for(&txs, &cats);
    write_rows(&rows, &fmt, Path::new(&out))?;
    println!("Exported {} transactions for {} to {}", rows.len(), period, out);
    Ok(())
}

/// Writes transaction rows as `csv` or pretty `json`.
pub fn write_rows(rows: &[TransactionRow], fmt: &str, out: &Path) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            for r in rows {
                wtr.serialize(r)?;
            }
            if rows.is_empty() {
                wtr.write_record(["id", "date", "kind", "amount", "category", "description"])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(rows)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    Ok(())
}
