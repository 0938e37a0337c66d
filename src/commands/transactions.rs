// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use serde::Serialize;
use std::collections::HashMap;
use tracing::info;

use super::{Context, report_rejected, today};
use crate::engine::{
    LimitUsage, LimitVerdict, Period, UNCATEGORIZED, compute_balance, evaluate_category_limit,
    predictive_verdict,
};
use crate::errors::ApiError;
use crate::models::{Category, HistoryFilter, NewTransaction, Transaction, TransactionPatch};
use crate::utils::{
    fmt_pct, maybe_print_json, parse_date, parse_decimal, parse_kind, parse_month,
    parse_whole_amount, pretty_table,
};

pub fn handle(ctx: &Context, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ctx, sub)?,
        Some(("edit", sub)) => edit(ctx, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            ctx.client.delete_transaction(id)?;
            println!("Removed transaction #{}", id);
        }
        Some(("list", sub)) => list(ctx, sub)?,
        Some(("history", sub)) => history(ctx, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_whole_amount(sub.get_one::<String>("amount").unwrap())?;
    let is_income = parse_kind(sub.get_one::<String>("kind").unwrap())?;
    let category = sub.get_one::<i64>("category").copied();
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    let user = ctx
        .client
        .session()
        .map(|s| s.user_id)
        .ok_or(ApiError::NotLoggedIn)?;

    // Predictive check against the category limit before anything is sent
    if let (false, Some(cat)) = (is_income, category) {
        let spending = ctx.client.category_spending(cat)?;
        if let Some(usage) = spending.as_ref().and_then(LimitUsage::from_spending) {
            let eval = evaluate_category_limit(&usage, Some(amount));
            match predictive_verdict(&eval, sub.get_flag("force")) {
                LimitVerdict::Blocked => bail!(
                    "This expense would exceed the category limit: {} spent of {} ({}). Re-run with --force to record it anyway.",
                    ctx.money(&(usage.total_spent + amount)),
                    ctx.money(&usage.limit_amount),
                    fmt_pct(&eval.percentage)
                ),
                LimitVerdict::Forced => eprintln!(
                    "warning: recording over the category limit ({} of {})",
                    fmt_pct(&eval.percentage),
                    ctx.money(&usage.limit_amount)
                ),
                LimitVerdict::Warn => eprintln!(
                    "warning: this expense brings you to {} of the category limit",
                    fmt_pct(&eval.percentage)
                ),
                LimitVerdict::Proceed => {}
            }
        }
    }

    let saved = ctx.client.create_transaction(&NewTransaction {
        user,
        category,
        amount,
        description,
        is_income,
    })?;
    info!(id = saved.transaction.id, "transaction recorded");
    println!(
        "Recorded {} {} (#{})",
        if is_income { "income" } else { "expense" },
        ctx.money(&amount),
        saved.transaction.id
    );
    if let Some(check) = saved.limit_check {
        if check.exceeded {
            println!(
                "Limit exceeded: {} spent of {} ({} over)",
                ctx.money(&check.total_spent),
                ctx.money(&check.limit_amount),
                ctx.money(&(-check.remaining))
            );
        } else if check.warning {
            println!(
                "Heads up: {} of the limit used, {} remaining",
                fmt_pct(&check.percentage),
                ctx.money(&check.remaining)
            );
        }
    }
    Ok(())
}

fn edit(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let patch = TransactionPatch {
        category: sub.get_one::<i64>("category").copied(),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_whole_amount(s))
            .transpose()?,
        description: sub
            .get_one::<String>("description")
            .map(|s| s.trim().to_string()),
        is_income: sub
            .get_one::<String>("kind")
            .map(|s| parse_kind(s))
            .transpose()?,
    };
    if patch.is_empty() {
        bail!("Nothing to change; pass at least one of --amount, --kind, --category, --description");
    }
    let before = ctx.client.transaction(id)?;
    let tx = ctx.client.update_transaction(id, &patch)?;
    info!(id, "transaction updated");
    if before.amount != tx.amount {
        println!(
            "Updated transaction #{} ({} -> {})",
            tx.id,
            ctx.money(&before.amount),
            ctx.money(&tx.amount)
        );
    } else {
        println!("Updated transaction #{} ({})", tx.id, ctx.money(&tx.amount));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub kind: String,
    pub amount: String,
    pub category: String,
    pub description: String,
}

/// Display rows, newest first. Expenses carry a leading minus.
pub fn rows_for(transactions: &[Transaction], categories: &[Category]) -> Vec<TransactionRow> {
    let names: HashMap<i64, &str> = categories.iter().map(|c| (c.id, c.name.as_str())).collect();
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    sorted
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.format("%Y-%m-%d %H:%M").to_string(),
            kind: if t.is_income { "income" } else { "expense" }.to_string(),
            amount: if t.is_income {
                format!("{:.2}", t.amount)
            } else {
                format!("-{:.2}", t.amount)
            },
            category: match t.category {
                Some(id) => names
                    .get(&id)
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| format!("#{}", id)),
                None => UNCATEGORIZED.to_string(),
            },
            description: t.description.clone(),
        })
        .collect()
}

fn print_rows(rows: Vec<TransactionRow>) {
    let data = rows
        .into_iter()
        .map(|r| vec![r.id.to_string(), r.date, r.kind, r.amount, r.category, r.description])
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Date", "Kind", "Amount", "Category", "Description"], data)
    );
}

fn list(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let period = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => Period::current(today()),
    };
    let txs = period.filter(&report_rejected("transaction", ctx.client.transactions(period)?));
    let cats = report_rejected("category", ctx.client.categories()?);
    let rows = rows_for(&txs, &cats);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    print_rows(rows);

    let account = ctx.client.account()?;
    let summary = compute_balance(&account, &txs);
    println!(
        "{}: income {} + {} extra, expenses {}, balance {}",
        period,
        ctx.money(&summary.monthly_income),
        ctx.money(&summary.extra_income),
        ctx.money(&summary.expenses),
        ctx.money(&summary.balance)
    );
    Ok(())
}

fn history(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let filter = HistoryFilter {
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        date_from: sub
            .get_one::<String>("from")
            .map(|s| parse_date(s))
            .transpose()?,
        date_to: sub
            .get_one::<String>("to")
            .map(|s| parse_date(s))
            .transpose()?,
        description: sub
            .get_one::<String>("description")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        is_income: sub
            .get_one::<String>("kind")
            .map(|s| parse_kind(s))
            .transpose()?,
        category_id: sub.get_one::<i64>("category").copied(),
    };
    if let (Some(from), Some(to)) = (filter.date_from, filter.date_to) {
        if from > to {
            bail!("--from {} is after --to {}", from, to);
        }
    }
    let txs = report_rejected("transaction", ctx.client.transaction_history(&filter)?);
    let cats = report_rejected("category", ctx.client.categories()?);
    let rows = rows_for(&txs, &cats);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        print_rows(rows);
    }
    Ok(())
}
