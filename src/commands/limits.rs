// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::{Context, report_rejected};
use crate::engine::{LimitEvaluation, LimitUsage, evaluate_category_limit};
use crate::models::NewCategoryLimit;
use crate::utils::{fmt_pct, maybe_print_json, parse_amount, pretty_table};

pub fn handle(ctx: &Context, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(ctx, sub)?,
        Some(("list", sub)) => list(ctx, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            ctx.client.delete_category_limit(id)?;
            println!("Removed limit #{}", id);
        }
        Some(("check", sub)) => check(ctx, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn status_label(eval: &LimitEvaluation) -> &'static str {
    if eval.exceeded {
        "exceeded"
    } else if eval.warning {
        "warning"
    } else {
        "ok"
    }
}

fn set(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let category = *sub.get_one::<i64>("category").unwrap();
    let limit_amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let existing = report_rejected("limit", ctx.client.category_limits()?)
        .into_iter()
        .find(|l| l.category == category);
    let limit = match existing {
        Some(l) => ctx.client.update_category_limit(l.id, limit_amount)?,
        None => ctx.client.set_category_limit(&NewCategoryLimit {
            category,
            limit_amount,
        })?,
    };
    println!(
        "Limit of {} set for category #{} (limit #{})",
        ctx.money(&limit.limit_amount),
        limit.category,
        limit.id
    );
    Ok(())
}

#[derive(Serialize)]
struct LimitRow {
    id: i64,
    category_id: i64,
    category: String,
    limit_amount: rust_decimal::Decimal,
    spent: rust_decimal::Decimal,
    #[serde(flatten)]
    evaluation: LimitEvaluation,
}

fn list(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let limits = report_rejected("limit", ctx.client.category_limits()?);
    let rows: Vec<LimitRow> = limits
        .iter()
        .map(|l| {
            let usage = LimitUsage::from_limit(l);
            LimitRow {
                id: l.id,
                category_id: l.category,
                category: l
                    .category_name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", l.category)),
                limit_amount: l.limit_amount,
                spent: usage.total_spent,
                evaluation: evaluate_category_limit(&usage, None),
            }
        })
        .collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    if rows.is_empty() {
        println!("No category limits (limits require premium).");
        return Ok(());
    }
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.id.to_string(),
                r.category.clone(),
                ctx.money(&r.limit_amount),
                ctx.money(&r.spent),
                ctx.money(&r.evaluation.remaining),
                fmt_pct(&r.evaluation.percentage),
                status_label(&r.evaluation).to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Id", "Category", "Limit", "Spent", "Remaining", "Used", "Status"],
            data
        )
    );
    Ok(())
}

fn check(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let category = *sub.get_one::<i64>("category").unwrap();
    let proposed = sub
        .get_one::<String>("amount")
        .map(|s| parse_amount(s))
        .transpose()?;
    let Some(spending) = ctx.client.category_spending(category)? else {
        println!("No limit applies (limits require premium).");
        return Ok(());
    };
    let name = spending
        .category_name
        .clone()
        .unwrap_or_else(|| format!("#{}", category));
    let Some(usage) = LimitUsage::from_spending(&spending) else {
        println!(
            "{}: no limit set, {} spent this month",
            name,
            ctx.money(&spending.total_spent)
        );
        return Ok(());
    };
    let eval = evaluate_category_limit(&usage, proposed);
    println!(
        "{}: {} of {} used, {} remaining [{}]",
        name,
        fmt_pct(&eval.percentage),
        ctx.money(&usage.limit_amount),
        ctx.money(&eval.remaining),
        status_label(&eval)
    );
    Ok(())
}
