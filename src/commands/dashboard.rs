// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::{Context, report_rejected, today};
use crate::commands::limits::status_label;
use crate::dashboard::{DashboardInput, DashboardSummary, summarize};
use crate::engine::{CategoryTotal, Period};
use crate::utils::{fmt_pct, maybe_print_json, parse_month, pretty_table};

pub fn handle(ctx: &Context, m: &clap::ArgMatches) -> Result<()> {
    let period = match m.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => Period::current(today()),
    };

    let account = ctx.client.account()?;
    let transactions = report_rejected("transaction", ctx.client.transactions(period)?);
    let categories = report_rejected("category", ctx.client.categories()?);
    let (goals, limits) = if account.is_premium {
        (
            report_rejected("goal", ctx.client.savings_goals()?),
            report_rejected("limit", ctx.client.category_limits()?),
        )
    } else {
        (Vec::new(), Vec::new())
    };

    let summary = summarize(
        &DashboardInput {
            account: &account,
            transactions: &transactions,
            goals: &goals,
            limits: &limits,
            categories: &categories,
        },
        period,
    );
    if maybe_print_json(m.get_flag("json"), false, &summary)? {
        return Ok(());
    }
    render(ctx, &summary);
    Ok(())
}

fn breakdown_rows(ctx: &Context, items: &[CategoryTotal]) -> Vec<Vec<String>> {
    items
        .iter()
        .map(|c| vec![c.name.clone(), ctx.money(&c.amount)])
        .collect()
}

pub fn render(ctx: &Context, s: &DashboardSummary) {
    let b = &s.balance;
    println!("Summary for {}", s.period);
    println!(
        "{}",
        pretty_table(
            &["", "Amount"],
            vec![
                vec!["Monthly income".into(), ctx.money(&b.monthly_income)],
                vec!["Extra income".into(), ctx.money(&b.extra_income)],
                vec!["Total income".into(), ctx.money(&b.total_income)],
                vec!["Expenses".into(), ctx.money(&b.expenses)],
                vec!["Balance".into(), ctx.money(&b.balance)],
                vec![
                    "Savings contributions".into(),
                    ctx.money(&s.savings.total_contributions)
                ],
                vec![
                    "Available after savings".into(),
                    ctx.money(&s.savings.available_after_savings)
                ],
            ],
        )
    );
    for skipped in &b.skipped {
        eprintln!(
            "warning: transaction #{} left out: {}",
            skipped.id, skipped.reason
        );
    }

    if !s.breakdown.expenses.is_empty() {
        println!("Expenses by category");
        println!(
            "{}",
            pretty_table(&["Category", "Spent"], breakdown_rows(ctx, &s.breakdown.expenses))
        );
    }
    if !s.breakdown.income.is_empty() {
        println!("Income by category");
        println!(
            "{}",
            pretty_table(&["Category", "Received"], breakdown_rows(ctx, &s.breakdown.income))
        );
    }
    if !s.limits.is_empty() {
        let data = s
            .limits
            .iter()
            .map(|l| {
                vec![
                    l.category.clone(),
                    ctx.money(&l.limit_amount),
                    fmt_pct(&l.evaluation.percentage),
                    ctx.money(&l.evaluation.remaining),
                    status_label(&l.evaluation).to_string(),
                ]
            })
            .collect();
        println!("Category limits");
        println!(
            "{}",
            pretty_table(&["Category", "Limit", "Used", "Remaining", "Status"], data)
        );
    }
}
