// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use super::{Context, current_balance, report_rejected, today};
use crate::engine::{
    GoalProgress, MAX_ACTIVE_GOALS, can_add_active_goal, completion_meets_deadline,
    estimate_goal_completion, evaluate_goal_creation_confirmation, first_contribution,
    goal_progress, plan_monthly_contributions, required_monthly_for_deadline,
};
use crate::errors::ApiError;
use crate::models::{ContributionReport, GoalRequest, SavingsGoal};
use crate::utils::{
    fmt_pct, maybe_print_json, parse_amount, parse_date, parse_whole_amount, pretty_table,
};

pub fn handle(ctx: &Context, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ctx, sub)?,
        Some(("edit", sub)) => edit(ctx, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            ctx.client.delete_savings_goal(id)?;
            println!("Removed savings goal #{} and its contribution records", id);
        }
        Some(("list", sub)) => list(ctx, sub)?,
        Some(("estimate", sub)) => estimate(ctx, sub)?,
        Some(("contribute", sub)) => contribute(ctx, sub)?,
        _ => {}
    }
    Ok(())
}

fn opt_date(sub: &clap::ArgMatches, name: &str) -> Result<Option<NaiveDate>> {
    sub.get_one::<String>(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(parse_date)
        .transpose()
}

fn print_estimate(
    ctx: &Context,
    target: Decimal,
    monthly: Decimal,
    start: NaiveDate,
    deadline: Option<NaiveDate>,
) {
    let Some(est) = estimate_goal_completion(target, monthly, start) else {
        return;
    };
    println!(
        "Estimated completion: {} month(s), around {}",
        est.months_needed, est.completion_date
    );
    let Some(d) = deadline else {
        return;
    };
    if completion_meets_deadline(&est, d) {
        println!("On track for the {} deadline.", d);
        return;
    }
    match required_monthly_for_deadline(target, start, d) {
        Some(needed) => println!(
            "Off track: the {} deadline comes before the estimated completion; raise the monthly contribution to {} or more.",
            d,
            ctx.money(&needed)
        ),
        None => println!(
            "Off track: the {} deadline is less than a month away, so no monthly contribution can reach it.",
            d
        ),
    }
}

fn confirmation_hint(ctx: &Context, e: &ApiError) -> Option<String> {
    match e {
        ApiError::ConfirmationRequired(req) => Some(format!(
            "{}\nMonthly contribution {} is above a third of your balance ({} of {}). Re-run with --force to proceed.",
            req.message,
            ctx.money(&req.monthly_contribution),
            ctx.money(&req.one_third_balance),
            ctx.money(&req.current_balance)
        )),
        ApiError::PermissionRequired(guard) => Some(format!(
            "{}\nTotal contributions {} exceed a third of your balance ({} of {}). Re-run with --force to proceed.",
            guard.message,
            ctx.money(&guard.total_contribution),
            ctx.money(&guard.one_third_balance),
            ctx.money(&guard.current_balance)
        )),
        _ => None,
    }
}

fn add(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    if name.is_empty() {
        bail!("Goal name is required");
    }
    let target_amount = parse_whole_amount(sub.get_one::<String>("target").unwrap())?;
    let monthly_contribution = parse_whole_amount(sub.get_one::<String>("monthly").unwrap())?;
    let deadline = opt_date(sub, "deadline")?;
    let force = sub.get_flag("force");

    let goals = report_rejected("goal", ctx.client.savings_goals()?);
    if !can_add_active_goal(&goals) {
        bail!("You can only have up to {} active savings goals", MAX_ACTIVE_GOALS);
    }

    let balance = current_balance(ctx)?.balance;
    let advisory = evaluate_goal_creation_confirmation(balance, monthly_contribution);
    if advisory.requires_confirmation && !force {
        bail!(
            "Monthly contribution {} is above a third of your balance ({} of {}). This may affect your spending capacity. Re-run with --force to create it anyway.",
            ctx.money(&monthly_contribution),
            ctx.money(&advisory.one_third_balance),
            ctx.money(&balance)
        );
    }

    let req = GoalRequest {
        name,
        target_amount,
        monthly_contribution,
        deadline,
        force_create: force,
    };
    let saved = match ctx.client.create_savings_goal(&req) {
        Ok(s) => s,
        Err(e) => match confirmation_hint(ctx, &e) {
            Some(hint) => bail!(hint),
            None => return Err(e.into()),
        },
    };
    let deducted = saved
        .contribution_amount
        .unwrap_or_else(|| first_contribution(monthly_contribution, target_amount));
    info!(id = saved.goal.id, "savings goal created");
    println!(
        "Created savings goal '{}' (#{}). First contribution of {} has been deducted from your balance.",
        saved.goal.name,
        saved.goal.id,
        ctx.money(&deducted)
    );
    print_estimate(
        ctx,
        target_amount - deducted,
        monthly_contribution,
        today(),
        deadline,
    );
    Ok(())
}

fn edit(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let current = ctx.client.savings_goal(id)?;
    let name = sub
        .get_one::<String>("name")
        .map(|s| s.trim().to_string())
        .unwrap_or(current.name);
    if name.is_empty() {
        bail!("Goal name is required");
    }
    let req = GoalRequest {
        name,
        target_amount: sub
            .get_one::<String>("target")
            .map(|s| parse_whole_amount(s))
            .transpose()?
            .unwrap_or(current.target_amount),
        monthly_contribution: sub
            .get_one::<String>("monthly")
            .map(|s| parse_whole_amount(s))
            .transpose()?
            .unwrap_or(current.monthly_contribution),
        deadline: opt_date(sub, "deadline")?.or(current.deadline),
        force_create: sub.get_flag("force"),
    };
    let goal = match ctx.client.update_savings_goal(id, &req) {
        Ok(g) => g,
        Err(e) => match confirmation_hint(ctx, &e) {
            Some(hint) => bail!(hint),
            None => return Err(e.into()),
        },
    };
    println!("Updated savings goal '{}' (#{})", goal.name, goal.id);
    Ok(())
}

#[derive(Serialize)]
struct GoalRow<'a> {
    #[serde(flatten)]
    goal: &'a SavingsGoal,
    progress: GoalProgress,
}

fn list(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let goals = report_rejected("goal", ctx.client.savings_goals()?);
    let rows: Vec<GoalRow<'_>> = goals
        .iter()
        .map(|g| GoalRow {
            goal: g,
            progress: goal_progress(g),
        })
        .collect();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &rows)? {
        return Ok(());
    }
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.goal.id.to_string(),
                r.goal.name.clone(),
                r.goal.status.as_str().to_string(),
                format!(
                    "{} / {}",
                    ctx.money(&r.goal.current_amount),
                    ctx.money(&r.goal.target_amount)
                ),
                fmt_pct(&r.progress.progress_percentage),
                ctx.money(&r.goal.monthly_contribution),
                r.progress
                    .months_remaining
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "-".into()),
                r.goal.deadline.map(|d| d.to_string()).unwrap_or_default(),
                if r.goal.deadline.is_none() {
                    "-".into()
                } else if r.goal.is_on_track {
                    "yes".into()
                } else {
                    "no".into()
                },
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &[
                "Id", "Goal", "Status", "Saved", "Progress", "Monthly", "Months left", "Deadline",
                "On track"
            ],
            data
        )
    );
    Ok(())
}

fn estimate(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let target = parse_amount(sub.get_one::<String>("target").unwrap())?;
    let monthly = parse_amount(sub.get_one::<String>("monthly").unwrap())?;
    let start = opt_date(sub, "start")?.unwrap_or_else(today);
    let deadline = opt_date(sub, "deadline")?;
    if estimate_goal_completion(target, monthly, start).is_none() {
        bail!("Cannot estimate completion for these amounts");
    }
    print_estimate(ctx, target, monthly, start, deadline);
    Ok(())
}

fn print_report(ctx: &Context, report: &ContributionReport) {
    println!("{}", report.message);
    if report.contributions.is_empty() {
        return;
    }
    let data = report
        .contributions
        .iter()
        .map(|c| {
            vec![
                c.goal_name.clone(),
                ctx.money(&c.contribution_amount),
                ctx.money(&c.new_total),
                if c.completed { "completed" } else { "" }.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Goal", "Contributed", "Saved", ""], data)
    );
    println!("Total contributed: {}", ctx.money(&report.total_contributed));
}

fn contribute(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let force = sub.get_flag("force");
    let goals = report_rejected("goal", ctx.client.savings_goals()?);
    let balance = current_balance(ctx)?.balance;
    let plan = plan_monthly_contributions(&goals, balance, today());

    if plan.contributions.is_empty() {
        println!("Nothing to contribute this month.");
        return Ok(());
    }
    if plan.requires_permission && !force {
        bail!(
            "Total monthly contributions {} exceed a third of your balance ({} of {}). Re-run with --force to contribute anyway; this may leave a negative balance.",
            ctx.money(&plan.total_required),
            ctx.money(&plan.one_third_balance),
            ctx.money(&balance)
        );
    }

    let result = if force {
        ctx.client.force_contributions()
    } else {
        ctx.client.process_contributions()
    };
    let report = match result {
        Ok(r) => r,
        Err(e) => match confirmation_hint(ctx, &e) {
            Some(hint) => bail!(hint),
            None => return Err(e.into()),
        },
    };
    info!(count = report.contributions.len(), "contributions processed");
    print_report(ctx, &report);
    Ok(())
}
