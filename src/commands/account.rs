// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rust_decimal::Decimal;
use tracing::info;

use super::Context;
use crate::models::Account;
use crate::utils::{ensure_whole, parse_decimal, pretty_table};

pub fn handle(ctx: &Context, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(ctx)?,
        Some(("set-income", sub)) => set_income(ctx, sub)?,
        Some(("upgrade", sub)) => upgrade(ctx, sub)?,
        _ => show(ctx)?,
    }
    Ok(())
}

fn account_rows(ctx: &Context, a: &Account) -> Vec<Vec<String>> {
    vec![
        vec!["Username".into(), a.username.clone()],
        vec!["Name".into(), a.name.clone()],
        vec![
            "Income".into(),
            ctx.money(&a.income.unwrap_or(Decimal::ZERO)),
        ],
        vec![
            "Birthday".into(),
            a.birthday.map(|d| d.to_string()).unwrap_or_default(),
        ],
        vec![
            "Plan".into(),
            if a.is_premium { "premium" } else { "free" }.into(),
        ],
    ]
}

fn show(ctx: &Context) -> Result<()> {
    let account = ctx.client.account()?;
    println!("{}", pretty_table(&["Field", "Value"], account_rows(ctx, &account)));
    Ok(())
}

fn set_income(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let raw = sub.get_one::<String>("amount").unwrap();
    let amount = ensure_whole(parse_decimal(raw)?, raw)?;
    if amount.is_sign_negative() {
        bail!("Income cannot be negative");
    }
    let account = ctx.client.update_income(amount)?;
    info!(income = %amount, "income updated");
    println!(
        "Monthly income set to {}",
        ctx.money(&account.income.unwrap_or(amount))
    );
    Ok(())
}

/// Payment is settled by the backend; this only flips the flag once the
/// user has explicitly confirmed.
fn upgrade(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let current = ctx.client.account()?;
    if current.is_premium {
        println!("Premium is already active.");
        return Ok(());
    }
    if !sub.get_flag("confirm") {
        println!("Premium unlocks category limits and savings goals.");
        println!("Re-run with --confirm to activate it.");
        return Ok(());
    }
    let account = ctx.client.activate_premium()?;
    if !account.is_premium {
        bail!("The server did not activate premium");
    }
    info!("premium activated");
    println!("Premium activated. Category limits and savings goals are now available.");
    Ok(())
}
