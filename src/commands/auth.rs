// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use tracing::info;

use super::Context;
use crate::models::{Credentials, NewAccount};
use crate::session::Session;
use crate::utils::{ensure_whole, parse_date, parse_decimal};

pub fn register(ctx: &Context, sub: &clap::ArgMatches) -> Result<()> {
    let username = sub.get_one::<String>("username").unwrap().trim().to_string();
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let raw_income = sub.get_one::<String>("income").unwrap();
    let income = ensure_whole(parse_decimal(raw_income)?, raw_income)?;
    let birthday = parse_date(sub.get_one::<String>("birthday").unwrap())?;
    let password = sub.get_one::<String>("password").unwrap().to_string();
    if username.is_empty() || name.is_empty() {
        bail!("Username and name are required");
    }
    if income.is_sign_negative() {
        bail!("Income cannot be negative");
    }
    let account = NewAccount {
        username,
        name,
        income,
        birthday,
        repassword: password.clone(),
        password,
    };
    ctx.client.register(&account)?;
    println!("Registered '{}'. You can now log in.", account.username);
    Ok(())
}

pub fn login(ctx: &mut Context, sub: &clap::ArgMatches) -> Result<()> {
    let creds = Credentials {
        username: sub.get_one::<String>("username").unwrap().trim().to_string(),
        password: sub.get_one::<String>("password").unwrap().to_string(),
    };
    let session = ctx.client.login(&creds)?;
    session.save_to(&ctx.session_path)?;
    info!(user_id = session.user_id, "logged in");
    println!("Welcome, {}!", session.name);
    ctx.client.set_session(Some(session));
    Ok(())
}

pub fn logout(ctx: &mut Context) -> Result<()> {
    Session::clear_at(&ctx.session_path)?;
    ctx.client.set_session(None);
    println!("Logged out.");
    Ok(())
}
