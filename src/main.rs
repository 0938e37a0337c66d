// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use spendwise::api::ApiClient;
use spendwise::commands::{self, Context};
use spendwise::errors::ApiError;
use spendwise::session::Session;
use spendwise::{cli, config};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = config::load()?;
    let session_path = Session::default_path()?;
    let session = Session::load_from(&session_path)?;
    let client = ApiClient::new(&config, session)?;
    let mut ctx = Context {
        client,
        config,
        session_path,
    };

    let result = match matches.subcommand() {
        Some(("register", sub)) => commands::auth::register(&ctx, sub),
        Some(("login", sub)) => commands::auth::login(&mut ctx, sub),
        Some(("logout", _)) => commands::auth::logout(&mut ctx),
        Some(("account", sub)) => commands::account::handle(&ctx, sub),
        Some(("category", sub)) => commands::categories::handle(&ctx, sub),
        Some(("tx", sub)) => commands::transactions::handle(&ctx, sub),
        Some(("limit", sub)) => commands::limits::handle(&ctx, sub),
        Some(("goal", sub)) => commands::goals::handle(&ctx, sub),
        Some(("dashboard", sub)) => commands::dashboard::handle(&ctx, sub),
        Some(("export", sub)) => commands::exporter::handle(&ctx, sub),
        _ => {
            cli::build_cli().print_help()?;
            println!();
            Ok(())
        }
    };

    // A rejected token ends the session
    if let Err(ref e) = result {
        if e.downcast_ref::<ApiError>().is_some_and(ApiError::is_unauthorized) {
            warn!("access token rejected, clearing stored session");
            Session::clear_at(&ctx.session_path)?;
        }
    }
    result
}
