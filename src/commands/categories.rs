// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use super::{Context, report_rejected};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(ctx: &Context, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            if name.is_empty() {
                bail!("Name is required");
            }
            let description = sub
                .get_one::<String>("description")
                .map(|s| s.trim())
                .unwrap_or("");
            let c = ctx.client.create_category(name, description)?;
            println!("Added category '{}' (id {})", c.name, c.id);
        }
        Some(("list", sub)) => {
            let cats = report_rejected("category", ctx.client.categories()?);
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &cats)? {
                let rows = cats
                    .iter()
                    .map(|c| {
                        vec![
                            c.id.to_string(),
                            c.name.clone(),
                            c.description.clone().unwrap_or_default(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Id", "Category", "Description"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}
