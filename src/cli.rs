// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn id_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .required(true)
        .value_parser(value_parser!(i64))
        .help(help)
}

fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help)
}

fn req(name: &'static str, help: &'static str) -> Arg {
    opt(name, help).required(true)
}

fn force_flag(help: &'static str) -> Arg {
    Arg::new("force")
        .long("force")
        .action(ArgAction::SetTrue)
        .help(help)
}

pub fn build_cli() -> Command {
    Command::new("spendwise")
        .version(clap::crate_version!())
        .about("Track expenses, category limits, and savings goals")
        .subcommand(
            Command::new("register")
                .about("Create an account")
                .arg(req("username", "Login name"))
                .arg(req("name", "Display name"))
                .arg(req("income", "Monthly income"))
                .arg(req("birthday", "YYYY-MM-DD"))
                .arg(req("password", "Password")),
        )
        .subcommand(
            Command::new("login")
                .about("Log in and store the session")
                .arg(req("username", "Login name"))
                .arg(req("password", "Password")),
        )
        .subcommand(Command::new("logout").about("Forget the stored session"))
        .subcommand(
            Command::new("account")
                .about("Account details")
                .subcommand(Command::new("show").about("Show account details"))
                .subcommand(
                    Command::new("set-income")
                        .about("Change the monthly income")
                        .arg(req("amount", "Monthly income")),
                )
                .subcommand(
                    Command::new("upgrade")
                        .about("Activate premium features")
                        .arg(
                            Arg::new("confirm")
                                .long("confirm")
                                .action(ArgAction::SetTrue)
                                .help("Confirm the upgrade"),
                        ),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(req("name", "Category name"))
                        .arg(opt("description", "Free text")),
                )
                .subcommand(json_flags(Command::new("list"))),
        )
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .arg(req("amount", "Amount (positive)"))
                        .arg(req("kind", "income|expense"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64))
                                .help("Category id"),
                        )
                        .arg(opt("description", "Free text"))
                        .arg(force_flag("Record even if it exceeds the category limit")),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(id_arg("id", "Transaction id"))
                        .arg(opt("amount", "New amount"))
                        .arg(opt("kind", "income|expense"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64))
                                .help("Category id"),
                        )
                        .arg(opt("description", "Free text")),
                )
                .subcommand(Command::new("rm").arg(id_arg("id", "Transaction id")))
                .subcommand(json_flags(
                    Command::new("list").arg(opt("month", "YYYY-MM (default: current)")),
                ))
                .subcommand(json_flags(
                    Command::new("history")
                        .arg(opt("from", "YYYY-MM-DD"))
                        .arg(opt("to", "YYYY-MM-DD"))
                        .arg(opt("amount", "Exact amount"))
                        .arg(opt("description", "Substring of the description"))
                        .arg(opt("kind", "income|expense"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64))
                                .help("Category id"),
                        ),
                )),
        )
        .subcommand(
            Command::new("limit")
                .about("Monthly category spending limits (premium)")
                .subcommand(
                    Command::new("set")
                        .arg(id_arg("category", "Category id"))
                        .arg(req("amount", "Monthly limit")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(id_arg("id", "Limit id")))
                .subcommand(
                    Command::new("check")
                        .arg(id_arg("category", "Category id"))
                        .arg(opt("amount", "Amount you are about to spend")),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals (premium)")
                .subcommand(
                    Command::new("add")
                        .arg(req("name", "Goal name"))
                        .arg(req("target", "Target amount"))
                        .arg(req("monthly", "Monthly contribution"))
                        .arg(opt("deadline", "YYYY-MM-DD"))
                        .arg(force_flag("Create even if the contribution exceeds a third of the balance")),
                )
                .subcommand(
                    Command::new("edit")
                        .arg(id_arg("id", "Goal id"))
                        .arg(opt("name", "Goal name"))
                        .arg(opt("target", "Target amount"))
                        .arg(opt("monthly", "Monthly contribution"))
                        .arg(opt("deadline", "YYYY-MM-DD"))
                        .arg(force_flag("Save even if the contribution exceeds a third of the balance")),
                )
                .subcommand(Command::new("rm").arg(id_arg("id", "Goal id")))
                .subcommand(json_flags(Command::new("list")))
                .subcommand(
                    Command::new("estimate")
                        .arg(req("target", "Target amount"))
                        .arg(req("monthly", "Monthly contribution"))
                        .arg(opt("start", "YYYY-MM-DD (default: today)"))
                        .arg(opt("deadline", "YYYY-MM-DD")),
                )
                .subcommand(
                    Command::new("contribute")
                        .about("Process this month's contributions")
                        .arg(force_flag("Contribute even with an insufficient balance")),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Balance, savings, and spending summary")
                .arg(opt("month", "YYYY-MM (default: current)"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print as pretty JSON"),
                ),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                Command::new("transactions")
                    .arg(req("format", "csv|json"))
                    .arg(req("out", "Output path"))
                    .arg(opt("month", "YYYY-MM (default: current)")),
            ),
        )
}
