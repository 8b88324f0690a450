// Copyright (c) 2026 Moneybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("moneybook")
        .about("Personal finance tracker: accounts, budgets, goals, debts, recurring transactions")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("type").long("type").default_value("Cash"))
                        .arg(Arg::new("balance").long("balance").default_value("0"))
                        .arg(Arg::new("currency").long("currency").default_value("USD")),
                )
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("type").long("type").default_value("Expense"))
                        .arg(Arg::new("icon").long("icon").default_value("tag"))
                        .arg(Arg::new("color").long("color").default_value("#757575")),
                )
                .subcommand(Command::new("list").arg(Arg::new("type").long("type")))
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("type").long("type").default_value("Expense"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("to-account")
                                .long("to-account")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("time").long("time"))
                        .arg(Arg::new("description").long("description").default_value(""))
                        .arg(Arg::new("method").long("method").default_value(""))
                        .arg(Arg::new("tags").long("tags").default_value("")),
                )
                .subcommand(
                    Command::new("list").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize)),
                    ),
                )
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(
                    Command::new("search")
                        .arg(Arg::new("query").default_value(""))
                        .arg(Arg::new("type").long("type"))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("from").long("from"))
                        .arg(Arg::new("to").long("to")),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage budgets")
                .subcommand(
                    Command::new("add")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("period").long("period").default_value("Monthly"))
                        .arg(Arg::new("from").long("from"))
                        .arg(Arg::new("to").long("to"))
                        .arg(Arg::new("alert").long("alert").default_value("80")),
                )
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                )
                .subcommand(
                    Command::new("recalc")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true)),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("deadline").long("deadline")),
                )
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("debt")
                .about("Track borrowed and lent money")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("person").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("type").long("type").default_value("Borrowed"))
                        .arg(Arg::new("due").long("due")),
                )
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
                ),
        )
        .subcommand(
            Command::new("recurring")
                .about("Manage recurring transaction patterns")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("type").long("type").default_value("Expense"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("account")
                                .long("account")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("description").long("description").default_value(""))
                        .arg(Arg::new("frequency").long("frequency").default_value("Monthly"))
                        .arg(
                            Arg::new("interval")
                                .long("interval")
                                .default_value("1")
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("start").long("start")),
                )
                .subcommand(Command::new("list"))
                .subcommand(Command::new("run").about("Materialize all due patterns")),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregate reports")
                .subcommand(
                    Command::new("categories")
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true)),
                )
                .subcommand(
                    Command::new("cashflow")
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true)),
                )
                .subcommand(
                    Command::new("trend").arg(
                        Arg::new("months")
                            .long("months")
                            .default_value("6")
                            .value_parser(value_parser!(u32)),
                    ),
                ),
        )
        .subcommand(Command::new("notify").about("Show pending alerts and reminders"))
        .subcommand(
            Command::new("settings")
                .about("Get and set settings")
                .subcommand(Command::new("get").arg(Arg::new("key").required(true)))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                )
                .subcommand(Command::new("set-pin").arg(Arg::new("pin").required(true))),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .arg(Arg::new("format").long("format").default_value("csv"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("backup")
                .about("Back up and restore the store file")
                .subcommand(Command::new("now"))
                .subcommand(
                    Command::new("restore")
                        .arg(Arg::new("file").required(true))
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Overwrite the live store without prompting"),
                        ),
                ),
        )
}
