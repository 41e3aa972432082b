//! Non-interactive command-line surface over the profile services.

pub mod commands;
pub mod formatters;
pub mod output;
pub mod system_clock;
pub mod table;

use crate::config::ConfigManager;
use crate::errors::CliError;
use crate::storage::JsonStorage;

pub use system_clock::SystemClock;

const USAGE: &str = "\
Usage: cashflow_core_cli <command> [args]

Commands:
  init <profile> [--currency CODE] [--force]   Create a profile
  list                                         List stored profiles
  show <profile>                               Profile overview
  add-income <profile> <name> <amount> <start: YYYY-MM-DD> [--yearly] [--until YYYY-MM-DD]
  add-expense <profile> <name> <amount> <start: YYYY-MM-DD> [--yearly] [--until YYYY-MM-DD]
  add-asset <profile> <name> <amount> <currency>
  add-debt <profile> <name> <balance> <monthly-payment>
  remove-item <profile> <id>                   Remove a recurring item
  project <profile> [--months N]               Monthly cash-flow outlook
  debts <profile>                              Debt payoff schedule
  help                                         Show this message";

/// Entry point used by the binary. Parses `std::env::args` and dispatches.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    run_with_args(&args)
}

pub fn run_with_args(args: &[String]) -> Result<(), CliError> {
    let Some((command, rest)) = args.split_first() else {
        output::print_info(USAGE);
        return Ok(());
    };

    if matches!(command.as_str(), "help" | "--help" | "-h") {
        output::print_info(USAGE);
        return Ok(());
    }

    let storage = JsonStorage::new_default().map_err(CliError::Core)?;
    let config = ConfigManager::new()
        .and_then(|manager| manager.load())
        .map_err(CliError::Core)?;
    let clock = SystemClock;

    match command.as_str() {
        "init" => commands::init(&storage, &config, rest),
        "list" => commands::list(&storage),
        "show" => commands::show(&storage, &config, rest),
        "add-income" => commands::add_flow(&storage, rest, commands::FlowDirection::Income),
        "add-expense" => commands::add_flow(&storage, rest, commands::FlowDirection::Expense),
        "add-asset" => commands::add_asset(&storage, rest),
        "add-debt" => commands::add_debt(&storage, rest),
        "remove-item" => commands::remove_item(&storage, rest),
        "project" => commands::project(&storage, &config, &clock, rest),
        "debts" => commands::debts(&storage, &config, &clock, rest),
        other => Err(CliError::Input(format!(
            "unknown command `{}` (try `help`)",
            other
        ))),
    }
}
