//! Command handlers. Each loads a profile snapshot, applies one service
//! operation or report, and saves when something changed.

use chrono::NaiveDate;
use dialoguer::Confirm;
use uuid::Uuid;

use crate::cli::formatters::{format_amount, format_amount_exact, format_date};
use crate::cli::output;
use crate::cli::table::{Table, TableColumn};
use crate::config::Config;
use crate::core::services::projection_service::DEFAULT_HORIZON_MONTHS;
use crate::core::{AssetService, DebtService, ProjectionService, RecurringService};
use crate::currency::CurrencyCode;
use crate::domain::{FlowKind, Frequency, Profile};
use crate::errors::CliError;
use crate::storage::{JsonStorage, StorageBackend};
use crate::time::Clock;

pub enum FlowDirection {
    Income,
    Expense,
}

/// Splits raw arguments into positionals, value flags, and switches.
struct ParsedArgs {
    positionals: Vec<String>,
    values: Vec<(String, String)>,
    switches: Vec<String>,
}

const VALUE_FLAGS: &[&str] = &["until", "currency", "months"];

impl ParsedArgs {
    fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut positionals = Vec::new();
        let mut values = Vec::new();
        let mut switches = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if let Some(name) = arg.strip_prefix("--") {
                if VALUE_FLAGS.contains(&name) {
                    let value = iter.next().ok_or_else(|| {
                        CliError::Input(format!("flag --{} expects a value", name))
                    })?;
                    values.push((name.to_string(), value.clone()));
                } else {
                    switches.push(name.to_string());
                }
            } else {
                positionals.push(arg.clone());
            }
        }
        Ok(Self {
            positionals,
            values,
            switches,
        })
    }

    fn positional(&self, index: usize, label: &str) -> Result<&str, CliError> {
        self.positionals
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| CliError::Input(format!("missing argument: {}", label)))
    }

    fn value(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(flag, _)| flag == name)
            .map(|(_, value)| value.as_str())
    }

    fn switch(&self, name: &str) -> bool {
        self.switches.iter().any(|flag| flag == name)
    }
}

fn parse_amount(raw: &str, label: &str) -> Result<f64, CliError> {
    raw.parse::<f64>()
        .map_err(|_| CliError::Input(format!("{} must be a number, got `{}`", label, raw)))
}

fn parse_date(raw: &str, label: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CliError::Input(format!("{} must be YYYY-MM-DD, got `{}`", label, raw)))
}

fn load_profile(storage: &JsonStorage, name: &str) -> Result<Profile, CliError> {
    storage.load(name).map_err(CliError::Core)
}

fn save_profile(storage: &JsonStorage, profile: &Profile, name: &str) -> Result<(), CliError> {
    storage.save(profile, name).map_err(CliError::Core)?;
    storage
        .record_last_profile(Some(name))
        .map_err(CliError::Core)
}

pub fn init(storage: &JsonStorage, config: &Config, args: &[String]) -> Result<(), CliError> {
    let args = ParsedArgs::parse(args)?;
    let name = args.positional(0, "profile name")?;
    let currency = args.value("currency").unwrap_or(&config.currency);

    if storage.exists(name) && !args.switch("force") {
        let prompt = format!("Profile `{}` already exists. Overwrite it?", name);
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|err| CliError::Command(err.to_string()))?;
        if !confirmed {
            output::print_info("Init cancelled.");
            return Ok(());
        }
    }

    let profile = Profile::new(name, CurrencyCode::new(currency));
    save_profile(storage, &profile, name)?;
    output::print_success(&format!(
        "Created profile `{}` ({})",
        name,
        profile.base_currency.as_str()
    ));
    Ok(())
}

pub fn list(storage: &JsonStorage) -> Result<(), CliError> {
    let profiles = storage.list_profiles().map_err(CliError::Core)?;
    if profiles.is_empty() {
        output::print_warning("No profiles stored yet.");
        return Ok(());
    }
    for name in profiles {
        output::print_info(&name);
    }
    Ok(())
}

pub fn show(storage: &JsonStorage, config: &Config, args: &[String]) -> Result<(), CliError> {
    let args = ParsedArgs::parse(args)?;
    let name = args.positional(0, "profile name")?;
    let profile = load_profile(storage, name)?;

    output::print_section(&profile.name);
    let currency = profile.base_currency.as_str();
    output::print_info(&format!("Base currency:     {}", currency));
    output::print_info(&format!(
        "Opening balance:   {}",
        format_amount_exact(&config.locale, AssetService::opening_balance(&profile), currency)
    ));
    output::print_info(&format!(
        "Inflation rate:    {}%/year",
        profile.settings.inflation_rate
    ));
    output::print_info(&format!(
        "Salary increase:   {}%/year",
        profile.settings.salary_increase_rate
    ));
    output::print_info(&format!(
        "Recurring items:   {}",
        profile.recurring_items.len()
    ));
    output::print_info(&format!("Asset holdings:    {}", profile.assets.len()));
    output::print_info(&format!("Debts:             {}", profile.debts.len()));

    if !profile.recurring_items.is_empty() {
        let mut table = Table::new(vec![
            TableColumn::new("ID", 36),
            TableColumn::new("NAME", 16),
            TableColumn::new("KIND", 7),
            TableColumn::new("AMOUNT", 10),
            TableColumn::new("FREQUENCY", 9),
            TableColumn::new("FROM", 10),
            TableColumn::new("UNTIL", 10),
        ]);
        for item in &profile.recurring_items {
            table.add_row(vec![
                item.id.to_string(),
                item.name.clone(),
                match item.kind {
                    FlowKind::Income => "income".into(),
                    FlowKind::Expense => "expense".into(),
                },
                format_amount_exact(&config.locale, item.amount, currency),
                item.frequency.label().to_string(),
                format_date(item.start_date),
                item.end_date.map(format_date).unwrap_or_else(|| "—".into()),
            ]);
        }
        output::print_info("");
        output::print_info(&table.render());
    }
    Ok(())
}

pub fn add_flow(
    storage: &JsonStorage,
    args: &[String],
    direction: FlowDirection,
) -> Result<(), CliError> {
    let args = ParsedArgs::parse(args)?;
    let profile_name = args.positional(0, "profile name")?;
    let item_name = args.positional(1, "item name")?;
    let amount = parse_amount(args.positional(2, "amount")?, "amount")?;
    let start = parse_date(args.positional(3, "start date")?, "start date")?;
    let end = args
        .value("until")
        .map(|raw| parse_date(raw, "end date"))
        .transpose()?;
    let frequency = if args.switch("yearly") {
        Frequency::Yearly
    } else {
        Frequency::Monthly
    };
    let kind = match direction {
        FlowDirection::Income => FlowKind::Income,
        FlowDirection::Expense => FlowKind::Expense,
    };

    let mut profile = load_profile(storage, profile_name)?;
    let id = RecurringService::add(&mut profile, item_name, kind, amount, frequency, start, end)
        .map_err(CliError::Core)?;
    save_profile(storage, &profile, profile_name)?;
    output::print_success(&format!("Added `{}` ({})", item_name, id));
    Ok(())
}

pub fn add_asset(storage: &JsonStorage, args: &[String]) -> Result<(), CliError> {
    let args = ParsedArgs::parse(args)?;
    let profile_name = args.positional(0, "profile name")?;
    let asset_name = args.positional(1, "asset name")?;
    let amount = parse_amount(args.positional(2, "amount")?, "amount")?;
    let currency = args.positional(3, "currency")?;

    let mut profile = load_profile(storage, profile_name)?;
    AssetService::add(&mut profile, asset_name, amount, CurrencyCode::new(currency))
        .map_err(CliError::Core)?;
    save_profile(storage, &profile, profile_name)?;
    output::print_success(&format!("Added holding `{}`", asset_name));
    Ok(())
}

pub fn add_debt(storage: &JsonStorage, args: &[String]) -> Result<(), CliError> {
    let args = ParsedArgs::parse(args)?;
    let profile_name = args.positional(0, "profile name")?;
    let debt_name = args.positional(1, "debt name")?;
    let balance = parse_amount(args.positional(2, "balance")?, "balance")?;
    let payment = parse_amount(args.positional(3, "monthly payment")?, "monthly payment")?;

    let mut profile = load_profile(storage, profile_name)?;
    DebtService::add(&mut profile, debt_name, balance, payment).map_err(CliError::Core)?;
    save_profile(storage, &profile, profile_name)?;
    output::print_success(&format!("Added debt `{}`", debt_name));
    Ok(())
}

pub fn remove_item(storage: &JsonStorage, args: &[String]) -> Result<(), CliError> {
    let args = ParsedArgs::parse(args)?;
    let profile_name = args.positional(0, "profile name")?;
    let raw_id = args.positional(1, "item id")?;
    let id = Uuid::parse_str(raw_id)
        .map_err(|_| CliError::Input(format!("item id must be a UUID, got `{}`", raw_id)))?;

    let mut profile = load_profile(storage, profile_name)?;
    RecurringService::remove(&mut profile, id).map_err(CliError::Core)?;
    save_profile(storage, &profile, profile_name)?;
    output::print_success("Recurring item removed.");
    Ok(())
}

pub fn project(
    storage: &JsonStorage,
    config: &Config,
    clock: &dyn Clock,
    args: &[String],
) -> Result<(), CliError> {
    let args = ParsedArgs::parse(args)?;
    let profile_name = args.positional(0, "profile name")?;
    let months = match args.value("months") {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| CliError::Input(format!("--months must be a whole number, got `{}`", raw)))?
            .max(1),
        None => DEFAULT_HORIZON_MONTHS,
    };

    let profile = load_profile(storage, profile_name)?;
    let records = ProjectionService::monthly_outlook(&profile, months, clock, &config.locale);
    let currency = profile.base_currency.as_str();

    let mut table = Table::new(vec![
        TableColumn::new("MONTH", 9),
        TableColumn::new("INCOME", 10),
        TableColumn::new("EXPENSE", 10),
        TableColumn::new("NET", 10),
        TableColumn::new("BALANCE", 12),
    ]);
    for record in &records {
        table.add_row(vec![
            record.month_label.clone(),
            format_amount(&config.locale, record.income, currency),
            format_amount(&config.locale, record.expense, currency),
            format_amount(&config.locale, record.net, currency),
            format_amount(&config.locale, record.cumulative, currency),
        ]);
    }
    output::print_section(&format!("{} — next {} months", profile.name, months));
    output::print_info(&table.render());
    storage
        .record_last_profile(Some(profile_name))
        .map_err(CliError::Core)?;
    Ok(())
}

pub fn debts(
    storage: &JsonStorage,
    config: &Config,
    clock: &dyn Clock,
    args: &[String],
) -> Result<(), CliError> {
    let args = ParsedArgs::parse(args)?;
    let profile_name = args.positional(0, "profile name")?;
    let profile = load_profile(storage, profile_name)?;
    let plan = ProjectionService::payoff_plan(&profile, clock);
    let currency = profile.base_currency.as_str();

    if plan.entries.is_empty() {
        output::print_warning("No debts recorded.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::new("NAME", 16),
        TableColumn::new("BALANCE", 12),
        TableColumn::new("PAYMENT", 10),
        TableColumn::new("MONTHS LEFT", 11),
        TableColumn::new("PAYOFF", 10),
    ]);
    for entry in &plan.entries {
        table.add_row(vec![
            entry.name.clone(),
            format_amount_exact(&config.locale, entry.balance, currency),
            format_amount_exact(&config.locale, entry.monthly_payment, currency),
            entry
                .months_remaining
                .map(|months| months.to_string())
                .unwrap_or_else(|| "∞".into()),
            entry
                .payoff_date
                .map(format_date)
                .unwrap_or_else(|| "—".into()),
        ]);
    }
    output::print_section(&format!("{} — debt payoff", profile.name));
    output::print_info(&table.render());
    output::print_info(&format!(
        "Total balance: {}   Total payment: {}/month",
        format_amount_exact(&config.locale, plan.total_balance, currency),
        format_amount_exact(&config.locale, plan.total_monthly_payment, currency),
    ));
    match plan.debt_free_date {
        Some(date) => output::print_info(&format!("Debt-free date: {}", format_date(date))),
        None => output::print_warning("No bounded payoff with the current payments."),
    }
    Ok(())
}
