//! Command-line front end for the rate-impact calculators
//!
//! Inputs persist between runs in a JSON state file, so a sequence of
//! `calc set ...` calls behaves like editing the widget's form fields.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use rate_impact::calculator::{Gas, Mortgage, StudentLoan};
use rate_impact::present::{normalize_input, CurrencyFormat, LogSink, NoopSink, TelemetrySink};
use rate_impact::profile::{export_file_name, write_csv, Profile, ProfileBook};
use rate_impact::storage::JsonFileStore;
use rate_impact::{AppConfig, Calculator, CalculatorSession};
use serde_json::{json, Map, Value};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "calc", version, about = "Mortgage, student loan and gas price impact calculators")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the state file from the configuration
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print inputs and results of every calculator
    Show,
    /// Set one input field
    Set {
        calculator: CalculatorKind,
        field: String,
        /// Non-numeric text is taken as 0
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Restore default inputs for one calculator, or all of them
    Reset { calculator: Option<CalculatorKind> },
    /// Save the current inputs as a named profile
    SaveProfile { name: String },
    /// Replace the current inputs with a saved profile
    LoadProfile { name: String },
    /// Write every saved profile to CSV
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CalculatorKind {
    Mortgage,
    StudentLoan,
    Gas,
}

impl CalculatorKind {
    fn name(self) -> &'static str {
        match self {
            CalculatorKind::Mortgage => Mortgage::NAMESPACE,
            CalculatorKind::StudentLoan => StudentLoan::NAMESPACE,
            CalculatorKind::Gas => Gas::NAMESPACE,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    let telemetry: Box<dyn TelemetrySink> = if config.telemetry {
        Box::new(LogSink)
    } else {
        Box::new(NoopSink)
    };

    let store = JsonFileStore::open(&config.store_path)
        .with_context(|| format!("failed to open state file {}", config.store_path.display()))?;
    let mut session = CalculatorSession::restore(Arc::new(store));
    let currency = config.currency();

    match cli.command {
        Command::Show => print_session(&session, &currency),
        Command::Set { calculator, field, value } => {
            let value = normalize_input(&value);
            match calculator {
                CalculatorKind::Mortgage => {
                    session.mortgage.set_input(Mortgage::field(&field)?, value)
                }
                CalculatorKind::StudentLoan => {
                    session.student_loan.set_input(StudentLoan::field(&field)?, value)
                }
                CalculatorKind::Gas => session.gas.set_input(Gas::field(&field)?, value),
            }
            print_session(&session, &currency);
        }
        Command::Reset { calculator } => {
            match calculator {
                Some(CalculatorKind::Mortgage) => session.mortgage.reset(),
                Some(CalculatorKind::StudentLoan) => session.student_loan.reset(),
                Some(CalculatorKind::Gas) => session.gas.reset(),
                None => session.reset_all(),
            }
            let target = calculator.map_or("all", CalculatorKind::name);
            telemetry.track("calculator_reset", &params(json!({ "calculator": target })));
            print_session(&session, &currency);
        }
        Command::SaveProfile { name } => {
            let mut book = load_book(&config)?;
            book.upsert(Profile::capture(name.clone(), &session));
            book.save(&config.profiles_path)
                .with_context(|| format!("failed to write {}", config.profiles_path.display()))?;
            telemetry.track("profile_saved", &params(json!({ "profiles": book.len() })));
            println!("Saved profile '{}' ({} total)", name, book.len());
        }
        Command::LoadProfile { name } => {
            let book = load_book(&config)?;
            let Some(profile) = book.get(&name) else {
                bail!("no profile named '{}' in {}", name, config.profiles_path.display());
            };
            profile.apply_to(&mut session);
            print_session(&session, &currency);
        }
        Command::Export { out } => {
            let book = load_book(&config)?;
            let out = out.unwrap_or_else(|| PathBuf::from(export_file_name(Local::now().date_naive())));
            let file = File::create(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            write_csv(file, &book.summaries())?;
            telemetry.track("profiles_exported", &params(json!({ "rows": book.len() })));
            println!("Exported {} profiles to {}", book.len(), out.display());
        }
    }

    Ok(())
}

fn load_book(config: &AppConfig) -> Result<ProfileBook> {
    ProfileBook::load(&config.profiles_path)
        .with_context(|| format!("failed to read {}", config.profiles_path.display()))
}

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn print_session(session: &CalculatorSession, currency: &CurrencyFormat) {
    let mortgage = session.mortgage.inputs();
    let payments = session.mortgage.outputs();
    println!("Mortgage");
    println!("  {:<22} {}", "Principal", currency.format(mortgage.principal));
    println!("  {:<22} {}", "Term (years)", mortgage.term_years);
    println!("  {:<22} {}%", "Old rate", mortgage.old_rate_percent);
    println!("  {:<22} {}%", "New rate", mortgage.new_rate_percent);
    println!("  {:<22} {}", "Old monthly payment", currency.format(payments.old_monthly_payment));
    println!("  {:<22} {}", "New monthly payment", currency.format(payments.new_monthly_payment));
    println!("  {:<22} {}", "Monthly difference", currency.format(payments.delta));

    let loan = session.student_loan.inputs();
    let interest = session.student_loan.outputs();
    println!("Student loan");
    println!("  {:<22} {}", "Balance", currency.format(loan.balance));
    println!("  {:<22} {}%", "Rate", loan.rate_percent);
    println!("  {:<22} {}", "Daily interest", currency.format(interest.daily_interest));
    println!("  {:<22} {}", "Monthly interest", currency.format(interest.monthly_interest));
    println!("  {:<22} {}", "Yearly interest", currency.format(interest.yearly_interest));

    let gas = session.gas.inputs();
    println!("Gas");
    println!("  {:<22} {}", "Gallons per month", gas.gallons_per_month);
    println!("  {:<22} {}", "Price change / gallon", currency.format(gas.price_delta_per_gallon));
    println!("  {:<22} {}", "Monthly impact", currency.format(session.gas.outputs().monthly_impact));
}
