use clap::{Args, Parser, Subcommand};
use engine::{CalorieReport, CashReport, Clock, Record, SystemClock};

use crate::{error::Result, settings::Settings};

mod error;
mod parsing;
mod settings;

#[derive(Parser, Debug)]
#[command(name = "daylimit")]
#[command(about = "Daily money and calorie limits")]
struct Cli {
    /// Optional settings file path (TOML).
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override log level (e.g. debug).
    #[arg(long, global = true)]
    level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Money left for today.
    Cash(CashArgs),
    /// Calories left for today.
    Calories(CalorieArgs),
    /// Print the sample day: coffee, lunch and cake.
    Demo,
}

#[derive(Args, Debug)]
struct CashArgs {
    /// Daily limit in roubles.
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<f64>,
    /// Currency code: usd, eur or rub.
    #[arg(long)]
    currency: Option<String>,
    /// Record as `AMOUNT[@DD.MM.YYYY][ comment]`; repeatable.
    #[arg(long = "record", allow_hyphen_values = true)]
    records: Vec<String>,
}

#[derive(Args, Debug)]
struct CalorieArgs {
    /// Daily limit in kcal.
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<f64>,
    /// Record as `AMOUNT[@DD.MM.YYYY][ comment]`; repeatable.
    #[arg(long = "record", allow_hyphen_values = true)]
    records: Vec<String>,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let mut settings = Settings::new(cli.config.as_deref())?;
    if let Some(level) = cli.level {
        settings.app.level = level;
    }

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "daylimit={level},engine={level}",
            level = settings.app.level
        ))
        .with_writer(std::io::stderr)
        .init();

    let lines = match cli.command {
        Command::Cash(args) => cash(&settings, &args, &SystemClock)?,
        Command::Calories(args) => calories(&settings, &args, &SystemClock)?,
        Command::Demo => demo(&SystemClock)?,
    };
    for line in lines {
        println!("{line}");
    }

    Ok(())
}

fn cash<C: Clock + Copy>(settings: &Settings, args: &CashArgs, clock: &C) -> Result<Vec<String>> {
    let limit = args.limit.unwrap_or(settings.limits.cash);
    let currency = args.currency.as_deref().unwrap_or(&settings.cash.currency);
    tracing::info!(limit, currency, "cash report");

    let mut report = CashReport::with_clock(limit, *clock);
    for raw in &args.records {
        report.add_record(parsing::parse_record(raw, clock)?);
    }

    Ok(vec![
        report.remaining_message(currency)?,
        format!("Week total: {}", report.week_total()),
    ])
}

fn calories<C: Clock + Copy>(
    settings: &Settings,
    args: &CalorieArgs,
    clock: &C,
) -> Result<Vec<String>> {
    let limit = args.limit.unwrap_or(settings.limits.calories);
    tracing::info!(limit, "calorie report");

    let mut report = CalorieReport::with_clock(limit, *clock);
    for raw in &args.records {
        report.add_record(parsing::parse_record(raw, clock)?);
    }

    Ok(vec![
        report.remaining_message(),
        format!("Week total: {}", report.week_total()),
    ])
}

fn demo<C: Clock + Copy>(clock: &C) -> Result<Vec<String>> {
    let limit = 1000.0;
    let mut cash = CashReport::with_clock(limit, *clock);
    let mut calories = CalorieReport::with_clock(limit, *clock);

    cash.add_record(Record::today_by(145.0, clock).with_comment("кофе"));
    cash.add_record(Record::today_by(300.0, clock).with_comment("Серёге за обед"));
    cash.add_record(
        Record::parse(3000.0, "08.11.2022")?.with_comment("Бар на Танин день рождения"),
    );

    calories.add_record(Record::today_by(118.0, clock).with_comment("Кусок тортика. И ещё один."));
    calories.add_record(Record::today_by(84.0, clock).with_comment("Йогурт."));
    calories.add_record(Record::parse(1140.0, "24.02.2019")?.with_comment("Баночка чипсов."));

    Ok(vec![
        cash.remaining_message("rub")?,
        calories.remaining_message(),
    ])
}
