use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing::info;

use lunar_birthday::logging::init_logging;
use lunar_birthday::{BirthDate, CalculatorConfig, LunarBirthdayService, MoonTable, Result, BUILTIN_TABLE};

#[derive(Parser)]
#[command(name = "lunar-birthday", about = "Full moons closest to each birthday")]
struct Cli {
    /// Birth month (1-12)
    #[arg(long)]
    month: u32,
    /// Birth day (1-31)
    #[arg(long)]
    day: u32,
    /// Birth year
    #[arg(long)]
    year: i32,
    /// Moon table with one `YYYY-MM-DD,Name` entry per line
    #[arg(long)]
    moons: Option<PathBuf>,
    /// Date to treat as today (YYYY-MM-DD), defaults to the current UTC date
    #[arg(long)]
    today: Option<NaiveDate>,
    /// Years past the current one to include
    #[arg(
        long,
        default_value_t = lunar_birthday::DEFAULT_FUTURE_YEARS,
        value_parser = clap::value_parser!(u32).range(0..=lunar_birthday::MAX_FUTURE_YEARS as i64)
    )]
    future_years: u32,
    /// Log debug output and calculation metrics
    #[arg(long, short)]
    verbose: bool,
}


fn run(cli: Cli) -> Result<()> {
    let table = match &cli.moons {
        Some(path) => MoonTable::load(path)?,
        None => BUILTIN_TABLE.clone(),
    };
    info!("Using moon table with {} entries", table.len());

    let today = cli.today.unwrap_or_else(|| Utc::now().date_naive());
    let birth = BirthDate::new(cli.year, cli.month, cli.day)?;

    let config = CalculatorConfig::default().with_future_years(cli.future_years);
    let service = LunarBirthdayService::new(Arc::new(table), config);
    let timeline = service.timeline(birth, today)?;
    print!("{}", timeline);

    if cli.verbose {
        info!("{}", service.metrics().report());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
