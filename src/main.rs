use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

use harilibur::catalog::holidaycatalog::HolidayCatalog;
use harilibur::configuration::CatalogConfiguration;
use harilibur::time::calendar::holidaycalendar::HolidayCalendar;

/// Indonesian public holiday lookup.
#[derive(Parser)]
#[command(name = "harilibur", version, about)]
struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Holiday year; defaults to the current year.
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Use the saved year cache instead of fetching when one exists.
    #[arg(long, global = true)]
    local: bool,

    /// Do not treat every Sunday as a holiday.
    #[arg(long, global = true)]
    no_default_sunday: bool,

    /// Directory holding holidays-<year>.json.
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Listing base URL; the page fetched is <base-url>/<year>-dates.
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a date (YYYY-MM-DD) is a holiday.
    Check {
        date: NaiveDate,

        /// Print only true or false.
        #[arg(long = "bool")]
        bool_result: bool,
    },

    /// List the year's holidays followed by the default dates.
    List,

    /// List the default weekday rules.
    DefaultDays,

    /// List the default dates.
    DefaultDates,

    /// List listing rows that could not be read.
    Skipped,

    /// List every holiday date of the year, default days included.
    Dates,

    /// Find the nearest business day after a date.
    NextBusinessDay {
        date: NaiveDate,

        /// Search backwards instead.
        #[arg(long)]
        previous: bool,
    },

    /// Count business days between two dates, both ends included.
    BusinessDays {
        start: NaiveDate,
        end: NaiveDate,
    },
}

#[derive(Serialize)]
struct ListedHoliday<'a> {
    #[serde(rename = "dateStart")]
    date_start: NaiveDate,
    #[serde(rename = "dateEnd")]
    date_end: NaiveDate,
    days: usize,
    description: &'a str,
}

#[derive(Serialize)]
struct SkippedListing<'a> {
    row: usize,
    cells: &'a [String],
    error: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = configuration(&cli)?;
    let catalog = HolidayCatalog::open(&config)
        .with_context(|| format!("failed to load holidays for {}", config.target_year()))?;

    let output = match cli.command {
        Commands::Check { date, bool_result } => {
            serde_json::to_string_pretty(&catalog.check(date, bool_result))?
        }
        Commands::List => {
            let holidays: Vec<ListedHoliday> = catalog
                .holidays()
                .map(|h| ListedHoliday {
                    date_start: h.date_start(),
                    date_end: h.date_end(),
                    days: h.day_count(),
                    description: h.description(),
                })
                .collect();
            serde_json::to_string_pretty(&holidays)?
        }
        Commands::DefaultDays => serde_json::to_string_pretty(catalog.default_days())?,
        Commands::DefaultDates => serde_json::to_string_pretty(catalog.default_dates())?,
        Commands::Skipped => {
            let skipped: Vec<SkippedListing> = catalog
                .skipped_rows()
                .iter()
                .map(|s| SkippedListing { row: s.index, cells: &s.cells, error: s.error.to_string() })
                .collect();
            serde_json::to_string_pretty(&skipped)?
        }
        Commands::Dates => serde_json::to_string_pretty(&catalog.get_holiday_set(catalog.year()))?,
        Commands::NextBusinessDay { date, previous } => {
            let found = if previous {
                catalog.previous_business_day(date)
            } else {
                catalog.next_business_day(date)
            };
            serde_json::to_string_pretty(&found)?
        }
        Commands::BusinessDays { start, end } => {
            serde_json::to_string_pretty(&catalog.count_business_days(start, end))?
        }
    };

    println!("{}", output);
    Ok(())
}

fn configuration(cli: &Cli) -> anyhow::Result<CatalogConfiguration> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfiguration::from_reader(path)?,
        None => CatalogConfiguration::new(),
    };

    if let Some(year) = cli.year {
        config = config.with_year(year);
    }
    if cli.local {
        config = config.with_local_cache(true);
    }
    if cli.no_default_sunday {
        config = config.with_default_sunday(false);
    }
    if let Some(cache_dir) = &cli.cache_dir {
        config = config.with_cache_dir(cache_dir);
    }
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }

    Ok(config)
}
