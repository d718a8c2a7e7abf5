mod config;
mod logging;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use ecomgen_generate::{
    GenerateOptions, GenerationEngine, GenerationError, GenerationReport, LocaleKey,
};
use logging::{LogOptions, init_logging};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "ecomgen", version, about = "Synthetic e-commerce dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate customers, products, orders, order items and reviews as CSV.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// TOML file with generation options; flags override its values.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output directory for the CSV files.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Number of customers.
    #[arg(long)]
    customers: Option<usize>,
    /// Number of products.
    #[arg(long)]
    products: Option<usize>,
    /// Number of orders.
    #[arg(long)]
    orders: Option<usize>,
    /// Expected items per order (only used for the logged estimate).
    #[arg(long)]
    avg_items_per_order: Option<f64>,
    /// Number of reviews.
    #[arg(long)]
    reviews: Option<usize>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Date treated as today for relative date ranges (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    reference_date: Option<NaiveDate>,
    /// Faker locale to mix in; repeat for several.
    #[arg(long = "locale", value_name = "LOCALE", value_parser = parse_locale)]
    locales: Vec<LocaleKey>,
    /// Skip invariant checks before writing files.
    #[arg(long, default_value_t = false)]
    no_validate: bool,
    /// Write generation_report.json next to the CSV files.
    #[arg(long, default_value_t = false)]
    report: bool,
    /// Emit logs as JSON lines.
    #[arg(long, default_value_t = false)]
    log_json: bool,
    /// Append JSON logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    init_logging(LogOptions {
        json: args.log_json,
        file: args.log_file.as_deref(),
    })?;

    let mut options = config::load_options(args.config.as_deref())?;
    apply_overrides(&mut options, args);

    tracing::info!(
        event = "options_resolved",
        out_dir = %options.out_dir.display(),
        customers = options.customers,
        products = options.products,
        orders = options.orders,
        reviews = options.reviews
    );

    println!("=== ecomgen: synthetic e-commerce datasets ===");
    let result = GenerationEngine::new(options).run()?;
    print_summary(&result.report, &result.out_dir);

    Ok(())
}

fn apply_overrides(options: &mut GenerateOptions, args: GenerateArgs) {
    let GenerateArgs {
        out,
        customers,
        products,
        orders,
        avg_items_per_order,
        reviews,
        seed,
        reference_date,
        locales,
        no_validate,
        report,
        ..
    } = args;

    if let Some(out) = out {
        options.out_dir = out;
    }
    if let Some(customers) = customers {
        options.customers = customers;
    }
    if let Some(products) = products {
        options.products = products;
    }
    if let Some(orders) = orders {
        options.orders = orders;
    }
    if let Some(avg) = avg_items_per_order {
        options.avg_items_per_order = avg;
    }
    if let Some(reviews) = reviews {
        options.reviews = reviews;
    }
    if seed.is_some() {
        options.seed = seed;
    }
    if reference_date.is_some() {
        options.reference_date = reference_date;
    }
    if !locales.is_empty() {
        options.locales = locales;
    }
    if no_validate {
        options.validate = false;
    }
    if report {
        options.write_report = true;
    }
}

fn print_summary(report: &GenerationReport, out_dir: &std::path::Path) {
    println!();
    println!("=== Generation summary ===");
    for table in &report.tables {
        println!(
            "  {:<12} {:>12} rows  -> {}",
            table.table,
            group_thousands(table.rows_generated),
            table.path.display()
        );
    }
    println!();
    println!("Total records: {}", group_thousands(report.rows_total));
    println!("Seed: {}", report.seed);
    println!("Files written to: {}", out_dir.display());
}

fn parse_locale(value: &str) -> Result<LocaleKey, String> {
    LocaleKey::parse(value).ok_or_else(|| {
        let known: Vec<&str> = LocaleKey::ALL.iter().map(|locale| locale.as_str()).collect();
        format!("unknown locale '{value}' (expected one of {})", known.join(", "))
    })
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
