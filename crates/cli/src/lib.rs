pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use commands::recommend::Strategy;
use commands::search::SearchOptions;

#[derive(Debug, Parser)]
#[command(
    name = "shopsense",
    about = "Shopsense operator CLI",
    long_about = "Inspect configuration, check catalog readiness, and run catalog queries against the configured data files.",
    after_help = "Examples:\n  shopsense doctor --json\n  shopsense recommend \"red shoe\" --strategy hybrid\n  shopsense compare 1 2 3"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and check that the catalog and similarity matrices load")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Recommend products similar to the first product whose name matches")]
    Recommend {
        product_name: String,
        #[arg(long, value_enum, default_value_t = Strategy::Content)]
        strategy: Strategy,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        #[arg(long, default_value_t = 5)]
        page_size: usize,
    },
    #[command(about = "Filter the catalog by price, category, store and name")]
    Search {
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        store: Option<String>,
        #[arg(long = "name")]
        product_name: Option<String>,
        #[arg(long, help = "Skip products without a usable price")]
        comparable_only: bool,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        #[arg(long, default_value_t = 10)]
        per_page: usize,
    },
    #[command(about = "Show price differences between a base product and comparison products")]
    Compare {
        product_id: String,
        compare_ids: Vec<String>,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Recommend { product_name, strategy, page, page_size } => {
            commands::recommend::run(strategy, &product_name, page, page_size)
        }
        Command::Search {
            min_price,
            max_price,
            category,
            store,
            product_name,
            comparable_only,
            page,
            per_page,
        } => commands::search::run(SearchOptions {
            min_price,
            max_price,
            category,
            store,
            product_name,
            comparable_only,
            page,
            per_page,
        }),
        Command::Compare { product_id, compare_ids } => {
            commands::compare::run(&product_id, &compare_ids)
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
