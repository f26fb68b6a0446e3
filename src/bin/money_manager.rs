use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use serde::Serialize;
use time::Date;

use money_manager::{
    ChartConfig, DashboardView, EngineConfig, Error, ExpenseBreakdownView, FilterCriteria,
    FixtureTransport, KindFilter, SearchOutcome, SearchSession, SortField, SortOrder, Transport,
    load_dashboard, load_expense_breakdown, parse_date, setup_logging, transaction_rows,
};

/// Summarise and search personal income and expenses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the JSON data file with categories, incomes and expenses.
    #[arg(long, env = "MONEY_MANAGER_DATA")]
    data: PathBuf,

    /// The radius of the expense-of-income ring.
    #[arg(long, default_value_t = money_manager::DEFAULT_CHART_RADIUS)]
    ring_radius: f64,

    /// The radius of the expense breakdown pie chart.
    #[arg(long, default_value_t = money_manager::DEFAULT_CHART_RADIUS)]
    pie_radius: f64,

    /// How many categories the expense legend lists.
    #[arg(long, default_value_t = money_manager::DEFAULT_LEGEND_SIZE)]
    legend_size: usize,

    /// Print view-models as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log at the debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the totals, the expense ring and the recent transactions.
    Dashboard {
        /// Show at most this many recent transactions.
        #[arg(long)]
        recent: Option<usize>,
    },
    /// Show expenses grouped by category.
    Breakdown,
    /// Search transactions.
    Search {
        /// Which kinds of transaction to search: all, income or expense.
        #[arg(long, default_value = "all")]
        kind: KindFilter,
        /// Only include transactions on or after this date (YYYY-MM-DD).
        #[arg(long, value_parser = parse_date)]
        start: Option<Date>,
        /// Only include transactions on or before this date (YYYY-MM-DD).
        #[arg(long, value_parser = parse_date)]
        end: Option<Date>,
        /// Only include transactions whose name contains this text.
        #[arg(long)]
        keyword: Option<String>,
        /// The field to sort by: date, amount or name.
        #[arg(long, default_value = "date")]
        sort_field: SortField,
        /// The sort direction: asc or desc.
        #[arg(long, default_value = "desc")]
        order: SortOrder,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!("exiting after error: {error}");
            eprintln!("{}", error.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let transport = FixtureTransport::load(&args.data).await?;
    let mut config = EngineConfig {
        charts: ChartConfig {
            ring_radius: args.ring_radius,
            pie_radius: args.pie_radius,
        },
        legend_size: args.legend_size,
        ..Default::default()
    };

    match args.command {
        Command::Dashboard { recent } => {
            config.recent_limit = recent;
            let view = load_dashboard(&transport, &config).await?;
            print_view(&view, args.json, print_dashboard)
        }
        Command::Breakdown => {
            let view = load_expense_breakdown(&transport, &config).await?;
            print_view(&view, args.json, print_breakdown)
        }
        Command::Search {
            kind,
            start,
            end,
            keyword,
            sort_field,
            order,
        } => {
            let criteria = FilterCriteria {
                kind_filter: kind,
                start_date: start,
                end_date: end,
                keyword,
                sort_field,
                sort_order: order,
            };
            let categories = transport.fetch_categories().await?;
            let session = SearchSession::new(transport);

            match session.search(&criteria, &categories).await? {
                SearchOutcome::Current(results) => {
                    let rows = transaction_rows(&results);
                    print_view(&rows, args.json, |rows| {
                        if rows.is_empty() {
                            println!("No transactions found.");
                        }
                        for row in rows {
                            println!(
                                "{} {:<24} {:<16} {:>12}  {}",
                                row.icon,
                                row.name,
                                row.category_name,
                                row.amount_display,
                                row.date_display
                            );
                        }
                    })
                }
                SearchOutcome::Superseded => Ok(()),
            }
        }
    }
}

fn print_view<V, F>(view: &V, json: bool, print_text: F) -> Result<(), Error>
where
    V: Serialize + ?Sized,
    F: FnOnce(&V),
{
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print_text(view);
    }

    Ok(())
}

fn print_dashboard(view: &DashboardView) {
    for card in &view.cards {
        println!("{:<16} {}", card.title, card.amount_display);
    }
    println!(
        "Expenses are {:.1}% of income",
        view.aggregate.expense_percentage_of_income
    );

    println!();
    println!("Recent transactions");
    for row in &view.recent {
        println!(
            "{} {:<24} {:>12}  {}",
            row.icon, row.name, row.amount_display, row.date_display
        );
    }
}

fn print_breakdown(view: &ExpenseBreakdownView) {
    println!("Total expenses {}", view.total_display);
    for slice in &view.breakdown.categories {
        println!(
            "{:<16} {:>12} {:>6.1}%",
            slice.name,
            money_manager::format_currency(slice.amount),
            slice.percentage
        );
    }
}
