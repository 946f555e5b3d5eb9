//! Command implementations for the cycle CLI.
//!
//! Every command loads the rides CSV into an in-memory database, rolls up
//! the summaries and reads one granularity back.

use clap::{Args, Subcommand};
use cycle_core::{AxisKind, FoldPeriod, GraphType, SearchGranularity};

pub mod chart;
pub mod dataset;
pub mod list;
pub mod show;
pub mod summary;

/// Where the records come from and which of them to use.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Rides CSV (`Date,DayKM,DaySeconds[,TotalKM,TotalSeconds]`)
    #[arg(short = 'r', long, default_value = "fixtures/rides.csv")]
    pub rides_csv: String,

    /// Days, Weeks, Months or Years
    #[arg(short, long, default_value = "Days")]
    pub granularity: SearchGranularity,

    /// First date (YYYY-MM-DD), defaults to the start of the first year
    #[arg(long)]
    pub start: Option<String>,

    /// Last date (YYYY-MM-DD), defaults to the latest ride
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a Chart.js configuration as JSON
    Chart {
        #[command(flatten)]
        source: SourceArgs,

        /// Date, Distance, Time or Speed
        #[arg(short = 'x', long, default_value = "Date")]
        x_axis: AxisKind,

        /// Date, Distance, Time or Speed
        #[arg(short = 'y', long, default_value = "Distance")]
        y_axis: AxisKind,

        /// scatter, line or bar
        #[arg(short = 't', long, default_value = "scatter")]
        graph_type: GraphType,

        /// none, Week, Month, Year or a length in days such as 14d
        #[arg(short, long, default_value = "none")]
        fold: FoldPeriod,

        /// Output file, stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the records of a granularity and date range
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the day, week, month or year containing a date
    Show {
        /// Rides CSV
        #[arg(short = 'r', long, default_value = "fixtures/rides.csv")]
        rides_csv: String,

        /// Days, Weeks, Months or Years
        #[arg(short, long, default_value = "Days")]
        granularity: SearchGranularity,

        /// Any date (YYYY-MM-DD) inside the wanted period
        #[arg(short, long)]
        date: String,
    },

    /// Print record counts and the available date range
    Summary {
        /// Rides CSV
        #[arg(short = 'r', long, default_value = "fixtures/rides.csv")]
        rides_csv: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Chart {
            source,
            x_axis,
            y_axis,
            graph_type,
            fold,
            output,
        } => {
            let selection = cycle_core::Selection::new(x_axis, y_axis, graph_type, fold);
            chart::run_chart(&source, &selection, output.as_deref())
        }
        Command::List { source } => list::run_list(&source),
        Command::Show {
            rides_csv,
            granularity,
            date,
        } => show::run_show(&rides_csv, granularity, &date),
        Command::Summary { rides_csv } => summary::run_summary(&rides_csv),
    }
}
