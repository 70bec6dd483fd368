use clap::Parser;

/// Print a Jalali month as a calendar grid.
#[derive(Parser)]
#[command(
    name = "darsyar-cal",
    version,
    about = "Jalali month calendar for the Darsyar study planner"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Gregorian date to show instead of today, as YYYY-MM-DD (Persian digits accepted).
    #[arg(short, long)]
    pub date: Option<String>,

    /// Print ASCII digits instead of Persian ones.
    #[arg(long)]
    pub latin: bool,

    /// Print the month as JSON instead of a grid.
    #[arg(long, conflicts_with = "latin")]
    pub json: bool,
}
