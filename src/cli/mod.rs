/// CLI command handlers
///
/// Each subcommand lives in its own module and drives the store and the
/// derived engines; this module defines the clap surface and dispatches.

use chrono::NaiveDate;
use clap::Subcommand;

use habitkeep::{AppError, FileGateway, Habit, HabitApp, HabitStore};

pub mod add;
pub mod done;
pub mod list;
pub mod month;
pub mod profile;
pub mod remove;
pub mod rename;
pub mod stats;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new habit
    Add {
        /// Habit name (multiple words are joined)
        name: Vec<String>,
    },
    /// List habits with today's state and current streaks
    List,
    /// Toggle a habit's completion for a day
    Done {
        /// Habit name or id prefix
        habit: String,
        /// Day to toggle, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Rename a habit
    Rename {
        /// Habit name or id prefix
        habit: String,
        /// New name
        new_name: String,
    },
    /// Delete a habit and its completion history
    Remove {
        /// Habit name or id prefix
        habit: String,
    },
    /// Show streak statistics for a habit
    Stats {
        /// Habit name or id prefix
        habit: String,
    },
    /// Render a month of completions as a calendar grid
    Month {
        /// Habit name or id prefix
        habit: String,
        /// Year to show (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
        /// Month to show, 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
        /// Step this many months back from the selected month
        #[arg(long, default_value_t = 0)]
        back: u32,
    },
    /// Show or change profile settings
    Profile {
        #[command(subcommand)]
        action: Option<profile::ProfileAction>,
    },
}

pub async fn run(app: &mut HabitApp, command: Command) -> Result<(), AppError> {
    match command {
        Command::Add { name } => add::run(app, &name.join(" ")).await,
        Command::List => list::run(app),
        Command::Done { habit, date } => done::run(app, &habit, date).await,
        Command::Rename { habit, new_name } => rename::run(app, &habit, &new_name).await,
        Command::Remove { habit } => remove::run(app, &habit).await,
        Command::Stats { habit } => stats::run(app, &habit),
        Command::Month {
            habit,
            year,
            month,
            back,
        } => month::run(app, &habit, year, month, back),
        Command::Profile { action } => profile::run(app, action).await,
    }
}

/// Resolve a habit from user input: exact name first, then id prefix
pub(crate) fn find_habit(store: &HabitStore<FileGateway>, selector: &str) -> Option<Habit> {
    store
        .habits()
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(selector))
        .or_else(|| {
            store
                .habits()
                .iter()
                .find(|h| h.id.to_string().starts_with(selector))
        })
        .cloned()
}

/// Today's calendar day in the user's local timezone
pub(crate) fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
