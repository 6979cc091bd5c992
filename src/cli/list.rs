/// `habitkeep list` - all habits with today's state and current streaks

use chrono::Datelike;

use habitkeep::{stats, AppError, HabitApp};

use crate::cli::local_today;

pub fn run(app: &HabitApp) -> Result<(), AppError> {
    let store = app.store();
    if store.habits().is_empty() {
        println!("No habits yet. Add one with `habitkeep add <name>`.");
        return Ok(());
    }

    let today = local_today();
    for habit in store.habits() {
        let dates = store.completion_dates(&habit.id);
        let done_today =
            stats::is_day_completed(&dates, today.year(), today.month(), today.day());
        let streak = stats::current_streak(&dates, today);

        let marker = if done_today { "[x]" } else { "[ ]" };
        let short_id: String = habit.id.to_string().chars().take(8).collect();
        println!("{} {:<30} {:>3} day streak  ({})", marker, habit.name, streak, short_id);
    }
    Ok(())
}
