/// `habitkeep stats` - streak statistics for one habit

use habitkeep::{AppError, HabitApp, HabitStats};

use crate::cli::{find_habit, local_today};

pub fn run(app: &HabitApp, selector: &str) -> Result<(), AppError> {
    let Some(habit) = find_habit(app.store(), selector) else {
        println!("No habit matches '{}'", selector);
        return Ok(());
    };

    let dates = app.store().completion_dates(&habit.id);
    let stats = HabitStats::calculate(&dates, local_today());

    println!("{}", habit.name);
    println!("  Current streak:    {} days", stats.current_streak);
    println!("  Longest streak:    {} days", stats.longest_streak);
    println!("  This month:        {} completions", stats.completions_this_month);
    println!("  Total:             {} completions", stats.total_completions);
    match stats.last_completed {
        Some(date) => println!("  Last completed:    {}", date),
        None => println!("  Last completed:    never"),
    }
    Ok(())
}
