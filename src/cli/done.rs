/// `habitkeep done` - toggle a habit's completion for a day

use chrono::NaiveDate;

use habitkeep::{AppError, HabitApp};

use crate::cli::{find_habit, local_today};

pub async fn run(app: &mut HabitApp, selector: &str, date: Option<NaiveDate>) -> Result<(), AppError> {
    let Some(habit) = find_habit(app.store(), selector) else {
        println!("No habit matches '{}'", selector);
        return Ok(());
    };

    let date = date.unwrap_or_else(local_today);
    let completed = app.store_mut().toggle_completion(&habit.id, date).await;

    if completed {
        println!("Marked '{}' completed on {}", habit.name, date);
    } else {
        println!("Unmarked '{}' on {}", habit.name, date);
    }
    Ok(())
}
