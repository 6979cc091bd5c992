/// `habitkeep add` - create a new habit

use habitkeep::{AppError, HabitApp};

pub async fn run(app: &mut HabitApp, raw_name: &str) -> Result<(), AppError> {
    match app.store_mut().add_habit(raw_name).await {
        Some(habit) => println!("Added habit '{}' ({})", habit.name, habit.id),
        None => println!("Habit name cannot be empty"),
    }
    Ok(())
}
