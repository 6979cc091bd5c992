/// `habitkeep remove` - delete a habit and its completion history

use habitkeep::{AppError, HabitApp};

use crate::cli::find_habit;

pub async fn run(app: &mut HabitApp, selector: &str) -> Result<(), AppError> {
    let Some(habit) = find_habit(app.store(), selector) else {
        println!("No habit matches '{}'", selector);
        return Ok(());
    };

    app.store_mut().delete_habit(&habit.id).await;
    println!("Removed '{}' and its completion history", habit.name);
    Ok(())
}
