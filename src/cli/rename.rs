/// `habitkeep rename` - rename a habit through the inline-edit flow

use habitkeep::{AppError, HabitApp};

use crate::cli::find_habit;

pub async fn run(app: &mut HabitApp, selector: &str, new_name: &str) -> Result<(), AppError> {
    let Some(habit) = find_habit(app.store(), selector) else {
        println!("No habit matches '{}'", selector);
        return Ok(());
    };

    let store = app.store_mut();
    store.start_editing(&habit.id, &habit.name);
    store.set_edit_buffer(new_name);
    store.commit_editing(&habit.id).await;

    match store.habit(&habit.id) {
        Some(renamed) if renamed.name != habit.name => {
            println!("Renamed '{}' to '{}'", habit.name, renamed.name)
        }
        _ => println!("Name unchanged"),
    }
    Ok(())
}
