/// `habitkeep month` - render one month of completions as a 7-column grid
///
/// The grid layout comes from the calendar builder; completion marks are
/// composed in from the streak engine at render time.

use chrono::NaiveDate;

use habitkeep::calendar::{days_in_month, GridCell, MonthCursor};
use habitkeep::{stats, AppError, HabitApp};

use crate::cli::{find_habit, local_today};

pub fn run(
    app: &HabitApp,
    selector: &str,
    year: Option<i32>,
    month: Option<u32>,
    back: u32,
) -> Result<(), AppError> {
    let Some(habit) = find_habit(app.store(), selector) else {
        println!("No habit matches '{}'", selector);
        return Ok(());
    };

    let today = local_today();
    let mut cursor = match (year, month) {
        (Some(y), Some(m)) => MonthCursor::new(y, m),
        (None, None) => MonthCursor::containing(today),
        _ => {
            println!("--year and --month must be given together");
            return Ok(());
        }
    };
    for _ in 0..back {
        cursor = cursor.prev();
    }

    let dates = app.store().completion_dates(&habit.id);
    print_month(&habit.name, cursor, &dates);
    Ok(())
}

fn print_month(habit_name: &str, cursor: MonthCursor, dates: &[NaiveDate]) {
    let month_name = NaiveDate::from_ymd_opt(cursor.year, cursor.month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default();

    println!(
        "{}: {} {} - {} days",
        habit_name,
        month_name,
        cursor.year,
        days_in_month(cursor.year, cursor.month)
    );
    println!("  Su  Mo  Tu  We  Th  Fr  Sa");

    for row in cursor.grid().chunks(7) {
        let mut line = String::new();
        for cell in row {
            match cell {
                GridCell::Blank => line.push_str("    "),
                GridCell::Day(day) => {
                    let done =
                        stats::is_day_completed(dates, cursor.year, cursor.month, *day);
                    if done {
                        line.push_str(&format!(" {:>2}*", day));
                    } else {
                        line.push_str(&format!(" {:>2} ", day));
                    }
                }
            }
        }
        println!("{}", line.trim_end());
    }
    println!("  (* = completed)");
}
