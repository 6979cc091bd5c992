/// Basic unit tests to verify core functionality
use chrono::NaiveDate;
use habitkeep::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new("Test Habit");

        assert!(habit.is_ok());
        assert_eq!(habit.unwrap().name, "Test Habit");
    }

    #[test]
    fn test_completion_record_creation() {
        let habit_id = HabitId::new();
        let record = CompletionRecord::new(habit_id, d(2024, 3, 12));

        assert_eq!(record.habit_id, habit_id);
        assert!(record.completed);
    }

    #[test]
    fn test_streak_functions_on_known_data() {
        let dates = [d(2024, 3, 10), d(2024, 3, 11), d(2024, 3, 12)];

        assert_eq!(stats::current_streak(&dates, d(2024, 3, 12)), 3);
        assert_eq!(stats::longest_streak(&dates, d(2024, 3, 12)), 3);
        assert_eq!(stats::completions_in_month(&dates, 2024, 3, d(2024, 3, 12)), 3);
    }

    #[test]
    fn test_calendar_grid_for_leap_february() {
        let blanks = calendar::first_weekday_of_month(2024, 2);
        let grid = calendar::month_grid(2024, 2);

        assert_eq!(grid.len(), (blanks + 29) as usize);
    }

    #[tokio::test]
    async fn test_app_creation() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let app = HabitApp::open(dir.path().to_path_buf()).await;
        assert!(app.is_ok());
    }

    #[test]
    fn test_file_gateway_creation() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let gateway = FileGateway::new(dir.path().to_path_buf());
        assert!(gateway.is_ok());
    }

    #[test]
    fn test_gateway_trait_object() {
        let gateway = MemoryGateway::new();
        let _: &dyn StorageGateway = &gateway;
    }
}
