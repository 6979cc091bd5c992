/// Integration tests exercising the store against real file persistence
use chrono::NaiveDate;
use habitkeep::storage::keys;
use habitkeep::*;

#[cfg(test)]
mod store_integration_tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[tokio::test]
    async fn test_mutations_survive_a_reload() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = dir.path().to_path_buf();

        let habit_id = {
            let mut app = HabitApp::open(data_dir.clone())
                .await
                .expect("Failed to open first app");

            let habit = app.store_mut().add_habit("  Read  ").await.unwrap();
            assert_eq!(habit.name, "Read");

            app.store_mut()
                .toggle_completion(&habit.id, d(2024, 3, 12))
                .await;
            habit.id
        };

        let app = HabitApp::open(data_dir)
            .await
            .expect("Failed to open second app");

        assert_eq!(app.store().habits().len(), 1);
        assert_eq!(app.store().habit(&habit_id).unwrap().name, "Read");
        assert!(app.store().is_completed(&habit_id, d(2024, 3, 12)));
    }

    #[tokio::test]
    async fn test_delete_cascade_survives_a_reload() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = dir.path().to_path_buf();

        {
            let mut app = HabitApp::open(data_dir.clone()).await.unwrap();
            let habit = app.store_mut().add_habit("Run").await.unwrap();
            app.store_mut()
                .toggle_completion(&habit.id, d(2024, 3, 12))
                .await;
            app.store_mut().delete_habit(&habit.id).await;
        }

        let app = HabitApp::open(data_dir).await.unwrap();
        assert!(app.store().habits().is_empty());
        assert!(app.store().completions().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_collection_file_loads_as_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = dir.path().to_path_buf();

        let gateway = FileGateway::new(data_dir.clone()).unwrap();
        gateway.set(keys::HABITS, "{definitely not json").await.unwrap();

        let app = HabitApp::open(data_dir).await.expect("Open should not fail");
        assert!(app.store().habits().is_empty());
    }

    #[tokio::test]
    async fn test_persisted_wire_shapes() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = dir.path().to_path_buf();

        let mut app = HabitApp::open(data_dir.clone()).await.unwrap();
        let habit = app.store_mut().add_habit("Run").await.unwrap();
        app.store_mut()
            .toggle_completion(&habit.id, d(2024, 3, 12))
            .await;

        let gateway = app.gateway();

        let habits: serde_json::Value =
            serde_json::from_str(&gateway.get(keys::HABITS).await.unwrap().unwrap()).unwrap();
        assert!(habits[0].get("createdAt").is_some());
        assert_eq!(habits[0]["id"], habit.id.to_string());

        let completions: serde_json::Value =
            serde_json::from_str(&gateway.get(keys::COMPLETIONS).await.unwrap().unwrap())
                .unwrap();
        assert_eq!(completions[0]["habitId"], habit.id.to_string());
        assert_eq!(completions[0]["date"], "2024-03-12");
        assert_eq!(completions[0]["completed"], true);
    }

    #[tokio::test]
    async fn test_preferences_share_the_data_dir() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = dir.path().to_path_buf();

        {
            let mut app = HabitApp::open(data_dir.clone()).await.unwrap();
            app.prefs_mut().complete_onboarding("Ada").await;
            app.prefs_mut().set_color_scheme(ColorScheme::Dark).await;
        }

        let app = HabitApp::open(data_dir).await.unwrap();
        assert!(app.prefs().is_onboarded());
        assert_eq!(app.prefs().user_name(), Some("Ada"));
        assert_eq!(app.prefs().color_scheme(), Some(ColorScheme::Dark));
    }
}
