#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskdeck::libs::export::{ExportFormat, Exporter};
    use taskdeck::libs::task::{Priority, Task, TaskStatus};

    fn task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            status: TaskStatus::Todo,
            priority: Priority::High,
            folder_id: "f1".to_string(),
            parent_task_id: None,
            creator_id: "u1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            end_date: None,
            progress: 40,
            created_at: None,
            updated_at: None,
            assignee_ids: vec!["u2".to_string(), "u3".to_string()],
        }
    }

    #[test]
    fn test_csv_export_writes_one_row_per_task() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.csv");
        let tasks = vec![task("t1", "Fix bug"), task("t2", "Write docs")];

        Exporter::new(&tasks).export(ExportFormat::Csv, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 3); // header + one row per task
        assert_eq!(lines[0], "id,title,status,priority,progress,start_date,end_date,assignees");
        assert!(lines[1].contains("Fix bug"));
        assert!(lines[1].contains("TODO"));
        assert!(lines[1].contains("u2;u3"));
        assert!(lines[2].contains("Write docs"));
    }

    #[test]
    fn test_json_export_roundtrips() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");
        let tasks = vec![task("t1", "Fix bug")];

        Exporter::new(&tasks).export(ExportFormat::Json, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Vec<Task> = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "t1");
        assert_eq!(loaded[0].title, "Fix bug");
        assert_eq!(loaded[0].status, TaskStatus::Todo);
        assert_eq!(loaded[0].progress, 40);
        assert_eq!(loaded[0].assignee_ids, vec!["u2".to_string(), "u3".to_string()]);
    }
}
