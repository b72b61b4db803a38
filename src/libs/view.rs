use crate::libs::folder::Folder;
use crate::libs::task::Task;
use crate::libs::user::User;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the folder forest, children indented under their parent.
    pub fn folders(folders: &[Folder]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CREATED"]);
        Self::add_folder_rows(&mut table, folders, 0);
        table.printstd();

        Ok(())
    }

    fn add_folder_rows(table: &mut Table, folders: &[Folder], depth: usize) {
        for folder in folders {
            let name = format!("{}{}", "  ".repeat(depth), folder.name);
            let created = folder
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row![folder.id, name, created]);
            Self::add_folder_rows(table, &folder.children, depth + 1);
        }
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "PRIORITY", "PROGRESS", "ASSIGNEES", "START", "END"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.status,
                task.priority,
                format!("{}%", task.progress),
                task.assignee_ids.join(", "),
                Self::date(task.start_date),
                Self::date(task.end_date)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "USERNAME", "ROLE"]);
        for user in users {
            table.add_row(row![user.id, user.username, user.role]);
        }
        table.printstd();

        Ok(())
    }

    fn date(date: Option<chrono::NaiveDate>) -> String {
        date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "-".to_string())
    }
}
