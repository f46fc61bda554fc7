use super::task::Task;
use prettytable::{row, Table};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        Self::tasks_table(tasks).printstd();
    }

    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATUS", "DUE", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id.as_deref().unwrap_or("-"),
                task.title,
                task.status,
                Self::due(task),
                task.created_at
                    .map(|created_at| created_at.format(DATE_FORMAT).to_string())
                    .unwrap_or_default()
            ]);
        }
        table
    }

    /// Prints every field of a single task.
    pub fn task(task: &Task) {
        Self::task_table(task).printstd();
    }

    pub fn task_table(task: &Task) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id.as_deref().unwrap_or("-")]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description.as_deref().unwrap_or("")]);
        table.add_row(row!["STATUS", task.status]);
        table.add_row(row!["DUE", Self::due(task)]);
        if let Some(created_at) = task.created_at {
            table.add_row(row!["CREATED", created_at.format(DATETIME_FORMAT)]);
        }
        if let Some(updated_at) = task.updated_at {
            table.add_row(row!["UPDATED", updated_at.format(DATETIME_FORMAT)]);
        }
        table
    }

    fn due(task: &Task) -> String {
        task.due_date.map(|date| date.format(DATE_FORMAT).to_string()).unwrap_or_default()
    }
}
