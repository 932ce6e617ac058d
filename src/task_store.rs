use crate::error::Result;
use crate::format::format_date;
use crate::task::Task;
use chrono::NaiveDate;

const SEED: &str = include_str!("seed.json");

/// Append-only list of tasks in insertion order.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// The five fixed records every board starts with.
    pub fn initialize() -> Result<Self> {
        let tasks = serde_json::from_str(SEED)?;
        Ok(Self { tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    /// Blank (after trimming) descriptions are ignored. The description is
    /// stored exactly as given.
    pub fn add_task(&mut self, description: &str, today: NaiveDate) -> Option<&Task> {
        if description.trim().is_empty() {
            return None;
        }
        let task = Task::new_draft(self.next_id(), description.to_string(), format_date(today));
        self.tasks.push(task);
        self.tasks.last()
    }
}
