use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub task: String,
    pub submitted: String, // DD-MM-YYYY
    pub status: String,    // "in-progress", "need to start", "complete", "blocked"
    pub assignee: String,
    pub url: String, // hostname, no scheme
    pub submitter: String,
    pub priority: String, // "High", "Medium", "Low" (casing varies)
    pub due_date: String,
    pub extract: i64,
    pub addnew: Option<()>,
}

impl Task {
    /// A freshly added row: everything but the description and date is a default.
    pub fn new_draft(id: u32, description: String, date: String) -> Self {
        Self {
            id,
            task: description,
            submitted: date.clone(),
            status: "need to start".to_string(),
            assignee: String::new(),
            url: String::new(),
            submitter: String::new(),
            priority: "Medium".to_string(),
            due_date: date,
            extract: 0,
            addnew: None,
        }
    }
}
