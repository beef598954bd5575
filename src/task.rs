use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Shopping,
    Health,
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Local>>,
    // Carried through snapshots; nothing in the UI sets these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Builds a fresh, incomplete task with a random v4 id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: Some(Local::now()),
            category: None,
            priority: None,
            due_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_incomplete_with_unique_id() {
        let a = Task::new("Buy milk", "");
        let b = Task::new("Buy milk", "");
        assert!(!a.completed);
        assert_ne!(a.id, b.id);
        assert!(a.created_at.is_some());
    }

    #[test]
    fn loads_snapshot_without_optional_fields() {
        let raw = r#"[{"id":"1700000000000","title":"Call Bob","description":"re: meeting","completed":true}]"#;
        let tasks: Vec<Task> = serde_json::from_str(raw).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "1700000000000");
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].created_at, None);
        assert_eq!(tasks[0].category, None);
    }

    #[test]
    fn uses_camel_case_and_lowercase_enums() {
        let mut task = Task::new("Dentist", "");
        task.category = Some(Category::Health);
        task.priority = Some(Priority::High);
        task.due_date = NaiveDate::from_ymd_opt(2024, 5, 1);

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["category"], "health");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["dueDate"], "2024-05-01");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("due_date").is_none());
    }
}
