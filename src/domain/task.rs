use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub type TaskId = Uuid;

/// Priority tier of a task, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Display sort rank: high sorts before medium before low.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Coerces an external selector string; unknown values fall back to
    /// `Medium` rather than erroring.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            priority,
            created_at: now_ms(),
        }
    }
}

/// Current time as epoch milliseconds, the unit the snapshot format uses.
pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_coercion_defaults_to_medium() {
        assert_eq!(Priority::parse_or_default("high"), Priority::High);
        assert_eq!(Priority::parse_or_default(" LOW "), Priority::Low);
        assert_eq!(Priority::parse_or_default("medium"), Priority::Medium);
        assert_eq!(Priority::parse_or_default("urgent"), Priority::Medium);
        assert_eq!(Priority::parse_or_default(""), Priority::Medium);
    }

    #[test]
    fn snapshot_field_layout() {
        let task = Task::new("Buy milk", Priority::High);
        let value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["text"], "Buy milk");
        assert_eq!(value["completed"], false);
        assert_eq!(value["priority"], "high");
        assert!(value["id"].is_string());
        assert!(value["createdAt"].is_i64());
    }

    #[test]
    fn reads_stored_record() {
        let raw = r#"{
            "id": "0e4e4c8e-7d5a-4f3a-9f59-1a2b3c4d5e6f",
            "text": "Call mom",
            "completed": true,
            "priority": "low",
            "createdAt": 1714060800000
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();

        assert_eq!(task.text, "Call mom");
        assert!(task.completed);
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.created_at, 1_714_060_800_000);
    }
}
