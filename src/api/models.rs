use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Accent colors assigned to new contacts.
pub const ACCENT_PALETTE: &[&str] = &[
    "#FF7A00", "#FF5EB3", "#6E52FF", "#9327FF", "#00BEE8", "#1FD7C1", "#FF745E", "#FFA35E",
    "#FC71FF", "#FFC701", "#0038FF", "#C3FF2B", "#FFE62B", "#FF4646", "#FFBB2B",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Stable identity; legacy records arrive without one and get it on decode.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub color: String,
}

impl Contact {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        let id = Uuid::new_v4();
        let color = ACCENT_PALETTE[(id.as_u128() % ACCENT_PALETTE.len() as u128) as usize];
        Self {
            id: id.to_string(),
            name: crate::utils::capitalize_first(name),
            email: email.to_string(),
            phone: phone.to_string(),
            color: color.to_string(),
        }
    }

    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[serde(rename = "inProgress")]
    InProgress,
    #[serde(rename = "awaitingFeedback")]
    AwaitingFeedback,
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "done")]
    Done,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskPriority {
    #[serde(rename = "urgent")]
    Urgent,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
    #[default]
    #[serde(other)]
    Other,
}

/// A board task as stored remotely. Only the fields the summary needs are
/// modeled; the rest of the record is ignored on decode.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Task {
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, rename = "dueDate")]
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurrentUser {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_contact_capitalizes_and_gets_palette_color() {
        let contact = Contact::new("bob", "bob@example.com", "0123");
        assert_eq!(contact.name, "Bob");
        assert!(!contact.id.is_empty());
        assert!(ACCENT_PALETTE.contains(&contact.color.as_str()));
    }

    #[test]
    fn legacy_record_decodes_without_id() {
        let raw = r#"{"name":"Anna","email":"a@b.c","phone":"1","color":"#FF7A00"}"#;
        let mut contact: Contact = serde_json::from_str(raw).unwrap();
        assert!(contact.id.is_empty());
        contact.ensure_id();
        assert!(!contact.id.is_empty());
        let kept = contact.id.clone();
        contact.ensure_id();
        assert_eq!(contact.id, kept);
    }

    #[test]
    fn unknown_task_fields_fall_back() {
        let raw = r#"{"status":"review","priority":"someday","title":"x"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.status, TaskStatus::Other);
        assert_eq!(task.priority, TaskPriority::Other);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn task_statuses_decode_by_wire_name() {
        let raw = r#"{"status":"awaitingFeedback","priority":"urgent","dueDate":"2024-03-01"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.status, TaskStatus::AwaitingFeedback);
        assert_eq!(task.priority, TaskPriority::Urgent);
        assert_eq!(task.due_date.as_deref(), Some("2024-03-01"));
    }
}
