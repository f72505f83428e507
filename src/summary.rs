//! Aggregation behind the summary page.

use chrono::NaiveDate;

use crate::api::models::{Task, TaskPriority, TaskStatus};

/// Baseline shown when no urgent task carries a later due date.
const FALLBACK_DEADLINE: &str = "2021-06-04";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub in_progress: usize,
    pub awaiting_feedback: usize,
    pub todo: usize,
    pub done: usize,
    pub urgent: usize,
    /// Resolved urgent due date, still in the stored `YYYY-MM-DD` form.
    pub urgent_deadline: String,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let by_status = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();

        // Plain string comparison over the stored YYYY-MM-DD form, not
        // calendar-aware.
        let mut deadline = FALLBACK_DEADLINE.to_string();
        for task in tasks {
            if task.priority != TaskPriority::Urgent {
                continue;
            }
            if let Some(due) = &task.due_date {
                if due.as_str() > deadline.as_str() {
                    deadline = due.clone();
                }
            }
        }

        Self {
            total: tasks.len(),
            in_progress: by_status(TaskStatus::InProgress),
            awaiting_feedback: by_status(TaskStatus::AwaitingFeedback),
            todo: by_status(TaskStatus::Todo),
            done: by_status(TaskStatus::Done),
            urgent: tasks.iter().filter(|t| t.priority == TaskPriority::Urgent).count(),
            urgent_deadline: deadline,
        }
    }

    /// "2024-03-01" renders as "March 1, 2024"; anything unparseable is
    /// shown as-is.
    pub fn deadline_display(&self) -> String {
        match NaiveDate::parse_from_str(&self.urgent_deadline, "%Y-%m-%d") {
            Ok(date) => date.format("%B %-d, %Y").to_string(),
            Err(_) => self.urgent_deadline.clone(),
        }
    }
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning,"
    } else if hour < 17 {
        "Good afternoon,"
    } else {
        "Good evening,"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: TaskStatus, priority: TaskPriority, due: Option<&str>) -> Task {
        Task {
            status,
            priority,
            due_date: due.map(|d| d.to_string()),
        }
    }

    #[test]
    fn counts_by_status_and_priority() {
        let tasks = vec![
            task(TaskStatus::Todo, TaskPriority::Low, None),
            task(TaskStatus::Done, TaskPriority::Medium, None),
            task(TaskStatus::Todo, TaskPriority::Urgent, Some("2024-03-01")),
        ];
        let summary = TaskSummary::from_tasks(&tasks);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.todo, 2);
        assert_eq!(summary.done, 1);
        assert_eq!(summary.in_progress, 0);
        assert_eq!(summary.awaiting_feedback, 0);
        assert_eq!(summary.urgent, 1);
        assert_eq!(summary.deadline_display(), "March 1, 2024");
    }

    #[test]
    fn deadline_falls_back_when_nothing_is_urgent() {
        let tasks = vec![task(TaskStatus::Todo, TaskPriority::Low, Some("2030-01-01"))];
        let summary = TaskSummary::from_tasks(&tasks);
        assert_eq!(summary.urgent_deadline, "2021-06-04");
        assert_eq!(summary.deadline_display(), "June 4, 2021");
    }

    #[test]
    fn deadline_takes_the_string_maximum_of_urgent_dates() {
        let tasks = vec![
            task(TaskStatus::Todo, TaskPriority::Urgent, Some("2024-03-01")),
            task(TaskStatus::Done, TaskPriority::Urgent, Some("2025-01-15")),
            task(TaskStatus::Todo, TaskPriority::Urgent, Some("2023-12-31")),
        ];
        let summary = TaskSummary::from_tasks(&tasks);
        assert_eq!(summary.urgent_deadline, "2025-01-15");
        assert_eq!(summary.deadline_display(), "January 15, 2025");
    }

    #[test]
    fn urgent_task_without_due_date_keeps_the_fallback() {
        let tasks = vec![task(TaskStatus::Todo, TaskPriority::Urgent, None)];
        let summary = TaskSummary::from_tasks(&tasks);
        assert_eq!(summary.urgent, 1);
        assert_eq!(summary.urgent_deadline, "2021-06-04");
    }

    #[test]
    fn unparseable_deadline_is_shown_raw() {
        let tasks = vec![task(TaskStatus::Todo, TaskPriority::Urgent, Some("soon"))];
        let summary = TaskSummary::from_tasks(&tasks);
        assert_eq!(summary.deadline_display(), "soon");
    }

    #[test]
    fn empty_board_summarizes_to_zeroes() {
        let summary = TaskSummary::from_tasks(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.urgent, 0);
        assert_eq!(summary.urgent_deadline, "2021-06-04");
    }

    #[test]
    fn greeting_tracks_the_hour() {
        assert_eq!(greeting_for_hour(0), "Good morning,");
        assert_eq!(greeting_for_hour(11), "Good morning,");
        assert_eq!(greeting_for_hour(12), "Good afternoon,");
        assert_eq!(greeting_for_hour(16), "Good afternoon,");
        assert_eq!(greeting_for_hour(17), "Good evening,");
        assert_eq!(greeting_for_hour(23), "Good evening,");
    }
}
