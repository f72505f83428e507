use gtk4::prelude::*;
use gtk4 as gtk;

use chrono::Timelike;

use crate::summary::TaskSummary;

/// Dashboard page: greeting, count tiles, and the urgent deadline.
pub struct SummaryView {
    root: gtk::Box,
    greeting_text: gtk::Label,
    greeting_name: gtk::Label,
    total: gtk::Label,
    in_progress: gtk::Label,
    awaiting_feedback: gtk::Label,
    todo: gtk::Label,
    done: gtk::Label,
    urgent: gtk::Label,
    deadline: gtk::Label,
}

fn tile(grid: &gtk::Grid, column: i32, row: i32, caption: &str) -> gtk::Label {
    let tile_box = gtk::Box::new(gtk::Orientation::Vertical, 4);
    tile_box.add_css_class("card");
    tile_box.set_margin_top(4);
    tile_box.set_margin_bottom(4);
    tile_box.set_margin_start(4);
    tile_box.set_margin_end(4);

    let value = gtk::Label::new(Some("0"));
    value.add_css_class("title-1");
    value.set_margin_top(12);
    tile_box.append(&value);

    let label = gtk::Label::new(Some(caption));
    label.add_css_class("dim-label");
    label.set_margin_bottom(12);
    label.set_margin_start(16);
    label.set_margin_end(16);
    tile_box.append(&label);

    grid.attach(&tile_box, column, row, 1, 1);
    value
}

impl SummaryView {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.set_margin_top(16);
        root.set_margin_bottom(16);
        root.set_margin_start(16);
        root.set_margin_end(16);

        let greeting_row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        let greeting_text = gtk::Label::new(Some("Good morning,"));
        greeting_text.add_css_class("title-2");
        let greeting_name = gtk::Label::new(None);
        greeting_name.add_css_class("title-2");
        greeting_name.add_css_class("accent");
        greeting_row.append(&greeting_text);
        greeting_row.append(&greeting_name);
        root.append(&greeting_row);

        let grid = gtk::Grid::new();
        grid.set_column_spacing(8);
        grid.set_row_spacing(8);
        grid.set_column_homogeneous(true);

        let total = tile(&grid, 0, 0, "Tasks in Board");
        let in_progress = tile(&grid, 1, 0, "In Progress");
        let awaiting_feedback = tile(&grid, 2, 0, "Awaiting Feedback");
        let todo = tile(&grid, 0, 1, "To-do");
        let done = tile(&grid, 1, 1, "Done");
        let urgent = tile(&grid, 2, 1, "Urgent");
        root.append(&grid);

        let deadline_row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        let deadline_caption = gtk::Label::new(Some("Upcoming deadline:"));
        deadline_caption.add_css_class("dim-label");
        let deadline = gtk::Label::new(None);
        deadline.add_css_class("heading");
        deadline_row.append(&deadline_caption);
        deadline_row.append(&deadline);
        root.append(&deadline_row);

        Self {
            root,
            greeting_text,
            greeting_name,
            total,
            in_progress,
            awaiting_feedback,
            todo,
            done,
            urgent,
            deadline,
        }
    }

    pub fn widget(&self) -> gtk::Widget {
        self.root.clone().upcast()
    }

    pub fn set_summary(&self, summary: &TaskSummary) {
        self.total.set_label(&summary.total.to_string());
        self.in_progress.set_label(&summary.in_progress.to_string());
        self.awaiting_feedback.set_label(&summary.awaiting_feedback.to_string());
        self.todo.set_label(&summary.todo.to_string());
        self.done.set_label(&summary.done.to_string());
        self.urgent.set_label(&summary.urgent.to_string());
        self.deadline.set_label(&summary.deadline_display());
    }

    pub fn set_user(&self, name: &str) {
        let hour = chrono::Local::now().hour();
        self.greeting_text.set_label(crate::summary::greeting_for_hour(hour));
        self.greeting_name.set_label(name);
    }
}
