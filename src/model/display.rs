// File: src/model/display.rs
use crate::model::item::{DATE_FORMAT, Task, TaskKind};

pub trait TaskDisplay {
    fn display_line(&self) -> String;
}

impl TaskDisplay for Task {
    /// Human-readable listing form, e.g.
    /// `[D][X] submit report (by: 2024-01-05)`.
    fn display_line(&self) -> String {
        let head = format!("[{}][{}] ", self.kind().tag(), self.status_icon());
        match self.kind() {
            TaskKind::Todo => format!("{head}{}", self.description()),
            TaskKind::Deadline { by } => format!(
                "{head}{} (by: {})",
                self.description(),
                by.format(DATE_FORMAT)
            ),
            TaskKind::Event { from, to } => format!(
                "{head}{} (from: {} to: {})",
                self.description(),
                from.format(DATE_FORMAT),
                to.format(DATE_FORMAT)
            ),
        }
    }
}
