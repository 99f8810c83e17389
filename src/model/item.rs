// File: src/model/item.rs
use anyhow::{Result, bail};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar date in strict `YYYY-MM-DD` form.
///
/// Stricter than chrono's default: the shape is checked first so that
/// unpadded inputs like `2024-1-5` are rejected and every accepted string
/// reformats back to itself.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        bail!("not a YYYY-MM-DD date: {s}");
    }
    match NaiveDate::parse_from_str(s, DATE_FORMAT) {
        Ok(d) => Ok(d),
        Err(_) => bail!("not a valid calendar date: {s}"),
    }
}

/// What kind of task this is, with the dates that kind carries.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDate },
    Event { from: NaiveDate, to: NaiveDate },
}

impl TaskKind {
    /// One-letter tag used in both the display form and the persisted line.
    pub fn tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: impl Into<String>, kind: TaskKind) -> Self {
        Self {
            description: description.into(),
            done: false,
            kind,
        }
    }

    pub fn todo(description: impl Into<String>) -> Self {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: impl Into<String>, by: NaiveDate) -> Self {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Self::new(description, TaskKind::Event { from, to })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn status_icon(&self) -> &'static str {
        if self.done { "X" } else { " " }
    }

    /// Sets the completion state. Idempotent; the only mutation a task allows.
    pub fn mark(&mut self, done: bool) {
        self.done = done;
    }

    /// Returns true if `date` falls on this task's deadline or within its
    /// event range. Plain todos never match. A reversed event range
    /// (from > to) contains no date.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match &self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { by } => *by == date,
            TaskKind::Event { from, to } => *from <= date && date <= *to,
        }
    }

    /// Encodes the task as one pipe-delimited store line.
    ///
    /// Must round-trip through [`Task::from_persisted_line`] byte-for-byte.
    pub fn to_persisted_line(&self) -> String {
        let flag = if self.done { "1" } else { "0" };
        match &self.kind {
            TaskKind::Todo => format!("T | {} | {}", flag, self.description),
            TaskKind::Deadline { by } => format!(
                "D | {} | {} | {}",
                flag,
                self.description,
                by.format(DATE_FORMAT)
            ),
            TaskKind::Event { from, to } => format!(
                "E | {} | {} | {} | {}",
                flag,
                self.description,
                from.format(DATE_FORMAT),
                to.format(DATE_FORMAT)
            ),
        }
    }

    /// Decodes one store line produced by [`Task::to_persisted_line`].
    pub fn from_persisted_line(line: &str) -> Result<Task> {
        let tag = line.split('|').next().map(str::trim).unwrap_or_default();

        // Field count is fixed per tag; the T-line description is the last
        // field and may itself contain pipes, hence splitn.
        let field_count = match tag {
            "T" => 3,
            "D" => 4,
            "E" => 5,
            other => bail!("unknown task tag '{other}' in store line: {line}"),
        };
        let fields: Vec<&str> = line.splitn(field_count, '|').map(str::trim).collect();
        if fields.len() != field_count {
            bail!("expected {field_count} fields in store line: {line}");
        }

        let done = match fields[1] {
            "1" => true,
            "0" => false,
            other => bail!("invalid completion flag '{other}' in store line: {line}"),
        };
        let description = fields[2];
        if description.is_empty() {
            bail!("empty description in store line: {line}");
        }

        let kind = match tag {
            "T" => TaskKind::Todo,
            "D" => TaskKind::Deadline {
                by: parse_date(fields[3])?,
            },
            _ => TaskKind::Event {
                from: parse_date(fields[3])?,
                to: parse_date(fields[4])?,
            },
        };

        let mut task = Task::new(description, kind);
        task.mark(done);
        Ok(task)
    }
}
