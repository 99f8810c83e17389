// File: src/ui.rs
//! User-facing rendering collaborator. Best-effort by contract: write
//! failures are ignored, never propagated.
use crate::model::{Task, TaskDisplay};
use std::io::{self, Write};

const RULE: &str = "____________________________________________________________";

pub struct Ui {
    out: Box<dyn Write>,
}

impl Ui {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Discards all output; used by tests that only inspect state.
    pub fn sink() -> Self {
        Self::new(Box::new(io::sink()))
    }

    fn framed(&mut self, lines: &[String]) {
        let _ = writeln!(self.out, "{RULE}");
        for line in lines {
            let _ = writeln!(self.out, " {line}");
        }
        let _ = writeln!(self.out, "{RULE}");
    }

    pub fn greet(&mut self) {
        self.framed(&[
            "Hello! I'm Jo.".to_string(),
            "What can I do for you?".to_string(),
        ]);
    }

    pub fn farewell(&mut self) {
        self.framed(&["Bye. Hope to see you again soon!".to_string()]);
    }

    pub fn show_error(&mut self, message: &str) {
        self.framed(&[format!("OOPS!!! {message}")]);
    }

    pub fn added(&mut self, task: &Task, total: usize) {
        self.framed(&[
            "Got it. I've added this task:".to_string(),
            format!("  {}", task.display_line()),
            format!("Now you have {total} task(s) in the list."),
        ]);
    }

    pub fn marked(&mut self, tasks: &[&Task], done: bool) {
        let mut lines = vec![if done {
            "Nice! I've marked these task(s) as done:".to_string()
        } else {
            "OK, I've marked these task(s) as not done yet:".to_string()
        }];
        lines.extend(tasks.iter().map(|t| format!("  {}", t.display_line())));
        self.framed(&lines);
    }

    pub fn removed(&mut self, tasks: &[Task], total: usize) {
        let mut lines = vec!["Noted. I've removed these task(s):".to_string()];
        lines.extend(tasks.iter().map(|t| format!("  {}", t.display_line())));
        lines.push(format!("Now you have {total} task(s) in the list."));
        self.framed(&lines);
    }

    /// Renders a 1-based numbered listing under the given heading.
    pub fn render_list<'a, I>(&mut self, heading: &str, tasks: I)
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut lines = vec![heading.to_string()];
        let mut count = 0;
        for (i, task) in tasks.into_iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, task.display_line()));
            count += 1;
        }
        if count == 0 {
            lines.push("(nothing found)".to_string());
        }
        self.framed(&lines);
    }
}
