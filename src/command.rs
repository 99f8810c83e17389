// File: src/command.rs
//! The closed set of executable actions the parser can produce.
//!
//! Each variant is immutable once constructed and carries only the data its
//! one `execute` call needs. Mutating variants persist through the storage
//! collaborator on every invocation, then report through the Ui.
use crate::model::Task;
use crate::storage::Storage;
use crate::tasklist::TaskList;
use crate::ui::Ui;
use anyhow::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Task),
    /// Batch (un)mark; indices are 0-based.
    Mark { indices: Vec<usize>, done: bool },
    /// Batch delete; indices are 0-based.
    Delete(Vec<usize>),
    List,
    Find(String),
    Check(NaiveDate),
    Exit,
}

impl Command {
    /// True only for the `bye` command; the read loop terminates on it.
    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Runs the command: mutate the list (if the variant mutates), persist,
    /// then report. An index or storage error aborts with no partial batch
    /// applied (storage lag is the documented exception: a failed write does
    /// not roll back the in-memory change).
    pub fn execute(self, tasks: &mut TaskList, ui: &mut Ui, storage: &Storage) -> Result<()> {
        match self {
            Command::Add(task) => {
                tasks.add(task);
                storage.update(tasks)?;
                let added = tasks.get(tasks.len() - 1)?;
                ui.added(added, tasks.len());
            }
            Command::Mark { indices, done } => {
                // Validate the whole batch before touching anything so a bad
                // index cannot leave the batch half-applied.
                for &i in &indices {
                    tasks.get(i)?;
                }
                for &i in &indices {
                    tasks.get_mut(i)?.mark(done);
                }
                storage.update(tasks)?;
                let marked: Vec<&Task> = indices
                    .iter()
                    .filter_map(|&i| tasks.get(i).ok())
                    .collect();
                ui.marked(&marked, done);
            }
            Command::Delete(indices) => {
                for &i in &indices {
                    tasks.get(i)?;
                }
                // Indices refer to the list as it was before any removal, so
                // dedup and remove highest-first; lower targets keep their
                // positions.
                let mut order: Vec<usize> = indices;
                order.sort_unstable();
                order.dedup();
                let mut removed: Vec<Task> = Vec::with_capacity(order.len());
                for &i in order.iter().rev() {
                    removed.push(tasks.remove(i)?);
                }
                removed.reverse();
                storage.update(tasks)?;
                ui.removed(&removed, tasks.len());
            }
            Command::List => {
                ui.render_list("Here are the tasks in your list:", tasks.iter());
            }
            Command::Find(keyword) => {
                let needle = keyword.to_lowercase();
                ui.render_list(
                    "Here are the matching tasks in your list:",
                    tasks
                        .iter()
                        .filter(|t| t.description().to_lowercase().contains(&needle)),
                );
            }
            Command::Check(date) => {
                ui.render_list(
                    &format!("Here are the tasks on {date}:"),
                    tasks.iter().filter(|t| t.occurs_on(date)),
                );
            }
            Command::Exit => {
                ui.farewell();
            }
        }
        Ok(())
    }
}
