// File: src/tasklist.rs
use crate::model::Task;
use anyhow::{Result, bail};

/// Ordered, index-addressed task container for one session.
///
/// Insertion order is display order is persisted order. Indices are 0-based
/// here; everything user-facing is 1-based, so error messages add one back.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    items: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(items: Vec<Task>) -> Self {
        Self { items }
    }

    pub fn add(&mut self, task: Task) {
        self.items.push(task);
    }

    pub fn get(&self, index: usize) -> Result<&Task> {
        match self.items.get(index) {
            Some(task) => Ok(task),
            None => bail!(
                "Task number {} is out of range (the list has {} task(s)).",
                index + 1,
                self.items.len()
            ),
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task> {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(task) => Ok(task),
            None => bail!(
                "Task number {} is out of range (the list has {} task(s)).",
                index + 1,
                len
            ),
        }
    }

    pub fn remove(&mut self, index: usize) -> Result<Task> {
        if index >= self.items.len() {
            bail!(
                "Task number {} is out of range (the list has {} task(s)).",
                index + 1,
                self.items.len()
            );
        }
        Ok(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
