// File: src/storage.rs
//! Local file storage for the task list.
//!
//! The store is one task per line in the pipe-delimited format owned by
//! [`Task::to_persisted_line`]. Every mutating command triggers a full-file
//! rewrite; writes go through an advisory lock plus a tmp-file rename so a
//! concurrent or interrupted writer cannot leave a torn file behind.
use crate::config::Config;
use crate::model::Task;
use crate::paths::AppPaths;
use crate::tasklist::TaskList;
use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store at the configured location: the config file's
    /// `data_file` override if set, the standard data directory otherwise.
    pub fn open_default(config: &Config) -> Result<Self> {
        let path = match &config.data_file {
            Some(p) => p.clone(),
            None => AppPaths::get_task_file_path()?,
        };
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: write to a .tmp file then rename over the target.
    fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Loads the task list from disk. A missing file is an empty list.
    /// Undecodable lines are skipped with a warning rather than refusing to
    /// start; the next successful write drops them for good.
    pub fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            return Ok(TaskList::new());
        }

        let content = Self::with_lock(&self.path, || {
            fs::read_to_string(&self.path)
                .with_context(|| format!("Failed to read task file {:?}", self.path))
        })?;

        let mut tasks = Vec::new();
        let mut skipped = 0usize;
        for (lineno, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Task::from_persisted_line(line) {
                Ok(task) => tasks.push(task),
                Err(e) => {
                    skipped += 1;
                    log::warn!("Skipping task file line {}: {e}", lineno + 1);
                }
            }
        }
        if skipped > 0 {
            log::warn!("Skipped {skipped} corrupt line(s) in {:?}", self.path);
        }
        log::info!("Loaded {} task(s) from {:?}", tasks.len(), self.path);
        Ok(TaskList::from_tasks(tasks))
    }

    /// Persists the full task list, overwriting the previous contents.
    pub fn update(&self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        let mut contents = String::new();
        for task in tasks {
            contents.push_str(&task.to_persisted_line());
            contents.push('\n');
        }

        Self::with_lock(&self.path, || {
            Self::atomic_write(&self.path, &contents)
                .with_context(|| format!("Failed to write task file {:?}", self.path))
        })?;
        log::info!("Saved {} task(s) to {:?}", tasks.len(), self.path);
        Ok(())
    }
}
