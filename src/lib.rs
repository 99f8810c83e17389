// Crate root library declaration and module exports.
pub mod cli;
pub mod command;
pub mod config;
pub mod model;
pub mod paths;
pub mod storage;
pub mod tasklist;
pub mod ui;

pub use command::Command;
pub use model::{Task, TaskKind};
pub use storage::Storage;
pub use tasklist::TaskList;
pub use ui::Ui;
