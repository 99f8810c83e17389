// File: src/model/mod.rs
pub mod display;
pub mod item;
pub mod parser;

pub use display::TaskDisplay;
pub use item::{DATE_FORMAT, Task, TaskKind, parse_date};
pub use parser::parse;
