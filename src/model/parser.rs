// File: src/model/parser.rs
//! Turns one line of user input into exactly one [`Command`].
//!
//! The parser is pure: it either constructs a command or fails with a
//! human-readable error, and touches nothing else. All argument-presence
//! and date-grammar validation happens here so the commands themselves
//! only ever see well-formed data.
use crate::command::Command;
use crate::model::item::{Task, parse_date};
use anyhow::{Result, bail};
use std::str::FromStr;
use strum::{Display, EnumString};

/// Keywords whose argument is free text (or a date, for `check`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
enum StringKeyword {
    Todo,
    Deadline,
    Event,
    Check,
    Find,
}

/// Keywords whose argument is a comma-separated list of 1-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
enum IntKeyword {
    Mark,
    Unmark,
    Delete,
}

/// Parses one input line into a command.
pub fn parse(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("The command cannot be empty.");
    }

    // A bare keyword with no argument gets its own error before generic
    // dispatch, otherwise e.g. a lone `todo` would fall through to the
    // sub-parser and silently build an empty-description task.
    if let Ok(kw) = StringKeyword::from_str(trimmed) {
        bail!("The description of a {kw} cannot be empty.");
    }
    if let Ok(kw) = IntKeyword::from_str(trimmed) {
        bail!("Please specify a valid task number to {kw}.");
    }

    if trimmed == "list" {
        return Ok(Command::List);
    }
    if trimmed.eq_ignore_ascii_case("bye") {
        return Ok(Command::Exit);
    }

    let (instruction, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (trimmed, ""),
    };

    if let Ok(kw) = StringKeyword::from_str(instruction) {
        return parse_string_command(kw, rest);
    }
    if let Ok(kw) = IntKeyword::from_str(instruction) {
        return parse_int_command(kw, rest);
    }

    bail!("I'm sorry, but I don't know what that means :-(");
}

fn parse_string_command(kw: StringKeyword, rest: &str) -> Result<Command> {
    match kw {
        StringKeyword::Todo => Ok(Command::Add(Task::todo(rest))),
        StringKeyword::Deadline => {
            let Some((desc, date)) = rest.split_once("/by") else {
                bail!("Please specify a deadline.");
            };
            let Ok(by) = parse_date(date.trim()) else {
                bail!("Invalid date format. Please use yyyy-MM-dd.");
            };
            Ok(Command::Add(Task::deadline(desc.trim(), by)))
        }
        StringKeyword::Event => {
            let Some((desc, dates)) = rest.split_once("/from") else {
                bail!("Please specify a start AND end date.");
            };
            let Some((from, to)) = dates.split_once("/to") else {
                bail!("Please specify a start AND end date.");
            };
            match (parse_date(from.trim()), parse_date(to.trim())) {
                (Ok(from), Ok(to)) => Ok(Command::Add(Task::event(desc.trim(), from, to))),
                _ => bail!("Invalid date format. Please use yyyy-MM-dd with a valid date."),
            }
        }
        StringKeyword::Check => match parse_date(rest) {
            Ok(date) => Ok(Command::Check(date)),
            Err(_) => bail!("Invalid date format. Please use yyyy-MM-dd with a valid date."),
        },
        StringKeyword::Find => Ok(Command::Find(rest.to_string())),
    }
}

fn parse_int_command(kw: IntKeyword, rest: &str) -> Result<Command> {
    let indices = parse_indices(rest)?;
    Ok(match kw {
        IntKeyword::Mark => Command::Mark {
            indices,
            done: true,
        },
        IntKeyword::Unmark => Command::Mark {
            indices,
            done: false,
        },
        IntKeyword::Delete => Command::Delete(indices),
    })
}

/// Parses a comma-separated list of 1-based indices into 0-based ones.
///
/// Only all-digit tokens are accepted (no signs, no decimals); `0` is
/// rejected here too since there is no task 0.
fn parse_indices(rest: &str) -> Result<Vec<usize>> {
    let mut indices = Vec::new();
    for token in rest.split(',') {
        let token = token.trim();
        let numeric = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
        match token.parse::<usize>() {
            Ok(n) if numeric && n >= 1 => indices.push(n - 1),
            _ => bail!("Please specify valid index/indices using integers."),
        }
    }
    Ok(indices)
}
