// File: tests/parser_tests.rs
use chrono::NaiveDate;
use jo::command::Command;
use jo::model::{Task, parse};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn err_of(line: &str) -> String {
    parse(line).unwrap_err().to_string()
}

#[test]
fn test_parse_todo() {
    let cmd = parse("todo read book").unwrap();
    assert_eq!(cmd, Command::Add(Task::todo("read book")));
}

#[test]
fn test_parse_deadline() {
    let cmd = parse("deadline return book /by 2024-12-01").unwrap();
    assert_eq!(
        cmd,
        Command::Add(Task::deadline("return book", date("2024-12-01")))
    );
}

#[test]
fn test_parse_event() {
    let cmd = parse("event trip /from 2024-01-01 /to 2024-01-05").unwrap();
    assert_eq!(
        cmd,
        Command::Add(Task::event("trip", date("2024-01-01"), date("2024-01-05")))
    );
}

#[test]
fn test_event_reversed_range_is_accepted() {
    // Permissive by design: no start <= end rule.
    let cmd = parse("event odd /from 2024-02-10 /to 2024-02-01").unwrap();
    assert_eq!(
        cmd,
        Command::Add(Task::event("odd", date("2024-02-10"), date("2024-02-01")))
    );
}

#[test]
fn test_parse_list_and_bye() {
    assert_eq!(parse("list").unwrap(), Command::List);
    assert_eq!(parse("bye").unwrap(), Command::Exit);
    assert_eq!(parse("BYE").unwrap(), Command::Exit);
    assert!(parse("bye").unwrap().is_exit());
    assert!(!parse("list").unwrap().is_exit());
}

#[test]
fn test_list_is_case_sensitive_and_exact() {
    assert!(parse("List").is_err());
    assert!(parse("list everything").is_err());
}

#[test]
fn test_parse_check_and_find() {
    assert_eq!(
        parse("check 2024-06-15").unwrap(),
        Command::Check(date("2024-06-15"))
    );
    assert_eq!(
        parse("find read book").unwrap(),
        Command::Find("read book".to_string())
    );
}

#[test]
fn test_parse_batch_indices() {
    assert_eq!(
        parse("mark 1,3, 5").unwrap(),
        Command::Mark {
            indices: vec![0, 2, 4],
            done: true
        }
    );
    assert_eq!(
        parse("unmark 2").unwrap(),
        Command::Mark {
            indices: vec![1],
            done: false
        }
    );
    assert_eq!(parse("delete 2,4,1").unwrap(), Command::Delete(vec![1, 3, 0]));
}

#[test]
fn test_empty_input_is_rejected() {
    assert_eq!(err_of(""), "The command cannot be empty.");
    assert_eq!(err_of("   "), "The command cannot be empty.");
}

#[test]
fn test_bare_keywords_get_specific_errors() {
    assert_eq!(err_of("todo"), "The description of a todo cannot be empty.");
    assert_eq!(
        err_of("deadline"),
        "The description of a deadline cannot be empty."
    );
    assert_eq!(
        err_of("event"),
        "The description of a event cannot be empty."
    );
    assert_eq!(err_of("mark"), "Please specify a valid task number to mark.");
    assert_eq!(
        err_of("unmark"),
        "Please specify a valid task number to unmark."
    );
    assert_eq!(
        err_of("delete"),
        "Please specify a valid task number to delete."
    );
}

#[test]
fn test_deadline_without_marker() {
    assert_eq!(err_of("deadline return book"), "Please specify a deadline.");
}

#[test]
fn test_deadline_with_bad_date() {
    assert_eq!(
        err_of("deadline return book /by tomorrow"),
        "Invalid date format. Please use yyyy-MM-dd."
    );
    // Unpadded dates are not YYYY-MM-DD.
    assert_eq!(
        err_of("deadline return book /by 2024-1-5"),
        "Invalid date format. Please use yyyy-MM-dd."
    );
    // Well-shaped but not a real calendar date.
    assert_eq!(
        err_of("deadline return book /by 2024-02-30"),
        "Invalid date format. Please use yyyy-MM-dd."
    );
}

#[test]
fn test_event_missing_markers() {
    assert_eq!(
        err_of("event trip /from 2024-01-01"),
        "Please specify a start AND end date."
    );
    assert_eq!(
        err_of("event trip /to 2024-01-05"),
        "Please specify a start AND end date."
    );
    assert_eq!(err_of("event trip"), "Please specify a start AND end date.");
}

#[test]
fn test_event_with_bad_dates() {
    assert_eq!(
        err_of("event trip /from someday /to 2024-01-05"),
        "Invalid date format. Please use yyyy-MM-dd with a valid date."
    );
    assert_eq!(
        err_of("event trip /from 2024-01-01 /to never"),
        "Invalid date format. Please use yyyy-MM-dd with a valid date."
    );
}

#[test]
fn test_check_with_bad_date() {
    assert_eq!(
        err_of("check next week"),
        "Invalid date format. Please use yyyy-MM-dd with a valid date."
    );
}

#[test]
fn test_invalid_indices_are_rejected_as_one_error() {
    let msg = "Please specify valid index/indices using integers.";
    assert_eq!(err_of("mark one"), msg);
    assert_eq!(err_of("mark 1,x,3"), msg);
    assert_eq!(err_of("delete -2"), msg);
    assert_eq!(err_of("delete 1.5"), msg);
    assert_eq!(err_of("mark 1,,3"), msg);
    // There is no task 0 in 1-based addressing.
    assert_eq!(err_of("mark 0"), msg);
}

#[test]
fn test_unknown_instruction() {
    assert_eq!(
        err_of("blorp the frobnicator"),
        "I'm sorry, but I don't know what that means :-("
    );
}

#[test]
fn test_all_error_messages_are_distinct_and_nonempty() {
    let cases = [
        "",
        "todo",
        "mark",
        "deadline return book",
        "deadline return book /by nope",
        "event trip",
        "event trip /from x /to 2024-01-05",
        "check nope",
        "mark zero",
        "gibberish",
    ];
    let mut messages: Vec<String> = cases.iter().map(|c| err_of(c)).collect();
    assert!(messages.iter().all(|m| !m.is_empty()));
    // Deadline and event share nothing; the two date errors intentionally
    // differ in wording.
    messages.sort();
    messages.dedup();
    assert!(messages.len() >= 8);
}
