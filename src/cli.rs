// File: src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Jo v{} - A small and fast line-oriented task tracker",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS (typed at the prompt):");
    println!("    todo <desc>                          Add a plain task");
    println!("    deadline <desc> /by <date>           Add a task due on <date>");
    println!("    event <desc> /from <date> /to <date> Add a date-ranged event");
    println!("    mark <i[,i...]>                      Mark task(s) done (1-based)");
    println!("    unmark <i[,i...]>                    Mark task(s) not done");
    println!("    delete <i[,i...]>                    Remove task(s)");
    println!("    list                                 Show all tasks");
    println!("    find <keyword>                       Search descriptions (case-insensitive)");
    println!("    check <date>                         Show tasks falling on <date>");
    println!("    bye                                  Save and exit");
    println!();
    println!("    Dates are always yyyy-MM-dd, e.g. deadline return book /by 2024-12-01");
}
