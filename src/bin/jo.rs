// Binary entry point: argument handling, logging init, and the read loop.
use anyhow::Result;
use jo::config::Config;
use jo::paths::AppPaths;
use jo::storage::Storage;
use jo::ui::Ui;
use jo::{cli, model};
use std::env;
use std::fs;
use std::io::{self, BufRead};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        cli::print_help("jo");
        return Ok(());
    }

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                if i + 1 < args.len() {
                    // AppPaths reads this override for both config and data.
                    unsafe { env::set_var("JO_TEST_DIR", &args[i + 1]) };
                    i += 1;
                }
            }
            _ => { /* Ignore unknown flags */ }
        }
        i += 1;
    }

    let config = Config::load()?;
    init_logging(&config);

    let storage = Storage::open_default(&config)?;
    let mut tasks = storage.load()?;

    let mut ui = Ui::stdout();
    ui.greet();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            // EOF/read failure behaves like `bye` so piped input ends cleanly.
            Err(_) => break,
        };

        let command = match model::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                ui.show_error(&e.to_string());
                continue;
            }
        };

        let exit = command.is_exit();
        if let Err(e) = command.execute(&mut tasks, &mut ui, &storage) {
            ui.show_error(&e.to_string());
        }
        if exit {
            return Ok(());
        }
    }

    ui.farewell();
    Ok(())
}

/// Logs to a file in the data directory; falls back to stderr if the file
/// cannot be opened.
fn init_logging(config: &Config) {
    let level = config.log_level_filter();
    let log_config = simplelog::Config::default();

    let file_logger = AppPaths::get_log_file_path()
        .ok()
        .and_then(|path| fs::File::create(path).ok());

    let result = match file_logger {
        Some(file) => simplelog::WriteLogger::init(level, log_config, file),
        None => simplelog::SimpleLogger::init(level, log_config),
    };
    if let Err(e) = result {
        eprintln!("Failed to initialize logging: {e}");
    }
}
