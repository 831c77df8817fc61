use clap::{CommandFactory, Parser};
use std::io::{self, BufRead};
use taskboard_cli::cli::{Cli, Command};
use taskboard_cli::view;
use taskboard_core::board::TaskBoard;
use taskboard_core::config::{Palette, load_config_with_fallback, palette_for_theme};
use taskboard_core::error::AppError;
use taskboard_core::storage::FileStore;

fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

fn split_command_line(line: &str) -> Result<Vec<String>, AppError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            if ch != '"' && ch != '\\' {
                current.push('\\');
            }
            current.push(ch);
            escape = false;
            continue;
        }

        if in_quotes && ch == '\\' {
            escape = true;
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }

        if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() {
                args.push(current.clone());
                current.clear();
            }
            continue;
        }

        current.push(ch);
    }

    if in_quotes {
        return Err(AppError::invalid_input("unterminated quote in command"));
    }

    if !current.is_empty() {
        args.push(current);
    }

    Ok(args)
}

fn print_help() {
    let mut cmd = Cli::command();
    let help = cmd.render_help();
    println!("{help}");
}

fn run_command(
    cli: Cli,
    board: &mut TaskBoard<FileStore>,
    palette: &Palette,
) -> Result<(), AppError> {
    match cli.command {
        Command::Add { title } => {
            if let Some(title) = title {
                board.set_draft(&title);
            }

            let task = board.add_task()?;
            if cli.json {
                println!("{}", view::task_json(&task));
            } else {
                println!("Added task: {} ({})", palette.accentize(&task.title), task.id);
            }
        }
        Command::Draft { text } => {
            board.set_draft(text.as_deref().unwrap_or(""));
            if cli.json {
                println!("{}", serde_json::json!({ "draft": board.draft_title() }));
            } else {
                println!("Draft: {}", board.draft_title());
            }
        }
        Command::Delete { index } => match board.delete_at(index)? {
            Some(task) => {
                if cli.json {
                    println!("{}", view::task_json(&task));
                } else {
                    println!(
                        "Deleted task: {} ({})",
                        palette.accentize(&task.title),
                        task.id
                    );
                }
            }
            None => {
                if cli.json {
                    println!("null");
                } else {
                    println!("No task at index {index}");
                }
            }
        },
        Command::List => {
            if cli.json {
                println!("{}", view::tasks_json(board.tasks()));
            } else if board.tasks().is_empty() {
                println!("{}", palette.mutedize("No tasks"));
            } else {
                println!("{}", view::render_table(board.tasks()));
            }
        }
    }

    Ok(())
}

fn run_interactive(board: &mut TaskBoard<FileStore>, palette: &Palette) -> Result<(), AppError> {
    let mut input = String::new();
    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();

    loop {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| AppError::io(err.to_string()))?;

        if bytes == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if line == "help" || line == "?" {
            print_help();
            continue;
        }

        let args = match split_command_line(line) {
            Ok(args) => args,
            Err(err) => {
                eprintln!("ERROR: {}", err);
                continue;
            }
        };

        if args.is_empty() {
            continue;
        }

        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push("taskboard".to_string());
        argv.extend(args);

        let cli = match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(err) => {
                eprintln!("ERROR: {}", normalize_parse_error(err));
                continue;
            }
        };

        if let Err(err) = run_command(cli, board, palette) {
            eprintln!("ERROR: {}", err);
        }
    }

    Ok(())
}

fn open_board() -> Result<TaskBoard<FileStore>, AppError> {
    TaskBoard::initialize(FileStore::from_env()?)
}

fn main() {
    let config = load_config_with_fallback().config;
    let palette = palette_for_theme(config.theme.as_deref());

    let mut args = std::env::args_os();
    args.next();
    if args.next().is_none() {
        let mut board = match open_board() {
            Ok(board) => board,
            Err(err) => {
                eprintln!("ERROR: {}", err);
                std::process::exit(1);
            }
        };

        if let Err(err) = run_interactive(&mut board, &palette) {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
        return;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            err.print().ok();
            return;
        }
        Err(err) => {
            eprintln!("ERROR: {}", normalize_parse_error(err));
            std::process::exit(1);
        }
    };

    let mut board = match open_board() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = run_command(cli, &mut board, &palette) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
