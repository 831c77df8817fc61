use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task, submitting the given title (or the current draft)
    ///
    /// Example: taskboard add "Buy milk"
    /// Example: add (interactive mode, submits the draft)
    Add {
        title: Option<String>,
    },
    /// Replace the draft title a bare `add` submits
    ///
    /// Example: draft "Buy milk" (interactive mode)
    Draft {
        text: Option<String>,
    },
    /// Delete the task at a zero-based list position
    ///
    /// Example: taskboard delete 0
    Delete {
        index: usize,
    },
    /// List all tasks in insertion order
    ///
    /// Example: taskboard list
    List,
}
