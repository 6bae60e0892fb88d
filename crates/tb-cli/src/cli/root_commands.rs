use clap::Subcommand;

use crate::cli::subcommands::{BoardCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Status board.
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },
    /// Show the identity behind the current token.
    Whoami,
}
