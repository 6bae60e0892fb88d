use chrono::NaiveDate;
use clap::Subcommand;
use tb_core::enums::TaskStatus;

use crate::commands::shared::parse::{parse_date, parse_status};

/// Board commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BoardCommands {
    /// Show tasks in Pending / In Progress / Completed columns.
    Show,
    /// Add a card. It appears once the server has stored it.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Column to add the card to (default pending)
        #[arg(long, value_parser = parse_status)]
        status: Option<TaskStatus>,
        /// Due date, YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },
    /// Move a task to another column.
    Move {
        id: String,
        /// pending, in-progress, or completed
        #[arg(value_parser = parse_status)]
        status: TaskStatus,
    },
    /// Remove a card from the board.
    Rm { id: String },
}
