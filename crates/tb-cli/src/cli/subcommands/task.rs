use chrono::NaiveDate;
use clap::Subcommand;

use crate::commands::shared::parse::parse_date;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// pending, in-progress, or completed (default pending)
        #[arg(long)]
        status: Option<String>,
        /// Due date, YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        due: Option<NaiveDate>,
    },
    /// List your tasks, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Update a task. Only the given fields change.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// New description; an empty string clears it
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Due date, YYYY-MM-DD
        #[arg(long, value_parser = parse_date, conflicts_with = "clear_due")]
        due: Option<NaiveDate>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },
    /// Delete a task.
    Delete { id: String },
}
