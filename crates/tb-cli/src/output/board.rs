//! Board rendering: three status columns with counts, due labels, and
//! overdue markers.

use chrono::NaiveDate;
use serde::Serialize;
use tb_board::{BoardState, Notice};
use tb_core::entities::Task;
use tb_core::enums::TaskStatus;

use crate::cli::OutputFormat;
use crate::output::render;
use crate::output::table::{TableOptions, colorize_status, truncate_text};

const OVERDUE: &str = "OVERDUE";

#[derive(Debug, Serialize)]
pub struct BoardView<'a> {
    pub signed_in: bool,
    pub columns: Vec<ColumnView<'a>>,
    pub notices: &'a [Notice],
}

#[derive(Debug, Serialize)]
pub struct ColumnView<'a> {
    pub status: TaskStatus,
    pub label: &'static str,
    pub count: usize,
    pub tasks: Vec<CardView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CardView<'a> {
    #[serde(flatten)]
    pub task: &'a Task,
    pub due_label: String,
    pub overdue: bool,
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn new(state: &'a BoardState, today: NaiveDate) -> Self {
        let columns = state
            .columns()
            .into_iter()
            .map(|column| ColumnView {
                status: column.status,
                label: column.label,
                count: column.count(),
                tasks: column
                    .tasks
                    .into_iter()
                    .map(|task| CardView {
                        task,
                        due_label: task.due_label(),
                        overdue: task.is_overdue(today),
                    })
                    .collect(),
            })
            .collect();

        Self {
            signed_in: state.is_signed_in(),
            columns,
            notices: state.notices(),
        }
    }
}

/// Render the board. Table format gets the column layout; JSON and raw get
/// the serialized view.
pub fn render_board(
    view: &BoardView<'_>,
    format: OutputFormat,
    options: TableOptions,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_columns(view, options)),
        OutputFormat::Json | OutputFormat::Raw => render(view, format),
    }
}

fn render_columns(view: &BoardView<'_>, options: TableOptions) -> String {
    if !view.signed_in {
        return String::from("(signed out)");
    }

    let width = options.max_width.unwrap_or(80);
    let mut lines = Vec::new();
    for column in &view.columns {
        let heading = format!("{} ({})", column.label, column.count);
        lines.push(format!("{heading}\n{}", "=".repeat(heading.chars().count())));
        if column.tasks.is_empty() {
            lines.push(String::from("  (empty)"));
        }
        for card in &column.tasks {
            lines.push(card_line(card, width, options.color));
            if let Some(description) = card.task.description.as_deref() {
                let indent = " ".repeat(card.task.id.chars().count() + 4);
                let room = width.saturating_sub(indent.len()).max(8);
                lines.push(format!("{indent}{}", truncate_text(description, room)));
            }
        }
        lines.push(String::new());
    }
    for notice in view.notices {
        lines.push(format!("! {}", notice.message));
    }
    if view.notices.is_empty() {
        lines.pop();
    }
    lines.join("\n")
}

fn card_line(card: &CardView<'_>, width: usize, color: bool) -> String {
    let marker = if card.overdue { OVERDUE } else { "" };
    let suffix = format!("  {}  {marker}", card.due_label);
    let prefix = format!("  {}  ", card.task.id);
    let title_width = width
        .saturating_sub(prefix.chars().count() + suffix.trim_end().chars().count())
        .max(8);
    let line = format!(
        "{prefix}{}{}",
        truncate_text(&card.task.title, title_width),
        suffix.trim_end()
    );
    match line.strip_suffix(OVERDUE) {
        Some(head) if color && card.overdue => format!("{head}{}", colorize_status(OVERDUE)),
        _ => line,
    }
}
