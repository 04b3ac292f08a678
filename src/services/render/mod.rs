//! Renderers turn a [`DrawFrame`] into output.
//!
//! The egui window lives in `ui_egui`; this module holds the renderer seam
//! and a plain-text renderer for terminals and logs.

use crate::models::day_cell::{DayCell, WeekRow};
use crate::services::grid::HeaderCell;
use crate::services::picker::{DrawFrame, Panel};

pub trait GridRenderer {
    type Output;

    fn render(&self, frame: &DrawFrame) -> Self::Output;
}

/// Width of one text column, including its separator.
const COLUMN_WIDTH: usize = 4;

/// `cal`-style text output.
///
/// Selected days are bracketed, disabled days parenthesised, today marked
/// with `*`; placeholders stay blank.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl TextRenderer {
    fn cell(cell: &DayCell) -> String {
        if cell.is_placeholder {
            " ".repeat(COLUMN_WIDTH)
        } else if cell.is_selected {
            format!("[{:>2}]", cell.day)
        } else if cell.is_disabled {
            format!("({:>2})", cell.day)
        } else if cell.is_today {
            format!("{:>3}*", cell.day)
        } else {
            format!("{:>3} ", cell.day)
        }
    }

    fn header(header: &[HeaderCell]) -> String {
        header
            .iter()
            .map(|cell| match cell {
                HeaderCell::WeekNumber => format!("{:>3} ", "Wk"),
                HeaderCell::Weekday { name, .. } => {
                    let short: String = name.chars().take(2).collect();
                    format!("{:>3} ", short)
                }
            })
            .collect()
    }

    fn row(row: &WeekRow, is_rtl: bool) -> String {
        let mut columns: Vec<String> = Vec::with_capacity(row.column_count());
        if let Some(week) = row.week_number {
            columns.push(format!("{:>3} ", week));
        }
        columns.extend(row.cells.iter().map(Self::cell));
        if is_rtl {
            columns.reverse();
        }
        columns.concat()
    }

    fn panel(panel: &Panel, frame: &DrawFrame, out: &mut Vec<String>) {
        let title = &panel.title;
        let month = title
            .month_options
            .iter()
            .find(|option| option.selected)
            .map(|option| option.label.as_str())
            .unwrap_or_default();
        let caption = if title.show_month_after_year {
            format!("{} {}", title.year_label, month)
        } else {
            format!("{} {}", month, title.year_label)
        };

        let width = frame.header.len() * COLUMN_WIDTH;
        out.push(format!("{:^width$}", caption, width = width));
        out.push(Self::header(&frame.header));
        for row in &panel.grid.rows {
            out.push(Self::row(row, frame.is_rtl));
        }
    }
}

impl GridRenderer for TextRenderer {
    type Output = String;

    fn render(&self, frame: &DrawFrame) -> String {
        let mut lines = vec![format!(
            "{}  {}",
            frame.date_display.year_text, frame.date_display.date_text
        )];

        for panel in &frame.panels {
            lines.push(String::new());
            Self::panel(panel, frame, &mut lines);
        }

        lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
