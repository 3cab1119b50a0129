use chrono::{DateTime, Local, Utc};

use jobtrack::{PageInfo, PageLink};

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header_line = join_cells(headers.iter().map(|h| h.to_string()), &widths);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        lines.push(join_cells(row.iter().cloned(), &widths));
    }
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// `Page 2 of 5  1 [2] 3 4 5`
#[must_use]
pub fn render_page_line(info: &PageInfo) -> String {
    let mut line = format!(
        "Page {} of {}",
        info.current_page,
        info.total_pages.max(1)
    );
    if !info.window.is_empty() {
        let links = info
            .window
            .iter()
            .map(|link| match link {
                PageLink::Page(n) if *n == info.current_page => format!("[{n}]"),
                PageLink::Page(n) => n.to_string(),
                PageLink::Ellipsis => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        line.push_str("  ");
        line.push_str(&links);
    }
    line
}

/// Local wall-clock rendering of a stored UTC timestamp.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}
