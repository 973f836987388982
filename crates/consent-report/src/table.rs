//! Box-drawn two-column count tables for console output.

const INDEX_HEADER: &str = "(index)";
const VALUE_HEADER: &str = "number";

/// A labelled list of counts rendered as a box-drawn table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    rows: Vec<(String, usize)>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn row(mut self, label: impl Into<String>, count: usize) -> Self {
        self.rows.push((label.into(), count));
        self
    }

    pub fn rows(&self) -> &[(String, usize)] {
        &self.rows
    }

    /// Render the table, one line per row plus borders, newline-terminated.
    pub fn render(&self) -> String {
        let counts: Vec<String> = self.rows.iter().map(|(_, n)| n.to_string()).collect();

        let label_width = self
            .rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .chain(std::iter::once(INDEX_HEADER.len()))
            .max()
            .unwrap_or(0);
        let value_width = counts
            .iter()
            .map(|c| c.len())
            .chain(std::iter::once(VALUE_HEADER.len()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(&border('┌', '┬', '┐', label_width, value_width));
        out.push_str(&cells(INDEX_HEADER, VALUE_HEADER, label_width, value_width));
        out.push_str(&border('├', '┼', '┤', label_width, value_width));
        for ((label, _), count) in self.rows.iter().zip(&counts) {
            out.push_str(&cells(label, count, label_width, value_width));
        }
        out.push_str(&border('└', '┴', '┘', label_width, value_width));
        out
    }
}

fn border(left: char, mid: char, right: char, label_width: usize, value_width: usize) -> String {
    format!(
        "{left}{}{mid}{}{right}\n",
        "─".repeat(label_width + 2),
        "─".repeat(value_width + 2)
    )
}

fn cells(label: &str, value: &str, label_width: usize, value_width: usize) -> String {
    // Pad by char count; `{:<width$}` would count bytes for non-ASCII labels.
    let label_pad = label_width.saturating_sub(label.chars().count());
    let value_pad = value_width.saturating_sub(value.chars().count());
    format!(
        "│ {label}{} │ {value}{} │\n",
        " ".repeat(label_pad),
        " ".repeat(value_pad)
    )
}
