//! Minimal padded-column table model for read-only overviews.

#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Renders the table with headers, a separator, and padded cells. Cell
    /// widths stretch to the widest value in each column.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|column| column.width.max(column.header.len()))
            .collect();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(index) {
                    *width = (*width).max(cell.len());
                }
            }
        }

        let mut out = String::new();
        for (index, column) in self.columns.iter().enumerate() {
            if index > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:width$}", column.header, width = widths[index]));
        }
        out.push('\n');
        out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
        out.push('\n');
        for row in &self.rows {
            for (index, width) in widths.iter().enumerate() {
                if index > 0 {
                    out.push_str("  ");
                }
                let cell = row.get(index).map(String::as_str).unwrap_or("");
                out.push_str(&format!("{:width$}", cell, width = width));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_pads_to_widest_cell() {
        let mut table = Table::new(vec![
            TableColumn::new("MONTH", 5),
            TableColumn::new("NET", 3),
        ]);
        table.add_row(vec!["Mar 2025", "1,200"]);
        table.add_row(vec!["Apr 2025", "-80"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("MONTH"));
        assert!(lines[2].contains("Mar 2025  1,200"));
        assert!(lines[3].contains("Apr 2025  -80"));
    }
}
