//! Fixed-width text tables
//!
//! The first column is left-aligned (labels), every other column is
//! right-aligned (numbers).

use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row = cells.into_iter().map(Into::into).collect::<Vec<_>>();
        debug_assert_eq!(row.len(), self.headers.len(), "row width must match headers");
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain([header.chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i == 0 {
                write!(f, "{cell:<width$}")?;
            } else {
                write!(f, "  {cell:>width$}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        Self::write_row(f, &self.headers, &widths)?;
        let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        write!(f, "\n{}", "-".repeat(total_width))?;
        for row in &self.rows {
            writeln!(f)?;
            Self::write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

/// Formats a statistic that may be undefined.
pub fn stat_cell(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_string(), |v| format!("{v:.3}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        let mut table = Table::new(["team", "games"]);
        table.push_row(["Detroit", "17"]);
        table.push_row(["KC", "3"]);
        assert_eq!(
            table.to_string(),
            "team     games\n--------------\nDetroit     17\nKC           3"
        );
    }

    #[test]
    fn test_header_only() {
        let table = Table::new(["value", "count"]);
        assert_eq!(table.to_string(), "value  count\n------------");
    }

    #[test]
    fn test_stat_cell() {
        assert_eq!(stat_cell(Some(20.0)), "20.000");
        assert_eq!(stat_cell(Some(2.0 / 3.0)), "0.667");
        assert_eq!(stat_cell(None), "NaN");
    }
}
