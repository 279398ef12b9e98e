// src/table.rs
//! ReachTable: rows from many specs, side by side.
//!
//! - Headers are the union of every row's spec columns in first-seen order,
//!   then `users` last.
//! - A row that lacks a column renders an empty cell there.
//! - Rows have no identity beyond position (call order).

use serde_json::Value;

use crate::config::consts::ESTIMATE_COLUMN;
use crate::specs::{Cell, ResultRow};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReachTable {
    rows: Vec<ResultRow>,
}

impl ReachTable {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ResultRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn headers(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for row in &self.rows {
            for (name, _) in &row.columns {
                if !out.iter().any(|h| h == name) {
                    out.push(name.clone());
                }
            }
        }
        out.push(s!(ESTIMATE_COLUMN));
        out
    }

    /// Column-aligned cells, `None` where a row lacks the column.
    pub fn cells(&self) -> Vec<Vec<Option<Cell>>> {
        let headers = self.headers();
        let spec_cols = &headers[..headers.len() - 1];
        self.rows
            .iter()
            .map(|row| {
                let mut line: Vec<Option<Cell>> =
                    spec_cols.iter().map(|h| row.get(h).cloned()).collect();
                line.push(Some(Cell::from(row.users)));
                line
            })
            .collect()
    }

    /// Everything stringified for CSV/TSV/text output.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.cells()
            .into_iter()
            .map(|line| {
                line.into_iter()
                    .map(|c| c.map(|c| c.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.rows.iter().map(ResultRow::to_json).collect())
    }

    /// Plain aligned text for the terminal. Numbers right-aligned.
    pub fn render_text(&self) -> String {
        let headers = self.headers();
        let rows = self.string_rows();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for r in &rows {
            for (i, cell) in r.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        let numeric: Vec<bool> = (0..headers.len())
            .map(|i| rows.iter().all(|r| r[i].is_empty() || r[i].parse::<f64>().is_ok()))
            .collect();

        let fmt_line = |cells: &[String], out: &mut String| {
            let parts: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let w = widths[i];
                    if numeric[i] { format!("{c:>w$}") } else { format!("{c:<w$}") }
                })
                .collect();
            out.push_str(parts.join("  ").trim_end());
            out.push('\n');
        };

        let mut out = s!();
        fmt_line(&headers, &mut out);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');
        for r in &rows {
            fmt_line(r, &mut out);
        }
        out
    }
}

impl FromIterator<ResultRow> for ReachTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(cols: &[(&str, Cell)], users: u64) -> ResultRow {
        ResultRow {
            columns: cols.iter().map(|(n, c)| (s!(*n), c.clone())).collect(),
            users,
        }
    }

    #[test]
    fn headers_union_first_seen_users_last() {
        let t: ReachTable = vec![
            row(&[("countries", Cell::Scalar(json!("US"))), ("age_min", Cell::Scalar(json!(18)))], 1),
            row(&[("countries", Cell::Scalar(json!("CA"))), ("genders", Cell::Scalar(json!(2)))], 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(t.headers(), ["countries", "age_min", "genders", "users"]);
        assert_eq!(
            t.string_rows(),
            vec![vec!["US", "18", "", "1"], vec!["CA", "", "2", "2"]]
        );
    }

    #[test]
    fn empty_table_has_only_users_header() {
        let t = ReachTable::new();
        assert_eq!(t.headers(), ["users"]);
        assert!(t.string_rows().is_empty());
        assert_eq!(t.to_json(), json!([]));
    }

    #[test]
    fn render_text_aligns() {
        let mut t = ReachTable::new();
        t.push(row(&[("countries", Cell::Scalar(json!("US")))], 180000000));
        t.push(row(&[("countries", Cell::List(vec![json!("US"), json!("CA")]))], 5));
        let text = t.render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("countries{}users", " ".repeat(8)));
        assert_eq!(lines[2], format!("US{}180000000", " ".repeat(11)));
        assert_eq!(lines[3], format!(r#"["US","CA"]{}5"#, " ".repeat(10)));
    }
}
