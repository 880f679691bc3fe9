//! Tabular presentation of records
//!
//! Rows use the same field order and text as the codec, so a table is a faithful
//! view of what is stored.

use super::codec::RecordKind;
use std::fmt;

/// Display fields of one record, in encoding order
pub fn to_row<K: RecordKind>(record: &K) -> Vec<String> {
    record.fields()
}

/// Builds a column-labelled table of `records`
pub fn to_table<K: RecordKind>(records: &[K]) -> Table {
    Table {
        headers: K::COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: records.iter().map(to_row).collect(),
    }
}

/// Column labels plus rows of cell text
///
/// `Display` renders a boxed grid:
///
/// ```text
/// +------+-------+
/// | Lab  | Cost  |
/// +======+=======+
/// | XRay | 45.00 |
/// +------+-------+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

fn rule(f: &mut fmt::Formatter<'_>, widths: &[usize], fill: char) -> fmt::Result {
    write!(f, "+")?;
    for width in widths {
        write!(f, "{}+", fill.to_string().repeat(width + 2))?;
    }
    writeln!(f)
}

fn line(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    write!(f, "|")?;
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        write!(f, " {cell:<width$} |")?;
    }
    writeln!(f)
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        rule(f, &widths, '-')?;
        line(f, &widths, &self.headers)?;
        rule(f, &widths, '=')?;
        for row in &self.rows {
            line(f, &widths, row)?;
            rule(f, &widths, '-')?;
        }
        Ok(())
    }
}
