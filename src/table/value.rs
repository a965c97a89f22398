//! Cell values resolved from records.
//!
//! A column resolves to one of three primitive shapes. The shape is fixed per
//! column by its accessor, so two values read from the same column always
//! carry the same variant.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// A resolved, primitive cell value borrowed from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

impl CellValue<'_> {
    /// Compare two values of the same column in ascending order.
    ///
    /// Text is ordinal, numbers are numeric (`-0.0 == 0.0`) and dates are
    /// chronological.
    /// Mismatched variants order by variant (text < number < date); accessors
    /// never produce those within one column.
    pub fn compare(&self, other: &CellValue<'_>) -> Ordering {
        match (self, other) {
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            // NaN never reaches here; accessors read it as missing.
            (CellValue::Number(a), CellValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Text(_) => 0,
            CellValue::Number(_) => 1,
            CellValue::Date(_) => 2,
        }
    }

    /// Lowercased string form used by the global filter.
    pub fn search_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.to_lowercase(),
            other => other.to_string().to_lowercase(),
        }
    }
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}
