//! Column registry: which fields are displayable and sortable, and how to
//! read them from a record.
//!
//! Every column owns a typed [`Accessor`] chosen when the registry is built.
//! The accessor's variant fixes the column's value shape, which in turn
//! selects the comparator used by the sort stage.

use super::value::CellValue;
use chrono::NaiveDate;
use std::fmt;

/// Value shape produced by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Date,
}

/// Typed read function for one column.
pub enum Accessor<R> {
    Text(for<'a> fn(&'a R) -> Option<&'a str>),
    Number(fn(&R) -> Option<f64>),
    Date(fn(&R) -> Option<NaiveDate>),
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Accessor<R> {}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Accessor::{:?}", self.kind())
    }
}

impl<R> Accessor<R> {
    /// Read the value from a record. NaN numbers count as missing and
    /// `-0.0` reads as `0.0`.
    pub fn read<'a>(&self, record: &'a R) -> Option<CellValue<'a>> {
        match self {
            Accessor::Text(read) => read(record).map(CellValue::Text),
            Accessor::Number(read) => read(record)
                .filter(|n| !n.is_nan())
                .map(|n| if n == 0.0 { 0.0 } else { n })
                .map(CellValue::Number),
            Accessor::Date(read) => read(record).map(CellValue::Date),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Accessor::Text(_) => ValueKind::Text,
            Accessor::Number(_) => ValueKind::Number,
            Accessor::Date(_) => ValueKind::Date,
        }
    }
}

/// Declarative description of one displayable column.
pub struct ColumnDef<R> {
    pub id: &'static str,
    pub header: &'static str,
    pub accessor: Accessor<R>,
    pub sortable: bool,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header,
            accessor: self.accessor,
            sortable: self.sortable,
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .finish()
    }
}

impl<R> ColumnDef<R> {
    pub fn new(id: &'static str, header: &'static str, accessor: Accessor<R>) -> Self {
        Self {
            id,
            header,
            accessor,
            sortable: true,
        }
    }

    /// Text column
    pub fn text(
        id: &'static str,
        header: &'static str,
        read: for<'a> fn(&'a R) -> Option<&'a str>,
    ) -> Self {
        Self::new(id, header, Accessor::Text(read))
    }

    /// Numeric column
    pub fn number(id: &'static str, header: &'static str, read: fn(&R) -> Option<f64>) -> Self {
        Self::new(id, header, Accessor::Number(read))
    }

    /// Date column
    pub fn date(
        id: &'static str,
        header: &'static str,
        read: fn(&R) -> Option<NaiveDate>,
    ) -> Self {
        Self::new(id, header, Accessor::Date(read))
    }

    /// Exclude this column from sorting
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Ordered set of columns. Display order is declaration order.
pub struct ColumnRegistry<R> {
    columns: Vec<ColumnDef<R>>,
}

impl<R> Clone for ColumnRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.columns).finish()
    }
}

impl<R> ColumnRegistry<R> {
    /// Build a registry. On duplicate ids the first declaration wins lookups.
    pub fn new(columns: Vec<ColumnDef<R>>) -> Self {
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.id == col.id) {
                tracing::warn!("Duplicate column id {:?}; later declaration is shadowed", col.id);
            }
        }
        Self { columns }
    }

    /// All columns in declaration order
    pub fn all(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    pub fn get(&self, column_id: &str) -> Option<&ColumnDef<R>> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Read a column from a record. Unknown columns and missing values
    /// both yield `None`.
    pub fn resolve<'a>(&self, record: &'a R, column_id: &str) -> Option<CellValue<'a>> {
        self.get(column_id)?.accessor.read(record)
    }

    /// Unknown columns are not sortable.
    pub fn is_sortable(&self, column_id: &str) -> bool {
        self.get(column_id).is_some_and(|c| c.sortable)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
