//! # Tables
//!
//! Turns a [`Sheet`] into a [`Table`]: the first used row names the columns, the
//! remaining rows become typed values, and each column's type is inferred from its
//! cells.
use crate::error::SpreadsheetError;
use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::sheet::Sheet;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use std::collections::HashMap;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

pub(crate) mod column;
pub mod preview;

pub use column::Column;
pub use column::ColumnType;

/// Conditions detected while converting cells to column values.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read the cell '{file_name}!{sheet_name}!{reference}': {message}")]
    CellValueError {
        file_name: String,
        sheet_name: String,
        reference: String,
        message: String,
    },
}

/// A single table value; `Null` stands for a missing cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    BigInt(i64),
    Double(f64),
    Varchar(String),
    Timestamp(NaiveDateTime),
    Date(NaiveDate),
    Time(NaiveTime),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Rows of typed values under named columns, loaded from one sheet.
#[derive(Clone, Debug)]
pub struct Table {
    /// Sheet the table was loaded from
    pub name: String,
    pub columns: Vec<Column>,
    /// Data rows, each as wide as `columns`
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Builds a table from the sheet's used range, taking its first row as the header.
    /// An empty sheet gives a table without columns or rows.
    pub fn from_sheet(sheet: &Sheet) -> Result<Table, SpreadsheetError> {
        let mut records = sheet.records().into_iter();
        let Some((_, header)) = records.next() else {
            debug!(sheet = %sheet.name, "sheet is empty");
            return Ok(Table {
                name: sheet.name.to_owned(),
                columns: Vec::new(),
                rows: Vec::new(),
            });
        };
        let records: Vec<Vec<Option<&Cell>>> = records.map(|(_, record)| record).collect();

        let names = column_names(&header);
        let mut columns = Vec::with_capacity(names.len());
        for (index, name) in names.into_iter().enumerate() {
            let kind = ColumnType::detect(
                records
                    .iter()
                    .map(|record| record[index].and_then(|cell| ColumnType::from(&cell.kind, &cell.value)))
                    .collect(),
            );
            debug!(sheet = %sheet.name, column = %name, kind = kind.as_str(), "inferred column type");
            columns.push(Column { name, kind });
        }

        let mut rows = Vec::with_capacity(records.len());
        for record in &records {
            let mut row = Vec::with_capacity(columns.len());
            for (column, cell) in columns.iter().zip(record) {
                row.push(match cell {
                    Some(cell) => to_value(sheet, column, cell)?,
                    None => Value::Null,
                });
            }
            rows.push(row);
        }
        debug!(sheet = %sheet.name, columns = columns.len(), rows = rows.len(), "loaded table");
        Ok(Table {
            name: sheet.name.to_owned(),
            columns,
            rows,
        })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.name.as_str()).collect()
    }

    /// The first `n` rows, or all of them when fewer.
    pub fn head(&self, n: usize) -> &[Vec<Value>] {
        &self.rows[..n.min(self.rows.len())]
    }
}

/// Names the columns after the header cells.
/// Blank headers become `Unnamed: {position}`; repeated names get `.1`, `.2`, ... suffixes.
fn column_names(header: &[Option<&Cell>]) -> Vec<String> {
    let mut names = Vec::with_capacity(header.len());
    let mut used = HashSet::<String>::new();
    let mut counts = HashMap::<String, usize>::new();
    for (index, cell) in header.iter().enumerate() {
        let name = match cell {
            Some(cell) if !cell.value.is_empty() => cell.to_string(),
            _ => format!("Unnamed: {index}"),
        };
        let mut unique = name.to_owned();
        let count = counts.entry(name.to_owned()).or_insert(0);
        while used.contains(&unique) {
            *count += 1;
            unique = format!("{name}.{count}");
        }
        used.insert(unique.to_owned());
        names.push(unique);
    }
    names
}

/// Converts a cell to a value of the column's type.
fn to_value(sheet: &Sheet, column: &Column, cell: &Cell) -> Result<Value, SpreadsheetError> {
    let mapper = |message: String| TableError::CellValueError {
        file_name: sheet.file_name.to_owned(),
        sheet_name: sheet.name.to_owned(),
        reference: cell.reference(),
        message,
    };
    let value = match column.kind {
        ColumnType::Varchar => Value::Varchar(cell.to_string()),
        ColumnType::Boolean => Value::Boolean(cell.to_boolean()),
        ColumnType::BigInt => Value::BigInt(cell.to_bigint().map_err(mapper)?),
        ColumnType::Double => Value::Double(cell.to_double().map_err(mapper)?),
        ColumnType::Timestamp => Value::Timestamp(cell.to_datetime().map_err(mapper)?),
        ColumnType::Date => Value::Date(cell.to_date().map_err(mapper)?),
        ColumnType::Time => Value::Time(cell.to_time().map_err(mapper)?),
    };
    Ok(value)
}
