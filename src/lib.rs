//! # Sheet Inspector
//!
//! Opens a spreadsheet workbook, lists its sheets in workbook order and loads one
//! sheet into a [`Table`] whose first rows can be previewed as plain text.
//!
//! ## Formats
//!
//! - Office Open XML workbooks: `.xlsx`, `.xlsm`, `.xltx`, `.xltm`, `.xlam`
//! - OpenDocument spreadsheets: `.ods`
//!
//! ## Tables
//!
//! The first used row of a sheet names the columns. Blank header cells become
//! `Unnamed: {position}` and repeated names are suffixed `.1`, `.2`, ... Each
//! column's type (boolean, integer, float, text, timestamp, date or time) is
//! inferred from its cells.
//!
//! ```no_run
//! use sheet_inspector::SpreadsheetInspector;
//!
//! let mut inspector = SpreadsheetInspector::open("watchlist.xlsm")?;
//! println!("Sheet names: {:?}", inspector.sheet_names());
//! let table = inspector.load_table("Sheet1")?;
//! println!("{}", sheet_inspector::preview::render(&table, 5));
//! # Ok::<(), sheet_inspector::SpreadsheetError>(())
//! ```
mod error;
mod helpers;
mod inspector;
pub mod logging;
mod settings;
mod spreadsheet;
mod table;

pub use crate::error::SpreadsheetError;
pub use crate::inspector::inspect;
pub use crate::inspector::SpreadsheetInspector;
pub use crate::settings::Settings;
pub use crate::settings::DEFAULT_FILE_NAME;
pub use crate::settings::DEFAULT_PREVIEW_ROWS;
pub use crate::settings::DEFAULT_SHEET_NAME;
pub use crate::spreadsheet::cell::Cell;
pub use crate::spreadsheet::cell::CellType;
pub use crate::spreadsheet::open_spreadsheet;
pub use crate::spreadsheet::sheet::Sheet;
pub use crate::spreadsheet::Spreadsheet;
pub use crate::spreadsheet::WorkbookError;
pub use crate::table::preview;
pub use crate::table::Column;
pub use crate::table::ColumnType;
pub use crate::table::Table;
pub use crate::table::TableError;
pub use crate::table::Value;
