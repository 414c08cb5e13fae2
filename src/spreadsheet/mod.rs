//! # Spreadsheet Reading
//!
//! Opens workbook files and reads their sheets into [`Sheet`] values of typed cells.
//! Office Open XML workbooks (`.xlsx`, `.xlsm`, `.xltx`, `.xltm`, `.xlam`) and
//! OpenDocument spreadsheets (`.ods`) are supported; the format is chosen from the
//! file extension.
use crate::error::ResultMessage;
use crate::error::SpreadsheetError;
use crate::spreadsheet::ods::OdsSpreadsheet;
use crate::spreadsheet::sheet::Sheet;
use crate::spreadsheet::xlsx::XlsxSpreadsheet;
use std::ffi::OsStr;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub(crate) mod cell;
pub(crate) mod excel;
pub(crate) mod ods;
pub(crate) mod reference;
pub(crate) mod sheet;
pub(crate) mod xlsx;

/// Conditions detected while opening a workbook or looking up one of its sheets.
#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("File not found: '{0}'")]
    FileNotFound(String),

    #[error("Unsupported spreadsheet format: '{0}'")]
    UnsupportedFormat(String),

    #[error("Spreadsheet '{0}' is password protected")]
    PasswordProtected(String),

    #[error("Missing part '{0}' in spreadsheet")]
    MissingPart(String),

    #[error("No sheet found in '{0}'")]
    EmptyWorkbook(String),

    #[error("Shared string {index} out of range, the workbook has {count}")]
    SharedStringOutOfRange { index: usize, count: usize },

    #[error("Worksheet named '{sheet}' not found. Available sheets: {available:?}")]
    SheetNotFound { sheet: String, available: Vec<String> },

    #[error("Invalid ODS MIME type")]
    InvalidMimeType,
}

/// A workbook opened for reading.
pub trait Spreadsheet {
    /// File name of the workbook
    fn name(&self) -> String;

    /// Sheet names in the order the workbook stores them
    fn sheet_names(&self) -> Vec<String>;

    /// Reads every non-empty cell of the named sheet.
    fn read_sheet(&mut self, sheet_name: &str) -> Result<Sheet, SpreadsheetError>;
}

/// Supported container formats
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Format {
    Xlsx,
    Ods,
}

impl Format {
    /// Detects the format from the file extension, ignoring case.
    pub(crate) fn detect(path: &Path) -> Option<Format> {
        let extension = path.extension().and_then(OsStr::to_str)?.to_ascii_lowercase();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xltx" | "xltm" | "xlam" => Some(Format::Xlsx),
            "ods" => Some(Format::Ods),
            _ => None,
        }
    }
}

/// Opens a workbook with the reader matching its extension.
pub fn open_spreadsheet<P: AsRef<Path>>(path: P) -> Result<Box<dyn Spreadsheet>, SpreadsheetError> {
    let path = path.as_ref();
    let file_name = path.to_string_lossy().to_string();
    if !path.exists() {
        Err(WorkbookError::FileNotFound(file_name.to_owned()))?;
    }
    let format = Format::detect(path).ok_or_else(|| WorkbookError::UnsupportedFormat(file_name.to_owned()))?;
    debug!(file = %file_name, ?format, "opening spreadsheet");
    let spreadsheet: Box<dyn Spreadsheet> = match format {
        Format::Xlsx => Box::new(XlsxSpreadsheet::open(path).with_prefix(&file_name)?),
        Format::Ods => Box::new(OdsSpreadsheet::open(path).with_prefix(&file_name)?),
    };
    Ok(spreadsheet)
}

/// Finds `sheet_name` among `sheets` or reports the available names.
pub(crate) fn find_sheet<'a, T>(sheets: &'a [(String, T)], sheet_name: &str) -> Result<&'a T, WorkbookError> {
    sheets
        .iter()
        .find(|(name, _)| name == sheet_name)
        .map(|(_, value)| value)
        .ok_or_else(|| WorkbookError::SheetNotFound {
            sheet: sheet_name.to_owned(),
            available: sheets.iter().map(|(name, _)| name.to_owned()).collect(),
        })
}
