//! Fixed inputs of an inspection run.
use std::path::PathBuf;

/// Workbook opened when no other file is given
pub const DEFAULT_FILE_NAME: &str = "watchlist.xlsm";
/// Sheet loaded into the table
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";
/// Rows shown in the preview
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// What to open, which sheet to load and how much of it to show.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Workbook path, relative to the working directory
    pub file_name: PathBuf,
    pub sheet_name: String,
    pub preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            file_name: PathBuf::from(DEFAULT_FILE_NAME),
            sheet_name: DEFAULT_SHEET_NAME.to_owned(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}
