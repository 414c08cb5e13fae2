//! Opens a workbook, lists its sheets and previews one of them.
use crate::error::ResultMessage;
use crate::error::SpreadsheetError;
use crate::settings::Settings;
use crate::spreadsheet::open_spreadsheet;
use crate::spreadsheet::Spreadsheet;
use crate::table::preview;
use crate::table::Table;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use tracing::info;

/// A workbook opened for inspection.
pub struct SpreadsheetInspector {
    spreadsheet: Box<dyn Spreadsheet>,
}

impl SpreadsheetInspector {
    /// Opens the workbook at `path`, choosing the reader from its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SpreadsheetError> {
        let spreadsheet = open_spreadsheet(path)?;
        Ok(SpreadsheetInspector { spreadsheet })
    }

    /// File name of the opened workbook
    pub fn name(&self) -> String {
        self.spreadsheet.name()
    }

    /// Sheet names in the order the workbook stores them.
    pub fn sheet_names(&self) -> Vec<String> {
        self.spreadsheet.sheet_names()
    }

    /// Loads the named sheet, taking its first used row as the header.
    pub fn load_table(&mut self, sheet_name: &str) -> Result<Table, SpreadsheetError> {
        let name = self.spreadsheet.name();
        let sheet = self.spreadsheet.read_sheet(sheet_name).with_prefix(&name)?;
        debug!(sheet = sheet_name, cells = sheet.cells.len(), "sheet read");
        // Cell errors already name the file
        Table::from_sheet(&sheet)
    }
}

/// Writes the sheet names of the configured workbook, then a preview of the configured sheet.
pub fn inspect<W: Write>(settings: &Settings, out: &mut W) -> Result<(), SpreadsheetError> {
    let mut inspector = SpreadsheetInspector::open(&settings.file_name)?;
    let sheet_names = inspector.sheet_names();
    info!(file = %inspector.name(), sheets = sheet_names.len(), "workbook opened");
    writeln!(out, "Sheet names: {:?}", sheet_names)?;

    let table = inspector.load_table(&settings.sheet_name)?;
    info!(sheet = %table.name, rows = table.len(), columns = table.width(), "table loaded");
    writeln!(out, "{}", preview::render(&table, settings.preview_rows))?;
    Ok(())
}
