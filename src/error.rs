use thiserror::Error;

/// Catch-all error for inspecting a spreadsheet.
/// Aggregates errors from the standard library, the container/XML parsers and the internal modules.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error("{0}")]
    StringEncodingError(#[from] std::str::Utf8Error),

    // Third-party library errors
    #[error("{0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("{0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("{0}")]
    XmlEncodingError(#[from] quick_xml::encoding::EncodingError),

    #[error("{0}")]
    XmlAttributeError(#[from] quick_xml::events::attributes::AttrError),

    // Helper module errors
    #[error("{0}")]
    XmlHelperError(#[from] crate::helpers::xml::XmlError),

    // Spreadsheet module errors
    #[error("{0}")]
    WorkbookError(#[from] crate::spreadsheet::WorkbookError),

    #[error("{0}")]
    TableError(#[from] crate::table::TableError),
}

impl SpreadsheetError {
    /// Returns true when the error means the workbook file itself could not be found.
    pub fn is_not_found(&self) -> bool {
        match self {
            SpreadsheetError::WorkbookError(crate::spreadsheet::WorkbookError::FileNotFound(_)) => true,
            SpreadsheetError::IoError(error) => error.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, SpreadsheetError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| SpreadsheetError::WithContextError(format!("{}: {}", message, e)))
    }
}
