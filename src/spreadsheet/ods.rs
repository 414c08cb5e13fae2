use crate::error::SpreadsheetError;
use crate::helpers::xml::XmlNodeHelper;
use crate::helpers::xml::XmlTextContextHelper;
use crate::helpers::zip::ZipHelper;
use crate::match_xml_events;
use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::cell::CellType;
use crate::spreadsheet::find_sheet;
use crate::spreadsheet::sheet::Sheet;
use crate::spreadsheet::Spreadsheet;
use crate::spreadsheet::WorkbookError;
use quick_xml::events::Event;
use quick_xml::name::QName;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

type OdsArchive = ZipArchive<BufReader<File>>;

/// ODS file MIME type identifier
const MIME_TYPE: &[u8] = b"application/vnd.oasis.opendocument.spreadsheet";
/// XML element name for spreadsheet root
const SPREADSHEET: QName = QName(b"office:spreadsheet");
/// XML element name for table (sheet)
const TABLE: QName = QName(b"table:table");
/// XML element name for table row
const TABLE_ROW: QName = QName(b"table:table-row");
/// XML element name for table cell
const TABLE_CELL: QName = QName(b"table:table-cell");
/// XML element name for covered table cell (merged cells)
const TABLE_COVERED_CELL: QName = QName(b"table:covered-table-cell");
/// XML element name for annotations (comments)
const ANNOTATION: QName = QName(b"office:annotation");
/// XML element name for paragraph text
const PARAGRAPH: QName = QName(b"text:p");
/// XML element name for string (space) text
const STRING: QName = QName(b"text:s");

/// An OpenDocument spreadsheet (.ods)
pub(crate) struct OdsSpreadsheet {
    pub(crate) name: String,
    zip: OdsArchive,
    /// Table names paired with their position in content.xml
    sheets: Vec<(String, usize)>,
}

impl OdsSpreadsheet {
    /// Opens an ODS file, validates its MIME type and lists its tables.
    pub(crate) fn open(path: &Path) -> Result<Self, SpreadsheetError> {
        let name = path.to_string_lossy().to_string();
        let file = File::open(path)?;
        let mut zip = ZipArchive::new(BufReader::new(file))?;
        check_mime(&mut zip)?;
        if is_password_protected(&mut zip)? {
            Err(WorkbookError::PasswordProtected(name.to_owned()))?;
        }
        let sheets = load_sheet_names(&mut zip)?
            .into_iter()
            .enumerate()
            .map(|(position, sheet_name)| (sheet_name, position))
            .collect::<Vec<_>>();
        if sheets.is_empty() {
            Err(WorkbookError::EmptyWorkbook(name.to_owned()))?;
        }
        debug!(file = %name, sheets = sheets.len(), "opened ods workbook");
        Ok(OdsSpreadsheet { name, zip, sheets })
    }
}

impl Spreadsheet for OdsSpreadsheet {
    fn name(&self) -> String {
        self.name.to_owned()
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.to_owned()).collect()
    }

    fn read_sheet(&mut self, sheet_name: &str) -> Result<Sheet, SpreadsheetError> {
        let position = *find_sheet(&self.sheets, sheet_name)?;
        let mut sheet = Sheet::new(&self.name, sheet_name);
        let mut reader = self.zip
            .xml_reader("content.xml")?
            .ok_or_else(|| WorkbookError::MissingPart("content.xml".to_string()))?;

        let mut table_count = 0usize;
        let mut found = false;
        match_xml_events!(reader => {
            Event::End(event) if event.name() == SPREADSHEET => break,
            Event::Start(event) if event.name() == TABLE => {
                if table_count == position {
                    found = true;
                    break;
                }
                table_count += 1;
            }
        });
        if !found {
            Err(WorkbookError::MissingPart(format!("content.xml#{sheet_name}")))?;
        }

        let mut row = 0usize;
        let mut col = 0usize;
        let mut row_count = 0usize;
        let mut col_count = 0usize;
        let mut kind = CellType::default();
        let mut value = String::new();
        // inside a string cell whose paragraphs make up the value
        let mut element_context = false;
        let mut comment_context = false;
        match_xml_events!(reader => {
            Event::End(event) if event.name() == TABLE => break,
            Event::Start(event) if event.name() == TABLE_ROW => {
                row_count = event.parse_attribute_value("table:number-rows-repeated")?.unwrap_or(1);
                col = 0;
            }
            Event::End(event) if event.name() == TABLE_ROW => row += row_count,
            Event::Start(event) if event.name() == TABLE_CELL || event.name() == TABLE_COVERED_CELL => {
                value.clear();
                col_count = event.parse_attribute_value::<usize>("table:number-columns-repeated")?.unwrap_or(1);
                let value_type = event.get_attribute_value("office:value-type")?;
                kind = match value_type.as_deref() {
                    Some("boolean") => CellType::Boolean,
                    Some("date") => CellType::IsoDateTime,
                    Some("time") => CellType::IsoDuration,
                    Some("string") => {
                        let is_error = event.get_attribute_value("calcext:value-type")?
                            .map(|cow| cow == "error")
                            .unwrap_or(false);
                        if is_error { CellType::Error } else { CellType::InlineString }
                    }
                    Some(_) => CellType::Number,
                    None => CellType::Empty,
                };
                match value_type.as_deref() {
                    Some("string") => element_context = true,
                    Some("boolean") => {
                        let is_true = event.get_attribute_value("office:boolean-value")?
                            .map(|cow| cow != "false" && cow != "0")
                            .unwrap_or(false);
                        value.push_str(if is_true { "1" } else { "0" });
                    }
                    Some("date") => if let Some(data) = event.get_attribute_value("office:date-value")? {
                        value.push_str(&data);
                    }
                    Some("time") => if let Some(data) = event.get_attribute_value("office:time-value")? {
                        value.push_str(&data);
                    }
                    Some(_) => if let Some(data) = event.get_attribute_value("office:value")? {
                        value.push_str(&data);
                    }
                    None => (),
                }
            }
            Event::End(event) if event.name() == TABLE_CELL || event.name() == TABLE_COVERED_CELL => {
                if kind != CellType::Empty && !value.is_empty() {
                    for row_offset in 0..row_count {
                        for col_offset in 0..col_count {
                            sheet.push(Cell {
                                row: row + row_offset,
                                col: col + col_offset,
                                kind,
                                value: value.to_owned(),
                            });
                        }
                    }
                }
                col += col_count;
                kind = CellType::Empty;
                element_context = false;
                comment_context = false;
            }
            Event::Start(event) if element_context && event.name() == ANNOTATION => comment_context = true,
            Event::End(event) if element_context && comment_context && event.name() == ANNOTATION => comment_context = false,
            Event::Start(event) if element_context && !comment_context && event.name() == PARAGRAPH => {
                if !value.is_empty() {
                    value.push('\n');
                }
            }
            Event::Start(event) if element_context && !comment_context && event.name() == STRING => {
                let count = event.parse_attribute_value("text:c")?.unwrap_or(1);
                for _ in 0..count {
                    value.push(' ');
                }
            }
            Event::Text(event) if element_context && !comment_context => value.push_bytes_text(&event)?,
            Event::GeneralRef(event) if element_context && !comment_context => value.push_bytes_ref(&event)?,
        });
        sheet.finish();
        debug!(sheet = sheet_name, cells = sheet.cells.len(), "read ods sheet");
        Ok(sheet)
    }
}

/// Checks the `mimetype` entry, when present, names an OpenDocument spreadsheet.
fn check_mime(zip: &mut OdsArchive) -> Result<(), SpreadsheetError> {
    if let Some(mut file) = zip.file("mimetype")? {
        let mut buffer = Vec::with_capacity(MIME_TYPE.len());
        file.read_to_end(&mut buffer)?;
        if buffer.trim_ascii() != MIME_TYPE {
            Err(WorkbookError::InvalidMimeType)?;
        }
    }
    Ok(())
}

/// Encrypted packages list `manifest:encryption-data` under their file entries.
fn is_password_protected(zip: &mut OdsArchive) -> Result<bool, SpreadsheetError> {
    let mut reader = match zip.xml_reader("META-INF/manifest.xml")? {
        Some(reader) => reader,
        None => return Ok(false),
    };
    let mut in_file_entry = false;
    match_xml_events!(reader => {
        Event::Start(event) if event.name() == QName(b"manifest:file-entry") => in_file_entry = true,
        Event::End(event) if event.name() == QName(b"manifest:file-entry") => in_file_entry = false,
        Event::Start(event) if in_file_entry && event.name() == QName(b"manifest:encryption-data") => {
            return Ok(true);
        }
    });
    Ok(false)
}

/// Lists table names from content.xml in document order.
fn load_sheet_names(zip: &mut OdsArchive) -> Result<Vec<String>, SpreadsheetError> {
    let mut reader = zip
        .xml_reader("content.xml")?
        .ok_or_else(|| WorkbookError::MissingPart("content.xml".to_string()))?;
    let mut names = Vec::new();
    match_xml_events!(reader => {
        Event::End(event) if event.name() == SPREADSHEET => break,
        Event::Start(event) if event.name() == TABLE => {
            let name = event.get_attribute_value("table:name")?
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("Sheet{}", names.len() + 1));
            names.push(name);
        }
    });
    Ok(names)
}
