//! Workbook fixtures written with the `zip` crate.
#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// One fixture cell
#[derive(Clone, Copy, Debug)]
pub enum Fixture {
    /// Stored in the shared string table
    Text(&'static str),
    /// Stored inline in the worksheet
    Inline(&'static str),
    Number(&'static str),
    Bool(bool),
    /// Serial day number formatted as a date
    Date(u32),
    Error(&'static str),
}

pub type Rows = Vec<Vec<Option<Fixture>>>;

pub use Fixture::*;

/// The watchlist used across the tests: a header and six rows, with a blank row in between.
pub fn watchlist() -> Rows {
    vec![
        vec![Some(Text("Ticker")), Some(Text("Shares")), Some(Text("Price")), Some(Text("Added")), Some(Text("Active"))],
        vec![Some(Text("AAPL")), Some(Number("10")), Some(Number("189.5")), Some(Date(45306)), Some(Bool(true))],
        vec![Some(Text("MSFT")), Some(Number("5")), Some(Number("402.25")), Some(Date(45292)), Some(Bool(false))],
        vec![],
        vec![Some(Text("NVDA")), Some(Number("3")), Some(Number("495")), Some(Date(45323)), Some(Bool(true))],
        vec![Some(Text("TSLA")), Some(Number("8")), Some(Number("248.42")), Some(Date(45337)), Some(Bool(false))],
        vec![Some(Text("AMZN")), Some(Number("12")), Some(Number("153.1")), Some(Date(45352)), Some(Bool(true))],
        vec![Some(Text("GOOG")), Some(Number("7")), Some(Number("141.8")), Some(Date(45366)), Some(Bool(false))],
    ]
}

/// The preview of [`watchlist`] as printed for `Sheet1`.
pub const WATCHLIST_PREVIEW: &str = "  Ticker Shares   Price       Added Active
0   AAPL     10   189.5  2024-01-15   True
1   MSFT      5  402.25  2024-01-01  False
2   NVDA      3   495.0  2024-02-01   True
3   TSLA      8  248.42  2024-02-15  False
4   AMZN     12   153.1  2024-03-01   True";

fn column_letters(mut col: usize) -> String {
    let mut letters = Vec::new();
    col += 1;
    while col > 0 {
        col -= 1;
        letters.insert(0, b'A' + (col % 26) as u8);
        col /= 26;
    }
    String::from_utf8(letters).unwrap()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Writes an Office Open XML workbook. Sheets are listed in the given order while
/// their parts are numbered in reverse, so part order never matches sheet order.
pub fn write_xlsx(path: &Path, sheets: &[(&str, Rows)]) -> PathBuf {
    write_workbook(path, sheets, false)
}

/// Same as [`write_xlsx`] with the workbook in the 1904 date system.
pub fn write_xlsx_1904(path: &Path, sheets: &[(&str, Rows)]) -> PathBuf {
    write_workbook(path, sheets, true)
}

fn write_workbook(path: &Path, sheets: &[(&str, Rows)], date1904: bool) -> PathBuf {
    let mut shared_strings = Vec::<&str>::new();
    let mut worksheets = Vec::new();
    for (_, rows) in sheets {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
        );
        for (row, cells) in rows.iter().enumerate() {
            if cells.is_empty() {
                continue;
            }
            xml.push_str(&format!(r#"<row r="{}">"#, row + 1));
            for (col, cell) in cells.iter().enumerate() {
                let Some(cell) = cell else { continue };
                let reference = format!("{}{}", column_letters(col), row + 1);
                let cell_xml = match cell {
                    Text(text) => {
                        let index = match shared_strings.iter().position(|it| it == text) {
                            Some(index) => index,
                            None => {
                                shared_strings.push(text);
                                shared_strings.len() - 1
                            }
                        };
                        format!(r#"<c r="{reference}" t="s"><v>{index}</v></c>"#)
                    }
                    Inline(text) => format!(r#"<c r="{reference}" t="inlineStr"><is><t>{}</t></is></c>"#, escape(text)),
                    Number(number) => format!(r#"<c r="{reference}"><v>{number}</v></c>"#),
                    Bool(value) => format!(r#"<c r="{reference}" t="b"><v>{}</v></c>"#, u8::from(*value)),
                    Date(serial) => format!(r#"<c r="{reference}" s="1"><v>{serial}</v></c>"#),
                    Error(text) => format!(r#"<c r="{reference}" t="e"><f>1/0</f><v>{}</v></c>"#, escape(text)),
                };
                xml.push_str(&cell_xml);
            }
            xml.push_str("</row>");
        }
        xml.push_str("</sheetData></worksheet>");
        worksheets.push(xml);
    }

    let count = sheets.len();
    let part = |index: usize| count - index;

    let mut workbook = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    );
    workbook.push_str(if date1904 { r#"<workbookPr date1904="1"/>"# } else { "<workbookPr/>" });
    workbook.push_str("<sheets>");
    let mut relationships = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rIdStyles" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/><Relationship Id="rIdStrings" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>"#,
    );
    for (index, (name, _)) in sheets.iter().enumerate() {
        workbook.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            escape(name),
            index + 1,
            index + 1
        ));
        relationships.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            index + 1,
            part(index)
        ));
    }
    workbook.push_str("</sheets></workbook>");
    relationships.push_str("</Relationships>");

    let mut strings = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">"#,
        shared_strings.len()
    );
    for text in &shared_strings {
        strings.push_str(&format!("<si><t>{}</t></si>", escape(text)));
    }
    strings.push_str("</sst>");

    let styles = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><numFmts count="1"><numFmt numFmtId="164" formatCode="yyyy\-mm\-dd"/></numFmts><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/><xf numFmtId="164" fontId="0" fillId="0" borderId="0" applyNumberFormat="1"/></cellXfs></styleSheet>"#;

    let content_types = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.ms-excel.sheet.macroEnabled.main+xml"/></Types>"#;
    let root_relationships = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

    let mut zip = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    let mut entry = |name: &str, content: &str| {
        zip.start_file(name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    };
    entry("[Content_Types].xml", content_types);
    entry("_rels/.rels", root_relationships);
    entry("xl/workbook.xml", &workbook);
    entry("xl/_rels/workbook.xml.rels", &relationships);
    entry("xl/styles.xml", styles);
    entry("xl/sharedStrings.xml", &strings);
    for (index, worksheet) in worksheets.iter().enumerate() {
        entry(&format!("xl/worksheets/sheet{}.xml", part(index)), worksheet);
    }
    zip.finish().unwrap();
    path.to_path_buf()
}

/// Writes an OpenDocument spreadsheet holding the same tables as [`write_xlsx`].
/// Blank rows are written as one repeated empty row.
pub fn write_ods(path: &Path, sheets: &[(&str, Rows)]) -> PathBuf {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?><office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:table="urn:oasis:names:tc:opendocument:xmlns:table:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" xmlns:calcext="urn:org:documentfoundation:names:experimental:calc:xmlns:calcext:1.0"><office:body><office:spreadsheet>"#,
    );
    for (name, rows) in sheets {
        content.push_str(&format!(r#"<table:table table:name="{}">"#, escape(name)));
        for cells in rows {
            if cells.is_empty() {
                content.push_str(r#"<table:table-row table:number-rows-repeated="1"><table:table-cell table:number-columns-repeated="5"/></table:table-row>"#);
                continue;
            }
            content.push_str("<table:table-row>");
            for cell in cells {
                let cell_xml = match cell {
                    None => "<table:table-cell/>".to_string(),
                    Some(Text(text)) | Some(Inline(text)) => format!(
                        r#"<table:table-cell office:value-type="string"><text:p>{}</text:p></table:table-cell>"#,
                        escape(text)
                    ),
                    Some(Number(number)) => format!(
                        r#"<table:table-cell office:value-type="float" office:value="{number}"><text:p>{number}</text:p></table:table-cell>"#
                    ),
                    Some(Bool(value)) => format!(
                        r#"<table:table-cell office:value-type="boolean" office:boolean-value="{value}"><text:p>{}</text:p></table:table-cell>"#,
                        if *value { "TRUE" } else { "FALSE" }
                    ),
                    Some(Date(serial)) => {
                        let date = serial_to_iso(*serial);
                        format!(
                            r#"<table:table-cell office:value-type="date" office:date-value="{date}"><text:p>{date}</text:p></table:table-cell>"#
                        )
                    }
                    Some(Error(text)) => format!(
                        r#"<table:table-cell office:value-type="string" calcext:value-type="error"><text:p>{}</text:p></table:table-cell>"#,
                        escape(text)
                    ),
                };
                content.push_str(&cell_xml);
            }
            content.push_str("</table:table-row>");
        }
        content.push_str(r#"<table:table-row table:number-rows-repeated="1048000"><table:table-cell table:number-columns-repeated="1024"/></table:table-row>"#);
        content.push_str("</table:table>");
    }
    content.push_str("</office:spreadsheet></office:body></office:document-content>");

    let manifest = r#"<?xml version="1.0" encoding="UTF-8"?><manifest:manifest xmlns:manifest="urn:oasis:names:tc:opendocument:xmlns:manifest:1.0" manifest:version="1.2"><manifest:file-entry manifest:full-path="/" manifest:media-type="application/vnd.oasis.opendocument.spreadsheet"/><manifest:file-entry manifest:full-path="content.xml" manifest:media-type="text/xml"/></manifest:manifest>"#;

    let mut zip = ZipWriter::new(File::create(path).unwrap());
    let stored = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    zip.start_file("mimetype", stored).unwrap();
    zip.write_all(b"application/vnd.oasis.opendocument.spreadsheet").unwrap();
    zip.start_file("META-INF/manifest.xml", SimpleFileOptions::default()).unwrap();
    zip.write_all(manifest.as_bytes()).unwrap();
    zip.start_file("content.xml", SimpleFileOptions::default()).unwrap();
    zip.write_all(content.as_bytes()).unwrap();
    zip.finish().unwrap();
    path.to_path_buf()
}

/// Serial day number (1900 date system, past February 1900) as an ISO date.
fn serial_to_iso(serial: u32) -> String {
    let date = chrono::NaiveDate::from_ymd_opt(1899, 12, 30).unwrap() + chrono::Duration::days(serial as i64);
    date.format("%Y-%m-%d").to_string()
}
