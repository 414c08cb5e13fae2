use crate::spreadsheet::reference::index_to_reference;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use iso8601_duration::Duration as IsoDuration;
use std::fmt::Display;

/// Types of cell data in spreadsheet files.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum CellType {
    #[default]
    Empty,
    /// Boolean values stored as "1" / "0"
    Boolean,
    /// Numeric values
    Number,
    /// Date/time values stored as numbers from 1900 epoch
    NumberDateTime1900,
    /// Date values stored as numbers from 1900 epoch
    NumberDate1900,
    /// Time values stored as numbers from 1900 epoch
    NumberTime1900,
    /// Date/time values stored as numbers from 1904 epoch
    NumberDateTime1904,
    /// Date values stored as numbers from 1904 epoch
    NumberDate1904,
    /// Time values stored as numbers from 1904 epoch
    NumberTime1904,
    /// ISO 8601 date/time strings
    IsoDateTime,
    /// ISO 8601 duration strings
    IsoDuration,
    /// Inline string values
    InlineString,
    /// Strings resolved from the shared string table
    SharedString,
    /// Error values (#DIV/0!, #N/A, ...)
    Error,
}

impl CellType {
    /// Maps built-in Excel number format ids to date/time cell types.
    pub(crate) fn parse_builtin_number_format_id(id: &str, is_1904: bool) -> Option<Self> {
        match id {
            "22" => Some(if is_1904 { Self::NumberDateTime1904 } else { Self::NumberDateTime1900 }),
            "14" | "15" | "16" | "17" => Some(if is_1904 { Self::NumberDate1904 } else { Self::NumberDate1900 }),
            "18" | "19" | "20" | "21" | "45" | "46" | "47" => Some(if is_1904 { Self::NumberTime1904 } else { Self::NumberTime1900 }),
            _ => None,
        }
    }

    /// Scans a custom number format code for date and time tokens.
    /// Quoted literals, escaped characters and `[...]` sections (colors, locales) are ignored.
    pub(crate) fn parse_custom_number_format(format: &str, is_1904: bool) -> Self {
        let mut is_escaped = false;
        let mut is_literal = false;
        let mut is_date = false;
        let mut is_time = false;
        let mut is_color = false;
        for character in format.chars() {
            match character {
                _ if is_escaped => is_escaped = false,
                '_' | '\\' if !is_escaped => is_escaped = true,

                '"' if is_literal => is_literal = false,
                '"' if !is_literal && !is_color => is_literal = true,

                ']' if is_color => is_color = false,
                '[' if !is_color && !is_literal => is_color = true,
                _ if is_literal || is_color => (),

                'Y' | 'y' | 'D' | 'd' => is_date = true,
                'H' | 'h' | 'S' | 's' => is_time = true,
                _ => (),
            }
        }

        match (is_date, is_time, is_1904) {
            (true, true, false) => Self::NumberDateTime1900,
            (true, true, true) => Self::NumberDateTime1904,
            (true, false, false) => Self::NumberDate1900,
            (true, false, true) => Self::NumberDate1904,
            (false, true, false) => Self::NumberTime1900,
            (false, true, true) => Self::NumberTime1904,
            (false, false, _) => Self::Number,
        }
    }

    /// True for serial numbers carrying a date/time number format.
    pub(crate) fn is_serial_datetime(&self) -> bool {
        matches!(
            self,
            CellType::NumberDateTime1900
                | CellType::NumberDate1900
                | CellType::NumberTime1900
                | CellType::NumberDateTime1904
                | CellType::NumberDate1904
                | CellType::NumberTime1904
        )
    }

    fn is_1904(&self) -> bool {
        matches!(
            self,
            CellType::NumberDateTime1904 | CellType::NumberDate1904 | CellType::NumberTime1904
        )
    }
}

/// A single non-empty cell with position, type, and raw value.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
    pub kind: CellType,
    /// Raw value as stored in the file
    pub value: String,
}

impl Cell {
    /// Returns the Excel-style cell reference (e.g., "A1", "B2").
    pub fn reference(&self) -> String {
        index_to_reference(self.row, self.col)
    }

    pub(crate) fn to_boolean(&self) -> bool {
        self.value == "1" || self.value.eq_ignore_ascii_case("true")
    }

    pub(crate) fn to_bigint(&self) -> Result<i64, String> {
        let value = self.value.trim();
        value
            .parse::<i64>()
            .or_else(|_| match value.parse::<f64>() {
                Ok(number) if number.fract() == 0.0 && number.abs() < i64::MAX as f64 => Ok(number as i64),
                _ => Err(()),
            })
            .map_err(|_| format!("parse '{}' to bigint failed", self.value))
    }

    pub(crate) fn to_double(&self) -> Result<f64, String> {
        self.value.trim().parse::<f64>().map_err(|_| format!("parse '{}' to double failed", self.value))
    }

    /// Converts the cell value to a date and time.
    /// Serial numbers honour the 1900 (with the Lotus 1-2-3 leap year bug) and 1904 epochs.
    pub(crate) fn to_datetime(&self) -> Result<NaiveDateTime, String> {
        match self.kind {
            kind if kind.is_serial_datetime() => {
                let serial = self.to_double()?;
                let date = serial_to_date(serial, kind.is_1904())
                    .ok_or_else(|| format!("parse '{}' to date failed", self.value))?;
                Ok(date.and_time(fraction_to_time(serial.fract())))
            }
            CellType::IsoDateTime => parse_iso_datetime(&self.value)
                .ok_or_else(|| format!("parse '{}' to NaiveDateTime failed", self.value)),
            CellType::IsoDuration => {
                let time = self.to_time()?;
                Ok(NaiveDate::default().and_time(time))
            }
            _ => Err(format!("parse '{}' to datetime failed", self.value)),
        }
    }

    pub(crate) fn to_date(&self) -> Result<NaiveDate, String> {
        self.to_datetime().map(|datetime| datetime.date())
    }

    pub(crate) fn to_time(&self) -> Result<NaiveTime, String> {
        match self.kind {
            CellType::IsoDuration => {
                let duration = self
                    .value
                    .parse::<IsoDuration>()
                    .map_err(|_| format!("parse '{}' to iso8601 duration failed", self.value))?;
                let seconds = duration.hour as f64 * 3600.0 + duration.minute as f64 * 60.0 + duration.second as f64;
                Ok(fraction_to_time((seconds / 86_400.0).fract()))
            }
            _ => self.to_datetime().map(|datetime| datetime.time()),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Fall back to the raw value when a date/time cannot be decoded
        let value = match self.kind {
            CellType::Boolean => if self.to_boolean() { "True" } else { "False" }.to_owned(),
            CellType::NumberDate1900 | CellType::NumberDate1904 => self
                .to_date()
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|_| self.value.to_owned()),
            CellType::NumberTime1900 | CellType::NumberTime1904 | CellType::IsoDuration => self
                .to_time()
                .map(|time| time.format("%H:%M:%S").to_string())
                .unwrap_or_else(|_| self.value.to_owned()),
            CellType::NumberDateTime1900 | CellType::NumberDateTime1904 | CellType::IsoDateTime => self
                .to_datetime()
                .map(|datetime| datetime.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|_| self.value.replace('T', " ")),
            _ => self.value.to_owned(),
        };
        write!(f, "{}", value)
    }
}

/// Converts an Excel serial day number to a calendar date.
fn serial_to_date(serial: f64, is_1904: bool) -> Option<NaiveDate> {
    let days = serial.trunc() as i64;
    let offset = if is_1904 {
        1_462
    } else if days < 60 {
        1 // Lotus 1-2-3 treats 1900 as a leap year
    } else {
        0
    };
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_signed(Duration::try_days(days + offset)?)
}

/// Converts the fractional part of a serial number to a time of day, rounded to milliseconds.
fn fraction_to_time(fraction: f64) -> NaiveTime {
    let milliseconds = (fraction.abs() * 86_400_000f64).round() as i64;
    NaiveTime::MIN + Duration::milliseconds(milliseconds.min(86_399_999))
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim_end_matches('Z');
    if value.contains('T') {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").ok()
    } else {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN))
    }
}
