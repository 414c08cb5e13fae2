use crate::spreadsheet::cell::CellType;

/// Value types a table column can hold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColumnType {
    /// Boolean values (true/false)
    Boolean,
    /// 64-bit signed integers
    BigInt,
    /// Double-precision floating point numbers
    Double,
    /// Text, and the fallback for mixed columns
    Varchar,
    /// Date and time
    Timestamp,
    /// Date without time component
    Date,
    /// Time without date component
    Time,
}

/// A table column: header name and inferred type.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column name (from header row or generated)
    pub name: String,
    pub kind: ColumnType,
}

impl ColumnType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "bool",
            ColumnType::BigInt => "int64",
            ColumnType::Double => "float64",
            ColumnType::Varchar => "object",
            ColumnType::Timestamp => "datetime64",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
        }
    }

    /// Infers the column type a single cell asks for.
    /// Error cells keep their text, so they ask for Varchar.
    pub(crate) fn from(cell_type: &CellType, value: &str) -> Option<Self> {
        match cell_type {
            CellType::Boolean => Some(ColumnType::Boolean),
            CellType::Number if Self::is_integer(value) => Some(ColumnType::BigInt),
            CellType::Number => Some(ColumnType::Double),
            CellType::NumberDateTime1900 | CellType::NumberDateTime1904 => Some(ColumnType::Timestamp),
            CellType::NumberDate1900 | CellType::NumberDate1904 => Some(ColumnType::Date),
            CellType::NumberTime1900 | CellType::NumberTime1904 => Some(ColumnType::Time),
            CellType::IsoDateTime if value.contains("1899-12-30T") => Some(ColumnType::Time),
            CellType::IsoDateTime if value.contains("1900-01-01T") => Some(ColumnType::Time),
            CellType::IsoDateTime if value.contains("1904-01-01T") => Some(ColumnType::Time),
            CellType::IsoDateTime if !value.contains('T') || value.contains("T00:00:00") => Some(ColumnType::Date),
            CellType::IsoDateTime => Some(ColumnType::Timestamp),
            CellType::IsoDuration => Some(ColumnType::Time),
            CellType::InlineString | CellType::SharedString | CellType::Error => Some(ColumnType::Varchar),
            CellType::Empty => None,
        }
    }

    /// Checks if a numeric string represents a whole number that fits in an i64.
    fn is_integer(value: &str) -> bool {
        let value = value.trim();
        value.parse::<i64>().is_ok()
            || value
                .parse::<f64>()
                .map(|number| number.is_finite() && number.fract() == 0.0 && number.abs() < i64::MAX as f64)
                .unwrap_or(false)
    }

    /// Detects the most specific common type from a collection of candidate types.
    /// Falls back to VARCHAR if types are inconsistent or empty.
    pub(crate) fn detect(types: Vec<Option<ColumnType>>) -> ColumnType {
        let types: Vec<ColumnType> = types.into_iter().flatten().collect();
        if types.is_empty() {
            ColumnType::Varchar
        } else if types.iter().all(|kind| kind.is_boolean()) {
            ColumnType::Boolean
        } else if types.iter().all(|kind| kind.is_int()) {
            ColumnType::BigInt
        } else if types.iter().all(|kind| kind.is_float()) {
            ColumnType::Double
        } else if types.iter().all(|kind| kind.is_date()) {
            ColumnType::Date
        } else if types.iter().all(|kind| kind.is_time()) {
            ColumnType::Time
        } else if types.iter().all(|kind| kind.is_datetime()) {
            ColumnType::Timestamp
        } else {
            ColumnType::Varchar
        }
    }

    #[inline]
    pub(crate) fn is_boolean(&self) -> bool {
        matches!(self, ColumnType::Boolean)
    }

    #[inline]
    pub(crate) fn is_int(&self) -> bool {
        matches!(self, ColumnType::BigInt)
    }

    /// Integers count as floats.
    #[inline]
    pub(crate) fn is_float(&self) -> bool {
        matches!(self, ColumnType::BigInt | ColumnType::Double)
    }

    #[inline]
    pub(crate) fn is_date(&self) -> bool {
        matches!(self, ColumnType::Date)
    }

    #[inline]
    pub(crate) fn is_time(&self) -> bool {
        matches!(self, ColumnType::Time)
    }

    /// Timestamps, dates and times all widen to Timestamp.
    #[inline]
    pub(crate) fn is_datetime(&self) -> bool {
        matches!(self, ColumnType::Timestamp | ColumnType::Date | ColumnType::Time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_types() {
        assert_eq!(ColumnType::from(&CellType::Number, "42"), Some(ColumnType::BigInt));
        assert_eq!(ColumnType::from(&CellType::Number, "42.000"), Some(ColumnType::BigInt));
        assert_eq!(ColumnType::from(&CellType::Number, "1E3"), Some(ColumnType::BigInt));
        assert_eq!(ColumnType::from(&CellType::Number, "1.5E-3"), Some(ColumnType::Double));
        assert_eq!(ColumnType::from(&CellType::Number, "189.5"), Some(ColumnType::Double));
        assert_eq!(ColumnType::from(&CellType::Number, "-7"), Some(ColumnType::BigInt));
        assert_eq!(ColumnType::from(&CellType::IsoDateTime, "2024-01-15"), Some(ColumnType::Date));
        assert_eq!(ColumnType::from(&CellType::IsoDateTime, "2024-01-15T00:00:00"), Some(ColumnType::Date));
        assert_eq!(ColumnType::from(&CellType::IsoDateTime, "2024-01-15T09:30:00"), Some(ColumnType::Timestamp));
        assert_eq!(ColumnType::from(&CellType::IsoDateTime, "1899-12-30T09:30:00"), Some(ColumnType::Time));
        assert_eq!(ColumnType::from(&CellType::Error, "#N/A"), Some(ColumnType::Varchar));
        assert_eq!(ColumnType::from(&CellType::Empty, ""), None);
    }

    #[test]
    fn integers_beyond_bigint_are_double() {
        assert_eq!(ColumnType::from(&CellType::Number, "1E+20"), Some(ColumnType::Double));
        assert_eq!(ColumnType::from(&CellType::Number, "12345678901234567890"), Some(ColumnType::Double));
        assert_eq!(ColumnType::from(&CellType::Number, "-1E+19"), Some(ColumnType::Double));
        assert_eq!(ColumnType::from(&CellType::Number, "9007199254740992"), Some(ColumnType::BigInt));
    }

    #[test]
    fn detect_common_type() {
        use ColumnType::*;
        assert_eq!(ColumnType::detect(vec![]), Varchar);
        assert_eq!(ColumnType::detect(vec![Some(Boolean), None, Some(Boolean)]), Boolean);
        assert_eq!(ColumnType::detect(vec![Some(BigInt), Some(BigInt)]), BigInt);
        assert_eq!(ColumnType::detect(vec![Some(BigInt), Some(Double)]), Double);
        assert_eq!(ColumnType::detect(vec![Some(Date), Some(Date)]), Date);
        assert_eq!(ColumnType::detect(vec![Some(Time)]), Time);
        assert_eq!(ColumnType::detect(vec![Some(Date), Some(Timestamp)]), Timestamp);
        assert_eq!(ColumnType::detect(vec![Some(BigInt), Some(Varchar)]), Varchar);
        assert_eq!(ColumnType::detect(vec![Some(Boolean), Some(BigInt)]), Varchar);
    }
}
