//! Plain-text rendering of the first rows of a table, laid out like a pandas `DataFrame`.
use crate::table::Column;
use crate::table::ColumnType;
use crate::table::Table;
use crate::table::Value;

const COLUMN_SEPARATOR: &str = " ";

/// Renders the header and at most `rows` rows of `table`, without a trailing newline.
pub fn render(table: &Table, rows: usize) -> String {
    let head = table.head(rows);
    if head.is_empty() {
        return render_empty(table);
    }

    let index: Vec<String> = (0..head.len()).map(|row| row.to_string()).collect();
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(table.width() + 1);
    grid.push(std::iter::once(String::new()).chain(index).collect());
    for (position, column) in table.columns.iter().enumerate() {
        let has_null = head.iter().any(|row| row[position].is_null());
        let mut cells = Vec::with_capacity(head.len() + 1);
        cells.push(escape(&column.name));
        cells.extend(head.iter().map(|row| format_value(column, &row[position], has_null)));
        grid.push(cells);
    }

    // values carry one leading space, headers and the index do not
    let widths: Vec<usize> = grid
        .iter()
        .enumerate()
        .map(|(position, cells)| {
            let padding = usize::from(position > 0);
            let header = cells[0].chars().count();
            let values = cells[1..].iter().map(|cell| cell.chars().count() + padding).max().unwrap_or(0);
            header.max(values)
        })
        .collect();
    (0..=head.len())
        .map(|line| {
            grid.iter()
                .zip(&widths)
                .map(|(cells, width)| format!("{:>width$}", cells[line], width = *width))
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_empty(table: &Table) -> String {
    let names: Vec<String> = table.columns.iter().map(|column| escape(&column.name)).collect();
    format!("Empty DataFrame\nColumns: [{}]\nIndex: []", names.join(", "))
}

/// Formats one value for its column.
/// An integer column holding a missing value reads as floats, and missing dates read as `NaT`.
fn format_value(column: &Column, value: &Value, has_null: bool) -> String {
    match value {
        Value::Null => match column.kind {
            ColumnType::Date | ColumnType::Timestamp => "NaT".to_string(),
            _ => "NaN".to_string(),
        },
        Value::Boolean(value) => if *value { "True" } else { "False" }.to_string(),
        Value::BigInt(value) if has_null => format_double(*value as f64),
        Value::BigInt(value) => value.to_string(),
        Value::Double(value) => format_double(*value),
        Value::Varchar(value) => escape(value),
        Value::Timestamp(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        Value::Date(value) => value.format("%Y-%m-%d").to_string(),
        Value::Time(value) => value.format("%H:%M:%S").to_string(),
    }
}

/// Shortest round-trip decimal, always with a fractional part.
fn format_double(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        let text = value.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{text}.0")
        }
    }
}

/// Keeps multi-line text on one line.
fn escape(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}
