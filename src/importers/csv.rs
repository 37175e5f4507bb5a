use csv_async::AsyncReaderBuilder;
use futures::{StreamExt, io};

const UTF8_BOM: char = '\u{feff}';

/// Reads every record of a CSV stream, the header row included.
///
/// Records may have different lengths, the grid construction pads them.
pub async fn read_csv_rows<R: io::AsyncRead + Unpin + Send>(
    reader: R,
    delimiter: u8,
) -> Result<Vec<Vec<String>>, csv_async::Error> {
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .create_reader(reader);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut records = csv_reader.records();

    while let Some(record) = records.next().await {
        let record = record?;
        let row = record.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        rows.push(row);
    }

    // Spreadsheet software likes to start CSV exports with a byte order mark.
    if let Some(first) = rows.first_mut().and_then(|row| row.first_mut()) {
        if first.starts_with(UTF8_BOM) {
            *first = first.trim_start_matches(UTF8_BOM).to_string();
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_csv_rows() {
        let csv_data = "timestamp,load\n2024-01-01 01:00,1.5\n2024-01-01 02:00,1.25\n";
        let reader = io::Cursor::new(csv_data.as_bytes());

        let rows = read_csv_rows(reader, b',').await.unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["timestamp", "load"],
                vec!["2024-01-01 01:00", "1.5"],
                vec!["2024-01-01 02:00", "1.25"],
            ]
        );
    }

    #[tokio::test]
    async fn test_read_csv_rows_semicolon_and_ragged() {
        let csv_data = "\u{feff}Datum;Wert;Bemerkung\n01.01.2024 00:15;0,5\n";
        let reader = io::Cursor::new(csv_data.as_bytes());

        let rows = read_csv_rows(reader, b';').await.unwrap();
        assert_eq!(rows[0], vec!["Datum", "Wert", "Bemerkung"]);
        assert_eq!(rows[1], vec!["01.01.2024 00:15", "0,5"]);
    }
}
