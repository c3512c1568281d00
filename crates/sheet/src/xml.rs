//! Streaming reader for Excel 2003 SpreadsheetML documents.
//!
//! Elements and attributes are matched by local name, so exports that prefix
//! element names with `ss:` and exports that rely on the default namespace
//! both parse the same way.

use crate::error::{Result, SheetError};
use crate::row::{densify, RawCell, Row};
use crate::table::Table;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Worksheet name used by OptoJump treadmill exports.
pub const DEFAULT_WORKSHEET: &str = "Dati OJ";

/// Read the first `<Table>` of the named worksheet into a dense [`Table`].
///
/// # Errors
///
/// [`SheetError::MissingWorksheet`] if no worksheet carries the requested
/// `ss:Name`, [`SheetError::MissingTable`] if the worksheet has no table, and
/// [`SheetError::Xml`] for malformed XML.
pub fn read_worksheet(bytes: &[u8], worksheet: &str) -> Result<Table> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    let mut found_worksheet = false;
    let mut in_worksheet = false;
    let mut found_table = false;
    let mut in_table = false;
    let mut in_row = false;
    let mut in_cell = false;
    let mut in_data = false;

    let mut rows: Vec<Row> = Vec::new();
    let mut cells: Vec<RawCell> = Vec::new();
    let mut current = RawCell::default();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"Worksheet" => {
                    in_worksheet = named_attr(e, b"Name")?.as_deref() == Some(worksheet);
                    found_worksheet |= in_worksheet;
                }
                b"Table" if in_worksheet && !found_table => {
                    found_table = true;
                    in_table = true;
                }
                b"Row" if in_table => {
                    in_row = true;
                    cells.clear();
                }
                b"Cell" if in_row => {
                    in_cell = true;
                    current = RawCell {
                        index: cell_index(e)?,
                        text: None,
                    };
                }
                b"Data" if in_cell => in_data = true,
                _ => {}
            },
            // Self-closing cells carry no payload but still occupy a position.
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"Cell" && in_row {
                    cells.push(RawCell {
                        index: cell_index(e)?,
                        text: None,
                    });
                }
            }
            Event::Text(ref e) => {
                if in_data {
                    let text = e.unescape()?;
                    match &mut current.text {
                        Some(existing) => existing.push_str(&text),
                        None => current.text = Some(text.into_owned()),
                    }
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"Data" if in_data => in_data = false,
                b"Cell" if in_cell => {
                    in_cell = false;
                    cells.push(std::mem::take(&mut current));
                }
                b"Row" if in_row => {
                    in_row = false;
                    rows.push(densify(std::mem::take(&mut cells)));
                }
                b"Table" if in_table => in_table = false,
                b"Worksheet" if in_worksheet => break,
                _ => {}
            },
            _ => {}
        }
        buf.clear();
    }

    if !found_worksheet {
        return Err(SheetError::MissingWorksheet {
            name: worksheet.to_string(),
        });
    }
    if !found_table {
        return Err(SheetError::MissingTable {
            name: worksheet.to_string(),
        });
    }

    tracing::debug!(
        worksheet,
        rows = rows.len(),
        "reconstructed worksheet table"
    );
    Ok(Table::new(rows))
}

/// First attribute on `e` whose local name equals `name`, unescaped.
fn named_attr(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::InvalidAttr)?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn cell_index(e: &BytesStart<'_>) -> Result<Option<usize>> {
    match named_attr(e, b"Index")? {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| SheetError::InvalidCellIndex(raw)),
        None => Ok(None),
    }
}
