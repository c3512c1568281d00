//! # ojdata-sheet
//!
//! Reader for the Excel 2003 SpreadsheetML exports produced by the OptoJump
//! treadmill software.
//!
//! The instrument writes sparse rows: cells that are empty or unchanged are
//! simply omitted, and the next written cell carries an explicit 1-based
//! `ss:Index` attribute. This crate reconstructs each row into a positionally
//! dense sequence of optional strings so that downstream code can address
//! columns by header position.
//!
//! # Examples
//!
//! ```
//! use ojdata_sheet::{read_worksheet, DEFAULT_WORKSHEET};
//!
//! let xml = br#"<?xml version="1.0"?>
//! <Workbook xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
//!   <Worksheet ss:Name="Dati OJ">
//!     <Table>
//!       <Row><Cell><Data ss:Type="String">a</Data></Cell>
//!            <Cell ss:Index="3"><Data ss:Type="String">c</Data></Cell></Row>
//!     </Table>
//!   </Worksheet>
//! </Workbook>"#;
//!
//! let table = read_worksheet(xml, DEFAULT_WORKSHEET).unwrap();
//! assert_eq!(table.rows()[0], vec![Some("a".into()), None, Some("c".into())]);
//! ```

/// Error types and result alias.
pub mod error;
/// Sparse cell model and dense row reconstruction.
pub mod row;
/// Dense table with header-based column lookup.
pub mod table;
/// Streaming SpreadsheetML reader.
pub mod xml;

pub use error::{Result, SheetError};
pub use row::{densify, RawCell, Row};
pub use table::Table;
pub use xml::{read_worksheet, DEFAULT_WORKSHEET};
