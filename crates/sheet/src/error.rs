use thiserror::Error;

/// Errors that can occur while reading a SpreadsheetML document
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Worksheet not found: {name}")]
    MissingWorksheet { name: String },

    #[error("Worksheet '{name}' contains no <Table>")]
    MissingTable { name: String },

    #[error("Invalid cell index: {0}")]
    InvalidCellIndex(String),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
