use ojdata_sheet::SheetError;
use thiserror::Error;

/// Errors that can fail a single file. None of them abort a batch.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File name '{filename}' contains no 'Treadmill' token")]
    MissingMarkerToken { filename: String },

    #[error("File name '{filename}' has too few tokens after 'Treadmill' for session and music labels")]
    InsufficientTokens { filename: String },

    #[error("Worksheet has {rows} row(s), need a header and at least one data row")]
    InsufficientRows { rows: usize },

    #[error("No 'Impulso esterno STOP' row found")]
    NoStopRow,

    #[error("STOP row has no numeric Tempo[s] value: {value:?}")]
    UnparsableStopTime { value: Option<String> },

    #[error(transparent)]
    Sheet(#[from] SheetError),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
