//! # ojdata-extract
//!
//! Turns one reconstructed OptoJump worksheet into per-trial summary
//! statistics, and aggregates trials across a batch of export files.
//!
//! A trial ends at the row whose event column contains the external STOP
//! impulse. The extractor reads the stop time from that row, keeps the data
//! rows of the trailing 15 minutes, and reduces every measurement column over
//! that window: the cumulative distance column keeps its last valid reading,
//! every other column its arithmetic mean.
//!
//! Subject identity (surname, given name, session, music condition) comes
//! from the export file's name, which follows a fixed underscore-separated
//! convention.

/// Batch aggregation with per-file error isolation.
pub mod batch;
/// Error types and result alias.
pub mod error;
/// File-name metadata parser.
pub mod filename;
/// STOP search and windowed column reduction.
pub mod trial;

pub use batch::{extract_one, process_batch, process_batch_in, BatchFailure, BatchResult};
pub use error::{ExtractError, Result};
pub use filename::{parse_filename, TrialMetadata};
pub use trial::{
    extract_trial, parse_decimal, resolve_column, ColumnRef, Resolution, TimeWindow, TrialResult,
    STOP_SENTINEL, WINDOW_SECONDS,
};
