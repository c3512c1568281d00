//! Batch aggregation over multiple export files.
//!
//! Each file runs the full pipeline as a `Result`; successes and failures
//! collect into separate sequences, so one bad file never aborts the batch.

use crate::error::Result;
use crate::trial::{extract_trial, TrialResult};
use crate::ExtractError;
use ojdata_sheet::{read_worksheet, DEFAULT_WORKSHEET};

/// One file the batch could not process.
#[derive(Debug)]
pub struct BatchFailure {
    pub filename: String,
    pub error: ExtractError,
}

/// Results accumulated over one batch run. A batch with zero successes is a
/// valid, empty result.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub trials: Vec<TrialResult>,
    /// Measurement headers of the first successful file; later files are
    /// assumed, not verified, to share the same layout.
    pub measurement_headers: Option<Vec<String>>,
    pub failures: Vec<BatchFailure>,
}

impl BatchResult {
    /// Shared measurement headers, empty when the batch had no successes.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        self.measurement_headers.as_deref().unwrap_or(&[])
    }
}

/// Full per-file pipeline: parse the named worksheet, then reduce the trial.
pub fn extract_one(bytes: &[u8], filename: &str, worksheet: &str) -> Result<TrialResult> {
    let table = read_worksheet(bytes, worksheet)?;
    extract_trial(&table, filename)
}

/// Run the extractor over `(bytes, filename)` pairs against the default
/// OptoJump worksheet.
pub fn process_batch<I, B>(files: I) -> BatchResult
where
    I: IntoIterator<Item = (B, String)>,
    B: AsRef<[u8]>,
{
    process_batch_in(files, DEFAULT_WORKSHEET)
}

/// Run the extractor over `(bytes, filename)` pairs against the named
/// worksheet, isolating failures per file.
pub fn process_batch_in<I, B>(files: I, worksheet: &str) -> BatchResult
where
    I: IntoIterator<Item = (B, String)>,
    B: AsRef<[u8]>,
{
    let mut batch = BatchResult::default();

    for (bytes, filename) in files {
        match extract_one(bytes.as_ref(), &filename, worksheet) {
            Ok(trial) => {
                if batch.measurement_headers.is_none() {
                    batch.measurement_headers = Some(trial.measurement_headers.clone());
                }
                tracing::debug!(file = %filename, "trial extracted");
                batch.trials.push(trial);
            }
            Err(error) => {
                tracing::warn!(file = %filename, %error, "file skipped");
                batch.failures.push(BatchFailure { filename, error });
            }
        }
    }

    batch
}
