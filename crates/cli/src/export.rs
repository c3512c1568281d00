//! Tabular export of batch results.
//!
//! Output columns: `Cognome, Nome, Sessione, Musica, T_start, T_stop`
//! followed by the batch's shared measurement headers, one row per
//! successful trial. Absent measurement values stay blank, never `0`.

use anyhow::{Context, Result};
use ojdata_extract::{BatchResult, TrialResult};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Fixed metadata columns preceding the measurement block.
const META_HEADERS: [&str; 6] = ["Cognome", "Nome", "Sessione", "Musica", "T_start", "T_stop"];

fn header_row(batch: &BatchResult) -> Vec<String> {
    META_HEADERS
        .iter()
        .map(ToString::to_string)
        .chain(batch.headers().iter().cloned())
        .collect()
}

pub fn write_xlsx(batch: &BatchResult, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in header_row(batch).iter().enumerate() {
        worksheet.write_string(0, col as u16, name)?;
    }

    for (i, trial) in batch.trials.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet.write_string(row, 0, &trial.metadata.surname)?;
        worksheet.write_string(row, 1, &trial.metadata.given_name)?;
        worksheet.write_string(row, 2, &trial.metadata.session)?;
        worksheet.write_string(row, 3, &trial.metadata.music)?;
        worksheet.write_number(row, 4, trial.window.start)?;
        worksheet.write_number(row, 5, trial.window.stop)?;
        for (offset, value) in trial.measurement_values.iter().enumerate() {
            if let Some(v) = value {
                worksheet.write_number(row, (META_HEADERS.len() + offset) as u16, *v)?;
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn write_csv(batch: &BatchResult, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    writer.write_record(header_row(batch))?;
    for trial in &batch.trials {
        writer.write_record(record(trial))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json(batch: &BatchResult, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &batch.trials)?;
    Ok(())
}

fn record(trial: &TrialResult) -> Vec<String> {
    let mut fields = vec![
        trial.metadata.surname.clone(),
        trial.metadata.given_name.clone(),
        trial.metadata.session.clone(),
        trial.metadata.music.clone(),
        trial.window.start.to_string(),
        trial.window.stop.to_string(),
    ];
    fields.extend(
        trial
            .measurement_values
            .iter()
            .map(|value| value.map(|v| v.to_string()).unwrap_or_default()),
    );
    fields
}
