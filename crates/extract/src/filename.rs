//! Subject and trial metadata parsed from the export file name.
//!
//! Expected shape:
//! `Surname_GivenName(_GivenName...)_Treadmill_<speed and timestamp tokens>_Session_Music[.xml]`
//! with exactly nine tokens between `Treadmill` and the session label, and
//! the music token immediately after the session label.

use crate::error::{ExtractError, Result};
use serde::Serialize;

/// Token separating subject names from the trial descriptor.
pub const MARKER_TOKEN: &str = "Treadmill";

/// Session label offset from the marker token.
const SESSION_OFFSET: usize = 9;
/// Music token offset from the marker token.
const MUSIC_OFFSET: usize = 10;

/// Immutable per-file subject and trial metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialMetadata {
    pub surname: String,
    pub given_name: String,
    pub session: String,
    pub music: String,
}

/// Parse [`TrialMetadata`] out of an export file name.
///
/// # Errors
///
/// [`ExtractError::MissingMarkerToken`] if no token equals `Treadmill`,
/// [`ExtractError::InsufficientTokens`] if fewer than 11 tokens follow it.
pub fn parse_filename(filename: &str) -> Result<TrialMetadata> {
    let stem = strip_xml_suffix(filename);
    let tokens: Vec<&str> = stem.split('_').collect();

    let marker = tokens
        .iter()
        .position(|token| *token == MARKER_TOKEN)
        .ok_or_else(|| ExtractError::MissingMarkerToken {
            filename: filename.to_string(),
        })?;

    if tokens.len() < marker + 11 {
        return Err(ExtractError::InsufficientTokens {
            filename: filename.to_string(),
        });
    }

    Ok(TrialMetadata {
        surname: tokens[0].to_string(),
        given_name: tokens[1..marker].join(" "),
        session: tokens[marker + SESSION_OFFSET].to_string(),
        music: classify_music(tokens[marker + MUSIC_OFFSET]),
    })
}

fn strip_xml_suffix(filename: &str) -> &str {
    let bytes = filename.as_bytes();
    if bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".xml") {
        // Suffix is pure ASCII, so the byte split is a char boundary.
        &filename[..filename.len() - 4]
    } else {
        filename
    }
}

/// Classify the music token: `NM*` means no music, `M*` means music, anything
/// else passes through as its own label. Any `.`-delimited suffix is dropped
/// first. Never an error.
fn classify_music(token: &str) -> String {
    let token = token.split('.').next().unwrap_or(token);
    let upper = token.to_uppercase();
    if upper.starts_with("NM") {
        "no musica".to_string()
    } else if upper.starts_with('M') {
        "musica".to_string()
    } else {
        token.to_string()
    }
}
