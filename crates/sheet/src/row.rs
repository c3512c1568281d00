//! Sparse cell model and dense row reconstruction.

/// A positionally dense row. `None` marks a position the source document
/// omitted (empty or unchanged cell).
pub type Row = Vec<Option<String>>;

/// One `<Cell>` as it appears in the source: an optional explicit 1-based
/// position and an optional text payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCell {
    pub index: Option<usize>,
    pub text: Option<String>,
}

impl RawCell {
    /// A cell with no explicit index carrying the given text.
    #[must_use]
    pub fn text<S: Into<String>>(text: S) -> Self {
        RawCell {
            index: None,
            text: Some(text.into()),
        }
    }

    /// A cell with an explicit 1-based index carrying the given text.
    #[must_use]
    pub fn at<S: Into<String>>(index: usize, text: S) -> Self {
        RawCell {
            index: Some(index),
            text: Some(text.into()),
        }
    }
}

/// Reconstruct a dense row from one row element's sparse cells.
///
/// A running position counter starts at 1. A cell whose explicit index is
/// ahead of the counter first inserts `None` placeholders for the skipped
/// positions; a cell whose index is at or behind the counter is taken as the
/// next sequential cell (the output is never reordered). The counter advances
/// by one for every cell, indexed or not.
#[must_use]
pub fn densify(cells: Vec<RawCell>) -> Row {
    let mut row = Row::with_capacity(cells.len());
    let mut position = 1usize;

    for cell in cells {
        if let Some(index) = cell.index {
            while position < index {
                row.push(None);
                position += 1;
            }
        }
        row.push(cell.text);
        position += 1;
    }

    row
}
