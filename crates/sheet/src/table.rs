use crate::row::Row;

/// An ordered sequence of dense rows. Row 0 is the header row; it defines
/// column semantics for every data row by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Table { rows }
    }

    /// All rows in file order, header first.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The header row, if the table has any rows at all.
    #[must_use]
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Data rows (everything after the header).
    #[must_use]
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of the first header cell exactly equal to `name`.
    #[must_use]
    pub fn header_position(&self, name: &str) -> Option<usize> {
        self.header()?
            .iter()
            .position(|cell| cell.as_deref() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(vec![
            vec![Some("#".into()), None, Some("Tempo[s]".into())],
            vec![Some("1".into()), Some("x".into()), Some("0,5".into())],
        ])
    }

    #[test]
    fn header_position_matches_exactly() {
        let t = table();
        assert_eq!(t.header_position("#"), Some(0));
        assert_eq!(t.header_position("Tempo[s]"), Some(2));
        assert_eq!(t.header_position("Tempo"), None);
    }

    #[test]
    fn data_rows_skip_the_header() {
        let t = table();
        assert_eq!(t.data_rows().len(), 1);
        assert!(Table::default().data_rows().is_empty());
    }
}
