use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::DialogError;

/// Every definition-table row is exactly this wide.
pub const ROW_WIDTH: usize = 7;

/// Column holding the item (control kind) code.
pub const COL_KIND: usize = 0;
pub const COL_X: usize = 1;
pub const COL_Y: usize = 2;
pub const COL_WIDTH: usize = 3;
pub const COL_HEIGHT: usize = 4;
/// Caption, list name, or dialog title depending on the row.
pub const COL_TEXT: usize = 5;
/// Initial value on the way in, result value on the way out.
pub const COL_VALUE: usize = 6;

/// One 7-column row of a dialog definition table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row([Cell; ROW_WIDTH]);

impl Row {
    pub fn new(cells: [Cell; ROW_WIDTH]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Cell; ROW_WIDTH] {
        &self.0
    }

    /// Panics if `col >= ROW_WIDTH`; callers index with the `COL_*` constants.
    pub fn get(&self, col: usize) -> &Cell {
        &self.0[col]
    }

    pub fn set(&mut self, col: usize, value: impl Into<Cell>) {
        self.0[col] = value.into();
    }

    pub fn value(&self) -> &Cell {
        &self.0[COL_VALUE]
    }

    pub fn set_value(&mut self, value: impl Into<Cell>) {
        self.0[COL_VALUE] = value.into();
    }
}

/// A dense table of [`Row`]s: what `DIALOG.BOX` consumes and, on confirmation, returns.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefinitionTable {
    rows: Vec<Row>,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Converts a raw 2D host array into a table, rejecting any row that is not exactly
    /// [`ROW_WIDTH`] cells wide.
    pub fn from_grid(grid: Vec<Vec<Cell>>) -> Result<Self, DialogError> {
        let mut rows = Vec::with_capacity(grid.len());
        for (index, raw) in grid.into_iter().enumerate() {
            let width = raw.len();
            let cells: [Cell; ROW_WIDTH] =
                raw.try_into().map_err(|_| DialogError::MalformedRow {
                    row: index,
                    reason: format!("expected {ROW_WIDTH} columns, found {width}"),
                })?;
            rows.push(Row(cells));
        }
        Ok(Self { rows })
    }

    pub fn to_grid(&self) -> Vec<Vec<Cell>> {
        self.rows.iter().map(|row| row.0.to_vec()).collect()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        ROW_WIDTH
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Row> for DefinitionTable {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_grid_rejects_ragged_rows() {
        let grid = vec![vec![Cell::Empty; ROW_WIDTH], vec![Cell::Empty; 5]];
        let err = DefinitionTable::from_grid(grid).unwrap_err();
        assert!(matches!(err, DialogError::MalformedRow { row: 1, .. }));
    }

    #[test]
    fn grid_conversion_keeps_cells_in_place() {
        let mut row = Row::default();
        row.set(COL_KIND, 5);
        row.set(COL_TEXT, "Name:");
        let table = DefinitionTable::from_rows(vec![Row::default(), row.clone()]);

        let back = DefinitionTable::from_grid(table.to_grid()).unwrap();
        assert_eq!(back.height(), 2);
        assert_eq!(back.row(1), Some(&row));
    }
}
