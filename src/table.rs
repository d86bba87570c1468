//! The addressable grid aggregate: dimensions, bounds-checked access and
//! mutation, and a tab-separated debug rendering.

use std::fmt;

use crate::point::{Point, TypeCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("point ({row}, {col}) is out of boundary ({rows}, {cols})")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("source matrix is empty")]
    EmptyMatrix,

    #[error("source matrix is ragged: row {row} has {got} cells, expected {expected}")]
    RaggedMatrix {
        row: usize,
        got: usize,
        expected: usize,
    },
}

/// A rectangular board of [`Point`]s, indexed `[row][col]`.
///
/// The shape is fixed at construction; only cell type codes may change
/// afterwards, and only through [`Table::set_empty`]. Every access goes
/// through the single bounds gate in [`Table::point`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Point>>,
}

impl Table {
    /// Builds a table whose dimensions and cell codes mirror `matrix` exactly.
    ///
    /// The matrix must be non-empty and rectangular; anything else is
    /// rejected rather than truncated.
    pub fn from_matrix(matrix: Vec<Vec<TypeCode>>) -> Result<Self, GridError> {
        let rows = matrix.len();
        let Some(cols) = matrix.first().map(|r| r.len()) else {
            return Err(GridError::EmptyMatrix);
        };
        if cols == 0 {
            return Err(GridError::EmptyMatrix);
        }
        for (row, line) in matrix.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::RaggedMatrix {
                    row,
                    got: line.len(),
                    expected: cols,
                });
            }
        }

        let cells = matrix
            .into_iter()
            .enumerate()
            .map(|(r, line)| {
                line.into_iter()
                    .enumerate()
                    .map(|(c, code)| Point::new(r, c, code))
                    .collect()
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the point at `(row, col)`, or `OutOfBounds` identifying both
    /// the requested coordinates and the valid range.
    pub fn point(&self, row: usize, col: usize) -> Result<&Point, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.cells[row][col])
    }

    /// Overwrites the type code at `(row, col)` with the EMPTY sentinel.
    ///
    /// Goes through the same bounds gate as [`Table::point`]; idempotent on
    /// already-empty cells.
    pub fn set_empty(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        // Bounds-check through the read gate so the two paths cannot drift.
        self.point(row, col)?;
        self.cells[row][col].mark_empty();
        Ok(())
    }

    /// Tab-separated text form, one line per row, trailing newline.
    /// Diagnostics only.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.cells {
            let mut first = true;
            for point in line {
                if !first {
                    out.push('\t');
                }
                out.push_str(&point.type_code().to_string());
                first = false;
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::EMPTY;

    fn sample() -> Table {
        Table::from_matrix(vec![vec![1, 2], vec![3, 4]]).expect("rectangular")
    }

    #[test]
    fn from_matrix_mirrors_source() {
        let t = sample();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cols(), 2);
        for (r, row) in [[1, 2], [3, 4]].iter().enumerate() {
            for (c, &code) in row.iter().enumerate() {
                let p = t.point(r, c).expect("in bounds");
                assert_eq!(p.type_code(), code);
                assert_eq!((p.row(), p.col()), (r, c));
            }
        }
    }

    #[test]
    fn from_matrix_rejects_empty() {
        assert_eq!(Table::from_matrix(vec![]), Err(GridError::EmptyMatrix));
        assert_eq!(
            Table::from_matrix(vec![vec![], vec![]]),
            Err(GridError::EmptyMatrix)
        );
    }

    #[test]
    fn from_matrix_rejects_ragged() {
        let err = Table::from_matrix(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedMatrix {
                row: 1,
                got: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn point_out_of_bounds_reports_range() {
        let t = sample();
        let err = t.point(2, 0).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                row: 2,
                col: 0,
                rows: 2,
                cols: 2
            }
        );
        assert!(t.point(0, 2).is_err());
        assert!(t.point(0, 1).is_ok());
    }

    #[test]
    fn set_empty_rewrites_only_the_target_cell() {
        let mut t = sample();
        t.set_empty(0, 0).expect("in bounds");
        assert_eq!(t.point(0, 0).unwrap().type_code(), EMPTY);
        assert_eq!(t.point(0, 1).unwrap().type_code(), 2);

        // Idempotent.
        t.set_empty(0, 0).expect("in bounds");
        assert_eq!(t.point(0, 0).unwrap().type_code(), EMPTY);
    }

    #[test]
    fn set_empty_propagates_out_of_bounds() {
        let mut t = sample();
        assert!(matches!(
            t.set_empty(5, 5),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn render_is_tab_separated_with_trailing_newline() {
        let t = sample();
        assert_eq!(t.render(), "1\t2\n3\t4\n");
        assert_eq!(t.to_string(), t.render());
    }
}
