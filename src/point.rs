//! Cell data model shared by every board construction path.

/// Integer identifying a tile kind, or [`EMPTY`] for "no tile here".
pub type TypeCode = i32;

/// Sentinel type code for a cell holding no matchable tile: already cleared,
/// border padding, or a designated blank region of a screenshot.
pub const EMPTY: TypeCode = 0;

/// One cell of a board: a fixed position plus a rewritable type code.
///
/// The position never changes after construction; only the type code may be
/// rewritten, and only through [`Table::set_empty`](crate::table::Table::set_empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    row: usize,
    col: usize,
    type_code: TypeCode,
}

impl Point {
    pub fn new(row: usize, col: usize, type_code: TypeCode) -> Self {
        Self {
            row,
            col,
            type_code,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn type_code(&self) -> TypeCode {
        self.type_code
    }

    pub fn is_empty(&self) -> bool {
        self.type_code == EMPTY
    }

    pub(crate) fn mark_empty(&mut self) {
        self.type_code = EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_position_and_code_as_given() {
        let p = Point::new(3, 7, 42);
        assert_eq!(p.row(), 3);
        assert_eq!(p.col(), 7);
        assert_eq!(p.type_code(), 42);
        assert!(!p.is_empty());
    }

    #[test]
    fn mark_empty_only_touches_the_code() {
        let mut p = Point::new(1, 2, 5);
        p.mark_empty();
        assert_eq!(p.type_code(), EMPTY);
        assert!(p.is_empty());
        assert_eq!((p.row(), p.col()), (1, 2));
    }
}
