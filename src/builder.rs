//! Board construction: one entry point, three sources.
//!
//! Every source reduces to a rectangular type-code matrix handed to
//! [`Table::from_matrix`]. Only image-derived boards are border-padded; the
//! downstream solver lets paths leave the board through empty cells beyond
//! the edge, and the ring of EMPTY cells turns that edge rule into a uniform
//! interior rule.

use std::path::PathBuf;

use crate::board_image::{BoardImage, CellIndex, ImageBoardError, Rect, classify_sub_images};
use crate::point::{EMPTY, TypeCode};
use crate::random::{self, RandomError};
use crate::table::{GridError, Table};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error(transparent)]
    Image(#[from] ImageBoardError),
}

/// Where a board comes from. Each variant carries exactly the parameters its
/// strategy needs, so an unrecognized strategy cannot exist at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    /// A matrix supplied verbatim, for deterministic and test boards.
    Explicit { matrix: Vec<Vec<TypeCode>> },

    /// A pseudo-random board over `kinds` tile kinds in which every kind
    /// occurs an even number of times.
    Random {
        kinds: usize,
        rows: usize,
        cols: usize,
    },

    /// A screenshot sliced into a known number of rows and columns.
    ImageByCount {
        path: PathBuf,
        rect: Rect,
        rows: usize,
        cols: usize,
        known_empty: Vec<CellIndex>,
    },

    /// A screenshot sliced into fixed-pixel-size cells.
    ImageByPixel {
        path: PathBuf,
        rect: Rect,
        cell_width: u32,
        cell_height: u32,
        known_empty: Vec<CellIndex>,
    },
}

/// Builds a [`Table`] from `source`.
///
/// Any failure in a delegated step aborts the whole attempt; no partially
/// built table is ever returned.
pub fn build(source: BoardSource) -> Result<Table, BuildError> {
    let matrix = match source {
        BoardSource::Explicit { matrix } => matrix,
        BoardSource::Random { kinds, rows, cols } => {
            let seq = random::balanced_sequence(kinds, rows * cols)?;
            random::arrange(seq, rows, cols)?
        }
        BoardSource::ImageByCount {
            path,
            rect,
            rows,
            cols,
            known_empty,
        } => {
            let board = BoardImage::load(&path, rect)?;
            let subs = board.sub_images_by_count(rows, cols)?;
            pad_with_border(classify_sub_images(&subs, &known_empty)?)
        }
        BoardSource::ImageByPixel {
            path,
            rect,
            cell_width,
            cell_height,
            known_empty,
        } => {
            let board = BoardImage::load(&path, rect)?;
            let subs = board.sub_images_by_pixel(cell_width, cell_height)?;
            pad_with_border(classify_sub_images(&subs, &known_empty)?)
        }
    };
    Ok(Table::from_matrix(matrix)?)
}

/// Builds from an already-cropped board image, slicing by cell count.
/// Exposed for callers that hold pixels rather than a file.
pub fn build_from_board_image_by_count(
    board: &BoardImage,
    rows: usize,
    cols: usize,
    known_empty: &[CellIndex],
) -> Result<Table, BuildError> {
    let subs = board.sub_images_by_count(rows, cols)?;
    let matrix = pad_with_border(classify_sub_images(&subs, known_empty)?);
    Ok(Table::from_matrix(matrix)?)
}

/// Wraps `matrix` in a one-cell-thick ring of EMPTY cells, turning an
/// `R x C` matrix into `(R+2) x (C+2)`.
pub fn pad_with_border(matrix: Vec<Vec<TypeCode>>) -> Vec<Vec<TypeCode>> {
    let cols = matrix.first().map_or(0, |r| r.len());
    let mut out = Vec::with_capacity(matrix.len() + 2);
    out.push(vec![EMPTY; cols + 2]);
    for row in matrix {
        let mut line = Vec::with_capacity(row.len() + 2);
        line.push(EMPTY);
        line.extend(row);
        line.push(EMPTY);
        out.push(line);
    }
    out.push(vec![EMPTY; cols + 2]);
    out
}
