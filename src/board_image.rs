//! Screenshot handling: crop the playable board out of a capture, slice it
//! into per-cell sub-images, and classify each sub-image to a type code.
//!
//! Classification is unsupervised: visually identical cells get the same
//! code, assigned 1, 2, ... in first-seen order. The caller can mark cells
//! known to be blank up front; those bypass classification entirely, since
//! blank cells are often visually ambiguous in real captures.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};
use serde::Deserialize;

use crate::point::{EMPTY, TypeCode};

/// Side length of the thumbnail each sub-image is reduced to before
/// signature comparison.
const SIGNATURE_SIZE: u32 = 8;
/// Bits of color kept per channel in the signature. Absorbs capture noise
/// while keeping distinct tile art apart.
const SIGNATURE_DEPTH: u32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum ImageBoardError {
    #[error("failed to read board image: {0}")]
    Decode(#[from] image::ImageError),

    #[error(
        "rectangle ({min_x}, {min_y})-({max_x}, {max_y}) does not fit a {width}x{height} image"
    )]
    BadRectangle {
        min_x: u32,
        min_y: u32,
        max_x: u32,
        max_y: u32,
        width: u32,
        height: u32,
    },

    #[error("a {rows}x{cols} cell grid does not fit a {width}x{height} board")]
    BadCellCount {
        rows: usize,
        cols: usize,
        width: u32,
        height: u32,
    },

    #[error("cell size {cell_width}x{cell_height} does not fit a {width}x{height} board")]
    BadCellSize {
        cell_width: u32,
        cell_height: u32,
        width: u32,
        height: u32,
    },

    #[error("sub-image matrix is empty or ragged")]
    RaggedSubImages,
}

/// Pixel rectangle isolating the playable board inside a capture.
/// `min` corners are inclusive, `max` corners exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Rect {
    pub fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    pub fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y)
    }
}

/// A cell position inside the sliced board, used for known-empty lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

/// The cropped playable region of a capture, ready for slicing.
#[derive(Debug, Clone)]
pub struct BoardImage {
    board: RgbaImage,
}

impl BoardImage {
    /// Decodes the capture at `path` and crops it to `rect`.
    pub fn load(path: &Path, rect: Rect) -> Result<Self, ImageBoardError> {
        let img = image::open(path)?;
        Self::from_rgba(img.to_rgba8(), rect)
    }

    /// Crops an already-decoded capture to `rect`.
    pub fn from_rgba(capture: RgbaImage, rect: Rect) -> Result<Self, ImageBoardError> {
        let (width, height) = capture.dimensions();
        if rect.min_x >= rect.max_x
            || rect.min_y >= rect.max_y
            || rect.max_x > width
            || rect.max_y > height
        {
            return Err(ImageBoardError::BadRectangle {
                min_x: rect.min_x,
                min_y: rect.min_y,
                max_x: rect.max_x,
                max_y: rect.max_y,
                width,
                height,
            });
        }
        let board =
            imageops::crop_imm(&capture, rect.min_x, rect.min_y, rect.width(), rect.height())
                .to_image();
        Ok(Self { board })
    }

    pub fn width(&self) -> u32 {
        self.board.width()
    }

    pub fn height(&self) -> u32 {
        self.board.height()
    }

    /// Slices the board into `rows x cols` equally-sized sub-images.
    ///
    /// Cell sizes are the integer division of the board size; remainder
    /// pixels along the right and bottom edges are ignored.
    pub fn sub_images_by_count(
        &self,
        rows: usize,
        cols: usize,
    ) -> Result<Vec<Vec<RgbaImage>>, ImageBoardError> {
        let (width, height) = self.board.dimensions();
        if rows == 0
            || cols == 0
            || (width as usize) < cols
            || (height as usize) < rows
        {
            return Err(ImageBoardError::BadCellCount {
                rows,
                cols,
                width,
                height,
            });
        }
        let cell_width = width / cols as u32;
        let cell_height = height / rows as u32;
        Ok(self.slice(rows, cols, cell_width, cell_height))
    }

    /// Slices the board into as many `cell_width x cell_height` sub-images
    /// as fit, starting from the top-left corner.
    pub fn sub_images_by_pixel(
        &self,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Vec<Vec<RgbaImage>>, ImageBoardError> {
        let (width, height) = self.board.dimensions();
        if cell_width == 0 || cell_height == 0 || cell_width > width || cell_height > height {
            return Err(ImageBoardError::BadCellSize {
                cell_width,
                cell_height,
                width,
                height,
            });
        }
        let rows = (height / cell_height) as usize;
        let cols = (width / cell_width) as usize;
        Ok(self.slice(rows, cols, cell_width, cell_height))
    }

    fn slice(
        &self,
        rows: usize,
        cols: usize,
        cell_width: u32,
        cell_height: u32,
    ) -> Vec<Vec<RgbaImage>> {
        let mut out = Vec::with_capacity(rows);
        for r in 0..rows {
            let mut line = Vec::with_capacity(cols);
            for c in 0..cols {
                let x = c as u32 * cell_width;
                let y = r as u32 * cell_height;
                line.push(imageops::crop_imm(&self.board, x, y, cell_width, cell_height).to_image());
            }
            out.push(line);
        }
        out
    }
}

/// Maps each sub-image to a type code.
///
/// Sub-images with equal perceptual signatures share a code; codes start at
/// 1 and grow in first-seen order. Cells listed in `known_empty` are
/// assigned [`EMPTY`] without being classified.
pub fn classify_sub_images(
    sub_images: &[Vec<RgbaImage>],
    known_empty: &[CellIndex],
) -> Result<Vec<Vec<TypeCode>>, ImageBoardError> {
    let Some(cols) = sub_images.first().map(|r| r.len()) else {
        return Err(ImageBoardError::RaggedSubImages);
    };
    if cols == 0 || !sub_images.iter().all(|r| r.len() == cols) {
        return Err(ImageBoardError::RaggedSubImages);
    }

    let skip: HashSet<CellIndex> = known_empty.iter().copied().collect();

    let mut codes_by_signature: HashMap<Vec<u8>, TypeCode> = HashMap::new();
    let mut next_code: TypeCode = EMPTY + 1;
    let mut matrix = Vec::with_capacity(sub_images.len());

    for (r, line) in sub_images.iter().enumerate() {
        let mut row = Vec::with_capacity(cols);
        for (c, cell) in line.iter().enumerate() {
            if skip.contains(&CellIndex { row: r, col: c }) {
                row.push(EMPTY);
                continue;
            }
            let code = *codes_by_signature
                .entry(signature(cell))
                .or_insert_with(|| {
                    let code = next_code;
                    next_code += 1;
                    code
                });
            row.push(code);
        }
        matrix.push(row);
    }

    Ok(matrix)
}

/// Perceptual signature: a fixed-size thumbnail with each channel quantized
/// to its top [`SIGNATURE_DEPTH`] bits.
fn signature(cell: &RgbaImage) -> Vec<u8> {
    let thumb = imageops::resize(cell, SIGNATURE_SIZE, SIGNATURE_SIZE, FilterType::Triangle);
    thumb
        .pixels()
        .flat_map(|px| px.0[..3].iter().map(|&v| v >> (8 - SIGNATURE_DEPTH)))
        .collect()
}
