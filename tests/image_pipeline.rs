//! End-to-end screenshot path: write a synthetic capture to disk, then build
//! through the same file-loading strategy the CLI uses.

use std::path::PathBuf;

use image::{Rgba, RgbaImage};
use link_board::{BoardSource, CellIndex, EMPTY, Rect, build};

/// A 3x2 board of solid-color tiles inside a capture with a 4px margin.
/// Layout (tile letters): A B A / B A B.
fn write_capture(name: &str) -> PathBuf {
    let margin = 4u32;
    let cell = 8u32;
    let (rows, cols) = (2u32, 3u32);
    let capture = RgbaImage::from_fn(
        margin * 2 + cols * cell,
        margin * 2 + rows * cell,
        |x, y| {
            if x < margin || y < margin || x >= margin + cols * cell || y >= margin + rows * cell {
                return Rgba([0, 0, 0, 255]);
            }
            let r = (y - margin) / cell;
            let c = (x - margin) / cell;
            if (r + c) % 2 == 0 {
                Rgba([230, 60, 60, 255])
            } else {
                Rgba([60, 60, 230, 255])
            }
        },
    );

    let path = std::env::temp_dir().join(name);
    capture.save(&path).expect("write capture");
    path
}

fn board_rect() -> Rect {
    Rect {
        min_x: 4,
        min_y: 4,
        max_x: 4 + 3 * 8,
        max_y: 4 + 2 * 8,
    }
}

#[test]
fn image_by_count_pads_and_classifies() {
    let path = write_capture("link_board_by_count.png");
    let table = build(BoardSource::ImageByCount {
        path,
        rect: board_rect(),
        rows: 2,
        cols: 3,
        known_empty: vec![CellIndex { row: 0, col: 0 }],
    })
    .expect("pipeline succeeds");

    // Inner 2x3 padded to 4x5.
    assert_eq!((table.rows(), table.cols()), (4, 5));

    // Border ring is all EMPTY.
    for c in 0..5 {
        assert_eq!(table.point(0, c).unwrap().type_code(), EMPTY);
        assert_eq!(table.point(3, c).unwrap().type_code(), EMPTY);
    }
    for r in 0..4 {
        assert_eq!(table.point(r, 0).unwrap().type_code(), EMPTY);
        assert_eq!(table.point(r, 4).unwrap().type_code(), EMPTY);
    }

    // Known-empty inner (0,0) is EMPTY at padded (1,1) despite being a
    // perfectly ordinary red tile in the capture.
    assert_eq!(table.point(1, 1).unwrap().type_code(), EMPTY);

    // Remaining checkerboard classifies into exactly two codes.
    let a = table.point(1, 3).unwrap().type_code(); // inner (0,2), red
    let b = table.point(1, 2).unwrap().type_code(); // inner (0,1), blue
    assert_ne!(a, EMPTY);
    assert_ne!(b, EMPTY);
    assert_ne!(a, b);
    assert_eq!(table.point(2, 2).unwrap().type_code(), a); // inner (1,1), red
    assert_eq!(table.point(2, 1).unwrap().type_code(), b); // inner (1,0), blue
    assert_eq!(table.point(2, 3).unwrap().type_code(), b); // inner (1,2), blue
}

#[test]
fn image_by_pixel_matches_image_by_count() {
    let path = write_capture("link_board_by_pixel.png");
    let by_pixel = build(BoardSource::ImageByPixel {
        path: path.clone(),
        rect: board_rect(),
        cell_width: 8,
        cell_height: 8,
        known_empty: Vec::new(),
    })
    .expect("pipeline succeeds");

    let by_count = build(BoardSource::ImageByCount {
        path,
        rect: board_rect(),
        rows: 2,
        cols: 3,
        known_empty: Vec::new(),
    })
    .expect("pipeline succeeds");

    assert_eq!(by_pixel.render(), by_count.render());
}

#[test]
fn bad_rectangle_aborts_the_build() {
    let path = write_capture("link_board_bad_rect.png");
    let err = build(BoardSource::ImageByCount {
        path,
        rect: Rect {
            min_x: 10,
            min_y: 10,
            max_x: 10,
            max_y: 10,
        },
        rows: 2,
        cols: 3,
        known_empty: Vec::new(),
    });
    assert!(err.is_err());
}
