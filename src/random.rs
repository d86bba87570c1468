//! Balanced-pair sequence generation for randomly constructed boards.
//!
//! Tiles are cleared in matching pairs, so every kind a generated board uses
//! must occur an even number of times across the whole board.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::point::TypeCode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RandomError {
    #[error("cannot balance {kinds} tile kinds across {total} cells")]
    UnreachableBalance { kinds: usize, total: usize },

    #[error("sequence of {len} cells does not fill a {rows}x{cols} board")]
    ShapeMismatch { len: usize, rows: usize, cols: usize },
}

/// Generates a shuffled sequence of `total` type codes drawn from
/// `1..=kinds`, where every kind occurs at least once and every kind's
/// occurrence count is even.
///
/// Fails when no such assignment exists: `total` odd or zero, `kinds` zero,
/// or fewer cells than one pair per kind.
pub fn balanced_sequence_with<R: Rng + ?Sized>(
    rng: &mut R,
    kinds: usize,
    total: usize,
) -> Result<Vec<TypeCode>, RandomError> {
    if kinds == 0 || total == 0 || total % 2 != 0 || total < 2 * kinds {
        return Err(RandomError::UnreachableBalance { kinds, total });
    }

    // One pair per kind, then spread the remaining pairs at random.
    let mut seq = Vec::with_capacity(total);
    for kind in 1..=kinds {
        seq.push(kind as TypeCode);
        seq.push(kind as TypeCode);
    }
    for _ in 0..(total / 2 - kinds) {
        let kind = rng.gen_range(1..=kinds);
        seq.push(kind as TypeCode);
        seq.push(kind as TypeCode);
    }

    seq.shuffle(rng);
    Ok(seq)
}

/// [`balanced_sequence_with`] using the thread-local generator.
pub fn balanced_sequence(kinds: usize, total: usize) -> Result<Vec<TypeCode>, RandomError> {
    balanced_sequence_with(&mut rand::thread_rng(), kinds, total)
}

/// Reshapes a flat sequence into a row-major `rows x cols` matrix.
pub fn arrange(
    seq: Vec<TypeCode>,
    rows: usize,
    cols: usize,
) -> Result<Vec<Vec<TypeCode>>, RandomError> {
    if rows == 0 || cols == 0 || seq.len() != rows * cols {
        return Err(RandomError::ShapeMismatch {
            len: seq.len(),
            rows,
            cols,
        });
    }
    Ok(seq.chunks_exact(cols).map(|row| row.to_vec()).collect())
}
