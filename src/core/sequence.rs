//! Tile sequence generation.
//!
//! Each round's sequence is a Fisher-Yates shuffle of the unlocked tile
//! range, so every unlocked tile appears exactly once in random order.

use rand::Rng;
use thiserror::Error;

/// Errors from sequence generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid tile count {tile_count}: must be between 1 and {max_tiles}")]
    InvalidTileCount { tile_count: usize, max_tiles: usize },
}

/// Generate a round's tile sequence.
///
/// Produces a uniformly-random ordering of the indices `[0, tile_count)`
/// via a Fisher-Yates shuffle. Every unlocked tile appears exactly once,
/// so each round exercises the whole active board.
///
/// Fails with [`SequenceError::InvalidTileCount`] when `tile_count` is
/// zero or exceeds `max_tiles`.
///
/// # Example
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use recall::generate_sequence;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let sequence = generate_sequence(&mut rng, 4, 10).unwrap();
///
/// assert_eq!(sequence.len(), 4);
/// let mut sorted = sequence.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, vec![0, 1, 2, 3]);
/// ```
pub fn generate_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    tile_count: usize,
    max_tiles: usize,
) -> Result<Vec<usize>, SequenceError> {
    if tile_count == 0 || tile_count > max_tiles {
        return Err(SequenceError::InvalidTileCount {
            tile_count,
            max_tiles,
        });
    }

    let mut tiles: Vec<usize> = (0..tile_count).collect();
    for i in (1..tiles.len()).rev() {
        let j = rng.gen_range(0..=i);
        tiles.swap(i, j);
    }
    Ok(tiles)
}
