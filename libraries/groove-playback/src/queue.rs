//! Queue derivation
//!
//! Pure functions computing which catalog index plays next and which
//! tracks are listed as upcoming. Kept free of controller state so the
//! shuffle and wrap rules can be tested in isolation.

use crate::types::PlaybackSnapshot;
use groove_core::{Catalog, Track};
use rand::Rng;

/// Index `next` moves to
///
/// With shuffle on, draws uniformly from `[0, catalog_len)` and redraws
/// until the draw differs from the current index (a single-track catalog
/// accepts the first draw). Otherwise advances by one, wrapping to 0.
///
/// `catalog_len` must be non-zero.
pub fn next_index<R: Rng + ?Sized>(
    state: &PlaybackSnapshot,
    catalog_len: usize,
    rng: &mut R,
) -> usize {
    let current = state.current_index;

    if state.shuffle_enabled {
        loop {
            let candidate = rng.gen_range(0..catalog_len);
            if catalog_len <= 1 || candidate != current {
                return candidate;
            }
        }
    }

    (current + 1) % catalog_len
}

/// Index `previous` moves to
///
/// Always linear; shuffle is never consulted. Wraps to the last index
/// below zero.
pub fn previous_index(current: usize, catalog_len: usize) -> usize {
    if current == 0 {
        catalog_len - 1
    } else {
        current - 1
    }
}

/// Tracks strictly after `current_index`, in catalog order
///
/// Does not reflect shuffle: the listing is always the linear remainder.
pub fn upcoming(catalog: &Catalog, current_index: usize) -> &[Track] {
    catalog.tracks().get(current_index + 1..).unwrap_or(&[])
}
