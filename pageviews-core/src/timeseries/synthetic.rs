//! Synthetic share counts.
//!
//! There is no real share data source: shares are `floor(views / 10)` plus a
//! uniform integer in `[0, 10)`. The noise comes from a generator seeded at the
//! start of every derivation, so the same seed and row count always reproduce
//! the same columns. Page A's noise is drawn for all rows before page B's, and
//! draws are positional (one per row, whether or not that row has views).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::MergedSeries;

/// Exclusive upper bound of the per-row noise.
pub const SHARE_NOISE_BOUND: u64 = 10;

/// Draw `n` noise values in `[0, SHARE_NOISE_BOUND)`.
pub fn share_noise<R: Rng>(rng: &mut R, n: usize) -> Vec<u64> {
    (0..n).map(|_| rng.random_range(0..SHARE_NOISE_BOUND)).collect()
}

/// Synthetic share count for one day.
#[must_use]
pub const fn synthetic_share(views: u64, noise: u64) -> u64 {
    views / 10 + noise
}

/// Fill both share columns of `merged` using a generator seeded with `seed`.
///
/// Rows whose views are absent keep an absent share but still consume a draw.
#[must_use]
pub fn derive_shares(merged: MergedSeries, seed: u64) -> MergedSeries {
    let mut rng = StdRng::seed_from_u64(seed);
    let (title_a, title_b, rows) = merged.into_parts();
    let noise_a = share_noise(&mut rng, rows.len());
    let noise_b = share_noise(&mut rng, rows.len());

    let rows = rows
        .into_iter()
        .zip(noise_a)
        .zip(noise_b)
        .map(|((mut row, na), nb)| {
            row.shares_a = row.views_a.map(|v| synthetic_share(v, na));
            row.shares_b = row.views_b.map(|v| synthetic_share(v, nb));
            row
        })
        .collect();

    MergedSeries::new(title_a, title_b, rows)
}
