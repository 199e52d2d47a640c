//! Display names and colors.

use std::collections::HashSet;

use tracing::trace;

use crate::model::Color;
use crate::random::RandomSource;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Length of names produced by [`gen_name`].
pub const NAME_LEN: usize = 3;

/// Redraws attempted before [`gen_colors`] steps through the color space.
pub const MAX_COLOR_REDRAWS: usize = 64;

/// A three-letter lowercase name. Names are not deduplicated across calls.
pub fn gen_name(rng: &mut impl RandomSource) -> String {
    (0..NAME_LEN)
        .map(|_| char::from(ALPHABET[rng.next_int(ALPHABET.len())]))
        .collect()
}

/// A color built from three independent uniform bytes.
pub fn gen_color(rng: &mut impl RandomSource) -> Color {
    let r = rng.next_int(256) as u8;
    let g = rng.next_int(256) as u8;
    let b = rng.next_int(256) as u8;
    Color::from_rgb(r, g, b)
}

/// `n` pairwise-distinct colors.
///
/// Collisions are redrawn up to [`MAX_COLOR_REDRAWS`] times; after that the
/// last draw is stepped upward through the 24-bit space until it is fresh, so
/// the call terminates for any `n <= 2^24` regardless of the source.
pub fn gen_colors(n: usize, rng: &mut impl RandomSource) -> Vec<Color> {
    let mut seen = HashSet::with_capacity(n);
    let mut colors = Vec::with_capacity(n);

    for _ in 0..n {
        let mut color = gen_color(rng);
        let mut redraws = 0;
        while seen.contains(&color) && redraws < MAX_COLOR_REDRAWS {
            color = gen_color(rng);
            redraws += 1;
        }
        if seen.contains(&color) {
            trace!(color = %color, "color_redraws_exhausted");
            while seen.contains(&color) {
                color = color.next();
            }
        }
        seen.insert(color);
        colors.push(color);
    }

    colors
}
