//! Scoring module - classic line clear scoring
//!
//! Points depend only on how many rows a single solidify clears:
//! 1 → 40, 2 → 100, 3 → 300, 4 or more → 1200. There is no level multiplier,
//! no drop bonus and no combo.

use crate::types::LINE_SCORES;

/// Points awarded for clearing `lines` rows in one solidify
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}
