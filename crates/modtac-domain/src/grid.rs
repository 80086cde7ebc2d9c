//! Column count for the gallery grid.
//!
//! Prefers an exact fill, then the fewest blank cells, then fewer rows and a
//! near-square shape. The weights are visual tuning and can be adjusted.

const EMPTY_CELL_WEIGHT: f64 = 10.0;
const ROW_WEIGHT: f64 = 0.6;
const SQUARE_BIAS_WEIGHT: f64 = 0.35;
const EXACT_FILL_BONUS: f64 = -2.0;

/// Score of laying out `n` items in `cols` columns; lower is better.
pub fn column_score(n: usize, cols: usize) -> f64 {
    let rows = n.div_ceil(cols);
    let empty = rows * cols - n;
    let remainder = n % cols;
    let square_bias = (rows as f64 - cols as f64).abs() * SQUARE_BIAS_WEIGHT;
    let exact = if remainder == 0 { EXACT_FILL_BONUS } else { 0.0 };

    empty as f64 * EMPTY_CELL_WEIGHT + rows as f64 * ROW_WEIGHT + square_bias + exact
}

/// Picks the best column count in `[min_cols, max(min_cols, max_cols)]`.
///
/// Ties keep the smallest candidate.
pub fn pick_columns(n: usize, min_cols: usize, max_cols: usize) -> usize {
    if n == 0 || min_cols == 0 {
        return min_cols;
    }
    let hi = max_cols.max(min_cols);

    let mut best = min_cols;
    let mut best_score = f64::INFINITY;
    for cols in min_cols..=hi {
        let score = column_score(n, cols);
        if score < best_score {
            best_score = score;
            best = cols;
        }
    }
    best
}

/// Upper column bound for a grid of the given width.
pub fn max_columns_for_width(
    available_width: f64,
    min_tile_width: f64,
    min_cols: usize,
    hard_cap: usize,
) -> usize {
    let fit = if available_width.is_finite() && min_tile_width > 0.0 {
        (available_width / min_tile_width).floor().max(0.0) as usize
    } else {
        0
    };
    fit.min(hard_cap).max(min_cols)
}
