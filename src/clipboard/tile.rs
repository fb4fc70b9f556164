//! Expansion of pasted data to the extent of the target selection.

use crate::config::TilingMode;

/// Tile `data` to `target_rows` x `target_cols`.
///
/// Each axis is expanded independently, and only when the target extent is a
/// positive exact multiple of the data extent on that axis. Otherwise the axis
/// keeps its original extent: data is never cropped or partially repeated.
/// Empty data is returned unchanged.
pub fn tile<T: Clone>(data: &[Vec<T>], target_rows: usize, target_cols: usize) -> Vec<Vec<T>> {
    tile_with(data, target_rows, target_cols, TilingMode::ExactMultiple)
}

/// [`tile`] with an explicit [`TilingMode`].
pub fn tile_with<T: Clone>(
    data: &[Vec<T>],
    target_rows: usize,
    target_cols: usize,
    mode: TilingMode,
) -> Vec<Vec<T>> {
    let row_len = data.len();
    let col_len = data.first().map_or(0, Vec::len);
    if row_len == 0 || col_len == 0 {
        return data.to_vec();
    }

    let row_repeat = repeat_count(row_len, target_rows, mode);
    let col_repeat = repeat_count(col_len, target_cols, mode);

    let widened: Vec<Vec<T>> = data
        .iter()
        .map(|row| repeat_block(row, col_repeat))
        .collect();
    repeat_block(&widened, row_repeat)
}

fn repeat_block<T: Clone>(block: &[T], times: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(block.len().saturating_mul(times));
    for _ in 0..times {
        out.extend_from_slice(block);
    }
    out
}

/// How many times a block of `source` must be repeated to fill `target`.
fn repeat_count(source: usize, target: usize, mode: TilingMode) -> usize {
    match mode {
        TilingMode::ExactMultiple if target > 0 && target % source == 0 => target / source,
        TilingMode::WholeRepeats if target >= source => target / source,
        _ => 1,
    }
}
