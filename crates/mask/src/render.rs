//! Text rendering of a mask slice for trace logs.

use ndarray::ArrayView2;

const SHADES: &[u8] = b".123456789#";
const ROWS: usize = 25;
const COLS: usize = 50;

/// Render one `(lat, lon)` mask slice as roughly 25 × 50 characters, north
/// at the top.
///
/// Each character is `.123456789#` indexed by `10 · value / max`, so `#`
/// marks the largest open-water fraction in the slice and `.` no open water.
pub fn render_mask_ascii(mask: ArrayView2<'_, f64>) -> String {
    let (ny, nx) = mask.dim();
    let max = mask
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let row_step = (ny / ROWS).max(1);
    let col_step = (nx / COLS).max(1);

    let mut out = String::new();
    for i in (1..ny).rev().step_by(row_step) {
        for j in (0..nx).step_by(col_step) {
            let v = mask[[i, j]];
            let idx = if max > 0.0 && v.is_finite() {
                ((10.0 * v / max) as usize).min(SHADES.len() - 1)
            } else {
                0
            };
            out.push(SHADES[idx] as char);
        }
        out.push('\n');
    }
    out
}

/// Render where a field has data: `#` for a present value, `.` where
/// `is_missing` holds. Same layout as [`render_mask_ascii`].
pub fn render_presence_ascii(
    values: ArrayView2<'_, f64>,
    is_missing: impl Fn(f64) -> bool,
) -> String {
    let present = values.mapv(|v| if is_missing(v) { 0.0 } else { 1.0 });
    render_mask_ascii(present.view())
}
