//! Convex land/ocean blend.

use blendmask_mask::is_invalid_sst;
use ndarray::{Array3, Zip};

/// Blend air and sea-surface temperature by open-water fraction:
/// `tas × (1 − mask) + tos × mask`, elementwise.
///
/// All three arrays must have the same shape. For finite inputs and a mask
/// in `[0, 1]` the result lies between `tas` and `tos`. A NaN `tos` yields
/// NaN even where the mask is 0; [`fill_missing_from`](crate::fill_missing_from)
/// repairs those cells afterwards.
pub fn blend_convex(tas: &Array3<f64>, tos: &Array3<f64>, mask: &Array3<f64>) -> Array3<f64> {
    Zip::from(tas)
        .and(tos)
        .and(mask)
        .map_collect(|&t, &o, &m| t * (1.0 - m) + o * m)
}

/// Replace missing sea-surface temperatures with NaN so NaN-aware
/// reductions skip them. Returns the number of values replaced.
pub fn invalidate_sst(tos: &mut Array3<f64>) -> usize {
    let mut n = 0;
    tos.mapv_inplace(|v| {
        if is_invalid_sst(v) && !v.is_nan() {
            n += 1;
            f64::NAN
        } else {
            v
        }
    });
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use blendmask_grid::FILL_VALUE;
    use ndarray::array;

    #[test]
    fn mask_endpoints_select_one_source() {
        let tas = array![[[1.0, 1.0, 1.0]]];
        let tos = array![[[3.0, 3.0, 3.0]]];
        let mask = array![[[0.0, 0.25, 1.0]]];
        let blended = blend_convex(&tas, &tos, &mask);
        assert_relative_eq!(blended[[0, 0, 0]], 1.0);
        assert_relative_eq!(blended[[0, 0, 1]], 1.5);
        assert_relative_eq!(blended[[0, 0, 2]], 3.0);
    }

    #[test]
    fn nan_tos_propagates() {
        let blended = blend_convex(
            &array![[[1.0]]],
            &array![[[f64::NAN]]],
            &array![[[0.0]]],
        );
        assert!(blended[[0, 0, 0]].is_nan());
    }

    #[test]
    fn invalid_sst_becomes_nan() {
        let mut tos = array![[[290.0, 600.0]], [[FILL_VALUE, f64::NAN]]];
        assert_eq!(invalidate_sst(&mut tos), 2);
        assert_relative_eq!(tos[[0, 0, 0]], 290.0);
        assert!(tos[[0, 0, 1]].is_nan());
        assert!(tos[[1, 0, 0]].is_nan());
        assert!(tos[[1, 0, 1]].is_nan());
    }
}
