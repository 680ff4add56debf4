//! Post-blend NaN repair.

use ndarray::{Array3, Zip};

/// Fill every NaN in `blended` with the value of `fallback` at the same
/// cell and step. Returns the number of cells filled.
pub fn fill_missing_from(blended: &mut Array3<f64>, fallback: &Array3<f64>) -> usize {
    let mut n = 0;
    Zip::from(blended).and(fallback).for_each(|b, &f| {
        if b.is_nan() {
            *b = f;
            n += 1;
        }
    });
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn only_nan_cells_replaced() {
        let mut blended = array![[[1.0, f64::NAN]], [[f64::NAN, 4.0]]];
        let tas = array![[[10.0, 20.0]], [[30.0, 40.0]]];
        assert_eq!(fill_missing_from(&mut blended, &tas), 2);
        assert_eq!(blended, array![[[1.0, 20.0]], [[30.0, 4.0]]]);
    }

    #[test]
    fn nan_fallback_leaves_nan() {
        let mut blended = array![[[f64::NAN]]];
        fill_missing_from(&mut blended, &array![[[f64::NAN]]]);
        assert!(blended[[0, 0, 0]].is_nan());
    }
}
