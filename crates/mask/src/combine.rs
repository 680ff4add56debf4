//! Open-water fraction and invalid-ocean override.

use ndarray::{Array2, Array3, Zip};

/// Sea-surface temperatures with a magnitude above this are invalid.
pub const SST_VALID_LIMIT: f64 = 500.0;

/// Returns `true` if a sea-surface temperature is missing: NaN or outside
/// `±`[`SST_VALID_LIMIT`] (which includes the fill sentinel).
pub fn is_invalid_sst(value: f64) -> bool {
    value.is_nan() || value.abs() > SST_VALID_LIMIT
}

/// Open-water fraction `(1 − sea_ice) × ocean` for every timestep.
///
/// Both inputs must be normalized fractions; `ocean` is broadcast over time.
pub fn open_water_fraction(sea_ice: &Array3<f64>, ocean: &Array2<f64>) -> Array3<f64> {
    let mut mask = sea_ice.mapv(|c| 1.0 - c);
    mask *= ocean;
    mask
}

/// Force the mask to 0 wherever `tos` is invalid, so those cells take the
/// air temperature. Returns the number of cells zeroed.
pub fn zero_invalid_ocean(mask: &mut Array3<f64>, tos: &Array3<f64>) -> usize {
    let mut n = 0;
    Zip::from(mask).and(tos).for_each(|m, &t| {
        if is_invalid_sst(t) {
            *m = 0.0;
            n += 1;
        }
    });
    n
}
