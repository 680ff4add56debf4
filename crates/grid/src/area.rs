//! Latitude-band area weights.

use ndarray::Array2;

use crate::spec::GridSpec;

/// Relative surface area of each of `n` equal latitude bands spanning
/// -90° to +90°, ordered south to north.
///
/// Band `i` covers `[180·i/n − 90, 180·(i+1)/n − 90]` degrees; its weight is
/// the difference of the sines of its edges divided by `sin(180°/n)`, which
/// makes the equatorial bands weigh ≈ 1. The divisor cancels in any
/// normalised weighted mean.
///
/// `n == 0` yields an empty vector.
pub fn band_weights(n: usize) -> Vec<f64> {
    let band = 180.0 / n as f64;
    let norm = band.to_radians().sin();
    (0..n)
        .map(|i| {
            let south = (band * i as f64 - 90.0).to_radians().sin();
            let north = (band * (i + 1) as f64 - 90.0).to_radians().sin();
            (north - south) / norm
        })
        .collect()
}

/// `(lat, lon)` area weights for `grid`: every longitude of a latitude band
/// carries that band's [`band_weights`] value.
pub fn area_weights(grid: &GridSpec) -> Array2<f64> {
    let bands = band_weights(grid.n_lat());
    Array2::from_shape_fn((grid.n_lat(), grid.n_lon()), |(i, _)| bands[i])
}
