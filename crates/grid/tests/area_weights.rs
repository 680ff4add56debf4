//! Properties of the latitude-band area weights.

use approx::assert_relative_eq;
use blendmask_grid::{GridSpec, area_weights, band_weights};

#[test]
fn weights_symmetric_about_equator() {
    for n in [2, 3, 4, 7, 36, 72, 180] {
        let w = band_weights(n);
        for i in 0..n {
            assert_relative_eq!(w[i], w[n - 1 - i], epsilon = 1e-10);
        }
    }
}

#[test]
fn weights_non_negative() {
    for n in [2, 5, 36, 145] {
        assert!(band_weights(n).iter().all(|&v| v >= 0.0), "n = {n}");
    }
}

#[test]
fn weights_match_band_area_fractions() {
    // The area fraction of a band is (sin(north) - sin(south)) / 2, so
    // normalised weights must reproduce it exactly.
    let n = 36;
    let w = band_weights(n);
    let total: f64 = w.iter().sum();
    for (i, wi) in w.iter().enumerate() {
        let south = (5.0 * i as f64 - 90.0).to_radians().sin();
        let north = (5.0 * (i + 1) as f64 - 90.0).to_radians().sin();
        assert_relative_eq!(wi / total, (north - south) / 2.0, epsilon = 1e-12);
    }
}

#[test]
fn weights_increase_towards_equator() {
    let w = band_weights(18);
    for i in 0..8 {
        assert!(w[i] < w[i + 1]);
    }
}

#[test]
fn broadcast_total_proportional_to_longitudes() {
    let g = GridSpec::regular(4, 10).unwrap();
    let total: f64 = area_weights(&g).sum();
    let band_total: f64 = band_weights(4).iter().sum();
    assert_relative_eq!(total, 10.0 * band_total, epsilon = 1e-12);
}
