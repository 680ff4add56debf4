//! Input bundle for one blend-and-mask run.

use blendmask_grid::{GriddedField, SurfaceField};

/// Model fields plus the optional observational reference.
///
/// `tas`, `tos` and `sic` are `(time, lat, lon)` on one grid; `land` is the
/// land-area fraction (percent or fraction) on the same grid. The record is
/// monthly and starts in January of `start_year`.
#[derive(Debug, Clone)]
pub struct BlendMaskInputs {
    pub(crate) tas: GriddedField,
    pub(crate) tos: GriddedField,
    pub(crate) sic: GriddedField,
    pub(crate) land: SurfaceField,
    pub(crate) reference: Option<GriddedField>,
    pub(crate) start_year: i32,
}

impl BlendMaskInputs {
    /// Bundle the model fields.
    pub fn new(
        tas: GriddedField,
        tos: GriddedField,
        sic: GriddedField,
        land: SurfaceField,
        start_year: i32,
    ) -> Self {
        Self {
            tas,
            tos,
            sic,
            land,
            reference: None,
            start_year,
        }
    }

    /// Attach a reference temperature-anomaly dataset whose longitudes start
    /// at −180° (it is rotated onto the model's 0–360° axis).
    pub fn with_reference(mut self, reference: GriddedField) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Returns the air-temperature field.
    pub fn tas(&self) -> &GriddedField {
        &self.tas
    }

    /// Returns the reference dataset, if any.
    pub fn reference(&self) -> Option<&GriddedField> {
        self.reference.as_ref()
    }

    /// Returns the first calendar year of the record.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }
}
