//! The three-character blend mode.

use std::fmt;
use std::str::FromStr;

use blendmask_blend::BlendOrder;

use crate::error::PipelineError;

/// Variant of the blend-and-mask method.
///
/// Written as three characters, one per option, with `x` for "off":
///
/// | position | on  | meaning |
/// |----------|-----|---------|
/// | 1 | `m` | zero aggregation weights where the reference has no coverage |
/// | 2 | `a` | blend anomalies rather than absolute temperatures |
/// | 3 | `f` | hold the sea-ice distribution fixed |
///
/// The eight valid strings are `xxx`, `mxx`, `xax`, `max`, `xxf`, `mxf`,
/// `xaf` and `maf`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlendMode {
    mask_by_coverage: bool,
    blend_anomalies: bool,
    fixed_ice: bool,
}

impl BlendMode {
    /// Creates a mode from its three options.
    pub fn new(mask_by_coverage: bool, blend_anomalies: bool, fixed_ice: bool) -> Self {
        Self {
            mask_by_coverage,
            blend_anomalies,
            fixed_ice,
        }
    }

    /// All eight modes.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8u8).map(|bits| Self::new(bits & 4 != 0, bits & 2 != 0, bits & 1 != 0))
    }

    /// Whether aggregation weights follow the reference dataset's coverage.
    pub fn mask_by_coverage(&self) -> bool {
        self.mask_by_coverage
    }

    /// Whether anomalies are blended (baseline before blend).
    pub fn blend_anomalies(&self) -> bool {
        self.blend_anomalies
    }

    /// Whether fixed-ice mode is on.
    pub fn fixed_ice(&self) -> bool {
        self.fixed_ice
    }

    /// Blend ordering implied by the `a` option.
    pub fn order(&self) -> BlendOrder {
        if self.blend_anomalies {
            BlendOrder::AnomaliesFirst
        } else {
            BlendOrder::BlendFirst
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool, c: char| if on { c } else { 'x' };
        write!(
            f,
            "{}{}{}",
            flag(self.mask_by_coverage, 'm'),
            flag(self.blend_anomalies, 'a'),
            flag(self.fixed_ice, 'f')
        )
    }
}

impl FromStr for BlendMode {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PipelineError::InvalidMode {
            mode: s.to_string(),
        };
        let flag = |c: u8, on: u8| match c {
            b'x' => Ok(false),
            c if c == on => Ok(true),
            _ => Err(invalid()),
        };
        match s.as_bytes() {
            &[m, a, f] => Ok(Self::new(flag(m, b'm')?, flag(a, b'a')?, flag(f, b'f')?)),
            _ => Err(invalid()),
        }
    }
}
