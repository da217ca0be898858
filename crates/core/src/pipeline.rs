//! One full pass through the converter, keeping every intermediate.

use crate::color::{
    cartesian_to_hsl, cartesian_to_rgb, hsl_to_cartesian, rgb_to_cartesian, AxisHsl, HslReport,
    Normalization, Rgb,
};
use glam::DVec3;
use serde::Serialize;

/// Result of converting one RGB triple to the grey-aligned frame and back.
///
/// `report` is derived from `hsl` for display only; `reconstructed` and
/// `output` are computed from the unscaled `hsl`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub input: Rgb,
    pub forward: DVec3,
    pub hsl: AxisHsl,
    pub report: HslReport,
    pub reconstructed: DVec3,
    pub output: Rgb,
}

/// Runs the converter with the default display divisors.
pub fn convert(input: Rgb) -> Conversion {
    convert_with(input, Normalization::default())
}

/// Runs the converter, scaling the report with `norm`.
pub fn convert_with(input: Rgb, norm: Normalization) -> Conversion {
    let forward = rgb_to_cartesian(input);
    let hsl = cartesian_to_hsl(forward);
    let reconstructed = hsl_to_cartesian(hsl);
    Conversion {
        input,
        forward,
        hsl,
        report: hsl.normalized(norm),
        reconstructed,
        output: cartesian_to_rgb(reconstructed),
    }
}
