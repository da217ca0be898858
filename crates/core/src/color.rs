//! Color types and conversion functions for axis-hsl.
//!
//! Provides the RGB triple, the cylindrical `AxisHsl` form obtained by
//! rotating the RGB cube so its grey diagonal becomes the lightness axis,
//! and the display-scaled `HslReport`. All conversions are pure functions
//! over `f64` with no clamping: values outside the unit cube, NaN and
//! infinities pass straight through.

use crate::repr::format_float;
use crate::rotation::Rotation;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// RGB color. Components are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Polar form in the grey-aligned frame.
///
/// `h` is the hue angle in radians from `atan2`, `s` the distance from the
/// grey axis and `l` the projection onto it. None of these are normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisHsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Display-scaled hue (degrees), saturation and lightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslReport {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Divisors applied to saturation and lightness for display.
///
/// With the defaults the white corner, `sqrt(3)` along the grey axis,
/// reports lightness 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub saturation: f64,
    pub lightness: f64,
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            saturation: 3f64.sqrt() / 2.0,
            lightness: 3f64.sqrt(),
        }
    }
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    fn to_vec3(self) -> DVec3 {
        DVec3::new(self.r, self.g, self.b)
    }

    fn from_vec3(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl AxisHsl {
    /// Scales the polar values for display. Hue goes to degrees.
    pub fn normalized(self, norm: Normalization) -> HslReport {
        HslReport {
            h: 360.0 * self.h / (2.0 * PI),
            s: self.s / norm.saturation,
            l: self.l / norm.lightness,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r:{} g:{} b:{}",
            format_float(self.r),
            format_float(self.g),
            format_float(self.b)
        )
    }
}

impl fmt::Display for HslReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "h:{} s:{} l:{}",
            format_float(self.h),
            format_float(self.s),
            format_float(self.l)
        )
    }
}

/// Rotates RGB into the grey-aligned Cartesian frame.
pub fn rgb_to_cartesian(c: Rgb) -> DVec3 {
    Rotation::forward().apply_yx(c.to_vec3())
}

/// Splits a grey-aligned vector into hue angle, radius and height.
///
/// `atan2(0, 0)` is 0, so achromatic input reports hue 0.
pub fn cartesian_to_hsl(v: DVec3) -> AxisHsl {
    AxisHsl {
        h: v.y.atan2(v.x),
        s: (v.x * v.x + v.y * v.y).sqrt(),
        l: v.z,
    }
}

/// Rebuilds the grey-aligned vector from its polar form.
pub fn hsl_to_cartesian(c: AxisHsl) -> DVec3 {
    DVec3::new(c.s * c.h.cos(), c.s * c.h.sin(), c.l)
}

/// Rotates a grey-aligned vector back into RGB.
pub fn cartesian_to_rgb(v: DVec3) -> Rgb {
    Rgb::from_vec3(Rotation::backward().apply_xy(v))
}

/// Convenience: RGB to `AxisHsl` via the rotated Cartesian frame.
pub fn rgb_to_hsl(c: Rgb) -> AxisHsl {
    cartesian_to_hsl(rgb_to_cartesian(c))
}

/// Convenience: `AxisHsl` to RGB via the rotated Cartesian frame.
pub fn hsl_to_rgb(c: AxisHsl) -> Rgb {
    cartesian_to_rgb(hsl_to_cartesian(c))
}
