//! Fixed 3D rotations between the RGB axis frame and the grey-aligned frame.
//!
//! The forward rotation turns the RGB cube about Y by -45 degrees and then
//! about X so that the grey diagonal `(1, 1, 1)` lands on +Z. The backward
//! rotation undoes it in the opposite order.

use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Elevation of the grey diagonal above the RG plane, `atan2(sqrt(2), 1)`.
pub fn grey_tilt() -> f64 {
    2f64.sqrt().atan2(1.0)
}

/// A pair of axis rotations with precomputed cosines and sines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    cx: f64,
    sx: f64,
    cy: f64,
    sy: f64,
}

impl Rotation {
    /// Builds a rotation from angles (radians) about the X and Y axes.
    pub fn new(theta_x: f64, theta_y: f64) -> Self {
        Self {
            cx: theta_x.cos(),
            sx: theta_x.sin(),
            cy: theta_y.cos(),
            sy: theta_y.sin(),
        }
    }

    /// Angles taking RGB coordinates into the grey-aligned frame.
    pub fn forward() -> Self {
        Self::new(-FRAC_PI_2 + grey_tilt(), -FRAC_PI_4)
    }

    /// Angles taking grey-aligned coordinates back to RGB.
    pub fn backward() -> Self {
        Self::new(FRAC_PI_2 - grey_tilt(), FRAC_PI_4)
    }

    /// Rotates about Y, then about X.
    // Terms are evaluated in the written order; regrouping changes the last digit.
    pub fn apply_yx(&self, v: DVec3) -> DVec3 {
        let Self { cx, sx, cy, sy } = *self;
        DVec3::new(
            cy * v.x + sy * v.z,
            -sx * sy * v.x + cx * v.y + sx * cy * v.z,
            -cx * sy * v.x - sx * v.y + cx * cy * v.z,
        )
    }

    /// Rotates about X, then about Y.
    pub fn apply_xy(&self, v: DVec3) -> DVec3 {
        let Self { cx, sx, cy, sy } = *self;
        DVec3::new(
            cy * v.x - sy * sx * v.y + sy * cx * v.z,
            cx * v.y + sx * v.z,
            -sy * v.x - cy * sx * v.y + cy * cx * v.z,
        )
    }
}
