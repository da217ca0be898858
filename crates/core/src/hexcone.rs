//! Conventional hexcone HSL, as used to drive LED pixels.
//!
//! Unlike the rotated frame in [`crate::color`], this is the piecewise
//! six-sector model: hue in degrees, saturation and lightness in `[0, 1]`.
//! Inputs are wrapped and clamped so the result always lies in the unit cube.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};

/// Hexcone HSL color. `h` is in degrees; any value is accepted and wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Converts hexcone HSL to RGB.
///
/// Hue wraps into `[0, 360)`, saturation and lightness clamp to `[0, 1]`.
/// A NaN saturation or lightness clamps to 1.
pub fn hexcone_to_rgb(c: Hsl) -> Rgb {
    let h = c.h.rem_euclid(360.0);
    let s = c.s.min(1.0).max(0.0);
    let l = c.l.min(1.0).max(0.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - chroma * 0.5;

    let (r, g, b) = if h < 60.0 {
        (chroma, x, 0.0)
    } else if h < 120.0 {
        (x, chroma, 0.0)
    } else if h < 180.0 {
        (0.0, chroma, x)
    } else if h < 240.0 {
        (0.0, x, chroma)
    } else if h < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    Rgb::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_rgb_close(got: Rgb, want: (f64, f64, f64)) {
        assert!((got.r - want.0).abs() < EPSILON, "r: {} vs {}", got.r, want.0);
        assert!((got.g - want.1).abs() < EPSILON, "g: {} vs {}", got.g, want.1);
        assert!((got.b - want.2).abs() < EPSILON, "b: {} vs {}", got.b, want.2);
    }

    #[test]
    fn primaries_and_secondaries() {
        let cases = [
            (0.0, (1.0, 0.0, 0.0)),
            (60.0, (1.0, 1.0, 0.0)),
            (120.0, (0.0, 1.0, 0.0)),
            (180.0, (0.0, 1.0, 1.0)),
            (240.0, (0.0, 0.0, 1.0)),
            (300.0, (1.0, 0.0, 1.0)),
        ];
        for (h, want) in cases {
            assert_rgb_close(hexcone_to_rgb(Hsl::new(h, 1.0, 0.5)), want);
        }
    }

    #[test]
    fn hue_between_sectors_blends() {
        assert_rgb_close(hexcone_to_rgb(Hsl::new(30.0, 1.0, 0.5)), (1.0, 0.5, 0.0));
    }

    #[test]
    fn hue_wraps_in_both_directions() {
        assert_rgb_close(hexcone_to_rgb(Hsl::new(-120.0, 1.0, 0.5)), (0.0, 0.0, 1.0));
        assert_rgb_close(hexcone_to_rgb(Hsl::new(480.0, 1.0, 0.5)), (0.0, 1.0, 0.0));
        assert_rgb_close(hexcone_to_rgb(Hsl::new(360.0, 1.0, 0.5)), (1.0, 0.0, 0.0));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_rgb_close(hexcone_to_rgb(Hsl::new(200.0, 0.0, 0.3)), (0.3, 0.3, 0.3));
    }

    #[test]
    fn out_of_range_saturation_and_lightness_clamp() {
        assert_rgb_close(hexcone_to_rgb(Hsl::new(0.0, 2.0, 0.5)), (1.0, 0.0, 0.0));
        assert_rgb_close(hexcone_to_rgb(Hsl::new(0.0, 1.0, 1.7)), (1.0, 1.0, 1.0));
        assert_rgb_close(hexcone_to_rgb(Hsl::new(0.0, 1.0, -0.2)), (0.0, 0.0, 0.0));
    }

    #[test]
    fn nan_saturation_clamps_to_one() {
        assert_rgb_close(hexcone_to_rgb(Hsl::new(0.0, f64::NAN, 0.5)), (1.0, 0.0, 0.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn output_stays_in_unit_cube(
                h in -1000.0_f64..=1000.0,
                s in -1.0_f64..=2.0,
                l in -1.0_f64..=2.0,
            ) {
                let c = hexcone_to_rgb(Hsl::new(h, s, l));
                for v in [c.r, c.g, c.b] {
                    prop_assert!((-EPSILON..=1.0 + EPSILON).contains(&v), "{v} outside [0, 1]");
                }
            }
        }
    }
}
