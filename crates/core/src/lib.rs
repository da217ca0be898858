#![deny(unsafe_code)]
//! Core types and conversions for axis-hsl.
//!
//! Maps RGB triples into a hue/saturation/lightness frame by rotating the
//! RGB cube until its grey diagonal is the Z axis, then taking polar
//! coordinates in the XY plane. Provides the `Rgb`, `AxisHsl` and
//! `HslReport` types, the fixed `Rotation` pair, the `convert` pipeline and
//! the float text helpers used by the CLI. `hexcone` holds the conventional
//! six-sector HSL used for LED output.

pub mod color;
pub mod error;
pub mod hexcone;
pub mod pipeline;
pub mod repr;
pub mod rotation;

pub use color::{AxisHsl, HslReport, Normalization, Rgb};
pub use error::ConvertError;
pub use hexcone::{hexcone_to_rgb, Hsl};
pub use pipeline::{convert, convert_with, Conversion};
pub use repr::{format_float, parse_component};
pub use rotation::Rotation;
