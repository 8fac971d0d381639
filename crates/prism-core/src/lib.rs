//! Prism Core — color models and RGB color-space conversion.
//!
//! This crate provides channel ranges, the RGB / HSV / HSL models with
//! generic facade types, and an RGB ↔ CIE XYZ engine covering sixteen
//! working spaces with companding and chromatic adaptation. All math is
//! `f64` and side-effect free apart from logging.

pub mod channel;
pub mod color_management;
pub mod config;
pub mod conversion;
pub mod error;
pub mod interop;
pub mod model;
pub mod parse;

// Re-exports for convenience.
pub use channel::{Byte, ChannelRange, Degrees, Percent, Unit, Word};
pub use color_management::{
    Adaptation, Illuminant, ProfileCache, RgbProfile, RgbSpace, get_rgb_params, rgb_to_xyz,
    xyz_to_rgb,
};
pub use config::ProfileConfig;
pub use conversion::{hsl_to_rgb, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use error::ColorError;
pub use model::{Hsl, Hsl360, HslF64, Hsv, Hsv360, HsvF64, Rgb, Rgb48, Rgb256, RgbF64};
