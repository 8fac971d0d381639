//! Color management: RGB working spaces, companding, chromatic adaptation
//! and the RGB ↔ XYZ pipeline.

pub mod adaptation;
pub mod cache;
pub mod color_space;
pub mod illuminant;
pub mod matrix;
pub mod profile;
pub mod transfer;

pub use adaptation::Adaptation;
pub use cache::ProfileCache;
pub use color_space::{Primaries, RgbSpace};
pub use illuminant::Illuminant;
pub use matrix::{Matrix3, Vec3};
pub use profile::{RgbProfile, get_rgb_params, rgb_to_xyz, xyz_to_rgb};
pub use transfer::{Companding, TransferFunction};
