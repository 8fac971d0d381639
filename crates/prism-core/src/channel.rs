//! Channel value ranges and normalization to the canonical `[0, 1]` domain.
//!
//! Every color model stores its channels in some raw representation: a
//! continuous `f64` in `[0, 1]`, a byte, a percentage, a hue in degrees.
//! Conversions between models always go through normalized `f64` values,
//! so each range only has to know how to map itself onto `[0, 1]`.
//!
//! ```text
//! discrete:   normalized = (raw − min) / (max − min + 1)
//!             raw        = min + trunc(normalized × (max − min + 1))
//!
//! continuous: normalized = (raw − min) / (max − min)
//!             raw        = min + normalized × (max − min)
//! ```
//!
//! A discrete range with N codes maps them onto `[0, 1)`, which is why the
//! divisor carries the extra `+1`. Round trips through a discrete range are
//! exact only up to quantization.

use std::fmt;

/// Static descriptor of a channel's scalar domain.
///
/// Implementors are zero-sized markers; a color type is parameterized by the
/// marker and stores `Self::Raw` values.
pub trait ChannelRange: Copy + Default + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Storage type of one channel.
    type Raw: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync;

    /// Smallest value of the range.
    const MIN: f64;
    /// Largest value of the range. Always greater than `MIN`.
    const MAX: f64;
    /// `true` for quantized integer ranges.
    const DISCRETE: bool;

    /// Widen a raw value to `f64`.
    fn raw_to_f64(raw: Self::Raw) -> f64;

    /// Narrow an `f64` to the raw type, truncating toward zero.
    fn raw_from_f64(value: f64) -> Self::Raw;

    /// The range minimum as a raw value; the default for every channel.
    fn min() -> Self::Raw {
        Self::raw_from_f64(Self::MIN)
    }

    /// The range maximum as a raw value.
    fn max() -> Self::Raw {
        Self::raw_from_f64(Self::MAX)
    }

    /// Divisor used for normalization.
    fn span() -> f64 {
        if Self::DISCRETE {
            Self::MAX - Self::MIN + 1.0
        } else {
            Self::MAX - Self::MIN
        }
    }

    /// Map a raw value onto `[0, 1]`. No range check is performed.
    fn normalize(raw: Self::Raw) -> f64 {
        (Self::raw_to_f64(raw) - Self::MIN) / Self::span()
    }

    /// Map a normalized value back to the raw representation.
    ///
    /// For discrete ranges a normalized `1.0` would land one code past the
    /// maximum; inputs inside `[0, 1]` are pinned to the last code instead.
    /// Inputs outside `[0, 1]` are not checked and produce values outside the
    /// declared range, limited only by the raw type.
    fn denormalize(value: f64) -> Self::Raw {
        let mut scaled = value * Self::span();
        if Self::DISCRETE && (0.0..=1.0).contains(&value) {
            scaled = scaled.min(Self::MAX - Self::MIN);
        }
        Self::raw_from_f64(Self::MIN + scaled)
    }

    /// Build a raw value from an integer code, rejecting codes outside the range.
    fn from_code(code: u32) -> Option<Self::Raw> {
        let value = f64::from(code);
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then(|| Self::raw_from_f64(value))
    }

    /// `true` when `raw` lies within `[MIN, MAX]`.
    fn contains(raw: Self::Raw) -> bool {
        (Self::MIN..=Self::MAX).contains(&Self::raw_to_f64(raw))
    }
}

/// Continuous `f64` channel in `[0, 1]`. Normalization is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unit;

impl ChannelRange for Unit {
    type Raw = f64;

    const MIN: f64 = 0.0;
    const MAX: f64 = 1.0;
    const DISCRETE: bool = false;

    fn raw_to_f64(raw: f64) -> f64 {
        raw
    }

    fn raw_from_f64(value: f64) -> f64 {
        value
    }

    fn normalize(raw: f64) -> f64 {
        raw
    }

    fn denormalize(value: f64) -> f64 {
        value
    }
}

macro_rules! discrete_range {
    ($(#[$doc:meta])* $name:ident, $raw:ty, $max:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl ChannelRange for $name {
            type Raw = $raw;

            const MIN: f64 = 0.0;
            const MAX: f64 = $max;
            const DISCRETE: bool = true;

            fn raw_to_f64(raw: $raw) -> f64 {
                f64::from(raw)
            }

            fn raw_from_f64(value: f64) -> $raw {
                value as $raw
            }
        }
    };
}

discrete_range!(
    /// 8-bit channel, `0..=255`.
    Byte,
    u8,
    255.0
);
discrete_range!(
    /// 16-bit channel, `0..=65535`.
    Word,
    u16,
    65535.0
);
discrete_range!(
    /// Percentage stored in a byte, `0..=100`.
    Percent,
    u8,
    100.0
);
discrete_range!(
    /// Hue angle in whole degrees, `0..=360`.
    Degrees,
    u16,
    360.0
);
