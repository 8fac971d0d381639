//! Gamma companding between encoded RGB and linear light.
//!
//! An RGB profile carries a single gamma number that selects one of three
//! regimes:
//!
//! | gamma | regime                                   |
//! |-------|------------------------------------------|
//! | `> 0` | pure power law with that exponent        |
//! | `< 0` | sRGB piecewise curve (IEC 61966-2-1)     |
//! | `= 0` | L* piecewise curve (CIE lightness)       |
//!
//! Every regime is sign-preserving so out-of-gamut negative excursions
//! survive a round trip.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f64) -> f64;
}

/// Apply `f` to `|v|` and restore the sign of `v`.
fn mirrored(v: f64, f: impl FnOnce(f64) -> f64) -> f64 {
    if v < 0.0 { -f(-v) } else { f(v) }
}

// ---------------------------------------------------------------------------
// Power law
// ---------------------------------------------------------------------------

/// Pure power law, `linear = encoded ^ gamma`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawTransfer {
    pub gamma: f64,
}

impl TransferFunction for PowerLawTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        mirrored(encoded, |v| v.powf(self.gamma))
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        mirrored(linear, |v| v.powf(1.0 / self.gamma))
    }
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// to_encoded:  L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrgbTransfer;

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        mirrored(encoded, |v| {
            if v <= 0.04045 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        })
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        mirrored(linear, |v| {
            if v <= 0.0031308 {
                v * 12.92
            } else {
                1.055 * v.powf(1.0 / 2.4) - 0.055
            }
        })
    }
}

// ---------------------------------------------------------------------------
// L* (CIE 1976 lightness)
// ---------------------------------------------------------------------------

/// L* transfer function, the CIE lightness curve scaled to `[0, 1]`.
///
/// ```text
/// to_linear:   V <= 0.08 → V × 2700 / 24389
///              V >  0.08 → ((V + 0.16) / 1.16) ^ 3
///
/// to_encoded:  L <= 216/24389 → L × 24389 / 2700
///              L >  216/24389 → 1.16 × L^(1/3) − 0.16
/// ```
///
/// The cubic is evaluated in Horner form over the expanded polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LStarTransfer;

impl LStarTransfer {
    const EPSILON: f64 = 216.0 / 24389.0;
    const KAPPA: f64 = 24389.0 / 2700.0;
}

impl TransferFunction for LStarTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        mirrored(encoded, |v| {
            if v <= 0.08 {
                2700.0 * v / 24389.0
            } else {
                (((1_000_000.0 * v + 480_000.0) * v + 76_800.0) * v + 4096.0) / 1_560_896.0
            }
        })
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        mirrored(linear, |v| {
            if v <= Self::EPSILON {
                v * Self::KAPPA
            } else {
                1.16 * v.powf(1.0 / 3.0) - 0.16
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Regime selection
// ---------------------------------------------------------------------------

/// The companding regime selected by a profile's gamma value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Companding {
    PowerLaw(PowerLawTransfer),
    Srgb(SrgbTransfer),
    LStar(LStarTransfer),
}

impl Companding {
    pub fn from_gamma(gamma: f64) -> Self {
        if gamma > 0.0 {
            Self::PowerLaw(PowerLawTransfer { gamma })
        } else if gamma < 0.0 {
            Self::Srgb(SrgbTransfer)
        } else {
            Self::LStar(LStarTransfer)
        }
    }
}

impl TransferFunction for Companding {
    fn to_linear(&self, encoded: f64) -> f64 {
        match self {
            Self::PowerLaw(tf) => tf.to_linear(encoded),
            Self::Srgb(tf) => tf.to_linear(encoded),
            Self::LStar(tf) => tf.to_linear(encoded),
        }
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        match self {
            Self::PowerLaw(tf) => tf.to_encoded(linear),
            Self::Srgb(tf) => tf.to_encoded(linear),
            Self::LStar(tf) => tf.to_encoded(linear),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_roundtrip(tf: &dyn TransferFunction, values: &[f64]) {
        for &v in values {
            let encoded = tf.to_encoded(v);
            let back = tf.to_linear(encoded);
            assert!(
                (v - back).abs() < EPSILON,
                "roundtrip failed for {v}: encoded={encoded}, back={back}, diff={}",
                (v - back).abs()
            );
        }
    }

    #[test]
    fn test_gamma_selects_regime() {
        assert_eq!(
            Companding::from_gamma(2.2),
            Companding::PowerLaw(PowerLawTransfer { gamma: 2.2 })
        );
        assert_eq!(Companding::from_gamma(-2.2), Companding::Srgb(SrgbTransfer));
        assert_eq!(Companding::from_gamma(0.0), Companding::LStar(LStarTransfer));
    }

    #[test]
    fn test_power_law_roundtrip_preserves_values() {
        let tf = PowerLawTransfer { gamma: 1.8 };
        assert_roundtrip(&tf, &[0.0, 0.001, 0.01, 0.1, 0.5, 0.9, 1.0, -0.2]);
    }

    #[test]
    fn test_srgb_roundtrip_preserves_values() {
        assert_roundtrip(&SrgbTransfer, &[0.0, 0.001, 0.0031308, 0.01, 0.1, 0.5, 1.0, -0.05]);
    }

    #[test]
    fn test_lstar_roundtrip_preserves_values() {
        assert_roundtrip(&LStarTransfer, &[0.0, 0.001, 0.008, 0.01, 0.1, 0.5, 1.0, -0.3]);
    }

    #[test]
    fn test_srgb_known_values() {
        let tf = SrgbTransfer;
        assert_eq!(tf.to_linear(0.0), 0.0);
        assert!((tf.to_linear(1.0) - 1.0).abs() < EPSILON);
        // Mid-gray sRGB 0.5 decodes to ~0.214 linear.
        assert!((tf.to_linear(0.5) - 0.214041).abs() < 1e-6);
    }

    #[test]
    fn test_lstar_endpoints() {
        let tf = LStarTransfer;
        assert!((tf.to_linear(1.0) - 1.0).abs() < EPSILON);
        assert!((tf.to_encoded(1.0) - 1.0).abs() < EPSILON);
        assert_eq!(tf.to_encoded(0.0), 0.0);
    }

    #[test]
    fn test_companding_is_sign_preserving() {
        for gamma in [2.2, -2.2, 0.0] {
            let tf = Companding::from_gamma(gamma);
            assert_eq!(tf.to_linear(-0.5), -tf.to_linear(0.5));
            assert_eq!(tf.to_encoded(-0.5), -tf.to_encoded(0.5));
        }
    }
}
