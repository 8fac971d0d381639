//! Profile selection from JSON or the process environment.
//!
//! | Variable             | Example      | Default    |
//! |----------------------|--------------|------------|
//! | `PRISM_RGB_SPACE`    | `Adobe RGB`  | `sRGB`     |
//! | `PRISM_ADAPTATION`   | `von kries`  | `Bradford` |
//! | `PRISM_ILLUMINANT`   | `D65`        | `D50`      |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color_management::{Adaptation, Illuminant, ProfileCache, RgbProfile, RgbSpace};
use crate::error::ColorError;

pub const ENV_RGB_SPACE: &str = "PRISM_RGB_SPACE";
pub const ENV_ADAPTATION: &str = "PRISM_ADAPTATION";
pub const ENV_ILLUMINANT: &str = "PRISM_ILLUMINANT";

/// Which RGB space, adaptation method and illuminant to build a profile for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub space: RgbSpace,
    #[serde(default)]
    pub adaptation: Adaptation,
    #[serde(default)]
    pub illuminant: Illuminant,
}

impl ProfileConfig {
    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the `PRISM_*` variables. Unset or unrecognized values fall back
    /// to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ProfileConfig::from_env`] with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            space: setting(&lookup, ENV_RGB_SPACE),
            adaptation: setting(&lookup, ENV_ADAPTATION),
            illuminant: setting(&lookup, ENV_ILLUMINANT),
        }
    }

    /// Derive the profile this configuration describes.
    pub fn profile(&self) -> RgbProfile {
        RgbProfile::new(self.space, self.adaptation, self.illuminant)
    }

    /// Fetch the profile from `cache`, deriving it on first use.
    pub fn cached_profile(&self, cache: &ProfileCache) -> std::sync::Arc<RgbProfile> {
        cache.get(self.space, self.adaptation, self.illuminant)
    }
}

fn setting<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> T
where
    T: FromStr<Err = ColorError> + Default + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return T::default();
    };
    raw.parse().unwrap_or_else(|e: ColorError| {
        let fallback = T::default();
        tracing::warn!("{key}: {e}, using {fallback}");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ProfileConfig::default();
        assert_eq!(config.space, RgbSpace::Srgb);
        assert_eq!(config.adaptation, Adaptation::Bradford);
        assert_eq!(config.illuminant, Illuminant::D50);
        assert_eq!(config.profile(), RgbProfile::default());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = ProfileConfig::from_json(r#"{"space": "AdobeRgb"}"#).unwrap();
        assert_eq!(config.space, RgbSpace::AdobeRgb);
        assert_eq!(config.adaptation, Adaptation::Bradford);
        assert_eq!(config.illuminant, Illuminant::D50);

        let config = ProfileConfig::from_json("{}").unwrap();
        assert_eq!(config, ProfileConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_space() {
        let err = ProfileConfig::from_json(r#"{"space": "NotASpace"}"#).unwrap_err();
        assert!(matches!(err, ColorError::Config(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = ProfileConfig {
            space: RgbSpace::ProPhotoRgb,
            adaptation: Adaptation::VonKries,
            illuminant: Illuminant::D65,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ProfileConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_lookup_reads_each_variable() {
        let config = ProfileConfig::from_lookup(lookup_from(&[
            (ENV_RGB_SPACE, "Adobe RGB"),
            (ENV_ADAPTATION, "von kries"),
            (ENV_ILLUMINANT, "d65"),
        ]));
        assert_eq!(config.space, RgbSpace::AdobeRgb);
        assert_eq!(config.adaptation, Adaptation::VonKries);
        assert_eq!(config.illuminant, Illuminant::D65);
    }

    #[test]
    fn test_lookup_falls_back_on_invalid_values() {
        let config = ProfileConfig::from_lookup(lookup_from(&[
            (ENV_RGB_SPACE, "nonsense"),
            (ENV_ILLUMINANT, "D99"),
        ]));
        assert_eq!(config, ProfileConfig::default());
    }

    #[test]
    fn test_cached_profile_matches_derived() {
        let cache = ProfileCache::new();
        let config = ProfileConfig::default();
        assert_eq!(*config.cached_profile(&cache), config.profile());
        assert_eq!(cache.len(), 1);
    }
}
