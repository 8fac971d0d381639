//! Shared memoization of derived RGB profiles.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::adaptation::Adaptation;
use super::color_space::RgbSpace;
use super::illuminant::Illuminant;
use super::profile::RgbProfile;

type ProfileKey = (RgbSpace, Adaptation, Illuminant);

/// Thread-safe cache of profiles keyed by space, adaptation and illuminant.
///
/// Profiles are immutable, so handing out `Arc`s is enough for sharing.
#[derive(Debug, Default)]
pub struct ProfileCache {
    profiles: RwLock<HashMap<ProfileKey, Arc<RgbProfile>>>,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached profile, deriving and storing it on first use.
    pub fn get(
        &self,
        space: RgbSpace,
        adaptation: Adaptation,
        illuminant: Illuminant,
    ) -> Arc<RgbProfile> {
        let key = (space, adaptation, illuminant);

        if let Some(profile) = self.profiles.read().get(&key) {
            tracing::trace!("profile cache hit: {space}, {adaptation}, {illuminant}");
            return Arc::clone(profile);
        }

        tracing::debug!("profile cache miss: {space}, {adaptation}, {illuminant}");
        let mut profiles = self.profiles.write();
        Arc::clone(
            profiles
                .entry(key)
                .or_insert_with(|| Arc::new(RgbProfile::new(space, adaptation, illuminant))),
        )
    }

    /// Number of cached profiles.
    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }

    pub fn clear(&self) {
        self.profiles.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_returns_shared_profile() {
        let cache = ProfileCache::new();
        let a = cache.get(RgbSpace::Srgb, Adaptation::Bradford, Illuminant::D50);
        let b = cache.get(RgbSpace::Srgb, Adaptation::Bradford, Illuminant::D50);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_keys_on_all_three_parameters() {
        let cache = ProfileCache::new();
        cache.get(RgbSpace::Srgb, Adaptation::Bradford, Illuminant::D50);
        cache.get(RgbSpace::Srgb, Adaptation::VonKries, Illuminant::D50);
        cache.get(RgbSpace::Srgb, Adaptation::Bradford, Illuminant::D65);
        cache.get(RgbSpace::AdobeRgb, Adaptation::Bradford, Illuminant::D50);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_cached_profile_matches_fresh_derivation() {
        let cache = ProfileCache::new();
        let cached = cache.get(RgbSpace::ProPhotoRgb, Adaptation::None, Illuminant::E);
        assert_eq!(
            *cached,
            RgbProfile::new(RgbSpace::ProPhotoRgb, Adaptation::None, Illuminant::E)
        );
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = ProfileCache::new();
        cache.get(RgbSpace::Srgb, Adaptation::None, Illuminant::D65);
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_is_shareable_across_threads() {
        let cache = Arc::new(ProfileCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.get(RgbSpace::Srgb, Adaptation::Bradford, Illuminant::D50)
                })
            })
            .collect();
        let profiles: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(cache.len(), 1);
        assert!(profiles.iter().all(|p| **p == *profiles[0]));
    }
}
