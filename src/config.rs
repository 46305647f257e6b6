/*
Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Build-time selection of the logging threshold.
//!
//! The threshold is resolved once per compiled artifact from two inputs:
//!
//! - the build profile, detected by the build script from cargo's optimization
//!   level (`Optimized` when `opt-level` is not `0`, `Development` otherwise);
//! - the `threshold_*` and `release_threshold_*` cargo features, which override
//!   the profile default. The most restrictive enabled override wins.
//!
//! Everything here is a `const`, so the gate in every macro expansion folds to
//! a literal `true` or `false`.

use crate::level::SeverityLevel;
use crate::threshold::Threshold;
use serde::{Deserialize, Serialize};

/// The kind of build a threshold is chosen for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Unoptimized builds (`opt-level = 0`). Defaults to `DEBUG`.
    #[default]
    Development,
    /// Optimized builds. Defaults to `WARNING`.
    Optimized,
}

impl Profile {
    /// The profile this crate was compiled under.
    pub const CURRENT: Profile = if cfg!(gated_log_optimized) {
        Profile::Optimized
    } else {
        Profile::Development
    };

    /// Threshold used when no feature overrides it.
    pub const fn default_threshold(self) -> Threshold {
        match self {
            Profile::Development => Threshold::at(SeverityLevel::Debug),
            Profile::Optimized => Threshold::at(SeverityLevel::Warning),
        }
    }
}

/// The resolved logging configuration of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub profile: Profile,
    pub threshold: Threshold,
    /// Whether a cargo feature replaced the profile default.
    pub overridden: bool,
}

impl BuildConfig {
    /// The configuration this crate was compiled with.
    pub const CURRENT: BuildConfig =
        BuildConfig::resolve(Profile::CURRENT, feature_override(Profile::CURRENT));

    /// The configuration a profile gets without any feature override.
    pub const fn for_profile(profile: Profile) -> Self {
        BuildConfig::resolve(profile, None)
    }

    /// Uses `threshold_override` when given, the profile default otherwise.
    pub const fn resolve(profile: Profile, threshold_override: Option<Threshold>) -> Self {
        match threshold_override {
            Some(threshold) => BuildConfig {
                profile,
                threshold,
                overridden: true,
            },
            None => BuildConfig {
                profile,
                threshold: profile.default_threshold(),
                overridden: false,
            },
        }
    }

    /// Renders the configuration as JSON for diagnostics.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig::CURRENT
    }
}

/// The threshold every log entry point of this build is gated on.
pub const THRESHOLD: Threshold = BuildConfig::CURRENT.threshold;

const fn feature_override(profile: Profile) -> Option<Threshold> {
    combine(profile, feature_threshold(), release_feature_threshold())
}

/// Merges the every-profile and optimized-only overrides for `profile`.
///
/// Release overrides are ignored outside `Optimized`. When both apply the more
/// restrictive one wins.
const fn combine(
    profile: Profile,
    always: Option<Threshold>,
    release: Option<Threshold>,
) -> Option<Threshold> {
    let release = match profile {
        Profile::Optimized => release,
        Profile::Development => None,
    };
    match (always, release) {
        (Some(always), Some(release)) => Some(always.stricter(release)),
        (Some(always), None) => Some(always),
        (None, release) => release,
    }
}

// Checked from the most restrictive down so the strictest feature wins.
const fn feature_threshold() -> Option<Threshold> {
    if cfg!(feature = "threshold_off") {
        Some(Threshold::SILENT)
    } else if cfg!(feature = "threshold_error") {
        Some(Threshold::at(SeverityLevel::Error))
    } else if cfg!(feature = "threshold_warning") {
        Some(Threshold::at(SeverityLevel::Warning))
    } else if cfg!(feature = "threshold_notice") {
        Some(Threshold::at(SeverityLevel::Notice))
    } else if cfg!(feature = "threshold_info") {
        Some(Threshold::at(SeverityLevel::Info))
    } else if cfg!(feature = "threshold_debug") {
        Some(Threshold::at(SeverityLevel::Debug))
    } else if cfg!(feature = "threshold_verbose") {
        Some(Threshold::at(SeverityLevel::Verbose))
    } else {
        None
    }
}

const fn release_feature_threshold() -> Option<Threshold> {
    if cfg!(feature = "release_threshold_off") {
        Some(Threshold::SILENT)
    } else if cfg!(feature = "release_threshold_error") {
        Some(Threshold::at(SeverityLevel::Error))
    } else if cfg!(feature = "release_threshold_warning") {
        Some(Threshold::at(SeverityLevel::Warning))
    } else if cfg!(feature = "release_threshold_notice") {
        Some(Threshold::at(SeverityLevel::Notice))
    } else if cfg!(feature = "release_threshold_info") {
        Some(Threshold::at(SeverityLevel::Info))
    } else if cfg!(feature = "release_threshold_debug") {
        Some(Threshold::at(SeverityLevel::Debug))
    } else if cfg!(feature = "release_threshold_verbose") {
        Some(Threshold::at(SeverityLevel::Verbose))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        assert_eq!(
            Profile::Development.default_threshold(),
            Threshold::at(SeverityLevel::Debug)
        );
        assert_eq!(
            Profile::Optimized.default_threshold(),
            Threshold::at(SeverityLevel::Warning)
        );
        assert_eq!(Profile::default(), Profile::Development);
    }

    #[test]
    fn test_resolve_without_override() {
        let config = BuildConfig::for_profile(Profile::Optimized);
        assert_eq!(config.threshold, Threshold::at(SeverityLevel::Warning));
        assert!(!config.overridden);
    }

    #[test]
    fn test_resolve_with_override() {
        let config = BuildConfig::resolve(Profile::Development, Some(Threshold::SILENT));
        assert_eq!(config.profile, Profile::Development);
        assert_eq!(config.threshold, Threshold::SILENT);
        assert!(config.overridden);
    }

    #[test]
    fn test_current_is_consistent() {
        let current = BuildConfig::CURRENT;
        assert_eq!(current.profile, Profile::CURRENT);
        assert_eq!(THRESHOLD, current.threshold);
        if !current.overridden {
            assert_eq!(current.threshold, Profile::CURRENT.default_threshold());
        }
    }

    #[test]
    fn test_profile_tracks_optimization() {
        let expected = if cfg!(gated_log_optimized) {
            Profile::Optimized
        } else {
            Profile::Development
        };
        assert_eq!(Profile::CURRENT, expected);
    }

    #[test]
    fn test_combine_without_overrides() {
        assert_eq!(combine(Profile::Development, None, None), None);
        assert_eq!(combine(Profile::Optimized, None, None), None);
    }

    #[test]
    fn test_combine_ignores_release_override_in_development() {
        let error = Some(Threshold::at(SeverityLevel::Error));
        assert_eq!(combine(Profile::Development, None, error), None);
        assert_eq!(
            combine(
                Profile::Development,
                Some(Threshold::at(SeverityLevel::Info)),
                error
            ),
            Some(Threshold::at(SeverityLevel::Info))
        );
        assert_eq!(combine(Profile::Optimized, None, error), error);
    }

    #[test]
    fn test_combine_picks_most_restrictive() {
        let combined = combine(
            Profile::Optimized,
            Some(Threshold::at(SeverityLevel::Debug)),
            Some(Threshold::at(SeverityLevel::Notice)),
        );
        assert_eq!(combined, Some(Threshold::at(SeverityLevel::Notice)));

        let config = BuildConfig::resolve(Profile::Optimized, combined);
        assert_eq!(config.threshold, Threshold::at(SeverityLevel::Notice));
        assert!(config.overridden);
    }

    #[test]
    fn test_combine_silent_beats_release_override() {
        for level in SeverityLevel::ALL {
            assert_eq!(
                combine(
                    Profile::Optimized,
                    Some(Threshold::SILENT),
                    Some(Threshold::at(level))
                ),
                Some(Threshold::SILENT)
            );
        }
    }

    #[test]
    fn test_current_matches_feature_lookup() {
        let expected = combine(
            Profile::CURRENT,
            feature_threshold(),
            release_feature_threshold(),
        );
        assert_eq!(BuildConfig::CURRENT.overridden, expected.is_some());
        if let Some(threshold) = expected {
            assert_eq!(THRESHOLD, threshold);
        }
    }

    #[test]
    fn test_json_report() {
        let json = BuildConfig::for_profile(Profile::Development)
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"], "development");
        assert_eq!(value["threshold"], "DEBUG");
        assert_eq!(value["overridden"], false);

        let back: BuildConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BuildConfig::for_profile(Profile::Development));
    }
}
