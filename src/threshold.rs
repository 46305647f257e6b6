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

use crate::errors::ParseLevelError;
use crate::level::SeverityLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The minimum severity that is compiled into emitting code.
///
/// A threshold is a rank. It is normally built from a level with
/// [`Threshold::at`], which admits that level and every level above it.
/// [`Threshold::SILENT`] sits above `Error` and admits nothing; it is a
/// legitimate, if discouraged, configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Threshold(u8);

impl Threshold {
    /// Admits every call site.
    pub const ALL: Threshold = Threshold::at(SeverityLevel::Verbose);

    /// Admits no call site, not even errors.
    pub const SILENT: Threshold = Threshold(u8::MAX);

    /// A threshold admitting `level` and everything ranked above it.
    #[inline(always)]
    pub const fn at(level: SeverityLevel) -> Self {
        Threshold(level.rank())
    }

    /// The minimum rank a level needs to pass.
    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Whether a call site at `level` passes this threshold.
    #[inline(always)]
    pub const fn admits(self, level: SeverityLevel) -> bool {
        level.rank() >= self.0
    }

    /// The level this threshold was built from, `None` for [`Threshold::SILENT`].
    pub const fn level(self) -> Option<SeverityLevel> {
        SeverityLevel::from_rank(self.0)
    }

    /// True when the threshold is above `Error` and silences everything.
    pub const fn is_silent(self) -> bool {
        self.0 > SeverityLevel::Error.rank()
    }

    /// The more restrictive of two thresholds.
    pub const fn stricter(self, other: Threshold) -> Threshold {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }
}

impl From<SeverityLevel> for Threshold {
    fn from(level: SeverityLevel) -> Self {
        Threshold::at(level)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level() {
            Some(level) => f.write_str(level.tag()),
            None => f.write_str("OFF"),
        }
    }
}

impl FromStr for Threshold {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("off") {
            return Ok(Threshold::SILENT);
        }
        s.parse::<SeverityLevel>()
            .map(Threshold::at)
            .map_err(|_| ParseLevelError::UnknownThreshold(s.trim().to_string()))
    }
}

impl From<Threshold> for String {
    fn from(threshold: Threshold) -> Self {
        threshold.to_string()
    }
}

impl TryFrom<String> for Threshold {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
