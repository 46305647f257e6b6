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
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The severity of a log call site.
///
/// Levels are totally ordered by their rank, from `Verbose` (lowest) to `Error`
/// (highest). The derived ordering agrees with [`SeverityLevel::rank`], so
/// levels can be compared directly.
///
/// Ranks are spaced out rather than consecutive; only their relative order is
/// meaningful:
///
/// | Level     | Rank | Tag       |
/// |-----------|------|-----------|
/// | `Verbose` | 0    | `VERBOSE` |
/// | `Debug`   | 50   | `DEBUG`   |
/// | `Info`    | 70   | `INFO`    |
/// | `Notice`  | 80   | `NOTICE`  |
/// | `Warning` | 90   | `WARNING` |
/// | `Error`   | 100  | `ERROR`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum SeverityLevel {
    /// Everything, including chatter nobody usually wants to read.
    Verbose = 0,
    /// Information used while debugging.
    Debug = 50,
    /// Normal events of interest.
    Info = 70,
    /// Events the user should notice.
    Notice = 80,
    /// Events that can lead to an error.
    Warning = 90,
    /// Errors. Visible in every standard build configuration.
    Error = 100,
}

impl SeverityLevel {
    /// All levels in ascending rank.
    pub const ALL: [SeverityLevel; 6] = [
        SeverityLevel::Verbose,
        SeverityLevel::Debug,
        SeverityLevel::Info,
        SeverityLevel::Notice,
        SeverityLevel::Warning,
        SeverityLevel::Error,
    ];

    /// Returns the numeric rank used to compare levels against a threshold.
    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns the uppercase tag printed in front of a rendered message.
    #[inline(always)]
    pub const fn tag(self) -> &'static str {
        match self {
            SeverityLevel::Verbose => "VERBOSE",
            SeverityLevel::Debug => "DEBUG",
            SeverityLevel::Info => "INFO",
            SeverityLevel::Notice => "NOTICE",
            SeverityLevel::Warning => "WARNING",
            SeverityLevel::Error => "ERROR",
        }
    }

    /// Looks up the level with exactly the given rank.
    pub const fn from_rank(rank: u8) -> Option<SeverityLevel> {
        match rank {
            0 => Some(SeverityLevel::Verbose),
            50 => Some(SeverityLevel::Debug),
            70 => Some(SeverityLevel::Info),
            80 => Some(SeverityLevel::Notice),
            90 => Some(SeverityLevel::Warning),
            100 => Some(SeverityLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SeverityLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("warn") {
            return Ok(SeverityLevel::Warning);
        }
        SeverityLevel::ALL
            .into_iter()
            .find(|level| level.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLevelError::UnknownLevel(s.to_string()))
    }
}
