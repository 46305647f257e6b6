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

use crate::config::THRESHOLD;
use crate::level::SeverityLevel;
use crate::threshold::Threshold;

/// Whether a call site at `level` compiles to an emission under `threshold`.
///
/// This is the whole gate: a rank comparison. The logging macros evaluate it
/// inside a `const` block, so a suppressed call site leaves no code behind.
#[inline(always)]
pub const fn is_active(level: SeverityLevel, threshold: Threshold) -> bool {
    threshold.admits(level)
}

/// Whether `level` is compiled in under this build's [`THRESHOLD`].
#[inline(always)]
pub const fn enabled(level: SeverityLevel) -> bool {
    is_active(level, THRESHOLD)
}

/// Whether a (level, threshold) pair compiles to an emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateState {
    Active,
    Suppressed,
}

impl GateState {
    /// The gate state of `level` under `threshold`.
    pub const fn of(level: SeverityLevel, threshold: Threshold) -> Self {
        if is_active(level, threshold) {
            GateState::Active
        } else {
            GateState::Suppressed
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(self, GateState::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::SeverityLevel::*;

    #[test]
    fn test_gate_matches_rank_comparison() {
        for level in SeverityLevel::ALL {
            for threshold_level in SeverityLevel::ALL {
                let threshold = Threshold::at(threshold_level);
                assert_eq!(
                    is_active(level, threshold),
                    level.rank() >= threshold_level.rank(),
                    "{} under {}",
                    level,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_gate_table() {
        // Rows are thresholds, columns are call-site levels in ascending rank.
        let expected: [(SeverityLevel, [bool; 6]); 6] = [
            (Verbose, [true, true, true, true, true, true]),
            (Debug, [false, true, true, true, true, true]),
            (Info, [false, false, true, true, true, true]),
            (Notice, [false, false, false, true, true, true]),
            (Warning, [false, false, false, false, true, true]),
            (Error, [false, false, false, false, false, true]),
        ];
        for (threshold_level, row) in expected {
            for (level, active) in SeverityLevel::ALL.into_iter().zip(row) {
                let state = GateState::of(level, Threshold::at(threshold_level));
                assert_eq!(state.is_active(), active, "{} under {}", level, threshold_level);
            }
        }
    }

    #[test]
    fn test_silent_threshold_suppresses_errors() {
        assert_eq!(GateState::of(Error, Threshold::SILENT), GateState::Suppressed);
    }

    #[test]
    fn test_enabled_uses_build_threshold() {
        for level in SeverityLevel::ALL {
            assert_eq!(enabled(level), THRESHOLD.admits(level));
        }
    }

    #[test]
    fn test_gate_is_const() {
        const WARNING_UNDER_DEBUG: bool = is_active(Warning, Threshold::at(Debug));
        const DEBUG_UNDER_WARNING: GateState = GateState::of(Debug, Threshold::at(Warning));
        assert!(WARNING_UNDER_DEBUG);
        assert_eq!(DEBUG_UNDER_WARNING, GateState::Suppressed);
    }
}
