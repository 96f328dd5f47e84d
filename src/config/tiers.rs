// ABOUTME: Exit-velocity heat-tier breakpoint tables per playing level
// ABOUTME: Four descending breakpoints (hot/warm/cool/cold) selecting among five tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

use serde::{Deserialize, Serialize};

use crate::models::PlayingLevel;

/// Four descending exit-velocity breakpoints for one playing level, in mph.
///
/// A value meeting or exceeding `hot` lands in the hottest tier; one below
/// `cold` lands in the coldest. The four breakpoints partition the velocity
/// axis into five ordered tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Hottest-tier breakpoint
    pub hot: f64,
    /// Second-tier breakpoint
    pub warm: f64,
    /// Third-tier breakpoint
    pub cool: f64,
    /// Fourth-tier breakpoint
    pub cold: f64,
}

/// Youth-level breakpoints
pub const YOUTH: TierThresholds = TierThresholds {
    hot: 88.0,
    warm: 80.0,
    cool: 70.0,
    cold: 60.0,
};

/// High-school breakpoints; also the fallback for unrecognized levels
pub const HIGH_SCHOOL: TierThresholds = TierThresholds {
    hot: 98.0,
    warm: 90.0,
    cool: 82.0,
    cold: 70.0,
};

/// College-level breakpoints
pub const COLLEGE: TierThresholds = TierThresholds {
    hot: 102.0,
    warm: 95.0,
    cool: 87.0,
    cold: 76.0,
};

/// Professional-level breakpoints
pub const PROFESSIONAL: TierThresholds = TierThresholds {
    hot: 106.0,
    warm: 99.0,
    cool: 91.0,
    cold: 82.0,
};

impl TierThresholds {
    /// Look up the breakpoint table for a playing level
    #[must_use]
    pub const fn for_level(level: PlayingLevel) -> Self {
        match level {
            PlayingLevel::Youth => YOUTH,
            PlayingLevel::HighSchool => HIGH_SCHOOL,
            PlayingLevel::College => COLLEGE,
            PlayingLevel::Professional => PROFESSIONAL,
        }
    }
}
