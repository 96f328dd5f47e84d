// ABOUTME: Exit-velocity heat-tier classification against playing-level breakpoints
// ABOUTME: Maps a continuous velocity onto five ordered tiers via constant threshold tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

use serde::{Deserialize, Serialize};

use crate::config::TierThresholds;
use crate::models::PlayingLevel;

/// Discrete heat tier for an exit velocity, hottest to coldest.
///
/// The four breakpoints of a [`TierThresholds`] table partition the velocity
/// axis into these five tiers. Breakpoints encode what velocity is "hot"
/// for a competitive level; they are constants, never derived from any one
/// athlete's observed samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatTier {
    /// At or above the hot breakpoint
    Hot,
    /// At or above the warm breakpoint
    Warm,
    /// At or above the cool breakpoint
    Cool,
    /// At or above the cold breakpoint
    Cold,
    /// Below every breakpoint
    Ice,
}

impl HeatTier {
    /// Classify an exit velocity against the breakpoint table for `level`.
    ///
    /// Breakpoints are compared in descending order; the first one the value
    /// meets or exceeds wins, else the coldest tier.
    #[must_use]
    pub fn classify(exit_velocity: f64, level: PlayingLevel) -> Self {
        Self::classify_with(exit_velocity, TierThresholds::for_level(level))
    }

    /// Classify against an explicit breakpoint table
    #[must_use]
    pub fn classify_with(exit_velocity: f64, thresholds: TierThresholds) -> Self {
        if exit_velocity >= thresholds.hot {
            Self::Hot
        } else if exit_velocity >= thresholds.warm {
            Self::Warm
        } else if exit_velocity >= thresholds.cool {
            Self::Cool
        } else if exit_velocity >= thresholds.cold {
            Self::Cold
        } else {
            Self::Ice
        }
    }

    /// Classify using a backend level string, falling back to the
    /// high-school table for unrecognized levels.
    #[must_use]
    pub fn classify_for_level_str(exit_velocity: f64, level: &str) -> Self {
        Self::classify(exit_velocity, PlayingLevel::parse(level))
    }

    /// Get string representation for serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Cold => "cold",
            Self::Ice => "ice",
        }
    }
}
