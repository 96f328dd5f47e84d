// ABOUTME: Athlete profile model and competitive playing level
// ABOUTME: Playing level selects the heat-tier breakpoint table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Competitive tier used to select exit-velocity heat-tier breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlayingLevel {
    /// Youth / travel ball
    Youth,
    /// High school (also the fallback for unrecognized levels)
    #[default]
    HighSchool,
    /// College
    College,
    /// Professional
    Professional,
}

impl PlayingLevel {
    /// Parse a playing level from a backend string (case-insensitive).
    ///
    /// Unrecognized values fall back to [`PlayingLevel::HighSchool`] so a
    /// misconfigured profile still gets a sensible breakpoint table.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "youth" => Self::Youth,
            "college" => Self::College,
            "professional" | "pro" => Self::Professional,
            _ => Self::HighSchool,
        }
    }

    /// Get string representation for serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Youth => "youth",
            Self::HighSchool => "high_school",
            Self::College => "college",
            Self::Professional => "professional",
        }
    }
}

/// Minimal athlete record consumed from the sensor store.
///
/// Absence of a profile is the terminal "no data" state for the whole
/// pipeline, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Opaque athlete identifier used to key both record collections
    pub athlete_id: Uuid,
    /// Competitive level for tier classification
    pub playing_level: PlayingLevel,
}
