// ABOUTME: Rolling time-window filter applied consistently across linked record sets
// ABOUTME: Fixed calendar-day windows with an unbounded variant that bypasses date checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::windows::{ONE_MONTH_DAYS, SIX_MONTHS_DAYS, THREE_MONTHS_DAYS};
use crate::models::{SessionSummary, Swing};

/// Rolling window selecting which sessions reach the trends view.
///
/// Window lengths are fixed calendar-day counts (30/90/180), not
/// month-aware. This is deliberate and must be preserved exactly so
/// filtered views stay reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    /// Last 30 days
    OneMonth,
    /// Last 90 days
    ThreeMonths,
    /// Last 180 days
    SixMonths,
    /// Everything, unfiltered
    #[default]
    AllTime,
}

impl TimeWindow {
    /// Parse a window tag from a UI string (case-insensitive).
    ///
    /// Unrecognized tags fall back to [`TimeWindow::AllTime`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "1m" | "one_month" | "1month" => Self::OneMonth,
            "3m" | "three_months" | "3months" => Self::ThreeMonths,
            "6m" | "six_months" | "6months" => Self::SixMonths,
            _ => Self::AllTime,
        }
    }

    /// Get string representation for serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "one_month",
            Self::ThreeMonths => "three_months",
            Self::SixMonths => "six_months",
            Self::AllTime => "all_time",
        }
    }

    /// Window length in calendar days; `None` for the unbounded window
    #[must_use]
    pub const fn days(self) -> Option<i64> {
        match self {
            Self::OneMonth => Some(ONE_MONTH_DAYS),
            Self::ThreeMonths => Some(THREE_MONTHS_DAYS),
            Self::SixMonths => Some(SIX_MONTHS_DAYS),
            Self::AllTime => None,
        }
    }

    /// Earliest session date retained under this window, relative to `now`;
    /// `None` for the unbounded window.
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<NaiveDate> {
        self.days().map(|d| (now - Duration::days(d)).date_naive())
    }
}

/// Filter sessions to the window, then propagate the retained session-id set
/// to the dependent swing collection joined by foreign key.
///
/// The unbounded window returns both inputs unchanged, bypassing the date
/// comparison entirely, so sessions with missing or malformed dates still
/// surface under "all time". Under any bounded window a session is retained
/// when its date is on or after the cutoff (`>=`); dateless sessions are
/// silently dropped.
#[must_use]
pub fn apply_window(
    sessions: Vec<SessionSummary>,
    swings: Vec<Swing>,
    window: TimeWindow,
    now: DateTime<Utc>,
) -> (Vec<SessionSummary>, Vec<Swing>) {
    let Some(cutoff) = window.cutoff(now) else {
        return (sessions, swings);
    };

    let sessions: Vec<SessionSummary> = sessions
        .into_iter()
        .filter(|s| s.session.session_date.is_some_and(|d| d >= cutoff))
        .collect();

    let retained: HashSet<&str> = sessions.iter().map(|s| s.session.id.as_str()).collect();
    let swings = swings
        .into_iter()
        .filter(|sw| retained.contains(sw.session_id.as_str()))
        .collect();

    (sessions, swings)
}
