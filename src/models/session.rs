// ABOUTME: Practice/testing session models including the derived SessionSummary
// ABOUTME: Sessions carry backend-precomputed stats; average distance is derived locally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One practice/testing event for an athlete, as stored by the backend.
///
/// The backend precomputes the per-session velocity and launch-angle stats;
/// average distance is absent upstream and must be derived from the raw
/// swing collection (see [`crate::intelligence::session_summary`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier
    pub id: String,
    /// Session date (date-only, no time component). Missing or malformed
    /// dates survive only under the unbounded time window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_date: Option<NaiveDate>,
    /// Number of swings recorded in the session
    pub swing_count: u32,
    /// Backend-precomputed average exit velocity (mph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_exit_velocity: Option<f64>,
    /// Backend-precomputed peak exit velocity (mph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_exit_velocity: Option<f64>,
    /// Backend-precomputed average launch angle (degrees)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_launch_angle: Option<f64>,
    /// Backend-precomputed peak distance (feet)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
}

/// A [`Session`] augmented with the locally computed average distance.
///
/// `avg_distance` is `None` (never zero) for sessions with no swing whose
/// distance is a positive number; zero is a legitimate value for other
/// metrics and must not be conflated with "no data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// The backend session record
    #[serde(flatten)]
    pub session: Session,
    /// Mean distance over swings with a positive recorded distance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_distance: Option<f64>,
}
