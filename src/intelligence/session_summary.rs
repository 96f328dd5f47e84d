// ABOUTME: Per-session average-distance aggregation over the raw swing collection
// ABOUTME: Joins distance samples back onto parent sessions to fill the backend gap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

//! Session aggregation.
//!
//! The backend's session rows carry precomputed velocity and launch-angle
//! stats but no average distance; that is derived here from the raw
//! distance-only swing projection. The grouping runs once per load cycle
//! against the complete, unfiltered swing history: a session's average
//! distance is an immutable property of the session, independent of the
//! currently selected time window, so window changes re-filter the summary
//! list without rescanning swings.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Session, SessionSummary, SwingDistance};

/// Mean recorded distance per session id.
///
/// Only swings whose distance is present and strictly positive count;
/// sessions with no such swing are absent from the map (undefined, not
/// zero).
#[must_use]
pub fn average_distance_by_session(swings: &[SwingDistance]) -> HashMap<String, f64> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for swing in swings {
        if let Some(distance) = swing.recorded_distance() {
            let entry = sums.entry(swing.session_id.as_str()).or_insert((0.0, 0));
            entry.0 += distance;
            entry.1 += 1;
        }
    }

    let averages: HashMap<String, f64> = sums
        .into_iter()
        .map(|(session_id, (sum, count))| (session_id.to_owned(), sum / count as f64))
        .collect();

    debug!(
        sessions_with_distance = averages.len(),
        swings = swings.len(),
        "computed per-session average distances"
    );
    averages
}

/// Augment backend session rows with the derived average distance.
///
/// Output order matches input order. Sessions without an entry in
/// `distances` report `avg_distance = None`.
#[must_use]
pub fn summarize_sessions(
    sessions: Vec<Session>,
    distances: &HashMap<String, f64>,
) -> Vec<SessionSummary> {
    sessions
        .into_iter()
        .map(|session| {
            let avg_distance = distances.get(&session.id).copied();
            SessionSummary {
                session,
                avg_distance,
            }
        })
        .collect()
}
