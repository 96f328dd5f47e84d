// ABOUTME: Full trends pipeline: fetch, window-filter, aggregate, classify
// ABOUTME: One sequential load cycle per screen refresh, replaced atomically on completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

//! Trends pipeline orchestration.
//!
//! One load cycle runs fetch -> filter -> aggregate -> classify and returns
//! a fully assembled [`TrendsReport`]. The network calls are sequential
//! within the cooperative task (sessions, then swings, then the distance
//! projection) except the two data-availability probes, which have no
//! ordering dependency and are awaited jointly. Every cycle constructs
//! fresh collections; the caller swaps in the finished report atomically, so
//! no intermediate state is ever rendered. A manual refresh re-runs the
//! whole cycle from scratch.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::constants::pagination::DEFAULT_PAGE_SIZE;
use crate::constants::spatial::DEFAULT_HEATMAP_DIM;
use crate::errors::AppResult;
use crate::intelligence::session_summary::{average_distance_by_session, summarize_sessions};
use crate::intelligence::spatial::{
    field_thirds, pitch_location_grid, spray_tendency, FieldThirds, GridSpec, ZoneCell, ZoneMetric,
};
use crate::intelligence::time_window::{apply_window, TimeWindow};
use crate::models::{PlayingLevel, SessionSummary, Swing};
use crate::storage::{clamp_page_size, fetch_all_pages, SensorStore};

/// Assembled analytics for one athlete, window, and metric selection.
///
/// Consumed by the rendering collaborator; everything needed to draw the
/// trends screen without further backend reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendsReport {
    /// Playing level driving heat-tier rendering
    pub playing_level: PlayingLevel,
    /// Window the session/swing lists were filtered to
    pub window: TimeWindow,
    /// Metric aggregated in the zone grids
    pub metric: ZoneMetric,
    /// Time-filtered session summaries, backend date order
    pub sessions: Vec<SessionSummary>,
    /// Time-filtered spray-eligible swings, backend id order
    pub swings: Vec<Swing>,
    /// Spray-chart field-third counts
    pub field_thirds: FieldThirds,
    /// Pull/oppo tendency scalar on a 0-100 scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spray_tendency: Option<f64>,
    /// Headline 3x3 strike-zone cells
    pub strike_zone: Vec<ZoneCell>,
    /// Dense heatmap cells
    pub heatmap: Vec<ZoneCell>,
    /// Whether any swing in range carries spray coordinates
    pub has_spray_data: bool,
    /// Whether any swing in range carries a strike-zone-eligible pitch location
    pub has_pitch_data: bool,
    /// False when any paginated fetch aborted early and the report holds
    /// partial data. Partial reports are displayable, never fatal.
    pub complete: bool,
}

impl TrendsReport {
    /// The empty report rendered when the athlete has no data
    #[must_use]
    pub const fn empty(window: TimeWindow, metric: ZoneMetric) -> Self {
        Self {
            playing_level: PlayingLevel::HighSchool,
            window,
            metric,
            sessions: Vec::new(),
            swings: Vec::new(),
            field_thirds: FieldThirds {
                left: 0,
                center: 0,
                right: 0,
            },
            spray_tendency: None,
            strike_zone: Vec::new(),
            heatmap: Vec::new(),
            has_spray_data: false,
            has_pitch_data: false,
            complete: true,
        }
    }
}

/// Runs the full batted-ball trends load cycle against a [`SensorStore`]
pub struct TrendsEngine {
    store: Arc<dyn SensorStore>,
    page_size: usize,
    heatmap_dim: usize,
}

impl TrendsEngine {
    /// Create an engine with the backend's default page size and heatmap
    /// resolution
    #[must_use]
    pub fn new(store: Arc<dyn SensorStore>) -> Self {
        Self {
            store,
            page_size: DEFAULT_PAGE_SIZE,
            heatmap_dim: DEFAULT_HEATMAP_DIM,
        }
    }

    /// Override the fetch page size (clamped to what the backend honors)
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = clamp_page_size(page_size);
        self
    }

    /// Override the dense heatmap grid dimension
    #[must_use]
    pub fn with_heatmap_dim(mut self, dim: usize) -> Self {
        self.heatmap_dim = dim.max(1);
        self
    }

    /// Run one full load cycle for an athlete.
    ///
    /// Missing athlete records yield the empty report, not an error. Backend
    /// failures inside the paginated fetches degrade to a partial report
    /// with `complete = false`. Only the initial profile lookup can fail the
    /// call.
    ///
    /// # Errors
    ///
    /// Returns an error only when the athlete profile lookup itself fails.
    pub async fn load(
        &self,
        athlete_id: Uuid,
        window: TimeWindow,
        metric: ZoneMetric,
        now: DateTime<Utc>,
    ) -> AppResult<TrendsReport> {
        let store = self.store.as_ref();

        let Some(profile) = store.athlete_profile(athlete_id).await? else {
            info!(%athlete_id, "no athlete record; returning empty trends report");
            return Ok(TrendsReport::empty(window, metric));
        };

        let sessions = fetch_all_pages(self.page_size, |offset, limit| {
            store.session_page(athlete_id, offset, limit)
        })
        .await;
        if sessions.records.is_empty() {
            info!(%athlete_id, "athlete has no sessions; returning empty trends report");
            let mut report = TrendsReport::empty(window, metric);
            report.playing_level = profile.playing_level;
            report.complete = sessions.complete;
            return Ok(report);
        }

        let session_ids: Vec<String> = sessions.records.iter().map(|s| s.id.clone()).collect();

        // Availability probes are independent of each other; issue jointly
        let (spray_probe, pitch_probe) = tokio::join!(
            store.any_spray_swings(&session_ids),
            store.any_pitch_swings(&session_ids),
        );
        let has_spray_data = spray_probe.unwrap_or_else(|err| {
            warn!(error = %err, "spray availability probe failed; assuming no data");
            false
        });
        let has_pitch_data = pitch_probe.unwrap_or_else(|err| {
            warn!(error = %err, "pitch availability probe failed; assuming no data");
            false
        });

        let swings = fetch_all_pages(self.page_size, |offset, limit| {
            store.swing_page(&session_ids, offset, limit)
        })
        .await;

        let distance_swings = fetch_all_pages(self.page_size, |offset, limit| {
            store.swing_distance_page(&session_ids, offset, limit)
        })
        .await;

        // Average distance is a property of the session, not of the selected
        // window, so the grouping runs over the complete unfiltered history
        let distances = average_distance_by_session(&distance_swings.records);
        let summaries = summarize_sessions(sessions.records, &distances);

        let (sessions_in_window, swings_in_window) =
            apply_window(summaries, swings.records, window, now);

        let field_thirds = field_thirds(&swings_in_window);
        let spray_tendency = spray_tendency(&swings_in_window);
        let strike_zone = pitch_location_grid(&swings_in_window, GridSpec::strike_zone(), metric);
        let heatmap =
            pitch_location_grid(&swings_in_window, GridSpec::heatmap(self.heatmap_dim), metric);

        let complete = sessions.complete && swings.complete && distance_swings.complete;
        info!(
            %athlete_id,
            window = window.as_str(),
            sessions = sessions_in_window.len(),
            swings = swings_in_window.len(),
            complete,
            "trends load cycle finished"
        );

        Ok(TrendsReport {
            playing_level: profile.playing_level,
            window,
            metric,
            sessions: sessions_in_window,
            swings: swings_in_window,
            field_thirds,
            spray_tendency,
            strike_zone,
            heatmap,
            has_spray_data,
            has_pitch_data,
            complete,
        })
    }
}
