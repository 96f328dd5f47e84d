// ABOUTME: Shared test utilities for integration tests
// ABOUTME: In-memory SensorStore mock, record builders, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
#![allow(missing_docs)]

//! Shared test utilities for `swinglab`
//!
//! Provides an in-memory [`SensorStore`] implementation with fault
//! injection, plus builders for session and swing records.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use swinglab::errors::{AppError, AppResult};
use swinglab::models::{AthleteProfile, PlayingLevel, Session, Swing, SwingDistance};
use swinglab::storage::SensorStore;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Fixed athlete id used across tests
pub fn test_athlete_id() -> Uuid {
    Uuid::from_u128(0x5157_494e_474c_4142)
}

/// Session record with a date and the given id
pub fn make_session(id: &str, date: Option<NaiveDate>) -> Session {
    Session {
        id: id.to_owned(),
        session_date: date,
        swing_count: 25,
        avg_exit_velocity: Some(88.0),
        max_exit_velocity: Some(101.0),
        avg_launch_angle: Some(14.5),
        max_distance: Some(340.0),
    }
}

/// Swing record with only the required fields populated
pub fn base_swing(id: &str, session_id: &str, exit_velocity: f64) -> Swing {
    Swing {
        id: id.to_owned(),
        session_id: session_id.to_owned(),
        exit_velocity,
        launch_angle: None,
        distance: None,
        spray_x: None,
        spray_z: None,
        poi_x: None,
        poi_y: None,
        poi_z: None,
    }
}

/// Swing carrying spray coordinates
pub fn spray_swing(id: &str, session_id: &str, spray_x: f64, spray_z: f64) -> Swing {
    let mut swing = base_swing(id, session_id, 90.0);
    swing.spray_x = Some(spray_x);
    swing.spray_z = Some(spray_z);
    swing
}

/// Swing carrying a strike-zone-eligible pitch location
pub fn pitch_swing(id: &str, session_id: &str, poi_x: f64, poi_y: f64) -> Swing {
    let mut swing = base_swing(id, session_id, 90.0);
    swing.poi_x = Some(poi_x);
    swing.poi_y = Some(poi_y);
    swing.poi_z = Some(12.0);
    swing
}

/// In-memory sensor store with request counting and fault injection.
///
/// Page methods serve slices of the stored collections in insertion order,
/// mimicking the backend's sorted range responses. Setting a
/// `fail_*_from_offset` makes the matching page method error once the
/// requested offset reaches that value, which simulates a backend failure
/// mid-pagination.
#[derive(Default)]
pub struct MockSensorStore {
    pub profile: Option<AthleteProfile>,
    pub sessions: Vec<Session>,
    pub swings: Vec<Swing>,
    pub fail_profile: bool,
    pub fail_sessions_from_offset: Option<usize>,
    pub fail_swings_from_offset: Option<usize>,
    pub session_requests: AtomicUsize,
    pub swing_requests: AtomicUsize,
    pub distance_requests: AtomicUsize,
}

impl MockSensorStore {
    pub fn with_profile(athlete_id: Uuid, level: PlayingLevel) -> Self {
        Self {
            profile: Some(AthleteProfile {
                athlete_id,
                playing_level: level,
            }),
            ..Self::default()
        }
    }

    fn page<T: Clone>(records: &[T], offset: usize, limit: usize) -> Vec<T> {
        records.iter().skip(offset).take(limit).cloned().collect()
    }

    fn check_fail(fail_from: Option<usize>, offset: usize, what: &str) -> AppResult<()> {
        if fail_from.is_some_and(|at| offset >= at) {
            return Err(AppError::external_service(format!(
                "simulated backend failure fetching {what} at offset {offset}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SensorStore for MockSensorStore {
    async fn athlete_profile(&self, athlete_id: Uuid) -> AppResult<Option<AthleteProfile>> {
        if self.fail_profile {
            return Err(AppError::external_service("simulated profile lookup error"));
        }
        Ok(self
            .profile
            .clone()
            .filter(|p| p.athlete_id == athlete_id))
    }

    async fn session_page(
        &self,
        _athlete_id: Uuid,
        offset: usize,
        limit: usize,
    ) -> AppResult<Vec<Session>> {
        self.session_requests.fetch_add(1, Ordering::SeqCst);
        Self::check_fail(self.fail_sessions_from_offset, offset, "sessions")?;
        Ok(Self::page(&self.sessions, offset, limit))
    }

    async fn swing_page(
        &self,
        session_ids: &[String],
        offset: usize,
        limit: usize,
    ) -> AppResult<Vec<Swing>> {
        self.swing_requests.fetch_add(1, Ordering::SeqCst);
        Self::check_fail(self.fail_swings_from_offset, offset, "swings")?;
        let matching: Vec<Swing> = self
            .swings
            .iter()
            .filter(|s| session_ids.contains(&s.session_id))
            .filter(|s| s.spray_x.is_some() && s.spray_z.is_some())
            .cloned()
            .collect();
        Ok(Self::page(&matching, offset, limit))
    }

    async fn swing_distance_page(
        &self,
        session_ids: &[String],
        offset: usize,
        limit: usize,
    ) -> AppResult<Vec<SwingDistance>> {
        self.distance_requests.fetch_add(1, Ordering::SeqCst);
        let matching: Vec<SwingDistance> = self
            .swings
            .iter()
            .filter(|s| session_ids.contains(&s.session_id))
            .map(|s| SwingDistance {
                session_id: s.session_id.clone(),
                distance: s.distance,
            })
            .collect();
        Ok(Self::page(&matching, offset, limit))
    }

    async fn any_spray_swings(&self, session_ids: &[String]) -> AppResult<bool> {
        Ok(self
            .swings
            .iter()
            .filter(|s| session_ids.contains(&s.session_id))
            .any(|s| s.spray_position().is_some()))
    }

    async fn any_pitch_swings(&self, session_ids: &[String]) -> AppResult<bool> {
        Ok(self
            .swings
            .iter()
            .filter(|s| session_ids.contains(&s.session_id))
            .any(|s| s.pitch_location().is_some()))
    }
}
