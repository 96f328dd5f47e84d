// ABOUTME: Analytics engine modules for batted-ball trend analysis
// ABOUTME: Time windows, session aggregation, spatial zones, heat tiers, trends pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

//! Analytics over fetched session and swing collections.
//!
//! Every function here is a pure transformation of its inputs; the only
//! module touching I/O is [`trends`], which orchestrates the full load
//! cycle against a [`crate::storage::SensorStore`].

/// Exit-velocity heat-tier classification
pub mod heat_tier;
/// Per-session average-distance aggregation
pub mod session_summary;
/// Spray-chart and strike-zone spatial classification
pub mod spatial;
/// Rolling time-window filtering over linked record sets
pub mod time_window;
/// Full fetch-filter-aggregate-classify pipeline
pub mod trends;

pub use heat_tier::HeatTier;
pub use spatial::{FieldThirds, GridSpec, ZoneCell, ZoneMetric};
pub use time_window::TimeWindow;
pub use trends::{TrendsEngine, TrendsReport};
