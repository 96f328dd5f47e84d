// ABOUTME: Batted-ball analytics aggregation engine for swing sensor data
// ABOUTME: Library root wiring errors, constants, models, storage, and intelligence modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

#![deny(unsafe_code)]

//! # Swinglab
//!
//! Analytics aggregation engine for batted-ball and pitch-location sensor
//! data. The crate is a pure in-process transformation layer: it reads two
//! already-authorized record collections (sessions, swings) through the
//! [`storage::SensorStore`] trait and produces the aggregated, classified
//! records a chart-rendering layer consumes.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Engine constants organized by domain (pagination, windows, spatial)
//! - **config**: Playing-level keyed heat-tier threshold tables
//! - **models**: Domain models (`Session`, `Swing`, `AthleteProfile`, ...)
//! - **storage**: Read-only sensor store trait and the bulk paginated fetch driver
//! - **intelligence**: Time-window filtering, session aggregation, spatial zone
//!   classification, heat tiers, and the trends pipeline tying them together

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Playing-level keyed classification thresholds
pub mod config;

/// Core data models (Session, Swing, AthleteProfile, PlayingLevel)
pub mod models;

/// Sensor store trait and bulk paginated fetching
pub mod storage;

/// Analytics: time windows, session summaries, spatial zones, heat tiers, trends
pub mod intelligence;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{AthleteProfile, PlayingLevel, Session, SessionSummary, Swing, SwingDistance};
pub use storage::{fetch_all_pages, PagedFetch, SensorStore};
