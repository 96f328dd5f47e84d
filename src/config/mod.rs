// ABOUTME: Classification threshold configuration keyed by playing level
// ABOUTME: Exit-velocity heat-tier breakpoint tables for youth through professional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

//! Configuration data for metric classification.
//!
//! Threshold tables encode domain knowledge about what exit velocity counts
//! as "hot" at each competitive level. They are immutable constant data and
//! are never recomputed from an athlete's observed samples.

/// Exit-velocity heat-tier breakpoint tables
pub mod tiers;

pub use tiers::TierThresholds;
