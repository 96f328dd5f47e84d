// ABOUTME: Core domain models for batted-ball analytics
// ABOUTME: Sessions, swings, athlete profiles, and playing levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

//! Domain models shared across the engine.
//!
//! All models are transient: they are constructed per fetch cycle from the
//! sensor store and fully replaced on every reload. Nothing here is
//! persisted by this crate.

/// Athlete profile and playing level
pub mod athlete;
/// Practice/testing session records and derived summaries
pub mod session;
/// Per-swing batted-ball records and projections
pub mod swing;

pub use athlete::{AthleteProfile, PlayingLevel};
pub use session::{Session, SessionSummary};
pub use swing::{Swing, SwingDistance};
