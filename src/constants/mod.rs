// ABOUTME: Engine constants with domain-separated organization
// ABOUTME: Pagination caps, time-window lengths, and spatial classification cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

//! Constants module
//!
//! Centrally defined constants grouped by domain. Classification behavior
//! depends on these exact values; they must never be duplicated as literals
//! at call sites.

/// Pagination against the hosted sensor store
pub mod pagination {
    /// Rows per range request. The backend silently caps any single response
    /// at 1000 rows regardless of how the request was phrased, so this is
    /// both the default and the useful maximum.
    pub const DEFAULT_PAGE_SIZE: usize = 1000;

    /// Smallest page size the fetch driver will accept
    pub const MIN_PAGE_SIZE: usize = 1;

    /// Largest page size the fetch driver will accept. Requesting more than
    /// the backend cap would make every page look short and terminate the
    /// loop after one request.
    pub const MAX_PAGE_SIZE: usize = 1000;
}

/// Rolling time-window lengths
pub mod windows {
    /// "Last month" window, fixed calendar days (not month-aware)
    pub const ONE_MONTH_DAYS: i64 = 30;

    /// "Last three months" window, fixed calendar days
    pub const THREE_MONTHS_DAYS: i64 = 90;

    /// "Last six months" window, fixed calendar days
    pub const SIX_MONTHS_DAYS: i64 = 180;
}

/// Spatial classification cutoffs and grid defaults
pub mod spatial {
    /// Minimum pitch-location height for strike-zone eligibility. Values at
    /// or below this are sensor noise / out-of-zone contact.
    pub const POI_MIN_HEIGHT: f64 = 5.0;

    /// Spray x below this raw value classifies as the left (pull) third
    pub const FIELD_LEFT_CUTOFF: f64 = -50.0;

    /// Spray x above this raw value classifies as the right (opposite) third
    pub const FIELD_RIGHT_CUTOFF: f64 = 50.0;

    /// Half-width of the assumed raw spray-x range used to remap the mean
    /// spray position onto a 0-100 tendency scale
    pub const SPRAY_TENDENCY_HALF_RANGE: f64 = 200.0;

    /// Normalized coordinate assigned to every sample on a degenerate axis
    /// (observed max equals observed min)
    pub const DEGENERATE_AXIS_MIDPOINT: f64 = 0.5;

    /// Headline strike-zone grid dimension (3x3)
    pub const STRIKE_ZONE_DIM: usize = 3;

    /// Default dense heatmap grid dimension
    pub const DEFAULT_HEATMAP_DIM: usize = 5;
}
