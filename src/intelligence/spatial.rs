// ABOUTME: Spatial zone classification for spray-chart and pitch-location samples
// ABOUTME: Data-driven normalization, catcher's-view mirroring, grid binning, field thirds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

//! Spatial zone classification.
//!
//! Two coordinate kinds get two different treatments:
//!
//! - **Pitch location** (strike-zone grids, dense heatmaps) is normalized
//!   against the *observed* per-axis min/max. Pitch-location calibration
//!   varies session to session, so a fixed physical strike-zone box would
//!   misplace tightly clustered samples; the data-driven frame stretches the
//!   cluster to fill the grid.
//! - **Spray position** (field thirds, tendency scalar) uses fixed absolute
//!   cutoffs in the sensor's native unit. Spray geometry is already
//!   calibrated against a fixed field scale upstream.
//!
//! All grid output is expressed in catcher's view: the normalized horizontal
//! coordinate is mirrored (`1 - x`) before binning so left/right matches a
//! catcher facing the batter rather than the raw sensor sense.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::spatial::{
    DEFAULT_HEATMAP_DIM, DEGENERATE_AXIS_MIDPOINT, FIELD_LEFT_CUTOFF, FIELD_RIGHT_CUTOFF,
    SPRAY_TENDENCY_HALF_RANGE, STRIKE_ZONE_DIM,
};
use crate::models::Swing;

/// Metric aggregated per zone cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZoneMetric {
    /// Mean exit velocity (mph)
    #[default]
    ExitVelocity,
    /// Mean launch angle (degrees)
    LaunchAngle,
}

impl ZoneMetric {
    /// Extract this metric from a swing, if recorded
    #[must_use]
    pub const fn value(self, swing: &Swing) -> Option<f64> {
        match self {
            Self::ExitVelocity => Some(swing.exit_velocity),
            Self::LaunchAngle => swing.launch_angle,
        }
    }

    /// Get string representation for serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExitVelocity => "exit_velocity",
            Self::LaunchAngle => "launch_angle",
        }
    }
}

/// Grid resolution for zone binning. Dimensions are clamped to at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of rows (vertical cells); row 0 is the bottom of the zone
    pub rows: usize,
    /// Number of columns (horizontal cells); col 0 is the catcher's left
    pub cols: usize,
}

impl GridSpec {
    /// Create a grid, clamping each dimension to at least 1
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// The headline 3x3 strike-zone grid
    #[must_use]
    pub const fn strike_zone() -> Self {
        Self {
            rows: STRIKE_ZONE_DIM,
            cols: STRIKE_ZONE_DIM,
        }
    }

    /// A square dense heatmap grid of dimension `dim`
    #[must_use]
    pub fn heatmap(dim: usize) -> Self {
        Self::new(dim, dim)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::heatmap(DEFAULT_HEATMAP_DIM)
    }
}

/// One non-empty grid cell with its swing count and metric aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCell {
    /// Row index, 0-based from the bottom
    pub row: usize,
    /// Column index, 0-based from the catcher's left
    pub col: usize,
    /// Number of swings binned into this cell
    pub count: usize,
    /// Mean of the selected metric over swings in the cell that carry it;
    /// `None` when none of them do
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
}

/// Observed per-axis value range used for normalization
#[derive(Debug, Clone, Copy)]
struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    fn of(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut range: Option<Self> = None;
        for v in values {
            range = Some(range.map_or(Self { min: v, max: v }, |r| Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }));
        }
        range
    }

    /// Normalize a value into [0, 1]. A degenerate axis (max == min) pins
    /// every sample to the midpoint instead of dividing by zero.
    fn normalize(self, value: f64) -> f64 {
        let width = self.max - self.min;
        if width == 0.0 {
            DEGENERATE_AXIS_MIDPOINT
        } else {
            (value - self.min) / width
        }
    }
}

/// Bin a normalized coordinate into `cells` buckets, clamping the top edge
/// so a value of exactly 1.0 lands in the last cell.
fn bin(normalized: f64, cells: usize) -> usize {
    ((normalized * cells as f64).floor() as usize).min(cells - 1)
}

/// Classify strike-zone-eligible swings into a grid of `grid` resolution.
///
/// Coordinates are normalized per axis against the observed range, the
/// horizontal coordinate is mirrored into catcher's view, and each swing is
/// assigned to `floor(nx * cols)` / `floor(ny * rows)` clamped to the grid.
/// Returns only non-empty cells, ordered by (row, col).
#[must_use]
pub fn pitch_location_grid(swings: &[Swing], grid: GridSpec, metric: ZoneMetric) -> Vec<ZoneCell> {
    let eligible: Vec<(&Swing, (f64, f64))> = swings
        .iter()
        .filter_map(|s| s.pitch_location().map(|loc| (s, loc)))
        .collect();

    let Some(x_range) = AxisRange::of(eligible.iter().map(|(_, (x, _))| *x)) else {
        return Vec::new();
    };
    // Non-empty eligible set, so the y range exists as well
    let Some(y_range) = AxisRange::of(eligible.iter().map(|(_, (_, y))| *y)) else {
        return Vec::new();
    };

    let mut cells: Vec<(usize, f64, usize)> = vec![(0, 0.0, 0); grid.rows * grid.cols];
    for (swing, (x, y)) in &eligible {
        // Catcher's view: mirror horizontally before binning
        let nx = 1.0 - x_range.normalize(*x);
        let ny = y_range.normalize(*y);
        let col = bin(nx, grid.cols);
        let row = bin(ny, grid.rows);

        let cell = &mut cells[row * grid.cols + col];
        cell.0 += 1;
        if let Some(value) = metric.value(swing) {
            cell.1 += value;
            cell.2 += 1;
        }
    }

    let out: Vec<ZoneCell> = cells
        .into_iter()
        .enumerate()
        .filter(|(_, (count, _, _))| *count > 0)
        .map(|(idx, (count, sum, metric_count))| ZoneCell {
            row: idx / grid.cols,
            col: idx % grid.cols,
            count,
            mean: (metric_count > 0).then(|| sum / metric_count as f64),
        })
        .collect();

    debug!(
        eligible = eligible.len(),
        cells = out.len(),
        rows = grid.rows,
        cols = grid.cols,
        metric = metric.as_str(),
        "classified pitch locations into grid"
    );
    out
}

/// Swing counts across the three linear spray-chart field thirds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FieldThirds {
    /// Pull side (spray x strictly below the left cutoff)
    pub left: usize,
    /// Middle of the field
    pub center: usize,
    /// Opposite field (spray x strictly above the right cutoff)
    pub right: usize,
}

impl FieldThirds {
    /// Total spray-eligible swings counted
    #[must_use]
    pub const fn total(&self) -> usize {
        self.left + self.center + self.right
    }
}

/// Count spray-eligible swings per field third.
///
/// Raw sensor units, fixed cutoffs, no normalization: x < -50 is the left
/// (pull) third, x > +50 the right (opposite) third, everything else
/// center. Both boundary values classify as center.
///
/// Uses a rayon fold/reduce for single-pass parallel counting over large
/// swing histories.
#[must_use]
pub fn field_thirds(swings: &[Swing]) -> FieldThirds {
    let counts = swings
        .par_iter()
        .filter_map(Swing::spray_position)
        .fold(
            || [0usize; 3],
            |mut counts, (x, _z)| {
                let idx = if x < FIELD_LEFT_CUTOFF {
                    0
                } else if x > FIELD_RIGHT_CUTOFF {
                    2
                } else {
                    1
                };
                counts[idx] += 1;
                counts
            },
        )
        .reduce(
            || [0usize; 3],
            |a, b| [a[0] + b[0], a[1] + b[1], a[2] + b[2]],
        );

    FieldThirds {
        left: counts[0],
        center: counts[1],
        right: counts[2],
    }
}

/// Directional tendency scalar summarizing pull/oppo bias.
///
/// Mean raw spray x over all spray-eligible swings, remapped linearly from
/// the assumed [-200, +200] sensor range onto [0, 100] and clamped. `None`
/// when no swing is spray-eligible.
#[must_use]
pub fn spray_tendency(swings: &[Swing]) -> Option<f64> {
    let xs: Vec<f64> = swings
        .iter()
        .filter_map(Swing::spray_position)
        .map(|(x, _z)| x)
        .collect();
    if xs.is_empty() {
        return None;
    }

    let mean = xs.iter().sum::<f64>() / xs.len() as f64;
    let position =
        (mean + SPRAY_TENDENCY_HALF_RANGE) / (2.0 * SPRAY_TENDENCY_HALF_RANGE) * 100.0;
    Some(position.clamp(0.0, 100.0))
}
