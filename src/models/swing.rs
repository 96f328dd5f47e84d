// ABOUTME: Per-swing batted-ball models with optional spatial coordinate pairs
// ABOUTME: Spray position and pitch-location-at-contact carry independent eligibility rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

use serde::{Deserialize, Serialize};

use crate::constants::spatial::POI_MIN_HEIGHT;

/// One batted-ball event. Many swings belong to exactly one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swing {
    /// Unique swing identifier (the backend's sort column)
    pub id: String,
    /// Owning session identifier (foreign key)
    pub session_id: String,
    /// Exit velocity in mph; required, used for heat-tier classification
    pub exit_velocity: f64,
    /// Launch angle in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_angle: Option<f64>,
    /// Carry distance in feet; non-positive values mean "not recorded"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Spray-chart horizontal position, sensor-native units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spray_x: Option<f64>,
    /// Spray-chart depth position, sensor-native units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spray_z: Option<f64>,
    /// Pitch-location-at-contact horizontal coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_x: Option<f64>,
    /// Pitch-location-at-contact height coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_y: Option<f64>,
    /// Pitch-location-at-contact depth coordinate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poi_z: Option<f64>,
}

impl Swing {
    /// Spray-chart coordinates, if the swing is eligible for spray
    /// classification (both spray coordinates present).
    #[must_use]
    pub fn spray_position(&self) -> Option<(f64, f64)> {
        match (self.spray_x, self.spray_z) {
            (Some(x), Some(z)) => Some((x, z)),
            _ => None,
        }
    }

    /// Pitch-location coordinates, if the swing is eligible for strike-zone
    /// classification: `poi_x` and `poi_y` present and `poi_y` strictly
    /// above [`POI_MIN_HEIGHT`]. Values at or below the threshold are sensor
    /// noise or out-of-zone contact and are excluded.
    #[must_use]
    pub fn pitch_location(&self) -> Option<(f64, f64)> {
        match (self.poi_x, self.poi_y) {
            (Some(x), Some(y)) if y > POI_MIN_HEIGHT => Some((x, y)),
            _ => None,
        }
    }

    /// Distance, if present and strictly positive (the eligibility rule for
    /// the average-distance aggregation).
    #[must_use]
    pub fn recorded_distance(&self) -> Option<f64> {
        self.distance.filter(|d| *d > 0.0)
    }
}

/// Distance-only projection of the swing collection, used solely for the
/// per-session average-distance aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwingDistance {
    /// Owning session identifier
    pub session_id: String,
    /// Carry distance in feet; non-positive values mean "not recorded"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl SwingDistance {
    /// Distance, if present and strictly positive
    #[must_use]
    pub fn recorded_distance(&self) -> Option<f64> {
        self.distance.filter(|d| *d > 0.0)
    }
}
