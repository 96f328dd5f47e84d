// ABOUTME: Integration tests for rolling time-window filtering
// ABOUTME: Covers the unbounded bypass, the 30-day boundary, and foreign-key propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};

use swinglab::intelligence::time_window::{apply_window, TimeWindow};
use swinglab::models::SessionSummary;

mod common;

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().unwrap()
}

fn summary(id: &str, date: Option<NaiveDate>) -> SessionSummary {
    SessionSummary {
        session: common::make_session(id, date),
        avg_distance: None,
    }
}

fn days_before_now(days: i64) -> NaiveDate {
    (fixed_now() - Duration::days(days)).date_naive()
}

#[test]
fn test_all_time_returns_everything_unchanged() {
    let sessions = vec![
        summary("s1", Some(days_before_now(400))),
        summary("s2", None), // malformed/missing date still surfaces
        summary("s3", Some(days_before_now(1))),
    ];
    let swings = vec![
        common::base_swing("sw1", "s1", 88.0),
        common::base_swing("sw2", "s2", 91.0),
    ];

    let (kept_sessions, kept_swings) =
        apply_window(sessions.clone(), swings.clone(), TimeWindow::AllTime, fixed_now());

    assert_eq!(kept_sessions, sessions);
    assert_eq!(kept_swings, swings);
}

#[test]
fn test_one_month_boundary_session_is_retained() {
    // Dated exactly 30 days before now: the >= comparison keeps it
    let sessions = vec![summary("boundary", Some(days_before_now(30)))];

    let (kept, _) = apply_window(sessions, Vec::new(), TimeWindow::OneMonth, fixed_now());

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].session.id, "boundary");
}

#[test]
fn test_one_month_drops_older_sessions_and_their_swings() {
    let sessions = vec![
        summary("recent", Some(days_before_now(10))),
        summary("stale", Some(days_before_now(31))),
    ];
    let swings = vec![
        common::base_swing("sw1", "recent", 95.0),
        common::base_swing("sw2", "stale", 97.0),
        common::base_swing("sw3", "recent", 85.0),
    ];

    let (kept_sessions, kept_swings) =
        apply_window(sessions, swings, TimeWindow::OneMonth, fixed_now());

    assert_eq!(kept_sessions.len(), 1);
    assert_eq!(kept_sessions[0].session.id, "recent");
    let kept_ids: Vec<&str> = kept_swings.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(kept_ids, vec!["sw1", "sw3"]);
}

#[test]
fn test_bounded_window_silently_drops_dateless_sessions() {
    let sessions = vec![
        summary("dated", Some(days_before_now(5))),
        summary("dateless", None),
    ];

    let (kept, _) = apply_window(sessions, Vec::new(), TimeWindow::SixMonths, fixed_now());

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].session.id, "dated");
}

#[test]
fn test_window_lengths_are_fixed_day_counts() {
    assert_eq!(TimeWindow::OneMonth.days(), Some(30));
    assert_eq!(TimeWindow::ThreeMonths.days(), Some(90));
    assert_eq!(TimeWindow::SixMonths.days(), Some(180));
    assert_eq!(TimeWindow::AllTime.days(), None);

    let cutoff = TimeWindow::ThreeMonths.cutoff(fixed_now()).unwrap();
    assert_eq!(cutoff, days_before_now(90));
}

#[test]
fn test_parse_falls_back_to_all_time() {
    assert_eq!(TimeWindow::parse("1m"), TimeWindow::OneMonth);
    assert_eq!(TimeWindow::parse("THREE_MONTHS"), TimeWindow::ThreeMonths);
    assert_eq!(TimeWindow::parse("6m"), TimeWindow::SixMonths);
    assert_eq!(TimeWindow::parse("forever"), TimeWindow::AllTime);
}
