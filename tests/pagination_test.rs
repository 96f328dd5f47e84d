// ABOUTME: Integration tests for the bulk paginated fetch driver
// ABOUTME: Exercises termination, request counts, boundary multiples, and partial results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};

use swinglab::errors::{AppError, AppResult};
use swinglab::storage::{clamp_page_size, fetch_all_pages};

mod common;

/// Serve pages of `data`, counting requests, optionally failing once the
/// requested offset reaches `fail_from`
async fn drain(
    data: &[u32],
    page_size: usize,
    calls: &AtomicUsize,
    fail_from: Option<usize>,
) -> swinglab::storage::PagedFetch<u32> {
    fetch_all_pages(page_size, |offset, limit| {
        calls.fetch_add(1, Ordering::SeqCst);
        let result: AppResult<Vec<u32>> = if fail_from.is_some_and(|at| offset >= at) {
            Err(AppError::external_service("simulated backend error"))
        } else {
            Ok(data.iter().skip(offset).take(limit).copied().collect())
        };
        async move { result }
    })
    .await
}

#[tokio::test]
async fn test_drains_collection_larger_than_page_size() {
    common::init_test_logging();
    let data: Vec<u32> = (0..2500).collect();
    let calls = AtomicUsize::new(0);

    let fetched = drain(&data, 1000, &calls, None).await;

    assert!(fetched.complete);
    assert_eq!(fetched.records, data, "no gaps and no duplicates");
    // ceil(2500 / 1000) = 3 requests; the third page is short and terminates
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_exact_multiple_costs_one_extra_empty_request() {
    common::init_test_logging();
    let data: Vec<u32> = (0..1000).collect();
    let calls = AtomicUsize::new(0);

    let fetched = drain(&data, 1000, &calls, None).await;

    assert!(fetched.complete);
    assert_eq!(fetched.records.len(), 1000);
    // First page is full, so a second request must observe the empty page
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_empty_collection_terminates_after_one_request() {
    common::init_test_logging();
    let calls = AtomicUsize::new(0);

    let fetched = drain(&[], 1000, &calls, None).await;

    assert!(fetched.complete);
    assert!(fetched.records.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_collection_smaller_than_page_terminates_after_one_request() {
    common::init_test_logging();
    let data: Vec<u32> = (0..37).collect();
    let calls = AtomicUsize::new(0);

    let fetched = drain(&data, 1000, &calls, None).await;

    assert!(fetched.complete);
    assert_eq!(fetched.records, data);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_backend_error_returns_partial_results() {
    common::init_test_logging();
    let data: Vec<u32> = (0..2500).collect();
    let calls = AtomicUsize::new(0);

    // Second page (offset 1000) fails
    let fetched = drain(&data, 1000, &calls, Some(1000)).await;

    assert!(!fetched.complete);
    assert_eq!(fetched.records.len(), 1000, "first page is preserved");
    assert_eq!(&fetched.records[..], &data[..1000]);
    assert_eq!(calls.load(Ordering::SeqCst), 2, "no retry after the error");
}

#[tokio::test]
async fn test_immediate_error_yields_empty_partial() {
    common::init_test_logging();
    let data: Vec<u32> = (0..10).collect();
    let calls = AtomicUsize::new(0);

    let fetched = drain(&data, 1000, &calls, Some(0)).await;

    assert!(!fetched.complete);
    assert!(fetched.records.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_page_size_clamped_to_backend_cap() {
    // Above the silent backend cap every page would look short
    assert_eq!(clamp_page_size(5000), 1000);
    assert_eq!(clamp_page_size(0), 1);
    assert_eq!(clamp_page_size(250), 250);
}
