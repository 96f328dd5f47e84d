// ABOUTME: Read-only sensor store trait and the bulk paginated fetch driver
// ABOUTME: Transparently drains range-capped backends by issuing sequential page requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swinglab

//! # Sensor Store Seam
//!
//! [`SensorStore`] is the unified read interface over the hosted relational
//! backend holding session and swing records. Implementations own query
//! construction, authorization, and transport; this crate only consumes
//! ordered pages.
//!
//! [`fetch_all_pages`] is the bulk retrieval driver. The backend silently
//! caps any single response at 1000 rows independent of how the request was
//! phrased, so a naive single-shot fetch truncates data for any athlete with
//! more than 1000 historical records. The driver issues successive range
//! requests until a short page signals exhaustion.
//!
//! ## Ordering contract
//!
//! Offset pagination is only sound over a stable total order. The sort
//! column backing each page method must itself be unique, or duplicates are
//! indistinguishable from legitimate repeats.

use std::future::Future;

use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::constants::pagination::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::errors::AppResult;
use crate::models::{AthleteProfile, Session, Swing, SwingDistance};

/// Read-only access to the two already-authorized record collections.
///
/// Every page method takes a zero-based `offset` and a row `limit` and must
/// return records in a stable total order so the fetch driver can resume at
/// `offset + page.len()`.
#[async_trait]
pub trait SensorStore: Send + Sync {
    /// Look up the athlete profile for a user. `Ok(None)` means no athlete
    /// record exists, the terminal "no data" state for the pipeline.
    ///
    /// # Errors
    /// Returns an error when the backend request fails.
    async fn athlete_profile(&self, athlete_id: Uuid) -> AppResult<Option<AthleteProfile>>;

    /// One page of sessions for an athlete, ordered by session date
    /// ascending (date then id for stability).
    ///
    /// # Errors
    /// Returns an error when the backend request fails.
    async fn session_page(
        &self,
        athlete_id: Uuid,
        offset: usize,
        limit: usize,
    ) -> AppResult<Vec<Session>>;

    /// One page of swings whose owning session is in `session_ids`, with
    /// both spray coordinates non-null, ordered by swing id ascending.
    ///
    /// # Errors
    /// Returns an error when the backend request fails.
    async fn swing_page(
        &self,
        session_ids: &[String],
        offset: usize,
        limit: usize,
    ) -> AppResult<Vec<Swing>>;

    /// One page of the distance-only swing projection for `session_ids`,
    /// with no spatial non-null filter, ordered by swing id ascending.
    ///
    /// # Errors
    /// Returns an error when the backend request fails.
    async fn swing_distance_page(
        &self,
        session_ids: &[String],
        offset: usize,
        limit: usize,
    ) -> AppResult<Vec<SwingDistance>>;

    /// Whether any swing in `session_ids` carries spray coordinates
    ///
    /// # Errors
    /// Returns an error when the backend request fails.
    async fn any_spray_swings(&self, session_ids: &[String]) -> AppResult<bool>;

    /// Whether any swing in `session_ids` carries a strike-zone-eligible
    /// pitch location
    ///
    /// # Errors
    /// Returns an error when the backend request fails.
    async fn any_pitch_swings(&self, session_ids: &[String]) -> AppResult<bool>;
}

/// Result of draining a paginated collection.
///
/// `complete` is `false` when a backend error cut the loop short; the
/// records gathered up to that point are still returned, since a partial
/// result is preferred over total failure. Callers must treat an incomplete
/// fetch as non-fatal and display what was retrieved.
#[derive(Debug, Clone)]
pub struct PagedFetch<T> {
    /// All records retrieved, in backend order
    pub records: Vec<T>,
    /// Whether the collection was drained to exhaustion
    pub complete: bool,
}

/// Clamp a requested page size to the range the backend honors
#[must_use]
pub fn clamp_page_size(page_size: usize) -> usize {
    page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// Drain an entire ordered collection through repeated range requests.
///
/// `page_fn(offset, limit)` must return the rows in `[offset, offset+limit-1]`
/// of the sorted collection. Pages are requested strictly sequentially:
/// offset correctness depends on knowing the prior page's length, so there
/// is no speculative prefetching.
///
/// Termination: the first page whose length is strictly less than the page
/// size (including an empty page) ends the loop, since a short page can only
/// occur at the end of a sorted range. A collection whose size is an exact
/// multiple of the page size therefore costs one extra request that returns
/// an empty page.
///
/// A backend error aborts the loop and returns the accumulator gathered so
/// far with `complete = false`; no retry is attempted.
pub async fn fetch_all_pages<T, F, Fut>(page_size: usize, mut page_fn: F) -> PagedFetch<T>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = AppResult<Vec<T>>>,
{
    let page_size = clamp_page_size(page_size);
    let mut records: Vec<T> = Vec::new();
    let mut offset = 0usize;
    let mut pages = 0usize;

    loop {
        match page_fn(offset, page_size).await {
            Ok(page) => {
                pages += 1;
                let page_len = page.len();
                records.extend(page);
                if page_len < page_size {
                    debug!(
                        pages,
                        total = records.len(),
                        "paginated fetch drained to exhaustion"
                    );
                    return PagedFetch {
                        records,
                        complete: true,
                    };
                }
                offset += page_size;
            }
            Err(err) => {
                warn!(
                    offset,
                    retrieved = records.len(),
                    error = %err,
                    "paginated fetch aborted; returning partial results"
                );
                return PagedFetch {
                    records,
                    complete: false,
                };
            }
        }
    }
}
