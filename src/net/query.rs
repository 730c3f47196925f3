//! Client-side query cache: staleness tracking, single-flight coalescing,
//! and dispatch-ordered response application.
//!
//! DESIGN
//! ======
//! A [`CacheEntry`] is a named, independently invalidatable slot of fetched
//! server data. All of its bookkeeping is plain synchronous state so the
//! interesting properties (coalescing, ordering, staleness) are testable on
//! the host; the async driver that actually talks to the network lives
//! behind `hydrate` and is a thin loop over [`api`](super::api).
//!
//! Responses carry the monotonic sequence number assigned when their fetch
//! was dispatched. An entry only applies a response whose sequence is newer
//! than the last one applied, so a stale in-flight response can never
//! overwrite data produced by a later dispatch.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use super::api::ApiError;

/// How long a fetched value is served without triggering a refetch.
pub const STALE_AFTER_MS: f64 = 30_000.0;

/// Extra attempts after a failed (non-401) fetch before the error surfaces.
pub const FETCH_RETRIES: u32 = 1;

/// Freshness of a cache entry at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    /// Nothing cached; a read must fetch before it can render data.
    Missing,
    /// Cached and inside the staleness window; serve as-is.
    Fresh,
    /// Cached but eligible for refresh; serve the old value while refetching.
    Stale,
}

/// One cached server resource plus its fetch bookkeeping.
#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    value: Option<T>,
    error: Option<ApiError>,
    /// Timestamp of the last applied successful fetch, ms.
    fetched_at: Option<f64>,
    /// Set by [`CacheEntry::invalidate`]; forces the next access to refetch.
    invalidated: bool,
    next_seq: u64,
    applied_seq: u64,
    inflight_seq: Option<u64>,
}

impl<T> Default for CacheEntry<T> {
    fn default() -> Self {
        Self {
            value: None,
            error: None,
            fetched_at: None,
            invalidated: false,
            next_seq: 0,
            applied_seq: 0,
            inflight_seq: None,
        }
    }
}

impl<T> CacheEntry<T> {
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Error from the most recent applied fetch, cleared by the next success.
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.inflight_seq.is_some()
    }

    pub fn freshness(&self, now_ms: f64) -> Freshness {
        let Some(fetched_at) = self.fetched_at else {
            return Freshness::Missing;
        };
        if self.invalidated || now_ms - fetched_at >= STALE_AFTER_MS {
            Freshness::Stale
        } else {
            Freshness::Fresh
        }
    }

    /// True when an access at `now_ms` should dispatch (or join) a fetch.
    pub fn needs_fetch(&self, now_ms: f64) -> bool {
        self.freshness(now_ms) != Freshness::Fresh
    }

    /// Start a fetch, returning its dispatch ticket.
    ///
    /// Returns `None` while another call is already in flight: the caller
    /// coalesces onto that call and will observe its result through the
    /// shared entry instead of dispatching a duplicate.
    pub fn begin_fetch(&mut self) -> Option<u64> {
        if self.inflight_seq.is_some() {
            return None;
        }
        self.next_seq += 1;
        self.inflight_seq = Some(self.next_seq);
        Some(self.next_seq)
    }

    /// Apply the result of the fetch dispatched as ticket `seq`.
    ///
    /// Returns `false` when the response is stale (an entry produced by a
    /// newer dispatch has already been applied) and was dropped. A failed
    /// fetch keeps any previous value servable; the error then sticks until
    /// the next success or an explicit [`CacheEntry::invalidate`], so a
    /// persistently failing resource does not refetch in a loop.
    pub fn resolve(&mut self, seq: u64, result: Result<T, ApiError>, now_ms: f64) -> bool {
        if self.inflight_seq == Some(seq) {
            self.inflight_seq = None;
        }
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        match result {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
                self.fetched_at = Some(now_ms);
                self.invalidated = false;
            }
            Err(err) => {
                self.error = Some(err);
            }
        }
        true
    }

    /// Mark the entry stale without dropping its value, and clear any stuck
    /// error. The next access refetches; until that lands, readers still
    /// see the old value.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
        self.error = None;
    }
}

/// Hydrate-side driver for the `notifications` entry.
///
/// Gated on token presence: with no token this is a no-op, not an error.
/// A fresh entry is also a no-op, and an in-flight fetch coalesces. On
/// failure the fetch is retried [`FETCH_RETRIES`] times, except for a 401,
/// which instead clears the session exactly once and surfaces immediately.
#[cfg(feature = "hydrate")]
pub fn ensure_notifications(
    session: leptos::prelude::RwSignal<crate::state::session::SessionState>,
    cache: leptos::prelude::RwSignal<CacheEntry<super::types::NotificationsResponse>>,
) {
    use leptos::prelude::{GetUntracked, Update};

    let Some(token) = session.get_untracked().token().map(str::to_owned) else {
        return;
    };
    let entry = cache.get_untracked();
    if entry.error().is_some() || !entry.needs_fetch(js_sys::Date::now()) {
        return;
    }
    let Some(seq) = cache.try_update(CacheEntry::begin_fetch).flatten() else {
        // Coalesced onto the in-flight call.
        return;
    };

    leptos::task::spawn_local(async move {
        let mut result = super::api::fetch_notifications(&token).await;
        let mut attempts = 0;
        while attempts < FETCH_RETRIES {
            match &result {
                Ok(_) | Err(ApiError::Unauthorized) => break,
                Err(_) => {
                    attempts += 1;
                    result = super::api::fetch_notifications(&token).await;
                }
            }
        }
        if matches!(result, Err(ApiError::Unauthorized)) {
            crate::state::session::clear_session(session);
        }
        let now = js_sys::Date::now();
        let _ = cache.try_update(|entry| entry.resolve(seq, result, now));
    });
}
