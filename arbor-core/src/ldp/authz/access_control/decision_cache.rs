/*
    Copyright 2025 MydriaTech AB

    Licensed under the Apache License 2.0 with Free world makers exception
    1.0.0 (the "License"); you may not use this file except in compliance with
    the License. You should have obtained a copy of the License with the source
    or binary distribution in file named

        LICENSE-Apache-2.0-with-FWM-Exception-1.0.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

//! Cache parsed access control graphs.

use super::Authorization;
use crate::util;
use arbor_rp::ld::ResourceServerError;
use crossbeam_skiplist::SkipMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Cached parse result with expiry and insertion order position.
struct DecisionCacheEntry {
    authorizations: Arc<Vec<Authorization>>,
    expires_micros: u64,
    queue_pos: u64,
}

/** Memoized access control graph parses.

Entries are keyed by the identifier of the effective ACL resource and hold
the parsed statements of that resource's access control graph. Matching a
requester against parsed statements is cheap and done on every decision, so
decisions for different requesters share the same entry.

Entries expire after a configurable time to live and the entry count is held
near a configurable target by lazy background eviction in insertion order.
The actual entry count can overshoot the target during high load.

A failed computation is never stored. An infrastructure error must stay
distinguishable from an empty access control graph, so the error is returned
to the caller and the next lookup computes again.
*/
pub struct DecisionCache {
    eviction_running: AtomicBool,
    target_max_size: u64,
    entry_ttl_micros: u64,
    pos: AtomicU64,
    count: AtomicU64,
    insertion_queue: SkipMap<u64, String>,
    cache: SkipMap<String, DecisionCacheEntry>,
}

impl DecisionCache {
    /// Return a new instance.
    pub async fn new(target_max_size: u64, entry_ttl_micros: u64) -> Arc<Self> {
        Arc::new(Self {
            eviction_running: AtomicBool::default(),
            target_max_size,
            entry_ttl_micros,
            pos: AtomicU64::default(),
            count: AtomicU64::default(),
            insertion_queue: SkipMap::default(),
            cache: SkipMap::default(),
        })
        .init()
        .await
    }

    /// Initialize background tasks.
    async fn init(self: Arc<Self>) -> Arc<Self> {
        let ret = Arc::clone(&self);
        tokio::spawn(async move {
            self.purge_expired().await;
        });
        ret
    }

    /// Remove expired cache entries and superseded queue positions.
    async fn purge_expired(&self) {
        loop {
            tokio::time::sleep(tokio::time::Duration::from_micros(
                self.entry_ttl_micros / 10,
            ))
            .await;
            let now = util::get_timestamp_micros();
            for entry in self.cache.iter() {
                if entry.value().expires_micros < now && entry.remove() {
                    self.count.fetch_sub(1, Ordering::Relaxed);
                }
            }
            for queue_entry in self.insertion_queue.iter() {
                let occupied = self
                    .cache
                    .get(queue_entry.value())
                    .is_some_and(|entry| entry.value().queue_pos == *queue_entry.key());
                if !occupied {
                    queue_entry.remove();
                }
            }
        }
    }

    /// Return the cached statements of the effective ACL resource or
    /// compute, store and return them.
    ///
    /// Concurrent computations for the same identifier may race. The first
    /// stored result wins and `compute` is pure for a given identifier, so
    /// the duplicated work is wasteful but harmless.
    pub async fn get_or_compute<F, Fut>(
        self: &Arc<Self>,
        effective_acl_id: &str,
        compute: F,
    ) -> Result<Arc<Vec<Authorization>>, ResourceServerError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Authorization>, ResourceServerError>>,
    {
        let now = util::get_timestamp_micros();
        if let Some(entry) = self.cache.get(effective_acl_id) {
            if entry.value().expires_micros > now {
                if log::log_enabled!(log::Level::Trace) {
                    log::trace!("Answering '{effective_acl_id}' from cache.");
                }
                return Ok(Arc::clone(&entry.value().authorizations));
            }
        }
        let authorizations = Arc::new(compute().await?);
        self.store(effective_acl_id, &authorizations);
        Ok(authorizations)
    }

    /// Drop the entry of the effective ACL resource.
    pub fn invalidate(&self, effective_acl_id: &str) {
        if self.cache.remove(effective_acl_id).is_some() {
            self.count.fetch_sub(1, Ordering::Relaxed);
        }
    }

    /// Store a computed parse result.
    fn store(self: &Arc<Self>, effective_acl_id: &str, authorizations: &Arc<Vec<Authorization>>) {
        let queue_pos = self.pos.fetch_add(1, Ordering::Relaxed);
        let expires_micros = util::get_timestamp_micros() + self.entry_ttl_micros;
        // Drop any previous entry first to keep the live entry count exact.
        self.invalidate(effective_acl_id);
        let entry = self
            .cache
            .get_or_insert_with(effective_acl_id.to_owned(), || DecisionCacheEntry {
                authorizations: Arc::clone(authorizations),
                expires_micros,
                queue_pos,
            });
        if entry.value().queue_pos == queue_pos {
            // Cache entry did not exist
            self.insertion_queue
                .insert(queue_pos, effective_acl_id.to_owned());
            let count = self.count.fetch_add(1, Ordering::Relaxed) + 1;
            if log::log_enabled!(log::Level::Trace) {
                log::trace!(
                    "After insert of '{effective_acl_id}' cache will contain {count} entries."
                );
            }
            if count > self.target_max_size {
                // Run cache eviction (eventually)
                let self_clone = Arc::clone(self);
                tokio::spawn(async move { self_clone.run_eviction().await });
            }
        }
    }

    /// Evict entries in insertion order until the count is at the target.
    async fn run_eviction(&self) {
        if self.eviction_running.swap(true, Ordering::SeqCst) {
            // Eviction is already running
            return;
        }
        while self.count.load(Ordering::Relaxed) > self.target_max_size {
            if let Some(queue_entry) = self.insertion_queue.front() {
                let queue_pos = *queue_entry.key();
                let effective_acl_id = queue_entry.value();
                let current = self
                    .cache
                    .get(effective_acl_id)
                    .is_some_and(|entry| entry.value().queue_pos == queue_pos);
                if current && self.cache.remove(effective_acl_id).is_some() {
                    self.count.fetch_sub(1, Ordering::Relaxed);
                    if log::log_enabled!(log::Level::Trace) {
                        log::trace!("Evicted '{effective_acl_id}' from cache.");
                    }
                }
                queue_entry.remove();
                tokio::task::yield_now().await;
            } else {
                // Queue drained before reaching the target
                break;
            }
        }
        // Eviction is no longer running
        self.eviction_running.store(false, Ordering::SeqCst);
    }
}
