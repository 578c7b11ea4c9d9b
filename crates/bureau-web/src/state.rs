//! Application state management

use bureau_core::{Config, Record, ReportRequest, Result};
use bureau_data::{ReportSource, fetch_report};
use dashmap::DashMap;
use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};
use tracing::{debug, info};

/// A fetched report and when it was fetched
#[derive(Debug, Clone)]
struct CachedReport {
    records: Arc<Vec<Record>>,
    fetched_at: Instant,
    /// Insertion order, used to pick eviction victims
    seq: u64,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<Config>,

    /// Where report records come from
    source: Arc<dyn ReportSource>,

    /// Fetched reports keyed by the request that produced them
    cache: Arc<DashMap<ReportRequest, CachedReport>>,

    /// Next cache insertion number
    next_seq: Arc<AtomicU64>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config, source: Arc<dyn ReportSource>) -> Self {
        info!(
            source = source.name(),
            cache = config.cache.enabled,
            max_entries = config.cache.max_entries,
            ttl_secs = config.cache.ttl_secs,
            "Initializing application state"
        );
        Self {
            config: Arc::new(config),
            source,
            cache: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Name of the configured report source
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Records for `request`.
    ///
    /// A cached result younger than the configured TTL is reused unless
    /// `refresh` is set or caching is disabled. Failed fetches are never
    /// cached.
    pub async fn load_report(
        &self,
        request: &ReportRequest,
        refresh: bool,
    ) -> Result<Arc<Vec<Record>>> {
        let caching = self.config.cache.enabled;

        if caching && !refresh {
            let cached = self.cache.get(request).map(|hit| hit.value().clone());
            if let Some(hit) = cached {
                if hit.fetched_at.elapsed() < self.ttl() {
                    debug!(rows = hit.records.len(), "Serving report from cache");
                    return Ok(hit.records);
                }
                self.cache.remove(request);
            }
        }

        let records = Arc::new(fetch_report(self.source.as_ref(), request).await?);
        if caching {
            self.store(request, Arc::clone(&records));
        }
        Ok(records)
    }

    fn ttl(&self) -> Duration {
        Duration::from_secs(self.config.cache.ttl_secs)
    }

    /// Insert a report, first dropping expired entries and then the oldest
    /// ones until there is room
    fn store(&self, request: &ReportRequest, records: Arc<Vec<Record>>) {
        let ttl = self.ttl();
        self.cache.retain(|_, entry| entry.fetched_at.elapsed() < ttl);

        let max_entries = self.config.cache.max_entries.max(1);
        while !self.cache.contains_key(request) && self.cache.len() >= max_entries {
            let oldest = self
                .cache
                .iter()
                .min_by_key(|entry| entry.value().seq)
                .map(|entry| entry.key().clone());
            let Some(oldest) = oldest else { break };
            debug!(?oldest, "Evicting cached report");
            self.cache.remove(&oldest);
        }

        self.cache.insert(
            request.clone(),
            CachedReport {
                records,
                fetched_at: Instant::now(),
                seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            },
        );
    }

    /// Number of cached reports
    pub fn cached_reports(&self) -> usize {
        self.cache.len()
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("source", &self.source.name())
            .field("cached_reports", &self.cache.len())
            .finish()
    }
}
