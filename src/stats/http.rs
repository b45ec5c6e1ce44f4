//! Client for the remote stats API.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use lru::LruCache;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info};

use super::types::StatsResponse;
use crate::cli::types::EntityKind;
use crate::core::filters::QueryMap;
use crate::core::http::{auth_header_map, EnvTokenStore, TokenStore};
use crate::{Result, StatsError};


/// Environment variable holding the stats API base URL.
pub const API_URL_ENV_VAR: &str = "BASKETIFY_API_URL";

/// Responses kept in memory per client.
pub const RESPONSE_CACHE_CAPACITY: usize = 64;

/// Memoization key: one request per entity and filter set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatsRequestKey {
    pub kind: EntityKind,
    pub name: String,
    pub query: QueryMap,
}

/// Resolve the API base URL from an explicit value or `BASKETIFY_API_URL`.
pub fn resolve_api_url(explicit: Option<String>) -> Result<String> {
    explicit
        .or_else(|| std::env::var(API_URL_ENV_VAR).ok())
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| StatsError::MissingApiUrl {
            env_var: API_URL_ENV_VAR.to_string(),
        })
}

pub struct StatsClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    cache: Mutex<LruCache<StatsRequestKey, StatsResponse>>,
}

impl StatsClient {
    /// Client reading its token from `BASKETIFY_API_TOKEN`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_token_store(base_url, Arc::new(EnvTokenStore::new()))
    }

    pub fn with_token_store(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        let capacity = NonZeroUsize::new(RESPONSE_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/stats/{kind}/{name}`, with `name` percent-encoded as a
    /// single path segment.
    pub fn stats_url(&self, kind: EntityKind, name: &str) -> Result<Url> {
        let invalid = || StatsError::InvalidApiUrl {
            url: self.base_url.clone(),
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["api", "stats", kind.as_str(), name]);
        Ok(url)
    }

    /// Fetch the game log and seasonal totals for one player or team,
    /// narrowed server-side by `filters`.
    pub async fn get_stats(
        &self,
        kind: EntityKind,
        name: &str,
        filters: &QueryMap,
    ) -> Result<StatsResponse> {
        let key = StatsRequestKey {
            kind,
            name: name.to_string(),
            query: filters.clone(),
        };
        if let Some(hit) = self.cached(&key) {
            debug!("stats cache hit for {} {}", kind, name);
            return Ok(hit);
        }

        let url = self.stats_url(kind, name)?;
        info!("GET {} ({} filters)", url, filters.len());

        let res = self
            .client
            .get(url)
            .headers(auth_header_map(self.tokens.as_ref())?)
            .query(filters)
            .send()
            .await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Err(StatsError::EntityNotFound {
                kind: kind.to_string(),
                name: name.to_string(),
            });
        }

        let body = res.error_for_status()?.json::<StatsResponse>().await?;
        debug!(
            games = body.stats.len(),
            seasons = body.seasonal_stats.len(),
            "stats response received"
        );

        if let Ok(mut cache) = self.cache.lock() {
            cache.put(key, body.clone());
        }
        Ok(body)
    }

    fn cached(&self, key: &StatsRequestKey) -> Option<StatsResponse> {
        let mut cache = self.cache.lock().ok()?;
        cache.get(key).cloned()
    }

    /// Entries currently memoized and the cache capacity.
    pub fn cache_stats(&self) -> (usize, usize) {
        self.cache
            .lock()
            .map(|c| (c.len(), c.cap().get()))
            .unwrap_or((0, RESPONSE_CACHE_CAPACITY))
    }

    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }
}
