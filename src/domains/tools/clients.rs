//! Credential-keyed client cache.
//!
//! Every tool call resolves an API key (server config or caller
//! argument) and borrows a client for it. Clients are shared per
//! credential so connection pools are reused across calls, with a small
//! LRU bound in case callers rotate through many tokens.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::domains::notion::NotionClient;

/// Maximum number of distinct credentials kept warm.
const MAX_CLIENTS: usize = 4;

/// Bounded cache of [`NotionClient`]s keyed by API key. Most recently
/// used entry sits at the front.
#[derive(Debug, Default)]
pub struct ClientCache {
    entries: Mutex<Vec<(String, Arc<NotionClient>)>>,
}

impl ClientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the client for `api_key`, creating one on first use.
    pub fn get_or_create(&self, api_key: &str) -> Arc<NotionClient> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(position) = entries.iter().position(|(key, _)| key == api_key) {
            let entry = entries.remove(position);
            let client = entry.1.clone();
            entries.insert(0, entry);
            return client;
        }

        debug!("creating Notion client for new credential");
        let client = Arc::new(NotionClient::new(api_key));
        entries.insert(0, (api_key.to_string(), client.clone()));
        entries.truncate(MAX_CLIENTS);
        client
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_reuses_client() {
        let cache = ClientCache::new();
        let first = cache.get_or_create("token-a");
        let second = cache.get_or_create("token-a");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_keys_get_distinct_clients() {
        let cache = ClientCache::new();
        let a = cache.get_or_create("token-a");
        let b = cache.get_or_create("token-b");
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let cache = ClientCache::new();
        for i in 0..MAX_CLIENTS + 1 {
            cache.get_or_create(&format!("token-{i}"));
        }
        assert_eq!(cache.len(), MAX_CLIENTS);

        // token-0 was evicted, so a new client is created for it.
        let before = cache.get_or_create("token-0");
        let again = cache.get_or_create("token-0");
        assert!(Arc::ptr_eq(&before, &again));
    }

    #[test]
    fn test_recent_use_protects_from_eviction() {
        let cache = ClientCache::new();
        let a = cache.get_or_create("token-a");
        for i in 0..MAX_CLIENTS - 1 {
            cache.get_or_create(&format!("token-{i}"));
        }
        // Touch token-a, then push one more entry past the bound.
        cache.get_or_create("token-a");
        cache.get_or_create("token-z");

        let still_a = cache.get_or_create("token-a");
        assert!(Arc::ptr_eq(&a, &still_a));
    }
}
