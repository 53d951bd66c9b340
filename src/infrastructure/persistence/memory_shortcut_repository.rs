//! In-memory implementation of the shortcut repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::Shortcut;
use crate::domain::repositories::ShortcutRepository;
use crate::error::AppError;

#[derive(Debug, Clone)]
struct Record {
    url: String,
    uses: i64,
}

/// Process-local shortcut store backed by `DashMap`.
///
/// Every operation runs under the shard lock of its key, which gives the same
/// all-or-nothing behavior as a single SQL statement. Data is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryShortcutRepository {
    storage: DashMap<String, Record>,
}

impl InMemoryShortcutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored shortcuts.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ShortcutRepository for InMemoryShortcutRepository {
    async fn create_if_absent(&self, url: &str, slug: &str) -> Result<Option<Shortcut>, AppError> {
        match self.storage.entry(slug.to_owned()) {
            Entry::Occupied(_) => Ok(None),
            Entry::Vacant(vacant) => {
                vacant.insert(Record {
                    url: url.to_owned(),
                    uses: 0,
                });
                Ok(Some(Shortcut::new(slug.to_owned(), url.to_owned(), 0)))
            }
        }
    }

    async fn resolve_and_count(&self, slug: &str) -> Result<Option<String>, AppError> {
        Ok(self.storage.get_mut(slug).map(|mut record| {
            record.uses += 1;
            record.url.clone()
        }))
    }

    async fn delete_and_return(&self, slug: &str) -> Result<Option<Shortcut>, AppError> {
        Ok(self
            .storage
            .remove(slug)
            .map(|(slug, record)| Shortcut::new(slug, record.url, record.uses)))
    }

    async fn get(&self, slug: &str) -> Result<Option<Shortcut>, AppError> {
        Ok(self
            .storage
            .get(slug)
            .map(|record| Shortcut::new(slug.to_owned(), record.url.clone(), record.uses)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_starts_with_zero_uses() {
        let repo = InMemoryShortcutRepository::new();

        let created = repo
            .create_if_absent("https://example.com", "abc123")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created, Shortcut::new("abc123".into(), "https://example.com".into(), 0));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn create_conflict_leaves_existing_untouched() {
        let repo = InMemoryShortcutRepository::new();
        repo.create_if_absent("https://first.com", "taken").await.unwrap();
        repo.resolve_and_count("taken").await.unwrap();

        let second = repo.create_if_absent("https://second.com", "taken").await.unwrap();
        assert!(second.is_none());

        let existing = repo.get("taken").await.unwrap().unwrap();
        assert_eq!(existing.url, "https://first.com");
        assert_eq!(existing.uses, 1);
    }

    #[tokio::test]
    async fn resolve_counts_each_call() {
        let repo = InMemoryShortcutRepository::new();
        repo.create_if_absent("https://example.com", "count").await.unwrap();

        for expected in 1..=3 {
            let url = repo.resolve_and_count("count").await.unwrap();
            assert_eq!(url.as_deref(), Some("https://example.com"));
            assert_eq!(repo.get("count").await.unwrap().unwrap().uses, expected);
        }
    }

    #[tokio::test]
    async fn resolve_missing_does_not_create() {
        let repo = InMemoryShortcutRepository::new();

        assert!(repo.resolve_and_count("ghost").await.unwrap().is_none());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn get_does_not_count() {
        let repo = InMemoryShortcutRepository::new();
        repo.create_if_absent("https://example.com", "peek").await.unwrap();

        repo.get("peek").await.unwrap();
        repo.get("peek").await.unwrap();

        assert_eq!(repo.get("peek").await.unwrap().unwrap().uses, 0);
    }

    #[tokio::test]
    async fn delete_returns_last_state() {
        let repo = InMemoryShortcutRepository::new();
        repo.create_if_absent("https://example.com", "gone").await.unwrap();
        repo.resolve_and_count("gone").await.unwrap();

        let deleted = repo.delete_and_return("gone").await.unwrap().unwrap();
        assert_eq!(deleted.uses, 1);
        assert!(repo.get("gone").await.unwrap().is_none());
        assert!(repo.delete_and_return("gone").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_resolutions_lose_no_updates() {
        let repo = Arc::new(InMemoryShortcutRepository::new());
        repo.create_if_absent("https://example.com", "hot").await.unwrap();

        let handles: Vec<_> = (0..200)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.resolve_and_count("hot").await.unwrap() })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().as_deref(), Some("https://example.com"));
        }

        assert_eq!(repo.get("hot").await.unwrap().unwrap().uses, 200);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn resolve_racing_delete_is_all_or_nothing() {
        let repo = Arc::new(InMemoryShortcutRepository::new());
        repo.create_if_absent("https://example.com", "race").await.unwrap();

        let resolves: Vec<_> = (0..100)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.resolve_and_count("race").await.unwrap() })
            })
            .collect();

        let deleter = {
            let repo = repo.clone();
            tokio::spawn(async move { repo.delete_and_return("race").await.unwrap() })
        };

        let mut found = 0;
        for handle in resolves {
            if let Some(url) = handle.await.unwrap() {
                assert_eq!(url, "https://example.com");
                found += 1;
            }
        }

        let deleted = deleter.await.unwrap().unwrap();
        assert_eq!(deleted.uses, found);
        assert!(repo.get("race").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_on_same_slug_have_one_winner() {
        let repo = Arc::new(InMemoryShortcutRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create_if_absent(&format!("https://example.com/{i}"), "race")
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.len(), 1);
    }
}
