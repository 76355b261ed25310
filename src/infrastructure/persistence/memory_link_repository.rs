//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link storage held in process memory.
///
/// Selected with `STORE_BACKEND=memory`; everything is lost on restart.
/// DashMap's sharded locks give the same guarantees the SQL store provides:
/// inserts go through the entry API so a taken code is rejected atomically,
/// and increments mutate the row while holding its shard lock.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, Link>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.code) {
            Entry::Occupied(entry) => Err(AppError::conflict(
                "Code already exists",
                json!({ "code": entry.key() }),
            )),
            Entry::Vacant(entry) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                let link = Link::new(
                    id,
                    entry.key().clone(),
                    new_link.url,
                    0,
                    None,
                    Utc::now(),
                );
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self
            .links
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(links)
    }

    async fn increment_clicks(
        &self,
        code: &str,
        clicked_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let Some(mut link) = self.links.get_mut(code) else {
            return Ok(false);
        };

        link.clicks += 1;
        let floor = link.last_clicked_at.unwrap_or(link.created_at);
        link.last_clicked_at = Some(clicked_at.max(floor));

        Ok(true)
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.remove(code).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }

    async fn health_check(&self) -> Result<DateTime<Utc>, AppError> {
        Ok(Utc::now())
    }
}
