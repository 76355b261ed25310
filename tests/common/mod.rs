#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;
use tinylink::domain::click_event::ClickEvent;
use tinylink::domain::click_worker::apply_click;
use tinylink::domain::entities::{Link, NewLink};
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::MemoryLinkRepository;
use tinylink::routes::app_router;
use tinylink::state::AppState;
use tokio::sync::mpsc;

pub fn create_test_state(
    queue_capacity: usize,
) -> (
    AppState,
    mpsc::Receiver<ClickEvent>,
    Arc<MemoryLinkRepository>,
) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let (tx, rx) = mpsc::channel(queue_capacity);

    let state = AppState::new(repository.clone(), tx, "test", None);

    (state, rx, repository)
}

/// Serves the full application, trailing-slash normalization included.
pub fn test_server(state: AppState) -> TestServer {
    let app = Router::new().fallback_service(app_router(state));
    TestServer::new(app).unwrap()
}

pub async fn create_test_link(repository: &MemoryLinkRepository, code: &str, url: &str) -> Link {
    repository
        .insert(NewLink {
            code: code.to_string(),
            url: url.to_string(),
        })
        .await
        .unwrap()
}

/// Applies every click currently queued, the way the worker would.
pub async fn apply_queued_clicks(
    rx: &mut mpsc::Receiver<ClickEvent>,
    repository: &MemoryLinkRepository,
) -> usize {
    let mut applied = 0;
    while let Ok(event) = rx.try_recv() {
        apply_click(repository, event).await;
        applied += 1;
    }
    applied
}

/// Store whose every call fails as if the database were down.
pub struct UnavailableRepository;

fn unavailable() -> AppError {
    AppError::store_unavailable("Store unavailable", json!({}))
}

#[async_trait]
impl LinkRepository for UnavailableRepository {
    async fn insert(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(unavailable())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
        Err(unavailable())
    }

    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        Err(unavailable())
    }

    async fn increment_clicks(
        &self,
        _code: &str,
        _clicked_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn delete_by_code(&self, _code: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> Result<DateTime<Utc>, AppError> {
        Err(unavailable())
    }
}

pub fn unavailable_state() -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(Arc::new(UnavailableRepository), tx, "test", None);
    (state, rx)
}
