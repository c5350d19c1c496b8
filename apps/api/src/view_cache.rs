//! View-cache invalidation. After a profile change the rendered views that show
//! it are told to re-render; the frontend subscribes to a Redis channel.

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

/// The application's root view, re-rendered after profile updates.
pub const ROOT_VIEW_PATH: &str = "/";

/// Upper bound on connecting to Redis and publishing one invalidation.
pub const INVALIDATE_TIMEOUT: Duration = Duration::from_secs(2);

#[async_trait]
pub trait ViewCache: Send + Sync {
    async fn invalidate(&self, path: &str) -> Result<()>;
}

/// Publishes invalidated paths on a Redis channel.
pub struct RedisViewCache {
    client: redis::Client,
    channel: String,
    timeout: Duration,
}

impl RedisViewCache {
    pub fn new(client: redis::Client, channel: impl Into<String>) -> Self {
        Self {
            client,
            channel: channel.into(),
            timeout: INVALIDATE_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn publish(&self, path: &str) -> Result<i64> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        Ok(conn.publish(&self.channel, path).await?)
    }
}

#[async_trait]
impl ViewCache for RedisViewCache {
    async fn invalidate(&self, path: &str) -> Result<()> {
        let receivers = tokio::time::timeout(self.timeout, self.publish(path))
            .await
            .map_err(|_| {
                anyhow!(
                    "Redis did not answer within {}ms",
                    self.timeout.as_millis()
                )
            })??;
        debug!(
            "Published invalidation of '{path}' on {} ({receivers} subscribers)",
            self.channel
        );
        Ok(())
    }
}
