//! Durable client-side key/value storage for session credentials.
//!
//! Keys and values are plain strings. Implementations overwrite on `set_item`
//! and treat removing a missing key as success.

use async_trait::async_trait;

#[async_trait]
pub trait SessionStorePort: Send + Sync {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;

    async fn remove_item(&self, key: &str) -> anyhow::Result<()>;
}
