use async_trait::async_trait;
use redis::{AsyncCommands, aio::MultiplexedConnection};
use tokio::sync::OnceCell;
use tracing::{debug, error, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisObjectCache);

/// 每批 SCAN 的键数量
const SCAN_BATCH: usize = 200;

pub struct RedisObjectCache {
    client: redis::Client,
    key_prefix: String,
    ttl: u64,
    // 多路复用连接可克隆共享，首次使用时建立
    connection: OnceCell<MultiplexedConnection>,
}

impl RedisObjectCache {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        let redis_config = &config.cache.redis;

        let client = redis::Client::open(redis_config.url.as_str())
            .map_err(|e| format!("Invalid Redis URL '{}': {e}", redis_config.url))?;

        // 启动时用同步连接探活，失败则交由启动流程回退到内存缓存
        let mut conn = client
            .get_connection()
            .map_err(|e| format!("Redis connection failed: {e}"))?;
        let pong: String = redis::cmd("PING")
            .query(&mut conn)
            .map_err(|e| format!("Redis ping failed: {e}"))?;
        debug!(
            "Redis reachable ({}), prefix: '{}', TTL: {}s",
            pong, redis_config.key_prefix, config.cache.default_ttl
        );

        Ok(Self {
            client,
            key_prefix: redis_config.key_prefix.clone(),
            ttl: config.cache.default_ttl,
            connection: OnceCell::new(),
        })
    }

    async fn connection(&self) -> Option<MultiplexedConnection> {
        match self
            .connection
            .get_or_try_init(|| self.client.get_multiplexed_async_connection())
            .await
        {
            Ok(conn) => Some(conn.clone()),
            Err(e) => {
                error!("Failed to get Redis connection: {}", e);
                None
            }
        }
    }

    fn make_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    async fn delete_prefixed_keys(
        &self,
        conn: &mut MultiplexedConnection,
    ) -> redis::RedisResult<usize> {
        let pattern = format!("{}*", self.key_prefix);
        let mut cursor: u64 = 0;
        let mut removed = 0;
        loop {
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut *conn)
                .await?;
            if !keys.is_empty() {
                removed += keys.len();
                let _: i64 = conn.del(keys).await?;
            }
            if next == 0 {
                return Ok(removed);
            }
            cursor = next;
        }
    }
}

#[async_trait]
impl ObjectCache for RedisObjectCache {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let Some(mut conn) = self.connection().await else {
            return CacheResult::ExistsButNoValue;
        };

        let result: redis::RedisResult<Option<String>> = conn.get(self.make_key(key)).await;
        match result {
            Ok(Some(data)) => {
                debug!("Cache hit: {}", key);
                CacheResult::Found(data)
            }
            Ok(None) => {
                debug!("Cache miss: {}", key);
                CacheResult::NotFound
            }
            Err(e) => {
                error!("Failed to get key '{}': {}", key, e);
                CacheResult::ExistsButNoValue
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        let effective_ttl = if ttl == 0 { self.ttl } else { ttl };
        let result: redis::RedisResult<()> =
            conn.set_ex(self.make_key(&key), value, effective_ttl).await;
        match result {
            Ok(()) => debug!("Cached key: {} (TTL: {}s)", key, effective_ttl),
            Err(e) => error!("Failed to insert key '{}' into cache: {}", key, e),
        }
    }

    async fn remove(&self, key: &str) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        let result: redis::RedisResult<i64> = conn.del(self.make_key(key)).await;
        if let Err(e) = result {
            error!("Failed to remove key '{}': {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        let Some(mut conn) = self.connection().await else {
            return;
        };

        match self.delete_prefixed_keys(&mut conn).await {
            Ok(count) => debug!(
                "Invalidated {} keys under prefix '{}'",
                count, self.key_prefix
            ),
            Err(e) => warn!("Failed to invalidate keys under '{}': {}", self.key_prefix, e),
        }
    }
}
