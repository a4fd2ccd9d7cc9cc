use actix_cors::Cors;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::{AppConfig, CorsConfig};
use crate::errors::TimetableError;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 按名称构造缓存后端
async fn try_cache_backend(name: &str) -> Option<Arc<dyn ObjectCache>> {
    let Some(constructor) = get_object_cache_plugin(name) else {
        warn!("Cache backend '{}' not found in registry", name);
        return None;
    };

    match constructor().await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", name);
            Some(Arc::from(cache))
        }
        Err(e) => {
            warn!("Failed to create {} cache: {}", name, e);
            None
        }
    }
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let cache_type = &AppConfig::get().cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    if let Some(cache) = try_cache_backend(cache_type).await {
        return Ok(cache);
    }

    if cache_type != "moka" {
        warn!("Falling back to memory cache");
        if let Some(cache) = try_cache_backend("moka").await {
            return Ok(cache);
        }
    }

    Err(Box::new(TimetableError::cache_plugin_not_found(format!(
        "No cache backend available (tried: {cache_type})"
    ))))
}

/// 根据配置构建 CORS，`*` 表示不限制
pub fn build_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default().max_age(config.max_age);

    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allowed_methods.iter().any(|m| m == "*") {
        cors = cors.allow_any_method();
    } else {
        cors = cors.allowed_methods(config.allowed_methods.iter().map(String::as_str));
    }

    if config.allowed_headers.iter().any(|h| h == "*") {
        cors = cors.allow_any_header();
    } else {
        cors = cors.allowed_headers(config.allowed_headers.iter().map(String::as_str));
    }

    cors
}

/// 准备服务器启动的上下文
/// 包括存储和缓存
pub async fn prepare_server_startup() -> Result<StartupContext, Box<dyn std::error::Error>> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| "Failed to install rustls crypto provider")?;

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}
