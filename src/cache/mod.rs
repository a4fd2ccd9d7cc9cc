//! 对象缓存层
//!
//! 所有后端都只存取字符串，序列化由调用方负责。后端通过
//! `declare_object_cache_plugin!` 在程序加载时注册到插件表，
//! 启动时按 `cache.type` 选取。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 后端异常（如连接失败），调用方应当回源
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// `ttl` 为 0 时使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明缓存插件，在程序加载时注册构造函数
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| -> $crate::cache::register::BoxedObjectCacheFuture {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::TimetableError::cache_connection)?;
                        Ok::<_, $crate::errors::TimetableError>(
                            Box::new(cache) as Box<dyn $crate::cache::ObjectCache>
                        )
                    })
                }),
            );
        }
    };
}
