//! 下拉选项查询
//!
//! 选项列表按资源类型缓存在 `options:{resource}` 下，教室或教学班
//! 发生增删改时由对应服务调用 `invalidate_options` 清除。
//!
//! 每类资源带一个缓存代数，失效时递增。加载期间代数发生变化的结果
//! 不会留在缓存里。

pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::cache::ObjectCache;
use crate::models::options::OptionResource;
use crate::storage::Storage;

static ROOM_OPTIONS_GENERATION: AtomicU64 = AtomicU64::new(0);
static GROUP_OPTIONS_GENERATION: AtomicU64 = AtomicU64::new(0);

fn generation_counter(resource: OptionResource) -> &'static AtomicU64 {
    match resource {
        OptionResource::Rooms => &ROOM_OPTIONS_GENERATION,
        OptionResource::Groups => &GROUP_OPTIONS_GENERATION,
    }
}

/// 当前缓存代数
pub(crate) fn options_generation(resource: OptionResource) -> u64 {
    generation_counter(resource).load(Ordering::SeqCst)
}

pub struct OptionService {
    storage: Option<Arc<dyn Storage>>,
}

impl OptionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 获取下拉选项
    pub async fn list_options(
        &self,
        request: &HttpRequest,
        resource: String,
    ) -> ActixResult<HttpResponse> {
        list::list_options(self, request, resource).await
    }
}

/// 清除某类资源的选项缓存
///
/// 先递增代数再删除键，正在加载的旧结果写回后会被自己撤掉
pub async fn invalidate_options(cache: Option<&Arc<dyn ObjectCache>>, resource: OptionResource) {
    generation_counter(resource).fetch_add(1, Ordering::SeqCst);
    if let Some(cache) = cache {
        let key = resource.cache_key();
        cache.remove(&key).await;
        debug!("Option cache invalidated: {}", key);
    }
}
