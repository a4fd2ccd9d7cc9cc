use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::{OptionService, options_generation};
use crate::cache::{CacheResult, ObjectCache};
use crate::errors::Result;
use crate::models::groups::requests::GroupListQuery;
use crate::models::options::{OptionItem, OptionListResponse, OptionResource};
use crate::models::rooms::requests::RoomListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::cache_from_request;
use crate::storage::Storage;

pub async fn list_options(
    service: &OptionService,
    request: &HttpRequest,
    resource: String,
) -> ActixResult<HttpResponse> {
    let resource = match resource.parse::<OptionResource>() {
        Ok(resource) => resource,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::OptionResourceUnknown, msg)));
        }
    };

    let cache = cache_from_request(request);

    if let Some(items) = read_cached(cache.as_ref(), resource).await {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            OptionListResponse { resource, items },
            "Options retrieved successfully",
        )));
    }

    let generation = options_generation(resource);
    let storage = service.get_storage(request);
    let items = match load_options(&storage, resource).await {
        Ok(items) => items,
        Err(e) => {
            error!("Failed to load {} options: {}", resource, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::internal("Failed to load options", &e)));
        }
    };

    if let Some(cache) = &cache {
        store_cached(cache, resource, &items, generation).await;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        OptionListResponse { resource, items },
        "Options retrieved successfully",
    )))
}

async fn read_cached(
    cache: Option<&Arc<dyn ObjectCache>>,
    resource: OptionResource,
) -> Option<Vec<OptionItem>> {
    let cache = cache?;
    match cache.get_raw(&resource.cache_key()).await {
        CacheResult::Found(json) => match serde_json::from_str(&json) {
            Ok(items) => {
                debug!("Option cache hit: {}", resource);
                Some(items)
            }
            Err(e) => {
                warn!("Discarding corrupted {} option cache: {}", resource, e);
                cache.remove(&resource.cache_key()).await;
                None
            }
        },
        CacheResult::NotFound | CacheResult::ExistsButNoValue => None,
    }
}

/// 写回缓存；加载期间发生过失效时不写，写入后才失效的再删掉
async fn store_cached(
    cache: &Arc<dyn ObjectCache>,
    resource: OptionResource,
    items: &[OptionItem],
    generation: u64,
) {
    if options_generation(resource) != generation {
        debug!("Skipping stale {} option cache write", resource);
        return;
    }

    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize {} options for cache: {}", resource, e);
            return;
        }
    };
    cache.insert_raw(resource.cache_key(), json, 0).await;

    if options_generation(resource) != generation {
        debug!("Option cache invalidated during write, dropping {}", resource);
        cache.remove(&resource.cache_key()).await;
    }
}

async fn load_options(
    storage: &Arc<dyn Storage>,
    resource: OptionResource,
) -> Result<Vec<OptionItem>> {
    let items = match resource {
        OptionResource::Rooms => storage
            .list_rooms(RoomListQuery::default())
            .await?
            .into_iter()
            .map(|room| OptionItem {
                id: room.id,
                label: room.name,
            })
            .collect(),
        OptionResource::Groups => storage
            .list_groups(GroupListQuery::default())
            .await?
            .into_iter()
            .map(|group| OptionItem {
                id: group.id,
                label: format!("{} · {}", group.name, group.course_name),
            })
            .collect(),
    };
    Ok(items)
}
