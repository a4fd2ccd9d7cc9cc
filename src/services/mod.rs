pub mod groups;
pub mod options;
pub mod rooms;
pub mod schedules;
pub mod timetable;

pub use groups::GroupService;
pub use options::OptionService;
pub use rooms::RoomService;
pub use schedules::ScheduleService;
pub use timetable::TimetableService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::storage::Storage;

/// 从 app_data 取存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

/// 从 app_data 取缓存实例，未注册缓存时返回 None
pub(crate) fn cache_from_request(request: &HttpRequest) -> Option<Arc<dyn ObjectCache>> {
    request
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|cache| cache.get_ref().clone())
}
