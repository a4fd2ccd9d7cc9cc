pub mod grid;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::timetable::requests::TimetableQuery;
use crate::storage::Storage;

pub struct TimetableService {
    storage: Option<Arc<dyn Storage>>,
}

impl TimetableService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 获取某一天的 教室 × 小时 网格
    pub async fn get_timetable(
        &self,
        request: &HttpRequest,
        query: TimetableQuery,
    ) -> ActixResult<HttpResponse> {
        grid::get_timetable(self, request, query).await
    }
}
