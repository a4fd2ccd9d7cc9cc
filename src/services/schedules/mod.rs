//! 课表条目服务
//!
//! 写入路径在全局写锁内完成 “读取最新快照 → 冲突检查 → 写入”，
//! 预检接口只读，不加锁。

pub mod check;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::errors::TimetableError;
use crate::models::schedules::requests::{
    ConflictCheckRequest, CreateScheduleRequest, ScheduleListQuery, UpdateScheduleRequest,
};
use crate::models::schedules::responses::ConflictCheckResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::scheduling::{ConflictOutcome, Slot, find_conflict};
use crate::storage::Storage;
use crate::utils::validate::validate_schedule;

/// 串行化课表写入，避免两个请求同时通过冲突检查
static SCHEDULE_WRITE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub struct ScheduleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ScheduleService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 获取课表条目列表
    pub async fn list_schedules(
        &self,
        request: &HttpRequest,
        query: ScheduleListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_schedules(self, request, query).await
    }

    pub async fn get_schedule(
        &self,
        request: &HttpRequest,
        schedule_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::get_schedule(self, request, schedule_id).await
    }

    pub async fn create_schedule(
        &self,
        request: &HttpRequest,
        schedule_data: CreateScheduleRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_schedule(self, request, schedule_data).await
    }

    // 部分更新，合并后整体重新校验
    pub async fn update_schedule(
        &self,
        request: &HttpRequest,
        schedule_id: i64,
        update_data: UpdateScheduleRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_schedule(self, request, schedule_id, update_data).await
    }

    pub async fn delete_schedule(
        &self,
        request: &HttpRequest,
        schedule_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_schedule(self, request, schedule_id).await
    }

    // 表单预检，字段可不全
    pub async fn check_conflict(
        &self,
        request: &HttpRequest,
        check_data: ConflictCheckRequest,
    ) -> ActixResult<HttpResponse> {
        check::check_conflict(self, request, check_data).await
    }
}

/// 字段校验不通过时返回 400 响应
fn validate_write(req: &CreateScheduleRequest) -> Result<(), HttpResponse> {
    validate_schedule(req).map_err(|msg| {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ScheduleInvalid, msg))
    })
}

/// 写锁内调用：确认教室和教学班存在，并在最新快照上做冲突检查
async fn ensure_writable(
    storage: &Arc<dyn Storage>,
    req: &CreateScheduleRequest,
    exclude_id: Option<i64>,
) -> Result<(), HttpResponse> {
    match storage.get_room_by_id(req.room_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RoomNotFound,
                format!("Room {} not found", req.room_id),
            )));
        }
        Err(e) => return Err(internal_error("Failed to get room information", &e)),
    }

    match storage.get_group_by_id(req.group_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                format!("Group {} not found", req.group_id),
            )));
        }
        Err(e) => return Err(internal_error("Failed to get group information", &e)),
    }

    let snapshot = storage
        .list_schedules(ScheduleListQuery {
            room_id: Some(req.room_id),
            day: Some(req.day),
            group_id: None,
        })
        .await
        .map_err(|e| internal_error("Failed to load schedule snapshot", &e))?;

    let slot = Slot {
        room_id: req.room_id,
        day: req.day,
        start_time: req.start_time,
        end_time: req.end_time,
    };

    if let Some(entry) = find_conflict(&slot, &snapshot, exclude_id) {
        let outcome = ConflictOutcome::Conflict(entry);
        let description = outcome.description().unwrap_or_default();
        info!("Schedule write rejected: {}", description);
        return Err(HttpResponse::Conflict().json(ApiResponse::error(
            ErrorCode::ScheduleConflict,
            ConflictCheckResponse::from(outcome),
            description,
        )));
    }

    Ok(())
}

fn internal_error(context: &str, e: &TimetableError) -> HttpResponse {
    error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ApiResponse::internal(context, e))
}
