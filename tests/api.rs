//! HTTP 层集成测试：路由 → 服务 → Storage trait，存储使用内存实现

use std::sync::{Arc, Mutex};

use actix_web::{App, http::StatusCode, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::sync::Notify;

use rust_timetable_next::cache::ObjectCache;
use rust_timetable_next::cache::object_cache::MokaCacheWrapper;
use rust_timetable_next::errors::Result;
use rust_timetable_next::models::ErrorCode;
use rust_timetable_next::models::groups::{
    entities::ClassGroup,
    requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest},
};
use rust_timetable_next::models::rooms::{
    entities::Room,
    requests::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest},
};
use rust_timetable_next::models::schedules::{
    entities::ScheduleEntry,
    requests::{CreateScheduleRequest, ScheduleListQuery},
};
use rust_timetable_next::routes;
use rust_timetable_next::storage::Storage;
use rust_timetable_next::utils::{json_error_handler, query_error_handler};

#[derive(Default)]
struct State {
    rooms: Vec<Room>,
    groups: Vec<ClassGroup>,
    schedules: Vec<(i64, CreateScheduleRequest)>,
    next_id: i64,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn entry(&self, id: i64, row: &CreateScheduleRequest) -> ScheduleEntry {
        let room = self.rooms.iter().find(|r| r.id == row.room_id);
        let group = self.groups.iter().find(|g| g.id == row.group_id);
        ScheduleEntry {
            id: Some(id),
            room_id: row.room_id,
            room_name: room.map(|r| r.name.clone()).unwrap_or_default(),
            group_id: row.group_id,
            group_name: group.map(|g| g.name.clone()).unwrap_or_default(),
            course_name: group.map(|g| g.course_name.clone()).unwrap_or_default(),
            day: row.day,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

/// 让 `list_rooms` 取完快照后停住，直到测试放行
#[derive(Default)]
struct ListGate {
    snapshot_taken: Notify,
    release: Notify,
}

/// 内存存储，行为与 SeaOrmStorage 保持一致
#[derive(Default)]
struct MemoryStorage {
    state: Mutex<State>,
    room_list_gate: Mutex<Option<Arc<ListGate>>>,
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room> {
        let mut state = self.state.lock().unwrap();
        let now = chrono::Utc::now();
        let room = Room {
            id: state.next_id(),
            name: room.name,
            capacity: room.capacity,
            created_at: now,
            updated_at: now,
        };
        state.rooms.push(room.clone());
        Ok(room)
    }

    async fn get_room_by_id(&self, id: i64) -> Result<Option<Room>> {
        let state = self.state.lock().unwrap();
        Ok(state.rooms.iter().find(|r| r.id == id).cloned())
    }

    async fn get_room_by_name(&self, name: &str) -> Result<Option<Room>> {
        let state = self.state.lock().unwrap();
        Ok(state.rooms.iter().find(|r| r.name == name).cloned())
    }

    async fn list_rooms(&self, query: RoomListQuery) -> Result<Vec<Room>> {
        let rooms: Vec<Room> = {
            let state = self.state.lock().unwrap();
            state
                .rooms
                .iter()
                .filter(|r| query.search.as_ref().is_none_or(|s| r.name.contains(s.as_str())))
                .cloned()
                .collect()
        };

        let gate = self.room_list_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.snapshot_taken.notify_one();
            gate.release.notified().await;
        }
        Ok(rooms)
    }

    async fn update_room(&self, id: i64, update: UpdateRoomRequest) -> Result<Option<Room>> {
        let mut state = self.state.lock().unwrap();
        let Some(room) = state.rooms.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            room.name = name;
        }
        if let Some(capacity) = update.capacity {
            room.capacity = Some(capacity);
        }
        Ok(Some(room.clone()))
    }

    async fn delete_room(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.rooms.len();
        state.rooms.retain(|r| r.id != id);
        Ok(state.rooms.len() != before)
    }

    async fn create_group(&self, group: CreateGroupRequest) -> Result<ClassGroup> {
        let mut state = self.state.lock().unwrap();
        let now = chrono::Utc::now();
        let group = ClassGroup {
            id: state.next_id(),
            name: group.name,
            course_name: group.course_name,
            created_at: now,
            updated_at: now,
        };
        state.groups.push(group.clone());
        Ok(group)
    }

    async fn get_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>> {
        let state = self.state.lock().unwrap();
        Ok(state.groups.iter().find(|g| g.id == id).cloned())
    }

    async fn get_group_by_name(&self, name: &str) -> Result<Option<ClassGroup>> {
        let state = self.state.lock().unwrap();
        Ok(state.groups.iter().find(|g| g.name == name).cloned())
    }

    async fn list_groups(&self, _query: GroupListQuery) -> Result<Vec<ClassGroup>> {
        Ok(self.state.lock().unwrap().groups.clone())
    }

    async fn update_group(
        &self,
        id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<ClassGroup>> {
        let mut state = self.state.lock().unwrap();
        let Some(group) = state.groups.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            group.name = name;
        }
        if let Some(course_name) = update.course_name {
            group.course_name = course_name;
        }
        Ok(Some(group.clone()))
    }

    async fn delete_group(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.groups.len();
        state.groups.retain(|g| g.id != id);
        Ok(state.groups.len() != before)
    }

    async fn create_schedule(&self, schedule: CreateScheduleRequest) -> Result<ScheduleEntry> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let entry = state.entry(id, &schedule);
        state.schedules.push((id, schedule));
        Ok(entry)
    }

    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<ScheduleEntry>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .schedules
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(sid, row)| state.entry(*sid, row)))
    }

    async fn list_schedules(&self, query: ScheduleListQuery) -> Result<Vec<ScheduleEntry>> {
        let state = self.state.lock().unwrap();
        let mut entries: Vec<ScheduleEntry> = state
            .schedules
            .iter()
            .filter(|(_, row)| query.room_id.is_none_or(|id| row.room_id == id))
            .filter(|(_, row)| query.group_id.is_none_or(|id| row.group_id == id))
            .filter(|(_, row)| query.day.is_none_or(|day| row.day == day))
            .map(|(id, row)| state.entry(*id, row))
            .collect();
        entries.sort_by_key(|e| (e.day, e.start_time, e.room_id));
        Ok(entries)
    }

    async fn update_schedule(
        &self,
        id: i64,
        schedule: CreateScheduleRequest,
    ) -> Result<Option<ScheduleEntry>> {
        let mut state = self.state.lock().unwrap();
        let Some(slot) = state.schedules.iter_mut().find(|(sid, _)| *sid == id) else {
            return Ok(None);
        };
        slot.1 = schedule.clone();
        Ok(Some(state.entry(id, &schedule)))
    }

    async fn delete_schedule(&self, id: i64) -> Result<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.schedules.len();
        state.schedules.retain(|(sid, _)| *sid != id);
        Ok(state.schedules.len() != before)
    }

    async fn count_schedules_by_room(&self, room_id: i64) -> Result<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .schedules
            .iter()
            .filter(|(_, row)| row.room_id == room_id)
            .count() as u64)
    }

    async fn count_schedules_by_group(&self, group_id: i64) -> Result<u64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .schedules
            .iter()
            .filter(|(_, row)| row.group_id == group_id)
            .count() as u64)
    }
}

macro_rules! init_app {
    () => {
        init_app!(Arc::new(MemoryStorage::default()))
    };
    ($storage:expr) => {{
        let storage: Arc<dyn Storage> = $storage;
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(cache))
                .configure(routes::configure_rooms_routes)
                .configure(routes::configure_groups_routes)
                .configure(routes::configure_schedules_routes)
                .configure(routes::configure_timetable_routes)
                .configure(routes::configure_options_routes),
        )
        .await
    }};
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

macro_rules! seed {
    ($app:expr) => {{
        let (_, room) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/v1/rooms")
                .set_json(json!({"name": "Room 101", "capacity": 40}))
        );
        let (_, lab) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/v1/rooms")
                .set_json(json!({"name": "Lab A"}))
        );
        let (_, group) = send!(
            $app,
            test::TestRequest::post()
                .uri("/api/v1/groups")
                .set_json(json!({"name": "G1", "courseName": "Math"}))
        );
        (
            room["data"]["id"].as_i64().unwrap(),
            lab["data"]["id"].as_i64().unwrap(),
            group["data"]["id"].as_i64().unwrap(),
        )
    }};
}

fn schedule_body(room_id: i64, group_id: i64, day: i32, start: i32, end: i32) -> Value {
    json!({
        "roomId": room_id,
        "groupId": group_id,
        "day": day,
        "startTime": start,
        "endTime": end,
    })
}

#[actix_web::test]
async fn test_room_crud_and_duplicate_name() {
    let app = init_app!();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({"name": "Room 101", "capacity": 40}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], 0);
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({"name": "Room 101"}))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::RoomAlreadyExists as i32);

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/rooms/{id}"))
            .set_json(json!({"capacity": 60}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["capacity"], 60);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({"name": "Bad;Name"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/v1/rooms/{id}"))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send!(app, test::TestRequest::get().uri(&format!("/api/v1/rooms/{id}")));
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::RoomNotFound as i32);

    let (status, _) = send!(app, test::TestRequest::get().uri("/api/v1/rooms/abc"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_schedule_write_rejects_conflict_and_allows_adjacent() {
    let app = init_app!();
    let (room, lab, group) = seed!(app);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 1, 9, 11))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["roomName"], "Room 101");
    assert_eq!(body["data"]["courseName"], "Math");
    let first_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 1, 10, 12))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::ScheduleConflict as i32);
    assert_eq!(body["data"]["conflict"], true);
    assert_eq!(body["data"]["conflictingEntry"]["id"], first_id);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Room 101"));
    assert!(message.contains("Monday"));

    // 首尾相接不算冲突
    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 1, 11, 12))
    );
    assert_eq!(status, StatusCode::CREATED);

    // 不同教室、不同天都不冲突
    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(lab, group, 1, 9, 11))
    );
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 2, 9, 11))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/api/v1/schedules?roomId={room}&day=1"))
    );
    assert_eq!(status, StatusCode::OK);
    let starts: Vec<i64> = body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["startTime"].as_i64().unwrap())
        .collect();
    assert_eq!(starts, vec![9, 11]);
}

#[actix_web::test]
async fn test_schedule_write_validation_and_references() {
    let app = init_app!();
    let (room, _, group) = seed!(app);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 8, 9, 11))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::ScheduleInvalid as i32);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 1, 23, 25))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(999, group, 1, 9, 11))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], ErrorCode::RoomNotFound as i32);

    // 缺字段的写入请求在反序列化时就被拒绝
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(json!({"roomId": room, "day": 1}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::BadRequest as i32);
}

#[actix_web::test]
async fn test_update_excludes_itself_from_conflicts() {
    let app = init_app!();
    let (room, _, group) = seed!(app);

    let (_, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 3, 9, 11))
    );
    let id = body["data"]["id"].as_i64().unwrap();
    send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 3, 13, 15))
    );

    // 只改结束时间，仍与自身原区间重叠，但不算冲突
    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/schedules/{id}"))
            .set_json(json!({"endTime": 12}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["startTime"], 9);
    assert_eq!(body["data"]["endTime"], 12);

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/schedules/{id}"))
            .set_json(json!({"endTime": 14}))
    );
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/v1/schedules/{id}"))
    );
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/v1/schedules/{id}"))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_conflict_check_endpoint() {
    let app = init_app!();
    let (room, _, group) = seed!(app);

    let (_, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 1, 9, 11))
    );
    let id = body["data"]["id"].as_i64().unwrap();

    // 字段不全：不报冲突，但标记为不完整
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules/check")
            .set_json(json!({"roomId": room, "day": 1, "startTime": 10}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["conflict"], false);
    assert_eq!(body["data"]["complete"], false);

    let (_, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules/check")
            .set_json(json!({"roomId": room, "day": 1, "startTime": 10, "endTime": 12}))
    );
    assert_eq!(body["data"]["conflict"], true);
    assert_eq!(body["data"]["complete"], true);
    assert!(body["data"]["description"].as_str().unwrap().contains("Room 101"));

    let (_, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules/check")
            .set_json(json!({
                "roomId": room, "day": 1, "startTime": 10, "endTime": 12, "excludeId": id
            }))
    );
    assert_eq!(body["data"]["conflict"], false);
    assert_eq!(body["data"]["complete"], true);
}

#[actix_web::test]
async fn test_referenced_room_and_group_cannot_be_deleted() {
    let app = init_app!();
    let (room, _, group) = seed!(app);

    send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 1, 9, 11))
    );

    let (status, body) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/v1/rooms/{room}"))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::RoomInUse as i32);

    let (status, body) = send!(
        app,
        test::TestRequest::delete().uri(&format!("/api/v1/groups/{group}"))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], ErrorCode::GroupInUse as i32);
}

#[actix_web::test]
async fn test_timetable_grid_projection() {
    let app = init_app!();
    let (room, lab, group) = seed!(app);

    send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(room, group, 1, 22, 24))
    );
    send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/schedules")
            .set_json(schedule_body(lab, group, 1, 9, 11))
    );

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/v1/timetable?day=1"));
    assert_eq!(status, StatusCode::OK);
    let grid = &body["data"];
    assert_eq!(grid["dayName"], "Monday");
    assert_eq!(grid["startHour"], 8);
    assert_eq!(grid["endHour"], 24);
    assert_eq!(grid["rows"].as_array().unwrap().len(), 16);
    assert_eq!(grid["rooms"][0]["id"], room);
    assert_eq!(grid["rooms"][1]["id"], lab);

    // 第 1 行为 9 点；第 2 列是 Lab A
    let nine = &grid["rows"][1]["cells"][1];
    assert_eq!(nine["kind"], "block");
    assert_eq!(nine["rowSpan"], 2);
    assert_eq!(grid["rows"][2]["cells"][1]["kind"], "continuation");
    assert_eq!(grid["rows"][3]["cells"][1]["kind"], "empty");

    // 窗口截断到 23 点
    let (_, body) = send!(
        app,
        test::TestRequest::get().uri("/api/v1/timetable?day=1&startHour=20&endHour=23&viewport=mobile")
    );
    let block = &body["data"]["rows"][2]["cells"][0];
    assert_eq!(block["kind"], "block");
    assert_eq!(block["rowSpan"], 1);
    assert_eq!(block["label"], "G1");
    assert_eq!(body["data"]["viewport"], "mobile");

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/v1/timetable?day=1&startHour=10&endHour=10")
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::TimetableWindowInvalid as i32);

    let (status, _) = send!(app, test::TestRequest::get().uri("/api/v1/timetable?day=0"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_options_are_cached_and_invalidated() {
    let app = init_app!();
    let (room, _, _) = seed!(app);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/v1/options/rooms"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["resource"], "rooms");
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);

    // 改名后缓存失效，返回新名称
    send!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/rooms/{room}"))
            .set_json(json!({"name": "Room 102"}))
    );
    let (_, body) = send!(app, test::TestRequest::get().uri("/api/v1/options/rooms"));
    assert_eq!(body["data"]["items"][0]["label"], "Room 102");

    let (_, body) = send!(app, test::TestRequest::get().uri("/api/v1/options/groups"));
    assert_eq!(body["data"]["items"][0]["label"], "G1 · Math");

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/v1/options/instructors"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], ErrorCode::OptionResourceUnknown as i32);
}

#[actix_web::test]
async fn test_options_loaded_during_rename_are_not_cached() {
    let storage = Arc::new(MemoryStorage::default());
    let app = init_app!(storage.clone());
    let (room, _, _) = seed!(app);

    let gate = Arc::new(ListGate::default());
    *storage.room_list_gate.lock().unwrap() = Some(gate.clone());

    let load = async { send!(app, test::TestRequest::get().uri("/api/v1/options/rooms")) };
    let rename = async {
        gate.snapshot_taken.notified().await;
        let (status, _) = send!(
            app,
            test::TestRequest::put()
                .uri(&format!("/api/v1/rooms/{room}"))
                .set_json(json!({"name": "Room 102"}))
        );
        gate.release.notify_one();
        status
    };
    let ((_, loaded), renamed) = tokio::join!(load, rename);
    assert_eq!(renamed, StatusCode::OK);
    assert_eq!(loaded["data"]["items"][0]["label"], "Room 101");

    // 加载期间的旧列表不能留在缓存里
    let (_, body) = send!(app, test::TestRequest::get().uri("/api/v1/options/rooms"));
    assert_eq!(body["data"]["items"][0]["label"], "Room 102");
}
