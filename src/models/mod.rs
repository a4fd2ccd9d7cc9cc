pub mod common;
pub mod groups;
pub mod options;
pub mod rooms;
pub mod schedules;
pub mod timetable;

pub use common::response::ApiResponse;

/// 业务错误码
///
/// - 0: 成功
/// - 1xxx: 通用错误
/// - 2xxx: 教室
/// - 3xxx: 教学班
/// - 4xxx: 课表
/// - 5xxx: 服务端错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    NotFound = 1004,
    RateLimitExceeded = 1029,

    RoomNotFound = 2001,
    RoomAlreadyExists = 2002,
    RoomNameInvalid = 2003,
    RoomInUse = 2004,

    GroupNotFound = 3001,
    GroupAlreadyExists = 3002,
    GroupNameInvalid = 3003,
    GroupInUse = 3004,

    ScheduleNotFound = 4001,
    ScheduleInvalid = 4002,
    ScheduleConflict = 4003,
    TimetableWindowInvalid = 4004,
    OptionResourceUnknown = 4005,

    InternalServerError = 5000,
}
