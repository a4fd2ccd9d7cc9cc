use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::schedules::requests::CreateScheduleRequest;
use crate::scheduling::{MAX_HOUR, MIN_HOUR, is_valid_day, is_valid_time_range};

static RESOURCE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}\p{N} _#()./-]+$").expect("Invalid resource name regex")
});

const NAME_MAX_CHARS: usize = 64;
const COURSE_NAME_MAX_CHARS: usize = 128;

/// 教室名 / 班名校验：1..=64 个字符，只能包含字母、数字、空格及 `-_#()./`
pub fn validate_resource_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be empty");
    }
    if trimmed.chars().count() > NAME_MAX_CHARS {
        return Err("Name must be at most 64 characters");
    }
    if !RESOURCE_NAME_RE.is_match(trimmed) {
        return Err("Name may only contain letters, digits, spaces and - _ # ( ) . /");
    }
    Ok(())
}

pub fn validate_course_name(course_name: &str) -> Result<(), &'static str> {
    let trimmed = course_name.trim();
    if trimmed.is_empty() {
        return Err("Course name must not be empty");
    }
    if trimmed.chars().count() > COURSE_NAME_MAX_CHARS {
        return Err("Course name must be at most 128 characters");
    }
    if trimmed.chars().any(char::is_control) {
        return Err("Course name must not contain control characters");
    }
    Ok(())
}

/// 写入前的课表条目校验，收集全部错误
pub fn validate_schedule(req: &CreateScheduleRequest) -> Result<(), String> {
    let mut errors = Vec::new();

    if req.room_id <= 0 {
        errors.push("roomId must be a positive integer".to_string());
    }
    if req.group_id <= 0 {
        errors.push("groupId must be a positive integer".to_string());
    }
    if !is_valid_day(req.day) {
        errors.push(format!("day must be between 1 and 7, got {}", req.day));
    }
    if !is_valid_time_range(req.start_time, req.end_time) {
        errors.push(format!(
            "time range must satisfy {MIN_HOUR} <= startTime < endTime <= {MAX_HOUR}, got [{}, {})",
            req.start_time, req.end_time
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}
