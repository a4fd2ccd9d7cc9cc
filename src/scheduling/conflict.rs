//! 教室冲突检查
//!
//! 同一教室、同一天内任意两节课的时间区间不得重叠。这里只做预检：
//! 输入是调用方拿到的条目快照，快照过期可能漏报，写入时由服务层
//! 在最新数据上再检查一次。

use super::overlap::intervals_overlap;
use super::{day_name, is_valid_day, is_valid_time_range};
use crate::models::schedules::entities::{ScheduleCandidate, ScheduleEntry};
use crate::models::schedules::responses::ConflictCheckResponse;

/// 字段齐全且取值合法的候选条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub room_id: i64,
    pub day: i32,
    pub start_time: i32,
    pub end_time: i32,
}

impl Slot {
    pub fn overlaps(&self, entry: &ScheduleEntry) -> bool {
        self.room_id == entry.room_id
            && self.day == entry.day
            && intervals_overlap(
                self.start_time,
                self.end_time,
                entry.start_time,
                entry.end_time,
            )
    }
}

impl ScheduleCandidate {
    /// 教室、星期、起止时间全部填写且合法时返回 `Slot`
    pub fn complete(&self) -> Option<Slot> {
        let slot = Slot {
            room_id: self.room_id?,
            day: self.day?,
            start_time: self.start_time?,
            end_time: self.end_time?,
        };
        (is_valid_day(slot.day) && is_valid_time_range(slot.start_time, slot.end_time))
            .then_some(slot)
    }
}

impl From<Slot> for ScheduleCandidate {
    fn from(slot: Slot) -> Self {
        Self {
            room_id: Some(slot.room_id),
            day: Some(slot.day),
            start_time: Some(slot.start_time),
            end_time: Some(slot.end_time),
        }
    }
}

/// 冲突检查结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictOutcome<'a> {
    /// 候选条目不完整，无法判断
    Indeterminate,
    Clear,
    Conflict(&'a ScheduleEntry),
}

impl ConflictOutcome<'_> {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictOutcome::Conflict(_))
    }

    pub fn is_complete(&self) -> bool {
        !matches!(self, ConflictOutcome::Indeterminate)
    }

    pub fn description(&self) -> Option<String> {
        match self {
            ConflictOutcome::Conflict(entry) => Some(describe_conflict(entry)),
            _ => None,
        }
    }
}

impl From<ConflictOutcome<'_>> for ConflictCheckResponse {
    fn from(outcome: ConflictOutcome<'_>) -> Self {
        Self {
            conflict: outcome.is_conflict(),
            complete: outcome.is_complete(),
            description: outcome.description(),
            conflicting_entry: match outcome {
                ConflictOutcome::Conflict(entry) => Some(entry.clone()),
                _ => None,
            },
        }
    }
}

/// 在 `existing` 中查找与 `slot` 冲突的第一个条目，`exclude_id` 对应的条目不参与比较
pub fn find_conflict<'a>(
    slot: &Slot,
    existing: &'a [ScheduleEntry],
    exclude_id: Option<i64>,
) -> Option<&'a ScheduleEntry> {
    existing
        .iter()
        .filter(|entry| exclude_id.is_none() || entry.id != exclude_id)
        .find(|entry| slot.overlaps(entry))
}

/// 检查候选条目是否与已有条目冲突
///
/// 候选条目不完整或取值非法时返回 `Indeterminate`，不会报冲突；
/// 调用方需要同时满足“字段完整”和“无冲突”两个条件才能提交。
pub fn has_conflict<'a>(
    candidate: &ScheduleCandidate,
    existing: &'a [ScheduleEntry],
    exclude_id: Option<i64>,
) -> ConflictOutcome<'a> {
    match candidate.complete() {
        None => ConflictOutcome::Indeterminate,
        Some(slot) => match find_conflict(&slot, existing, exclude_id) {
            Some(entry) => ConflictOutcome::Conflict(entry),
            None => ConflictOutcome::Clear,
        },
    }
}

/// 冲突提示文案，包含教室、星期和时间段
pub fn describe_conflict(entry: &ScheduleEntry) -> String {
    format!(
        "{} is already booked on {} from {:02}:00 to {:02}:00 by {} ({})",
        entry.room_name,
        day_name(entry.day).unwrap_or("an unknown day"),
        entry.start_time,
        entry.end_time,
        entry.group_name,
        entry.course_name
    )
}
