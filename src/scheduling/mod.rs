//! 课表核心逻辑
//!
//! 全部为同步纯函数，只读取调用方传入的快照，不做 I/O：
//! - `overlap`: 半开区间重叠判定，冲突检查与网格投影共用
//! - `conflict`: 候选条目与已有条目的教室冲突检查
//! - `projector`: 把某一天的条目投影为 教室 × 小时 网格
//! - `palette`: 课块颜色哈希
//! - `viewport`: 视口类型，决定课块标签的详略

pub mod conflict;
pub mod overlap;
pub mod palette;
pub mod projector;
pub mod viewport;

pub use conflict::{ConflictOutcome, Slot, describe_conflict, find_conflict, has_conflict};
pub use overlap::intervals_overlap;
pub use palette::{BLOCK_PALETTE, block_color, color_index};
pub use projector::{HourWindow, TimetableMatrix, build_matrix, matrix_key, project_grid};
pub use viewport::Viewport;

/// 一天中最早的小时
pub const MIN_HOUR: i32 = 0;
/// 一天中最晚的小时（不含）
pub const MAX_HOUR: i32 = 24;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// 1 = 周一 … 7 = 周日
pub fn is_valid_day(day: i32) -> bool {
    (1..=7).contains(&day)
}

/// `0 <= start < end <= 24`
pub fn is_valid_time_range(start: i32, end: i32) -> bool {
    MIN_HOUR <= start && start < end && end <= MAX_HOUR
}

pub fn day_name(day: i32) -> Option<&'static str> {
    if is_valid_day(day) {
        Some(DAY_NAMES[(day - 1) as usize])
    } else {
        None
    }
}
