//! 课表网格投影
//!
//! 先按天建立 `"{room_id}-{start_time}"` → 条目 的索引（matrix），再按
//! 调用方给出的教室列表和小时窗口逐格分类：课块起始格、被课块覆盖的
//! 延续格、空闲格。小时窗口由调用方决定，这里不假设固定范围。

use std::collections::HashMap;
use std::ops::Range;

use super::overlap::intervals_overlap;
use super::palette::{BLOCK_PALETTE, block_color, color_index};
use super::viewport::Viewport;
use super::{MAX_HOUR, MIN_HOUR, day_name};
use crate::errors::{Result, TimetableError};
use crate::models::schedules::entities::{ScheduleCandidate, ScheduleEntry};
use crate::models::timetable::entities::{GridCell, GridRow, RoomColumn, TimetableGrid};

/// 网格显示的小时窗口 `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourWindow {
    start: i32,
    end: i32,
}

impl HourWindow {
    /// 8 点到 24 点，共 16 行
    pub const SCHOOL_DAY: HourWindow = HourWindow { start: 8, end: 24 };
    pub const FULL_DAY: HourWindow = HourWindow {
        start: MIN_HOUR,
        end: MAX_HOUR,
    };

    pub fn new(start: i32, end: i32) -> Result<Self> {
        if start < MIN_HOUR || end > MAX_HOUR || start >= end {
            return Err(TimetableError::validation(format!(
                "Invalid hour window [{start}, {end}): expected {MIN_HOUR} <= start < end <= {MAX_HOUR}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn hours(&self) -> Range<i32> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, hour: i32) -> bool {
        self.hours().contains(&hour)
    }

    /// 从 `top` 行开始、到 `end_time` 结束的课块在窗口内占的行数，
    /// 超出窗口下沿的部分被截掉；结果不大于 0 时不应渲染
    pub fn clipped_span(&self, top: i32, end_time: i32) -> i32 {
        end_time.min(self.end) - top
    }
}

impl Default for HourWindow {
    fn default() -> Self {
        Self::SCHOOL_DAY
    }
}

pub fn matrix_key(room_id: i64, hour: i32) -> String {
    format!("{room_id}-{hour}")
}

/// 某一天的课块起点索引
#[derive(Debug, Clone)]
pub struct TimetableMatrix<'a> {
    day: i32,
    starts: HashMap<String, &'a ScheduleEntry>,
    entries: Vec<&'a ScheduleEntry>,
}

/// 过滤出 `selected_day` 的条目，并以 `"{room_id}-{start_time}"` 建立索引
///
/// 只有起始小时是键，课块覆盖的后续小时不是。数据中若出现同教室同起点的
/// 重复条目，保留先出现的一条。
pub fn build_matrix(existing: &[ScheduleEntry], selected_day: i32) -> TimetableMatrix<'_> {
    let entries: Vec<&ScheduleEntry> = existing
        .iter()
        .filter(|entry| entry.day == selected_day)
        .collect();

    let mut starts = HashMap::with_capacity(entries.len());
    for entry in &entries {
        starts
            .entry(matrix_key(entry.room_id, entry.start_time))
            .or_insert(*entry);
    }

    TimetableMatrix {
        day: selected_day,
        starts,
        entries,
    }
}

impl<'a> TimetableMatrix<'a> {
    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn get(&self, key: &str) -> Option<&'a ScheduleEntry> {
        self.starts.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.starts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// 在 `(room_id, hour)` 开始的课块
    pub fn block_at(&self, room_id: i64, hour: i32) -> Option<&'a ScheduleEntry> {
        self.get(&matrix_key(room_id, hour))
    }

    /// 覆盖 `hour` 但不从 `hour` 开始的课块
    pub fn covering(&self, room_id: i64, hour: i32) -> Option<&'a ScheduleEntry> {
        self.entries.iter().copied().find(|entry| {
            entry.room_id == room_id
                && entry.start_time != hour
                && intervals_overlap(hour, hour + 1, entry.start_time, entry.end_time)
        })
    }

    pub fn is_continuation(&self, room_id: i64, hour: i32) -> bool {
        self.covering(room_id, hour).is_some()
    }

    fn classify(
        &self,
        room_id: i64,
        hour: i32,
        window: HourWindow,
        viewport: Viewport,
    ) -> GridCell {
        if let Some(entry) = self.block_at(room_id, hour) {
            return block_cell(entry, hour, window, viewport)
                .unwrap_or(GridCell::Empty { room_id, hour });
        }

        match self.covering(room_id, hour) {
            // 课块从窗口上沿之前开始：在第一行截断显示，而不是整块消失
            Some(entry) if hour == window.start() => block_cell(entry, hour, window, viewport)
                .unwrap_or(GridCell::Continuation { room_id, hour }),
            Some(_) => GridCell::Continuation { room_id, hour },
            None => GridCell::Empty { room_id, hour },
        }
    }
}

fn block_cell(
    entry: &ScheduleEntry,
    top: i32,
    window: HourWindow,
    viewport: Viewport,
) -> Option<GridCell> {
    let row_span = window.clipped_span(top, entry.end_time);
    if row_span <= 0 {
        return None;
    }

    let color_label = if entry.group_name.is_empty() {
        entry.group_id.to_string()
    } else {
        entry.group_name.clone()
    };
    let color_index = color_index(&color_label, BLOCK_PALETTE.len());

    Some(GridCell::Block {
        entry_id: entry.id,
        room_id: entry.room_id,
        group_id: entry.group_id,
        label: viewport.block_label(entry),
        start_time: entry.start_time,
        end_time: entry.end_time,
        row_span,
        color_index,
        color: block_color(&color_label).to_string(),
    })
}

/// 生成 `selected_day` 的网格：行是窗口内的小时，列是 `rooms`
pub fn project_grid(
    existing: &[ScheduleEntry],
    selected_day: i32,
    rooms: &[RoomColumn],
    window: HourWindow,
    viewport: Viewport,
) -> TimetableGrid {
    let matrix = build_matrix(existing, selected_day);

    let rows = window
        .hours()
        .map(|hour| GridRow {
            hour,
            cells: rooms
                .iter()
                .map(|room| matrix.classify(room.id, hour, window, viewport))
                .collect(),
        })
        .collect();

    TimetableGrid {
        day: selected_day,
        day_name: day_name(selected_day).unwrap_or_default().to_string(),
        start_hour: window.start(),
        end_hour: window.end(),
        viewport,
        rooms: rooms.to_vec(),
        rows,
    }
}

impl TimetableGrid {
    pub fn cell(&self, room_id: i64, hour: i32) -> Option<&GridCell> {
        let column = self.rooms.iter().position(|room| room.id == room_id)?;
        let row = self.rows.iter().find(|row| row.hour == hour)?;
        row.cells.get(column)
    }

    /// 点击空闲格子时预填的一小时候选条目；非空闲格子返回 `None`
    pub fn draft_at(&self, room_id: i64, hour: i32) -> Option<ScheduleCandidate> {
        match self.cell(room_id, hour)? {
            GridCell::Empty { .. } => Some(ScheduleCandidate {
                room_id: Some(room_id),
                day: Some(self.day),
                start_time: Some(hour),
                end_time: Some(hour + 1),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, room_id: i64, day: i32, start_time: i32, end_time: i32) -> ScheduleEntry {
        ScheduleEntry {
            id: Some(id),
            room_id,
            room_name: format!("Room {room_id}"),
            group_id: id * 10,
            group_name: format!("Group {id}"),
            course_name: "Chemistry".to_string(),
            day,
            start_time,
            end_time,
        }
    }

    fn rooms(ids: &[i64]) -> Vec<RoomColumn> {
        ids.iter()
            .map(|&id| RoomColumn {
                id,
                name: format!("Room {id}"),
            })
            .collect()
    }

    fn row_span(cell: &GridCell) -> i32 {
        match cell {
            GridCell::Block { row_span, .. } => *row_span,
            other => panic!("expected block, got {other:?}"),
        }
    }

    #[test]
    fn test_matrix_keys_only_start_hours() {
        let entries = vec![entry(1, 5, 3, 10, 13)];
        let matrix = build_matrix(&entries, 3);

        assert!(matrix.contains_key("5-10"));
        assert!(!matrix.contains_key("5-11"));
        assert!(!matrix.contains_key("5-12"));
        assert_eq!(matrix.get("5-10"), Some(&entries[0]));
        assert_eq!(matrix.len(), 1);
    }

    #[test]
    fn test_matrix_filters_by_day() {
        let entries = vec![entry(1, 5, 3, 10, 13), entry(2, 5, 4, 10, 13)];
        let matrix = build_matrix(&entries, 4);

        assert_eq!(matrix.day(), 4);
        assert_eq!(matrix.block_at(5, 10).and_then(|e| e.id), Some(2));
        assert!(build_matrix(&entries, 1).is_empty());
    }

    #[test]
    fn test_continuation_hours() {
        let entries = vec![entry(1, 5, 3, 10, 13)];
        let matrix = build_matrix(&entries, 3);

        assert!(!matrix.is_continuation(5, 10));
        assert!(matrix.is_continuation(5, 11));
        assert!(matrix.is_continuation(5, 12));
        assert!(!matrix.is_continuation(5, 13));
        assert!(!matrix.is_continuation(6, 11));
    }

    #[test]
    fn test_grid_cells_classified() {
        let entries = vec![entry(1, 5, 3, 10, 13), entry(2, 6, 3, 9, 10)];
        let grid = project_grid(
            &entries,
            3,
            &rooms(&[5, 6]),
            HourWindow::SCHOOL_DAY,
            Viewport::Desktop,
        );

        assert_eq!(grid.rows.len(), 16);
        assert_eq!(grid.day_name, "Wednesday");
        assert_eq!(row_span(grid.cell(5, 10).unwrap()), 3);
        assert_eq!(
            grid.cell(5, 11),
            Some(&GridCell::Continuation { room_id: 5, hour: 11 })
        );
        assert_eq!(
            grid.cell(5, 12),
            Some(&GridCell::Continuation { room_id: 5, hour: 12 })
        );
        assert_eq!(
            grid.cell(5, 13),
            Some(&GridCell::Empty { room_id: 5, hour: 13 })
        );
        assert_eq!(row_span(grid.cell(6, 9).unwrap()), 1);
        assert_eq!(
            grid.cell(6, 10),
            Some(&GridCell::Empty { room_id: 6, hour: 10 })
        );
    }

    #[test]
    fn test_block_clipped_at_window_end() {
        let entries = vec![entry(1, 1, 1, 22, 26)];
        let grid = project_grid(
            &entries,
            1,
            &rooms(&[1]),
            HourWindow::SCHOOL_DAY,
            Viewport::Desktop,
        );

        assert_eq!(row_span(grid.cell(1, 22).unwrap()), 2);
        assert_eq!(
            grid.cell(1, 23),
            Some(&GridCell::Continuation { room_id: 1, hour: 23 })
        );
    }

    #[test]
    fn test_block_clipped_at_window_start() {
        let entries = vec![entry(1, 1, 1, 7, 10)];
        let grid = project_grid(
            &entries,
            1,
            &rooms(&[1]),
            HourWindow::SCHOOL_DAY,
            Viewport::Desktop,
        );

        assert_eq!(row_span(grid.cell(1, 8).unwrap()), 2);
        assert_eq!(
            grid.cell(1, 9),
            Some(&GridCell::Continuation { room_id: 1, hour: 9 })
        );
        assert_eq!(
            grid.cell(1, 10),
            Some(&GridCell::Empty { room_id: 1, hour: 10 })
        );
    }

    #[test]
    fn test_block_outside_window_not_rendered() {
        let entries = vec![entry(1, 1, 1, 6, 8)];
        let grid = project_grid(
            &entries,
            1,
            &rooms(&[1]),
            HourWindow::SCHOOL_DAY,
            Viewport::Desktop,
        );

        assert!(grid.rows.iter().all(|row| matches!(
            row.cells[0],
            GridCell::Empty { .. }
        )));
    }

    #[test]
    fn test_window_is_not_fixed() {
        let entries = vec![entry(1, 1, 1, 2, 4)];
        let window = HourWindow::new(0, 6).unwrap();
        let grid = project_grid(&entries, 1, &rooms(&[1]), window, Viewport::Mobile);

        assert_eq!(grid.rows.len(), 6);
        assert_eq!(grid.start_hour, 0);
        assert_eq!(grid.end_hour, 6);
        assert_eq!(row_span(grid.cell(1, 2).unwrap()), 2);
    }

    #[test]
    fn test_block_color_follows_group_name() {
        let mut first = entry(1, 1, 2, 9, 10);
        let mut second = entry(2, 2, 2, 14, 16);
        first.group_name = "Group X".to_string();
        second.group_name = "Group X".to_string();
        let grid = project_grid(
            &[first, second],
            2,
            &rooms(&[1, 2]),
            HourWindow::SCHOOL_DAY,
            Viewport::Tablet,
        );

        let color_of = |cell: &GridCell| match cell {
            GridCell::Block { color_index, .. } => *color_index,
            other => panic!("expected block, got {other:?}"),
        };
        assert_eq!(
            color_of(grid.cell(1, 9).unwrap()),
            color_of(grid.cell(2, 14).unwrap())
        );
        assert_eq!(
            color_of(grid.cell(1, 9).unwrap()),
            color_index("Group X", BLOCK_PALETTE.len())
        );
        match grid.cell(2, 14).unwrap() {
            GridCell::Block { color, .. } => assert_eq!(color, block_color("Group X")),
            other => panic!("expected block, got {other:?}"),
        }
    }

    #[test]
    fn test_draft_only_for_empty_cells() {
        let entries = vec![entry(1, 5, 3, 10, 12)];
        let grid = project_grid(
            &entries,
            3,
            &rooms(&[5]),
            HourWindow::SCHOOL_DAY,
            Viewport::Desktop,
        );

        let draft = grid.draft_at(5, 12).unwrap();
        assert_eq!(draft.room_id, Some(5));
        assert_eq!(draft.day, Some(3));
        assert_eq!(draft.start_time, Some(12));
        assert_eq!(draft.end_time, Some(13));

        assert_eq!(grid.draft_at(5, 10), None);
        assert_eq!(grid.draft_at(5, 11), None);
        assert_eq!(grid.draft_at(9, 12), None);
        assert_eq!(grid.draft_at(5, 7), None);
    }

    #[test]
    fn test_hour_window_validation() {
        assert!(HourWindow::new(8, 24).is_ok());
        assert_eq!(HourWindow::new(0, 24).unwrap(), HourWindow::FULL_DAY);
        assert!(HourWindow::new(10, 10).is_err());
        assert!(HourWindow::new(-1, 10).is_err());
        assert!(HourWindow::new(8, 25).is_err());
        assert_eq!(HourWindow::default(), HourWindow::SCHOOL_DAY);
        assert_eq!(HourWindow::SCHOOL_DAY.len(), 16);
        assert!(HourWindow::SCHOOL_DAY.contains(23));
        assert!(!HourWindow::SCHOOL_DAY.contains(24));
    }
}
