use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::schedules::entities::ScheduleEntry;

/// 视口类型，由调用方按屏幕宽度给出
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/timetable.ts")]
pub enum Viewport {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Viewport {
    /// 课块上显示的文字
    pub fn block_label(&self, entry: &ScheduleEntry) -> String {
        match self {
            Viewport::Mobile => entry.group_name.clone(),
            Viewport::Tablet => format!("{} · {}", entry.group_name, entry.course_name),
            Viewport::Desktop => format!(
                "{} · {} · {}",
                entry.course_name, entry.group_name, entry.room_name
            ),
        }
    }
}

impl std::str::FromStr for Viewport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile" => Ok(Viewport::Mobile),
            "tablet" => Ok(Viewport::Tablet),
            "desktop" => Ok(Viewport::Desktop),
            _ => Err(format!("Invalid viewport: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ScheduleEntry {
        ScheduleEntry {
            id: Some(1),
            room_id: 2,
            room_name: "Lab 2".to_string(),
            group_id: 3,
            group_name: "Group A".to_string(),
            course_name: "Physics".to_string(),
            day: 1,
            start_time: 9,
            end_time: 11,
        }
    }

    #[test]
    fn test_label_density() {
        let entry = entry();
        assert_eq!(Viewport::Mobile.block_label(&entry), "Group A");
        assert_eq!(Viewport::Tablet.block_label(&entry), "Group A · Physics");
        assert_eq!(
            Viewport::Desktop.block_label(&entry),
            "Physics · Group A · Lab 2"
        );
    }

    #[test]
    fn test_parse_and_default() {
        assert_eq!("tablet".parse::<Viewport>(), Ok(Viewport::Tablet));
        assert!("watch".parse::<Viewport>().is_err());
        assert_eq!(Viewport::default(), Viewport::Desktop);
    }
}
