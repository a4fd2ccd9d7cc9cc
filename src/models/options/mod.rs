use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 可供下拉框查询的资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/options.ts")]
pub enum OptionResource {
    Rooms,
    Groups,
}

impl OptionResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionResource::Rooms => "rooms",
            OptionResource::Groups => "groups",
        }
    }

    /// 缓存键，按资源类型区分
    pub fn cache_key(&self) -> String {
        format!("options:{}", self.as_str())
    }
}

impl std::fmt::Display for OptionResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptionResource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rooms" => Ok(OptionResource::Rooms),
            "groups" => Ok(OptionResource::Groups),
            _ => Err(format!(
                "Unknown option resource: '{s}'. Supported: rooms, groups"
            )),
        }
    }
}

/// 下拉选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/options.ts")]
pub struct OptionItem {
    pub id: i64,
    pub label: String,
}

/// 下拉选项列表响应
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/options.ts")]
pub struct OptionListResponse {
    pub resource: OptionResource,
    pub items: Vec<OptionItem>,
}
