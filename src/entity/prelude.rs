//! 预导入模块，方便使用

pub use super::class_groups::{
    ActiveModel as ClassGroupActiveModel, Entity as ClassGroups, Model as ClassGroupModel,
};
pub use super::lesson_schedules::{
    ActiveModel as LessonScheduleActiveModel, Entity as LessonSchedules,
    Model as LessonScheduleModel,
};
pub use super::rooms::{ActiveModel as RoomActiveModel, Entity as Rooms, Model as RoomModel};
