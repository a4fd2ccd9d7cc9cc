pub mod groups;

pub mod options;

pub mod rooms;

pub mod schedules;

pub mod timetable;

pub use groups::configure_groups_routes;
pub use options::configure_options_routes;
pub use rooms::configure_rooms_routes;
pub use schedules::configure_schedules_routes;
pub use timetable::configure_timetable_routes;
