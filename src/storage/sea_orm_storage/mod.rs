//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod class_groups;
mod lesson_schedules;
mod rooms;

use crate::config::AppConfig;
use crate::errors::{Result, TimetableError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, pool_size: u32, timeout_secs: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout_secs).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout_secs).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TimetableError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TimetableError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存库每个连接各自独立，只能使用单连接
        let max_connections = if url.contains(":memory:") {
            1
        } else {
            pool_size.max(1)
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(None)
            .connect_with(opt)
            .await
            .map_err(|e| TimetableError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout_secs))
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| TimetableError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TimetableError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 写入错误映射：唯一约束与外键约束转换为对应的业务错误
pub(crate) fn map_write_err(context: &str, err: DbErr) -> TimetableError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            TimetableError::already_exists(format!("{context}: {detail}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            TimetableError::reference_in_use(format!("{context}: {detail}"))
        }
        _ => TimetableError::database_operation(format!("{context}: {err}")),
    }
}

// Storage trait 实现
use crate::models::{
    groups::{
        entities::ClassGroup,
        requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest},
    },
    rooms::{
        entities::Room,
        requests::{CreateRoomRequest, RoomListQuery, UpdateRoomRequest},
    },
    schedules::{
        entities::ScheduleEntry,
        requests::{CreateScheduleRequest, ScheduleListQuery},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教室模块
    async fn create_room(&self, room: CreateRoomRequest) -> Result<Room> {
        self.create_room_impl(room).await
    }

    async fn get_room_by_id(&self, id: i64) -> Result<Option<Room>> {
        self.get_room_by_id_impl(id).await
    }

    async fn get_room_by_name(&self, name: &str) -> Result<Option<Room>> {
        self.get_room_by_name_impl(name).await
    }

    async fn list_rooms(&self, query: RoomListQuery) -> Result<Vec<Room>> {
        self.list_rooms_impl(query).await
    }

    async fn update_room(&self, id: i64, update: UpdateRoomRequest) -> Result<Option<Room>> {
        self.update_room_impl(id, update).await
    }

    async fn delete_room(&self, id: i64) -> Result<bool> {
        self.delete_room_impl(id).await
    }

    // 教学班模块
    async fn create_group(&self, group: CreateGroupRequest) -> Result<ClassGroup> {
        self.create_group_impl(group).await
    }

    async fn get_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>> {
        self.get_group_by_id_impl(id).await
    }

    async fn get_group_by_name(&self, name: &str) -> Result<Option<ClassGroup>> {
        self.get_group_by_name_impl(name).await
    }

    async fn list_groups(&self, query: GroupListQuery) -> Result<Vec<ClassGroup>> {
        self.list_groups_impl(query).await
    }

    async fn update_group(
        &self,
        id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<ClassGroup>> {
        self.update_group_impl(id, update).await
    }

    async fn delete_group(&self, id: i64) -> Result<bool> {
        self.delete_group_impl(id).await
    }

    // 课表模块
    async fn create_schedule(&self, schedule: CreateScheduleRequest) -> Result<ScheduleEntry> {
        self.create_schedule_impl(schedule).await
    }

    async fn get_schedule_by_id(&self, id: i64) -> Result<Option<ScheduleEntry>> {
        self.get_schedule_by_id_impl(id).await
    }

    async fn list_schedules(&self, query: ScheduleListQuery) -> Result<Vec<ScheduleEntry>> {
        self.list_schedules_impl(query).await
    }

    async fn update_schedule(
        &self,
        id: i64,
        schedule: CreateScheduleRequest,
    ) -> Result<Option<ScheduleEntry>> {
        self.update_schedule_impl(id, schedule).await
    }

    async fn delete_schedule(&self, id: i64) -> Result<bool> {
        self.delete_schedule_impl(id).await
    }

    async fn count_schedules_by_room(&self, room_id: i64) -> Result<u64> {
        self.count_schedules_by_room_impl(room_id).await
    }

    async fn count_schedules_by_group(&self, group_id: i64) -> Result<u64> {
        self.count_schedules_by_group_impl(group_id).await
    }
}
