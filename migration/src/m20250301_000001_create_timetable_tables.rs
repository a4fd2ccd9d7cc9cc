use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建教室表
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Rooms::Capacity).integer().null())
                    .col(ColumnDef::new(Rooms::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Rooms::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教学班表
        manager
            .create_table(
                Table::create()
                    .table(ClassGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassGroups::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ClassGroups::CourseName).string().not_null())
                    .col(
                        ColumnDef::new(ClassGroups::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassGroups::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课表条目表（教室、教学班只被引用，删除时不级联）
        manager
            .create_table(
                Table::create()
                    .table(LessonSchedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LessonSchedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LessonSchedules::RoomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonSchedules::GroupId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LessonSchedules::Day).integer().not_null())
                    .col(
                        ColumnDef::new(LessonSchedules::StartTime)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LessonSchedules::EndTime).integer().not_null())
                    .col(
                        ColumnDef::new(LessonSchedules::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LessonSchedules::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LessonSchedules::Table, LessonSchedules::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(LessonSchedules::Table, LessonSchedules::GroupId)
                            .to(ClassGroups::Table, ClassGroups::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 冲突检查按 (room_id, day) 查询
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lesson_schedules_room_day")
                    .table(LessonSchedules::Table)
                    .col(LessonSchedules::RoomId)
                    .col(LessonSchedules::Day)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_lesson_schedules_group_id")
                    .table(LessonSchedules::Table)
                    .col(LessonSchedules::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(LessonSchedules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Rooms {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    Name,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassGroups {
    #[sea_orm(iden = "class_groups")]
    Table,
    Id,
    Name,
    CourseName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LessonSchedules {
    #[sea_orm(iden = "lesson_schedules")]
    Table,
    Id,
    RoomId,
    GroupId,
    Day,
    StartTime,
    EndTime,
    CreatedAt,
    UpdatedAt,
}
