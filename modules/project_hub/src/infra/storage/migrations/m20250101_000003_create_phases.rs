use super::m20250101_000002_create_projects::Projects;
use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Phases::Table)
                    .if_not_exists()
                    .col(id_column(Phases::Id))
                    .col(ColumnDef::new(Phases::ProjectId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Phases::PhaseType)
                            .string_len(32)
                            .not_null()
                            .check(one_of(
                                Phases::PhaseType,
                                PhaseType::ALL.iter().map(|t| t.as_str()),
                            )),
                    )
                    .col(ColumnDef::new(Phases::PlannedStartDate).date())
                    .col(ColumnDef::new(Phases::PlannedEndDate).date())
                    .col(ColumnDef::new(Phases::ActualStartDate).date())
                    .col(ColumnDef::new(Phases::ActualEndDate).date())
                    .col(
                        ColumnDef::new(Phases::Status)
                            .string_len(32)
                            .not_null()
                            .check(one_of(
                                Phases::Status,
                                PhaseStatus::ALL.iter().map(|s| s.as_str()),
                            )),
                    )
                    .col(ColumnDef::new(Phases::Deliverables).text())
                    .col(timestamp_column(Phases::CreatedAt))
                    .col(timestamp_column(Phases::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_phases_project")
                            .from(Phases::Table, Phases::ProjectId)
                            .to(Projects::Table, Projects::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_phases_project_id")
                    .table(Phases::Table)
                    .col(Phases::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Phases::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Phases {
    Table,
    Id,
    ProjectId,
    PhaseType,
    PlannedStartDate,
    PlannedEndDate,
    ActualStartDate,
    ActualEndDate,
    Status,
    Deliverables,
    CreatedAt,
    UpdatedAt,
}
