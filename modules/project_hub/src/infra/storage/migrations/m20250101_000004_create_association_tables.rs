//! Association tables reserved for team membership and technology usage.
//! No mapper reads or writes them yet.

use super::m20250101_000001_create_reference_tables::{Persons, Technologies};
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
                    .table(ProjectMembers::Table)
                    .if_not_exists()
                    .col(id_column(ProjectMembers::Id))
                    .col(ColumnDef::new(ProjectMembers::ProjectId).big_integer().not_null())
                    .col(ColumnDef::new(ProjectMembers::PersonId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ProjectMembers::Role)
                            .string_len(32)
                            .not_null()
                            .check(one_of(
                                ProjectMembers::Role,
                                MemberRole::ALL.iter().map(|r| r.as_str()),
                            )),
                    )
                    .col(ColumnDef::new(ProjectMembers::JoinDate).date())
                    .col(ColumnDef::new(ProjectMembers::AllocationRate).decimal_len(5, 2))
                    .col(timestamp_column(ProjectMembers::CreatedAt))
                    .col(timestamp_column(ProjectMembers::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_members_project")
                            .from(ProjectMembers::Table, ProjectMembers::ProjectId)
                            .to(Projects::Table, Projects::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_members_person")
                            .from(ProjectMembers::Table, ProjectMembers::PersonId)
                            .to(Persons::Table, Persons::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProjectTechnologies::Table)
                    .if_not_exists()
                    .col(id_column(ProjectTechnologies::Id))
                    .col(
                        ColumnDef::new(ProjectTechnologies::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechnologies::TechnologyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectTechnologies::Purpose).string())
                    .col(timestamp_column(ProjectTechnologies::CreatedAt))
                    .col(timestamp_column(ProjectTechnologies::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_project")
                            .from(ProjectTechnologies::Table, ProjectTechnologies::ProjectId)
                            .to(Projects::Table, Projects::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_technology")
                            .from(
                                ProjectTechnologies::Table,
                                ProjectTechnologies::TechnologyId,
                            )
                            .to(Technologies::Table, Technologies::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectTechnologies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectMembers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectMembers {
    Table,
    Id,
    ProjectId,
    PersonId,
    Role,
    JoinDate,
    AllocationRate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProjectTechnologies {
    Table,
    Id,
    ProjectId,
    TechnologyId,
    Purpose,
    CreatedAt,
    UpdatedAt,
}
