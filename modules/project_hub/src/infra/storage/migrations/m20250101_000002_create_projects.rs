use super::m20250101_000001_create_reference_tables::{Industries, Organizations, Persons};
use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(id_column(Projects::Id))
                    .col(ColumnDef::new(Projects::ProjectName).string().not_null())
                    .col(ColumnDef::new(Projects::OrganizationId).big_integer().not_null())
                    .col(ColumnDef::new(Projects::CustomerName).string())
                    .col(ColumnDef::new(Projects::IndustryId).big_integer())
                    .col(ColumnDef::new(Projects::ProjectType).string_len(32).check(one_of(
                        Projects::ProjectType,
                        ProjectType::ALL.iter().map(|t| t.as_str()),
                    )))
                    .col(ColumnDef::new(Projects::Status).string_len(32).check(one_of(
                        Projects::Status,
                        ProjectStatus::ALL.iter().map(|s| s.as_str()),
                    )))
                    .col(ColumnDef::new(Projects::Budget).decimal_len(15, 2))
                    .col(ColumnDef::new(Projects::PersonMonths).decimal_len(10, 2))
                    .col(ColumnDef::new(Projects::TeamSize).integer())
                    .col(ColumnDef::new(Projects::PlannedStartDate).date())
                    .col(ColumnDef::new(Projects::PlannedEndDate).date())
                    .col(ColumnDef::new(Projects::ActualStartDate).date())
                    .col(ColumnDef::new(Projects::ActualEndDate).date())
                    .col(ColumnDef::new(Projects::ProjectManagerId).big_integer())
                    .col(ColumnDef::new(Projects::TechnicalLeadId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_organization")
                            .from(Projects::Table, Projects::OrganizationId)
                            .to(Organizations::Table, Organizations::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_industry")
                            .from(Projects::Table, Projects::IndustryId)
                            .to(Industries::Table, Industries::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_project_manager")
                            .from(Projects::Table, Projects::ProjectManagerId)
                            .to(Persons::Table, Persons::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_projects_technical_lead")
                            .from(Projects::Table, Projects::TechnicalLeadId)
                            .to(Persons::Table, Persons::Id),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_projects_organization_id", Projects::OrganizationId),
            ("idx_projects_industry_id", Projects::IndustryId),
            ("idx_projects_status", Projects::Status),
            ("idx_projects_project_type", Projects::ProjectType),
            ("idx_projects_project_manager_id", Projects::ProjectManagerId),
            ("idx_projects_technical_lead_id", Projects::TechnicalLeadId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Projects::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Projects {
    Table,
    Id,
    ProjectName,
    OrganizationId,
    CustomerName,
    IndustryId,
    ProjectType,
    Status,
    Budget,
    PersonMonths,
    TeamSize,
    PlannedStartDate,
    PlannedEndDate,
    ActualStartDate,
    ActualEndDate,
    ProjectManagerId,
    TechnicalLeadId,
}
