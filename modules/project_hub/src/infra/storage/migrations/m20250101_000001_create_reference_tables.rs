use super::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organizations::Table)
                    .if_not_exists()
                    .col(id_column(Organizations::Id))
                    .col(ColumnDef::new(Organizations::Name).string().not_null())
                    .col(ColumnDef::new(Organizations::Description).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Industries::Table)
                    .if_not_exists()
                    .col(id_column(Industries::Id))
                    .col(
                        ColumnDef::new(Industries::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Industries::Description).string())
                    .col(timestamp_column(Industries::CreatedAt))
                    .col(timestamp_column(Industries::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_industries_name")
                    .table(Industries::Table)
                    .col(Industries::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(id_column(Persons::Id))
                    .col(ColumnDef::new(Persons::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Persons::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Persons::Role).string_len(50))
                    .col(ColumnDef::new(Persons::Department).string_len(100))
                    .col(timestamp_column(Persons::CreatedAt))
                    .col(timestamp_column(Persons::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_persons_email")
                    .table(Persons::Table)
                    .col(Persons::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Technologies::Table)
                    .if_not_exists()
                    .col(id_column(Technologies::Id))
                    .col(ColumnDef::new(Technologies::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Technologies::Category)
                            .string_len(32)
                            .not_null()
                            .check(one_of(
                                Technologies::Category,
                                TechnologyCategory::ALL.iter().map(|c| c.as_str()),
                            )),
                    )
                    .col(ColumnDef::new(Technologies::Description).string())
                    .col(timestamp_column(Technologies::CreatedAt))
                    .col(timestamp_column(Technologies::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_technologies_category")
                    .table(Technologies::Table)
                    .col(Technologies::Category)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Technologies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Industries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Organizations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(super) enum Organizations {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
pub(super) enum Industries {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(super) enum Persons {
    Table,
    Id,
    Name,
    Email,
    Role,
    Department,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(super) enum Technologies {
    Table,
    Id,
    Name,
    Category,
    Description,
    CreatedAt,
    UpdatedAt,
}
