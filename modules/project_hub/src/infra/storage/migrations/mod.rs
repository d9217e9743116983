//! Database migrations for project hub
//!
//! One file per migration: `DeriveMigrationName` takes the version
//! recorded in `seaql_migrations` from the file name.

mod m20250101_000001_create_reference_tables;
mod m20250101_000002_create_projects;
mod m20250101_000003_create_phases;
mod m20250101_000004_create_association_tables;

use sea_orm_migration::prelude::*;

use crate::contract::{
    MemberRole, PhaseStatus, PhaseType, ProjectStatus, ProjectType, TechnologyCategory,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_reference_tables::Migration),
            Box::new(m20250101_000002_create_projects::Migration),
            Box::new(m20250101_000003_create_phases::Migration),
            Box::new(m20250101_000004_create_association_tables::Migration),
        ]
    }
}

/// CHECK constraint restricting a string column to a closed token set
fn one_of<C>(column: C, tokens: impl IntoIterator<Item = &'static str>) -> SimpleExpr
where
    C: IntoIden + 'static,
{
    Expr::col(column).is_in(tokens)
}

fn id_column<C: IntoIden>(column: C) -> ColumnDef {
    ColumnDef::new(column)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp_column<C: IntoIden>(column: C) -> ColumnDef {
    ColumnDef::new(column)
        .date_time()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_migration_names_follow_file_names() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|migration| migration.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "m20250101_000001_create_reference_tables",
                "m20250101_000002_create_projects",
                "m20250101_000003_create_phases",
                "m20250101_000004_create_association_tables",
            ]
        );
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
    }
}
