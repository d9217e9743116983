//! Integration tests for schema migrations, sample data and wiring

mod common;
use common::{empty_hub, print_test_header, seeded_hub};

use project_hub::infra::storage::{seed_sample_data, Migrator};
use sea_orm::{ConnectionTrait, Statement};
use sea_orm_migration::MigratorTrait;

async fn table_names(hub: &project_hub::ProjectHub) -> Vec<String> {
    let backend = hub.db().get_database_backend();
    hub.db()
        .query_all(Statement::from_string(
            backend,
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name <> 'seaql_migrations' ORDER BY name",
        ))
        .await
        .unwrap()
        .iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
}

async fn index_names(hub: &project_hub::ProjectHub) -> Vec<String> {
    let backend = hub.db().get_database_backend();
    hub.db()
        .query_all(Statement::from_string(
            backend,
            "SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'idx_%' ORDER BY name",
        ))
        .await
        .unwrap()
        .iter()
        .map(|row| row.try_get::<String>("", "name").unwrap())
        .collect()
}

#[tokio::test]
async fn test_migrations_create_all_tables() {
    print_test_header(
        "test_migrations_create_all_tables",
        &["Six entity tables plus the two association tables exist"],
    );
    let hub = empty_hub().await;
    assert_eq!(
        table_names(&hub).await,
        vec![
            "industries",
            "organizations",
            "persons",
            "phases",
            "project_members",
            "project_technologies",
            "projects",
            "technologies",
        ]
    );
}

#[tokio::test]
async fn test_migrations_create_lookup_indexes() {
    let hub = empty_hub().await;
    let indexes = index_names(&hub).await;
    assert!(!indexes.is_empty());
    assert!(indexes.iter().any(|name| name.starts_with("idx_projects_")));
    assert!(indexes.iter().any(|name| name.starts_with("idx_phases_")));
}

#[tokio::test]
async fn test_each_migration_is_recorded_once() {
    print_test_header(
        "test_each_migration_is_recorded_once",
        &["Every migration gets its own version row", "Running up again applies nothing"],
    );
    let hub = empty_hub().await;

    let applied = Migrator::get_applied_migrations(&**hub.db()).await.unwrap();
    let versions: Vec<&str> = applied.iter().map(|migration| migration.name()).collect();
    assert_eq!(
        versions,
        vec![
            "m20250101_000001_create_reference_tables",
            "m20250101_000002_create_projects",
            "m20250101_000003_create_phases",
            "m20250101_000004_create_association_tables",
        ]
    );

    Migrator::up(&**hub.db(), None).await.unwrap();
    assert!(Migrator::get_pending_migrations(&**hub.db())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_migrations_roll_back_and_reapply() {
    let hub = empty_hub().await;

    Migrator::down(&**hub.db(), None).await.unwrap();
    assert!(table_names(&hub).await.is_empty());

    Migrator::up(&**hub.db(), None).await.unwrap();
    assert_eq!(table_names(&hub).await.len(), 8);
}

#[tokio::test]
async fn test_seed_sample_data_counts() {
    let hub = seeded_hub().await;

    assert_eq!(hub.organizations().get_all_organizations().await.unwrap().len(), 2);
    assert_eq!(hub.projects().get_all_projects().await.unwrap().len(), 3);
    assert_eq!(hub.industries().get_all_industries().await.unwrap().len(), 2);
    assert_eq!(hub.persons().get_all_persons().await.unwrap().len(), 2);
    assert_eq!(hub.technologies().get_all_technologies().await.unwrap().len(), 3);
    assert!(hub.phases().get_all_phases().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    print_test_header(
        "test_seed_is_idempotent",
        &["A populated database is left untouched"],
    );
    let hub = seeded_hub().await;

    let inserted = seed_sample_data(hub.db()).await.unwrap();
    assert!(!inserted);
    assert_eq!(hub.organizations().get_all_organizations().await.unwrap().len(), 2);
    assert_eq!(hub.projects().get_all_projects().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_seed_on_empty_database() {
    let hub = empty_hub().await;
    assert!(hub.organizations().get_all_organizations().await.unwrap().is_empty());

    assert!(seed_sample_data(hub.db()).await.unwrap());
    assert_eq!(hub.industries().get_all_industries().await.unwrap().len(), 2);
}
