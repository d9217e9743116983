//! Integration tests for industries

mod common;
use common::{empty_hub, print_test_header, seeded_hub};

use project_hub::Industry;
use sea_orm::SqlErr;

#[tokio::test]
async fn test_create_and_get_industry() {
    let hub = empty_hub().await;
    let service = hub.industries();

    let mut industry = Industry::new("医療", Some("病院・製薬"));
    service.create_industry(&mut industry).await.unwrap();

    let found = service.get_industry(industry.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.id, industry.id);
    assert_eq!(found.name, "医療");
    assert_eq!(found.description.as_deref(), Some("病院・製薬"));
    assert!(found.created_at.is_some());
    assert!(found.updated_at.is_some());
}

#[tokio::test]
async fn test_find_by_name() {
    print_test_header(
        "test_find_by_name",
        &["Lookup by unique name returns exactly the inserted record", "Unknown names return None"],
    );
    let hub = seeded_hub().await;
    let service = hub.industries();

    let mut industry = Industry::new("医療", None);
    service.create_industry(&mut industry).await.unwrap();

    let found = service.find_by_name("医療").await.unwrap().unwrap();
    assert_eq!(found.id, industry.id);
    assert_eq!(found.name, "医療");

    assert!(service.find_by_name("宇宙").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_all_industries_includes_seeded_ones() {
    let hub = seeded_hub().await;
    let names: Vec<String> = hub
        .industries()
        .get_all_industries()
        .await
        .unwrap()
        .into_iter()
        .map(|industry| industry.name)
        .collect();
    assert_eq!(names, vec!["金融".to_string(), "製造".to_string()]);
}

#[tokio::test]
async fn test_duplicate_name_is_unique_violation() {
    print_test_header(
        "test_duplicate_name_is_unique_violation",
        &["A second industry with an existing name fails in the store"],
    );
    let hub = seeded_hub().await;
    let service = hub.industries();

    let mut duplicate = Industry::new("金融", Some("重複"));
    let err = service.create_industry(&mut duplicate).await.unwrap_err();

    assert!(!err.is_validation());
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));
    assert!(duplicate.id.is_none());
    assert_eq!(service.get_all_industries().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_and_delete_industry() {
    let hub = empty_hub().await;
    let service = hub.industries();

    let mut industry = Industry::new("小売", None);
    service.create_industry(&mut industry).await.unwrap();

    industry.name = "小売・流通".to_string();
    industry.description = Some("百貨店".to_string());
    service.update_industry(&industry).await.unwrap();

    let found = service.find_by_name("小売・流通").await.unwrap().unwrap();
    assert_eq!(found.description.as_deref(), Some("百貨店"));
    assert!(service.find_by_name("小売").await.unwrap().is_none());

    service.delete_industry(industry.id.unwrap()).await.unwrap();
    assert!(service.get_industry(industry.id.unwrap()).await.unwrap().is_none());
}
