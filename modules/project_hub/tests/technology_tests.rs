//! Integration tests for technologies

mod common;
use common::{empty_hub, seeded_hub};

use project_hub::{Technology, TechnologyCategory};

#[tokio::test]
async fn test_create_and_get_technology() {
    let hub = empty_hub().await;
    let service = hub.technologies();

    let mut technology = Technology::new("Tokio", TechnologyCategory::Framework, Some("非同期ランタイム"));
    service.create_technology(&mut technology).await.unwrap();

    let found = service
        .get_technology(technology.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Tokio");
    assert_eq!(found.category, TechnologyCategory::Framework);
    assert_eq!(found.description.as_deref(), Some("非同期ランタイム"));
    assert!(found.created_at.is_some());
}

#[tokio::test]
async fn test_find_by_category() {
    let hub = seeded_hub().await;
    let service = hub.technologies();

    let mut go = Technology::new("Go", TechnologyCategory::Language, None);
    service.create_technology(&mut go).await.unwrap();

    let languages = service
        .find_by_category(TechnologyCategory::Language)
        .await
        .unwrap();
    let names: Vec<&str> = languages.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Rust", "Go"]);
    assert!(languages
        .iter()
        .all(|t| t.category == TechnologyCategory::Language));

    assert!(service
        .find_by_category(TechnologyCategory::Tool)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_update_and_delete_technology() {
    let hub = empty_hub().await;
    let service = hub.technologies();

    let mut technology = Technology::new("Docker", TechnologyCategory::Tool, None);
    service.create_technology(&mut technology).await.unwrap();

    technology.category = TechnologyCategory::Infrastructure;
    service.update_technology(&technology).await.unwrap();

    let found = service
        .get_technology(technology.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.category, TechnologyCategory::Infrastructure);

    service.delete_technology(technology.id.unwrap()).await.unwrap();
    assert!(service.get_all_technologies().await.unwrap().is_empty());
}
