//! Integration tests for projects and their relationship lookups

mod common;
use common::{create_person, empty_hub, print_test_header, sample_organization, seeded_hub};

use chrono::NaiveDate;
use project_hub::{
    Industry, Organization, Phase, PhaseStatus, PhaseType, Project, ProjectHub, ProjectStatus,
    ProjectType,
};
use rust_decimal::Decimal;
use sea_orm::SqlErr;

async fn create_organization(hub: &ProjectHub, name: &str) -> Organization {
    let mut organization = Organization::new(name, None);
    hub.organizations()
        .create_organization(&mut organization)
        .await
        .unwrap();
    organization
}

fn full_project(organization_id: i64) -> Project {
    let mut project = Project::new("基幹システム更改", organization_id);
    project.customer_name = Some("テスト商事".to_string());
    project.project_type = Some(ProjectType::NewDevelopment);
    project.status = Some(ProjectStatus::InProgress);
    project.budget = Some(Decimal::new(15_000_005, 1));
    project.person_months = Some(Decimal::new(245, 1));
    project.team_size = Some(5);
    project.planned_start_date = NaiveDate::from_ymd_opt(2024, 10, 1);
    project.planned_end_date = NaiveDate::from_ymd_opt(2025, 9, 30);
    project.actual_start_date = NaiveDate::from_ymd_opt(2024, 10, 7);
    project
}

#[tokio::test]
async fn test_create_and_get_project() {
    print_test_header(
        "test_create_and_get_project",
        &["Every scalar column reads back as written", "Nested relations stay empty on plain lookups"],
    );
    let hub = empty_hub().await;
    let organization = create_organization(&hub, "テスト組織").await;

    let mut project = full_project(organization.id.unwrap());
    hub.projects().create_project(&mut project).await.unwrap();

    let found = hub
        .projects()
        .get_project(project.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, project);
    assert!(found.organization.is_none());
}

#[tokio::test]
async fn test_negative_budget_is_rejected() {
    print_test_header(
        "test_negative_budget_is_rejected",
        &["Budget -1 fails validation and nothing is inserted"],
    );
    let hub = seeded_hub().await;
    let organization = sample_organization(&hub).await;
    let before = hub.projects().get_all_projects().await.unwrap().len();

    let mut project = Project::new("赤字案件", organization.id.unwrap());
    project.budget = Some(Decimal::new(-1, 0));
    let err = hub.projects().create_project(&mut project).await.unwrap_err();

    assert!(err.is_validation());
    assert!(project.id.is_none());
    assert_eq!(hub.projects().get_all_projects().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_zero_and_missing_budget_are_accepted() {
    let hub = empty_hub().await;
    let organization_id = create_organization(&hub, "予算テスト").await.id.unwrap();

    let mut zero = Project::new("無償案件", organization_id);
    zero.budget = Some(Decimal::ZERO);
    hub.projects().create_project(&mut zero).await.unwrap();

    let mut unknown = Project::new("予算未定", organization_id);
    hub.projects().create_project(&mut unknown).await.unwrap();

    let found = hub.projects().get_project(zero.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.budget, Some(Decimal::ZERO));
    let found = hub.projects().get_project(unknown.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.budget, None);
}

#[tokio::test]
async fn test_update_project_rejects_negative_budget() {
    let hub = seeded_hub().await;
    let mut project = hub.projects().get_all_projects().await.unwrap().remove(0);
    let original_budget = project.budget;

    project.budget = Some(Decimal::new(-500, 2));
    assert!(hub.projects().update_project(&project).await.unwrap_err().is_validation());

    let stored = hub.projects().get_project(project.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(stored.budget, original_budget);
}

#[tokio::test]
async fn test_update_project() {
    let hub = empty_hub().await;
    let organization_id = create_organization(&hub, "更新テスト").await.id.unwrap();
    let mut project = full_project(organization_id);
    hub.projects().create_project(&mut project).await.unwrap();

    project.status = Some(ProjectStatus::Completed);
    project.actual_end_date = NaiveDate::from_ymd_opt(2025, 9, 12);
    project.team_size = None;
    hub.projects().update_project(&project).await.unwrap();

    let stored = hub.projects().get_project(project.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(stored, project);
}

#[tokio::test]
async fn test_unknown_organization_is_foreign_key_violation() {
    let hub = empty_hub().await;
    let mut project = Project::new("孤児案件", 999);
    let err = hub.projects().create_project(&mut project).await.unwrap_err();

    assert!(!err.is_validation());
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(hub.projects().get_all_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_project_with_organization() {
    let hub = seeded_hub().await;
    let organization = sample_organization(&hub).await;
    let project = hub
        .projects()
        .get_projects_by_organization(organization.id.unwrap())
        .await
        .unwrap()
        .remove(0);

    let found = hub
        .projects()
        .get_project_with_organization(project.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.organization, Some(organization));
    assert!(found.industry.is_none());
    assert!(found.project_manager.is_none());

    assert!(hub
        .projects()
        .get_project_with_organization(999)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_get_project_with_all_relations() {
    print_test_header(
        "test_get_project_with_all_relations",
        &[
            "One joined query fills organization, industry, manager and lead",
            "The same person table is joined twice under different aliases",
        ],
    );
    let hub = empty_hub().await;
    let organization = create_organization(&hub, "関連テスト組織").await;
    let mut industry = Industry::new("医療", Some("病院"));
    hub.industries().create_industry(&mut industry).await.unwrap();
    let manager = create_person(&hub, "田中部長", "tanaka@example.com").await;
    let lead = create_person(&hub, "高橋リード", "takahashi@example.com").await;

    let mut project = full_project(organization.id.unwrap());
    project.industry_id = industry.id;
    project.project_manager_id = manager.id;
    project.technical_lead_id = lead.id;
    hub.projects().create_project(&mut project).await.unwrap();

    let found = hub
        .projects()
        .get_project_with_all_relations(project.id.unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.organization.as_ref().map(|o| o.name.as_str()), Some("関連テスト組織"));
    assert_eq!(found.industry.as_ref().map(|i| i.name.as_str()), Some("医療"));
    assert_eq!(
        found.project_manager.as_ref().map(|p| p.name.as_str()),
        Some("田中部長")
    );
    assert_eq!(
        found.technical_lead.as_ref().map(|p| p.email.as_str()),
        Some("takahashi@example.com")
    );
    assert_eq!(found.clone().without_relations(), project);
}

#[tokio::test]
async fn test_all_relations_with_unset_references() {
    let hub = seeded_hub().await;
    let consulting = hub
        .projects()
        .find_by_project_type(ProjectType::Consulting)
        .await
        .unwrap()
        .remove(0);

    let found = hub
        .projects()
        .get_project_with_all_relations(consulting.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert!(found.organization.is_some());
    assert!(found.industry.is_none());
    assert!(found.project_manager.is_none());
    assert!(found.technical_lead.is_none());

    assert!(hub
        .projects()
        .get_project_with_all_relations(999)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_finders_on_seeded_projects() {
    let hub = seeded_hub().await;
    let projects = hub.projects();
    let yamada = hub
        .persons()
        .find_by_email("yamada@example.com")
        .await
        .unwrap()
        .unwrap();
    let sato = hub
        .persons()
        .find_by_email("sato@example.com")
        .await
        .unwrap()
        .unwrap();
    let finance = hub.industries().find_by_name("金融").await.unwrap().unwrap();

    assert_eq!(projects.get_all_projects().await.unwrap().len(), 3);
    assert_eq!(
        projects
            .find_by_status(ProjectStatus::InProgress)
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(projects
        .find_by_status(ProjectStatus::Cancelled)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        projects
            .find_by_project_type(ProjectType::Maintenance)
            .await
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        projects
            .find_by_project_manager_id(yamada.id.unwrap())
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        projects
            .find_by_technical_lead_id(sato.id.unwrap())
            .await
            .unwrap()
            .len(),
        1
    );

    let by_industry = projects.find_by_industry_id(finance.id.unwrap()).await.unwrap();
    assert_eq!(by_industry.len(), 1);
    assert_eq!(by_industry[0].industry_id, finance.id);
    assert_eq!(by_industry[0].budget, Some(Decimal::new(50_000_000, 0)));
}

#[tokio::test]
async fn test_projects_by_organization() {
    let hub = seeded_hub().await;
    let organizations = hub.organizations().get_all_organizations().await.unwrap();

    let first = hub
        .projects()
        .get_projects_by_organization(organizations[0].id.unwrap())
        .await
        .unwrap();
    let second = hub
        .projects()
        .get_projects_by_organization(organizations[1].id.unwrap())
        .await
        .unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert!(first
        .iter()
        .all(|project| project.organization_id == organizations[0].id.unwrap()));
}

#[tokio::test]
async fn test_delete_project() {
    let hub = empty_hub().await;
    let organization_id = create_organization(&hub, "削除テスト").await.id.unwrap();
    let mut project = Project::new("短期案件", organization_id);
    hub.projects().create_project(&mut project).await.unwrap();

    hub.projects().delete_project(project.id.unwrap()).await.unwrap();
    assert!(hub.projects().get_project(project.id.unwrap()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_project_with_phases_is_rejected() {
    print_test_header(
        "test_delete_project_with_phases_is_rejected",
        &["Phases are not cascaded; the FK keeps the project"],
    );
    let hub = empty_hub().await;
    let organization_id = create_organization(&hub, "フェーズ有り").await.id.unwrap();
    let mut project = Project::new("段階案件", organization_id);
    hub.projects().create_project(&mut project).await.unwrap();

    let mut phase = Phase::new(
        project.id.unwrap(),
        PhaseType::Requirements,
        PhaseStatus::NotStarted,
    );
    hub.phases().create_phase(&mut phase).await.unwrap();

    let err = hub
        .projects()
        .delete_project(project.id.unwrap())
        .await
        .unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(hub.projects().get_project(project.id.unwrap()).await.unwrap().is_some());
    assert_eq!(
        hub.phases()
            .find_by_project_id(project.id.unwrap())
            .await
            .unwrap()
            .len(),
        1
    );
}
