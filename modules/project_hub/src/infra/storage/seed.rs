//! Sample data for a fresh database

use anyhow::Context;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, TransactionTrait};

use super::entity::organization;
use super::mappers::{
    SeaOrmIndustryMapper, SeaOrmOrganizationMapper, SeaOrmPersonMapper, SeaOrmProjectMapper,
    SeaOrmTechnologyMapper,
};
use crate::contract::{
    Industry, Organization, Person, Project, ProjectStatus, ProjectType, Technology,
    TechnologyCategory,
};
use crate::domain::mapper::{
    IndustryMapper, OrganizationMapper, PersonMapper, ProjectMapper, TechnologyMapper,
};

/// Insert the sample organizations, industries, persons, technologies and
/// projects in one transaction.
///
/// Does nothing when the organizations table already has rows. Returns
/// whether anything was inserted.
pub async fn seed_sample_data(db: &DatabaseConnection) -> anyhow::Result<bool> {
    let txn = db.begin().await.context("failed to begin seed transaction")?;

    let existing = organization::Entity::find().count(&txn).await?;
    if existing > 0 {
        tracing::debug!(organizations = existing, "Database already populated, skipping seed");
        return Ok(false);
    }

    let mut acme = Organization::new("株式会社サンプル", Some("受託開発を中心とするSIer"));
    let mut tech = Organization::new("テックソリューションズ", Some("クラウド導入支援"));
    for org in [&mut acme, &mut tech] {
        SeaOrmOrganizationMapper.insert(&txn, org).await?;
    }

    let mut finance = Industry::new("金融", Some("銀行・保険・証券"));
    let mut manufacturing = Industry::new("製造", Some("製造業・工場"));
    for industry in [&mut finance, &mut manufacturing] {
        SeaOrmIndustryMapper.insert(&txn, industry).await?;
    }

    let mut yamada = Person::new(
        "山田太郎",
        "yamada@example.com",
        Some("プロジェクトマネージャー"),
        Some("開発部"),
    );
    let mut sato = Person::new(
        "佐藤花子",
        "sato@example.com",
        Some("テックリード"),
        Some("開発部"),
    );
    for person in [&mut yamada, &mut sato] {
        SeaOrmPersonMapper.insert(&txn, person).await?;
    }

    let mut technologies = [
        Technology::new("Rust", TechnologyCategory::Language, Some("システムプログラミング言語")),
        Technology::new("Axum", TechnologyCategory::Framework, Some("Web フレームワーク")),
        Technology::new("PostgreSQL", TechnologyCategory::Database, None),
    ];
    for technology in &mut technologies {
        SeaOrmTechnologyMapper.insert(&txn, technology).await?;
    }

    let acme_id = acme.id.context("organization id not assigned")?;
    let tech_id = tech.id.context("organization id not assigned")?;

    let mut renewal = Project::new("顧客管理システム刷新", acme_id);
    renewal.customer_name = Some("サンプル銀行".to_string());
    renewal.industry_id = finance.id;
    renewal.project_type = Some(ProjectType::NewDevelopment);
    renewal.status = Some(ProjectStatus::InProgress);
    renewal.budget = Some(Decimal::new(50_000_000, 0));
    renewal.person_months = Some(Decimal::new(1205, 1));
    renewal.team_size = Some(8);
    renewal.planned_start_date = NaiveDate::from_ymd_opt(2024, 4, 1);
    renewal.planned_end_date = NaiveDate::from_ymd_opt(2025, 3, 31);
    renewal.actual_start_date = NaiveDate::from_ymd_opt(2024, 4, 1);
    renewal.project_manager_id = yamada.id;
    renewal.technical_lead_id = sato.id;

    let mut maintenance = Project::new("生産管理システム保守", acme_id);
    maintenance.customer_name = Some("サンプル製作所".to_string());
    maintenance.industry_id = manufacturing.id;
    maintenance.project_type = Some(ProjectType::Maintenance);
    maintenance.status = Some(ProjectStatus::Completed);
    maintenance.budget = Some(Decimal::new(12_000_000, 0));
    maintenance.team_size = Some(3);
    maintenance.planned_start_date = NaiveDate::from_ymd_opt(2023, 4, 1);
    maintenance.planned_end_date = NaiveDate::from_ymd_opt(2024, 3, 31);
    maintenance.actual_start_date = NaiveDate::from_ymd_opt(2023, 4, 1);
    maintenance.actual_end_date = NaiveDate::from_ymd_opt(2024, 3, 31);
    maintenance.project_manager_id = yamada.id;

    let mut consulting = Project::new("クラウド移行コンサルティング", tech_id);
    consulting.project_type = Some(ProjectType::Consulting);
    consulting.status = Some(ProjectStatus::Planning);
    consulting.planned_start_date = NaiveDate::from_ymd_opt(2025, 1, 6);

    for project in [&mut renewal, &mut maintenance, &mut consulting] {
        SeaOrmProjectMapper.insert(&txn, project).await?;
    }

    txn.commit().await.context("failed to commit sample data")?;
    tracing::info!("Seeded sample data");
    Ok(true)
}
