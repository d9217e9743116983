//! Mapper traits for data access
//!
//! One contract per table. Every method runs against a transaction opened
//! by the calling service. Store errors are returned unchanged as [`DbErr`];
//! a missing row is `None` or an empty `Vec`, never an error.
//! Implementations are in infra/storage/mappers.rs

use async_trait::async_trait;
use sea_orm::{DatabaseTransaction, DbErr};

use crate::contract::{
    Industry, Organization, Person, Phase, Project, ProjectStatus, ProjectType, Technology,
    TechnologyCategory,
};

#[async_trait]
pub trait OrganizationMapper: Send + Sync {
    /// Insert a row and write the generated id back into `organization`
    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        organization: &mut Organization,
    ) -> Result<(), DbErr>;

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Organization>, DbErr>;

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Organization>, DbErr>;

    /// Replace the mutable columns of the row with `organization.id`.
    /// Nothing happens when no such row exists.
    async fn update(
        &self,
        txn: &DatabaseTransaction,
        organization: &Organization,
    ) -> Result<(), DbErr>;

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr>;
}

#[async_trait]
pub trait IndustryMapper: Send + Sync {
    async fn insert(&self, txn: &DatabaseTransaction, industry: &mut Industry)
        -> Result<(), DbErr>;

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Industry>, DbErr>;

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Industry>, DbErr>;

    /// Industry names are unique, so at most one row matches
    async fn find_by_name(
        &self,
        txn: &DatabaseTransaction,
        name: &str,
    ) -> Result<Option<Industry>, DbErr>;

    async fn update(&self, txn: &DatabaseTransaction, industry: &Industry) -> Result<(), DbErr>;

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr>;
}

#[async_trait]
pub trait PersonMapper: Send + Sync {
    async fn insert(&self, txn: &DatabaseTransaction, person: &mut Person) -> Result<(), DbErr>;

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Person>, DbErr>;

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Person>, DbErr>;

    /// First person registered with `email`
    async fn find_by_email(
        &self,
        txn: &DatabaseTransaction,
        email: &str,
    ) -> Result<Option<Person>, DbErr>;

    async fn update(&self, txn: &DatabaseTransaction, person: &Person) -> Result<(), DbErr>;

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr>;
}

#[async_trait]
pub trait TechnologyMapper: Send + Sync {
    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        technology: &mut Technology,
    ) -> Result<(), DbErr>;

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Technology>, DbErr>;

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Technology>, DbErr>;

    async fn find_by_category(
        &self,
        txn: &DatabaseTransaction,
        category: TechnologyCategory,
    ) -> Result<Vec<Technology>, DbErr>;

    async fn update(
        &self,
        txn: &DatabaseTransaction,
        technology: &Technology,
    ) -> Result<(), DbErr>;

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr>;
}

#[async_trait]
pub trait ProjectMapper: Send + Sync {
    /// Insert a row and write the generated id back into `project`.
    /// Nested relation snapshots are ignored.
    async fn insert(&self, txn: &DatabaseTransaction, project: &mut Project) -> Result<(), DbErr>;

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Project>, DbErr>;

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Project>, DbErr>;

    async fn select_by_organization_id(
        &self,
        txn: &DatabaseTransaction,
        organization_id: i64,
    ) -> Result<Vec<Project>, DbErr>;

    /// Project with its `organization` snapshot populated
    async fn select_project_with_organization(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Project>, DbErr>;

    /// Project with `organization`, `industry`, `project_manager` and
    /// `technical_lead` populated in a single joined query. Unset foreign
    /// keys leave the matching snapshot `None`.
    async fn select_project_with_all_relations(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Project>, DbErr>;

    async fn find_by_status(
        &self,
        txn: &DatabaseTransaction,
        status: ProjectStatus,
    ) -> Result<Vec<Project>, DbErr>;

    async fn find_by_industry_id(
        &self,
        txn: &DatabaseTransaction,
        industry_id: i64,
    ) -> Result<Vec<Project>, DbErr>;

    async fn find_by_project_type(
        &self,
        txn: &DatabaseTransaction,
        project_type: ProjectType,
    ) -> Result<Vec<Project>, DbErr>;

    async fn find_by_project_manager_id(
        &self,
        txn: &DatabaseTransaction,
        project_manager_id: i64,
    ) -> Result<Vec<Project>, DbErr>;

    async fn find_by_technical_lead_id(
        &self,
        txn: &DatabaseTransaction,
        technical_lead_id: i64,
    ) -> Result<Vec<Project>, DbErr>;

    async fn update(&self, txn: &DatabaseTransaction, project: &Project) -> Result<(), DbErr>;

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr>;
}

#[async_trait]
pub trait PhaseMapper: Send + Sync {
    async fn insert(&self, txn: &DatabaseTransaction, phase: &mut Phase) -> Result<(), DbErr>;

    async fn select_by_id(&self, txn: &DatabaseTransaction, id: i64)
        -> Result<Option<Phase>, DbErr>;

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Phase>, DbErr>;

    /// Phase with its owning `project` populated (inner join on the FK)
    async fn select_phase_with_project(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Phase>, DbErr>;

    async fn find_by_project_id(
        &self,
        txn: &DatabaseTransaction,
        project_id: i64,
    ) -> Result<Vec<Phase>, DbErr>;

    async fn update(&self, txn: &DatabaseTransaction, phase: &Phase) -> Result<(), DbErr>;

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr>;
}
