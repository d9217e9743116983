use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{read_only_tx, read_write_tx};
use crate::contract::{DomainError, Project, ProjectStatus, ProjectType};
use crate::domain::mapper::ProjectMapper;
use crate::domain::validation::validate_budget;

/// Project management and relationship lookups
#[derive(Clone)]
pub struct ProjectService {
    db: Arc<DatabaseConnection>,
    mapper: Arc<dyn ProjectMapper>,
}

impl ProjectService {
    pub fn new(db: Arc<DatabaseConnection>, mapper: Arc<dyn ProjectMapper>) -> Self {
        Self { db, mapper }
    }

    /// Insert `project` after checking its budget.
    ///
    /// A negative budget is rejected before the store is touched. An
    /// unknown organization, industry or person id fails with a foreign key
    /// violation.
    pub async fn create_project(&self, project: &mut Project) -> Result<(), DomainError> {
        validate_budget(project.budget)?;

        let mut staged = project.clone();
        let txn = read_write_tx(&self.db).await?;
        self.mapper.insert(&txn, &mut staged).await?;
        txn.commit().await?;
        project.id = staged.id;
        Ok(())
    }

    pub async fn get_project(&self, id: i64) -> Result<Option<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let project = self.mapper.select_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(project)
    }

    pub async fn get_project_with_organization(
        &self,
        id: i64,
    ) -> Result<Option<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let project = self.mapper.select_project_with_organization(&txn, id).await?;
        txn.commit().await?;
        Ok(project)
    }

    pub async fn get_project_with_all_relations(
        &self,
        id: i64,
    ) -> Result<Option<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let project = self.mapper.select_project_with_all_relations(&txn, id).await?;
        txn.commit().await?;
        Ok(project)
    }

    pub async fn get_all_projects(&self) -> Result<Vec<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let projects = self.mapper.select_all(&txn).await?;
        txn.commit().await?;
        Ok(projects)
    }

    pub async fn get_projects_by_organization(
        &self,
        organization_id: i64,
    ) -> Result<Vec<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let projects = self
            .mapper
            .select_by_organization_id(&txn, organization_id)
            .await?;
        txn.commit().await?;
        Ok(projects)
    }

    pub async fn find_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let projects = self.mapper.find_by_status(&txn, status).await?;
        txn.commit().await?;
        Ok(projects)
    }

    pub async fn find_by_industry_id(&self, industry_id: i64) -> Result<Vec<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let projects = self.mapper.find_by_industry_id(&txn, industry_id).await?;
        txn.commit().await?;
        Ok(projects)
    }

    pub async fn find_by_project_type(
        &self,
        project_type: ProjectType,
    ) -> Result<Vec<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let projects = self.mapper.find_by_project_type(&txn, project_type).await?;
        txn.commit().await?;
        Ok(projects)
    }

    pub async fn find_by_project_manager_id(
        &self,
        project_manager_id: i64,
    ) -> Result<Vec<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let projects = self
            .mapper
            .find_by_project_manager_id(&txn, project_manager_id)
            .await?;
        txn.commit().await?;
        Ok(projects)
    }

    pub async fn find_by_technical_lead_id(
        &self,
        technical_lead_id: i64,
    ) -> Result<Vec<Project>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let projects = self
            .mapper
            .find_by_technical_lead_id(&txn, technical_lead_id)
            .await?;
        txn.commit().await?;
        Ok(projects)
    }

    pub async fn update_project(&self, project: &Project) -> Result<(), DomainError> {
        validate_budget(project.budget)?;

        let txn = read_write_tx(&self.db).await?;
        self.mapper.update(&txn, project).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Phases are not removed with the project; a project that still has
    /// phases fails with a foreign key violation.
    pub async fn delete_project(&self, id: i64) -> Result<(), DomainError> {
        let txn = read_write_tx(&self.db).await?;
        self.mapper.delete_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(())
    }
}
