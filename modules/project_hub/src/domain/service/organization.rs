use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{read_only_tx, read_write_tx};
use crate::contract::{DomainError, Organization};
use crate::domain::mapper::OrganizationMapper;

/// Organization management
#[derive(Clone)]
pub struct OrganizationService {
    db: Arc<DatabaseConnection>,
    mapper: Arc<dyn OrganizationMapper>,
}

impl OrganizationService {
    pub fn new(db: Arc<DatabaseConnection>, mapper: Arc<dyn OrganizationMapper>) -> Self {
        Self { db, mapper }
    }

    /// Insert `organization` and write its generated id back
    pub async fn create_organization(
        &self,
        organization: &mut Organization,
    ) -> Result<(), DomainError> {
        let mut staged = organization.clone();
        let txn = read_write_tx(&self.db).await?;
        self.mapper.insert(&txn, &mut staged).await?;
        txn.commit().await?;
        organization.id = staged.id;
        Ok(())
    }

    pub async fn get_organization(&self, id: i64) -> Result<Option<Organization>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let organization = self.mapper.select_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(organization)
    }

    pub async fn get_all_organizations(&self) -> Result<Vec<Organization>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let organizations = self.mapper.select_all(&txn).await?;
        txn.commit().await?;
        Ok(organizations)
    }

    pub async fn update_organization(&self, organization: &Organization) -> Result<(), DomainError> {
        let txn = read_write_tx(&self.db).await?;
        self.mapper.update(&txn, organization).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Fails with a foreign key violation while projects still reference it
    pub async fn delete_organization(&self, id: i64) -> Result<(), DomainError> {
        let txn = read_write_tx(&self.db).await?;
        self.mapper.delete_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(())
    }
}
