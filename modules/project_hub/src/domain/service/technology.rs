use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{read_only_tx, read_write_tx};
use crate::contract::{DomainError, Technology, TechnologyCategory};
use crate::domain::mapper::TechnologyMapper;

/// Technology catalogue
#[derive(Clone)]
pub struct TechnologyService {
    db: Arc<DatabaseConnection>,
    mapper: Arc<dyn TechnologyMapper>,
}

impl TechnologyService {
    pub fn new(db: Arc<DatabaseConnection>, mapper: Arc<dyn TechnologyMapper>) -> Self {
        Self { db, mapper }
    }

    pub async fn create_technology(&self, technology: &mut Technology) -> Result<(), DomainError> {
        let mut staged = technology.clone();
        let txn = read_write_tx(&self.db).await?;
        self.mapper.insert(&txn, &mut staged).await?;
        txn.commit().await?;
        technology.id = staged.id;
        Ok(())
    }

    pub async fn get_technology(&self, id: i64) -> Result<Option<Technology>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let technology = self.mapper.select_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(technology)
    }

    pub async fn get_all_technologies(&self) -> Result<Vec<Technology>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let technologies = self.mapper.select_all(&txn).await?;
        txn.commit().await?;
        Ok(technologies)
    }

    pub async fn find_by_category(
        &self,
        category: TechnologyCategory,
    ) -> Result<Vec<Technology>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let technologies = self.mapper.find_by_category(&txn, category).await?;
        txn.commit().await?;
        Ok(technologies)
    }

    pub async fn update_technology(&self, technology: &Technology) -> Result<(), DomainError> {
        let txn = read_write_tx(&self.db).await?;
        self.mapper.update(&txn, technology).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn delete_technology(&self, id: i64) -> Result<(), DomainError> {
        let txn = read_write_tx(&self.db).await?;
        self.mapper.delete_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(())
    }
}
