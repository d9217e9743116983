use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{read_only_tx, read_write_tx};
use crate::contract::{DomainError, Industry};
use crate::domain::mapper::IndustryMapper;

/// Industry management. Names are unique in the store.
#[derive(Clone)]
pub struct IndustryService {
    db: Arc<DatabaseConnection>,
    mapper: Arc<dyn IndustryMapper>,
}

impl IndustryService {
    pub fn new(db: Arc<DatabaseConnection>, mapper: Arc<dyn IndustryMapper>) -> Self {
        Self { db, mapper }
    }

    /// Insert `industry`. A duplicate name surfaces as a database error.
    pub async fn create_industry(&self, industry: &mut Industry) -> Result<(), DomainError> {
        let mut staged = industry.clone();
        let txn = read_write_tx(&self.db).await?;
        self.mapper.insert(&txn, &mut staged).await?;
        txn.commit().await?;
        industry.id = staged.id;
        Ok(())
    }

    pub async fn get_industry(&self, id: i64) -> Result<Option<Industry>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let industry = self.mapper.select_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(industry)
    }

    pub async fn get_all_industries(&self) -> Result<Vec<Industry>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let industries = self.mapper.select_all(&txn).await?;
        txn.commit().await?;
        Ok(industries)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Industry>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let industry = self.mapper.find_by_name(&txn, name).await?;
        txn.commit().await?;
        Ok(industry)
    }

    pub async fn update_industry(&self, industry: &Industry) -> Result<(), DomainError> {
        let txn = read_write_tx(&self.db).await?;
        self.mapper.update(&txn, industry).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn delete_industry(&self, id: i64) -> Result<(), DomainError> {
        let txn = read_write_tx(&self.db).await?;
        self.mapper.delete_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(())
    }
}
