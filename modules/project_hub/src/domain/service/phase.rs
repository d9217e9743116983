use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{read_only_tx, read_write_tx};
use crate::contract::{DomainError, Phase};
use crate::domain::mapper::PhaseMapper;
use crate::domain::schedule::{early_completion, EarlyCompletion};

/// Project phase management
#[derive(Clone)]
pub struct PhaseService {
    db: Arc<DatabaseConnection>,
    mapper: Arc<dyn PhaseMapper>,
}

impl PhaseService {
    pub fn new(db: Arc<DatabaseConnection>, mapper: Arc<dyn PhaseMapper>) -> Self {
        Self { db, mapper }
    }

    pub async fn create_phase(&self, phase: &mut Phase) -> Result<(), DomainError> {
        let mut staged = phase.clone();
        let txn = read_write_tx(&self.db).await?;
        self.mapper.insert(&txn, &mut staged).await?;
        txn.commit().await?;
        phase.id = staged.id;
        Ok(())
    }

    pub async fn get_phase(&self, id: i64) -> Result<Option<Phase>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let phase = self.mapper.select_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(phase)
    }

    pub async fn get_all_phases(&self) -> Result<Vec<Phase>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let phases = self.mapper.select_all(&txn).await?;
        txn.commit().await?;
        Ok(phases)
    }

    pub async fn get_phase_with_project(&self, id: i64) -> Result<Option<Phase>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let phase = self.mapper.select_phase_with_project(&txn, id).await?;
        txn.commit().await?;
        Ok(phase)
    }

    /// Phases of one project ordered by planned start date
    pub async fn find_by_project_id(&self, project_id: i64) -> Result<Vec<Phase>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let phases = self.mapper.find_by_project_id(&txn, project_id).await?;
        txn.commit().await?;
        Ok(phases)
    }

    /// Update `phase`.
    ///
    /// When the phase ended before its planned end date a warning is logged
    /// and the notice is returned. The update is applied either way.
    pub async fn update_phase(&self, phase: &Phase) -> Result<Option<EarlyCompletion>, DomainError> {
        let notice = early_completion(phase);
        if let Some(notice) = &notice {
            tracing::warn!(
                phase_id = ?notice.phase_id,
                planned_end_date = %notice.planned_end_date,
                actual_end_date = %notice.actual_end_date,
                days_ahead = notice.days_ahead(),
                "Phase completed ahead of schedule"
            );
        }

        let txn = read_write_tx(&self.db).await?;
        self.mapper.update(&txn, phase).await?;
        txn.commit().await?;
        Ok(notice)
    }

    pub async fn delete_phase(&self, id: i64) -> Result<(), DomainError> {
        let txn = read_write_tx(&self.db).await?;
        self.mapper.delete_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(())
    }
}
