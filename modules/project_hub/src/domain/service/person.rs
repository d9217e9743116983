use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{read_only_tx, read_write_tx};
use crate::contract::{DomainError, Person};
use crate::domain::mapper::PersonMapper;
use crate::domain::validation::validate_email;

/// Person management. Emails are validated before every write.
#[derive(Clone)]
pub struct PersonService {
    db: Arc<DatabaseConnection>,
    mapper: Arc<dyn PersonMapper>,
}

impl PersonService {
    pub fn new(db: Arc<DatabaseConnection>, mapper: Arc<dyn PersonMapper>) -> Self {
        Self { db, mapper }
    }

    pub async fn create_person(&self, person: &mut Person) -> Result<(), DomainError> {
        validate_email(&person.email)?;

        let mut staged = person.clone();
        let txn = read_write_tx(&self.db).await?;
        self.mapper.insert(&txn, &mut staged).await?;
        txn.commit().await?;
        person.id = staged.id;
        Ok(())
    }

    pub async fn get_person(&self, id: i64) -> Result<Option<Person>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let person = self.mapper.select_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(person)
    }

    pub async fn get_all_persons(&self) -> Result<Vec<Person>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let persons = self.mapper.select_all(&txn).await?;
        txn.commit().await?;
        Ok(persons)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Person>, DomainError> {
        let txn = read_only_tx(&self.db).await?;
        let person = self.mapper.find_by_email(&txn, email).await?;
        txn.commit().await?;
        Ok(person)
    }

    pub async fn update_person(&self, person: &Person) -> Result<(), DomainError> {
        validate_email(&person.email)?;

        let txn = read_write_tx(&self.db).await?;
        self.mapper.update(&txn, person).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn delete_person(&self, id: i64) -> Result<(), DomainError> {
        let txn = read_write_tx(&self.db).await?;
        self.mapper.delete_by_id(&txn, id).await?;
        txn.commit().await?;
        Ok(())
    }
}
