//! Organization mapper over hand-written SQL statements
//!
//! Shares the `organizations` table and the `OrganizationMapper` contract
//! with the entity based mapper, so rows written by one are read by the other.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseTransaction, DbErr, FromQueryResult, Statement,
    Value,
};

use crate::contract::Organization;
use crate::domain::mapper::OrganizationMapper;

const INSERT_ORGANIZATION: &str =
    "INSERT INTO organizations (name, description) VALUES ($1, $2) RETURNING id";
const SELECT_ORGANIZATION: &str = "SELECT id, name, description FROM organizations WHERE id = $1";
const SELECT_ORGANIZATIONS: &str = "SELECT id, name, description FROM organizations ORDER BY id";
const UPDATE_ORGANIZATION: &str =
    "UPDATE organizations SET name = $1, description = $2 WHERE id = $3";
const DELETE_ORGANIZATION: &str = "DELETE FROM organizations WHERE id = $1";

#[allow(clippy::expect_used)] // good regex, it doesn't panic
static NUMBERED_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\d+").expect("static regex should not panic"));

/// Build a statement from SQL written with `$N` placeholders.
///
/// MySQL only understands `?`, so values must be listed in placeholder order.
fn statement(backend: DatabaseBackend, sql: &str, values: Vec<Value>) -> Statement {
    let sql = match backend {
        DatabaseBackend::Postgres | DatabaseBackend::Sqlite => sql.to_owned(),
        DatabaseBackend::MySql => NUMBERED_PLACEHOLDER.replace_all(sql, "?").into_owned(),
    };
    Statement::from_sql_and_values(backend, sql, values)
}

#[derive(Debug, FromQueryResult)]
struct OrganizationRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl From<OrganizationRow> for Organization {
    fn from(row: OrganizationRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqlOrganizationMapper;

#[async_trait]
impl OrganizationMapper for SqlOrganizationMapper {
    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        organization: &mut Organization,
    ) -> Result<(), DbErr> {
        let stmt = statement(
            txn.get_database_backend(),
            INSERT_ORGANIZATION,
            vec![
                organization.name.clone().into(),
                organization.description.clone().into(),
            ],
        );
        let row = txn
            .query_one(stmt)
            .await?
            .ok_or(DbErr::RecordNotInserted)?;
        let id: i64 = row.try_get("", "id")?;

        organization.id = Some(id);
        tracing::debug!(id, "Inserted organization with SQL mapper");
        Ok(())
    }

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Organization>, DbErr> {
        let stmt = statement(
            txn.get_database_backend(),
            SELECT_ORGANIZATION,
            vec![id.into()],
        );
        let row = OrganizationRow::find_by_statement(stmt).one(txn).await?;
        Ok(row.map(Into::into))
    }

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Organization>, DbErr> {
        let stmt = statement(txn.get_database_backend(), SELECT_ORGANIZATIONS, Vec::new());
        let rows = OrganizationRow::find_by_statement(stmt).all(txn).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(
        &self,
        txn: &DatabaseTransaction,
        organization: &Organization,
    ) -> Result<(), DbErr> {
        let Some(id) = organization.id else {
            tracing::debug!("Skipping update of organization without id");
            return Ok(());
        };

        let stmt = statement(
            txn.get_database_backend(),
            UPDATE_ORGANIZATION,
            vec![
                organization.name.clone().into(),
                organization.description.clone().into(),
                id.into(),
            ],
        );
        txn.execute(stmt).await?;
        Ok(())
    }

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        let stmt = statement(txn.get_database_backend(), DELETE_ORGANIZATION, vec![id.into()]);
        txn.execute(stmt).await?;
        Ok(())
    }
}
