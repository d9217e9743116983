//! Domain services
//!
//! One service per entity. Each public method runs in exactly one
//! transaction: reads use a read-only transaction, writes commit on success
//! and roll back when the transaction is dropped on an error path.
//!
//! Naming: `get_*` reads by primary key (or everything), `find_by_*` filters
//! on another column. A generated id is written back into the caller's
//! record only after the commit succeeds.

mod industry;
mod organization;
mod person;
mod phase;
mod project;
mod technology;

pub use industry::IndustryService;
pub use organization::OrganizationService;
pub use person::PersonService;
pub use phase::PhaseService;
pub use project::ProjectService;
pub use technology::TechnologyService;

use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    TransactionTrait,
};

/// Open a read-only transaction.
///
/// SQLite has no `SET TRANSACTION READ ONLY`, so the access mode is only
/// requested on backends that understand it.
pub(crate) async fn read_only_tx(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    let access_mode = match db.get_database_backend() {
        DbBackend::Sqlite => None,
        _ => Some(AccessMode::ReadOnly),
    };
    db.begin_with_config(None, access_mode).await
}

/// Open a read-write transaction. Callers must `commit()` it.
pub(crate) async fn read_write_tx(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    db.begin().await
}
