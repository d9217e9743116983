//! Wiring: logging, connection pool, migrations, sample data and services

use std::sync::Arc;

use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DatabaseConfig, LoggingConfig};
use crate::domain::service::{
    IndustryService, OrganizationService, PersonService, PhaseService, ProjectService,
    TechnologyService,
};
use crate::infra::storage::{
    seed_sample_data, Migrator, SeaOrmIndustryMapper, SeaOrmOrganizationMapper,
    SeaOrmPersonMapper, SeaOrmPhaseMapper, SeaOrmProjectMapper, SeaOrmTechnologyMapper,
};

/// Install a global fmt subscriber.
///
/// `RUST_LOG` wins over `logging.level`. Calling this again after a
/// subscriber is installed leaves the existing one in place.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log level: {}", config.level))?,
    };

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_ok()
    };

    if !installed {
        tracing::debug!("Global subscriber already installed");
    }
    Ok(())
}

fn is_in_memory_sqlite(url: &str) -> bool {
    url.starts_with("sqlite:") && (url.contains(":memory:") || url.contains("mode=memory"))
}

/// Open the connection pool.
///
/// An in-memory SQLite database lives in a single connection, so the pool
/// is pinned to exactly one.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    if is_in_memory_sqlite(&config.url) {
        options.max_connections(1).min_connections(1);
    } else {
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections);
    }
    options
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", config.url))?;
    tracing::info!(backend = ?db.get_database_backend(), "Database connected");
    Ok(db)
}

/// Entry point holding the shared pool and one service per entity
#[derive(Clone)]
pub struct ProjectHub {
    db: Arc<DatabaseConnection>,
    organizations: OrganizationService,
    industries: IndustryService,
    persons: PersonService,
    technologies: TechnologyService,
    projects: ProjectService,
    phases: PhaseService,
}

impl ProjectHub {
    /// Connect, run pending migrations and seed sample data when enabled
    pub async fn init(config: &Config) -> Result<Self> {
        let db = connect(&config.database).await?;

        Migrator::up(&db, None)
            .await
            .context("failed to run migrations")?;
        tracing::info!("Project hub migrations completed");

        if config.seed_sample_data {
            seed_sample_data(&db).await.context("failed to seed sample data")?;
        }

        Ok(Self::with_connection(Arc::new(db)))
    }

    /// Build the services on an already migrated connection
    pub fn with_connection(db: Arc<DatabaseConnection>) -> Self {
        Self {
            organizations: OrganizationService::new(db.clone(), Arc::new(SeaOrmOrganizationMapper)),
            industries: IndustryService::new(db.clone(), Arc::new(SeaOrmIndustryMapper)),
            persons: PersonService::new(db.clone(), Arc::new(SeaOrmPersonMapper)),
            technologies: TechnologyService::new(db.clone(), Arc::new(SeaOrmTechnologyMapper)),
            projects: ProjectService::new(db.clone(), Arc::new(SeaOrmProjectMapper)),
            phases: PhaseService::new(db.clone(), Arc::new(SeaOrmPhaseMapper)),
            db,
        }
    }

    pub fn db(&self) -> &Arc<DatabaseConnection> {
        &self.db
    }

    pub fn organizations(&self) -> &OrganizationService {
        &self.organizations
    }

    pub fn industries(&self) -> &IndustryService {
        &self.industries
    }

    pub fn persons(&self) -> &PersonService {
        &self.persons
    }

    pub fn technologies(&self) -> &TechnologyService {
        &self.technologies
    }

    pub fn projects(&self) -> &ProjectService {
        &self.projects
    }

    pub fn phases(&self) -> &PhaseService {
        &self.phases
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory_sqlite("sqlite::memory:"));
        assert!(is_in_memory_sqlite("sqlite://file:hub?mode=memory&cache=shared"));
        assert!(!is_in_memory_sqlite("sqlite://hub.db?mode=rwc"));
        assert!(!is_in_memory_sqlite("postgres://localhost/hub"));
    }

    #[test]
    fn test_init_logging_twice_is_ok() {
        init_logging(&LoggingConfig::default()).unwrap();
        let json = LoggingConfig {
            json: true,
            ..LoggingConfig::default()
        };
        init_logging(&json).unwrap();
    }

    #[tokio::test]
    async fn test_connect_in_memory_sqlite() {
        let db = connect(&DatabaseConfig::default()).await.unwrap();
        assert_eq!(db.get_database_backend(), sea_orm::DbBackend::Sqlite);
    }
}
