//! Storage layer - SeaORM entities, mappers, migrations and sample data

pub mod conversions;
pub mod entity;
pub mod mappers;
pub mod migrations;
pub mod seed;
pub mod sql_mappers;

pub use mappers::{
    SeaOrmIndustryMapper, SeaOrmOrganizationMapper, SeaOrmPersonMapper, SeaOrmPhaseMapper,
    SeaOrmProjectMapper, SeaOrmTechnologyMapper,
};
pub use migrations::Migrator;
pub use seed::seed_sample_data;
pub use sql_mappers::SqlOrganizationMapper;
