//! Project Hub
//!
//! Persistence layer for organizations, projects, persons, industries,
//! technologies and project phases. Mappers run SQL through SeaORM, and
//! services add transaction scope and field validation on top.

// Public exports
pub mod contract;
pub use contract::{
    DomainError, Industry, MemberRole, Organization, Person, Phase, PhaseStatus, PhaseType,
    Project, ProjectStatus, ProjectType, Technology, TechnologyCategory, UnknownTokenError,
};

pub mod bootstrap;
pub use bootstrap::{connect, init_logging, ProjectHub};

pub mod config;
pub use config::Config;

pub mod domain;
pub use domain::EarlyCompletion;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod infra;
