//! Contract layer - public records, closed-set enums and errors
//!
//! These types are storage-agnostic. The infra layer converts them to and
//! from SeaORM models.

pub mod error;
pub mod model;

pub use error::{DomainError, UnknownTokenError};
pub use model::{
    Industry, MemberRole, Organization, Person, Phase, PhaseStatus, PhaseType, Project,
    ProjectStatus, ProjectType, Technology, TechnologyCategory,
};
