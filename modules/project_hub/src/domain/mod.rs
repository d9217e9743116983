//! Domain layer - mapper contracts, validation and services

pub mod mapper;
pub mod schedule;
pub mod service;
pub mod validation;

pub use mapper::{
    IndustryMapper, OrganizationMapper, PersonMapper, PhaseMapper, ProjectMapper,
    TechnologyMapper,
};
pub use schedule::EarlyCompletion;
pub use service::{
    IndustryService, OrganizationService, PersonService, PhaseService, ProjectService,
    TechnologyService,
};
