//! Entity to model conversions
//!
//! Conversions between SeaORM entities and contract records. Write-side
//! conversions leave `id`, `created_at` and `updated_at` unset: those are
//! assigned by the store.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::DbErr;

use super::entity::{industry, organization, person, phase, project, technology};
use crate::contract::{
    Industry, Organization, Person, Phase, PhaseStatus, PhaseType, Project, ProjectStatus,
    ProjectType, Technology, TechnologyCategory,
};

// ===== Organization =====

impl From<organization::Model> for Organization {
    fn from(entity: organization::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            description: entity.description,
        }
    }
}

impl From<&Organization> for organization::ActiveModel {
    fn from(model: &Organization) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            description: Set(model.description.clone()),
        }
    }
}

// ===== Industry =====

impl From<industry::Model> for Industry {
    fn from(entity: industry::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            description: entity.description,
            created_at: Some(entity.created_at),
            updated_at: Some(entity.updated_at),
        }
    }
}

impl From<&Industry> for industry::ActiveModel {
    fn from(model: &Industry) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            description: Set(model.description.clone()),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

// ===== Person =====

impl From<person::Model> for Person {
    fn from(entity: person::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            email: entity.email,
            role: entity.role,
            department: entity.department,
            created_at: Some(entity.created_at),
            updated_at: Some(entity.updated_at),
        }
    }
}

impl From<&Person> for person::ActiveModel {
    fn from(model: &Person) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            email: Set(model.email.clone()),
            role: Set(model.role.clone()),
            department: Set(model.department.clone()),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

// ===== Technology =====

impl TryFrom<technology::Model> for Technology {
    type Error = DbErr;

    fn try_from(entity: technology::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(entity.id),
            name: entity.name,
            category: entity.category.parse::<TechnologyCategory>()?,
            description: entity.description,
            created_at: Some(entity.created_at),
            updated_at: Some(entity.updated_at),
        })
    }
}

impl From<&Technology> for technology::ActiveModel {
    fn from(model: &Technology) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            category: Set(model.category.as_str().to_string()),
            description: Set(model.description.clone()),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

// ===== Project =====

impl TryFrom<project::Model> for Project {
    type Error = DbErr;

    fn try_from(entity: project::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(entity.id),
            project_name: entity.project_name,
            organization_id: entity.organization_id,
            customer_name: entity.customer_name,
            industry_id: entity.industry_id,
            project_type: entity
                .project_type
                .as_deref()
                .map(str::parse::<ProjectType>)
                .transpose()?,
            status: entity
                .status
                .as_deref()
                .map(str::parse::<ProjectStatus>)
                .transpose()?,
            budget: entity.budget,
            person_months: entity.person_months,
            team_size: entity.team_size,
            planned_start_date: entity.planned_start_date,
            planned_end_date: entity.planned_end_date,
            actual_start_date: entity.actual_start_date,
            actual_end_date: entity.actual_end_date,
            project_manager_id: entity.project_manager_id,
            technical_lead_id: entity.technical_lead_id,
            organization: None,
            industry: None,
            project_manager: None,
            technical_lead: None,
        })
    }
}

impl From<&Project> for project::ActiveModel {
    fn from(model: &Project) -> Self {
        Self {
            id: NotSet,
            project_name: Set(model.project_name.clone()),
            organization_id: Set(model.organization_id),
            customer_name: Set(model.customer_name.clone()),
            industry_id: Set(model.industry_id),
            project_type: Set(model.project_type.map(|t| t.as_str().to_string())),
            status: Set(model.status.map(|s| s.as_str().to_string())),
            budget: Set(model.budget),
            person_months: Set(model.person_months),
            team_size: Set(model.team_size),
            planned_start_date: Set(model.planned_start_date),
            planned_end_date: Set(model.planned_end_date),
            actual_start_date: Set(model.actual_start_date),
            actual_end_date: Set(model.actual_end_date),
            project_manager_id: Set(model.project_manager_id),
            technical_lead_id: Set(model.technical_lead_id),
        }
    }
}

// ===== Phase =====

impl TryFrom<phase::Model> for Phase {
    type Error = DbErr;

    fn try_from(entity: phase::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(entity.id),
            project_id: entity.project_id,
            phase_type: entity.phase_type.parse::<PhaseType>()?,
            planned_start_date: entity.planned_start_date,
            planned_end_date: entity.planned_end_date,
            actual_start_date: entity.actual_start_date,
            actual_end_date: entity.actual_end_date,
            status: entity.status.parse::<PhaseStatus>()?,
            deliverables: entity.deliverables,
            created_at: Some(entity.created_at),
            updated_at: Some(entity.updated_at),
            project: None,
        })
    }
}

impl From<&Phase> for phase::ActiveModel {
    fn from(model: &Phase) -> Self {
        Self {
            id: NotSet,
            project_id: Set(model.project_id),
            phase_type: Set(model.phase_type.as_str().to_string()),
            planned_start_date: Set(model.planned_start_date),
            planned_end_date: Set(model.planned_end_date),
            actual_start_date: Set(model.actual_start_date),
            actual_end_date: Set(model.actual_end_date),
            status: Set(model.status.as_str().to_string()),
            deliverables: Set(model.deliverables.clone()),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn project_row(status: Option<&str>) -> project::Model {
        project::Model {
            id: 7,
            project_name: "Extended Project".to_string(),
            organization_id: 1,
            customer_name: Some("ACME Corp".to_string()),
            industry_id: None,
            project_type: Some("NEW_DEVELOPMENT".to_string()),
            status: status.map(str::to_string),
            budget: Some(Decimal::new(10_000_000, 0)),
            person_months: Some(Decimal::new(125, 1)),
            team_size: Some(5),
            planned_start_date: NaiveDate::from_ymd_opt(2025, 4, 1),
            planned_end_date: NaiveDate::from_ymd_opt(2025, 12, 31),
            actual_start_date: None,
            actual_end_date: None,
            project_manager_id: None,
            technical_lead_id: None,
        }
    }

    #[test]
    fn test_project_row_decodes_tokens() {
        let project = Project::try_from(project_row(Some("PLANNING"))).unwrap();
        assert_eq!(project.id, Some(7));
        assert_eq!(project.project_type, Some(ProjectType::NewDevelopment));
        assert_eq!(project.status, Some(ProjectStatus::Planning));
        assert!(project.organization.is_none());
    }

    #[test]
    fn test_project_row_with_unknown_token_is_type_error() {
        let err = Project::try_from(project_row(Some("ARCHIVED"))).unwrap_err();
        assert!(matches!(err, DbErr::Type(_)));
    }

    #[test]
    fn test_active_model_leaves_store_fields_unset() {
        let mut industry = Industry::new("医療", Some("医療業界"));
        industry.id = Some(3);
        let active: industry::ActiveModel = (&industry).into();
        assert!(active.id.is_not_set());
        assert!(active.created_at.is_not_set());
        assert!(active.updated_at.is_not_set());
        assert!(matches!(&active.name, Set(name) if name == "医療"));
    }
}
