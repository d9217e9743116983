//! Contract models for project hub
//!
//! These models are storage-agnostic records mirroring one row each.
//! NO serde or ORM derives - conversions live in infra/storage.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::error::UnknownTokenError;

/// Declares a closed-set enum persisted as an upper-snake string token.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every token of the closed set, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// String token stored in the database column
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownTokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(UnknownTokenError {
                        kind: stringify!($name),
                        token: other.to_string(),
                    }),
                }
            }
        }
    };
}

token_enum! {
    /// Kind of engagement a project represents
    ProjectType {
        NewDevelopment => "NEW_DEVELOPMENT",
        Maintenance => "MAINTENANCE",
        Consulting => "CONSULTING",
        /// Packaged product rollout
        Package => "PACKAGE",
        InHouseService => "IN_HOUSE_SERVICE",
    }
}

token_enum! {
    /// Project lifecycle status. Transitions are not enforced.
    ProjectStatus {
        Planning => "PLANNING",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

token_enum! {
    /// Delivery phase of a project
    PhaseType {
        Requirements => "REQUIREMENTS",
        Design => "DESIGN",
        Implementation => "IMPLEMENTATION",
        Testing => "TESTING",
        Release => "RELEASE",
    }
}

token_enum! {
    PhaseStatus {
        NotStarted => "NOT_STARTED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
    }
}

token_enum! {
    TechnologyCategory {
        Language => "LANGUAGE",
        Framework => "FRAMEWORK",
        Database => "DATABASE",
        Infrastructure => "INFRASTRUCTURE",
        Tool => "TOOL",
        Other => "OTHER",
    }
}

token_enum! {
    /// Role of a person inside a project team (project_members table)
    MemberRole {
        ProjectManager => "PROJECT_MANAGER",
        TechnicalLead => "TECHNICAL_LEAD",
        Developer => "DEVELOPER",
        Tester => "TESTER",
        Designer => "DESIGNER",
        Advisor => "ADVISOR",
        Other => "OTHER",
    }
}

/// Organization owning projects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    /// Store-assigned identifier, `None` until inserted
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

impl Organization {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}

/// Industry a project belongs to. Names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Industry {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    /// Store-assigned on insert
    pub created_at: Option<NaiveDateTime>,
    /// Store-assigned on insert and update
    pub updated_at: Option<NaiveDateTime>,
}

impl Industry {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
            ..Self::default()
        }
    }
}

/// Person who can manage or lead projects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub id: Option<i64>,
    pub name: String,
    /// Mandatory, validated by the service before any write
    pub email: String,
    /// Free-form job title (e.g. "PM", "Tech Lead")
    pub role: Option<String>,
    pub department: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Option<&str>,
        department: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.map(str::to_string),
            department: department.map(str::to_string),
            ..Self::default()
        }
    }
}

/// Technology that may be used by projects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Technology {
    pub id: Option<i64>,
    pub name: String,
    pub category: TechnologyCategory,
    pub description: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Technology {
    pub fn new(
        name: impl Into<String>,
        category: TechnologyCategory,
        description: Option<&str>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            category,
            description: description.map(str::to_string),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Project record.
///
/// The nested `organization`, `industry`, `project_manager` and
/// `technical_lead` snapshots are only populated by the join-fetch lookups;
/// plain selects leave them `None` and writes ignore them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    pub id: Option<i64>,
    pub project_name: String,
    pub organization_id: i64,
    pub customer_name: Option<String>,
    pub industry_id: Option<i64>,
    pub project_type: Option<ProjectType>,
    pub status: Option<ProjectStatus>,
    /// Must be >= 0 when present
    pub budget: Option<Decimal>,
    pub person_months: Option<Decimal>,
    pub team_size: Option<i32>,
    pub planned_start_date: Option<NaiveDate>,
    pub planned_end_date: Option<NaiveDate>,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
    pub project_manager_id: Option<i64>,
    pub technical_lead_id: Option<i64>,

    pub organization: Option<Organization>,
    pub industry: Option<Industry>,
    pub project_manager: Option<Person>,
    pub technical_lead: Option<Person>,
}

impl Project {
    pub fn new(project_name: impl Into<String>, organization_id: i64) -> Self {
        Self {
            project_name: project_name.into(),
            organization_id,
            ..Self::default()
        }
    }

    /// Same record with every nested join snapshot cleared
    pub fn without_relations(mut self) -> Self {
        self.organization = None;
        self.industry = None;
        self.project_manager = None;
        self.technical_lead = None;
        self
    }
}

/// Phase of a project with planned and actual schedule.
///
/// `project` is only populated by the phase-with-project lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub id: Option<i64>,
    pub project_id: i64,
    pub phase_type: PhaseType,
    pub planned_start_date: Option<NaiveDate>,
    pub planned_end_date: Option<NaiveDate>,
    pub actual_start_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
    pub status: PhaseStatus,
    pub deliverables: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,

    pub project: Option<Box<Project>>,
}

impl Phase {
    pub fn new(project_id: i64, phase_type: PhaseType, status: PhaseStatus) -> Self {
        Self {
            id: None,
            project_id,
            phase_type,
            planned_start_date: None,
            planned_end_date: None,
            actual_start_date: None,
            actual_end_date: None,
            status,
            deliverables: None,
            created_at: None,
            updated_at: None,
            project: None,
        }
    }
}
