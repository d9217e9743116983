//! SeaORM entities for database tables
//!
//! Enum-valued columns are plain strings here; the token conversion
//! happens in `conversions.rs`.

/// Organizations table
pub mod organization {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "organizations")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub name: String,
        pub description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::project::Entity")]
        Projects,
    }

    impl Related<super::project::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Projects.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Industries table
pub mod industry {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "industries")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        #[sea_orm(unique)]
        pub name: String,
        pub description: Option<String>,
        pub created_at: DateTime,
        pub updated_at: DateTime,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::project::Entity")]
        Projects,
    }

    impl Related<super::project::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Projects.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Persons table
pub mod person {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "persons")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub name: String,
        pub email: String,
        pub role: Option<String>,
        pub department: Option<String>,
        pub created_at: DateTime,
        pub updated_at: DateTime,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Technologies table
pub mod technology {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "technologies")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub name: String,
        /// TechnologyCategory token
        pub category: String,
        pub description: Option<String>,
        pub created_at: DateTime,
        pub updated_at: DateTime,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Projects table
pub mod project {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "projects")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub project_name: String,
        pub organization_id: i64,
        pub customer_name: Option<String>,
        pub industry_id: Option<i64>,
        /// ProjectType token
        pub project_type: Option<String>,
        /// ProjectStatus token
        pub status: Option<String>,
        pub budget: Option<Decimal>,
        pub person_months: Option<Decimal>,
        pub team_size: Option<i32>,
        pub planned_start_date: Option<Date>,
        pub planned_end_date: Option<Date>,
        pub actual_start_date: Option<Date>,
        pub actual_end_date: Option<Date>,
        pub project_manager_id: Option<i64>,
        pub technical_lead_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::organization::Entity",
            from = "Column::OrganizationId",
            to = "super::organization::Column::Id"
        )]
        Organization,
        #[sea_orm(
            belongs_to = "super::industry::Entity",
            from = "Column::IndustryId",
            to = "super::industry::Column::Id"
        )]
        Industry,
        /// Person acting as project manager
        #[sea_orm(
            belongs_to = "super::person::Entity",
            from = "Column::ProjectManagerId",
            to = "super::person::Column::Id"
        )]
        ProjectManager,
        /// Person acting as technical lead
        #[sea_orm(
            belongs_to = "super::person::Entity",
            from = "Column::TechnicalLeadId",
            to = "super::person::Column::Id"
        )]
        TechnicalLead,
        #[sea_orm(has_many = "super::phase::Entity")]
        Phases,
    }

    impl Related<super::organization::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Organization.def()
        }
    }

    impl Related<super::industry::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Industry.def()
        }
    }

    impl Related<super::phase::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Phases.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Phases table
pub mod phase {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "phases")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub project_id: i64,
        /// PhaseType token
        pub phase_type: String,
        pub planned_start_date: Option<Date>,
        pub planned_end_date: Option<Date>,
        pub actual_start_date: Option<Date>,
        pub actual_end_date: Option<Date>,
        /// PhaseStatus token
        pub status: String,
        pub deliverables: Option<String>,
        pub created_at: DateTime,
        pub updated_at: DateTime,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::project::Entity",
            from = "Column::ProjectId",
            to = "super::project::Column::Id"
        )]
        Project,
    }

    impl Related<super::project::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Project.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
