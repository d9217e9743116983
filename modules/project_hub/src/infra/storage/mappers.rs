//! SeaORM mapper implementations

use async_trait::async_trait;
use sea_orm::prelude::Expr;
use sea_orm::sea_query::{Alias, IntoColumnRef, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseTransaction, DbErr, EntityName, EntityTrait, FromQueryResult, IdenStatic,
    Iterable, JoinType, QueryFilter, QueryOrder, QueryResult, QuerySelect, RelationTrait, Select,
};

use super::entity::{industry, organization, person, phase, project, technology};
use crate::contract::{
    Industry, Organization, Person, Phase, Project, ProjectStatus, ProjectType, Technology,
    TechnologyCategory,
};
use crate::domain::mapper::{
    IndustryMapper, OrganizationMapper, PersonMapper, PhaseMapper, ProjectMapper,
    TechnologyMapper,
};

fn touched_now() -> SimpleExpr {
    Expr::current_timestamp().into()
}

fn try_collect<M, T>(rows: Vec<M>) -> Result<Vec<T>, DbErr>
where
    T: TryFrom<M, Error = DbErr>,
{
    rows.into_iter().map(T::try_from).collect()
}

// ===== Organization Mapper =====

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmOrganizationMapper;

#[async_trait]
impl OrganizationMapper for SeaOrmOrganizationMapper {
    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        organization: &mut Organization,
    ) -> Result<(), DbErr> {
        let active: organization::ActiveModel = (&*organization).into();
        let result = organization::Entity::insert(active).exec(txn).await?;
        organization.id = Some(result.last_insert_id);
        tracing::debug!(id = result.last_insert_id, "Inserted organization");
        Ok(())
    }

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Organization>, DbErr> {
        let result = organization::Entity::find_by_id(id).one(txn).await?;
        Ok(result.map(Into::into))
    }

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Organization>, DbErr> {
        let results = organization::Entity::find()
            .order_by_asc(organization::Column::Id)
            .all(txn)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
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

        let active: organization::ActiveModel = organization.into();
        organization::Entity::update_many()
            .set(active)
            .filter(organization::Column::Id.eq(id))
            .exec(txn)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        organization::Entity::delete_by_id(id).exec(txn).await?;
        Ok(())
    }
}

// ===== Industry Mapper =====

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmIndustryMapper;

#[async_trait]
impl IndustryMapper for SeaOrmIndustryMapper {
    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        industry: &mut Industry,
    ) -> Result<(), DbErr> {
        let active: industry::ActiveModel = (&*industry).into();
        let result = industry::Entity::insert(active).exec(txn).await?;
        industry.id = Some(result.last_insert_id);
        tracing::debug!(id = result.last_insert_id, "Inserted industry");
        Ok(())
    }

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Industry>, DbErr> {
        let result = industry::Entity::find_by_id(id).one(txn).await?;
        Ok(result.map(Into::into))
    }

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Industry>, DbErr> {
        let results = industry::Entity::find()
            .order_by_asc(industry::Column::Id)
            .all(txn)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_name(
        &self,
        txn: &DatabaseTransaction,
        name: &str,
    ) -> Result<Option<Industry>, DbErr> {
        let result = industry::Entity::find()
            .filter(industry::Column::Name.eq(name))
            .one(txn)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, txn: &DatabaseTransaction, industry: &Industry) -> Result<(), DbErr> {
        let Some(id) = industry.id else {
            tracing::debug!("Skipping update of industry without id");
            return Ok(());
        };

        let active: industry::ActiveModel = industry.into();
        industry::Entity::update_many()
            .set(active)
            .col_expr(industry::Column::UpdatedAt, touched_now())
            .filter(industry::Column::Id.eq(id))
            .exec(txn)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        industry::Entity::delete_by_id(id).exec(txn).await?;
        Ok(())
    }
}

// ===== Person Mapper =====

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmPersonMapper;

#[async_trait]
impl PersonMapper for SeaOrmPersonMapper {
    async fn insert(&self, txn: &DatabaseTransaction, person: &mut Person) -> Result<(), DbErr> {
        let active: person::ActiveModel = (&*person).into();
        let result = person::Entity::insert(active).exec(txn).await?;
        person.id = Some(result.last_insert_id);
        tracing::debug!(id = result.last_insert_id, "Inserted person");
        Ok(())
    }

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Person>, DbErr> {
        let result = person::Entity::find_by_id(id).one(txn).await?;
        Ok(result.map(Into::into))
    }

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Person>, DbErr> {
        let results = person::Entity::find()
            .order_by_asc(person::Column::Id)
            .all(txn)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_email(
        &self,
        txn: &DatabaseTransaction,
        email: &str,
    ) -> Result<Option<Person>, DbErr> {
        // email is indexed but not unique
        let result = person::Entity::find()
            .filter(person::Column::Email.eq(email))
            .order_by_asc(person::Column::Id)
            .one(txn)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, txn: &DatabaseTransaction, person: &Person) -> Result<(), DbErr> {
        let Some(id) = person.id else {
            tracing::debug!("Skipping update of person without id");
            return Ok(());
        };

        let active: person::ActiveModel = person.into();
        person::Entity::update_many()
            .set(active)
            .col_expr(person::Column::UpdatedAt, touched_now())
            .filter(person::Column::Id.eq(id))
            .exec(txn)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        person::Entity::delete_by_id(id).exec(txn).await?;
        Ok(())
    }
}

// ===== Technology Mapper =====

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmTechnologyMapper;

#[async_trait]
impl TechnologyMapper for SeaOrmTechnologyMapper {
    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        technology: &mut Technology,
    ) -> Result<(), DbErr> {
        let active: technology::ActiveModel = (&*technology).into();
        let result = technology::Entity::insert(active).exec(txn).await?;
        technology.id = Some(result.last_insert_id);
        tracing::debug!(id = result.last_insert_id, "Inserted technology");
        Ok(())
    }

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Technology>, DbErr> {
        technology::Entity::find_by_id(id)
            .one(txn)
            .await?
            .map(Technology::try_from)
            .transpose()
    }

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Technology>, DbErr> {
        let results = technology::Entity::find()
            .order_by_asc(technology::Column::Id)
            .all(txn)
            .await?;

        try_collect(results)
    }

    async fn find_by_category(
        &self,
        txn: &DatabaseTransaction,
        category: TechnologyCategory,
    ) -> Result<Vec<Technology>, DbErr> {
        let results = technology::Entity::find()
            .filter(technology::Column::Category.eq(category.as_str()))
            .order_by_asc(technology::Column::Id)
            .all(txn)
            .await?;

        try_collect(results)
    }

    async fn update(
        &self,
        txn: &DatabaseTransaction,
        technology: &Technology,
    ) -> Result<(), DbErr> {
        let Some(id) = technology.id else {
            tracing::debug!("Skipping update of technology without id");
            return Ok(());
        };

        let active: technology::ActiveModel = technology.into();
        technology::Entity::update_many()
            .set(active)
            .col_expr(technology::Column::UpdatedAt, touched_now())
            .filter(technology::Column::Id.eq(id))
            .exec(txn)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        technology::Entity::delete_by_id(id).exec(txn).await?;
        Ok(())
    }
}

// ===== Project Mapper =====

const PROJECT_PREFIX: &str = "p_";
const ORGANIZATION_ALIAS: &str = "org";
const INDUSTRY_ALIAS: &str = "ind";
const MANAGER_ALIAS: &str = "pm";
const LEAD_ALIAS: &str = "tl";

/// Select every column of `E`, read from `table`, as `<prefix><column>`.
fn select_prefixed<E>(
    query: Select<project::Entity>,
    table: &str,
    prefix: &str,
) -> Select<project::Entity>
where
    E: EntityTrait,
{
    <E::Column as Iterable>::iter().fold(query, |query, column| {
        let source = (Alias::new(table), column).into_column_ref();
        query.column_as(
            SimpleExpr::Column(source),
            format!("{prefix}{}", column.as_str()),
        )
    })
}

/// One row of the all-relations join: the project plus each optional parent
/// decoded from its own column prefix.
struct ProjectRelationsRow {
    project: project::Model,
    organization: Option<organization::Model>,
    industry: Option<industry::Model>,
    project_manager: Option<person::Model>,
    technical_lead: Option<person::Model>,
}

impl FromQueryResult for ProjectRelationsRow {
    fn from_query_result(res: &QueryResult, _pre: &str) -> Result<Self, DbErr> {
        Ok(Self {
            project: project::Model::from_query_result(res, PROJECT_PREFIX)?,
            organization: organization::Model::from_query_result_optional(
                res,
                &format!("{ORGANIZATION_ALIAS}_"),
            )?,
            industry: industry::Model::from_query_result_optional(
                res,
                &format!("{INDUSTRY_ALIAS}_"),
            )?,
            project_manager: person::Model::from_query_result_optional(
                res,
                &format!("{MANAGER_ALIAS}_"),
            )?,
            technical_lead: person::Model::from_query_result_optional(
                res,
                &format!("{LEAD_ALIAS}_"),
            )?,
        })
    }
}

impl TryFrom<ProjectRelationsRow> for Project {
    type Error = DbErr;

    fn try_from(row: ProjectRelationsRow) -> Result<Self, Self::Error> {
        let mut project = Project::try_from(row.project)?;
        project.organization = row.organization.map(Into::into);
        project.industry = row.industry.map(Into::into);
        project.project_manager = row.project_manager.map(Into::into);
        project.technical_lead = row.technical_lead.map(Into::into);
        Ok(project)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmProjectMapper;

impl SeaOrmProjectMapper {
    async fn find_where(
        &self,
        txn: &DatabaseTransaction,
        condition: SimpleExpr,
    ) -> Result<Vec<Project>, DbErr> {
        let results = project::Entity::find()
            .filter(condition)
            .order_by_asc(project::Column::Id)
            .all(txn)
            .await?;

        try_collect(results)
    }
}

#[async_trait]
impl ProjectMapper for SeaOrmProjectMapper {
    async fn insert(&self, txn: &DatabaseTransaction, project: &mut Project) -> Result<(), DbErr> {
        let active: project::ActiveModel = (&*project).into();
        let result = project::Entity::insert(active).exec(txn).await?;
        project.id = Some(result.last_insert_id);
        tracing::debug!(id = result.last_insert_id, "Inserted project");
        Ok(())
    }

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Project>, DbErr> {
        project::Entity::find_by_id(id)
            .one(txn)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Project>, DbErr> {
        let results = project::Entity::find()
            .order_by_asc(project::Column::Id)
            .all(txn)
            .await?;

        try_collect(results)
    }

    async fn select_by_organization_id(
        &self,
        txn: &DatabaseTransaction,
        organization_id: i64,
    ) -> Result<Vec<Project>, DbErr> {
        self.find_where(txn, project::Column::OrganizationId.eq(organization_id))
            .await
    }

    async fn select_project_with_organization(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Project>, DbErr> {
        let Some((row, organization)) = project::Entity::find_by_id(id)
            .find_also_related(organization::Entity)
            .one(txn)
            .await?
        else {
            return Ok(None);
        };

        let mut project = Project::try_from(row)?;
        project.organization = organization.map(Into::into);
        Ok(Some(project))
    }

    async fn select_project_with_all_relations(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Project>, DbErr> {
        let query = project::Entity::find_by_id(id).select_only();
        let query =
            select_prefixed::<project::Entity>(query, project::Entity.table_name(), PROJECT_PREFIX);
        let query = select_prefixed::<organization::Entity>(
            query,
            ORGANIZATION_ALIAS,
            &format!("{ORGANIZATION_ALIAS}_"),
        );
        let query = select_prefixed::<industry::Entity>(
            query,
            INDUSTRY_ALIAS,
            &format!("{INDUSTRY_ALIAS}_"),
        );
        let query =
            select_prefixed::<person::Entity>(query, MANAGER_ALIAS, &format!("{MANAGER_ALIAS}_"));
        let query = select_prefixed::<person::Entity>(query, LEAD_ALIAS, &format!("{LEAD_ALIAS}_"));

        let row = query
            .join_as(
                JoinType::LeftJoin,
                project::Relation::Organization.def(),
                Alias::new(ORGANIZATION_ALIAS),
            )
            .join_as(
                JoinType::LeftJoin,
                project::Relation::Industry.def(),
                Alias::new(INDUSTRY_ALIAS),
            )
            .join_as(
                JoinType::LeftJoin,
                project::Relation::ProjectManager.def(),
                Alias::new(MANAGER_ALIAS),
            )
            .join_as(
                JoinType::LeftJoin,
                project::Relation::TechnicalLead.def(),
                Alias::new(LEAD_ALIAS),
            )
            .into_model::<ProjectRelationsRow>()
            .one(txn)
            .await?;

        row.map(Project::try_from).transpose()
    }

    async fn find_by_status(
        &self,
        txn: &DatabaseTransaction,
        status: ProjectStatus,
    ) -> Result<Vec<Project>, DbErr> {
        self.find_where(txn, project::Column::Status.eq(status.as_str()))
            .await
    }

    async fn find_by_industry_id(
        &self,
        txn: &DatabaseTransaction,
        industry_id: i64,
    ) -> Result<Vec<Project>, DbErr> {
        self.find_where(txn, project::Column::IndustryId.eq(industry_id))
            .await
    }

    async fn find_by_project_type(
        &self,
        txn: &DatabaseTransaction,
        project_type: ProjectType,
    ) -> Result<Vec<Project>, DbErr> {
        self.find_where(txn, project::Column::ProjectType.eq(project_type.as_str()))
            .await
    }

    async fn find_by_project_manager_id(
        &self,
        txn: &DatabaseTransaction,
        project_manager_id: i64,
    ) -> Result<Vec<Project>, DbErr> {
        self.find_where(txn, project::Column::ProjectManagerId.eq(project_manager_id))
            .await
    }

    async fn find_by_technical_lead_id(
        &self,
        txn: &DatabaseTransaction,
        technical_lead_id: i64,
    ) -> Result<Vec<Project>, DbErr> {
        self.find_where(txn, project::Column::TechnicalLeadId.eq(technical_lead_id))
            .await
    }

    async fn update(&self, txn: &DatabaseTransaction, project: &Project) -> Result<(), DbErr> {
        let Some(id) = project.id else {
            tracing::debug!("Skipping update of project without id");
            return Ok(());
        };

        let active: project::ActiveModel = project.into();
        project::Entity::update_many()
            .set(active)
            .filter(project::Column::Id.eq(id))
            .exec(txn)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        // TODO: remove phases, project_members and project_technologies rows
        // first once cascading delete is decided; the FK currently rejects it.
        project::Entity::delete_by_id(id).exec(txn).await?;
        Ok(())
    }
}

// ===== Phase Mapper =====

#[derive(Debug, Default, Clone, Copy)]
pub struct SeaOrmPhaseMapper;

#[async_trait]
impl PhaseMapper for SeaOrmPhaseMapper {
    async fn insert(&self, txn: &DatabaseTransaction, phase: &mut Phase) -> Result<(), DbErr> {
        let active: phase::ActiveModel = (&*phase).into();
        let result = phase::Entity::insert(active).exec(txn).await?;
        phase.id = Some(result.last_insert_id);
        tracing::debug!(id = result.last_insert_id, project_id = phase.project_id, "Inserted phase");
        Ok(())
    }

    async fn select_by_id(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Phase>, DbErr> {
        phase::Entity::find_by_id(id)
            .one(txn)
            .await?
            .map(Phase::try_from)
            .transpose()
    }

    async fn select_all(&self, txn: &DatabaseTransaction) -> Result<Vec<Phase>, DbErr> {
        let results = phase::Entity::find()
            .order_by_asc(phase::Column::Id)
            .all(txn)
            .await?;

        try_collect(results)
    }

    async fn select_phase_with_project(
        &self,
        txn: &DatabaseTransaction,
        id: i64,
    ) -> Result<Option<Phase>, DbErr> {
        let Some((row, project)) = phase::Entity::find_by_id(id)
            .find_also_related(project::Entity)
            .one(txn)
            .await?
        else {
            return Ok(None);
        };

        let mut phase = Phase::try_from(row)?;
        phase.project = project.map(Project::try_from).transpose()?.map(Box::new);
        Ok(Some(phase))
    }

    async fn find_by_project_id(
        &self,
        txn: &DatabaseTransaction,
        project_id: i64,
    ) -> Result<Vec<Phase>, DbErr> {
        let results = phase::Entity::find()
            .filter(phase::Column::ProjectId.eq(project_id))
            .order_by_asc(phase::Column::PlannedStartDate)
            .order_by_asc(phase::Column::Id)
            .all(txn)
            .await?;

        try_collect(results)
    }

    async fn update(&self, txn: &DatabaseTransaction, phase: &Phase) -> Result<(), DbErr> {
        let Some(id) = phase.id else {
            tracing::debug!("Skipping update of phase without id");
            return Ok(());
        };

        let active: phase::ActiveModel = phase.into();
        phase::Entity::update_many()
            .set(active)
            .col_expr(phase::Column::UpdatedAt, touched_now())
            .filter(phase::Column::Id.eq(id))
            .exec(txn)
            .await?;

        Ok(())
    }

    async fn delete_by_id(&self, txn: &DatabaseTransaction, id: i64) -> Result<(), DbErr> {
        phase::Entity::delete_by_id(id).exec(txn).await?;
        Ok(())
    }
}
