use chrono::Utc;
use contracts::domain::a001_project::aggregate::{
    Project, ProjectId, ProjectStatus, ProjectTimeline,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub project_type: String,
    pub size: String,
    pub state: String,
    pub city: String,
    pub volume: i64,
    pub status: String,
    pub timeline_json: String,
    pub origin: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Project {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> anyhow::Result<Self> {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id)
            .map_err(|e| anyhow::anyhow!("Bad project id '{}': {}", m.id, e))?;
        let timeline: ProjectTimeline = serde_json::from_str(&m.timeline_json)
            .map_err(|e| anyhow::anyhow!("Bad timeline for project {}: {}", m.id, e))?;

        Ok(Project {
            base: BaseAggregate::with_metadata(ProjectId(uuid), m.code, m.description, metadata),
            project_type: m.project_type,
            size: m.size,
            state: m.state,
            city: m.city,
            volume: m.volume,
            status: ProjectStatus::parse(&m.status).unwrap_or_default(),
            timeline,
        })
    }
}

fn to_active(aggregate: &Project, origin: Origin) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        project_type: Set(aggregate.project_type.clone()),
        size: Set(aggregate.size.clone()),
        state: Set(aggregate.state.clone()),
        city: Set(aggregate.city.clone()),
        volume: Set(aggregate.volume),
        status: Set(aggregate.status.as_str().to_string()),
        timeline_json: Set(serde_json::to_string(&aggregate.timeline)?),
        origin: Set(origin.as_str().to_string()),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

/// Sort order of the project list: entered projects newest first, then
/// seeded projects in seed order
fn list_order(a: &Model, b: &Model) -> std::cmp::Ordering {
    let fixture = |m: &Model| Origin::parse(&m.origin) == Origin::Fixture;
    fixture(a)
        .cmp(&fixture(b))
        .then_with(|| {
            if fixture(a) {
                a.code.cmp(&b.code)
            } else {
                b.created_at.cmp(&a.created_at)
            }
        })
}

pub async fn list_all() -> anyhow::Result<Vec<Project>> {
    let mut rows = Entity::find().all(get_connection()?).await?;
    rows.sort_by(list_order);
    rows.into_iter().map(Project::try_from).collect()
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Project>> {
    let result = Entity::find_by_id(id.to_string())
        .one(get_connection()?)
        .await?;
    result.map(Project::try_from).transpose()
}

pub async fn insert(aggregate: &Project, origin: Origin) -> anyhow::Result<Uuid> {
    to_active(aggregate, origin)?
        .insert(get_connection()?)
        .await?;
    Ok(aggregate.base.id.value())
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(get_connection()?).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::fixtures;

    fn row(code: &str, origin: Origin, created: &str) -> Model {
        let project = &fixtures::projects()[0];
        let mut m = Model {
            id: project.base.id.value().to_string(),
            code: code.into(),
            description: project.base.description.clone(),
            project_type: project.project_type.clone(),
            size: project.size.clone(),
            state: project.state.clone(),
            city: project.city.clone(),
            volume: project.volume,
            status: "active".into(),
            timeline_json: serde_json::to_string(&project.timeline).unwrap(),
            origin: origin.as_str().into(),
            created_at: None,
            updated_at: None,
            version: 0,
        };
        m.created_at = Some(
            chrono::DateTime::parse_from_rfc3339(created)
                .unwrap()
                .with_timezone(&Utc),
        );
        m
    }

    #[test]
    fn row_converts_back_to_the_project() {
        let project = fixtures::projects().remove(1);
        let model = to_active(&project, Origin::Fixture).unwrap();
        let m = Model {
            id: model.id.unwrap(),
            code: model.code.unwrap(),
            description: model.description.unwrap(),
            project_type: model.project_type.unwrap(),
            size: model.size.unwrap(),
            state: model.state.unwrap(),
            city: model.city.unwrap(),
            volume: model.volume.unwrap(),
            status: model.status.unwrap(),
            timeline_json: model.timeline_json.unwrap(),
            origin: model.origin.unwrap(),
            created_at: model.created_at.unwrap(),
            updated_at: model.updated_at.unwrap(),
            version: model.version.unwrap(),
        };
        assert_eq!(Project::try_from(m).unwrap(), project);
    }

    #[test]
    fn broken_timeline_is_an_error() {
        let mut m = row("PRJ-001", Origin::Fixture, "2025-08-05T00:00:00Z");
        m.timeline_json = "{}".into();
        assert!(Project::try_from(m).is_err());
    }

    #[test]
    fn new_projects_come_first_then_fixtures_in_seed_order() {
        let mut rows = vec![
            row("PRJ-002", Origin::Fixture, "2025-08-20T00:00:00Z"),
            row("PRJ-004", Origin::Self_, "2025-09-01T00:00:00Z"),
            row("PRJ-001", Origin::Fixture, "2025-08-05T00:00:00Z"),
            row("PRJ-005", Origin::Self_, "2025-09-02T00:00:00Z"),
        ];
        rows.sort_by(list_order);
        let codes: Vec<_> = rows.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, vec!["PRJ-005", "PRJ-004", "PRJ-001", "PRJ-002"]);
    }
}
