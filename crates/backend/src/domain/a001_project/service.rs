use super::repository;
use chrono::Utc;
use contracts::domain::a001_project::aggregate::{Project, ProjectDto};
use contracts::domain::common::Origin;
use contracts::shared::fixtures;
use uuid::Uuid;

/// Creates a project with the default roadmap starting today
pub async fn create(dto: ProjectDto) -> anyhow::Result<Project> {
    dto.validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    let code = format!("PRJ-{:03}", repository::count().await? + 1);
    let mut aggregate = Project::new_for_insert(code, &dto, Utc::now().date_naive());

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate, Origin::Self_).await?;
    tracing::info!("Created project {} '{}'", aggregate.base.code, aggregate.name());
    Ok(aggregate)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Project>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Project>> {
    repository::list_all().await
}

/// Seeds fixture projects into an empty table
pub async fn seed_fixtures() -> anyhow::Result<()> {
    if repository::count().await? > 0 {
        return Ok(());
    }
    let projects = fixtures::projects();
    for project in &projects {
        repository::insert(project, Origin::Fixture).await?;
    }
    tracing::info!("Seeded {} projects", projects.len());
    Ok(())
}
