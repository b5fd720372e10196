use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_project::aggregate::{Project, ProjectDto, ProjectId};
use contracts::domain::common::AggregateId;

use crate::domain::a001_project;
use crate::shared::api_error::ApiError;

/// GET /projects
pub async fn list_all() -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(a001_project::service::list_all().await?))
}

/// GET /projects/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Project>, ApiError> {
    let project_id = ProjectId::from_string(&id)
        .map_err(|_| ApiError::bad_request(format!("Invalid project id '{}'", id)))?;
    a001_project::service::get_by_id(project_id.value())
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Project {} not found", id)))
}

/// POST /projects
pub async fn create(Json(dto): Json<ProjectDto>) -> Result<(StatusCode, Json<Project>), ApiError> {
    dto.validate().map_err(ApiError::bad_request)?;
    let project = a001_project::service::create(dto).await?;
    Ok((StatusCode::CREATED, Json(project)))
}
