use crate::shared::api_utils::{api_url, send, send_json};
use contracts::domain::a001_project::aggregate::{Project, ProjectDto};
use gloo_net::http::Request;

pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    send(Request::get(&api_url("/projects"))).await
}

pub async fn create_project(dto: &ProjectDto) -> Result<Project, String> {
    send_json(Request::post(&api_url("/projects")), dto).await
}
