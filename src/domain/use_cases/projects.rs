use validator::Validate;

use crate::{
    entities::project::{NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Creates a new project from a validated request.
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        request.validate()?;

        self.project_repo.create_project(&request).await
    }

    /// Lists all projects, newest first.
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// Applies a partial update; fields absent from the request keep
    /// their stored values.
    pub async fn update_project(
        &self,
        id: &str,
        request: UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        self.project_repo.update_project(&valid_id, &request).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        self.project_repo.delete_project(&valid_id).await
    }

    pub async fn count_projects(&self) -> Result<i64, AppError> {
        self.project_repo.count_projects().await
    }
}
