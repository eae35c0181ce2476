use chrono::Utc;
use mockall::mock;
use mockall::predicate::*;
use uuid::Uuid;

use resume_api::entities::project::{NewProjectRequest, Project, UpdateProjectRequest};
use resume_api::errors::AppError;
use resume_api::use_cases::projects::ProjectHandler;

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl resume_api::repositories::project::ProjectRepository for ProjectRepo {
        async fn create_project(&self, project: &NewProjectRequest) -> Result<Project, AppError>;
        async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
        async fn update_project(&self, id: &Uuid, update: &UpdateProjectRequest) -> Result<Project, AppError>;
        async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
        async fn count_projects(&self) -> Result<i64, AppError>;
    }
}

fn stored_project(request: &NewProjectRequest) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: request.title.clone(),
        description: request.description.clone(),
        tech: request.tech.clone(),
        image: request.image.clone(),
        video_url: request.video_url.clone(),
        github_url: request.github_url.clone(),
        live_url: request.live_url.clone(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn valid_request() -> NewProjectRequest {
    NewProjectRequest {
        title: "Portfolio Site".to_string(),
        description: "A personal portfolio".to_string(),
        tech: vec!["Rust".to_string(), "Postgres".to_string()],
        image: None,
        video_url: None,
        github_url: Some("https://github.com/example/portfolio".to_string()),
        live_url: None,
    }
}

#[tokio::test]
async fn create_returns_stored_project() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .returning(|request| Ok(stored_project(request)));

    let handler = ProjectHandler::new(repo);
    let project = handler.create_project(valid_request()).await.unwrap();

    assert_eq!(project.title, "Portfolio Site");
    assert_eq!(project.tech, vec!["Rust".to_string(), "Postgres".to_string()]);
}

#[tokio::test]
async fn create_rejects_empty_title() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().never();

    let handler = ProjectHandler::new(repo);
    let request = NewProjectRequest { title: "".into(), ..valid_request() };

    let result = handler.create_project(request).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn create_rejects_malformed_urls() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project().never();

    let handler = ProjectHandler::new(repo);
    let request = NewProjectRequest {
        github_url: Some("not a url".into()),
        ..valid_request()
    };

    let result = handler.create_project(request).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn update_missing_project_is_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project()
        .returning(|_, _| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectHandler::new(repo);
    let result = handler
        .update_project(&Uuid::new_v4().to_string(), UpdateProjectRequest::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn update_rejects_malformed_id_before_touching_repository() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project().never();

    let handler = ProjectHandler::new(repo);
    let result = handler
        .update_project("42", UpdateProjectRequest::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn delete_missing_project_is_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project()
        .returning(|_| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectHandler::new(repo);
    let result = handler.delete_project(&Uuid::new_v4().to_string()).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn delete_passes_parsed_id_to_repository() {
    let id = Uuid::new_v4();
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project()
        .with(eq(id))
        .returning(|_| Ok(()));

    let handler = ProjectHandler::new(repo);
    assert!(handler.delete_project(&id.to_string()).await.is_ok());
}
