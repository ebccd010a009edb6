use uuid::Uuid;

use crate::{
    entities::project::{NewProject, ProjectDetailResponse, ProjectListResponse},
    errors::ApiError,
    repositories::project::ProjectRepository,
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

    pub async fn list_projects(
        &self,
        project_type: Option<String>,
    ) -> Result<Vec<ProjectListResponse>, ApiError> {
        let projects = self.project_repo.list_projects(project_type).await?;

        Ok(projects.into_iter().map(ProjectListResponse::from).collect())
    }

    /// Project ids are externally opaque strings. A string that is not a UUID
    /// cannot match any row, so it is reported as missing rather than
    /// malformed.
    pub async fn get_project(&self, id: &str) -> Result<ProjectDetailResponse, ApiError> {
        let project_id =
            Uuid::parse_str(id).map_err(|_| ApiError::not_found("Project", id))?;

        let project = self.project_repo.get_project_by_id(&project_id).await?;

        Ok(project.into())
    }

    pub async fn create_project(
        &self,
        data: NewProject,
    ) -> Result<ProjectDetailResponse, ApiError> {
        let id = self.project_repo.create_project(&data).await?;
        let project = self.project_repo.get_project_by_id(&id).await?;

        Ok(project.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::project::test_fixtures::sample_project;
    use crate::repositories::project::MockProjectRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn get_project_surfaces_missing_rows_as_not_found() {
        let mut repo = MockProjectRepository::new();
        repo.expect_get_project_by_id()
            .returning(|id| Err(ApiError::not_found("Project", &id.to_string())));

        let handler = ProjectHandler::new(repo);
        let err = handler
            .get_project("7b1a6e64-5b7a-4f9e-9c3d-2f8a1d0c5e42")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_project_treats_a_non_uuid_id_as_missing() {
        // The repository must not even be queried.
        let repo = MockProjectRepository::new();
        let handler = ProjectHandler::new(repo);

        let err = handler.get_project("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_projects_passes_the_type_filter_through() {
        let mut repo = MockProjectRepository::new();
        repo.expect_list_projects()
            .with(eq(Some("web".to_string())))
            .returning(|_| Ok(vec![sample_project()]));

        let handler = ProjectHandler::new(repo);
        let projects = handler.list_projects(Some("web".to_string())).await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_type, "web");
    }

    #[tokio::test]
    async fn create_project_returns_the_stored_detail() {
        let sample = sample_project();
        let id = sample.id;

        let mut repo = MockProjectRepository::new();
        repo.expect_create_project().returning(move |_| Ok(id));
        repo.expect_get_project_by_id()
            .with(eq(id))
            .returning(move |_| Ok(sample_project()));

        let payload = serde_json::json!({
            "title": "Portfolio Website",
            "description": "A portfolio site with project galleries.",
            "project_type": "web",
            "start_date": "2024-03-01"
        });
        let data: NewProject = serde_json::from_value(payload).unwrap();

        let handler = ProjectHandler::new(repo);
        let detail = handler.create_project(data).await.unwrap();

        assert_eq!(detail.id, id.to_string());
    }
}
