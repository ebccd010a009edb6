use async_trait::async_trait;
use sqlx::{QueryBuilder, types::Json};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use crate::{
    entities::project::{NewProject, Project},
    errors::ApiError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self, project_type: Option<String>) -> Result<Vec<Project>, ApiError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, ApiError>;
    async fn get_project_by_priority(&self, priority: i32) -> Result<Option<Project>, ApiError>;
    async fn create_project(&self, project: &NewProject) -> Result<Uuid, ApiError>;
    async fn update_project_screenshots(
        &self,
        id: &Uuid,
        screenshots: &[String],
    ) -> Result<Project, ApiError>;
    async fn list_recent_projects(&self, limit: i64) -> Result<Vec<Project>, ApiError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, project_type: Option<String>) -> Result<Vec<Project>, ApiError> {
        let mut builder = QueryBuilder::new("SELECT * FROM projects");

        if let Some(project_type) = project_type {
            builder.push(" WHERE project_type = ").push_bind(project_type);
        }

        builder.push(" ORDER BY priority DESC, created_at DESC");

        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, ApiError> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::not_found("Project", &id.to_string()))
    }

    async fn get_project_by_priority(&self, priority: i32) -> Result<Option<Project>, ApiError> {
        let project =
            sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE priority = $1 LIMIT 1")
                .bind(priority)
                .fetch_optional(&self.pool)
                .await?;

        Ok(project)
    }

    async fn create_project(&self, project: &NewProject) -> Result<Uuid, ApiError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO projects (
                id, title, subtitle, description, project_type, app_icon,
                start_date, end_date, is_ongoing, technologies, features,
                code_snippets, github_url, demo_url, documentation_url,
                screenshots, detailed_description, challenges, achievements,
                lines_of_code, commit_count, contributor_count, tags, status,
                priority, client
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26
            )
            "#,
        )
        .bind(id)
        .bind(&project.title)
        .bind(&project.subtitle)
        .bind(&project.description)
        .bind(&project.project_type)
        .bind(&project.app_icon)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.is_ongoing)
        .bind(Json(&project.technologies))
        .bind(Json(&project.features))
        .bind(Json(&project.code_snippets))
        .bind(&project.github_url)
        .bind(&project.demo_url)
        .bind(&project.documentation_url)
        .bind(Json(&project.screenshots))
        .bind(&project.detailed_description)
        .bind(&project.challenges)
        .bind(&project.achievements)
        .bind(project.lines_of_code)
        .bind(project.commit_count)
        .bind(project.contributor_count)
        .bind(Json(&project.tags))
        .bind(&project.status)
        .bind(project.priority)
        .bind(&project.client)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_project_screenshots(
        &self,
        id: &Uuid,
        screenshots: &[String],
    ) -> Result<Project, ApiError> {
        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET screenshots = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(Json(screenshots))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| ApiError::not_found("Project", &id.to_string()))
    }

    async fn list_recent_projects(&self, limit: i64) -> Result<Vec<Project>, ApiError> {
        let projects =
            sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC LIMIT $1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

        Ok(projects)
    }
}
