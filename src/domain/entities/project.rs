use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub description: String,
    pub details: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub title: String,
    pub description: String,
    pub language: String,
    pub file_path: String,
    pub code: String,
}

/// A portfolio project row. `priority` doubles as display order and as the
/// correlation key to the storage folder `project{priority}` that holds the
/// project's screenshots.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub project_type: String,
    pub app_icon: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub technologies: Json<Vec<Technology>>,
    pub features: Json<Vec<Feature>>,
    pub code_snippets: Option<Json<Vec<CodeSnippet>>>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub documentation_url: Option<String>,
    pub screenshots: Option<Json<Vec<String>>>,
    pub detailed_description: Option<String>,
    pub challenges: Option<String>,
    pub achievements: Option<String>,
    pub lines_of_code: Option<i32>,
    pub commit_count: Option<i32>,
    pub contributor_count: i32,
    pub tags: Option<Json<Vec<String>>>,
    pub status: String,
    pub priority: i32,
    pub client: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub project_type: String,
    pub app_icon: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_ongoing: bool,
    #[serde(default)]
    pub technologies: Vec<Technology>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub code_snippets: Vec<CodeSnippet>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub screenshots: Vec<String>,
    pub detailed_description: Option<String>,
    pub challenges: Option<String>,
    pub achievements: Option<String>,
    pub lines_of_code: Option<i32>,
    pub commit_count: Option<i32>,
    #[serde(default = "default_contributor_count")]
    pub contributor_count: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub priority: i32,
    pub client: Option<String>,
}

fn default_contributor_count() -> i32 {
    1
}

fn default_status() -> String {
    "completed".to_string()
}

/// Compact listing shape. Collections that are NULL in the row come back as
/// empty lists, never null.
#[derive(Debug, PartialEq, Serialize)]
pub struct ProjectListResponse {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub project_type: String,
    pub app_icon: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub technologies: Vec<Technology>,
    pub tags: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub status: String,
    pub priority: i32,
}

impl From<Project> for ProjectListResponse {
    fn from(project: Project) -> Self {
        ProjectListResponse {
            id: project.id.to_string(),
            title: project.title,
            subtitle: project.subtitle,
            description: project.description,
            project_type: project.project_type,
            app_icon: project.app_icon,
            start_date: project.start_date,
            end_date: project.end_date,
            is_ongoing: project.is_ongoing,
            technologies: project.technologies.0,
            tags: project.tags.map(|Json(tags)| tags).unwrap_or_default(),
            github_url: project.github_url,
            demo_url: project.demo_url,
            status: project.status,
            priority: project.priority,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ProjectDetailResponse {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub project_type: String,
    pub app_icon: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_ongoing: bool,
    pub technologies: Vec<Technology>,
    pub features: Vec<Feature>,
    pub code_snippets: Vec<CodeSnippet>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub documentation_url: Option<String>,
    pub screenshots: Vec<String>,
    pub detailed_description: Option<String>,
    pub challenges: Option<String>,
    pub achievements: Option<String>,
    pub lines_of_code: Option<i32>,
    pub commit_count: Option<i32>,
    pub contributor_count: i32,
    pub tags: Vec<String>,
    pub status: String,
    pub priority: i32,
    pub client: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Project> for ProjectDetailResponse {
    fn from(project: Project) -> Self {
        ProjectDetailResponse {
            id: project.id.to_string(),
            title: project.title,
            subtitle: project.subtitle,
            description: project.description,
            project_type: project.project_type,
            app_icon: project.app_icon,
            start_date: project.start_date,
            end_date: project.end_date,
            is_ongoing: project.is_ongoing,
            technologies: project.technologies.0,
            features: project.features.0,
            code_snippets: project
                .code_snippets
                .map(|Json(snippets)| snippets)
                .unwrap_or_default(),
            github_url: project.github_url,
            demo_url: project.demo_url,
            documentation_url: project.documentation_url,
            screenshots: project
                .screenshots
                .map(|Json(screenshots)| screenshots)
                .unwrap_or_default(),
            detailed_description: project.detailed_description,
            challenges: project.challenges,
            achievements: project.achievements,
            lines_of_code: project.lines_of_code,
            commit_count: project.commit_count,
            contributor_count: project.contributor_count,
            tags: project.tags.map(|Json(tags)| tags).unwrap_or_default(),
            status: project.status,
            priority: project.priority,
            client: project.client,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}
