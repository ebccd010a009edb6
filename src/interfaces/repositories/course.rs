use async_trait::async_trait;
use sqlx::types::Json;

#[cfg(test)]
use mockall::automock;

use crate::{
    entities::course::{Course, NewCourse},
    errors::ApiError,
    repositories::sqlx_repo::SqlxCourseRepo,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;
    async fn get_course_by_id(&self, id: i32) -> Result<Course, ApiError>;
    async fn create_course(&self, course: &NewCourse) -> Result<i32, ApiError>;
}

impl SqlxCourseRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCourseRepo { pool }
    }
}

#[async_trait]
impl CourseRepository for SqlxCourseRepo {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let courses =
            sqlx::query_as::<_, Course>("SELECT * FROM courses ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(courses)
    }

    async fn get_course_by_id(&self, id: i32) -> Result<Course, ApiError> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::not_found("Course", &id.to_string()))
    }

    async fn create_course(&self, course: &NewCourse) -> Result<i32, ApiError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO courses (
                type, title, description, thumbnail, price, duration, pages,
                chapters, rating, reviews, students, level, instructor_name,
                instructor_bio, what_you_learn, curriculum, requirements
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                $15, $16, $17
            )
            RETURNING id
            "#,
        )
        .bind(&course.course_type)
        .bind(&course.title)
        .bind(&course.description)
        .bind(&course.thumbnail)
        .bind(course.price)
        .bind(&course.duration)
        .bind(course.pages)
        .bind(course.chapters)
        .bind(course.rating)
        .bind(course.reviews)
        .bind(course.students)
        .bind(&course.level)
        .bind(&course.instructor_name)
        .bind(&course.instructor_bio)
        .bind(course.what_you_learn.as_ref().map(Json))
        .bind(course.curriculum.as_ref().map(Json))
        .bind(course.requirements.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
