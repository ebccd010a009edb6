use crate::{
    entities::course::{CourseDetailResponse, CourseListResponse, NewCourse},
    errors::ApiError,
    repositories::course::CourseRepository,
};

pub struct CourseHandler<R>
where
    R: CourseRepository,
{
    pub course_repo: R,
}

impl<R> CourseHandler<R>
where
    R: CourseRepository,
{
    pub fn new(course_repo: R) -> Self {
        CourseHandler { course_repo }
    }

    pub async fn list_courses(&self) -> Result<Vec<CourseListResponse>, ApiError> {
        let courses = self.course_repo.list_courses().await?;

        Ok(courses.into_iter().map(CourseListResponse::from).collect())
    }

    pub async fn get_course(&self, id: i32) -> Result<CourseDetailResponse, ApiError> {
        let course = self.course_repo.get_course_by_id(id).await?;

        Ok(course.into())
    }

    pub async fn create_course(&self, data: NewCourse) -> Result<CourseDetailResponse, ApiError> {
        let id = self.course_repo.create_course(&data).await?;
        let course = self.course_repo.get_course_by_id(id).await?;

        Ok(course.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::course::test_fixtures::sample_course;
    use crate::repositories::course::MockCourseRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn get_course_surfaces_missing_rows_as_not_found() {
        let mut repo = MockCourseRepository::new();
        repo.expect_get_course_by_id()
            .with(eq(99))
            .returning(|id| Err(ApiError::not_found("Course", &id.to_string())));

        let handler = CourseHandler::new(repo);
        let err = handler.get_course(99).await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
        assert_eq!(err.to_string(), "Course with id 99 not found");
    }

    #[tokio::test]
    async fn listed_courses_are_shaped_for_the_client() {
        let mut repo = MockCourseRepository::new();
        repo.expect_list_courses()
            .returning(|| Ok(vec![sample_course()]));

        let handler = CourseHandler::new(repo);
        let courses = handler.list_courses().await.unwrap();

        assert_eq!(courses.len(), 1);
        assert!(!courses[0].is_purchased);
        assert_eq!(courses[0].level, "intermediate");
    }
}
