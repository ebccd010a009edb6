use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub course_type: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub price: i32,
    pub duration: Option<String>,
    pub pages: Option<i32>,
    pub chapters: Option<i32>,
    pub rating: f64,
    pub reviews: i32,
    pub students: i32,
    pub level: Option<String>,
    pub instructor_name: Option<String>,
    pub instructor_bio: Option<String>,
    pub what_you_learn: Option<Json<Vec<String>>>,
    /// Chapter/lesson structure, stored verbatim as submitted.
    pub curriculum: Option<Json<Vec<Value>>>,
    pub requirements: Option<Json<Vec<String>>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCourse {
    #[serde(rename = "type")]
    pub course_type: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub price: i32,
    pub duration: Option<String>,
    pub pages: Option<i32>,
    pub chapters: Option<i32>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: i32,
    #[serde(default)]
    pub students: i32,
    pub level: String,
    pub instructor_name: String,
    pub instructor_bio: String,
    pub what_you_learn: Option<Vec<String>>,
    pub curriculum: Option<Vec<Value>>,
    pub requirements: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instructor {
    pub name: String,
    pub bio: String,
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub course_type: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub price: i32,
    pub duration: Option<String>,
    pub pages: Option<i32>,
    pub chapters: Option<i32>,
    pub rating: f64,
    pub students: i32,
    pub level: String,
    #[serde(rename = "isPurchased")]
    pub is_purchased: bool,
}

impl From<Course> for CourseListResponse {
    fn from(course: Course) -> Self {
        CourseListResponse {
            id: course.id,
            course_type: course.course_type,
            title: course.title,
            description: course.description,
            thumbnail: course.thumbnail,
            price: course.price,
            duration: course.duration,
            pages: course.pages,
            chapters: course.chapters,
            rating: course.rating,
            students: course.students,
            level: course.level.unwrap_or_default(),
            // Purchases are not tracked; the flag exists for the client's
            // course cards.
            is_purchased: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub course_type: String,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub price: i32,
    pub duration: Option<String>,
    pub pages: Option<i32>,
    pub chapters: Option<i32>,
    pub rating: f64,
    pub reviews: i32,
    pub students: i32,
    pub level: String,
    pub instructor: Instructor,
    #[serde(rename = "whatYouLearn")]
    pub what_you_learn: Vec<String>,
    pub curriculum: Vec<Value>,
    pub requirements: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Course> for CourseDetailResponse {
    fn from(course: Course) -> Self {
        CourseDetailResponse {
            id: course.id,
            course_type: course.course_type,
            title: course.title,
            description: course.description,
            thumbnail: course.thumbnail,
            price: course.price,
            duration: course.duration,
            pages: course.pages,
            chapters: course.chapters,
            rating: course.rating,
            reviews: course.reviews,
            students: course.students,
            level: course.level.unwrap_or_default(),
            instructor: Instructor {
                name: course.instructor_name.unwrap_or_default(),
                bio: course.instructor_bio.unwrap_or_default(),
            },
            what_you_learn: course
                .what_you_learn
                .map(|Json(items)| items)
                .unwrap_or_default(),
            curriculum: course.curriculum.map(|Json(items)| items).unwrap_or_default(),
            requirements: course
                .requirements
                .map(|Json(items)| items)
                .unwrap_or_default(),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn sample_course() -> Course {
        Course {
            id: 3,
            course_type: "video".to_string(),
            title: "Backend Development with Rust".to_string(),
            description: Some("From zero to a deployed API.".to_string()),
            thumbnail: None,
            price: 49000,
            duration: Some("12h".to_string()),
            pages: None,
            chapters: Some(9),
            rating: 4.8,
            reviews: 31,
            students: 250,
            level: Some("intermediate".to_string()),
            instructor_name: Some("Kim".to_string()),
            instructor_bio: Some("Full-stack developer".to_string()),
            what_you_learn: None,
            curriculum: None,
            requirements: None,
            created_at: Utc.with_ymd_and_hms(2025, 4, 10, 9, 0, 0).unwrap(),
            updated_at: None,
        }
    }
}
