use async_trait::async_trait;
use sqlx::types::Json;

#[cfg(test)]
use mockall::automock;

use crate::{
    entities::inquiry::{Inquiry, NewInquiry},
    errors::ApiError,
    repositories::sqlx_repo::SqlxInquiryRepo,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, ApiError>;
    async fn get_inquiry_by_id(&self, id: i32) -> Result<Inquiry, ApiError>;
}

impl SqlxInquiryRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxInquiryRepo { pool }
    }
}

#[async_trait]
impl InquiryRepository for SqlxInquiryRepo {
    async fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry, ApiError> {
        let created = sqlx::query_as::<_, Inquiry>(
            r#"
            INSERT INTO inquiries (
                name, email, phone, company, message, service_type,
                selected_features, additional_features, estimated_price, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'pending')
            RETURNING *
            "#,
        )
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(&inquiry.company)
        .bind(&inquiry.message)
        .bind(&inquiry.service_type)
        .bind(inquiry.selected_features.as_ref().map(Json))
        .bind(&inquiry.additional_features)
        .bind(inquiry.estimated_price)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_inquiry_by_id(&self, id: i32) -> Result<Inquiry, ApiError> {
        sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ApiError::not_found("Inquiry", &id.to_string()))
    }
}
