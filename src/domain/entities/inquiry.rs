use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Inquiry {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub message: Option<String>,
    pub service_type: Option<String>,
    pub selected_features: Option<Json<Vec<String>>>,
    pub additional_features: Option<String>,
    pub estimated_price: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Public submission payload. The service-request fields accept both the
/// camelCase spelling the frontend sends and the snake_case one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewInquiry {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 50))]
    pub phone: String,

    pub company: Option<String>,
    pub message: Option<String>,

    #[serde(rename = "serviceType", alias = "service_type")]
    pub service_type: Option<String>,

    #[serde(rename = "selectedFeatures", alias = "selected_features")]
    pub selected_features: Option<Vec<String>>,

    #[serde(rename = "additionalFeatures", alias = "additional_features")]
    pub additional_features: Option<String>,

    #[serde(rename = "estimatedPrice", alias = "estimated_price")]
    pub estimated_price: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "serviceType")]
    pub service_type: Option<String>,
    #[serde(rename = "selectedFeatures")]
    pub selected_features: Vec<String>,
    #[serde(rename = "additionalFeatures")]
    pub additional_features: Option<String>,
    #[serde(rename = "estimatedPrice")]
    pub estimated_price: Option<i32>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        InquiryResponse {
            id: inquiry.id,
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            company: inquiry.company,
            message: inquiry.message,
            service_type: inquiry.service_type,
            selected_features: inquiry
                .selected_features
                .map(|Json(features)| features)
                .unwrap_or_default(),
            additional_features: inquiry.additional_features,
            estimated_price: inquiry.estimated_price,
            status: inquiry.status,
            created_at: inquiry.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InquiryCreateResponse {
    pub id: i32,
    pub message: String,
}
