use validator::Validate;

use crate::{
    entities::inquiry::{InquiryCreateResponse, InquiryResponse, NewInquiry},
    errors::ApiError,
    repositories::inquiry::InquiryRepository,
};

pub const INQUIRY_SUBMITTED_MESSAGE: &str = "Inquiry submitted successfully";

pub struct InquiryHandler<R>
where
    R: InquiryRepository,
{
    pub inquiry_repo: R,
}

impl<R> InquiryHandler<R>
where
    R: InquiryRepository,
{
    pub fn new(inquiry_repo: R) -> Self {
        InquiryHandler { inquiry_repo }
    }

    pub async fn create_inquiry(
        &self,
        request: NewInquiry,
    ) -> Result<InquiryCreateResponse, ApiError> {
        request.validate()?;

        let inquiry = self.inquiry_repo.create_inquiry(&request).await?;

        tracing::info!("Inquiry created with id: {}", inquiry.id);

        Ok(InquiryCreateResponse {
            id: inquiry.id,
            message: INQUIRY_SUBMITTED_MESSAGE.to_string(),
        })
    }

    pub async fn get_inquiry(&self, id: i32) -> Result<InquiryResponse, ApiError> {
        let inquiry = self.inquiry_repo.get_inquiry_by_id(id).await?;

        Ok(inquiry.into())
    }
}
