//! Inward intake endpoints

use validator::Validate;

use shared::{
    CreateIntakeRequest, IntakeRecord, NextSerialResponse, PaginatedResponse, Pagination,
};

use super::ApiClient;
use crate::error::AppResult;

impl ApiClient {
    /// Fetch the next server-assigned serial number for an intake
    pub async fn next_serial_number(&self) -> AppResult<String> {
        let response: NextSerialResponse = self.get_json("/inward/next-serial").await?;
        Ok(response.serial_number)
    }

    /// Create an inward intake record
    pub async fn create_intake(&self, request: &CreateIntakeRequest) -> AppResult<IntakeRecord> {
        request.validate()?;
        self.post_json("/inward", request).await
    }

    /// List intakes, newest first
    pub async fn list_intakes(
        &self,
        pagination: &Pagination,
    ) -> AppResult<PaginatedResponse<IntakeRecord>> {
        self.get_json(&format!(
            "/inward?page={}&per_page={}",
            pagination.page, pagination.per_page
        ))
        .await
    }
}
