//! Programmer entry endpoints

use validator::Validate;

use shared::{
    CreateProgramRequest, NextProgramNumberResponse, PaginatedResponse, Pagination, ProgramRecord,
};

use super::ApiClient;
use crate::error::AppResult;

impl ApiClient {
    /// Ask the backend to allocate the next program number
    ///
    /// Sequence generation lives server-side so that concurrent sessions
    /// cannot mint the same number; see `session::next_program_number` for
    /// the offline fallback.
    pub async fn next_program_number(&self) -> AppResult<String> {
        let response: NextProgramNumberResponse = self.get_json("/programs/next-number").await?;
        Ok(response.program_number)
    }

    /// Create a programmer entry
    pub async fn create_program(&self, request: &CreateProgramRequest) -> AppResult<ProgramRecord> {
        request.validate()?;
        self.post_json("/programs", request).await
    }

    /// List programmer entries, newest first
    pub async fn list_programs(
        &self,
        pagination: &Pagination,
    ) -> AppResult<PaginatedResponse<ProgramRecord>> {
        self.get_json(&format!(
            "/programs?page={}&per_page={}",
            pagination.page, pagination.per_page
        ))
        .await
    }
}
