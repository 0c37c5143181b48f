//! QA and accounts endpoints

use uuid::Uuid;
use validator::Validate;

use shared::{AccountsSummary, CreateQaRequest, PaginatedResponse, Pagination, QaRecord};

use super::ApiClient;
use crate::error::AppResult;

impl ApiClient {
    /// Create a QA entry
    pub async fn create_qa(&self, request: &CreateQaRequest) -> AppResult<QaRecord> {
        request.validate()?;
        self.post_json("/qa", request).await
    }

    /// List QA entries, newest first
    pub async fn list_qa(
        &self,
        pagination: &Pagination,
    ) -> AppResult<PaginatedResponse<QaRecord>> {
        self.get_json(&format!(
            "/qa?page={}&per_page={}",
            pagination.page, pagination.per_page
        ))
        .await
    }

    /// Fetch the QA record and accounts summary for an intake as a parallel
    /// pair, awaited together before the review view renders
    pub async fn fetch_review(&self, intake_id: Uuid) -> AppResult<(QaRecord, AccountsSummary)> {
        let qa_path = format!("/qa/{intake_id}");
        let accounts_path = format!("/accounts/{intake_id}");
        tokio::try_join!(
            self.get_json(&qa_path),
            self.get_json(&accounts_path),
        )
    }
}
