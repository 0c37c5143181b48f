//! Machine and operator catalog endpoints

use shared::{Machine, Operator};

use super::ApiClient;
use crate::error::AppResult;

impl ApiClient {
    /// Fetch the machine list
    pub async fn fetch_machines(&self) -> AppResult<Vec<Machine>> {
        self.get_json("/machines").await
    }

    /// Fetch the operator list
    pub async fn fetch_operators(&self) -> AppResult<Vec<Operator>> {
        self.get_json("/operators").await
    }

    /// Fetch machines and operators as two independent concurrent requests,
    /// awaiting both before the caller renders
    pub async fn fetch_machines_and_operators(&self) -> AppResult<(Vec<Machine>, Vec<Operator>)> {
        tokio::try_join!(self.fetch_machines(), self.fetch_operators())
    }
}
