//! Material-type catalog endpoint

use shared::{DensityCatalog, MaterialType};

use super::ApiClient;
use crate::error::AppResult;

impl ApiClient {
    /// Fetch the material-type catalog
    ///
    /// Called once when a form mounts; the catalog backs the type -> density
    /// lookup for every row of that form session.
    pub async fn fetch_material_catalog(&self) -> AppResult<DensityCatalog> {
        let types: Vec<MaterialType> = self.get_json("/materials/types").await?;
        tracing::debug!(count = types.len(), "material catalog loaded");
        Ok(DensityCatalog::new(types))
    }
}
