// Repository trait for dataset access
use crate::domain::table::DataTable;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Load the dataset, re-reading the backing source on every call so the
    /// result always reflects current contents.
    async fn load_table(&self) -> anyhow::Result<DataTable>;
}
