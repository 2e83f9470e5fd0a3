use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Hotel;
use crate::search::{SearchFilter, SortPolicy};

/// Read access to the hotel collection
///
/// Implemented by whatever document store backs the service. Handlers only
/// hold an `Arc<dyn HotelStore>`, so tests can swap in their own.
#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Matching hotels in `sort` order, windowed by `skip`/`limit`
    async fn find(
        &self,
        filter: &SearchFilter,
        sort: SortPolicy,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Hotel>, StoreError>;

    /// Number of hotels matching `filter`, ignoring any window
    async fn count(&self, filter: &SearchFilter) -> Result<u64, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, StoreError>;

    /// Every hotel, most recently updated first
    async fn list_recent(&self) -> Result<Vec<Hotel>, StoreError>;

    /// Get the name of the backing store
    fn store_name(&self) -> &'static str;
}
