use tracing::{debug, error, info};

use super::{Page, Pagination, SearchFilter, SearchResult, SortPolicy};
use crate::error::StoreError;
use crate::models::Hotel;
use crate::store::HotelStore;

/// Run a paginated search against `store`
///
/// The count and the windowed fetch are issued together. Either failing
/// fails the whole search; nothing is retried and no partial page is
/// returned.
pub async fn search(
    store: &dyn HotelStore,
    filter: &SearchFilter,
    sort: SortPolicy,
    page: Page,
) -> Result<SearchResult<Hotel>, StoreError> {
    debug!(?filter, ?sort, page = page.number(), "Running hotel search");

    let (data, total) = tokio::try_join!(
        store.find(filter, sort, page.skip(), page.size()),
        store.count(filter),
    )
    .map_err(|e| {
        error!("Search against {} failed: {e}", store.store_name());
        e
    })?;

    let pagination = Pagination::new(total, page);
    let data = if total == 0 { Vec::new() } else { data };

    info!(
        "Search matched {} hotels, returning page {}/{} ({} items)",
        total,
        pagination.page,
        pagination.pages,
        data.len()
    );

    Ok(SearchResult { data, pagination })
}
