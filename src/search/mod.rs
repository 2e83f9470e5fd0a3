pub mod filter;
pub mod pagination;
pub mod params;
pub mod service;
pub mod sort;

pub use filter::{DestinationPattern, SearchFilter};
pub use pagination::{Page, Pagination, SearchResult, PAGE_SIZE};
pub use params::{ParamValue, QueryParams};
pub use service::search;
pub use sort::SortPolicy;
