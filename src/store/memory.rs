use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use super::traits::HotelStore;
use crate::error::StoreError;
use crate::models::Hotel;
use crate::search::{SearchFilter, SortPolicy};

/// In-process hotel collection, kept in insertion order
#[derive(Debug, Default)]
pub struct MemoryStore {
    hotels: RwLock<Vec<Hotel>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_hotels(hotels: Vec<Hotel>) -> Self {
        Self {
            hotels: RwLock::new(hotels),
        }
    }

    /// Load hotels from a JSON array on disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let hotels: Vec<Hotel> = serde_json::from_str(&json)?;

        info!("Loaded {} hotels from {}", hotels.len(), path.display());

        Ok(Self::from_hotels(hotels))
    }

    pub async fn len(&self) -> usize {
        self.hotels.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.hotels.read().await.is_empty()
    }
}

#[async_trait]
impl HotelStore for MemoryStore {
    async fn find(
        &self,
        filter: &SearchFilter,
        sort: SortPolicy,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Hotel>, StoreError> {
        let hotels = self.hotels.read().await;

        let mut matched: Vec<&Hotel> = hotels.iter().filter(|h| filter.matches(h)).collect();
        if sort != SortPolicy::None {
            // Stable, so ties keep store order
            matched.sort_by(|a, b| sort.compare(a, b).unwrap_or(std::cmp::Ordering::Equal));
        }

        Ok(matched
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &SearchFilter) -> Result<u64, StoreError> {
        let hotels = self.hotels.read().await;
        Ok(hotels.iter().filter(|h| filter.matches(h)).count() as u64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, StoreError> {
        let hotels = self.hotels.read().await;
        Ok(hotels.iter().find(|h| h.id == id).cloned())
    }

    async fn list_recent(&self) -> Result<Vec<Hotel>, StoreError> {
        let mut hotels = self.hotels.read().await.clone();
        hotels.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
        Ok(hotels)
    }

    fn store_name(&self) -> &'static str {
        "memory"
    }
}
