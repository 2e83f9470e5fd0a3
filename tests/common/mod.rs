#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, TimeZone, Utc};
use hotel_search::{
    error::StoreError,
    models::Hotel,
    routes::{router, AppState},
    search::{SearchFilter, SortPolicy},
    store::{HotelStore, MemoryStore},
};
use serde_json::Value;
use tower::ServiceExt as _;

pub struct HotelBuilder {
    hotel: Hotel,
}

impl HotelBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            hotel: Hotel {
                id: id.to_string(),
                user_id: "owner-1".to_string(),
                name: format!("Hotel {id}"),
                city: "London".to_string(),
                country: "United Kingdom".to_string(),
                description: "A place to stay".to_string(),
                hotel_type: "Budget".to_string(),
                adult_count: 2,
                child_count: 0,
                facilities: vec!["Free WiFi".to_string()],
                price_per_night: 100,
                star_rating: 3,
                image_urls: vec![],
                last_updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                bookings: vec![],
            },
        }
    }

    pub fn place(mut self, city: &str, country: &str) -> Self {
        self.hotel.city = city.to_string();
        self.hotel.country = country.to_string();
        self
    }

    pub fn kind(mut self, hotel_type: &str) -> Self {
        self.hotel.hotel_type = hotel_type.to_string();
        self
    }

    pub fn capacity(mut self, adults: u32, children: u32) -> Self {
        self.hotel.adult_count = adults;
        self.hotel.child_count = children;
        self
    }

    pub fn facilities(mut self, facilities: &[&str]) -> Self {
        self.hotel.facilities = facilities.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.hotel.price_per_night = price;
        self
    }

    pub fn stars(mut self, stars: u8) -> Self {
        self.hotel.star_rating = stars;
        self
    }

    pub fn updated_days_ago(mut self, days: i64) -> Self {
        self.hotel.last_updated =
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() - Duration::days(days);
        self
    }

    pub fn build(self) -> Hotel {
        self.hotel
    }
}

/// Twelve hotels across four cities
pub fn catalogue() -> Vec<Hotel> {
    vec![
        HotelBuilder::new("paris-1")
            .place("Paris", "France")
            .price(220)
            .stars(4)
            .facilities(&["Free WiFi", "Pool"])
            .kind("Luxury")
            .updated_days_ago(5)
            .build(),
        HotelBuilder::new("paris-2")
            .place("Paris", "France")
            .price(90)
            .stars(2)
            .facilities(&["Free WiFi"])
            .updated_days_ago(1)
            .build(),
        HotelBuilder::new("paris-tx")
            .place("Paris", "United States")
            .price(60)
            .stars(3)
            .facilities(&["Parking"])
            .kind("Motel")
            .updated_days_ago(9)
            .build(),
        HotelBuilder::new("london-1")
            .price(180)
            .stars(5)
            .capacity(4, 2)
            .facilities(&["Free WiFi", "Pool", "Spa"])
            .kind("Luxury")
            .updated_days_ago(2)
            .build(),
        HotelBuilder::new("london-2")
            .price(75)
            .stars(1)
            .updated_days_ago(30)
            .build(),
        HotelBuilder::new("london-3")
            .price(130)
            .stars(3)
            .capacity(3, 1)
            .facilities(&["Free WiFi", "Parking"])
            .kind("Family")
            .updated_days_ago(12)
            .build(),
        HotelBuilder::new("rome-1")
            .place("Rome", "Italy")
            .price(150)
            .stars(4)
            .facilities(&["Pool"])
            .kind("Boutique")
            .updated_days_ago(7)
            .build(),
        HotelBuilder::new("rome-2")
            .place("Rome", "Italy")
            .price(1000)
            .stars(5)
            .facilities(&["Free WiFi", "Pool", "Spa"])
            .kind("Luxury")
            .updated_days_ago(0)
            .build(),
        HotelBuilder::new("rome-3")
            .place("Rome", "Italy")
            .price(95)
            .stars(3)
            .kind("Family")
            .capacity(4, 3)
            .updated_days_ago(20)
            .build(),
        HotelBuilder::new("oslo-1")
            .place("Oslo", "Norway")
            .price(200)
            .stars(4)
            .facilities(&["Free WiFi", "Sauna"])
            .updated_days_ago(3)
            .build(),
        HotelBuilder::new("oslo-2")
            .place("Oslo", "Norway")
            .price(110)
            .stars(2)
            .updated_days_ago(15)
            .build(),
        HotelBuilder::new("oslo-3")
            .place("Oslo", "Norway")
            .price(160)
            .stars(3)
            .facilities(&["Free WiFi", "Pool"])
            .kind("Boutique")
            .updated_days_ago(4)
            .build(),
    ]
}

pub fn test_router() -> Router {
    router(AppState::new(Arc::new(MemoryStore::from_hotels(catalogue()))))
}

pub fn router_with(store: impl HotelStore + 'static) -> Router {
    router(AppState::new(Arc::new(store)))
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

pub fn ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hotel| hotel["_id"].as_str().unwrap().to_string())
        .collect()
}

/// Store whose every call fails, as if the database were unreachable
pub struct UnreachableStore;

#[async_trait]
impl HotelStore for UnreachableStore {
    async fn find(
        &self,
        _filter: &SearchFilter,
        _sort: SortPolicy,
        _skip: u64,
        _limit: u64,
    ) -> Result<Vec<Hotel>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn count(&self, _filter: &SearchFilter) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Hotel>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn list_recent(&self) -> Result<Vec<Hotel>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    fn store_name(&self) -> &'static str {
        "unreachable"
    }
}
