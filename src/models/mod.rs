use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A booking stored on its hotel document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub adult_count: u32,
    pub child_count: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_cost: i64,
}

/// Core hotel (lodging) record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    #[serde(rename = "type")]
    pub hotel_type: String,
    pub adult_count: u32,
    pub child_count: u32,
    pub facilities: Vec<String>,
    pub price_per_night: i64,
    pub star_rating: u8,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl Hotel {
    pub fn has_facility(&self, facility: &str) -> bool {
        self.facilities.iter().any(|f| f == facility)
    }
}
