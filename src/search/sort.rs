use std::cmp::Ordering;

use crate::models::Hotel;

pub const SORT_OPTION: &str = "sortOption";

/// Ordering applied to search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortPolicy {
    /// Store's natural order
    #[default]
    None,
    StarRatingDescending,
    PriceAscending,
    PriceDescending,
}

impl SortPolicy {
    /// Unknown options degrade to [`SortPolicy::None`]
    pub fn from_option(option: Option<&str>) -> Self {
        match option {
            Some("starRating") => SortPolicy::StarRatingDescending,
            Some("pricePerNightAsc") => SortPolicy::PriceAscending,
            Some("pricePerNightDesc") => SortPolicy::PriceDescending,
            _ => SortPolicy::None,
        }
    }

    /// Compare two hotels, `None` when this policy keeps store order
    pub fn compare(&self, a: &Hotel, b: &Hotel) -> Option<Ordering> {
        match self {
            SortPolicy::None => None,
            SortPolicy::StarRatingDescending => Some(b.star_rating.cmp(&a.star_rating)),
            SortPolicy::PriceAscending => Some(a.price_per_night.cmp(&b.price_per_night)),
            SortPolicy::PriceDescending => Some(b.price_per_night.cmp(&a.price_per_night)),
        }
    }
}
