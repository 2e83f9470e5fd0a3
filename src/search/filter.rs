use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use tracing::warn;

use super::params::QueryParams;
use crate::models::Hotel;

pub const DESTINATION: &str = "destination";
pub const ADULT_COUNT: &str = "adultCount";
pub const CHILD_COUNT: &str = "childCount";
pub const FACILITIES: &str = "facilities";
pub const TYPES: &str = "types";
pub const STARS: &str = "stars";
pub const MAX_PRICE: &str = "maxPrice";

/// Case-insensitive substring match against a hotel's city or country
///
/// The user's text is matched literally, never as a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPattern {
    needle: String,
}

impl DestinationPattern {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        hotel.city.to_lowercase().contains(&self.needle)
            || hotel.country.to_lowercase().contains(&self.needle)
    }
}

/// Constraints over hotel attributes, all ANDed together
///
/// `None` means the field was not supplied and adds no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub destination: Option<DestinationPattern>,
    pub min_adult_count: Option<u32>,
    pub min_child_count: Option<u32>,
    pub required_facilities: Option<BTreeSet<String>>,
    pub allowed_types: Option<BTreeSet<String>>,
    pub allowed_star_ratings: Option<BTreeSet<u8>>,
    pub max_price: Option<i64>,
}

impl SearchFilter {
    /// Build a filter from raw query parameters
    ///
    /// Malformed numbers are dropped rather than rejected. `maxPrice` is
    /// compared numerically against `pricePerNight`.
    pub fn build(params: &QueryParams) -> Self {
        let destination = params
            .get(DESTINATION)
            .first()
            .map(DestinationPattern::new);

        let stars: BTreeSet<u8> = params
            .get(STARS)
            .values()
            .into_iter()
            .filter_map(|raw| parse_number(STARS, raw))
            .collect();

        Self {
            destination,
            min_adult_count: params
                .get(ADULT_COUNT)
                .first()
                .and_then(|raw| parse_number(ADULT_COUNT, raw)),
            min_child_count: params
                .get(CHILD_COUNT)
                .first()
                .and_then(|raw| parse_number(CHILD_COUNT, raw)),
            required_facilities: string_set(params, FACILITIES),
            allowed_types: string_set(params, TYPES),
            allowed_star_ratings: (!stars.is_empty()).then_some(stars),
            max_price: params
                .get(MAX_PRICE)
                .first()
                .and_then(|raw| parse_number(MAX_PRICE, raw)),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        if let Some(destination) = &self.destination {
            if !destination.matches(hotel) {
                return false;
            }
        }

        if let Some(min) = self.min_adult_count {
            if hotel.adult_count < min {
                return false;
            }
        }

        if let Some(min) = self.min_child_count {
            if hotel.child_count < min {
                return false;
            }
        }

        if let Some(required) = &self.required_facilities {
            if !required.iter().all(|facility| hotel.has_facility(facility)) {
                return false;
            }
        }

        if let Some(types) = &self.allowed_types {
            if !types.contains(&hotel.hotel_type) {
                return false;
            }
        }

        if let Some(stars) = &self.allowed_star_ratings {
            if !stars.contains(&hotel.star_rating) {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if hotel.price_per_night > max {
                return false;
            }
        }

        true
    }
}

fn string_set(params: &QueryParams, key: &str) -> Option<BTreeSet<String>> {
    let set: BTreeSet<String> = params
        .get(key)
        .values()
        .into_iter()
        .map(str::to_string)
        .collect();

    (!set.is_empty()).then_some(set)
}

fn parse_number<T: FromStr>(key: &str, raw: &str) -> Option<T>
where
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| warn!("Dropping {key}={raw:?}: {e}"))
        .ok()
}
