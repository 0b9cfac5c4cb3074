use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_MIN_ROAD_LENGTH: u32 = 3;
pub const DEFAULT_MAX_ROAD_LENGTH: u32 = 1_000_000;
pub const DEFAULT_MIN_CITIES: usize = 2;
pub const DEFAULT_MAX_CITIES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub position: u32,
    pub name: String,
}

impl City {
    pub fn new(position: u32, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// A road of `length` units with the cities placed on it.
///
/// The loader guarantees `cities` is non-empty and every position lies in
/// `[0, length]`. Ordering is only meaningful after [`Road::sorted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub length: u32,
    pub cities: Vec<City>,
}

impl Road {
    pub fn new(length: u32, cities: Vec<City>) -> Self {
        Self { length, cities }
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

/// The stretch of road owned by one city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighborhood {
    pub start: f64,
    pub end: f64,
}

impl Neighborhood {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Inclusive bounds accepted for the road header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    pub min_road_length: u32,
    pub max_road_length: u32,
    pub min_cities: usize,
    pub max_cities: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_road_length: DEFAULT_MIN_ROAD_LENGTH,
            max_road_length: DEFAULT_MAX_ROAD_LENGTH,
            min_cities: DEFAULT_MIN_CITIES,
            max_cities: DEFAULT_MAX_CITIES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Menu option `1`.
    SmallestNeighborhood,
    /// Menu option `2`.
    SmallestNeighborhoodCity,
}

impl QueryMode {
    /// Maps a menu selector to a mode. Anything but `1` or `2` is rejected.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim() {
            "1" => Some(QueryMode::SmallestNeighborhood),
            "2" => Some(QueryMode::SmallestNeighborhoodCity),
            _ => None,
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            QueryMode::SmallestNeighborhood => "1",
            QueryMode::SmallestNeighborhoodCity => "2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryOutcome {
    SmallestNeighborhood { width: f64 },
    SmallestNeighborhoodCity { city: Option<String> },
}

impl QueryOutcome {
    pub fn render_text(&self, precision: usize) -> String {
        match self {
            QueryOutcome::SmallestNeighborhood { width } => {
                format!("Smallest neighborhood: {:.*}", precision, width)
            }
            QueryOutcome::SmallestNeighborhoodCity { city: Some(name) } => {
                format!("City with the smallest neighborhood: {}", name)
            }
            QueryOutcome::SmallestNeighborhoodCity { city: None } => "No city selected.".to_string(),
        }
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_mode_selector() {
        assert_eq!(QueryMode::from_selector("1"), Some(QueryMode::SmallestNeighborhood));
        assert_eq!(QueryMode::from_selector(" 2\n"), Some(QueryMode::SmallestNeighborhoodCity));
        assert_eq!(QueryMode::from_selector("3"), None);
        assert_eq!(QueryMode::from_selector(""), None);
        assert_eq!(QueryMode::SmallestNeighborhoodCity.selector(), "2");
    }

    #[test]
    fn test_render_text_uses_two_decimals_by_default() {
        let outcome = QueryOutcome::SmallestNeighborhood { width: 15.0 };
        assert_eq!(outcome.to_string(), "Smallest neighborhood: 15.00");
        assert_eq!(outcome.render_text(1), "Smallest neighborhood: 15.0");
    }

    #[test]
    fn test_render_city_outcome() {
        let found = QueryOutcome::SmallestNeighborhoodCity {
            city: Some("Porto Alegre".to_string()),
        };
        assert_eq!(found.to_string(), "City with the smallest neighborhood: Porto Alegre");

        let none = QueryOutcome::SmallestNeighborhoodCity { city: None };
        assert_eq!(none.to_string(), "No city selected.");
    }

    #[test]
    fn test_outcome_serializes_with_query_tag() {
        let outcome = QueryOutcome::SmallestNeighborhood { width: 5.0 };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["query"], "smallest_neighborhood");
        assert_eq!(json["width"], 5.0);
    }

    #[test]
    fn test_neighborhood_width() {
        let n = Neighborhood { start: 15.0, end: 55.0 };
        assert_eq!(n.width(), 40.0);
    }
}
