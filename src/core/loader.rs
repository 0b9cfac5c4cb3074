//! Parses the line-oriented road description into a [`Road`].
//!
//! ```text
//! <road length>
//! <city count>
//! <position> <name>
//! ...
//! ```

use crate::core::{City, Limits, Road, Storage};
use crate::utils::error::{Result, RoadError};
use regex::Regex;
use std::str::Lines;

const ROAD_LENGTH_FIELD: &str = "road_length";
const CITY_COUNT_FIELD: &str = "city_count";

// Position, at least one whitespace, then the name up to end of line.
const RECORD_PATTERN: &str = r"^\s*([+-]?\d+)\s+(\S.*?)\s*$";

pub struct RoadLoader<'a, S: Storage> {
    storage: &'a S,
    limits: Limits,
}

impl<'a, S: Storage> RoadLoader<'a, S> {
    pub fn new(storage: &'a S, limits: Limits) -> Self {
        Self { storage, limits }
    }

    pub fn load(&self, path: &str) -> Result<Road> {
        tracing::debug!("Reading road description from: {}", path);
        let content = self.storage.read_to_string(path)?;
        let road = parse_road(&content, &self.limits)?;
        tracing::debug!(
            "Loaded road of length {} with {} cities",
            road.length,
            road.city_count()
        );
        Ok(road)
    }
}

pub fn parse_road(content: &str, limits: &Limits) -> Result<Road> {
    let mut lines = content.lines();

    let length = read_header(&mut lines, ROAD_LENGTH_FIELD)?;
    let count = read_header(&mut lines, CITY_COUNT_FIELD)?;

    if length < i64::from(limits.min_road_length) || length > i64::from(limits.max_road_length) {
        return Err(RoadError::MalformedHeader {
            field: ROAD_LENGTH_FIELD,
            reason: format!(
                "{} is outside {}..={}",
                length, limits.min_road_length, limits.max_road_length
            ),
        });
    }
    let length = u32::try_from(length).map_err(|_| RoadError::MalformedHeader {
        field: ROAD_LENGTH_FIELD,
        reason: format!("{} does not fit a road length", length),
    })?;

    let count = usize::try_from(count)
        .ok()
        .filter(|n| (limits.min_cities..=limits.max_cities).contains(n))
        .ok_or_else(|| RoadError::MalformedHeader {
            field: CITY_COUNT_FIELD,
            reason: format!(
                "{} is outside {}..={}",
                count, limits.min_cities, limits.max_cities
            ),
        })?;

    let record_pattern = Regex::new(RECORD_PATTERN).map_err(|e| RoadError::ConfigError {
        message: format!("Invalid record pattern: {}", e),
    })?;

    let mut cities = Vec::new();
    cities
        .try_reserve_exact(count)
        .map_err(|_| RoadError::AllocationFailure { requested: count })?;

    for index in 0..count {
        let line_number = index + 1;
        let line = lines.next().ok_or_else(|| RoadError::MalformedRecord {
            line: line_number,
            reason: "line is missing".to_string(),
        })?;
        cities.push(parse_city(&record_pattern, line, line_number, length)?);
    }

    Ok(Road::new(length, cities))
}

fn read_header(lines: &mut Lines<'_>, field: &'static str) -> Result<i64> {
    let raw = lines
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RoadError::MalformedHeader {
            field,
            reason: "value is missing".to_string(),
        })?;

    raw.parse::<i64>().map_err(|e| RoadError::MalformedHeader {
        field,
        reason: format!("'{}' is not an integer ({})", raw, e),
    })
}

fn parse_city(pattern: &Regex, line: &str, line_number: usize, road_length: u32) -> Result<City> {
    let caps = pattern
        .captures(line)
        .ok_or_else(|| RoadError::MalformedRecord {
            line: line_number,
            reason: format!("'{}' does not match '<position> <name>'", line),
        })?;

    let raw_position = &caps[1];
    let position = raw_position
        .parse::<i64>()
        .ok()
        .and_then(|p| u32::try_from(p).ok())
        .filter(|p| *p <= road_length)
        .ok_or_else(|| RoadError::MalformedRecord {
            line: line_number,
            reason: format!("position {} is outside 0..={}", raw_position, road_length),
        })?;

    Ok(City::new(position, &caps[2]))
}
