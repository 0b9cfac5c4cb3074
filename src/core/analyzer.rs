//! Neighborhood geometry over a sorted [`Road`].
//!
//! City `i` owns the stretch from the midpoint with its left neighbor (or 0)
//! to the midpoint with its right neighbor (or the road length).

use crate::core::{City, Neighborhood, Road};

pub fn neighborhood(road: &Road, index: usize) -> Option<Neighborhood> {
    let cities = &road.cities;
    let here = f64::from(cities.get(index)?.position);

    let start = match index.checked_sub(1).and_then(|i| cities.get(i)) {
        Some(left) => (here + f64::from(left.position)) / 2.0,
        None => 0.0,
    };
    let end = match cities.get(index + 1) {
        Some(right) => (here + f64::from(right.position)) / 2.0,
        None => f64::from(road.length),
    };

    Some(Neighborhood { start, end })
}

pub fn neighborhoods(road: &Road) -> impl Iterator<Item = (&City, Neighborhood)> + '_ {
    road.cities
        .iter()
        .enumerate()
        .filter_map(move |(i, city)| neighborhood(road, i).map(|n| (city, n)))
}

/// Width of the smallest neighborhood. Never larger than the road length.
pub fn smallest_neighborhood(road: &Road) -> f64 {
    neighborhoods(road)
        .map(|(_, n)| n.width())
        .fold(f64::from(road.length), f64::min)
}

/// The city owning the smallest neighborhood width; the first one on ties.
pub fn narrowest_city(road: &Road) -> Option<(&City, Neighborhood)> {
    neighborhoods(road).fold(None, |best, (city, n)| match best {
        Some((_, b)) if b.width() <= n.width() => best,
        _ => Some((city, n)),
    })
}

/// City selected by the legacy pairwise rule.
///
/// Interior candidates are ranked by half the gap to the next city, while
/// the first and last city are compared using their raw distance to the
/// road's ends. This does not always agree with [`smallest_neighborhood`].
pub fn smallest_neighborhood_city(road: &Road) -> Option<&City> {
    let cities = &road.cities;
    let mut smallest = f64::from(road.length);
    let mut holder = None;

    for (i, pair) in cities.windows(2).enumerate() {
        let gap = (f64::from(pair[1].position) - f64::from(pair[0].position)) / 2.0;
        if gap < smallest {
            smallest = gap;
            holder = Some(i);
        }
    }

    if let Some(first) = cities.first() {
        let from_start = f64::from(first.position);
        if from_start < smallest {
            smallest = from_start;
            holder = Some(0);
        }
    }

    if let Some(last) = cities.last() {
        let to_end = f64::from(road.length) - f64::from(last.position);
        if to_end < smallest {
            holder = Some(cities.len() - 1);
        }
    }

    holder.and_then(|i| cities.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn road(length: u32, cities: &[(u32, &str)]) -> Road {
        Road::new(
            length,
            cities.iter().map(|(p, n)| City::new(*p, *n)).collect(),
        )
        .sorted()
    }

    #[test]
    fn test_two_cities_split_at_midpoint() {
        let r = road(10, &[(2, "A"), (8, "B")]);
        assert_eq!(neighborhood(&r, 0), Some(Neighborhood { start: 0.0, end: 5.0 }));
        assert_eq!(neighborhood(&r, 1), Some(Neighborhood { start: 5.0, end: 10.0 }));
        assert_eq!(neighborhood(&r, 2), None);
        assert_eq!(smallest_neighborhood(&r), 5.0);
    }

    #[test]
    fn test_three_city_widths() {
        let r = road(100, &[(90, "C"), (10, "A"), (20, "B")]);
        let widths: Vec<(&str, f64)> = neighborhoods(&r)
            .map(|(c, n)| (c.name.as_str(), n.width()))
            .collect();
        assert_eq!(widths, vec![("A", 15.0), ("B", 40.0), ("C", 45.0)]);
        assert_eq!(smallest_neighborhood(&r), 15.0);

        let (city, n) = narrowest_city(&r).unwrap();
        assert_eq!(city.name, "A");
        assert_eq!(n.width(), 15.0);
    }

    #[test]
    fn test_cities_at_both_ends() {
        let r = road(7, &[(0, "A"), (7, "B")]);
        assert_eq!(smallest_neighborhood(&r), 3.5);
    }

    #[test]
    fn test_half_units_are_kept() {
        let r = road(10, &[(1, "A"), (2, "B"), (10, "C")]);
        // A: 0..1.5, B: 1.5..6, C: 6..10
        assert_eq!(smallest_neighborhood(&r), 1.5);
    }

    #[test]
    fn test_shared_position_gives_zero_width() {
        let r = road(10, &[(5, "A"), (5, "B"), (5, "C")]);
        assert_eq!(smallest_neighborhood(&r), 0.0);
    }

    #[test]
    fn test_legacy_rule_three_cities() {
        let r = road(100, &[(10, "A"), (20, "B"), (90, "C")]);
        assert_eq!(smallest_neighborhood_city(&r).unwrap().name, "A");
    }

    // The legacy rule ranks by half-gaps, not by neighborhood width, so the
    // two queries can name different cities.
    #[test]
    fn test_legacy_rule_diverges_from_smallest_width() {
        let r = road(100, &[(30, "A"), (40, "B"), (95, "C")]);
        assert_eq!(smallest_neighborhood(&r), 32.5);
        let (narrowest, _) = narrowest_city(&r).unwrap();
        assert_eq!(narrowest.name, "B");

        let legacy = smallest_neighborhood_city(&r).unwrap();
        assert_eq!(legacy.name, "A");
        assert_ne!(legacy.name, narrowest.name);
    }

    #[test]
    fn test_legacy_rule_first_city_raw_position() {
        // Pair gaps are 24.5 and 5, but A sits 1 unit from the start.
        let r = road(100, &[(1, "A"), (50, "B"), (60, "C")]);
        assert_eq!(smallest_neighborhood_city(&r).unwrap().name, "A");
    }

    #[test]
    fn test_legacy_rule_first_city_needs_strictly_smaller_position() {
        // Gaps are 15 and 10; A's raw position 10 only ties the minimum.
        let r = road(100, &[(10, "A"), (40, "B"), (60, "C")]);
        assert_eq!(smallest_neighborhood_city(&r).unwrap().name, "B");
    }

    #[test]
    fn test_legacy_rule_last_city_remaining_distance() {
        let r = road(100, &[(50, "A"), (60, "B"), (98, "C")]);
        assert_eq!(smallest_neighborhood_city(&r).unwrap().name, "C");
    }

    #[test]
    fn test_legacy_rule_ties_keep_first_pair() {
        let r = road(100, &[(20, "A"), (30, "B"), (40, "C"), (50, "D")]);
        assert_eq!(smallest_neighborhood_city(&r).unwrap().name, "A");
    }

    #[test]
    fn test_legacy_rule_end_to_end_pair() {
        let r = road(10, &[(0, "A"), (10, "B")]);
        assert_eq!(smallest_neighborhood_city(&r).unwrap().name, "A");
    }

    #[test]
    fn test_legacy_rule_single_city() {
        let lone = Road::new(10, vec![City::new(10, "Lone")]);
        // No pairs, raw position 10 is not below 10, remaining distance 0 is.
        assert_eq!(smallest_neighborhood_city(&lone).unwrap().name, "Lone");

        let empty = Road::new(10, Vec::new());
        assert!(smallest_neighborhood_city(&empty).is_none());
    }
}
