use crate::core::{City, Road};

/// Orders cities by position. Ties end up in no particular order.
pub fn sort_cities(cities: &mut [City]) {
    cities.sort_unstable_by_key(|city| city.position);
}

impl Road {
    pub fn sorted(mut self) -> Self {
        sort_cities(&mut self.cities);
        self
    }
}
