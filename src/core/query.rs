use crate::core::analyzer;
use crate::core::loader::RoadLoader;
use crate::core::{ConfigProvider, QueryMode, QueryOutcome, Road, Storage};
use crate::utils::error::{Result, RoadError};

/// Runs one query end to end: load, sort, analyze.
///
/// Each call loads the road again; nothing is cached between queries.
pub struct QueryEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> QueryEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn run(&self, mode: QueryMode) -> Result<QueryOutcome> {
        let path = self
            .config
            .input_path()
            .ok_or_else(|| RoadError::MissingConfigError {
                field: "input".to_string(),
            })?;

        tracing::info!("Running query {:?} on {}", mode, path);

        let road = RoadLoader::new(&self.storage, self.config.limits())
            .load(path)?
            .sorted();
        tracing::debug!("Sorted {} cities", road.city_count());

        Ok(analyze(&road, mode))
    }

    /// Same as [`QueryEngine::run`] but collapses every failure into `None`
    /// after logging it.
    pub fn run_or_none(&self, mode: QueryMode) -> Option<QueryOutcome> {
        match self.run(mode) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!(
                    "Query failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("Suggestion: {}", e.recovery_suggestion());
                None
            }
        }
    }
}

/// Applies `mode` to a road that is already sorted.
pub fn analyze(road: &Road, mode: QueryMode) -> QueryOutcome {
    match mode {
        QueryMode::SmallestNeighborhood => {
            let width = analyzer::smallest_neighborhood(road);
            if let Some((city, n)) = analyzer::narrowest_city(road) {
                tracing::debug!(
                    "Smallest neighborhood {:.2} belongs to {} ({:.2}..{:.2})",
                    width,
                    city.name,
                    n.start,
                    n.end
                );
            }
            QueryOutcome::SmallestNeighborhood { width }
        }
        QueryMode::SmallestNeighborhoodCity => {
            let city = analyzer::smallest_neighborhood_city(road).map(|c| c.name.clone());
            if city.is_none() {
                tracing::warn!("No city selected");
            }
            QueryOutcome::SmallestNeighborhoodCity { city }
        }
    }
}
