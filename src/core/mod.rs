pub mod analyzer;
pub mod loader;
pub mod query;
pub mod sorter;

pub use crate::domain::model::{City, Limits, Neighborhood, QueryMode, QueryOutcome, Road};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
