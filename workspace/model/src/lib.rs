//! Core domain types for the inequality dashboard.
//!
//! Everything here is plain data: time series of yearly observations,
//! the value domains used to scale them, metric and region identifiers,
//! neighborhood demographic records, and the ephemeral filter state held
//! by the view layer. All entities are built once from static tables and
//! never mutated afterwards, except `FilterState`.

pub mod demographics;
pub mod error;
pub mod filters;
pub mod metric;
pub mod series;

pub use demographics::{AgeDistribution, DemographicsSummary, GenderRatio, NeighborhoodRecord};
pub use error::ModelError;
pub use filters::{FilterState, RegionView, Timeframe, MAX_YEAR, MIN_YEAR};
pub use metric::{Metric, MetricId, RegionId};
pub use series::{Series, TimeSeriesPoint, ValueDomain};
