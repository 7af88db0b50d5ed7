//! The data provider: hand-entered tables behind simple lookup functions.
//!
//! All figures here are simulated for demonstration purposes. Lookups
//! return `None` for unknown keys; callers treat that as "nothing to
//! render" rather than an error. Series are rebuilt on each call; there
//! is no caching layer because the tables are small constants.
//!
//! The provider is keyed by two id spaces: region ids for the inequality
//! metric tables (`metrics`), and neighborhood names for the Seattle
//! demographic tables (`neighborhoods`).

pub mod analysis;
pub mod metrics;
pub mod neighborhoods;

mod format;

pub use format::format_count;
