//! Chart scene construction: linear scaling, tick placement, and
//! polyline/bar geometry for the dashboard's SVG charts.
//!
//! This crate is renderer-agnostic. It maps series data into pixel
//! coordinates and returns plain scene structs; the frontend turns a
//! scene into SVG elements. Scenes are rebuilt in full from their inputs
//! on every change; there is no incremental diffing of prior output.
//!
//! The renderer trusts its input verbatim: no smoothing, no
//! interpolation of missing years, no outlier handling.

pub mod bar;
pub mod error;
pub mod line;
pub mod scale;
pub mod scene;

pub use bar::{BarChart, BarItem, BarRect, BarScene};
pub use error::ChartError;
pub use line::{LineChart, LineScene, Polyline};
pub use scale::LinearScale;
pub use scene::{ScenePoint, Tick};

/// Number of ticks drawn on each axis.
pub const AXIS_TICKS: usize = 5;
