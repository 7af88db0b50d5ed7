//! SVG chart views. The geometry comes from the `chart` crate; these
//! components only translate computed scenes into SVG nodes.

mod bar_chart;
mod line_chart;

pub use bar_chart::BarChartView;
pub use line_chart::LineChartView;

pub(crate) const PRIMARY_COLOR: &str = "#4F46E5";
pub(crate) const SECONDARY_COLOR: &str = "#F59E0B";
pub(crate) const BAR_COLOR: &str = "#10B981";
pub(crate) const GRID_COLOR: &str = "#9CA3AF";

/// Plot area in pixels, excluding the axis margins.
pub(crate) const PLOT_WIDTH: u32 = 600;
pub(crate) const PLOT_HEIGHT: u32 = 250;

pub(crate) const MARGIN_TOP: f64 = 20.0;
pub(crate) const MARGIN_RIGHT: f64 = 30.0;
pub(crate) const MARGIN_BOTTOM: f64 = 30.0;
pub(crate) const MARGIN_LEFT: f64 = 40.0;

pub(crate) fn view_box() -> String {
    format!(
        "0 0 {} {}",
        f64::from(PLOT_WIDTH) + MARGIN_LEFT + MARGIN_RIGHT,
        f64::from(PLOT_HEIGHT) + MARGIN_TOP + MARGIN_BOTTOM,
    )
}

pub(crate) fn plot_transform() -> String {
    format!("translate({MARGIN_LEFT}, {MARGIN_TOP})")
}
