use serde::{Deserialize, Serialize};

use crate::metric::MetricId;

/// Earliest selectable year on the range sliders.
pub const MIN_YEAR: i32 = 2000;
/// Latest selectable year on the range sliders.
pub const MAX_YEAR: i32 = 2035;

/// Which region the visualizations show. `Comparison` is a view mode,
/// not a data key: it renders both regions side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionView {
    UnitedStates,
    Washington,
    Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    Current,
    Historical,
    Forecast,
}

/// The user's current filter selections, held at the top of the view tree
/// and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub region: RegionView,
    pub timeframe: Timeframe,
    pub metrics: Vec<MetricId>,
    pub year_range: (i32, i32),
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            region: RegionView::UnitedStates,
            timeframe: Timeframe::Current,
            metrics: MetricId::ALL.to_vec(),
            year_range: (MIN_YEAR, MAX_YEAR),
        }
    }
}

impl FilterState {
    pub fn is_selected(&self, id: MetricId) -> bool {
        self.metrics.contains(&id)
    }

    /// Adds or removes a metric from the selected set.
    pub fn toggle_metric(&mut self, id: MetricId) {
        if let Some(pos) = self.metrics.iter().position(|m| *m == id) {
            self.metrics.remove(pos);
        } else {
            self.metrics.push(id);
        }
    }

    /// Moves the start of the year range. Dragging the start past the end
    /// drags the end along with it.
    pub fn set_year_start(&mut self, year: i32) {
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        self.year_range.0 = year;
        if self.year_range.1 < year {
            self.year_range.1 = year;
        }
    }

    /// Moves the end of the year range, dragging the start along if needed.
    pub fn set_year_end(&mut self, year: i32) {
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        self.year_range.1 = year;
        if self.year_range.0 > year {
            self.year_range.0 = year;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selects_every_metric() {
        let filters = FilterState::default();
        for id in MetricId::ALL {
            assert!(filters.is_selected(id));
        }
        assert_eq!(filters.year_range, (MIN_YEAR, MAX_YEAR));
    }

    #[test]
    fn toggling_removes_then_restores() {
        let mut filters = FilterState::default();
        filters.toggle_metric(MetricId::Gini);
        assert!(!filters.is_selected(MetricId::Gini));
        filters.toggle_metric(MetricId::Gini);
        assert!(filters.is_selected(MetricId::Gini));
    }

    #[test]
    fn start_slider_drags_end_along() {
        let mut filters = FilterState::default();
        filters.set_year_end(2010);
        filters.set_year_start(2020);
        assert_eq!(filters.year_range, (2020, 2020));
    }

    #[test]
    fn end_slider_drags_start_along() {
        let mut filters = FilterState::default();
        filters.set_year_start(2020);
        filters.set_year_end(2005);
        assert_eq!(filters.year_range, (2005, 2005));
    }

    #[test]
    fn years_are_clamped_to_the_slider_bounds() {
        let mut filters = FilterState::default();
        filters.set_year_start(1990);
        filters.set_year_end(2050);
        assert_eq!(filters.year_range, (MIN_YEAR, MAX_YEAR));
    }

    #[test]
    fn filter_state_round_trips_through_json() {
        let mut filters = FilterState::default();
        filters.region = RegionView::Comparison;
        filters.toggle_metric(MetricId::PovertyRate);
        filters.set_year_end(2028);

        let json = serde_json::to_string(&filters).unwrap();
        let restored: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, filters);
    }
}
