use std::fmt;

use serde::{Deserialize, Serialize};

use crate::series::{Series, ValueDomain};

/// The inequality metrics tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricId {
    Gini,
    IncomeRatio,
    PovertyRate,
    WealthTop1,
}

impl MetricId {
    pub const ALL: [MetricId; 4] = [
        MetricId::Gini,
        MetricId::IncomeRatio,
        MetricId::PovertyRate,
        MetricId::WealthTop1,
    ];

    /// Stable identifier used in the view state and data tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::Gini => "gini",
            MetricId::IncomeRatio => "income-ratio",
            MetricId::PovertyRate => "poverty-rate",
            MetricId::WealthTop1 => "wealth-top1",
        }
    }

    /// Human-readable label for filter checkboxes and chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            MetricId::Gini => "Gini Coefficient",
            MetricId::IncomeRatio => "Income Ratio",
            MetricId::PovertyRate => "Poverty Rate",
            MetricId::WealthTop1 => "Wealth Share (Top 1%)",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == id)
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two regions the metric tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionId {
    UnitedStates,
    Washington,
}

impl RegionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionId::UnitedStates => "us",
            RegionId::Washington => "washington",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegionId::UnitedStates => "United States",
            RegionId::Washington => "Washington State",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One metric entry from the static tables: the current figure plus the
/// historical and forecast series and the axis domain to draw them with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: MetricId,
    pub name: String,
    pub description: String,
    /// Unit suffix appended to tick labels, e.g. `"%"` or `"x"`.
    pub unit: String,
    pub domain: ValueDomain,
    pub current_value: f64,
    pub historical: Series,
    pub forecast: Series,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_ids_round_trip_through_strings() {
        for id in MetricId::ALL {
            assert_eq!(MetricId::from_id(id.as_str()), Some(id));
        }
        assert_eq!(MetricId::from_id("unknown"), None);
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(MetricId::WealthTop1.to_string(), "wealth-top1");
        assert_eq!(RegionId::Washington.to_string(), "washington");
    }
}
