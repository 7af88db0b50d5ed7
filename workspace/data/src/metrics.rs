//! Inequality metric tables for the United States and Washington State.
//!
//! Figures are simulated: plausible values hand-entered for the
//! dashboard, not sourced from a statistical agency.

use model::{Metric, MetricId, RegionId, Series, TimeSeriesPoint, ValueDomain};
use tracing::warn;

pub(crate) fn series(points: &[(i32, f64)]) -> Series {
    let points = points
        .iter()
        .map(|&(year, value)| TimeSeriesPoint::new(year, value))
        .collect();
    match Series::new(points) {
        Ok(series) => series,
        Err(err) => {
            warn!(%err, "invalid hand-entered series, substituting empty");
            Series::empty()
        }
    }
}

fn domain(min: f64, max: f64) -> ValueDomain {
    match ValueDomain::new(min, max) {
        Ok(domain) => domain,
        Err(err) => {
            warn!(%err, "invalid hand-entered domain, substituting unit interval");
            ValueDomain { min: 0.0, max: 1.0 }
        }
    }
}

pub fn us_metrics() -> Vec<Metric> {
    vec![
        Metric {
            id: MetricId::Gini,
            name: "Gini Coefficient".to_string(),
            description: "Income inequality on a scale from 0 (perfect equality) to 1 (perfect inequality)".to_string(),
            unit: String::new(),
            domain: domain(0.40, 0.55),
            current_value: 0.49,
            historical: series(&[
                (2000, 0.462),
                (2005, 0.469),
                (2010, 0.470),
                (2015, 0.479),
                (2020, 0.481),
                (2023, 0.490),
            ]),
            forecast: series(&[
                (2025, 0.493),
                (2028, 0.498),
                (2030, 0.502),
                (2033, 0.507),
                (2035, 0.510),
            ]),
        },
        Metric {
            id: MetricId::IncomeRatio,
            name: "Income Ratio".to_string(),
            description: "Average income of the top 10% relative to the bottom 50% of earners".to_string(),
            unit: "x".to_string(),
            domain: domain(8.0, 18.0),
            current_value: 14.2,
            historical: series(&[
                (2000, 11.1),
                (2005, 11.9),
                (2010, 12.4),
                (2015, 13.2),
                (2020, 13.8),
                (2023, 14.2),
            ]),
            forecast: series(&[
                (2025, 14.5),
                (2028, 15.0),
                (2030, 15.4),
                (2033, 15.9),
                (2035, 16.3),
            ]),
        },
        Metric {
            id: MetricId::PovertyRate,
            name: "Poverty Rate".to_string(),
            description: "Share of the population living below the federal poverty line".to_string(),
            unit: "%".to_string(),
            domain: domain(0.0, 20.0),
            current_value: 11.5,
            historical: series(&[
                (2000, 11.3),
                (2005, 12.6),
                (2010, 15.1),
                (2015, 13.5),
                (2020, 11.9),
                (2023, 11.5),
            ]),
            forecast: series(&[
                (2025, 11.2),
                (2028, 10.8),
                (2030, 10.5),
                (2033, 10.2),
                (2035, 9.9),
            ]),
        },
        Metric {
            id: MetricId::WealthTop1,
            name: "Wealth Share (Top 1%)".to_string(),
            description: "Share of total wealth owned by the top 1% of the population".to_string(),
            unit: "%".to_string(),
            domain: domain(20.0, 45.0),
            current_value: 32.3,
            historical: series(&[
                (2000, 28.1),
                (2005, 29.4),
                (2010, 30.6),
                (2015, 31.3),
                (2020, 31.9),
                (2023, 32.3),
            ]),
            forecast: series(&[
                (2025, 32.9),
                (2028, 33.8),
                (2030, 34.5),
                (2033, 35.4),
                (2035, 36.1),
            ]),
        },
    ]
}

pub fn washington_metrics() -> Vec<Metric> {
    vec![
        Metric {
            id: MetricId::Gini,
            name: "Gini Coefficient".to_string(),
            description: "Income inequality on a scale from 0 (perfect equality) to 1 (perfect inequality)".to_string(),
            unit: String::new(),
            domain: domain(0.40, 0.55),
            current_value: 0.459,
            historical: series(&[
                (2000, 0.441),
                (2005, 0.447),
                (2010, 0.449),
                (2015, 0.452),
                (2020, 0.456),
                (2023, 0.459),
            ]),
            forecast: series(&[
                (2025, 0.460),
                (2028, 0.461),
                (2030, 0.462),
                (2033, 0.462),
                (2035, 0.463),
            ]),
        },
        Metric {
            id: MetricId::IncomeRatio,
            name: "Income Ratio".to_string(),
            description: "Average income of the top 10% relative to the bottom 50% of earners".to_string(),
            unit: "x".to_string(),
            domain: domain(8.0, 18.0),
            current_value: 12.1,
            historical: series(&[
                (2000, 10.2),
                (2005, 10.8),
                (2010, 11.1),
                (2015, 11.5),
                (2020, 11.9),
                (2023, 12.1),
            ]),
            forecast: series(&[
                (2025, 12.3),
                (2028, 12.6),
                (2030, 12.8),
                (2033, 13.0),
                (2035, 13.2),
            ]),
        },
        Metric {
            id: MetricId::PovertyRate,
            name: "Poverty Rate".to_string(),
            description: "Share of the population living below the federal poverty line".to_string(),
            unit: "%".to_string(),
            domain: domain(0.0, 20.0),
            current_value: 9.9,
            historical: series(&[
                (2000, 10.8),
                (2005, 11.6),
                (2010, 13.2),
                (2015, 12.1),
                (2020, 10.4),
                (2023, 9.9),
            ]),
            forecast: series(&[
                (2025, 9.6),
                (2028, 9.1),
                (2030, 8.7),
                (2033, 8.3),
                (2035, 8.0),
            ]),
        },
        Metric {
            id: MetricId::WealthTop1,
            name: "Wealth Share (Top 1%)".to_string(),
            description: "Share of total wealth owned by the top 1% of the population".to_string(),
            unit: "%".to_string(),
            domain: domain(20.0, 45.0),
            current_value: 31.0,
            historical: series(&[
                (2000, 26.9),
                (2005, 28.0),
                (2010, 29.2),
                (2015, 30.0),
                (2020, 30.6),
                (2023, 31.0),
            ]),
            forecast: series(&[
                (2025, 31.5),
                (2028, 32.4),
                (2030, 33.1),
                (2033, 33.9),
                (2035, 34.6),
            ]),
        },
    ]
}

pub fn region_metrics(region: RegionId) -> Vec<Metric> {
    match region {
        RegionId::UnitedStates => us_metrics(),
        RegionId::Washington => washington_metrics(),
    }
}

/// Looks up a single metric entry for a region.
pub fn metric(region: RegionId, id: MetricId) -> Option<Metric> {
    region_metrics(region).into_iter().find(|m| m.id == id)
}

/// The historical series for a region metric.
pub fn metric_series(region: RegionId, id: MetricId) -> Option<Series> {
    metric(region, id).map(|m| m.historical)
}

/// The forecast series for a region metric.
pub fn forecast_series(region: RegionId, id: MetricId) -> Option<Series> {
    metric(region, id).map(|m| m.forecast)
}

/// The most recent observed value for a region metric.
pub fn current_value(region: RegionId, id: MetricId) -> Option<f64> {
    metric(region, id).map(|m| m.current_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_carries_all_four_metrics() {
        for region in [RegionId::UnitedStates, RegionId::Washington] {
            let metrics = region_metrics(region);
            assert_eq!(metrics.len(), MetricId::ALL.len());
            for id in MetricId::ALL {
                assert!(metrics.iter().any(|m| m.id == id), "{region} missing {id}");
            }
        }
    }

    #[test]
    fn tables_satisfy_the_series_invariants() {
        for region in [RegionId::UnitedStates, RegionId::Washington] {
            for m in region_metrics(region) {
                assert!(!m.historical.is_empty(), "{}/{} has no history", region, m.id);
                assert!(!m.forecast.is_empty(), "{}/{} has no forecast", region, m.id);
                // Hand-entered tables went through Series::new, so a
                // non-empty result means ordering held.
                let last_hist = m.historical.max_year();
                let first_forecast = m.forecast.min_year();
                assert!(last_hist < first_forecast, "{}/{} forecast overlaps history", region, m.id);
            }
        }
    }

    #[test]
    fn current_value_matches_the_latest_observation() {
        for region in [RegionId::UnitedStates, RegionId::Washington] {
            for m in region_metrics(region) {
                let last = m.historical.last().map(|p| p.value);
                assert_eq!(last, Some(m.current_value), "{}/{}", region, m.id);
            }
        }
    }

    #[test]
    fn lookups_return_table_entries() {
        let gini = current_value(RegionId::UnitedStates, MetricId::Gini);
        assert_eq!(gini, Some(0.49));
        assert!(metric_series(RegionId::Washington, MetricId::PovertyRate).is_some());
    }

    #[test]
    fn domains_cover_every_tabled_value() {
        for region in [RegionId::UnitedStates, RegionId::Washington] {
            for m in region_metrics(region) {
                for p in m.historical.points().iter().chain(m.forecast.points()) {
                    assert!(
                        p.value >= m.domain.min && p.value <= m.domain.max,
                        "{}/{} value {} outside domain",
                        region,
                        m.id,
                        p.value
                    );
                }
            }
        }
    }
}
