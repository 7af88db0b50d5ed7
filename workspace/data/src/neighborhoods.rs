//! Seattle neighborhood tables: the browsable catalog, hand-entered
//! demographic records, and per-neighborhood trend series.
//!
//! The catalog and the demographic tables are deliberately not in sync:
//! West Seattle is listed for browsing but has no demographics record,
//! so lookups for it return `None` and the panels render nothing.

use std::fmt;

use model::{DemographicsSummary, NeighborhoodRecord, Series};
use tracing::debug;

use crate::metrics::series;

/// A catalog entry shown on the neighborhoods page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CATALOG: [NeighborhoodInfo; 8] = [
    NeighborhoodInfo {
        id: "ballard",
        name: "Ballard",
        description: "Historic maritime district known for craft breweries and the Hiram M. Chittenden Locks",
    },
    NeighborhoodInfo {
        id: "capitol-hill",
        name: "Capitol Hill",
        description: "Vibrant arts and culture hub with diverse dining and nightlife",
    },
    NeighborhoodInfo {
        id: "downtown",
        name: "Downtown",
        description: "Urban core featuring Pike Place Market and major shopping destinations",
    },
    NeighborhoodInfo {
        id: "fremont",
        name: "Fremont",
        description: "Quirky area known as the \"Center of the Universe\" with public art and tech companies",
    },
    NeighborhoodInfo {
        id: "queen-anne",
        name: "Queen Anne",
        description: "Historic neighborhood with stunning views and Kerry Park",
    },
    NeighborhoodInfo {
        id: "u-district",
        name: "University District",
        description: "Academic hub around UW with youthful energy and diverse cuisines",
    },
    NeighborhoodInfo {
        id: "west-seattle",
        name: "West Seattle",
        description: "Beachside community with Alki Beach and stunning city views",
    },
    NeighborhoodInfo {
        id: "south-lake-union",
        name: "South Lake Union",
        description: "Modern tech hub with Amazon campus and Lake Union activities",
    },
];

/// The per-neighborhood trend metrics with tabled series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborhoodMetric {
    Population,
    MedianIncome,
}

impl NeighborhoodMetric {
    pub fn label(&self) -> &'static str {
        match self {
            NeighborhoodMetric::Population => "Population",
            NeighborhoodMetric::MedianIncome => "Median Income",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            NeighborhoodMetric::Population => "",
            NeighborhoodMetric::MedianIncome => "$",
        }
    }
}

impl fmt::Display for NeighborhoodMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Demographic records for the neighborhoods with tabled data. Figures
/// combine the census tracts covering each neighborhood.
pub fn records() -> Vec<NeighborhoodRecord> {
    vec![
        NeighborhoodRecord {
            name: "Ballard".to_string(),
            children_under_18: 3_687,
            working_age_adults: 26_280,
            older_adults: 2_563,
            aggregate_age_total: 1_075_185.8,
            aggregate_age_male: 525_726.6,
            aggregate_age_female: 554_175.7,
            median_age_total: 33.0,
            median_age_male: 32.25,
            median_age_female: 34.0,
            median_income: Some(98_400),
        },
        NeighborhoodRecord {
            name: "Capitol Hill".to_string(),
            children_under_18: 1_973,
            working_age_adults: 68_259,
            older_adults: 5_713,
            aggregate_age_total: 2_460_912.3,
            aggregate_age_male: 1_409_486.1,
            aggregate_age_female: 1_089_692.8,
            median_age_total: 32.25,
            median_age_male: 32.6,
            median_age_female: 32.55,
            median_income: Some(74_900),
        },
        NeighborhoodRecord {
            name: "Downtown".to_string(),
            children_under_18: 1_021,
            working_age_adults: 36_389,
            older_adults: 5_378,
            aggregate_age_total: 1_589_150.5,
            aggregate_age_male: 894_624.1,
            aggregate_age_female: 704_138.1,
            median_age_total: 37.1,
            median_age_male: 36.9,
            median_age_female: 37.9,
            median_income: Some(84_600),
        },
        NeighborhoodRecord {
            name: "Fremont".to_string(),
            children_under_18: 2_201,
            working_age_adults: 21_799,
            older_adults: 1_940,
            aggregate_age_total: 857_142.8,
            aggregate_age_male: 422_457.8,
            aggregate_age_female: 433_059.0,
            median_age_total: 32.7,
            median_age_male: 32.5,
            median_age_female: 32.65,
            median_income: Some(101_800),
        },
        NeighborhoodRecord {
            name: "Queen Anne".to_string(),
            children_under_18: 4_314,
            working_age_adults: 36_166,
            older_adults: 5_025,
            aggregate_age_total: 1_598_747.0,
            aggregate_age_male: 782_431.9,
            aggregate_age_female: 815_743.8,
            median_age_total: 35.1,
            median_age_male: 34.1,
            median_age_female: 36.0,
            median_income: Some(110_300),
        },
        NeighborhoodRecord {
            name: "University District".to_string(),
            children_under_18: 1_705,
            working_age_adults: 49_551,
            older_adults: 1_402,
            aggregate_age_total: 1_206_187.3,
            aggregate_age_male: 613_741.3,
            aggregate_age_female: 604_159.3,
            median_age_total: 22.9,
            median_age_male: 23.85,
            median_age_female: 22.35,
            median_income: Some(42_500),
        },
        NeighborhoodRecord {
            name: "South Lake Union".to_string(),
            children_under_18: 322,
            working_age_adults: 10_739,
            older_adults: 915,
            aggregate_age_total: 361_128.8,
            aggregate_age_male: 208_120.8,
            aggregate_age_female: 181_019.4,
            median_age_total: 30.1,
            median_age_male: 30.2,
            median_age_female: 35.4,
            median_income: Some(105_200),
        },
    ]
}

/// Looks up a demographics record by display name.
pub fn record(name: &str) -> Option<NeighborhoodRecord> {
    let found = records().into_iter().find(|r| r.name == name);
    if found.is_none() {
        debug!(%name, "no demographics record for neighborhood");
    }
    found
}

/// Derived display summary for a neighborhood, recomputed on each call.
pub fn summary(name: &str) -> Option<DemographicsSummary> {
    record(name).map(|r| r.summary())
}

/// Current population figure for a neighborhood.
pub fn current_population(name: &str) -> Option<u32> {
    record(name).map(|r| r.total_population())
}

/// Historical trend series for a neighborhood metric.
pub fn history(name: &str, metric: NeighborhoodMetric) -> Option<Series> {
    trend(name, metric).map(|(hist, _)| series(hist))
}

/// Forecast trend series for a neighborhood metric.
pub fn forecast(name: &str, metric: NeighborhoodMetric) -> Option<Series> {
    trend(name, metric).map(|(_, fcst)| series(fcst))
}

type TrendTable = (&'static [(i32, f64)], &'static [(i32, f64)]);

fn trend(name: &str, metric: NeighborhoodMetric) -> Option<TrendTable> {
    use NeighborhoodMetric::{MedianIncome, Population};

    let table: TrendTable = match (name, metric) {
        ("Ballard", Population) => (
            &[(2010, 25_400.0), (2015, 28_700.0), (2020, 31_200.0), (2023, 32_530.0)],
            &[(2025, 33_400.0), (2030, 35_600.0), (2035, 37_500.0)],
        ),
        ("Ballard", MedianIncome) => (
            &[(2010, 74_000.0), (2015, 83_000.0), (2020, 93_500.0), (2023, 98_400.0)],
            &[(2025, 102_000.0), (2030, 112_000.0), (2035, 123_000.0)],
        ),
        ("Capitol Hill", Population) => (
            &[(2010, 61_200.0), (2015, 67_800.0), (2020, 73_100.0), (2023, 75_945.0)],
            &[(2025, 77_800.0), (2030, 81_900.0), (2035, 85_600.0)],
        ),
        ("Capitol Hill", MedianIncome) => (
            &[(2010, 56_000.0), (2015, 63_000.0), (2020, 71_000.0), (2023, 74_900.0)],
            &[(2025, 78_000.0), (2030, 85_000.0), (2035, 93_000.0)],
        ),
        ("Downtown", Population) => (
            &[(2010, 29_800.0), (2015, 35_200.0), (2020, 40_600.0), (2023, 42_788.0)],
            &[(2025, 44_500.0), (2030, 48_900.0), (2035, 52_800.0)],
        ),
        ("Downtown", MedianIncome) => (
            &[(2010, 61_000.0), (2015, 70_000.0), (2020, 80_500.0), (2023, 84_600.0)],
            &[(2025, 88_000.0), (2030, 96_000.0), (2035, 105_000.0)],
        ),
        ("Fremont", Population) => (
            &[(2010, 21_100.0), (2015, 23_200.0), (2020, 24_900.0), (2023, 25_940.0)],
            &[(2025, 26_700.0), (2030, 28_300.0), (2035, 29_800.0)],
        ),
        ("Fremont", MedianIncome) => (
            &[(2010, 76_000.0), (2015, 86_000.0), (2020, 96_500.0), (2023, 101_800.0)],
            &[(2025, 106_000.0), (2030, 116_000.0), (2035, 127_000.0)],
        ),
        ("Queen Anne", Population) => (
            &[(2010, 38_600.0), (2015, 41_700.0), (2020, 44_300.0), (2023, 45_505.0)],
            &[(2025, 46_600.0), (2030, 48_700.0), (2035, 50_600.0)],
        ),
        ("Queen Anne", MedianIncome) => (
            &[(2010, 83_000.0), (2015, 93_000.0), (2020, 104_500.0), (2023, 110_300.0)],
            &[(2025, 115_000.0), (2030, 126_000.0), (2035, 138_000.0)],
        ),
        ("University District", Population) => (
            &[(2010, 44_900.0), (2015, 47_800.0), (2020, 50_900.0), (2023, 52_658.0)],
            &[(2025, 53_900.0), (2030, 56_400.0), (2035, 58_700.0)],
        ),
        ("University District", MedianIncome) => (
            &[(2010, 33_000.0), (2015, 37_000.0), (2020, 40_500.0), (2023, 42_500.0)],
            &[(2025, 44_000.0), (2030, 48_000.0), (2035, 52_000.0)],
        ),
        ("South Lake Union", Population) => (
            &[(2010, 4_300.0), (2015, 7_600.0), (2020, 10_800.0), (2023, 11_976.0)],
            &[(2025, 13_100.0), (2030, 15_800.0), (2035, 18_200.0)],
        ),
        ("South Lake Union", MedianIncome) => (
            &[(2010, 78_000.0), (2015, 89_000.0), (2020, 100_000.0), (2023, 105_200.0)],
            &[(2025, 110_000.0), (2030, 121_000.0), (2035, 132_000.0)],
        ),
        _ => {
            debug!(%name, %metric, "no trend table for neighborhood");
            return None;
        }
    };
    Some(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ballard_summary_matches_the_raw_counts() {
        let summary = summary("Ballard").unwrap();
        assert_eq!(summary.total_population, 32_530);
        assert_eq!(summary.age_distribution.children, 11);
        assert_eq!(summary.age_distribution.working_age, 81);
        assert_eq!(summary.age_distribution.elderly, 8);
        assert_eq!(summary.gender_ratio.male, 49);
        assert_eq!(summary.gender_ratio.female, 52);
        assert!((summary.median_age - 33.0).abs() < f64::EPSILON);
    }

    #[test]
    fn west_seattle_is_browsable_but_has_no_data() {
        assert!(CATALOG.iter().any(|n| n.name == "West Seattle"));
        assert!(record("West Seattle").is_none());
        assert!(summary("West Seattle").is_none());
        assert!(history("West Seattle", NeighborhoodMetric::Population).is_none());
    }

    #[test]
    fn unknown_neighborhood_returns_none() {
        assert!(summary("Atlantis").is_none());
        assert!(forecast("Atlantis", NeighborhoodMetric::MedianIncome).is_none());
    }

    #[test]
    fn every_record_has_both_trend_tables() {
        for r in records() {
            for metric in [NeighborhoodMetric::Population, NeighborhoodMetric::MedianIncome] {
                let hist = history(&r.name, metric).unwrap();
                let fcst = forecast(&r.name, metric).unwrap();
                assert!(hist.len() >= 2, "{}/{metric} history too short", r.name);
                assert!(fcst.len() >= 2, "{}/{metric} forecast too short", r.name);
                assert!(hist.max_year() < fcst.min_year());
            }
        }
    }

    #[test]
    fn population_history_ends_at_the_current_total() {
        for r in records() {
            let hist = history(&r.name, NeighborhoodMetric::Population).unwrap();
            let last = hist.last().map(|p| p.value).unwrap();
            assert!(
                (last - f64::from(r.total_population())).abs() < 0.5,
                "{} history does not end at the current population",
                r.name
            );
        }
    }
}
