use serde::{Deserialize, Serialize};

/// Raw demographic counts for one Seattle neighborhood, as hand-entered
/// in the data tables. Census tracts covering the same neighborhood are
/// already combined into a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeighborhoodRecord {
    pub name: String,
    pub children_under_18: u32,
    pub working_age_adults: u32,
    pub older_adults: u32,
    /// Sum of ages across the population, used to derive the gender ratio.
    pub aggregate_age_total: f64,
    pub aggregate_age_male: f64,
    pub aggregate_age_female: f64,
    pub median_age_total: f64,
    pub median_age_male: f64,
    pub median_age_female: f64,
    /// Median household income in dollars, where known.
    pub median_income: Option<u32>,
}

/// Percentage shares of the three age groups, rounded to whole percents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDistribution {
    pub children: u32,
    pub working_age: u32,
    pub elderly: u32,
}

/// Male/female shares of the aggregate-age total, rounded to whole percents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderRatio {
    pub male: u32,
    pub female: u32,
}

/// Derived display figures for a neighborhood. Recomputed on each call to
/// the provider; there is no caching or reactive invalidation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicsSummary {
    pub total_population: u32,
    pub age_distribution: AgeDistribution,
    pub median_age: f64,
    pub gender_ratio: GenderRatio,
    pub median_income: Option<u32>,
}

fn rounded_share(part: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    (part / total * 100.0).round() as u32
}

impl NeighborhoodRecord {
    pub fn total_population(&self) -> u32 {
        self.children_under_18 + self.working_age_adults + self.older_adults
    }

    /// Computes the derived summary from the raw counts.
    pub fn summary(&self) -> DemographicsSummary {
        let total = self.total_population();
        let total_f = f64::from(total);

        DemographicsSummary {
            total_population: total,
            age_distribution: AgeDistribution {
                children: rounded_share(f64::from(self.children_under_18), total_f),
                working_age: rounded_share(f64::from(self.working_age_adults), total_f),
                elderly: rounded_share(f64::from(self.older_adults), total_f),
            },
            median_age: self.median_age_total,
            gender_ratio: GenderRatio {
                male: rounded_share(self.aggregate_age_male, self.aggregate_age_total),
                female: rounded_share(self.aggregate_age_female, self.aggregate_age_total),
            },
            median_income: self.median_income,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> NeighborhoodRecord {
        NeighborhoodRecord {
            name: "Testville".to_string(),
            children_under_18: 100,
            working_age_adults: 700,
            older_adults: 200,
            aggregate_age_total: 1000.0,
            aggregate_age_male: 490.0,
            aggregate_age_female: 510.0,
            median_age_total: 34.5,
            median_age_male: 33.0,
            median_age_female: 36.0,
            median_income: Some(80_000),
        }
    }

    #[test]
    fn summary_rounds_shares_to_whole_percents() {
        let summary = record().summary();
        assert_eq!(summary.total_population, 1000);
        assert_eq!(
            summary.age_distribution,
            AgeDistribution {
                children: 10,
                working_age: 70,
                elderly: 20
            }
        );
        assert_eq!(summary.gender_ratio, GenderRatio { male: 49, female: 51 });
        assert!((summary.median_age - 34.5).abs() < f64::EPSILON);
        assert_eq!(summary.median_income, Some(80_000));
    }

    #[test]
    fn zero_population_does_not_divide_by_zero() {
        let mut empty = record();
        empty.children_under_18 = 0;
        empty.working_age_adults = 0;
        empty.older_adults = 0;
        empty.aggregate_age_total = 0.0;

        let summary = empty.summary();
        assert_eq!(summary.total_population, 0);
        assert_eq!(summary.age_distribution.children, 0);
        assert_eq!(summary.gender_ratio.male, 0);
    }
}
