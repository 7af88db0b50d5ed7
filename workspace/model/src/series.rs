use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A single yearly observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub year: i32,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// An ordered sequence of yearly observations.
///
/// Construction enforces the two series invariants: years ascend strictly
/// and no year appears twice. The historical/forecast split is represented
/// by storing two separate series on the owning metric.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    points: Vec<TimeSeriesPoint>,
}

impl Series {
    /// Creates a series from points ordered by year ascending.
    pub fn new(points: Vec<TimeSeriesPoint>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[0].year == pair[1].year {
                return Err(ModelError::DuplicateYear(pair[0].year));
            }
            if pair[0].year > pair[1].year {
                return Err(ModelError::UnorderedSeries {
                    prev: pair[0].year,
                    next: pair[1].year,
                });
            }
        }
        Ok(Self { points })
    }

    /// A series with no observations.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> Option<&TimeSeriesPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TimeSeriesPoint> {
        self.points.last()
    }

    pub fn min_year(&self) -> Option<i32> {
        self.points.first().map(|p| p.year)
    }

    pub fn max_year(&self) -> Option<i32> {
        self.points.last().map(|p| p.year)
    }

    /// Returns the subset of points whose year lies in `[start, end]`.
    ///
    /// Restriction preserves ordering, so the result is a valid series
    /// without re-validation.
    pub fn restricted(&self, start: i32, end: i32) -> Series {
        Series {
            points: self
                .points
                .iter()
                .copied()
                .filter(|p| p.year >= start && p.year <= end)
                .collect(),
        }
    }
}

/// The closed value interval used to scale a series vertically.
///
/// Supplied by the data tables alongside each metric; never derived from
/// the points themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min >= max {
            return Err(ModelError::EmptyDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(years: &[i32]) -> Vec<TimeSeriesPoint> {
        years.iter().map(|&y| TimeSeriesPoint::new(y, 1.0)).collect()
    }

    #[test]
    fn ordered_series_is_accepted() {
        let series = Series::new(pts(&[2000, 2005, 2010])).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.min_year(), Some(2000));
        assert_eq!(series.max_year(), Some(2010));
    }

    #[test]
    fn unordered_series_is_rejected() {
        let err = Series::new(pts(&[2005, 2000])).unwrap_err();
        assert_eq!(
            err,
            ModelError::UnorderedSeries {
                prev: 2005,
                next: 2000
            }
        );
    }

    #[test]
    fn duplicate_year_is_rejected() {
        let err = Series::new(pts(&[2000, 2000])).unwrap_err();
        assert_eq!(err, ModelError::DuplicateYear(2000));
    }

    #[test]
    fn empty_series_has_no_bounds() {
        let series = Series::empty();
        assert!(series.is_empty());
        assert_eq!(series.min_year(), None);
        assert_eq!(series.max_year(), None);
    }

    #[test]
    fn restriction_keeps_points_inside_the_range() {
        let series = Series::new(pts(&[2000, 2005, 2010, 2015])).unwrap();
        let clipped = series.restricted(2004, 2011);
        assert_eq!(
            clipped.points().iter().map(|p| p.year).collect::<Vec<_>>(),
            vec![2005, 2010]
        );
    }

    #[test]
    fn restriction_can_empty_a_series() {
        let series = Series::new(pts(&[2000, 2005])).unwrap();
        assert!(series.restricted(2020, 2030).is_empty());
    }

    #[test]
    fn inverted_domain_is_rejected() {
        assert!(ValueDomain::new(1.0, 0.0).is_err());
        assert!(ValueDomain::new(0.5, 0.5).is_err());
    }

    #[test]
    fn domain_span() {
        let domain = ValueDomain::new(0.0, 10.0).unwrap();
        assert!((domain.span() - 10.0).abs() < f64::EPSILON);
    }
}
