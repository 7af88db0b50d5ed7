/// A linear map from a data interval to a pixel interval.
///
/// The degenerate case of a zero-length data interval maps every value
/// to the center of the pixel range instead of dividing by zero; this is
/// how a single-year series ends up centered horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return (self.range.0 + self.range.1) / 2.0;
        }
        self.range.0 + (value - self.domain.0) / span * (self.range.1 - self.range.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn maps_domain_endpoints_to_range_endpoints() {
        let scale = LinearScale::new((2000.0, 2020.0), (0.0, 600.0));
        assert!((scale.map(2000.0) - 0.0).abs() < EPS);
        assert!((scale.map(2020.0) - 600.0).abs() < EPS);
        assert!((scale.map(2010.0) - 300.0).abs() < EPS);
    }

    #[test]
    fn inverted_range_flips_the_axis() {
        let scale = LinearScale::new((0.0, 10.0), (250.0, 0.0));
        assert!((scale.map(0.0) - 250.0).abs() < EPS);
        assert!((scale.map(10.0) - 0.0).abs() < EPS);
        assert!((scale.map(5.0) - 125.0).abs() < EPS);
    }

    #[test]
    fn degenerate_domain_maps_to_range_center() {
        let scale = LinearScale::new((2020.0, 2020.0), (0.0, 600.0));
        assert!((scale.map(2020.0) - 300.0).abs() < EPS);
        assert!((scale.map(1999.0) - 300.0).abs() < EPS);
    }
}
