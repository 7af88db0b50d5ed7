use model::{Series, ValueDomain};
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::scale::LinearScale;
use crate::scene::{path_through, ScenePoint, Tick};
use crate::AXIS_TICKS;

/// Inputs for one line chart: an ordered historical series, an optional
/// ordered forecast series, the caller-supplied value domain, and pixel
/// dimensions.
#[derive(Debug, Clone, Copy)]
pub struct LineChart<'a> {
    pub historical: &'a Series,
    pub forecast: Option<&'a Series>,
    pub domain: ValueDomain,
    pub width: u32,
    pub height: u32,
    /// Unit suffix appended to y tick labels.
    pub unit: &'a str,
}

/// A polyline plus its point markers, all in pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub path: String,
    pub markers: Vec<ScenePoint>,
    pub dashed: bool,
}

/// The computed scene for a line chart, ready to be emitted as SVG.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineScene {
    pub width: f64,
    pub height: f64,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub historical: Option<Polyline>,
    pub forecast: Option<Polyline>,
    /// Dashed segment connecting the last historical point to the first
    /// forecast point.
    pub bridge: Option<(ScenePoint, ScenePoint)>,
    pub show_legend: bool,
}

impl LineChart<'_> {
    /// Computes the scene for these inputs.
    ///
    /// Both series empty is not an error: the result is an empty scene
    /// (no ticks, no polylines) and the caller draws a blank canvas.
    pub fn scene(&self) -> Result<LineScene> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.domain.span() <= 0.0 {
            return Err(ChartError::EmptyDomain {
                min: self.domain.min,
                max: self.domain.max,
            });
        }

        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let forecast = self.forecast.filter(|s| !s.is_empty());

        let years: Vec<i32> = [
            self.historical.min_year(),
            self.historical.max_year(),
            forecast.and_then(|s| s.min_year()),
            forecast.and_then(|s| s.max_year()),
        ]
        .into_iter()
        .flatten()
        .collect();

        let (Some(&min_year), Some(&max_year)) = (years.iter().min(), years.iter().max()) else {
            debug!("no points to draw, emitting empty scene");
            return Ok(LineScene {
                width,
                height,
                ..LineScene::default()
            });
        };

        let x = LinearScale::new((f64::from(min_year), f64::from(max_year)), (0.0, width));
        let y = LinearScale::new((self.domain.min, self.domain.max), (height, 0.0));

        let project = |series: &Series| -> Vec<ScenePoint> {
            series
                .points()
                .iter()
                .map(|p| ScenePoint {
                    x: x.map(f64::from(p.year)),
                    y: y.map(p.value),
                })
                .collect()
        };

        let historical_points = project(self.historical);
        let forecast_points = forecast.map(|s| project(s)).unwrap_or_default();

        // A polyline needs at least two points; markers accompany a
        // drawn polyline.
        let polyline = |points: &[ScenePoint], dashed: bool| -> Option<Polyline> {
            (points.len() >= 2).then(|| Polyline {
                path: path_through(points),
                markers: points.to_vec(),
                dashed,
            })
        };

        let bridge = match (historical_points.last(), forecast_points.first()) {
            (Some(&from), Some(&to)) => Some((from, to)),
            _ => None,
        };

        Ok(LineScene {
            width,
            height,
            x_ticks: x_ticks(min_year, max_year, &x),
            y_ticks: y_ticks(self.domain, self.unit, &y),
            historical: polyline(&historical_points, false),
            forecast: polyline(&forecast_points, true),
            bridge,
            show_legend: forecast.is_some(),
        })
    }
}

/// Year ticks: step `ceil(span / 4)`, which may overshoot the last year
/// for spans not divisible by four. A zero span emits a single centered
/// tick instead of five duplicates.
fn x_ticks(min_year: i32, max_year: i32, x: &LinearScale) -> Vec<Tick> {
    let step = (f64::from(max_year - min_year) / (AXIS_TICKS - 1) as f64).ceil() as i32;
    if step == 0 {
        return vec![Tick {
            pos: x.map(f64::from(min_year)),
            label: min_year.to_string(),
        }];
    }
    (0..AXIS_TICKS)
        .map(|i| {
            let year = min_year + i as i32 * step;
            Tick {
                pos: x.map(f64::from(year)),
                label: year.to_string(),
            }
        })
        .collect()
}

/// Value ticks: five evenly spaced labels across the domain.
fn y_ticks(domain: ValueDomain, unit: &str, y: &LinearScale) -> Vec<Tick> {
    let step = domain.span() / (AXIS_TICKS - 1) as f64;
    (0..AXIS_TICKS)
        .map(|i| {
            let value = domain.min + i as f64 * step;
            Tick {
                pos: y.map(value),
                label: format!("{value:.1}{unit}"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::TimeSeriesPoint;

    const EPS: f64 = 1e-9;

    fn series(points: &[(i32, f64)]) -> Series {
        Series::new(
            points
                .iter()
                .map(|&(y, v)| TimeSeriesPoint::new(y, v))
                .collect(),
        )
        .unwrap()
    }

    fn chart<'a>(historical: &'a Series, forecast: Option<&'a Series>) -> LineChart<'a> {
        LineChart {
            historical,
            forecast,
            domain: ValueDomain::new(0.0, 10.0).unwrap(),
            width: 600,
            height: 250,
            unit: "",
        }
    }

    #[test]
    fn x_positions_are_monotone_for_sorted_years() {
        let hist = series(&[(2000, 1.0), (2005, 2.0), (2010, 3.0), (2023, 4.0)]);
        let scene = chart(&hist, None).scene().unwrap();
        let markers = &scene.historical.unwrap().markers;
        for pair in markers.windows(2) {
            assert!(pair[0].x <= pair[1].x);
        }
    }

    #[test]
    fn domain_endpoints_map_to_canvas_edges() {
        let hist = series(&[(2020, 0.0), (2021, 10.0)]);
        let scene = chart(&hist, None).scene().unwrap();
        let markers = &scene.historical.unwrap().markers;
        assert!((markers[0].y - 250.0).abs() < EPS, "domain min renders at the bottom");
        assert!((markers[1].y - 0.0).abs() < EPS, "domain max renders at the top");
    }

    #[test]
    fn midpoint_value_renders_at_half_height() {
        let hist = series(&[(2020, 5.0), (2021, 5.0)]);
        let scene = chart(&hist, None).scene().unwrap();
        let markers = &scene.historical.unwrap().markers;
        assert!((markers[0].y - 125.0).abs() < EPS);
    }

    #[test]
    fn bridge_connects_last_historical_to_first_forecast() {
        let hist = series(&[(2020, 1.0), (2021, 2.0)]);
        let fcst = series(&[(2022, 3.0)]);
        let scene = chart(&hist, Some(&fcst)).scene().unwrap();

        let (from, to) = scene.bridge.unwrap();
        let hist_markers = scene.historical.unwrap().markers;
        assert_eq!(from, hist_markers[1]);
        // 2022 is the max year, so the bridge ends at the right edge.
        assert!((to.x - 600.0).abs() < EPS);
        // One forecast point: no polyline, but the bridge still reaches it.
        assert!(scene.forecast.is_none());
        assert!(scene.show_legend);
    }

    #[test]
    fn empty_input_renders_an_empty_scene() {
        let hist = Series::empty();
        let scene = chart(&hist, None).scene().unwrap();
        assert!(scene.historical.is_none());
        assert!(scene.forecast.is_none());
        assert!(scene.bridge.is_none());
        assert!(scene.x_ticks.is_empty());
        assert!(scene.y_ticks.is_empty());
        assert!(!scene.show_legend);
    }

    #[test]
    fn empty_forecast_series_counts_as_absent() {
        let hist = series(&[(2020, 1.0), (2021, 2.0)]);
        let fcst = Series::empty();
        let scene = chart(&hist, Some(&fcst)).scene().unwrap();
        assert!(scene.bridge.is_none());
        assert!(!scene.show_legend);
    }

    #[test]
    fn forecast_only_input_still_renders() {
        let hist = Series::empty();
        let fcst = series(&[(2025, 1.0), (2030, 2.0), (2035, 3.0)]);
        let scene = chart(&hist, Some(&fcst)).scene().unwrap();
        assert!(scene.historical.is_none());
        assert!(scene.bridge.is_none());
        let forecast = scene.forecast.unwrap();
        assert!(forecast.dashed);
        assert_eq!(forecast.markers.len(), 3);
    }

    #[test]
    fn single_year_span_centers_without_dividing_by_zero() {
        let hist = series(&[(2020, 5.0)]);
        let scene = chart(&hist, None).scene().unwrap();
        assert_eq!(scene.x_ticks.len(), 1);
        assert!((scene.x_ticks[0].pos - 300.0).abs() < EPS);
        assert_eq!(scene.x_ticks[0].label, "2020");
        // A single point draws no polyline.
        assert!(scene.historical.is_none());
    }

    #[test]
    fn five_ticks_per_axis_with_ceiled_year_step() {
        let hist = series(&[(2000, 1.0), (2023, 2.0)]);
        let scene = chart(&hist, None).scene().unwrap();
        assert_eq!(scene.x_ticks.len(), 5);
        assert_eq!(scene.y_ticks.len(), 5);
        // ceil(23 / 4) = 6, so ticks run 2000, 2006, ..., 2024.
        let labels: Vec<_> = scene.x_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["2000", "2006", "2012", "2018", "2024"]);
    }

    #[test]
    fn y_tick_labels_carry_the_unit() {
        let hist = series(&[(2020, 1.0), (2021, 2.0)]);
        let mut input = chart(&hist, None);
        input.unit = "%";
        let scene = input.scene().unwrap();
        assert_eq!(scene.y_ticks[0].label, "0.0%");
        assert_eq!(scene.y_ticks[4].label, "10.0%");
        // The y axis is inverted: the first tick sits at the bottom.
        assert!((scene.y_ticks[0].pos - 250.0).abs() < EPS);
        assert!((scene.y_ticks[4].pos - 0.0).abs() < EPS);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let hist = series(&[(2020, 1.0)]);
        let mut input = chart(&hist, None);
        input.width = 0;
        assert_eq!(
            input.scene().unwrap_err(),
            ChartError::InvalidDimensions { width: 0, height: 250 }
        );
    }

    #[test]
    fn styles_distinguish_historical_from_forecast() {
        let hist = series(&[(2018, 1.0), (2019, 2.0)]);
        let fcst = series(&[(2020, 3.0), (2021, 4.0)]);
        let scene = chart(&hist, Some(&fcst)).scene().unwrap();
        assert!(!scene.historical.unwrap().dashed);
        assert!(scene.forecast.unwrap().dashed);
        assert!(scene.show_legend);
    }
}
