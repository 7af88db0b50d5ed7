use model::ValueDomain;

use crate::error::{ChartError, Result};
use crate::scale::LinearScale;
use crate::scene::Tick;
use crate::AXIS_TICKS;

/// One labeled value to draw as a bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub label: String,
    pub value: f64,
}

/// Inputs for a bar chart over labeled values.
#[derive(Debug, Clone, Copy)]
pub struct BarChart<'a> {
    pub items: &'a [BarItem],
    pub domain: ValueDomain,
    pub width: u32,
    pub height: u32,
    pub unit: &'a str,
}

/// One bar rectangle in pixel coordinates, top-left anchored.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

/// The computed scene for a bar chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarScene {
    pub width: f64,
    pub height: f64,
    pub bars: Vec<BarRect>,
    pub y_ticks: Vec<Tick>,
}

/// Fraction of each slot occupied by the bar; the rest is padding.
const BAR_FILL: f64 = 0.6;

impl BarChart<'_> {
    /// Computes the scene. Bars are evenly spaced; values at or below
    /// the domain minimum clamp to zero height rather than rendering
    /// upside down.
    pub fn scene(&self) -> Result<BarScene> {
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

        if self.items.is_empty() {
            return Ok(BarScene {
                width,
                height,
                ..BarScene::default()
            });
        }

        let y = LinearScale::new((self.domain.min, self.domain.max), (height, 0.0));
        let slot = width / self.items.len() as f64;
        let bar_width = slot * BAR_FILL;
        let inset = slot * (1.0 - BAR_FILL) / 2.0;

        let bars = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let top = y.map(item.value).clamp(0.0, height);
                BarRect {
                    x: i as f64 * slot + inset,
                    y: top,
                    width: bar_width,
                    height: height - top,
                    label: item.label.clone(),
                    value: item.value,
                }
            })
            .collect();

        let step = self.domain.span() / (AXIS_TICKS - 1) as f64;
        let y_ticks = (0..AXIS_TICKS)
            .map(|i| {
                let value = self.domain.min + i as f64 * step;
                Tick {
                    pos: y.map(value),
                    label: format!("{value:.1}{}", self.unit),
                }
            })
            .collect();

        Ok(BarScene {
            width,
            height,
            bars,
            y_ticks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn items(values: &[f64]) -> Vec<BarItem> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| BarItem {
                label: format!("n{i}"),
                value: v,
            })
            .collect()
    }

    fn chart<'a>(items: &'a [BarItem]) -> BarChart<'a> {
        BarChart {
            items,
            domain: ValueDomain::new(0.0, 120.0).unwrap(),
            width: 600,
            height: 300,
            unit: "k",
        }
    }

    #[test]
    fn bar_heights_scale_with_the_domain() {
        let items = items(&[0.0, 60.0, 120.0]);
        let scene = chart(&items).scene().unwrap();
        assert!((scene.bars[0].height - 0.0).abs() < EPS);
        assert!((scene.bars[1].height - 150.0).abs() < EPS);
        assert!((scene.bars[2].height - 300.0).abs() < EPS);
    }

    #[test]
    fn bars_are_evenly_spaced_within_slots() {
        let items = items(&[10.0, 20.0, 30.0]);
        let scene = chart(&items).scene().unwrap();
        let slot = 200.0;
        for (i, bar) in scene.bars.iter().enumerate() {
            assert!((bar.x - (i as f64 * slot + 40.0)).abs() < EPS);
            assert!((bar.width - 120.0).abs() < EPS);
        }
    }

    #[test]
    fn values_above_the_domain_clamp_to_full_height() {
        let items = items(&[500.0]);
        let scene = chart(&items).scene().unwrap();
        assert!((scene.bars[0].y - 0.0).abs() < EPS);
        assert!((scene.bars[0].height - 300.0).abs() < EPS);
    }

    #[test]
    fn empty_items_give_an_empty_scene() {
        let scene = chart(&[]).scene().unwrap();
        assert!(scene.bars.is_empty());
        assert!(scene.y_ticks.is_empty());
    }

    #[test]
    fn tick_labels_carry_the_unit() {
        let items = items(&[10.0]);
        let scene = chart(&items).scene().unwrap();
        assert_eq!(scene.y_ticks.len(), 5);
        assert_eq!(scene.y_ticks[4].label, "120.0k");
    }
}
