use chart::BarItem;
use data::{metrics, neighborhoods};
use model::{FilterState, Metric, RegionId, RegionView, Timeframe, ValueDomain};
use yew::prelude::*;

use super::analysis::AnalysisPanel;
use super::charts::{BarChartView, LineChartView};
use super::demographics::DemographicsCard;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub filters: FilterState,
}

/// Which region tables the current view draws from. The comparison view
/// renders both regions side by side.
fn regions(view: RegionView) -> Vec<RegionId> {
    match view {
        RegionView::UnitedStates => vec![RegionId::UnitedStates],
        RegionView::Washington => vec![RegionId::Washington],
        RegionView::Comparison => vec![RegionId::UnitedStates, RegionId::Washington],
    }
}

/// The visualization area of the dashboard: picks the chart set for the
/// selected timeframe and appends the matching analysis block.
#[function_component(VisualizationPanel)]
pub fn visualization_panel(props: &Props) -> Html {
    let filters = &props.filters;
    let regions = regions(filters.region);

    let body = match filters.timeframe {
        Timeframe::Current => current_view(&regions, filters),
        Timeframe::Historical => line_charts(&regions, filters, false),
        Timeframe::Forecast => line_charts(&regions, filters, true),
    };

    html! {
        <div class="space-y-4">
            { body }
            <AnalysisPanel region={filters.region} timeframe={filters.timeframe} />
        </div>
    }
}

fn format_current(metric: &Metric) -> String {
    if metric.unit.is_empty() {
        format!("{:.2}", metric.current_value)
    } else {
        format!("{:.1}{}", metric.current_value, metric.unit)
    }
}

/// Current view: stat cards for the selected metrics, the neighborhood
/// income bar chart, and the demographics cards.
fn current_view(regions: &[RegionId], filters: &FilterState) -> Html {
    let cards = regions.iter().flat_map(|&region| {
        metrics::region_metrics(region)
            .into_iter()
            .filter(|m| filters.is_selected(m.id))
            .map(move |m| {
                html! {
                    <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4">
                        <div class="text-xs text-gray-500 dark:text-gray-400">{ region.label() }</div>
                        <h3 class="text-sm font-semibold">{ m.name.clone() }</h3>
                        <div class="text-2xl font-bold text-indigo-600 dark:text-indigo-400 my-1">
                            { format_current(&m) }
                        </div>
                        <p class="text-xs text-gray-500 dark:text-gray-400">{ m.description.clone() }</p>
                    </div>
                }
            })
    });

    let income_bars: Vec<BarItem> = neighborhoods::records()
        .iter()
        .filter_map(|r| {
            r.median_income.map(|income| BarItem {
                label: r.name.clone(),
                value: f64::from(income) / 1000.0,
            })
        })
        .collect();

    let demographics = neighborhoods::records().into_iter().map(|r| {
        let summary = r.summary();
        html! { <DemographicsCard name={r.name.clone()} summary={summary} /> }
    });

    html! {
        <>
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
                { for cards }
            </div>
            <BarChartView
                title="Median Household Income by Neighborhood ($k)"
                items={income_bars}
                domain={ValueDomain { min: 0.0, max: 120.0 }}
                unit="k"
            />
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                { for demographics }
            </div>
        </>
    }
}

/// Historical and forecast views: one line chart per selected metric and
/// region, restricted to the chosen year range.
fn line_charts(regions: &[RegionId], filters: &FilterState, with_forecast: bool) -> Html {
    let (start, end) = filters.year_range;

    let charts = regions.iter().flat_map(|&region| {
        metrics::region_metrics(region)
            .into_iter()
            .filter(|m| filters.is_selected(m.id))
            .map(move |m| {
                let historical = m.historical.restricted(start, end);
                let forecast = with_forecast.then(|| m.forecast.restricted(start, end));
                html! {
                    <LineChartView
                        title={format!("{} - {}", m.name, region.label())}
                        historical={historical}
                        forecast={forecast}
                        domain={m.domain}
                        unit={m.unit.clone()}
                    />
                }
            })
    });

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
            { for charts }
        </div>
    }
}
