use data::neighborhoods::{self, NeighborhoodMetric, CATALOG};
use model::{Series, ValueDomain};
use yew::prelude::*;

use crate::components::charts::LineChartView;
use crate::components::demographics::DemographicsCard;

/// Axis domain for a neighborhood trend chart, derived from the tabled
/// values with headroom above the peak.
fn trend_domain(historical: &Series, forecast: &Series) -> Option<ValueDomain> {
    let max = historical
        .points()
        .iter()
        .chain(forecast.points())
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    (max > 0.0).then(|| ValueDomain {
        min: 0.0,
        max: max * 1.2,
    })
}

fn trend_chart(name: &str, metric: NeighborhoodMetric) -> Html {
    let (Some(historical), Some(forecast)) = (
        neighborhoods::history(name, metric),
        neighborhoods::forecast(name, metric),
    ) else {
        return html! {};
    };
    let Some(domain) = trend_domain(&historical, &forecast) else {
        log::warn!("no positive values in {name}/{metric} trend tables");
        return html! {};
    };

    html! {
        <LineChartView
            title={format!("{name} - {}", metric.label())}
            historical={historical}
            forecast={Some(forecast)}
            {domain}
            unit={metric.unit()}
        />
    }
}

#[function_component(NeighborhoodsPage)]
pub fn neighborhoods_page() -> Html {
    let selected = use_state(|| CATALOG[0].name);

    let cards = CATALOG.iter().map(|info| {
        let active = *selected == info.name;
        let class = if active {
            "text-left bg-white dark:bg-gray-800 rounded-lg shadow p-4 ring-2 ring-indigo-600"
        } else {
            "text-left bg-white dark:bg-gray-800 rounded-lg shadow p-4 hover:ring-1 hover:ring-indigo-400"
        };
        let onclick = {
            let selected = selected.clone();
            let name = info.name;
            Callback::from(move |_| selected.set(name))
        };
        html! {
            <button {class} {onclick}>
                <h3 class="text-sm font-semibold">{ info.name }</h3>
                <p class="text-xs text-gray-500 dark:text-gray-400 mt-1">{ info.description }</p>
            </button>
        }
    });

    let detail = match neighborhoods::summary(*selected) {
        Some(summary) => html! {
            <>
                <DemographicsCard name={selected.to_string()} summary={summary} />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                    { trend_chart(*selected, NeighborhoodMetric::Population) }
                    { trend_chart(*selected, NeighborhoodMetric::MedianIncome) }
                </div>
            </>
        },
        // Catalog entries without a demographics record stay browsable.
        None => html! {
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 text-sm text-gray-500 dark:text-gray-400">
                { format!("Detailed demographic data for {} isn't available yet.", *selected) }
            </div>
        },
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{ "Seattle Neighborhoods" }</h1>
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
                { for cards }
            </div>
            { detail }
        </div>
    }
}
