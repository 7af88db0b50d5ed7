use data::metrics;
use model::{MetricId, RegionId};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::Route;

/// Headline metrics shown on the landing page.
const HIGHLIGHTS: [MetricId; 3] = [MetricId::Gini, MetricId::PovertyRate, MetricId::WealthTop1];

fn stat_card(region: RegionId, id: MetricId) -> Html {
    let Some(metric) = metrics::metric(region, id) else {
        log::warn!("no metric entry for {region}/{id}");
        return html! {};
    };
    let value = if metric.unit.is_empty() {
        format!("{:.2}", metric.current_value)
    } else {
        format!("{:.1}{}", metric.current_value, metric.unit)
    };

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4">
            <h3 class="text-sm font-semibold">{ metric.name }</h3>
            <div class="text-3xl font-bold text-indigo-600 dark:text-indigo-400 my-1">{ value }</div>
            <p class="text-xs text-gray-500 dark:text-gray-400">{ metric.description }</p>
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let region = use_state(|| RegionId::UnitedStates);

    let region_button = |target: RegionId| {
        let active = *region == target;
        let region = region.clone();
        let class = if active {
            "px-3 py-1.5 text-sm rounded-md bg-indigo-600 text-white"
        } else {
            "px-3 py-1.5 text-sm rounded-md bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600"
        };
        html! {
            <button {class} onclick={Callback::from(move |_| region.set(target))}>
                { target.label() }
            </button>
        }
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="lg:col-span-2 space-y-6">
                <section class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                    <h1 class="text-2xl font-bold mb-2">{ "Economic Inequality, Now and Ahead" }</h1>
                    <p class="text-sm text-gray-600 dark:text-gray-300 mb-4">
                        { "Explore income and wealth inequality metrics for the United States and \
                           Washington State, with historical trends, forecasts through 2035, and \
                           Seattle neighborhood demographics." }
                    </p>
                    <div class="flex gap-3">
                        <Link<Route> to={Route::Dashboard}
                            classes="px-4 py-2 text-sm rounded-md bg-indigo-600 text-white hover:bg-indigo-700">
                            { "Open Dashboard" }
                        </Link<Route>>
                        <Link<Route> to={Route::Neighborhoods}
                            classes="px-4 py-2 text-sm rounded-md bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600">
                            { "Browse Neighborhoods" }
                        </Link<Route>>
                    </div>
                </section>

                <section>
                    <div class="flex items-center justify-between mb-3">
                        <h2 class="text-lg font-semibold">{ "Key Metrics" }</h2>
                        <div class="flex gap-2">
                            { region_button(RegionId::UnitedStates) }
                            { region_button(RegionId::Washington) }
                        </div>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        { for HIGHLIGHTS.iter().map(|&id| stat_card(*region, id)) }
                    </div>
                </section>
            </div>

            <aside>
                <ChatWidget />
            </aside>
        </div>
    }
}
