use model::{FilterState, MetricId, RegionView, Timeframe, MAX_YEAR, MIN_YEAR};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub filters: FilterState,
    pub on_change: Callback<FilterState>,
}

const REGIONS: [(RegionView, &str); 3] = [
    (RegionView::UnitedStates, "United States"),
    (RegionView::Washington, "Washington State"),
    (RegionView::Comparison, "Comparison"),
];

const TIMEFRAMES: [(Timeframe, &str); 3] = [
    (Timeframe::Current, "Current"),
    (Timeframe::Historical, "Historical"),
    (Timeframe::Forecast, "Forecast"),
];

/// Filter panel: region and timeframe button rows, metric checkboxes,
/// and the year range sliders. The state itself lives in the page; every
/// interaction emits a full updated copy through `on_change`.
#[function_component(FilterControls)]
pub fn filter_controls(props: &Props) -> Html {
    let filters = &props.filters;

    let select_region = |region: RegionView| {
        let filters = filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            let mut next = filters.clone();
            next.region = region;
            on_change.emit(next);
        })
    };

    let select_timeframe = |timeframe: Timeframe| {
        let filters = filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            let mut next = filters.clone();
            next.timeframe = timeframe;
            on_change.emit(next);
        })
    };

    let toggle_metric = |id: MetricId| {
        let filters = filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_| {
            let mut next = filters.clone();
            next.toggle_metric(id);
            on_change.emit(next);
        })
    };

    let on_year_start = {
        let filters = filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(year) = input.value().parse() {
                let mut next = filters.clone();
                next.set_year_start(year);
                on_change.emit(next);
            }
        })
    };

    let on_year_end = {
        let filters = filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(year) = input.value().parse() {
                let mut next = filters.clone();
                next.set_year_end(year);
                on_change.emit(next);
            }
        })
    };

    let mode_button = |active: bool| {
        if active {
            "px-3 py-1.5 text-sm rounded-md bg-indigo-600 text-white"
        } else {
            "px-3 py-1.5 text-sm rounded-md bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-200 hover:bg-gray-200 dark:hover:bg-gray-600"
        }
    };

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4 space-y-4">
            <div>
                <h3 class="text-sm font-semibold mb-2">{ "Region" }</h3>
                <div class="flex flex-wrap gap-2">
                    { for REGIONS.iter().map(|&(region, label)| html! {
                        <button
                            class={mode_button(filters.region == region)}
                            onclick={select_region(region)}
                        >
                            { label }
                        </button>
                    }) }
                </div>
            </div>

            <div>
                <h3 class="text-sm font-semibold mb-2">{ "Timeframe" }</h3>
                <div class="flex flex-wrap gap-2">
                    { for TIMEFRAMES.iter().map(|&(timeframe, label)| html! {
                        <button
                            class={mode_button(filters.timeframe == timeframe)}
                            onclick={select_timeframe(timeframe)}
                        >
                            { label }
                        </button>
                    }) }
                </div>
            </div>

            <div>
                <h3 class="text-sm font-semibold mb-2">{ "Metrics" }</h3>
                <div class="grid grid-cols-2 gap-1">
                    { for MetricId::ALL.iter().map(|&id| html! {
                        <label class="flex items-center gap-2 text-sm cursor-pointer">
                            <input
                                type="checkbox"
                                checked={filters.is_selected(id)}
                                onchange={toggle_metric(id)}
                                class="accent-indigo-600"
                            />
                            { id.label() }
                        </label>
                    }) }
                </div>
            </div>

            <div>
                <h3 class="text-sm font-semibold mb-2">
                    { format!("Years: {} - {}", filters.year_range.0, filters.year_range.1) }
                </h3>
                <div class="space-y-2">
                    <input
                        type="range"
                        min={MIN_YEAR.to_string()}
                        max={MAX_YEAR.to_string()}
                        value={filters.year_range.0.to_string()}
                        oninput={on_year_start}
                        class="w-full accent-indigo-600"
                    />
                    <input
                        type="range"
                        min={MIN_YEAR.to_string()}
                        max={MAX_YEAR.to_string()}
                        value={filters.year_range.1.to_string()}
                        oninput={on_year_end}
                        class="w-full accent-indigo-600"
                    />
                </div>
            </div>
        </div>
    }
}
