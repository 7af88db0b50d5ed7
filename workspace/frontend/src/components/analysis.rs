use data::analysis::analysis_for;
use model::{RegionView, Timeframe};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub region: RegionView,
    pub timeframe: Timeframe,
}

/// Pre-written analysis prose for the selected view, with the policy
/// note in a highlighted box beneath it.
#[function_component(AnalysisPanel)]
pub fn analysis_panel(props: &Props) -> Html {
    let analysis = analysis_for(props.region, props.timeframe);

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4">
            <h3 class="text-lg font-semibold mb-3">{ analysis.title }</h3>
            <div class="space-y-2 text-sm text-gray-700 dark:text-gray-300">
                { for analysis.paragraphs.iter().map(|p| html! { <p>{ p }</p> }) }
            </div>
            <div class="mt-4 p-3 rounded-md bg-blue-50 dark:bg-blue-900/30 text-sm text-blue-800 dark:text-blue-200">
                { analysis.policy_note }
            </div>
        </div>
    }
}
