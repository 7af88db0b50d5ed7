use model::FilterState;
use yew::prelude::*;

use crate::components::filters::FilterControls;
use crate::components::visualization::VisualizationPanel;

/// The main dashboard: filter state lives here and flows down to the
/// controls and the visualization panel.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let filters = use_state(FilterState::default);

    let on_change = {
        let filters = filters.clone();
        Callback::from(move |next: FilterState| filters.set(next))
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
            <aside class="lg:col-span-1">
                <FilterControls filters={(*filters).clone()} {on_change} />
            </aside>
            <div class="lg:col-span-3">
                <VisualizationPanel filters={(*filters).clone()} />
            </div>
        </div>
    }
}
