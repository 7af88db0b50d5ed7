use data::format_count;
use model::DemographicsSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub name: String,
    pub summary: DemographicsSummary,
}

/// Demographics card for one neighborhood: headline population and
/// income figures plus the age and gender breakdowns.
#[function_component(DemographicsCard)]
pub fn demographics_card(props: &Props) -> Html {
    let summary = &props.summary;

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4">
            <h3 class="text-sm font-semibold mb-3">{ &props.name }</h3>
            <div class="grid grid-cols-2 gap-3 text-sm">
                <div>
                    <div class="text-gray-500 dark:text-gray-400 text-xs">{ "Population" }</div>
                    <div class="font-semibold">{ format_count(summary.total_population) }</div>
                </div>
                <div>
                    <div class="text-gray-500 dark:text-gray-400 text-xs">{ "Median Age" }</div>
                    <div class="font-semibold">{ format!("{:.1} years", summary.median_age) }</div>
                </div>
                if let Some(income) = summary.median_income {
                    <div>
                        <div class="text-gray-500 dark:text-gray-400 text-xs">{ "Median Income" }</div>
                        <div class="font-semibold">{ format!("${}", format_count(income)) }</div>
                    </div>
                }
                <div>
                    <div class="text-gray-500 dark:text-gray-400 text-xs">{ "Gender Ratio" }</div>
                    <div class="font-semibold">
                        { format!("{}% M / {}% F", summary.gender_ratio.male, summary.gender_ratio.female) }
                    </div>
                </div>
            </div>
            <div class="mt-3 flex gap-2 text-xs">
                <span class="px-2 py-1 rounded-full bg-indigo-50 dark:bg-indigo-900/30 text-indigo-700 dark:text-indigo-300">
                    { format!("Children {}%", summary.age_distribution.children) }
                </span>
                <span class="px-2 py-1 rounded-full bg-green-50 dark:bg-green-900/30 text-green-700 dark:text-green-300">
                    { format!("Working Age {}%", summary.age_distribution.working_age) }
                </span>
                <span class="px-2 py-1 rounded-full bg-amber-50 dark:bg-amber-900/30 text-amber-700 dark:text-amber-300">
                    { format!("Elderly {}%", summary.age_distribution.elderly) }
                </span>
            </div>
        </div>
    }
}
