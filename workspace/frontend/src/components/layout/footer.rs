use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-white dark:bg-gray-800 border-t border-gray-200 dark:border-gray-700">
            <div class="container mx-auto px-4 py-4 text-center text-sm text-gray-500 dark:text-gray-400">
                { "© 2025 Inequality Forecast Dashboard | Data is simulated for demonstration purposes" }
            </div>
        </footer>
    }
}
