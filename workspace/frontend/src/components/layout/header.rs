use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::ThemeToggle;
use crate::Route;

fn nav_link(route: Route, label: &str, current: &Route) -> Html {
    let active = if *current == route {
        "text-indigo-600 dark:text-indigo-400 font-semibold"
    } else {
        "text-gray-600 dark:text-gray-300 hover:text-indigo-600 dark:hover:text-indigo-400"
    };
    html! {
        <Link<Route> to={route} classes={classes!("px-3", "py-2", "text-sm", "transition-colors", active)}>
            { label }
        </Link<Route>>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let current = use_route::<Route>().unwrap_or(Route::Home);

    html! {
        <header class="sticky top-0 z-40 bg-white dark:bg-gray-800 shadow-sm">
            <div class="container mx-auto px-4 flex items-center justify-between h-14">
                <Link<Route> to={Route::Home} classes="text-lg font-bold text-indigo-600 dark:text-indigo-400">
                    { "Inequality Forecast Dashboard" }
                </Link<Route>>
                <nav class="flex items-center gap-1">
                    { nav_link(Route::Home, "Home", &current) }
                    { nav_link(Route::Dashboard, "Dashboard", &current) }
                    { nav_link(Route::Neighborhoods, "Neighborhoods", &current) }
                    <ThemeToggle />
                </nav>
            </div>
        </header>
    }
}
