use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod theme;

use components::layout::Layout;
use pages::dashboard::DashboardPage;
use pages::home::HomePage;
use pages::neighborhoods::NeighborhoodsPage;
use theme::ThemeProvider;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/neighborhoods")]
    Neighborhoods,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            html! { <Layout><HomePage /></Layout> }
        }
        Route::Dashboard => {
            html! { <Layout><DashboardPage /></Layout> }
        }
        Route::Neighborhoods => {
            html! { <Layout><NeighborhoodsPage /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout><h1 class="text-2xl font-bold p-8">{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ThemeProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    log::info!("=== Inequality Dashboard Starting ===");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
