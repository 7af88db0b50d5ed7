mod footer;
mod header;

use yew::prelude::*;

use footer::Footer;
use header::Header;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Page shell: sticky header with navigation, the routed page content,
/// and the footer.
#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            <Header />
            <main class="flex-1 container mx-auto px-4 py-6">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
