use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod analytics;
mod config;
mod content;
mod counter;
mod slider;
mod contact {
    pub mod submission;
    pub mod validation;
}
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod gallery;
    pub mod hero_slider;
    pub mod nav;
    pub mod reveal;
    pub mod viewport;
}
mod pages {
    pub mod faq;
    pub mod home;
}

use components::nav::Nav;
use components::viewport::use_orientation_reset;
use pages::{faq::FaqPage, home::Home};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <FaqPage /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn Footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"© Cirebon Smart Farm · Teknologi Hidroponik Modern untuk Masa Depan Berkelanjutan"}</p>
            <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
        </footer>
    }
}


#[function_component]
fn App() -> Html {
    use_orientation_reset();

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("🌱 Cirebon Smart Farm");
    info!("Teknologi Hidroponik Modern untuk Masa Depan Berkelanjutan");
    yew::Renderer::<App>::new().render();
}
