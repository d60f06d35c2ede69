use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, warn};

mod config;
mod content;
mod error;
mod hooks;
mod reveal;
mod styles;
mod components {
    pub mod background;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod mouse_move_effect;
    pub mod navbar;
    pub mod portfolio;
    pub mod pricing;
    pub mod recent_work;
    pub mod reveal;
    pub mod services;
    pub mod testimonials;
    pub mod why_us;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let config = config::site_config();
    console_log::init_with_level(config.log_level).expect("error initializing log");

    if let Err(e) = styles::mount_global_styles() {
        error!("{}", e);
    }
    if let Err(e) = content::validate_all() {
        warn!("Content stagger is off: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
