mod analyzer;
mod api_client;
mod components;
mod env_variable_utils;
mod events;
mod logging;
mod pokedex;
mod request_sequence;
mod router;
mod subscription;
mod utils;
mod videos;

use crate::env_variable_utils::CONFIG;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    logging::init(CONFIG.debug_mode);

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        CONFIG.app_name,
        CONFIG.api_url,
        CONFIG.debug_mode
    );
}
