use crate::analyzer::page::AnalyzerPage;
use crate::components::{Footer, PageHeader};
use crate::events::page::HomePage;
use crate::pokedex::detail::PokemonDetailPage;
use crate::pokedex::page::PokedexPage;
use crate::videos::page::VideosPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/analyzer")]
    Analyzer,
    #[at("/videos")]
    Videos,
    #[at("/pokedex")]
    Pokedex,
    #[at("/pokedex/:id")]
    PokemonDetail { id: u32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Analyzer => html! { <AnalyzerPage /> },
        Route::Videos => html! { <VideosPage /> },
        Route::Pokedex => html! { <PokedexPage /> },
        Route::PokemonDetail { id } => html! { <PokemonDetailPage id={id} /> },
        Route::NotFound => html! {
            <div class="min-h-screen bg-gray-50">
                <PageHeader
                    icon="❓"
                    title="Page not found"
                    subtitle="This page does not exist"
                    active={Route::NotFound}
                    theme="bg-gray-700"
                />
                <main class="container mx-auto px-4 py-20 text-center">
                    <h2 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h2>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to event news"}
                    </Link<Route>>
                </main>
                <Footer />
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_route_parses_dex_number() {
        assert_eq!(
            Route::recognize("/pokedex/149"),
            Some(Route::PokemonDetail { id: 149 })
        );
        assert_eq!(Route::PokemonDetail { id: 25 }.to_path(), "/pokedex/25");
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/raids"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/pokedex/pikachu"), Some(Route::NotFound));
    }
}
