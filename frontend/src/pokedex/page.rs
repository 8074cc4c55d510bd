use crate::components::{EmptyState, ErrorMessage, Footer, PageHeader, Spinner};
use crate::pokedex::api::list_pokemon;
use crate::pokedex::browser::{PokedexBrowser, PokedexQuery};
use crate::pokedex::components::{PokemonCard, RegionChips, SearchBar};
use crate::request_sequence::RequestTicket;
use crate::router::Route;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

fn spawn_list_load(
    browser: Rc<RefCell<PokedexBrowser>>,
    update: UseForceUpdateHandle,
    (ticket, query): (RequestTicket, PokedexQuery),
) {
    update.force_update();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = list_pokemon(&query).await;
        if browser.borrow_mut().finish(ticket, outcome) {
            update.force_update();
        }
    });
}

#[function_component(PokedexPage)]
pub fn pokedex_page() -> Html {
    let browser = use_mut_ref(PokedexBrowser::new);
    let update = use_force_update();
    let search_input = use_state(String::new);

    {
        let browser = browser.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            let request = browser.borrow_mut().load();
            spawn_list_load(browser, update, request);
            || ()
        });
    }

    let on_input = {
        let search_input = search_input.clone();
        Callback::from(move |value: String| search_input.set(value))
    };

    let on_search = {
        let browser = browser.clone();
        let update = update.clone();
        let search_input = search_input.clone();
        Callback::from(move |_: ()| {
            let request = browser.borrow_mut().search(&search_input);
            spawn_list_load(browser.clone(), update.clone(), request);
        })
    };

    let on_show_all = {
        let browser = browser.clone();
        let update = update.clone();
        let search_input = search_input.clone();
        Callback::from(move |_: ()| {
            search_input.set(String::new());
            let request = browser.borrow_mut().show_all();
            spawn_list_load(browser.clone(), update.clone(), request);
        })
    };

    let on_select_region = {
        let browser = browser.clone();
        let update = update.clone();
        let search_input = search_input.clone();
        Callback::from(move |region: String| {
            search_input.set(String::new());
            let request = browser.borrow_mut().select_region(&region);
            spawn_list_load(browser.clone(), update.clone(), request);
        })
    };

    let browser = browser.borrow();

    let content = if browser.is_loading() {
        html! { <Spinner color="border-yellow-500" /> }
    } else if browser.is_empty() {
        html! { <EmptyState icon="🔍" title="No Pokemon found" hint="Try another name or region" /> }
    } else {
        html! {
            <>
                <div class="text-center mb-4 text-gray-600">
                    { browser.result_summary() }
                </div>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-4">
                    { for browser.pokemon().iter().map(|pokemon| html! {
                        <PokemonCard key={pokemon.id} pokemon={pokemon.clone()} />
                    })}
                </div>
            </>
        }
    };

    html! {
        <div class="min-h-screen bg-gradient-to-b from-yellow-50 to-white">
            <PageHeader
                icon="📖"
                title="Pokédex"
                subtitle="Pokemon GO Pokédex"
                active={Route::Pokedex}
                theme="bg-gradient-to-r from-yellow-400 to-yellow-600"
            />

            <main class="container mx-auto px-4 py-8">
                <SearchBar
                    value={(*search_input).clone()}
                    on_input={on_input}
                    on_search={on_search}
                    on_show_all={on_show_all}
                />
                <RegionChips selected={browser.region().to_string()} on_select={on_select_region} />
                <ErrorMessage error_message={browser.error().map(str::to_string)} />
                { content }
            </main>

            <Footer />
        </div>
    }
}
