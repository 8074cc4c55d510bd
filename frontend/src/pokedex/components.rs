use crate::pokedex::models::PokemonSummary;
use crate::pokedex::tables::{type_color, REGIONS};
use crate::router::Route;
use crate::utils::format_dex_number;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TypeBadgesProps {
    pub types: Vec<String>,
    #[prop_or(AttrValue::Static("px-2 py-1 text-xs"))]
    pub size: AttrValue,
}

#[function_component(TypeBadges)]
pub fn type_badges(props: &TypeBadgesProps) -> Html {
    html! {
        <div class="flex gap-1 flex-wrap">
            { for props.types.iter().map(|type_name| html! {
                <span key={type_name.clone()}
                      class={classes!("rounded-full", "font-semibold", "text-white", props.size.to_string(), type_color(type_name))}>
                    { type_name }
                </span>
            })}
        </div>
    }
}

/// G-Max wins over D-Max when both flags are set.
pub fn max_badge(can_dynamax: bool, can_gigantamax: bool) -> Option<(&'static str, &'static str)> {
    if can_gigantamax {
        Some(("G-Max", "bg-red-500"))
    } else if can_dynamax {
        Some(("D-Max", "bg-purple-500"))
    } else {
        None
    }
}

#[derive(Properties, PartialEq)]
pub struct PokemonCardProps {
    pub pokemon: PokemonSummary,
}

#[function_component(PokemonCard)]
pub fn pokemon_card(props: &PokemonCardProps) -> Html {
    let pokemon = &props.pokemon;

    html! {
        <Link<Route> to={Route::PokemonDetail { id: pokemon.pokedex_number }}
                     classes="bg-white rounded-xl shadow-md hover:shadow-xl transition-all duration-300 overflow-hidden group">
            <div class="relative aspect-square bg-gradient-to-br from-gray-50 to-gray-100">
                <img src={pokemon.image_url.clone()} alt={pokemon.name_ko.clone()}
                     class="w-full h-full object-contain p-4 group-hover:scale-110 transition-transform duration-300" />
                <div class="absolute top-2 right-2 bg-white/90 px-2 py-1 rounded-full text-xs font-bold text-gray-600">
                    { format_dex_number(pokemon.pokedex_number) }
                </div>
                {
                    match max_badge(pokemon.can_dynamax, pokemon.can_gigantamax) {
                        Some((label, color)) => html! {
                            <div class={classes!("absolute", "top-2", "left-2", "text-white", "px-2", "py-1", "rounded-full", "text-xs", "font-bold", "shadow-lg", color)}>
                                { label }
                            </div>
                        },
                        None => html! {},
                    }
                }
            </div>
            <div class="p-4">
                <h3 class="text-lg font-bold text-gray-800 mb-1">{ &pokemon.name_ko }</h3>
                <p class="text-xs text-gray-500 mb-2">{ &pokemon.name_en }</p>
                <TypeBadges types={pokemon.types.clone()} />
            </div>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub value: AttrValue,
    pub on_input: Callback<String>,
    pub on_search: Callback<()>,
    pub on_show_all: Callback<()>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(target.value());
        })
    };

    let on_key_press = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                on_search.emit(());
            }
        })
    };

    let on_click_search = {
        let on_search = props.on_search.clone();
        Callback::from(move |_: MouseEvent| on_search.emit(()))
    };

    let on_click_show_all = {
        let on_show_all = props.on_show_all.clone();
        Callback::from(move |_: MouseEvent| on_show_all.emit(()))
    };

    html! {
        <div class="mb-8 max-w-2xl mx-auto">
            <div class="flex gap-2">
                <input type="text"
                       placeholder="Search by Korean or English name"
                       value={props.value.clone()}
                       oninput={on_input}
                       onkeypress={on_key_press}
                       class="flex-1 px-4 py-3 border-2 border-yellow-300 rounded-lg focus:outline-none focus:border-yellow-500" />
                <button onclick={on_click_search}
                        class="px-6 py-3 bg-yellow-500 text-white font-semibold rounded-lg hover:bg-yellow-600 transition">
                    {"Search"}
                </button>
                <button onclick={on_click_show_all}
                        class="px-6 py-3 bg-gray-200 text-gray-700 font-semibold rounded-lg hover:bg-gray-300 transition">
                    {"Show all"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RegionChipsProps {
    pub selected: AttrValue,
    pub on_select: Callback<String>,
}

#[function_component(RegionChips)]
pub fn region_chips(props: &RegionChipsProps) -> Html {
    html! {
        <div class="mb-6 overflow-x-auto">
            <div class="flex gap-2 min-w-max justify-center pb-2">
                { for REGIONS.iter().map(|region| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let key = region.key;
                        Callback::from(move |_: MouseEvent| on_select.emit(key.to_string()))
                    };
                    let class = if props.selected.as_str() == region.key {
                        "px-6 py-2 rounded-full font-semibold transition bg-yellow-500 text-white shadow-lg"
                    } else {
                        "px-6 py-2 rounded-full font-semibold transition bg-white text-gray-600 hover:bg-yellow-100"
                    };
                    html! {
                        <button key={region.key} {onclick} {class}>
                            { region.name_ko }
                            <span class="text-xs ml-1 opacity-70">{ format!("({})", region.name_en) }</span>
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gigantamax_badge_wins() {
        assert_eq!(max_badge(true, true), Some(("G-Max", "bg-red-500")));
        assert_eq!(max_badge(true, false), Some(("D-Max", "bg-purple-500")));
        assert_eq!(max_badge(false, false), None);
    }
}
