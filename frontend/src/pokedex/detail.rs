use crate::api_client::ApiError;
use crate::components::{Footer, PageHeader, Spinner};
use crate::pokedex::api::pokemon_detail;
use crate::pokedex::components::TypeBadges;
use crate::pokedex::models::{CounterTeam, CurrentSeason, Move, PokemonDetail};
use crate::request_sequence::{RequestSequence, RequestTicket};
use crate::router::Route;
use crate::utils::{format_dex_number, format_number};
use yew::prelude::*;
use yew_router::prelude::*;

pub const STAT_SCALE: u32 = 350;
pub const DETAIL_ERROR_MESSAGE: &str = "Failed to load Pokemon details.";
pub const NOT_FOUND_MESSAGE: &str = "Pokemon not found.";

pub fn stat_bar_width(value: u32) -> String {
    let percent = (value as f64 / STAT_SCALE as f64 * 100.0).min(100.0);
    format!("width: {:.1}%", percent)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailStatus {
    #[default]
    Loading,
    Failed(String),
    Loaded(Box<PokemonDetail>),
}

/// Detail state for one route parameter. Navigating between Pokémon reuses the
/// component, so completions are ticketed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailView {
    status: DetailStatus,
    requests: RequestSequence,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> RequestTicket {
        self.status = DetailStatus::Loading;
        self.requests.begin()
    }

    pub fn finish(&mut self, ticket: RequestTicket, outcome: Result<PokemonDetail, ApiError>) -> bool {
        if !self.requests.accept(ticket, "pokemon detail") {
            return false;
        }
        self.status = match outcome {
            Ok(detail) => DetailStatus::Loaded(Box::new(detail)),
            Err(ApiError::Status { status: 404, .. }) => DetailStatus::Failed(NOT_FOUND_MESSAGE.to_string()),
            Err(e) => {
                log::error!("Failed to load pokemon detail: {}", e);
                DetailStatus::Failed(DETAIL_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn status(&self) -> &DetailStatus {
        &self.status
    }
}

#[derive(Properties, PartialEq)]
pub struct PokemonDetailPageProps {
    pub id: u32,
}

#[function_component(PokemonDetailPage)]
pub fn pokemon_detail_page(props: &PokemonDetailPageProps) -> Html {
    let view = use_mut_ref(DetailView::new);
    let update = use_force_update();

    {
        let view = view.clone();
        let update = update.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            let ticket = view.borrow_mut().begin();
            update.force_update();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = pokemon_detail(id).await;
                if view.borrow_mut().finish(ticket, outcome) {
                    update.force_update();
                }
            });
            || ()
        });
    }

    let view = view.borrow();

    let content = match view.status() {
        DetailStatus::Loading => html! { <Spinner color="border-yellow-500" /> },
        DetailStatus::Failed(message) => html! {
            <div class="text-center py-20">
                <div class="text-6xl mb-4">{"😢"}</div>
                <p class="text-xl text-gray-600 mb-6">{ message }</p>
                <Link<Route> to={Route::Pokedex}
                             classes="px-6 py-3 bg-yellow-500 text-white font-semibold rounded-lg hover:bg-yellow-600 transition">
                    {"Back to Pokédex"}
                </Link<Route>>
            </div>
        },
        DetailStatus::Loaded(detail) => html! { <DetailBody detail={(**detail).clone()} /> },
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
                { content }
            </main>
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailBodyProps {
    detail: PokemonDetail,
}

#[function_component(DetailBody)]
fn detail_body(props: &DetailBodyProps) -> Html {
    let detail = &props.detail;

    let stat_row = |label: &str, value: u32, color: &str| {
        html! {
            <div class="mb-3">
                <div class="flex justify-between text-sm mb-1">
                    <span class="font-semibold text-gray-700">{ label.to_string() }</span>
                    <span class="text-gray-600">{ value.to_string() }</span>
                </div>
                <div class="w-full bg-gray-200 rounded-full h-3">
                    <div class={classes!("h-3", "rounded-full", color.to_string())} style={stat_bar_width(value)}></div>
                </div>
            </div>
        }
    };

    let teams = detail
        .raid_counters
        .as_ref()
        .map(|counters| counters.recommended_teams.clone())
        .unwrap_or_default();

    html! {
        <>
            <div class="mb-6">
                <Link<Route> to={Route::Pokedex} classes="text-yellow-700 hover:underline">
                    {"← Back to Pokédex"}
                </Link<Route>>
            </div>
            <div class="mb-6">
                <h2 class="text-3xl font-bold text-gray-800">
                    { format!("{} {}", format_dex_number(detail.pokedex_number), detail.name_ko) }
                </h2>
                <p class="text-sm text-gray-500">{ &detail.name_en }</p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <div>
                    <div class="bg-white rounded-xl shadow-lg p-8 mb-6">
                        <div class="relative aspect-square bg-gradient-to-br from-gray-50 to-gray-100 rounded-lg mb-4">
                            <img src={detail.image_url.clone()} alt={detail.name_ko.clone()}
                                 class="w-full h-full object-contain p-8" />
                        </div>
                        <div class="flex justify-center mb-4">
                            <TypeBadges types={detail.types.clone()} size="px-4 py-2 text-sm" />
                        </div>
                        <MaxCapability can_dynamax={detail.can_dynamax} can_gigantamax={detail.can_gigantamax} />
                    </div>

                    <div class="bg-white rounded-xl shadow-lg p-6 mb-6">
                        <h3 class="text-2xl font-bold mb-4 text-gray-800">{"Base stats"}</h3>
                        { stat_row("Attack", detail.base_attack, "bg-red-500") }
                        { stat_row("Defense", detail.base_defense, "bg-blue-500") }
                        { stat_row("Stamina", detail.base_stamina, "bg-green-500") }
                    </div>

                    <div class="bg-white rounded-xl shadow-lg p-6 mb-6">
                        <h3 class="text-2xl font-bold mb-4 text-gray-800">{"Raid 100% IV CP"}</h3>
                        <div class="grid grid-cols-2 gap-4 text-center">
                            <div class="p-4 bg-yellow-50 rounded-lg">
                                <div class="text-sm text-gray-600">{"Level 20"}</div>
                                <div class="text-2xl font-bold text-yellow-700">
                                    { format_number(detail.raid_perfect_cp.lv20_cp_100 as u64) }
                                </div>
                            </div>
                            <div class="p-4 bg-yellow-50 rounded-lg">
                                <div class="text-sm text-gray-600">{"Level 25 (weather boost)"}</div>
                                <div class="text-2xl font-bold text-yellow-700">
                                    { format_number(detail.raid_perfect_cp.lv25_cp_100 as u64) }
                                </div>
                            </div>
                        </div>
                    </div>

                    {
                        match &detail.current_season {
                            Some(season) => html! { <SeasonTiers season={season.clone()} /> },
                            None => html! {},
                        }
                    }
                </div>

                <div>
                    <MoveList title="Fast moves" moves={detail.moves_fast.clone()} />
                    <MoveList title="Charged moves" moves={detail.moves_charged.clone()} />
                    <RaidCounterTeams teams={teams} />
                    {
                        match &detail.evolutions {
                            Some(evolutions) if !evolutions.is_empty() => html! {
                                <div class="bg-white rounded-xl shadow-lg p-6 mt-6">
                                    <h3 class="text-2xl font-bold mb-4 text-gray-800">{"Evolutions"}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        { for evolutions.iter().map(|evolution| html! {
                                            <Link<Route> to={Route::PokemonDetail { id: evolution.pokedex_number }}
                                                         classes="px-3 py-2 bg-gray-100 rounded-lg hover:bg-yellow-100 transition">
                                                { format!("{} {}", format_dex_number(evolution.pokedex_number), evolution.name_ko) }
                                            </Link<Route>>
                                        })}
                                    </div>
                                </div>
                            },
                            _ => html! {},
                        }
                    }
                </div>
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct MaxCapabilityProps {
    can_dynamax: bool,
    can_gigantamax: bool,
}

#[function_component(MaxCapability)]
fn max_capability(props: &MaxCapabilityProps) -> Html {
    let (icon, label, class) = if props.can_gigantamax {
        ("⭐", "Gigantamax", "bg-gradient-to-r from-red-500 to-pink-500")
    } else if props.can_dynamax {
        ("💫", "Dynamax", "bg-gradient-to-r from-purple-500 to-indigo-500")
    } else {
        return html! {};
    };

    html! {
        <div class="flex justify-center">
            <div class={classes!("text-white", "px-4", "py-2", "rounded-lg", "font-bold", "text-sm", "shadow-lg", "flex", "items-center", "gap-2", class)}>
                <span class="text-2xl">{ icon }</span>
                <div>{ format!("{} capable", label) }</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MoveListProps {
    title: AttrValue,
    moves: Vec<Move>,
}

#[function_component(MoveList)]
fn move_list(props: &MoveListProps) -> Html {
    html! {
        <div class="bg-white rounded-xl shadow-lg p-6 mb-6">
            <h3 class="text-2xl font-bold mb-4 text-gray-800">{ props.title.clone() }</h3>
            {
                if props.moves.is_empty() {
                    html! { <p class="text-gray-500 text-sm">{"No move data"}</p> }
                } else {
                    html! {
                        <div class="space-y-2">
                            { for props.moves.iter().map(|m| html! {
                                <div key={m.move_id.clone()} class="flex items-center justify-between p-3 bg-gray-50 rounded-lg">
                                    <div class="flex items-center gap-2">
                                        <span class="font-semibold text-gray-800">{ &m.name_ko }</span>
                                        <span class="text-xs text-gray-500">{ &m.name_en }</span>
                                        <TypeBadges types={vec![m.move_type_name.clone()]} />
                                        {
                                            if m.is_legacy {
                                                html! { <span class="px-2 py-1 bg-orange-500 text-white rounded-full text-xs font-bold">{"Legacy"}</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                    <div class="text-sm text-gray-600">
                                        { format!(
                                            "Power {} · Energy {}",
                                            m.power.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
                                            m.energy.map(|e| e.to_string()).unwrap_or_else(|| "-".to_string())
                                        ) }
                                    </div>
                                </div>
                            })}
                        </div>
                    }
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RaidCounterTeamsProps {
    teams: Vec<CounterTeam>,
}

#[function_component(RaidCounterTeams)]
fn raid_counter_teams(props: &RaidCounterTeamsProps) -> Html {
    if props.teams.is_empty() {
        return html! {};
    }

    html! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <h3 class="text-2xl font-bold mb-4 text-gray-800">{"Raid counters"}</h3>
            <div class="space-y-4">
                { for props.teams.iter().map(|team| html! {
                    <div class="border-2 border-purple-200 rounded-lg p-4 bg-purple-50">
                        <h4 class="text-lg font-bold text-purple-800 mb-2">{ &team.name_ko }</h4>
                        {
                            match &team.description_ko {
                                Some(description) => html! { <p class="text-sm text-gray-600 mb-3">{ description }</p> },
                                None => html! {},
                            }
                        }
                        <div class="grid grid-cols-1 gap-2">
                            { for team.members.iter().map(|member| html! {
                                <div class="flex items-center justify-between p-2 bg-white rounded">
                                    <div class="flex items-center gap-2">
                                        <span class="font-semibold text-gray-800">{ &member.pokemon_name_ko }</span>
                                        <span class="text-xs text-gray-500">{ format!("({})", member.role_ko) }</span>
                                    </div>
                                    <div class="text-xs text-gray-600">{ member.moves_label() }</div>
                                </div>
                            })}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SeasonTiersProps {
    season: CurrentSeason,
}

#[function_component(SeasonTiers)]
fn season_tiers(props: &SeasonTiersProps) -> Html {
    let season = &props.season;
    let tier = |label: &str, value: &str| {
        html! {
            <div class="p-3 bg-indigo-50 rounded-lg text-center">
                <div class="text-xs text-gray-600">{ label.to_string() }</div>
                <div class="text-xl font-bold text-indigo-700">{ value.to_string() }</div>
            </div>
        }
    };

    html! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <h3 class="text-2xl font-bold mb-1 text-gray-800">{"Season tiers"}</h3>
            <p class="text-sm text-gray-500 mb-4">{ &season.season_name_ko }</p>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                { tier("Raid", &season.raid_tier) }
                { tier("Great League", &season.gbl_great_tier) }
                { tier("Ultra League", &season.gbl_ultra_tier) }
                { tier("Master League", &season.gbl_master_tier) }
            </div>
            {
                match (&season.raid_attack_tier, &season.raid_role_ko) {
                    (None, None) => html! {},
                    (attack_tier, role) => html! {
                        <p class="text-sm text-gray-600 mt-3">
                            { format!(
                                "Raid attacker tier: {} · Role: {}",
                                attack_tier.as_deref().unwrap_or("-"),
                                role.as_deref().unwrap_or("-")
                            ) }
                        </p>
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokedex::models::RaidPerfectCp;

    fn detail(number: u32) -> PokemonDetail {
        PokemonDetail {
            id: number as i64,
            pokedex_number: number,
            name_en: "Snorlax".to_string(),
            name_ko: "잠만보".to_string(),
            types: vec!["Normal".to_string()],
            base_attack: 190,
            base_defense: 169,
            base_stamina: 330,
            image_url: String::new(),
            sprite_url: None,
            can_dynamax: true,
            can_gigantamax: true,
            evolutions: None,
            moves_fast: Vec::new(),
            moves_charged: Vec::new(),
            raid_perfect_cp: RaidPerfectCp {
                lv20_cp_100: 1917,
                lv25_cp_100: 2396,
            },
            current_season: None,
            raid_counters: None,
        }
    }

    #[test]
    fn stat_bars_scale_to_350() {
        assert_eq!(stat_bar_width(175), "width: 50.0%");
        assert_eq!(stat_bar_width(414), "width: 100.0%");
        assert_eq!(stat_bar_width(0), "width: 0.0%");
    }

    #[test]
    fn begins_loading() {
        let mut view = DetailView::new();
        view.begin();
        assert_eq!(view.status(), &DetailStatus::Loading);
    }

    #[test]
    fn loaded_detail_is_stored() {
        let mut view = DetailView::new();
        let ticket = view.begin();
        assert!(view.finish(ticket, Ok(detail(143))));
        assert!(matches!(view.status(), DetailStatus::Loaded(d) if d.pokedex_number == 143));
    }

    #[test]
    fn missing_pokemon_is_reported() {
        let mut view = DetailView::new();
        let ticket = view.begin();
        view.finish(
            ticket,
            Err(ApiError::Status {
                status: 404,
                body: "Pokemon not found".to_string(),
            }),
        );
        assert_eq!(view.status(), &DetailStatus::Failed(NOT_FOUND_MESSAGE.to_string()));
    }

    #[test]
    fn other_failures_are_generic() {
        let mut view = DetailView::new();
        let ticket = view.begin();
        view.finish(ticket, Err(ApiError::Malformed("missing field".to_string())));
        assert_eq!(view.status(), &DetailStatus::Failed(DETAIL_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn previous_route_response_is_discarded() {
        let mut view = DetailView::new();
        let first = view.begin();
        let second = view.begin();
        assert!(view.finish(second, Ok(detail(6))));
        assert!(!view.finish(first, Ok(detail(3))));
        assert!(matches!(view.status(), DetailStatus::Loaded(d) if d.pokedex_number == 6));
    }
}
