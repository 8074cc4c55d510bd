use crate::api_client::ApiError;
use crate::pokedex::models::PokemonSummary;
use crate::pokedex::tables::{find_region, ALL_REGIONS};
use crate::request_sequence::{RequestSequence, RequestTicket};

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load Pokemon data.";
pub const SEARCH_ERROR_MESSAGE: &str = "Search failed. Please try again.";

/// Parameters of one list request. At most one of the two is set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PokedexQuery {
    pub search: Option<String>,
    pub region: Option<String>,
}

impl PokedexQuery {
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(format!("search={}", urlencoding::encode(search)));
        }
        if let Some(region) = &self.region {
            params.push(format!("region={}", urlencoding::encode(region)));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// List state of the Pokédex page.
///
/// A non-empty search supersedes the region filter: submitting one resets the
/// region chip to "all", and picking a region drops the active search.
#[derive(Debug, Clone, PartialEq)]
pub struct PokedexBrowser {
    region: String,
    search: Option<String>,
    pokemon: Vec<PokemonSummary>,
    loading: bool,
    error: Option<String>,
    requests: RequestSequence,
}

impl Default for PokedexBrowser {
    fn default() -> Self {
        Self {
            region: ALL_REGIONS.to_string(),
            search: None,
            pokemon: Vec::new(),
            loading: false,
            error: None,
            requests: RequestSequence::new(),
        }
    }
}

impl PokedexBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load for the current state.
    pub fn load(&mut self) -> (RequestTicket, PokedexQuery) {
        self.loading = true;
        (self.requests.begin(), self.query())
    }

    pub fn select_region(&mut self, region: &str) -> (RequestTicket, PokedexQuery) {
        self.region = region.to_string();
        self.search = None;
        self.load()
    }

    pub fn search(&mut self, input: &str) -> (RequestTicket, PokedexQuery) {
        let term = input.trim();
        self.region = ALL_REGIONS.to_string();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_string())
        };
        self.load()
    }

    pub fn show_all(&mut self) -> (RequestTicket, PokedexQuery) {
        self.search("")
    }

    pub fn query(&self) -> PokedexQuery {
        match &self.search {
            Some(term) => PokedexQuery {
                search: Some(term.clone()),
                region: None,
            },
            None if self.region == ALL_REGIONS => PokedexQuery::default(),
            None => PokedexQuery {
                search: None,
                region: Some(self.region.clone()),
            },
        }
    }

    /// Commits a response if it belongs to the latest request. A failure keeps
    /// the previously loaded list.
    pub fn finish(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<Vec<PokemonSummary>, ApiError>,
    ) -> bool {
        if !self.requests.accept(ticket, "pokedex list") {
            return false;
        }
        self.loading = false;

        match outcome {
            Ok(mut pokemon) => {
                pokemon.sort_by_key(|p| p.pokedex_number);
                self.pokemon = pokemon;
                self.error = None;
            }
            Err(e) => {
                log::error!("Failed to load pokedex list: {}", e);
                self.error = Some(
                    if self.search.is_some() {
                        SEARCH_ERROR_MESSAGE
                    } else {
                        LOAD_ERROR_MESSAGE
                    }
                    .to_string(),
                );
            }
        }
        true
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn active_search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn pokemon(&self) -> &[PokemonSummary] {
        &self.pokemon
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.pokemon.is_empty()
    }

    /// Count line above the grid, naming the search term or region it came from.
    pub fn result_summary(&self) -> String {
        let count = self.pokemon.len();
        match (self.active_search(), find_region(&self.region)) {
            (Some(term), _) => format!("{} Pokemon matching \"{}\"", count, term),
            (None, Some(region)) if region.key != ALL_REGIONS => {
                format!("{} Pokemon from {}", count, region.name_en)
            }
            _ => format!("{} Pokemon", count),
        }
    }
}
