use crate::api_client::{get_json, ApiError};
use crate::pokedex::browser::PokedexQuery;
use crate::pokedex::models::{PokemonDetail, PokemonSummary};

pub async fn list_pokemon(query: &PokedexQuery) -> Result<Vec<PokemonSummary>, ApiError> {
    get_json(&format!("/api/pokedex{}", query.to_query_string())).await
}

pub async fn pokemon_detail(pokedex_number: u32) -> Result<PokemonDetail, ApiError> {
    get_json(&format!("/api/pokedex/{}", pokedex_number)).await
}
