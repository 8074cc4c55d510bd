use crate::api_client::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PokemonSummary {
    pub id: i64,
    pub pokedex_number: u32,
    pub name_en: String,
    pub name_ko: String,
    pub types: Vec<String>,
    pub image_url: String,
    #[serde(default)]
    pub can_dynamax: bool,
    #[serde(default)]
    pub can_gigantamax: bool,
}

impl Validate for PokemonSummary {
    fn validate(&self) -> Result<(), String> {
        validate_dex_number(self.pokedex_number)
    }
}

fn validate_dex_number(number: u32) -> Result<(), String> {
    if number == 0 {
        Err("pokedex_number must be at least 1".to_string())
    } else {
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Move {
    pub move_id: String,
    pub name_en: String,
    pub name_ko: String,
    #[serde(rename = "type")]
    pub move_type_name: String,
    pub power: Option<i32>,
    pub energy: Option<i32>,
    pub move_type: String,
    #[serde(default)]
    pub is_legacy: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvolutionInfo {
    pub id: i64,
    pub pokedex_number: u32,
    pub name_en: String,
    pub name_ko: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RaidPerfectCp {
    pub lv20_cp_100: u32,
    pub lv25_cp_100: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentSeason {
    pub season_id: String,
    pub season_name_ko: String,
    pub raid_tier: String,
    pub raid_attack_tier: Option<String>,
    pub gbl_great_tier: String,
    pub gbl_ultra_tier: String,
    pub gbl_master_tier: String,
    pub raid_role_ko: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CounterMember {
    pub pokemon_id: i64,
    pub pokemon_name_ko: String,
    pub fast_move_id: String,
    pub charged_move_id: String,
    #[serde(default)]
    pub fast_move_name_ko: Option<String>,
    #[serde(default)]
    pub charged_move_name_ko: Option<String>,
    #[serde(default)]
    pub role_ko: String,
}

impl CounterMember {
    pub fn moves_label(&self) -> String {
        format!(
            "{} / {}",
            self.fast_move_name_ko.as_deref().unwrap_or(&self.fast_move_id),
            self.charged_move_name_ko.as_deref().unwrap_or(&self.charged_move_id)
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CounterTeam {
    pub name_ko: String,
    #[serde(default)]
    pub description_ko: Option<String>,
    #[serde(default)]
    pub members: Vec<CounterMember>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RaidCounters {
    #[serde(default)]
    pub boss_pokemon_id: Option<i64>,
    #[serde(default)]
    pub season_id: Option<String>,
    #[serde(default)]
    pub recommended_teams: Vec<CounterTeam>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PokemonDetail {
    pub id: i64,
    pub pokedex_number: u32,
    pub name_en: String,
    pub name_ko: String,
    pub types: Vec<String>,
    pub base_attack: u32,
    pub base_defense: u32,
    pub base_stamina: u32,
    pub image_url: String,
    pub sprite_url: Option<String>,
    #[serde(default)]
    pub can_dynamax: bool,
    #[serde(default)]
    pub can_gigantamax: bool,
    #[serde(default)]
    pub evolutions: Option<Vec<EvolutionInfo>>,
    pub moves_fast: Vec<Move>,
    pub moves_charged: Vec<Move>,
    pub raid_perfect_cp: RaidPerfectCp,
    pub current_season: Option<CurrentSeason>,
    pub raid_counters: Option<RaidCounters>,
}

impl Validate for PokemonDetail {
    fn validate(&self) -> Result<(), String> {
        validate_dex_number(self.pokedex_number)
    }
}
