use crate::api_client::Validate;
use serde::{Deserialize, Serialize};

pub const MAX_IV: u8 = 15;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Recommendations {
    #[serde(default)]
    pub should_power_up: bool,
    #[serde(default)]
    pub best_use_case: String,
    #[serde(default)]
    pub move_recommendations: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Server-computed analysis of one screenshot. Rendered as-is.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisResult {
    pub id: i64,
    pub pokemon_name: Option<String>,
    pub cp: Option<i64>,
    pub hp: Option<i64>,
    pub level: Option<f64>,
    pub iv_percentage: Option<f64>,
    pub attack_iv: Option<u8>,
    pub defense_iv: Option<u8>,
    pub stamina_iv: Option<u8>,
    pub battle_rating: Option<String>,
    pub raid_rating: Option<String>,
    pub recommendations: Option<Recommendations>,
    pub analyzed_at: String,
}

impl Validate for AnalysisResult {
    fn validate(&self) -> Result<(), String> {
        for (name, iv) in [
            ("attack_iv", self.attack_iv),
            ("defense_iv", self.defense_iv),
            ("stamina_iv", self.stamina_iv),
        ] {
            if let Some(iv) = iv {
                if iv > MAX_IV {
                    return Err(format!("{name} {iv} exceeds {MAX_IV}"));
                }
            }
        }
        if let Some(percentage) = self.iv_percentage {
            if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
                return Err(format!("iv_percentage {percentage} outside 0..=100"));
            }
        }
        if let Some(level) = self.level {
            if !level.is_finite() || level <= 0.0 {
                return Err(format!("level {level} is not positive"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::{decode, ApiError};

    const BODY: &str = r#"{
        "id": 42, "pokemon_name": "Dragonite", "cp": 3792, "hp": 189, "level": 40.0,
        "iv_percentage": 97.8, "attack_iv": 15, "defense_iv": 14, "stamina_iv": 15,
        "battle_rating": "A+", "raid_rating": "A",
        "recommendations": {
            "should_power_up": true, "best_use_case": "Raids",
            "move_recommendations": ["Dragon Tail", "Outrage"], "notes": []
        },
        "analyzed_at": "2024-06-01T10:00:00"
    }"#;

    #[test]
    fn decodes_full_result() {
        let result: AnalysisResult = decode(BODY).unwrap();
        assert_eq!(result.pokemon_name.as_deref(), Some("Dragonite"));
        assert_eq!(result.attack_iv, Some(15));
        let recommendations = result.recommendations.unwrap();
        assert!(recommendations.should_power_up);
        assert_eq!(recommendations.move_recommendations.len(), 2);
    }

    #[test]
    fn decodes_sparse_result() {
        let body = r#"{"id": 1, "pokemon_name": null, "cp": null, "hp": null, "level": null,
            "iv_percentage": null, "attack_iv": null, "defense_iv": null, "stamina_iv": null,
            "battle_rating": null, "raid_rating": null, "recommendations": {"notes": ["blurry"]},
            "analyzed_at": "2024-06-01T10:00:00"}"#;
        let result: AnalysisResult = decode(body).unwrap();
        assert_eq!(result.cp, None);
        assert_eq!(result.recommendations.unwrap().notes, vec!["blurry".to_string()]);
    }

    #[test]
    fn iv_above_fifteen_is_malformed() {
        let body = BODY.replace("\"defense_iv\": 14", "\"defense_iv\": 16");
        let result: Result<AnalysisResult, _> = decode(&body);
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn percentage_above_hundred_is_malformed() {
        let body = BODY.replace("97.8", "104.4");
        let result: Result<AnalysisResult, _> = decode(&body);
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }

    #[test]
    fn negative_iv_fails_to_decode() {
        let body = BODY.replace("\"attack_iv\": 15", "\"attack_iv\": -1");
        let result: Result<AnalysisResult, _> = decode(&body);
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }
}
