//! Indexed documents, backend responses and the response record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderType {
    pub has_male: bool,
    pub has_female: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub type_1: String,
    pub type_2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Abilities {
    pub ability_1: String,
    pub ability_2: Option<String>,
    pub hidden_ability: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub special_attack: i64,
    pub special_defense: i64,
    pub speed: i64,
    pub base_total: i64,
}

/// A document as stored in the index (`_source`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDocument {
    pub national_pokedex_number: i64,
    pub name: String,
    pub form: Option<String>,
    pub regional_variant: Option<String>,
    pub is_mega_evolution: bool,
    pub is_primal_reversion: bool,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub height: f64,
    pub weight: f64,
    pub gender_type: GenderType,
    pub pokemon_type: PokemonType,
    pub abilities: Abilities,
    pub base_stats: BaseStats,
}

/// One entry of the lookup response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub national_pokedex_number: i64,
    pub name: String,
    pub form: Option<String>,
    pub regional_variant: Option<String>,
    pub is_mega_evolution: bool,
    pub is_primal_reversion: bool,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub height: f64,
    pub weight: f64,
    pub gender_type: GenderType,
    pub pokemon_type: PokemonType,
    pub abilities: Abilities,
    pub base_stats: BaseStats,
}

impl From<PokemonDocument> for PokemonRecord {
    fn from(doc: PokemonDocument) -> Self {
        Self {
            national_pokedex_number: doc.national_pokedex_number,
            name: doc.name,
            form: doc.form,
            regional_variant: doc.regional_variant,
            is_mega_evolution: doc.is_mega_evolution,
            is_primal_reversion: doc.is_primal_reversion,
            is_legendary: doc.is_legendary,
            is_mythical: doc.is_mythical,
            height: doc.height,
            weight: doc.weight,
            gender_type: doc.gender_type,
            pokemon_type: doc.pokemon_type,
            abilities: doc.abilities,
            base_stats: doc.base_stats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_source")]
    pub source: PokemonDocument,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hits {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

/// The parts of a `_search` response this service reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub took: Option<u64>,
    pub hits: Hits,
}

impl SearchResponse {
    pub fn from_hits(hits: Vec<SearchHit>) -> Self {
        Self {
            took: None,
            hits: Hits { hits },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.hits.is_empty()
    }

    pub fn into_hits(self) -> Vec<SearchHit> {
        self.hits.hits
    }
}

/// Copy every hit into a response record, in hit order.
pub fn reshape<I>(hits: I) -> Vec<PokemonRecord>
where
    I: IntoIterator<Item = SearchHit>,
{
    hits.into_iter()
        .map(|hit| PokemonRecord::from(hit.source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_response_deserializes_elasticsearch_shape() {
        let raw = json!({
            "took": 3,
            "timed_out": false,
            "hits": {
                "total": {"value": 0, "relation": "eq"},
                "max_score": null,
                "hits": []
            }
        });
        let response: SearchResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.took, Some(3));
        assert!(response.is_empty());
        assert!(reshape(response.into_hits()).is_empty());
    }

    #[test]
    fn test_missing_field_fails_deserialization() {
        let raw = json!({"hits": {"hits": [{"_source": {"name": "ミュウ"}}]}});
        assert!(serde_json::from_value::<SearchResponse>(raw).is_err());
    }
}
