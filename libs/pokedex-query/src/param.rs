//! Per-attribute clause compilers.
//!
//! Each [`Param`] variant holds the decoded input for one searchable
//! attribute. [`Compile::compile`] turns it into nothing (attribute not
//! constrained), a single clause, or a list of clauses for the multi-slot
//! attributes (gender, type, abilities).

use crate::clause::{Clause, MatchOperator};
use crate::decode::{decode_flag, decode_pokedex_number};

pub mod fields {
    //! Index field names.

    pub const NATIONAL_POKEDEX_NUMBER: &str = "national_pokedex_number";
    pub const NAME: &str = "name";
    pub const FORM: &str = "form.keyword";
    pub const REGIONAL_VARIANT: &str = "regional_variant.keyword";
    pub const IS_MEGA_EVOLUTION: &str = "is_mega_evolution";
    pub const IS_PRIMAL_REVERSION: &str = "is_primal_reversion";
    pub const IS_LEGENDARY: &str = "is_legendary";
    pub const IS_MYTHICAL: &str = "is_mythical";
    pub const HAS_MALE: &str = "gender_type.has_male";
    pub const HAS_FEMALE: &str = "gender_type.has_female";

    pub const POKEMON_TYPE: &[&str] = &["pokemon_type.type_1.keyword", "pokemon_type.type_2.keyword"];

    pub const ABILITIES: &[&str] = &[
        "abilities.ability_1.keyword",
        "abilities.ability_2.keyword",
        "abilities.hidden_ability.keyword",
    ];

    /// Analyzed fields searched by a free-text keyword.
    pub const KEYWORD: &[&str] = &[
        "abilities.ability_1",
        "abilities.ability_2",
        "abilities.hidden_ability",
        "form",
        "name",
        "pokemon_type.type_1",
        "pokemon_type.type_2",
        "regional_variant",
    ];
}

/// Output of a compiler that constrained its attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compiled {
    Single(Clause),
    /// One clause per supplied slot, in slot order. Never empty.
    Many(Vec<Clause>),
}

impl Compiled {
    /// Flatten into clauses, preserving order.
    pub fn into_clauses(self) -> Vec<Clause> {
        match self {
            Compiled::Single(clause) => vec![clause],
            Compiled::Many(clauses) => clauses,
        }
    }

    /// Take the clause out of a `Single`.
    pub fn into_single(self) -> Option<Clause> {
        match self {
            Compiled::Single(clause) => Some(clause),
            Compiled::Many(_) => None,
        }
    }

    fn from_slots(clauses: Vec<Clause>) -> Option<Self> {
        if clauses.is_empty() {
            None
        } else {
            Some(Compiled::Many(clauses))
        }
    }
}

/// Capability shared by every compiler: turn one raw input into clauses.
pub trait Compile {
    /// `None` means the attribute is not constrained.
    fn compile(&self) -> Option<Compiled>;
}

/// A searchable attribute and its decoded input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    PokedexNumber(Option<i64>),
    Name(Option<String>),
    Form(Option<String>),
    RegionalVariant(Option<String>),
    MegaEvolution(Option<bool>),
    PrimalReversion(Option<bool>),
    Legendary(Option<bool>),
    Mythical(Option<bool>),
    /// `(has_male, has_female)`
    GenderType(Option<bool>, Option<bool>),
    /// `(type_1, type_2)`
    PokemonType(Option<String>, Option<String>),
    /// `(ability_1, ability_2, hidden_ability)`
    Abilities(Option<String>, Option<String>, Option<String>),
    Keyword(String),
}

impl Param {
    /// Pokédex number from a raw string; a non-integer leaves it unconstrained.
    pub fn pokedex_number(raw: Option<&str>) -> Self {
        Param::PokedexNumber(decode_pokedex_number(raw))
    }

    pub fn mega_evolution(raw: Option<&str>) -> Self {
        Param::MegaEvolution(decode_flag(raw))
    }

    pub fn primal_reversion(raw: Option<&str>) -> Self {
        Param::PrimalReversion(decode_flag(raw))
    }

    pub fn legendary(raw: Option<&str>) -> Self {
        Param::Legendary(decode_flag(raw))
    }

    pub fn mythical(raw: Option<&str>) -> Self {
        Param::Mythical(decode_flag(raw))
    }

    pub fn gender_type(has_male: Option<&str>, has_female: Option<&str>) -> Self {
        Param::GenderType(decode_flag(has_male), decode_flag(has_female))
    }

    /// Attribute name, used in logs.
    pub fn attribute(&self) -> &'static str {
        match self {
            Param::PokedexNumber(_) => "pokedex_number",
            Param::Name(_) => "name",
            Param::Form(_) => "form",
            Param::RegionalVariant(_) => "regional_variant",
            Param::MegaEvolution(_) => "is_mega_evolution",
            Param::PrimalReversion(_) => "is_primal_reversion",
            Param::Legendary(_) => "is_legendary",
            Param::Mythical(_) => "is_mythical",
            Param::GenderType(..) => "gender_type",
            Param::PokemonType(..) => "pokemon_type",
            Param::Abilities(..) => "abilities",
            Param::Keyword(_) => "keyword",
        }
    }
}

impl Compile for Param {
    fn compile(&self) -> Option<Compiled> {
        match self {
            Param::PokedexNumber(number) => {
                number.map(|n| single(Clause::term(fields::NATIONAL_POKEDEX_NUMBER, n)))
            }
            Param::Name(name) => text_term(fields::NAME, name),
            Param::Form(form) => text_term(fields::FORM, form),
            Param::RegionalVariant(variant) => text_term(fields::REGIONAL_VARIANT, variant),
            Param::MegaEvolution(flag) => flag_term(fields::IS_MEGA_EVOLUTION, *flag),
            Param::PrimalReversion(flag) => flag_term(fields::IS_PRIMAL_REVERSION, *flag),
            Param::Legendary(flag) => flag_term(fields::IS_LEGENDARY, *flag),
            Param::Mythical(flag) => flag_term(fields::IS_MYTHICAL, *flag),
            Param::GenderType(has_male, has_female) => {
                let clauses = [(fields::HAS_MALE, has_male), (fields::HAS_FEMALE, has_female)]
                    .into_iter()
                    .filter_map(|(field, flag)| flag.map(|b| Clause::term(field, b)))
                    .collect();
                Compiled::from_slots(clauses)
            }
            Param::PokemonType(type_1, type_2) => {
                slot_matches(&[type_1, type_2], fields::POKEMON_TYPE)
            }
            Param::Abilities(ability_1, ability_2, hidden_ability) => slot_matches(
                &[ability_1, ability_2, hidden_ability],
                fields::ABILITIES,
            ),
            Param::Keyword(keyword) => Some(single(keyword_clause(keyword))),
        }
    }
}

/// Every keyword term must appear in at least one analyzed field.
pub(crate) fn keyword_clause(keyword: &str) -> Clause {
    Clause::multi_match(keyword, fields::KEYWORD).with_operator(MatchOperator::And)
}

fn single(clause: Clause) -> Compiled {
    Compiled::Single(clause)
}

fn text_term(field: &'static str, value: &Option<String>) -> Option<Compiled> {
    value.as_deref().map(|v| single(Clause::term(field, v)))
}

fn flag_term(field: &'static str, flag: Option<bool>) -> Option<Compiled> {
    flag.map(|b| single(Clause::term(field, b)))
}

/// One `multi_match` per non-null slot, each spanning all of `fields`.
fn slot_matches(slots: &[&Option<String>], fields: &'static [&'static str]) -> Option<Compiled> {
    let clauses = slots
        .iter()
        .filter_map(|slot| slot.as_deref())
        .map(|query| Clause::multi_match(query, fields))
        .collect();
    Compiled::from_slots(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn compiled_json(param: &Param) -> Option<Value> {
        param.compile().map(|compiled| match compiled {
            Compiled::Single(clause) => serde_json::to_value(clause).unwrap(),
            Compiled::Many(clauses) => serde_json::to_value(clauses).unwrap(),
        })
    }

    #[test]
    fn test_pokedex_number_from_string() {
        assert_eq!(
            compiled_json(&Param::pokedex_number(Some("1"))),
            Some(json!({"term": {"national_pokedex_number": 1}}))
        );
        assert_eq!(Param::pokedex_number(Some("test")).compile(), None);
        assert_eq!(Param::pokedex_number(None).compile(), None);
    }

    #[test]
    fn test_name_param() {
        assert_eq!(
            compiled_json(&Param::Name(Some("フシギダネ".into()))),
            Some(json!({"term": {"name": "フシギダネ"}}))
        );
        assert_eq!(Param::Name(None).compile(), None);
    }

    #[test]
    fn test_form_and_regional_variant_use_keyword_subfield() {
        assert_eq!(
            compiled_json(&Param::Form(Some("れいじゅうフォルム".into()))),
            Some(json!({"term": {"form.keyword": "れいじゅうフォルム"}}))
        );
        assert_eq!(
            compiled_json(&Param::RegionalVariant(Some("アローラのすがた".into()))),
            Some(json!({"term": {"regional_variant.keyword": "アローラのすがた"}}))
        );
        assert_eq!(Param::Form(None).compile(), None);
        assert_eq!(Param::RegionalVariant(None).compile(), None);
    }

    #[test]
    fn test_flag_params_three_way() {
        let cases: [(fn(Option<&str>) -> Param, &str); 4] = [
            (Param::mega_evolution, "is_mega_evolution"),
            (Param::primal_reversion, "is_primal_reversion"),
            (Param::legendary, "is_legendary"),
            (Param::mythical, "is_mythical"),
        ];

        for (build, field) in cases {
            assert_eq!(
                compiled_json(&build(Some("0"))),
                Some(json!({"term": {field: false}}))
            );
            assert_eq!(
                compiled_json(&build(Some("1"))),
                Some(json!({"term": {field: true}}))
            );
            for other in ["", "2", "true", "false"] {
                assert_eq!(build(Some(other)).compile(), None, "{field} = {other:?}");
            }
            assert_eq!(build(None).compile(), None);
        }
    }

    #[test]
    fn test_gender_type_combinations() {
        for (male, female) in [("0", "0"), ("0", "1"), ("1", "0"), ("1", "1")] {
            assert_eq!(
                compiled_json(&Param::gender_type(Some(male), Some(female))),
                Some(json!([
                    {"term": {"gender_type.has_male": male == "1"}},
                    {"term": {"gender_type.has_female": female == "1"}},
                ]))
            );
        }
    }

    #[test]
    fn test_gender_type_skips_unrecognized_slot() {
        assert_eq!(
            compiled_json(&Param::gender_type(Some("foo"), Some("1"))),
            Some(json!([{"term": {"gender_type.has_female": true}}]))
        );
        assert_eq!(Param::gender_type(Some("foo"), Some("bar")).compile(), None);
        assert_eq!(Param::gender_type(None, None).compile(), None);
    }

    #[test]
    fn test_pokemon_type_slots() {
        let fire = json!({
            "multi_match": {
                "query": "ほのお",
                "fields": ["pokemon_type.type_1.keyword", "pokemon_type.type_2.keyword"]
            }
        });
        let flying = json!({
            "multi_match": {
                "query": "ひこう",
                "fields": ["pokemon_type.type_1.keyword", "pokemon_type.type_2.keyword"]
            }
        });

        assert_eq!(
            compiled_json(&Param::PokemonType(Some("ほのお".into()), None)),
            Some(json!([fire.clone()]))
        );
        assert_eq!(
            compiled_json(&Param::PokemonType(None, Some("ひこう".into()))),
            Some(json!([flying.clone()]))
        );
        assert_eq!(
            compiled_json(&Param::PokemonType(Some("ほのお".into()), Some("ひこう".into()))),
            Some(json!([fire, flying]))
        );
        assert_eq!(Param::PokemonType(None, None).compile(), None);
    }

    #[test]
    fn test_abilities_slots_follow_non_null_positions() {
        let compiled = Param::Abilities(None, Some("するどいめ".into()), Some("にげあし".into()))
            .compile()
            .unwrap()
            .into_clauses();

        assert_eq!(compiled.len(), 2);
        assert_eq!(
            compiled[0],
            Clause::multi_match("するどいめ", fields::ABILITIES)
        );
        assert_eq!(compiled[1], Clause::multi_match("にげあし", fields::ABILITIES));
        assert_eq!(Param::Abilities(None, None, None).compile(), None);
    }

    #[test]
    fn test_keyword_uses_and_operator_over_eight_fields() {
        let value = compiled_json(&Param::Keyword("ピカチュウ".into())).unwrap();
        assert_eq!(value["multi_match"]["query"], json!("ピカチュウ"));
        assert_eq!(value["multi_match"]["operator"], json!("and"));
        assert_eq!(value["multi_match"]["fields"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_compile_is_idempotent() {
        let param = Param::Abilities(Some("しんりょく".into()), None, Some("ようりょくそ".into()));
        assert_eq!(param.compile(), param.compile());
    }
}
