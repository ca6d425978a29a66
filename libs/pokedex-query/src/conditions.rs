//! The `conditions` query-string bundle.

use serde::{Deserialize, Serialize};

use crate::decode::{decode_flag, decode_text};
use crate::param::Param;
use crate::query::{conditional_query, SearchQuery};

/// Raw values of the 13 condition parameters, as received.
///
/// Flags are kept as strings so that [`decode_flag`] alone decides what is
/// recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditions {
    pub ability_1: Option<String>,
    pub ability_2: Option<String>,
    pub hidden_ability: Option<String>,
    pub form: Option<String>,
    pub has_male: Option<String>,
    pub has_female: Option<String>,
    pub is_legendary: Option<String>,
    pub is_mega_evolution: Option<String>,
    pub is_mythical: Option<String>,
    pub type_1: Option<String>,
    pub type_2: Option<String>,
    pub is_primal_reversion: Option<String>,
    pub regional_variant: Option<String>,
}

impl Conditions {
    /// Every condition compiler, always all nine, in assembly order.
    pub fn params(&self) -> [Param; 9] {
        [
            Param::Abilities(
                decode_text(self.ability_1.as_deref()),
                decode_text(self.ability_2.as_deref()),
                decode_text(self.hidden_ability.as_deref()),
            ),
            Param::Form(decode_text(self.form.as_deref())),
            Param::GenderType(
                decode_flag(self.has_male.as_deref()),
                decode_flag(self.has_female.as_deref()),
            ),
            Param::Legendary(decode_flag(self.is_legendary.as_deref())),
            Param::MegaEvolution(decode_flag(self.is_mega_evolution.as_deref())),
            Param::Mythical(decode_flag(self.is_mythical.as_deref())),
            Param::PokemonType(
                decode_text(self.type_1.as_deref()),
                decode_text(self.type_2.as_deref()),
            ),
            Param::PrimalReversion(decode_flag(self.is_primal_reversion.as_deref())),
            Param::RegionalVariant(decode_text(self.regional_variant.as_deref())),
        ]
    }

    /// Assemble the conditional query for this bundle.
    pub fn to_query(&self) -> SearchQuery {
        conditional_query(&self.params())
    }

    /// Build the bundle from raw query-string pairs.
    ///
    /// A repeated parameter keeps its last value; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut conditions = Self::default();
        for (key, value) in pairs {
            if let Some(slot) = conditions.slot_mut(key.as_ref()) {
                *slot = Some(value.into());
            }
        }
        conditions
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        let slot = match key {
            "ability_1" => &mut self.ability_1,
            "ability_2" => &mut self.ability_2,
            "hidden_ability" => &mut self.hidden_ability,
            "form" => &mut self.form,
            "has_male" => &mut self.has_male,
            "has_female" => &mut self.has_female,
            "is_legendary" => &mut self.is_legendary,
            "is_mega_evolution" => &mut self.is_mega_evolution,
            "is_mythical" => &mut self.is_mythical,
            "type_1" => &mut self.type_1,
            "type_2" => &mut self.type_2,
            "is_primal_reversion" => &mut self.is_primal_reversion,
            "regional_variant" => &mut self.regional_variant,
            _ => return None,
        };
        Some(slot)
    }

    /// Number of parameters the caller actually supplied.
    pub fn supplied(&self) -> usize {
        [
            &self.ability_1,
            &self.ability_2,
            &self.hidden_ability,
            &self.form,
            &self.has_male,
            &self.has_female,
            &self.is_legendary,
            &self.is_mega_evolution,
            &self.is_mythical,
            &self.type_1,
            &self.type_2,
            &self.is_primal_reversion,
            &self.regional_variant,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
    }
}
