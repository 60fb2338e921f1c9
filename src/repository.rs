//! Read-only catalog access: query criteria and the repository seam.
use crate::card::{CardInfo, Rarity};
use serde::{Deserialize, Serialize};

/// Filter describing one catalog query. Build with the chaining setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCriteria {
    #[serde(default)]
    pub set_codes: Vec<String>,
    #[serde(default)]
    pub rarity: Option<Rarity>,
    #[serde(default)]
    pub land: Option<bool>,
    #[serde(default)]
    pub basic: Option<bool>,
    #[serde(default)]
    pub double_faced: Option<bool>,
    #[serde(default)]
    pub variable_art: Option<bool>,
    #[serde(default)]
    pub max_card_number: Option<u32>,
}

impl CardCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set_code(mut self, code: &str) -> Self {
        self.set_codes.push(code.to_string());
        self
    }

    #[must_use]
    pub fn set_codes(mut self, codes: &[String]) -> Self {
        self.set_codes.extend_from_slice(codes);
        self
    }

    #[must_use]
    pub const fn rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    #[must_use]
    pub const fn land(mut self, land: bool) -> Self {
        self.land = Some(land);
        self
    }

    #[must_use]
    pub const fn basic(mut self, basic: bool) -> Self {
        self.basic = Some(basic);
        self
    }

    #[must_use]
    pub const fn double_faced(mut self, double_faced: bool) -> Self {
        self.double_faced = Some(double_faced);
        self
    }

    #[must_use]
    pub const fn variable_art(mut self, variable_art: bool) -> Self {
        self.variable_art = Some(variable_art);
        self
    }

    #[must_use]
    pub const fn max_card_number(mut self, max: u32) -> Self {
        self.max_card_number = Some(max);
        self
    }

    /// Whether a card in the given set satisfies every configured filter.
    #[must_use]
    pub fn matches(&self, set_code: &str, card: &CardInfo) -> bool {
        if !self.set_codes.is_empty() && !self.set_codes.iter().any(|code| code == set_code) {
            return false;
        }
        if self.rarity.is_some_and(|rarity| rarity != card.rarity) {
            return false;
        }
        if self.land.is_some_and(|land| land != card.land) {
            return false;
        }
        if self.basic.is_some_and(|basic| basic != card.basic) {
            return false;
        }
        if self
            .double_faced
            .is_some_and(|double_faced| double_faced != card.double_faced)
        {
            return false;
        }
        if self
            .variable_art
            .is_some_and(|variable_art| variable_art != card.variable_art)
        {
            return false;
        }
        if self.max_card_number.is_some_and(|max| card.number_as_int() > max) {
            return false;
        }
        true
    }
}

/// Read seam over the backing card catalog.
///
/// Implementations must return a stable, finite collection for a given
/// criteria; an empty result is a valid answer, never an error.
pub trait CardRepository {
    fn find_cards(&self, criteria: &CardCriteria) -> Vec<CardInfo>;
}

/// In-memory catalog keyed by set code. Backs deterministic tests and
/// collaborators that carry their catalog as static data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryCardRepository {
    sets: Vec<(String, Vec<CardInfo>)>,
}

impl MemoryCardRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a set's cards under a code; appends if the code repeats.
    pub fn add_set(&mut self, code: &str, cards: Vec<CardInfo>) {
        if let Some((_, existing)) = self.sets.iter_mut().find(|(c, _)| c == code) {
            existing.extend(cards);
        } else {
            self.sets.push((code.to_string(), cards));
        }
    }

    /// Load a catalog from JSON of the form `{"SET": [cards...]}` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into card lists.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let sets: Vec<(String, Vec<CardInfo>)> = serde_json::from_str(json)?;
        Ok(Self { sets })
    }
}

impl CardRepository for MemoryCardRepository {
    fn find_cards(&self, criteria: &CardCriteria) -> Vec<CardInfo> {
        self.sets
            .iter()
            .flat_map(|(code, cards)| {
                cards
                    .iter()
                    .filter(|card| criteria.matches(code, card))
                    .cloned()
            })
            .collect()
    }
}
