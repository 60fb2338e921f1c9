//! Deterministic collation: precomputed slot sequences bypassing sampling.
use crate::card::{CardInfo, Rarity};
use crate::engine::{BoosterEngine, EngineError};
use crate::profile::SetScope;
use crate::repository::{CardCriteria, CardRepository};
use std::collections::HashMap;

/// Produces the next precomputed slot-identifier sequence. Identifiers are
/// collector numbers of the active scope, or `"{parent}_{number}"` for
/// basic lands borrowed from a parent scope.
///
/// Sequences are assumed pre-balanced; packs built from them skip the
/// color-balance validator entirely.
pub trait BoosterCollator {
    fn make_booster(&mut self) -> Vec<String>;
}

/// Collator cycling through a fixed list of sequences. Covers print-run
/// reconstructions that repeat after a full run, and makes the collated
/// path deterministic in tests.
#[derive(Debug, Clone)]
pub struct ScriptedCollator {
    sequences: Vec<Vec<String>>,
    next: usize,
}

impl ScriptedCollator {
    #[must_use]
    pub fn new(sequences: Vec<Vec<String>>) -> Self {
        Self { sequences, next: 0 }
    }
}

impl BoosterCollator for ScriptedCollator {
    fn make_booster(&mut self) -> Vec<String> {
        if self.sequences.is_empty() {
            return Vec::new();
        }
        let sequence = self.sequences[self.next % self.sequences.len()].clone();
        self.next += 1;
        sequence
    }
}

/// Build the collation identifier map for a scope: every card of the
/// active code keyed by collector number, plus parent-scope lands under
/// prefixed keys when the active set has no basic lands of its own.
fn build_collation_map<R: CardRepository>(
    repository: &R,
    scope: &SetScope,
    has_basic_lands: bool,
) -> HashMap<String, CardInfo> {
    let mut map = HashMap::new();
    for card in repository.find_cards(&CardCriteria::new().set_code(&scope.code)) {
        map.insert(card.number.clone(), card);
    }
    if !has_basic_lands {
        if let Some(parent_code) = &scope.parent_code {
            for card in repository.find_cards(
                &CardCriteria::new()
                    .set_code(parent_code)
                    .rarity(Rarity::Land),
            ) {
                map.insert(format!("{parent_code}_{}", card.number), card);
            }
        }
    }
    map
}

impl<R: CardRepository> BoosterEngine<R> {
    fn collation_map(&self) -> &HashMap<String, CardInfo> {
        self.booster_map.get_or_init(|| {
            build_collation_map(
                self.repository(),
                self.scope(),
                self.profile().has_basic_lands,
            )
        })
    }

    /// Resolve one collator sequence through the identifier map.
    ///
    /// An unresolvable identifier means the collator and the catalog
    /// disagree about the set's contents; that is a data error, not a
    /// degraded pack.
    pub(crate) fn map_collated_sequence(
        &self,
        sequence: &[String],
    ) -> Result<Vec<CardInfo>, EngineError> {
        let map = self.collation_map();
        sequence
            .iter()
            .map(|identifier| {
                map.get(identifier)
                    .cloned()
                    .ok_or_else(|| EngineError::UnknownSlotIdentifier(identifier.clone()))
            })
            .collect()
    }
}
