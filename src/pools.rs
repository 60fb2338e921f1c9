//! Lazy per-rarity candidate pools, deduplicated and cached per engine.
use crate::card::{CardInfo, Rarity};
use crate::engine::BoosterEngine;
use crate::repository::{CardCriteria, CardRepository};
use std::collections::HashSet;
use std::sync::PoisonError;

/// Keep only the first printing of each canonical name, preserving the
/// repository's order as the stable tie-break.
fn dedup_by_name(cards: Vec<CardInfo>) -> Vec<CardInfo> {
    let mut seen = HashSet::new();
    cards
        .into_iter()
        .filter(|card| seen.insert(card.name.clone()))
        .collect()
}

fn same_printing(a: &CardInfo, b: &CardInfo) -> bool {
    a.name == b.name && a.number == b.number
}

impl<R: CardRepository> BoosterEngine<R> {
    /// Candidate pool for one rarity. Built on first call, then cached for
    /// the engine's lifetime; callers receive a copy they may consume
    /// freely without corrupting the cache.
    #[must_use]
    pub fn pool_for(&self, rarity: Rarity) -> Vec<CardInfo> {
        let mut pools = self
            .pools
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(pool) = pools.get(&rarity) {
            return pool.clone();
        }
        let pool = dedup_by_name(self.find_pool_cards(rarity));
        pools.insert(rarity, pool.clone());
        pool
    }

    /// Special-slot pool for one rarity: common nonbasic lands when the
    /// profile has a special land slot, and double-faced cards when it has
    /// a double-faced slot. Cached and copied like [`Self::pool_for`].
    ///
    /// Must stay on raw repository queries: the general pool subtracts
    /// this one, so routing through [`Self::pool_for`] would recurse.
    #[must_use]
    pub fn special_pool_for(&self, rarity: Rarity) -> Vec<CardInfo> {
        let mut pools = self
            .special_pools
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(pool) = pools.get(&rarity) {
            return pool.clone();
        }
        let pool = dedup_by_name(self.find_special_pool_cards(rarity));
        pools.insert(rarity, pool.clone());
        pool
    }

    fn find_pool_cards(&self, rarity: Rarity) -> Vec<CardInfo> {
        let profile = self.profile();

        // Basic lands come from the parent scope when the active set
        // carries none of its own.
        if rarity == Rarity::Land && !profile.has_basic_lands {
            if let Some(parent_code) = &self.scope().parent_code {
                let mut cards = self.repository().find_cards(
                    &CardCriteria::new()
                        .set_code(parent_code)
                        .rarity(Rarity::Land)
                        .max_card_number(profile.max_card_number),
                );
                cards.retain(|card| !card.has_marker_number());
                return cards;
            }
        }

        let mut cards = self.repository().find_cards(
            &CardCriteria::new()
                .set_code(&self.scope().code)
                .rarity(rarity)
                .max_card_number(profile.max_card_number),
        );
        cards.retain(|card| !card.has_marker_number());

        // Special-slot printings never double as regular-slot candidates;
        // special lands also stay out of the regular common slots.
        let mut special = self.special_pool_for(rarity);
        if rarity == Rarity::Common && profile.land_special_ratio > 0 {
            special.extend(self.special_pool_for(Rarity::Land));
        }
        cards.retain(|card| !special.iter().any(|other| same_printing(card, other)));
        cards
    }

    fn find_special_pool_cards(&self, rarity: Rarity) -> Vec<CardInfo> {
        let profile = self.profile();
        let mut cards = Vec::new();

        if rarity == Rarity::Land && profile.land_special_ratio > 0 {
            cards.extend(self.repository().find_cards(
                &CardCriteria::new()
                    .set_code(&self.scope().code)
                    .rarity(Rarity::Common)
                    .land(true)
                    .max_card_number(profile.max_card_number),
            ));
        }

        if profile.double_faced_count > 0 {
            cards.extend(self.repository().find_cards(
                &CardCriteria::new()
                    .set_code(&self.scope().code)
                    .rarity(rarity)
                    .double_faced(true)
                    .max_card_number(profile.max_card_number),
            ));
        }

        cards.retain(|card| !card.has_marker_number());
        cards
    }
}
