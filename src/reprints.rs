//! Post-assembly variant substitution for variable-art printings.
use crate::card::CardInfo;
use crate::engine::BoosterEngine;
use crate::repository::{CardCriteria, CardRepository};
use rand::Rng;
use std::collections::HashMap;

impl<R: CardRepository> BoosterEngine<R> {
    /// Swap variable-art cards for uniformly chosen variants sharing the
    /// same canonical name. No-op when the pack carries no variable-art
    /// printing at all.
    pub(crate) fn substitute_reprints<G: Rng>(
        &self,
        pack: Vec<CardInfo>,
        rng: &mut G,
    ) -> Vec<CardInfo> {
        if !pack.iter().any(|card| card.variable_art) {
            return pack;
        }
        let index = self.reprints();
        pack.into_iter()
            .map(|card| {
                if card.variable_art {
                    if let Some(variants) = index.get(&card.name) {
                        if variants.len() > 1 {
                            return variants[rng.gen_range(0..variants.len())].clone();
                        }
                    }
                }
                card
            })
            .collect()
    }

    /// Variable-art printings of the scope (and its parent), grouped by
    /// canonical name. Sets without alternate booster printings only get
    /// variants for basic lands. Built once per engine.
    fn reprints(&self) -> &HashMap<String, Vec<CardInfo>> {
        self.reprint_index.get_or_init(|| {
            let mut codes = vec![self.scope().code.clone()];
            if let Some(parent_code) = &self.scope().parent_code {
                codes.push(parent_code.clone());
            }
            let mut criteria = CardCriteria::new()
                .set_codes(&codes)
                .variable_art(true)
                .max_card_number(self.profile().max_card_number);
            if !self.profile().alternate_printings_allowed {
                criteria = criteria.basic(true);
            }

            let mut index: HashMap<String, Vec<CardInfo>> = HashMap::new();
            for card in self.repository().find_cards(&criteria) {
                index.entry(card.name.clone()).or_default().push(card);
            }
            index
        })
    }
}
