//! Single-attempt slot filling: one unvalidated pack per call.
use crate::card::{CardInfo, Rarity};
use crate::engine::BoosterEngine;
use crate::repository::CardRepository;
use rand::Rng;
use std::collections::HashMap;

/// Weighted rarity span for the double-faced slot, 66:42:12:1.
const DOUBLE_FACED_SPAN: u32 = 121;

/// Remove and return a uniformly chosen card; `None` on an exhausted pool.
pub(crate) fn draw_from<G: Rng>(pool: &mut Vec<CardInfo>, rng: &mut G) -> Option<CardInfo> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(index))
}

/// Roll a `1/ratio` chance; a ratio of zero never hits.
fn ratio_hits<G: Rng>(ratio: f64, rng: &mut G) -> bool {
    ratio > 0.0 && ratio * rng.gen_range(0.0..1.0) <= 1.0
}

const fn double_faced_rarity(roll: u32) -> Rarity {
    if roll < 66 {
        Rarity::Common
    } else if roll < 108 {
        Rarity::Uncommon
    } else if roll < 120 {
        Rarity::Rare
    } else {
        Rarity::Mythic
    }
}

impl<R: CardRepository> BoosterEngine<R> {
    /// Fill one pack by the profile's slot plan, without validation.
    ///
    /// Each slot type samples without replacement from a private pool
    /// copy; an exhausted pool simply stops yielding, leaving the pack
    /// short rather than erroring.
    pub(crate) fn try_fill<G: Rng>(&self, rng: &mut G) -> Vec<CardInfo> {
        let profile = self.profile().clone();
        let mut pack = Vec::with_capacity(profile.nominal_size() as usize);

        if profile.land_count > 0 {
            let mut special_lands = self.special_pool_for(Rarity::Land);
            let mut basic_lands = self.pool_for(Rarity::Land);
            for _ in 0..profile.land_count {
                let take_special = profile.land_special_ratio > 0
                    && rng.gen_range(0..profile.land_special_ratio)
                        < profile.land_special_numerator;
                let pool = if take_special {
                    &mut special_lands
                } else {
                    &mut basic_lands
                };
                if let Some(card) = draw_from(pool, rng) {
                    pack.push(card);
                }
            }
        }

        let mut commons_to_draw = profile.common_count;
        let mut specials_to_draw = profile.special_count;
        if profile.common_special_ratio > 0 && rng.gen_range(0..profile.common_special_ratio) < 1 {
            commons_to_draw = commons_to_draw.saturating_sub(1);
            specials_to_draw += 1;
        }

        let mut commons = self.pool_for(Rarity::Common);
        for _ in 0..commons_to_draw {
            if let Some(card) = draw_from(&mut commons, rng) {
                pack.push(card);
            }
        }

        let mut uncommons_to_draw = profile.uncommon_count;
        let mut rares_to_draw = profile.rare_count;
        if profile.rare_special_ratio > 0.0 {
            let special_rarity = if ratio_hits(profile.rare_special_ratio, rng) {
                rares_to_draw = rares_to_draw.saturating_sub(1);
                if ratio_hits(profile.rare_special_mythic_ratio, rng) {
                    Rarity::Mythic
                } else {
                    Rarity::Rare
                }
            } else {
                uncommons_to_draw = uncommons_to_draw.saturating_sub(1);
                Rarity::Uncommon
            };
            let mut pool = self.special_pool_for(special_rarity);
            if let Some(card) = draw_from(&mut pool, rng) {
                pack.push(card);
            }
        }

        let mut uncommons = self.pool_for(Rarity::Uncommon);
        for _ in 0..uncommons_to_draw {
            if let Some(card) = draw_from(&mut uncommons, rng) {
                pack.push(card);
            }
        }

        if rares_to_draw > 0 {
            let mut rares = self.pool_for(Rarity::Rare);
            let mut mythics = self.pool_for(Rarity::Mythic);
            for _ in 0..rares_to_draw {
                let pool = if ratio_hits(profile.mythic_ratio, rng) {
                    &mut mythics
                } else {
                    &mut rares
                };
                if let Some(card) = draw_from(pool, rng) {
                    pack.push(card);
                }
            }
        }

        if profile.double_faced_count > 0 {
            // One shared copy per rarity so repeated double-faced draws
            // stay without-replacement within the attempt.
            let mut dfc_pools: HashMap<Rarity, Vec<CardInfo>> = HashMap::new();
            for _ in 0..profile.double_faced_count {
                let rarity = double_faced_rarity(rng.gen_range(0..DOUBLE_FACED_SPAN));
                let pool = dfc_pools
                    .entry(rarity)
                    .or_insert_with(|| self.special_pool_for(rarity));
                if let Some(card) = draw_from(pool, rng) {
                    pack.push(card);
                }
            }
        }

        if specials_to_draw > 0 {
            let mut specials = self.pool_for(Rarity::Special);
            for _ in 0..specials_to_draw {
                if let Some(card) = draw_from(&mut specials, rng) {
                    pack.push(card);
                }
            }
        }

        pack
    }
}
