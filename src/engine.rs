//! Booster assembly engine: retry orchestration and size normalization.
use crate::card::{CardInfo, Rarity};
use crate::collator::BoosterCollator;
use crate::profile::{PackProfile, SetScope};
use crate::repository::CardRepository;
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

/// Upper bound on fill attempts before settling for an unbalanced pack.
pub const MAX_FILL_ATTEMPTS: u32 = 100;

/// Fatal assembly errors. Degraded outcomes (short packs, unbalanced
/// fallbacks) are not errors; only catalog inconsistencies are.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A collator sequence referenced a slot identifier with no catalog
    /// entry; the collator and catalog disagree about the set contents.
    #[error("collator slot identifier `{0}` has no catalog entry")]
    UnknownSlotIdentifier(String),
}

/// How the returned pack was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackQuality {
    /// Passed both color-balance rules.
    Balanced,
    /// No attempt passed validation within the retry bound; the last
    /// attempt is returned as-is.
    BestEffort,
    /// Produced by a precomputed collator sequence; validation skipped.
    Collated,
}

/// One assembled pack plus how it came to be.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledPack {
    pub cards: Vec<CardInfo>,
    pub quality: PackQuality,
    /// Fill attempts performed; zero on the collator path and for
    /// profiles without boosters.
    pub attempts: u32,
}

/// Assembles packs for one profile over one catalog scope.
///
/// All lazy state (rarity pools, the collator identifier map, the reprint
/// index) is built once per engine instance and shared by concurrent
/// callers; each fill attempt samples from private pool copies.
pub struct BoosterEngine<R: CardRepository> {
    repository: R,
    scope: SetScope,
    profile: PackProfile,
    pub(crate) pools: Mutex<HashMap<Rarity, Vec<CardInfo>>>,
    pub(crate) special_pools: Mutex<HashMap<Rarity, Vec<CardInfo>>>,
    pub(crate) booster_map: OnceLock<HashMap<String, CardInfo>>,
    pub(crate) reprint_index: OnceLock<HashMap<String, Vec<CardInfo>>>,
    collator: Option<Mutex<Box<dyn BoosterCollator + Send>>>,
}

impl<R: CardRepository> BoosterEngine<R> {
    #[must_use]
    pub fn new(repository: R, scope: SetScope, profile: PackProfile) -> Self {
        Self {
            repository,
            scope,
            profile,
            pools: Mutex::new(HashMap::new()),
            special_pools: Mutex::new(HashMap::new()),
            booster_map: OnceLock::new(),
            reprint_index: OnceLock::new(),
            collator: None,
        }
    }

    /// Attach a collator; assembly then follows the precomputed sequence
    /// unconditionally instead of sampling and validating.
    #[must_use]
    pub fn with_collator(mut self, collator: Box<dyn BoosterCollator + Send>) -> Self {
        self.collator = Some(Mutex::new(collator));
        self
    }

    #[must_use]
    pub fn profile(&self) -> &PackProfile {
        &self.profile
    }

    #[must_use]
    pub fn scope(&self) -> &SetScope {
        &self.scope
    }

    pub(crate) fn repository(&self) -> &R {
        &self.repository
    }

    /// Assemble one pack.
    ///
    /// Samples and validates up to [`MAX_FILL_ATTEMPTS`] times, then falls
    /// back to the last attempt rather than failing; reprint substitution
    /// runs on whichever pack is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownSlotIdentifier`] when a configured
    /// collator emits an identifier absent from the catalog.
    pub fn assemble<G: Rng>(&self, rng: &mut G) -> Result<AssembledPack, EngineError> {
        if !self.profile.has_boosters {
            return Ok(AssembledPack {
                cards: Vec::new(),
                quality: PackQuality::Balanced,
                attempts: 0,
            });
        }

        if let Some(collator) = &self.collator {
            let sequence = {
                let mut collator = collator
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                collator.make_booster()
            };
            let cards = self.map_collated_sequence(&sequence)?;
            return Ok(AssembledPack {
                cards,
                quality: PackQuality::Collated,
                attempts: 0,
            });
        }

        let mut last_attempt = Vec::new();
        for attempt in 1..=MAX_FILL_ATTEMPTS {
            let pack = self.try_fill(rng);
            if self.pack_is_valid(&pack, rng) {
                return Ok(AssembledPack {
                    cards: self.substitute_reprints(pack, rng),
                    quality: PackQuality::Balanced,
                    attempts: attempt,
                });
            }
            last_attempt = pack;
        }

        log::error!(
            "no balanced booster for set [{}] within {MAX_FILL_ATTEMPTS} attempts, returning last",
            self.scope.code
        );
        Ok(AssembledPack {
            cards: self.substitute_reprints(last_attempt, rng),
            quality: PackQuality::BestEffort,
            attempts: MAX_FILL_ATTEMPTS,
        })
    }

    /// Assemble a pack and normalize it to exactly `target_size` cards,
    /// pool capacity permitting.
    ///
    /// Shortfalls are padded with random commons; oversize packs are
    /// trimmed from the front, dropping the earliest-filled slots
    /// (lands and commons) before uncommons and rares.
    ///
    /// # Errors
    ///
    /// Same as [`BoosterEngine::assemble`].
    pub fn assemble_fixed_size<G: Rng>(
        &self,
        rng: &mut G,
        target_size: usize,
    ) -> Result<AssembledPack, EngineError> {
        let mut pack = self.assemble(rng)?;
        self.normalize_size(&mut pack.cards, target_size, rng);
        Ok(pack)
    }

    fn normalize_size<G: Rng>(&self, cards: &mut Vec<CardInfo>, target_size: usize, rng: &mut G) {
        if cards.len() < target_size {
            let mut commons = self.pool_for(Rarity::Common);
            while cards.len() < target_size {
                if commons.is_empty() {
                    commons = self.pool_for(Rarity::Common);
                    if commons.is_empty() {
                        break;
                    }
                }
                if let Some(card) = crate::filler::draw_from(&mut commons, rng) {
                    cards.push(card);
                }
            }
        }
        while cards.len() > target_size {
            cards.remove(0);
        }
    }
}
