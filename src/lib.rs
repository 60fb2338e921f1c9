//! Boosterforge
//!
//! Weighted, constrained booster-pack assembly over an injected card
//! catalog. Given a pack profile (slot counts, promotion ratios, special
//! carve-outs), the engine samples candidate pools, validates the result
//! against two color-balance rules with a bounded retry loop, substitutes
//! variable-art reprints, and can normalize packs to a fixed size. A
//! deterministic collator path bypasses sampling entirely for sets with
//! reconstructed print runs.
//!
//! This crate is an in-process library: no persistence, no presentation,
//! no game rules. Callers supply the [`CardRepository`] and the [`Rng`];
//! seeding the latter makes assembly reproducible in tests.
//!
//! [`Rng`]: rand::Rng

pub mod card;
pub mod collator;
pub mod engine;
mod filler;
mod pools;
pub mod profile;
mod reprints;
pub mod repository;
pub mod validate;

// Re-export commonly used types
pub use card::{CardColor, CardInfo, Rarity};
pub use collator::{BoosterCollator, ScriptedCollator};
pub use engine::{AssembledPack, BoosterEngine, EngineError, MAX_FILL_ATTEMPTS, PackQuality};
pub use profile::{PackProfile, SetScope};
pub use repository::{CardCriteria, CardRepository, MemoryCardRepository};
pub use validate::{color_for_validation, validate_common_colors, validate_uncommon_colors};
