//! Statistical color-balance rules for assembled packs.
use crate::card::{CardColor, CardInfo, Rarity};
use crate::engine::BoosterEngine;
use crate::profile::PackProfile;
use crate::repository::CardRepository;
use rand::Rng;
use std::collections::HashSet;

/// Color a card counts as for balance purposes. Colorless nonland cards
/// with exactly one identity color (devoid, emerge, spellbombs) count as
/// that color; mana-fixing artifacts stay colorless.
#[must_use]
pub fn color_for_validation(card: &CardInfo) -> CardColor {
    if card.color.is_colorless() && !card.land && card.color_identity.color_count() == 1 {
        card.color_identity
    } else {
        card.color
    }
}

/// Common-slot balance rule.
///
/// Counts both distinct colors and distinct color combinations so that a
/// pack of three two-color pairings cannot pass as "all five colors".
/// Multicolor cards contribute one constituent color chosen at random
/// unless the profile is multicolor-only, which tallies combinations
/// instead. Near misses with colorless cards are accepted stochastically
/// with probability `1 - 0.8^(colorless + 1)`; the exponent grows by one
/// when a special draw displaced a common.
pub fn validate_common_colors<G: Rng>(
    pack: &[CardInfo],
    profile: &PackProfile,
    rng: &mut G,
) -> bool {
    let common_colors: Vec<CardColor> = pack
        .iter()
        .filter(|card| card.rarity == Rarity::Common)
        .map(color_for_validation)
        .collect();

    let mut colors_represented = CardColor::COLORLESS;
    let mut combinations: HashSet<CardColor> = HashSet::new();
    let mut colorless_count_plus_one: i64 = 1;

    for color in &common_colors {
        combinations.insert(*color);
        let count = color.color_count();
        if count == 0 {
            colorless_count_plus_one += 1;
        } else if count > 1 && !profile.only_multicolor {
            let monos = color.mono_colors();
            colors_represented.add(monos[rng.gen_range(0..monos.len())]);
        } else {
            colors_represented.add(*color);
        }
    }

    let colors = (colors_represented.color_count() as i64).min(combinations.len() as i64);

    // Full spread, or one card per color with all but one of the rest
    // colorless ("all but one" leaves leeway for small boosters).
    let full_spread = (common_colors.len() as i64 - colorless_count_plus_one).min(5);
    if colors >= full_spread {
        return true;
    }
    if colors < 4 {
        return false;
    }
    if profile.unbalanced_colors {
        return true;
    }
    if (common_colors.len() as u32) < profile.common_count {
        colorless_count_plus_one += 1;
    }

    // Treat each colorless card as 1/5 of a card of the missing color.
    rng.gen_range(0.0..1.0) > 0.8_f64.powi(colorless_count_plus_one as i32)
}

/// Uncommon-slot balance rule: fewer than three uncommons or any
/// colorless uncommon passes; otherwise at least two distinct color
/// combinations are required.
#[must_use]
pub fn validate_uncommon_colors(pack: &[CardInfo]) -> bool {
    let uncommon_colors: Vec<CardColor> = pack
        .iter()
        .filter(|card| card.rarity == Rarity::Uncommon)
        .map(color_for_validation)
        .collect();

    if uncommon_colors.len() < 3 {
        return true;
    }
    if uncommon_colors.iter().any(|color| color.is_colorless()) {
        return true;
    }
    uncommon_colors.iter().collect::<HashSet<_>>().len() > 1
}

impl<R: CardRepository> BoosterEngine<R> {
    /// Both balance rules must accept.
    pub(crate) fn pack_is_valid<G: Rng>(&self, pack: &[CardInfo], rng: &mut G) -> bool {
        validate_common_colors(pack, self.profile(), rng) && validate_uncommon_colors(pack)
    }
}
