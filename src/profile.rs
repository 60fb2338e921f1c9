//! Pack recipes: slot counts, promotion ratios and special-slot carve-outs.
use serde::{Deserialize, Serialize};

/// Catalog scope a profile draws from: the active set code plus an optional
/// parent code consulted for basic lands and reprint variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScope {
    pub code: String,
    #[serde(default)]
    pub parent_code: Option<String>,
}

impl SetScope {
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            parent_code: None,
        }
    }

    #[must_use]
    pub fn with_parent(code: &str, parent_code: &str) -> Self {
        Self {
            code: code.to_string(),
            parent_code: Some(parent_code.to_string()),
        }
    }
}

/// Immutable configuration for one pack recipe.
///
/// Ratios follow the convention of the historical formats they imitate:
/// a ratio of `n` means a `1/n` chance per draw, so `mythic_ratio = 8`
/// promotes one rare draw in eight. A ratio of zero disables the roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackProfile {
    /// When false, assembly returns an empty pack immediately.
    pub has_boosters: bool,
    pub land_count: u32,
    pub common_count: u32,
    pub uncommon_count: u32,
    pub rare_count: u32,
    /// Draws from the `Special` rarity pool appended after regular slots.
    pub special_count: u32,
    /// `1/mythic_ratio` chance per rare draw to upgrade to mythic.
    pub mythic_ratio: f64,
    /// When > 0, each land draw targets the special-land pool with
    /// probability `land_special_numerator / land_special_ratio`.
    pub land_special_ratio: u32,
    pub land_special_numerator: u32,
    /// When > 0, one common slot converts to a special draw with
    /// probability `1/common_special_ratio`.
    pub common_special_ratio: u32,
    /// When > 0, one uncommon or rare slot always becomes a special draw;
    /// `1/rare_special_ratio` chance it consumes the rare slot.
    pub rare_special_ratio: f64,
    /// `1/rare_special_mythic_ratio` chance the rare-track special draw is
    /// upgraded to mythic.
    pub rare_special_mythic_ratio: f64,
    pub double_faced_count: u32,
    /// Collector-number ceiling; printings beyond it stay out of boosters.
    pub max_card_number: u32,
    pub has_basic_lands: bool,
    /// When false, reprint substitution is restricted to basic lands.
    pub alternate_printings_allowed: bool,
    /// Accept any four-color common spread without the stochastic roll.
    pub unbalanced_colors: bool,
    /// Tally color combinations instead of constituent colors at common.
    pub only_multicolor: bool,
}

impl Default for PackProfile {
    fn default() -> Self {
        Self {
            has_boosters: false,
            land_count: 0,
            common_count: 0,
            uncommon_count: 0,
            rare_count: 0,
            special_count: 0,
            mythic_ratio: 0.0,
            land_special_ratio: 0,
            land_special_numerator: 1,
            common_special_ratio: 0,
            rare_special_ratio: 0.0,
            rare_special_mythic_ratio: 0.0,
            double_faced_count: 0,
            max_card_number: u32::MAX,
            has_basic_lands: true,
            alternate_printings_allowed: true,
            unbalanced_colors: false,
            only_multicolor: false,
        }
    }
}

impl PackProfile {
    /// Pre-2024 draft booster with explicit slot counts.
    #[must_use]
    pub fn draft_booster(
        max_card_number: u32,
        land_count: u32,
        common_count: u32,
        uncommon_count: u32,
        rare_count: u32,
    ) -> Self {
        Self {
            has_boosters: true,
            max_card_number,
            land_count,
            has_basic_lands: land_count > 0,
            common_count,
            uncommon_count,
            rare_count,
            mythic_ratio: 8.0,
            ..Self::default()
        }
    }

    /// 2020-2024 set booster, collapsed to its dominant 12-card split:
    /// 1 land, 6 commons, 3 uncommons, 2 rares.
    #[must_use]
    pub fn set_booster(max_card_number: u32) -> Self {
        Self {
            has_boosters: true,
            max_card_number,
            land_count: 1,
            common_count: 6,
            uncommon_count: 3,
            rare_count: 2,
            mythic_ratio: 8.0,
            ..Self::default()
        }
    }

    /// Post-2024 play booster; wildcard slots approximated as one extra
    /// uncommon and one extra rare.
    #[must_use]
    pub fn play_booster(max_card_number: u32) -> Self {
        Self {
            has_boosters: true,
            max_card_number,
            land_count: 1,
            common_count: 7,
            uncommon_count: 4,
            rare_count: 2,
            mythic_ratio: 8.0,
            ..Self::default()
        }
    }

    /// Arena boosters share the play-booster composition.
    #[must_use]
    pub fn arena_booster(max_card_number: u32) -> Self {
        Self::play_booster(max_card_number)
    }

    /// Collector booster with the simplified 1/5/4/5 rarity split.
    #[must_use]
    pub fn collector_booster(max_card_number: u32) -> Self {
        Self::collector_booster_slots(max_card_number, 1, 5, 4, 5)
    }

    /// Collector booster with explicit slot counts.
    #[must_use]
    pub fn collector_booster_slots(
        max_card_number: u32,
        land_count: u32,
        common_count: u32,
        uncommon_count: u32,
        rare_count: u32,
    ) -> Self {
        Self {
            has_boosters: true,
            max_card_number,
            land_count,
            has_basic_lands: land_count > 0,
            common_count,
            uncommon_count,
            rare_count,
            mythic_ratio: 8.0,
            ..Self::default()
        }
    }

    /// Nominal slot total, before carve-outs and exhausted-pool shortfalls.
    #[must_use]
    pub const fn nominal_size(&self) -> u32 {
        self.land_count
            + self.common_count
            + self.uncommon_count
            + self.rare_count
            + self.special_count
            + self.double_faced_count
    }
}
