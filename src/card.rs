//! Catalog card metadata: rarity tiers, color sets and printing info.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Rarity tier governing slot eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Land,
    Common,
    Uncommon,
    Rare,
    Mythic,
    /// Cards that only appear in dedicated special slots.
    Special,
    /// Administrative bonus numbering; never drawn by the filler.
    Bonus,
}

/// A set of the five card colors, stored as a bitmask.
///
/// Equality and hashing operate on the full combination, so distinct
/// multicolor pairings (e.g. WU vs RW) tally as distinct entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardColor(u8);

impl CardColor {
    pub const COLORLESS: Self = Self(0);
    pub const WHITE: Self = Self(1);
    pub const BLUE: Self = Self(1 << 1);
    pub const BLACK: Self = Self(1 << 2);
    pub const RED: Self = Self(1 << 3);
    pub const GREEN: Self = Self(1 << 4);

    const ALL_MONO: [Self; 5] = [Self::WHITE, Self::BLUE, Self::BLACK, Self::RED, Self::GREEN];

    /// Parse a color set from `WUBRG` letters; unknown letters are ignored.
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut color = Self::COLORLESS;
        for ch in letters.chars() {
            match ch.to_ascii_uppercase() {
                'W' => color = color.with(Self::WHITE),
                'U' => color = color.with(Self::BLUE),
                'B' => color = color.with(Self::BLACK),
                'R' => color = color.with(Self::RED),
                'G' => color = color.with(Self::GREEN),
                _ => {}
            }
        }
        color
    }

    /// Union of two color sets.
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Add another color set in place.
    pub const fn add(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of distinct colors in the set.
    #[must_use]
    pub const fn color_count(self) -> u32 {
        self.0.count_ones()
    }

    #[must_use]
    pub const fn is_colorless(self) -> bool {
        self.0 == 0
    }

    /// Decompose into constituent mono colors, in WUBRG order.
    #[must_use]
    pub fn mono_colors(self) -> SmallVec<[Self; 5]> {
        Self::ALL_MONO
            .into_iter()
            .filter(|mono| self.contains(*mono))
            .collect()
    }
}

/// One printing in the catalog. Immutable once loaded.
///
/// `name` is the canonical identity used for deduplication and reprint
/// grouping; all other fields are printing-specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub name: String,
    /// Collector number as printed; may carry `*`/`+` administrative markers.
    pub number: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub color: CardColor,
    #[serde(default)]
    pub color_identity: CardColor,
    #[serde(default)]
    pub land: bool,
    #[serde(default)]
    pub basic: bool,
    #[serde(default)]
    pub double_faced: bool,
    #[serde(default)]
    pub variable_art: bool,
}

impl CardInfo {
    /// Numeric prefix of the collector number, 0 when absent.
    #[must_use]
    pub fn number_as_int(&self) -> u32 {
        let digits: String = self
            .number
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().unwrap_or(0)
    }

    /// Whether the collector number carries an administrative marker.
    /// Marked printings are excluded from booster pools.
    #[must_use]
    pub fn has_marker_number(&self) -> bool {
        self.number.contains('*') || self.number.contains('+')
    }
}
