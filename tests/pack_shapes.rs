use boosterforge::{
    BoosterEngine, CardColor, CardInfo, MAX_FILL_ATTEMPTS, MemoryCardRepository, PackProfile,
    PackQuality, Rarity, SetScope,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashSet;

const TRIALS: usize = 200;

fn card(name: &str, number: u32, rarity: Rarity, letters: &str) -> CardInfo {
    CardInfo {
        name: name.to_string(),
        number: number.to_string(),
        rarity,
        color: CardColor::from_letters(letters),
        color_identity: CardColor::from_letters(letters),
        land: false,
        basic: false,
        double_faced: false,
        variable_art: false,
    }
}

fn basic_land(name: &str, number: u32, variable_art: bool) -> CardInfo {
    CardInfo {
        land: true,
        basic: true,
        variable_art,
        ..card(name, number, Rarity::Land, "")
    }
}

/// A small but color-balanced catalog: four commons and two uncommons per
/// color, a spread of rares and mythics, and variable-art basics.
fn fixture_repository() -> MemoryCardRepository {
    let letters = ["W", "U", "B", "R", "G"];
    let mut cards = Vec::new();
    let mut number = 1;
    for color in letters {
        for i in 0..4 {
            cards.push(card(&format!("Common {color}{i}"), number, Rarity::Common, color));
            number += 1;
        }
        for i in 0..2 {
            cards.push(card(
                &format!("Uncommon {color}{i}"),
                number,
                Rarity::Uncommon,
                color,
            ));
            number += 1;
        }
        cards.push(card(&format!("Rare {color}"), number, Rarity::Rare, color));
        number += 1;
    }
    for i in 0..3 {
        cards.push(card(&format!("Mythic {i}"), number, Rarity::Mythic, "WU"));
        number += 1;
    }
    for i in 0..4 {
        cards.push(basic_land("Plains", 240 + i, true));
    }
    let mut repo = MemoryCardRepository::new();
    repo.add_set("TST", cards);
    repo
}

fn engine(profile: PackProfile) -> BoosterEngine<MemoryCardRepository> {
    BoosterEngine::new(fixture_repository(), SetScope::new("TST"), profile)
}

#[test]
fn disabled_boosters_always_yield_empty_packs() {
    let engine = engine(PackProfile::default());
    let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
    for _ in 0..TRIALS {
        assert!(engine.assemble(&mut rng).unwrap().cards.is_empty());
    }
}

#[test]
fn accepted_packs_carry_distinct_common_names() {
    let engine = engine(PackProfile::draft_booster(300, 1, 10, 3, 1));
    let mut rng = ChaCha20Rng::from_seed([12u8; 32]);
    for _ in 0..TRIALS {
        let pack = engine.assemble(&mut rng).unwrap();
        let commons: Vec<_> = pack
            .cards
            .iter()
            .filter(|c| c.rarity == Rarity::Common)
            .collect();
        let names: HashSet<_> = commons.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(commons.len(), 10);
        assert_eq!(names.len(), 10);
    }
}

#[test]
fn assembly_is_bounded_by_the_attempt_ceiling() {
    let engine = engine(PackProfile::draft_booster(300, 1, 10, 3, 1));
    let mut rng = ChaCha20Rng::from_seed([13u8; 32]);
    for _ in 0..TRIALS {
        let pack = engine.assemble(&mut rng).unwrap();
        assert!(pack.attempts >= 1);
        assert!(pack.attempts <= MAX_FILL_ATTEMPTS);
    }
}

#[test]
fn fixed_size_assembly_hits_fifteen_exactly() {
    // Set boosters are nominally 12 cards; padding commons makes up the
    // difference, and the catalog holds well over 15 unique cards.
    let engine = engine(PackProfile::set_booster(300));
    let mut rng = ChaCha20Rng::from_seed([14u8; 32]);
    for _ in 0..TRIALS {
        let pack = engine.assemble_fixed_size(&mut rng, 15).unwrap();
        assert_eq!(pack.cards.len(), 15);
    }
}

#[test]
fn fixed_size_assembly_trims_oversized_packs_from_the_front() {
    let engine = engine(PackProfile::draft_booster(300, 1, 10, 3, 1));
    let mut rng = ChaCha20Rng::from_seed([15u8; 32]);
    let pack = engine.assemble_fixed_size(&mut rng, 4).unwrap();
    assert_eq!(pack.cards.len(), 4);
    // Lands and commons fill first and trim first; the tail keeps the
    // uncommon and rare slots.
    assert!(pack.cards.iter().all(|c| c.rarity != Rarity::Land));
    assert!(
        pack.cards
            .iter()
            .any(|c| matches!(c.rarity, Rarity::Rare | Rarity::Mythic))
    );
}

#[test]
fn reprint_substitution_keeps_canonical_names() {
    let engine = engine(PackProfile::draft_booster(300, 1, 10, 3, 1));
    let mut rng = ChaCha20Rng::from_seed([16u8; 32]);
    for _ in 0..TRIALS {
        let pack = engine.assemble(&mut rng).unwrap();
        let lands: Vec<_> = pack
            .cards
            .iter()
            .filter(|c| c.rarity == Rarity::Land)
            .collect();
        assert_eq!(lands.len(), 1);
        assert_eq!(lands[0].name, "Plains");
    }
}

#[test]
fn bonus_rarity_entries_never_surface_in_packs() {
    // The bonus numbering sits below the collector-number ceiling, so
    // only its rarity keeps it out of the pools.
    let mut repo = fixture_repository();
    repo.add_set("TST", vec![card("Serialized Dragon", 500, Rarity::Bonus, "R")]);
    let engine = BoosterEngine::new(
        repo,
        SetScope::new("TST"),
        PackProfile::draft_booster(600, 1, 10, 3, 1),
    );
    let mut rng = ChaCha20Rng::from_seed([19u8; 32]);
    for _ in 0..TRIALS {
        let pack = engine.assemble(&mut rng).unwrap();
        assert!(pack.cards.iter().all(|c| c.rarity != Rarity::Bonus));
    }
}

#[test]
fn balanced_catalog_usually_validates_quickly() {
    let engine = engine(PackProfile::draft_booster(300, 1, 10, 3, 1));
    let mut rng = ChaCha20Rng::from_seed([17u8; 32]);
    let mut balanced = 0;
    for _ in 0..TRIALS {
        if engine.assemble(&mut rng).unwrap().quality == PackQuality::Balanced {
            balanced += 1;
        }
    }
    assert_eq!(balanced, TRIALS, "fixture catalog should never exhaust retries");
}

#[test]
fn play_booster_preset_fills_its_nominal_shape() {
    let engine = engine(PackProfile::play_booster(300));
    let mut rng = ChaCha20Rng::from_seed([18u8; 32]);
    let pack = engine.assemble(&mut rng).unwrap();
    assert_eq!(pack.cards.len(), 14);
    let commons = pack
        .cards
        .iter()
        .filter(|c| c.rarity == Rarity::Common)
        .count();
    assert_eq!(commons, 7);
}
