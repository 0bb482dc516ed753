//! Integration tests for the archetype table
//!
//! Tests palettes, color normalization, and lookup by identifier.

use menagerie_behavior::{Archetype, archetype, available_colors, normalize_color};
use menagerie_foundation::{PetColor, PetSpeed, PetType};

// =============================================================================
// Palettes
// =============================================================================

#[test]
fn palettes_are_ordered() {
    assert_eq!(
        available_colors(PetType::Dog),
        &[
            PetColor::Black,
            PetColor::Brown,
            PetColor::White,
            PetColor::Red,
            PetColor::Akita
        ]
    );
    assert_eq!(
        available_colors(PetType::Rat),
        &[PetColor::Gray, PetColor::White, PetColor::Brown]
    );
    assert_eq!(
        available_colors(PetType::Panda),
        &[PetColor::Black, PetColor::Brown]
    );
    assert_eq!(available_colors(PetType::Pumpy), &[PetColor::Black]);
}

#[test]
fn default_color_is_first() {
    for pet_type in PetType::ALL {
        assert_eq!(
            Archetype::of(pet_type).default_color(),
            available_colors(pet_type)[0]
        );
    }
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn normalize_is_total_and_idempotent() {
    for pet_type in PetType::ALL {
        let palette = available_colors(pet_type);
        for color in PetColor::ALL {
            let once = normalize_color(color, pet_type);
            assert!(palette.contains(&once));
            assert_eq!(normalize_color(once, pet_type), once);
            assert_eq!(once == color, palette.contains(&color));
        }
    }
}

#[test]
fn normalize_from_parsed_id() {
    let pet_type: PetType = "pumpy".parse().unwrap();
    assert_eq!(normalize_color(PetColor::Orange, pet_type), PetColor::Black);
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn archetype_lookup() {
    let panda = archetype("panda").unwrap();
    assert_eq!(panda.speed, PetSpeed::Slow);
    assert_eq!(panda.emoji, "🐼");
    assert!(archetype("").unwrap_err().is_invalid_pet());
    assert!(archetype("PANDA").unwrap_err().is_invalid_pet());
}

#[test]
fn palette_by_id_matches_typed_palette() {
    for pet_type in PetType::ALL {
        let colors = archetype(pet_type.as_str()).unwrap().colors;
        assert_eq!(colors, available_colors(pet_type));
    }
    let err = archetype("griffin").map(|a| a.colors).unwrap_err();
    assert_eq!(format!("{err}"), "invalid pet: Pet type doesn't exist");
}

#[test]
fn only_panda_is_slow() {
    for pet_type in PetType::ALL {
        let expected = if pet_type == PetType::Panda {
            PetSpeed::Slow
        } else {
            PetSpeed::Normal
        };
        assert_eq!(Archetype::of(pet_type).speed, expected);
    }
}
