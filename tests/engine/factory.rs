//! Integration tests for pet construction

use menagerie_engine::{PetInstance, SpawnOptions, create_pet};
use menagerie_foundation::{ErrorKind, InvalidPetReason, PetSize, PetSpeed, PetType, State};

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn empty_or_missing_name_fails_for_every_archetype() {
    for pet_type in PetType::ALL {
        for name in [None, Some("")] {
            let err = create_pet(pet_type.as_str(), &SpawnOptions::new(), name).unwrap_err();
            assert!(matches!(
                err.kind,
                ErrorKind::InvalidPet(InvalidPetReason::MissingName)
            ));
        }
    }
}

#[test]
fn unknown_archetype_fails_regardless_of_arguments() {
    let options = SpawnOptions::new()
        .with_size(PetSize::Small)
        .with_left(40.0)
        .with_root("media");
    for id in ["cat", "Dog", " dog", ""] {
        let err = create_pet(id, &options, Some("Rex")).unwrap_err();
        assert_eq!(format!("{err}"), "invalid pet: Pet type doesn't exist");
    }
}

#[test]
fn name_is_checked_before_archetype() {
    let err = create_pet("cat", &SpawnOptions::new(), None).unwrap_err();
    assert_eq!(format!("{err}"), "invalid pet: name is undefined");
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_pets_start_in_starting_state() {
    for pet_type in PetType::ALL {
        let pet = create_pet(pet_type.as_str(), &SpawnOptions::new(), Some("Bo")).unwrap();
        assert_eq!(pet.state(), State::SitIdle);
        assert_eq!(pet.state(), pet.graph().starting_state());
        assert!(!pet.has_friend());
        assert!(pet.can_chase());
        assert!(pet.speech().is_none());
    }
}

#[test]
fn speed_is_fixed_by_archetype() {
    let expected = [
        (PetType::Dog, PetSpeed::Normal),
        (PetType::Rat, PetSpeed::Normal),
        (PetType::Panda, PetSpeed::Slow),
        (PetType::Pumpy, PetSpeed::Normal),
    ];
    for (pet_type, speed) in expected {
        let pet = create_pet(pet_type.as_str(), &SpawnOptions::new(), Some("Bo")).unwrap();
        assert_eq!(pet.speed(), speed);
    }
}

#[test]
fn width_follows_size() {
    let pet = create_pet(
        "rat",
        &SpawnOptions::new().with_size(PetSize::Nano),
        Some("Remy"),
    )
    .unwrap();
    assert!((pet.width() - 30.0).abs() < 0.001);
    assert_eq!(pet.size(), PetSize::Nano);
    assert_eq!(pet.greeting(), "Squeak! Squeak!");
}
