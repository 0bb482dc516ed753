//! Simulation integration tests
//!
//! Drives mixed collections through the tick driver using the facade crate.

use std::time::Duration;

use menagerie::behavior::{available_colors, random_name};
use menagerie::engine::{
    DriverConfig, Handles, PetCollection, PetInstance, PetRecord, SpawnOptions, TickDriver,
    create_pet,
};
use menagerie::foundation::{PetColor, PetType, State};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FRAME: Duration = Duration::from_millis(100);

fn menagerie(seed: u64) -> PetCollection {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pets = PetCollection::new();
    for (pet_type, left) in PetType::ALL.into_iter().zip([0.0, 150.0, 300.0, 450.0]) {
        let name = random_name(pet_type.as_str(), &mut rng);
        let options = SpawnOptions::new().with_left(left);
        let pet = create_pet(pet_type.as_str(), &options, Some(name)).unwrap();
        pets.push(PetRecord::for_pet(pet, PetColor::Black, Handles::headless()));
    }
    pets
}

// =============================================================================
// Mixed Collections
// =============================================================================

#[test]
fn every_archetype_stays_within_its_graph() {
    let mut pets = menagerie(1);
    let mut driver = TickDriver::new(DriverConfig::seeded(1).with_hold_frames(4));

    let reports = driver.run(&mut pets, 1000, FRAME).unwrap();
    assert_eq!(reports.len(), 1000);
    assert!(reports.iter().any(|report| !report.transitions.is_empty()));

    for (_, record) in pets.iter() {
        let pet = record.instance();
        assert!(pet.graph().contains(pet.state()));
        assert!(pet.left() >= 0.0);
        assert!(pet.left() + pet.width() <= 800.0);
        assert!(available_colors(record.pet_type()).contains(&record.color()));
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let mut pets = menagerie(5);
        let mut driver = TickDriver::new(DriverConfig::seeded(5).with_hold_frames(3));
        driver.run(&mut pets, 300, FRAME).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn crowded_pets_make_friends_while_running() {
    let mut pets = PetCollection::new();
    for (name, left) in [("Rex", 100.0), ("Bella", 110.0), ("Max", 400.0)] {
        let pet = create_pet("dog", &SpawnOptions::new().with_left(left), Some(name)).unwrap();
        pets.push(PetRecord::for_pet(pet, PetColor::Brown, Handles::headless()));
    }
    let mut driver = TickDriver::new(
        DriverConfig::seeded(8)
            .with_hold_frames(1000)
            .with_seek_friends_every(1),
    );

    let report = driver.tick(&mut pets, FRAME).unwrap();
    assert_eq!(report.friendships.len(), 1);
    assert!(pets.locate("Rex").unwrap().instance().has_friend());
    assert!(!pets.locate("Max").unwrap().instance().has_friend());
}

// =============================================================================
// Chasing
// =============================================================================

#[test]
fn chase_ends_holding_the_ball() {
    let mut pet = create_pet("pumpy", &SpawnOptions::new(), Some("Pumps")).unwrap();
    assert!(pet.chase_ball().unwrap());
    // Already chasing.
    assert!(!pet.chase_ball().unwrap());

    let mut pets = PetCollection::new();
    let id = pets.push(PetRecord::for_pet(pet, PetColor::Black, Handles::headless()));
    let mut driver = TickDriver::new(DriverConfig::seeded(2).with_hold_frames(2));

    driver.tick(&mut pets, FRAME).unwrap();
    let report = driver.tick(&mut pets, FRAME).unwrap();
    assert_eq!(report.transitions.len(), 1);
    assert_eq!(report.transitions[0].pet, id);
    assert_eq!(report.transitions[0].from, State::Chase);
    assert_eq!(report.transitions[0].to, State::IdleWithBall);
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn removal_mid_run_leaves_the_rest_running() {
    let mut pets = menagerie(3);
    let mut driver = TickDriver::new(DriverConfig::seeded(3).with_hold_frames(2));
    driver.run(&mut pets, 50, FRAME).unwrap();

    let first = pets.ids()[0];
    assert!(pets.remove(first));
    assert_eq!(pets.len(), 3);

    let reports = driver.run(&mut pets, 50, FRAME).unwrap();
    for report in reports {
        assert!(report.transitions.iter().all(|t| t.pet != first));
    }
}

#[test]
fn reset_after_a_run_empties_the_collection() {
    let mut pets = menagerie(4);
    let mut driver = TickDriver::default();
    driver.run(&mut pets, 20, FRAME).unwrap();

    assert_eq!(pets.reset(), 4);
    assert!(pets.is_empty());
    let report = driver.tick(&mut pets, FRAME).unwrap();
    assert!(report.transitions.is_empty());
}
