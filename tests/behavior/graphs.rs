//! Integration tests for state graphs
//!
//! Tests transition validation against hand-built and archetype graphs.

use menagerie_behavior::{Archetype, StateGraph, is_valid_transition};
use menagerie_foundation::{PetType, State};

// =============================================================================
// Validation
// =============================================================================

#[test]
fn unknown_source_has_no_transitions() {
    let graph = StateGraph::new(State::SitIdle).with_transitions(State::SitIdle, &[State::Lie]);
    for to in State::ALL {
        assert!(!is_valid_transition(&graph, State::Chase, to));
    }
}

#[test]
fn source_without_edges_has_no_transitions() {
    let graph = StateGraph::new(State::SitIdle)
        .with_transitions(State::SitIdle, &[State::Lie])
        .with_transitions(State::Lie, &[]);
    assert!(graph.contains(State::Lie));
    for to in State::ALL {
        assert!(!is_valid_transition(&graph, State::Lie, to));
    }
}

#[test]
fn valid_exactly_for_configured_pairs() {
    let graph = &Archetype::of(PetType::Panda).graph;
    for from in State::ALL {
        for to in State::ALL {
            let configured = graph.next_states(from).is_some_and(|next| next.contains(&to));
            assert_eq!(graph.is_valid_transition(from, to), configured, "{from} -> {to}");
        }
    }
}

#[test]
fn graphs_are_shared_values() {
    let a = Archetype::of(PetType::Rat).graph.clone();
    let b = &Archetype::of(PetType::Rat).graph;
    assert_eq!(&a, b);
    assert_ne!(&a, &Archetype::of(PetType::Dog).graph);
}

// =============================================================================
// Archetype Graph Shape
// =============================================================================

#[test]
fn starting_state_is_recognized_for_every_archetype() {
    for pet_type in PetType::ALL {
        let graph = &Archetype::of(pet_type).graph;
        assert!(graph.states().contains(&graph.starting_state()), "{pet_type}");
    }
}

#[test]
fn every_archetype_can_leave_its_starting_state() {
    for pet_type in PetType::ALL {
        let graph = &Archetype::of(pet_type).graph;
        let next = graph.next_states(graph.starting_state()).unwrap();
        assert!(!next.is_empty(), "{pet_type}");
    }
}

#[test]
fn archetype_graphs_have_no_dead_ends() {
    for pet_type in PetType::ALL {
        assert!(Archetype::of(pet_type).graph.dead_ends().is_empty(), "{pet_type}");
    }
}

#[test]
fn chase_is_entered_from_outside_the_graph() {
    for pet_type in PetType::ALL {
        let graph = &Archetype::of(pet_type).graph;
        assert!(graph.contains(State::Chase));
        assert!(!graph.reachable_from_start().contains(&State::Chase), "{pet_type}");
        assert!(graph.is_valid_transition(State::Chase, State::IdleWithBall));
    }
}
