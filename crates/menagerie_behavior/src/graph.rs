//! State graphs: the legal behavior transitions of an archetype.
//!
//! A graph is configuration. It is built once per archetype and shared
//! read-only by every pet of that archetype; cloning is O(1) because the
//! adjacency is held in persistent `im` collections.

use std::collections::VecDeque;

use im::{OrdMap, OrdSet};
use menagerie_foundation::State;

/// Directed graph of allowed state transitions plus a starting state.
///
/// The recognized states of a graph are every transition source, every
/// transition target, and the starting state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateGraph {
    /// State a freshly created pet starts in.
    starting_state: State,
    /// Allowed next states, keyed by source state.
    transitions: OrdMap<State, OrdSet<State>>,
}

impl StateGraph {
    /// Creates a graph with no transitions.
    #[must_use]
    pub fn new(starting_state: State) -> Self {
        Self {
            starting_state,
            transitions: OrdMap::new(),
        }
    }

    /// Adds the transitions `from -> to` for every state in `to`.
    ///
    /// Calling this with an empty `to` registers `from` as a source with no
    /// outgoing edges. Repeated calls for the same source accumulate.
    #[must_use]
    pub fn with_transitions(mut self, from: State, to: &[State]) -> Self {
        let next = self.transitions.entry(from).or_insert_with(OrdSet::new);
        for &state in to {
            next.insert(state);
        }
        self
    }

    /// Returns the starting state.
    #[must_use]
    pub fn starting_state(&self) -> State {
        self.starting_state
    }

    /// Returns every recognized state, in ascending order.
    #[must_use]
    pub fn states(&self) -> OrdSet<State> {
        let mut states = OrdSet::unit(self.starting_state);
        for (from, next) in &self.transitions {
            states.insert(*from);
            for state in next {
                states.insert(*state);
            }
        }
        states
    }

    /// Returns true if `state` is recognized by this graph.
    #[must_use]
    pub fn contains(&self, state: State) -> bool {
        state == self.starting_state
            || self.transitions.contains_key(&state)
            || self.transitions.values().any(|next| next.contains(&state))
    }

    /// Returns the allowed next states of `from`, if `from` is a source.
    #[must_use]
    pub fn next_states(&self, from: State) -> Option<&OrdSet<State>> {
        self.transitions.get(&from)
    }

    /// Returns true iff `from -> to` is a configured transition.
    ///
    /// Unknown sources have no legal transitions.
    #[must_use]
    pub fn is_valid_transition(&self, from: State, to: State) -> bool {
        self.next_states(from).is_some_and(|next| next.contains(&to))
    }

    /// Returns the number of configured edges.
    #[must_use]
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(OrdSet::len).sum()
    }

    /// Returns the recognized states with no outgoing transitions.
    #[must_use]
    pub fn dead_ends(&self) -> Vec<State> {
        self.states()
            .into_iter()
            .filter(|state| self.next_states(*state).is_none_or(OrdSet::is_empty))
            .collect()
    }

    /// Returns the states reachable from the starting state, itself included.
    #[must_use]
    pub fn reachable_from_start(&self) -> OrdSet<State> {
        let mut seen = OrdSet::unit(self.starting_state);
        let mut queue = VecDeque::from([self.starting_state]);

        while let Some(state) = queue.pop_front() {
            let Some(next) = self.next_states(state) else {
                continue;
            };
            for &candidate in next {
                if seen.insert(candidate).is_none() {
                    queue.push_back(candidate);
                }
            }
        }

        seen
    }
}

/// Returns true iff `graph` allows moving from `from` to `to`.
#[must_use]
pub fn is_valid_transition(graph: &StateGraph, from: State, to: State) -> bool {
    graph.is_valid_transition(from, to)
}
