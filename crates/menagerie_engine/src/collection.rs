//! The pet collection: membership, lookup, teardown, and friend seeking.
//!
//! The collection owns its records for their whole lifetime. Callers build
//! one explicitly and pass it to whatever drives the animation; nothing here
//! is global.

use std::fmt;

use menagerie_foundation::{PetColor, PetType};
use tracing::{debug, info};

use crate::config::FriendshipConfig;
use crate::instance::leading_edge_inside;
use crate::record::PetRecord;

// =============================================================================
// Identity
// =============================================================================

/// Identity of a record within one collection.
///
/// Ids are handed out by [`PetCollection::push`] and never reused, so two
/// records with the same name, type, and color are still distinguishable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PetId(u64);

impl PetId {
    /// Returns the raw id.
    #[must_use]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pet({})", self.0)
    }
}

/// A friendship established by [`PetCollection::seek_new_friends`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Friendship {
    /// The pet whose span was entered and who asked.
    pub seeker: PetId,
    /// The pet whose leading edge entered the seeker's span.
    pub friend: PetId,
}

// =============================================================================
// Collection
// =============================================================================

/// An ordered set of pet records.
///
/// Order is insertion order. Friend seeking and lookups both follow it.
#[derive(Debug, Default)]
pub struct PetCollection {
    pets: Vec<(PetId, PetRecord)>,
    next_id: u64,
    config: FriendshipConfig,
}

impl PetCollection {
    /// Creates an empty collection with the default friendship settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty collection with the given friendship settings.
    #[must_use]
    pub fn with_config(config: FriendshipConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the friendship settings.
    #[must_use]
    pub fn config(&self) -> &FriendshipConfig {
        &self.config
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    /// Returns true if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Appends a record and returns its id.
    pub fn push(&mut self, record: PetRecord) -> PetId {
        let id = PetId(self.next_id);
        self.next_id += 1;
        debug!(%id, pet = record.name(), "adding pet to collection");
        self.pets.push((id, record));
        id
    }

    /// Returns the record with this id.
    #[must_use]
    pub fn get(&self, id: PetId) -> Option<&PetRecord> {
        self.pets
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, record)| record)
    }

    /// Returns the record with this id mutably.
    pub fn get_mut(&mut self, id: PetId) -> Option<&mut PetRecord> {
        self.pets
            .iter_mut()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, record)| record)
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PetId, &PetRecord)> {
        self.pets.iter().map(|(id, record)| (*id, record))
    }

    /// Iterates mutably over records in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PetId, &mut PetRecord)> {
        self.pets.iter_mut().map(|(id, record)| (*id, record))
    }

    /// Returns the ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<PetId> {
        self.pets.iter().map(|(id, _)| *id).collect()
    }

    /// Returns the first record whose pet is called `name`.
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<&PetRecord> {
        self.locate_id(name).and_then(|id| self.get(id))
    }

    /// Returns the id of the first record whose pet is called `name`.
    #[must_use]
    pub fn locate_id(&self, name: &str) -> Option<PetId> {
        self.pets
            .iter()
            .find(|(_, record)| record.name() == name)
            .map(|(id, _)| *id)
    }

    /// Returns the first record matching name, type, and color exactly.
    #[must_use]
    pub fn locate_pet(&self, name: &str, pet_type: PetType, color: PetColor) -> Option<&PetRecord> {
        self.pets
            .iter()
            .map(|(_, record)| record)
            .find(|record| {
                record.name() == name && record.pet_type() == pet_type && record.color() == color
            })
    }

    /// Tears down and drops the record with this id.
    ///
    /// Returns false, touching nothing, if no such record is present.
    pub fn remove(&mut self, id: PetId) -> bool {
        let Some(position) = self.pets.iter().position(|(candidate, _)| *candidate == id) else {
            return false;
        };
        let (_, mut record) = self.pets.remove(position);
        record.remove();
        true
    }

    /// Tears down every record in order and empties the collection.
    ///
    /// Returns the number of records torn down.
    pub fn reset(&mut self) -> usize {
        let count = self.pets.len();
        for (_, mut record) in self.pets.drain(..) {
            record.remove();
        }
        debug!(count, "collection reset");
        count
    }

    /// Pairs up lonely pets whose spans overlap.
    ///
    /// Lonely pets are those without a friend when the pass starts. Every
    /// ordered pair `(seeker, candidate)` of distinct lonely pets is tried in
    /// insertion order. The pair qualifies when the candidate can be chased
    /// and its left edge lies strictly inside the seeker's span; the seeker's
    /// [`make_friends_with`](crate::PetInstance::make_friends_with) then has
    /// the final say. Accepted pairs show the acknowledgement on both pets.
    ///
    /// The lonely list is not refreshed during the pass: a pet that makes a
    /// friend stays eligible for the remaining pairs.
    pub fn seek_new_friends(&mut self) -> Vec<Friendship> {
        let mut friendships = Vec::new();
        if self.pets.len() <= 1 {
            return friendships;
        }

        let lonely: Vec<usize> = self
            .pets
            .iter()
            .enumerate()
            .filter(|(_, (_, record))| !record.instance().has_friend())
            .map(|(index, _)| index)
            .collect();
        if lonely.len() <= 1 {
            return friendships;
        }

        for &p in &lonely {
            for &q in &lonely {
                if p == q {
                    continue;
                }

                let seeker = self.pets[p].1.instance();
                let candidate = self.pets[q].1.instance();
                if !candidate.can_chase() || !leading_edge_inside(seeker, candidate) {
                    continue;
                }
                debug!(
                    seeker = seeker.name(),
                    candidate = candidate.name(),
                    "wants to be friends"
                );

                let ((seeker_id, seeker), (friend_id, friend)) = pair_mut(&mut self.pets, p, q);
                if !seeker.instance_mut().make_friends_with(friend.instance()) {
                    continue;
                }

                let message = &self.config.acknowledgement;
                let duration = self.config.acknowledgement_duration;
                friend.instance_mut().show_speech_bubble(message, duration);
                seeker.instance_mut().show_speech_bubble(message, duration);

                info!(
                    seeker = seeker.name(),
                    friend = friend.name(),
                    "friendship established"
                );
                friendships.push(Friendship {
                    seeker: *seeker_id,
                    friend: *friend_id,
                });
            }
        }

        friendships
    }
}

/// Borrows two distinct elements mutably.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    debug_assert_ne!(a, b);
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
