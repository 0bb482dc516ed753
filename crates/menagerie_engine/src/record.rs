//! Pet records: a pet bound to its presentation and declared look.

use menagerie_behavior::normalize_color;
use menagerie_foundation::{PetColor, PetType};
use tracing::debug;

use crate::instance::PetInstance;
use crate::pet::Pet;
use crate::presentation::Handles;

/// A pet together with the nodes that present it.
///
/// The record owns its handles and its instance. [`remove`](Self::remove)
/// tears both down exactly once.
#[derive(Debug)]
pub struct PetRecord {
    handles: Handles,
    instance: Box<dyn PetInstance>,
    color: PetColor,
    pet_type: PetType,
    removed: bool,
}

impl PetRecord {
    /// Binds `instance` to `handles` with the declared color and type.
    ///
    /// The color is taken as given; see [`PetRecord::for_pet`] for the
    /// normalizing constructor.
    #[must_use]
    pub fn new(
        handles: Handles,
        instance: Box<dyn PetInstance>,
        color: PetColor,
        pet_type: PetType,
    ) -> Self {
        Self {
            handles,
            instance,
            color,
            pet_type,
            removed: false,
        }
    }

    /// Binds a generic pet, constraining `color` to its archetype's palette.
    #[must_use]
    pub fn for_pet(pet: Pet, color: PetColor, handles: Handles) -> Self {
        let pet_type = pet.pet_type();
        let color = normalize_color(color, pet_type);
        Self::new(handles, Box::new(pet), color, pet_type)
    }

    /// Returns the pet.
    #[must_use]
    pub fn instance(&self) -> &dyn PetInstance {
        self.instance.as_ref()
    }

    /// Returns the pet mutably.
    pub fn instance_mut(&mut self) -> &mut dyn PetInstance {
        self.instance.as_mut()
    }

    /// Returns the pet's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.instance.name()
    }

    /// Returns the declared color.
    #[must_use]
    pub fn color(&self) -> PetColor {
        self.color
    }

    /// Returns the declared type.
    #[must_use]
    pub fn pet_type(&self) -> PetType {
        self.pet_type
    }

    /// Returns the presentation handles.
    #[must_use]
    pub fn handles(&self) -> &Handles {
        &self.handles
    }

    /// Returns true once the record has been torn down.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Detaches every handle and removes the pet.
    ///
    /// Returns false, doing nothing, if the record was already torn down.
    pub fn remove(&mut self) -> bool {
        if self.removed {
            return false;
        }
        debug!(pet = self.instance.name(), "tearing down pet record");
        self.handles.detach_all();
        self.instance.remove();
        self.removed = true;
        true
    }
}
