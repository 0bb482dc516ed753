//! Presentation handles owned by a pet record.
//!
//! The engine never draws anything. A [`Node`] is whatever the presentation
//! layer uses for a sprite, a collision probe, or a speech bubble; the engine
//! only needs to detach it when the pet goes away.

use std::fmt;

/// A detachable presentation node.
pub trait Node: fmt::Debug {
    /// Detaches the node from the presentation layer.
    fn detach(&mut self);
}

/// A node with no presentation behind it, for headless runs and tests.
#[derive(Debug, Default)]
pub struct HeadlessNode {
    detached: bool,
}

impl HeadlessNode {
    /// Creates an attached headless node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the node has been detached.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

impl Node for HeadlessNode {
    fn detach(&mut self) {
        self.detached = true;
    }
}

/// The three nodes that present one pet.
#[derive(Debug)]
pub struct Handles {
    /// The sprite.
    pub visual: Box<dyn Node>,
    /// The probe used for pointer collision.
    pub collision: Box<dyn Node>,
    /// The speech bubble container.
    pub speech: Box<dyn Node>,
}

impl Handles {
    /// Bundles three nodes.
    #[must_use]
    pub fn new(visual: Box<dyn Node>, collision: Box<dyn Node>, speech: Box<dyn Node>) -> Self {
        Self {
            visual,
            collision,
            speech,
        }
    }

    /// Creates handles backed by [`HeadlessNode`]s.
    #[must_use]
    pub fn headless() -> Self {
        Self::new(
            Box::new(HeadlessNode::new()),
            Box::new(HeadlessNode::new()),
            Box::new(HeadlessNode::new()),
        )
    }

    /// Detaches all three nodes.
    pub(crate) fn detach_all(&mut self) {
        self.visual.detach();
        self.collision.detach();
        self.speech.detach();
    }
}
