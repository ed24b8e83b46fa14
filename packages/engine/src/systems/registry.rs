//! BodyRegistry - insertion-ordered arena of bodies with an id index
//!
//! Iteration order is insertion order and survives removals, so pair indices
//! handed out by the broad phase stay meaningful between calls.

use std::collections::HashMap;

use log::{debug, warn};

use crate::domain::error::{PhysicsError, PhysicsResult};
use crate::rigid_body::{BodyId, BodyPosition, RigidBody};

#[derive(Default)]
pub struct BodyRegistry {
    bodies: Vec<RigidBody>,
    index: HashMap<BodyId, usize>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a body under its id.
    ///
    /// Duplicate ids are rejected and leave the registered body untouched.
    /// Non-finite state is rejected before anything is stored.
    pub fn add(&mut self, body: RigidBody) -> PhysicsResult<()> {
        body.check_finite()?;
        if self.index.contains_key(body.id()) {
            warn!("rejecting duplicate body `{}`", body.id());
            return Err(PhysicsError::DuplicateBody(body.id().to_string()));
        }
        debug!(
            "registered {} body `{}`",
            if body.is_static() { "static" } else { "dynamic" },
            body.id()
        );
        self.index.insert(body.id().to_string(), self.bodies.len());
        self.bodies.push(body);
        Ok(())
    }

    /// Remove a body by id. Returns false if it was not registered.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(idx) = self.index.remove(id) else {
            return false;
        };
        self.bodies.remove(idx);
        for (offset, body) in self.bodies[idx..].iter().enumerate() {
            if let Some(slot) = self.index.get_mut(body.id()) {
                *slot = idx + offset;
            }
        }
        true
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&RigidBody> {
        self.index.get(id).map(|&idx| &self.bodies[idx])
    }

    /// Bodies in insertion order
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    /// Position records for every body, in insertion order
    pub fn snapshot(&self) -> Vec<BodyPosition> {
        self.bodies.iter().map(RigidBody::position_record).collect()
    }
}
