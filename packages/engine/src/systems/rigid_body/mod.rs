//! RigidBody - an axis-aligned box that moves as a unit
//!
//! Bodies store their kinematic state, shape and material. The registry owns
//! them; the integrator and the collision resolver mutate position and
//! velocity only.

mod aabb;
mod body;

pub use aabb::Aabb;
pub use body::{BodyId, BodyPosition, Material, RigidBody};
