use log::debug;

use crate::collision::BroadPhase;
use crate::core::{Clock, Vec2};
use crate::domain::config::WorldBounds;

use super::PhysicsWorld;

pub(super) fn set_gravity<C: Clock>(world: &mut PhysicsWorld<C>, x: f32, y: f32) {
    world.config.gravity = Vec2::new(x, y);
}

pub(super) fn set_bounds<C: Clock>(world: &mut PhysicsWorld<C>, bounds: Option<WorldBounds>) {
    debug!("world bounds set to {bounds:?}");
    world.config.bounds = bounds;
}

pub(super) fn set_broad_phase<C: Clock>(world: &mut PhysicsWorld<C>, broad_phase: Box<dyn BroadPhase>) {
    world.broad_phase = broad_phase;
    world.pair_buffer.clear();
}
