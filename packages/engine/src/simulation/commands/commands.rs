use log::debug;

use crate::core::Clock;
use crate::domain::error::PhysicsResult;
use crate::domain::scene::{ComponentFlags, SceneComponent, SceneObject};
use crate::rigid_body::RigidBody;

use super::{AddOutcome, PhysicsWorld, SessionState};

pub(super) fn reset<C: Clock>(world: &mut PhysicsWorld<C>) {
    if world.session != SessionState::Idle {
        debug!("session {:?} -> Idle, dropping {} bodies", world.session, world.registry.len());
    }
    world.registry.clear();
    world.pair_buffer.clear();
    world.last_tick_ms = world.clock.now_ms();
    world.session = SessionState::Idle;
    world.frame = 0;
    world.stats.reset();
}

pub(super) fn add_body<C: Clock>(
    world: &mut PhysicsWorld<C>,
    object: &SceneObject,
    components: &[SceneComponent],
) -> PhysicsResult<AddOutcome> {
    let flags = ComponentFlags::from_components(components);
    let Some(body) = object.to_body(&flags, &world.config)? else {
        return Ok(AddOutcome::Ignored);
    };
    add_rigid_body(world, body)?;
    Ok(AddOutcome::Added)
}

pub(super) fn add_rigid_body<C: Clock>(world: &mut PhysicsWorld<C>, body: RigidBody) -> PhysicsResult<()> {
    world.registry.add(body)?;
    if world.session == SessionState::Idle {
        debug!("session Idle -> Populating");
        world.session = SessionState::Populating;
    }
    Ok(())
}

pub(super) fn remove_body<C: Clock>(world: &mut PhysicsWorld<C>, id: &str) -> bool {
    world.registry.remove(id)
}
