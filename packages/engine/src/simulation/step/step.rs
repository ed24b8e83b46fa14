use log::{debug, trace};

use crate::collision::resolve_all;
use crate::core::Clock;
use crate::integrator::integrate;
use crate::rigid_body::BodyPosition;

use super::{PhysicsWorld, SessionState};

/// Clamp a tick to `[0, max_step]`; NaN or negative elapsed time counts as 0.
pub(super) fn clamp_dt(dt: f32, max_step: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_step)
    }
}

pub(super) fn step<C: Clock>(world: &mut PhysicsWorld<C>) -> Vec<BodyPosition> {
    let now = world.clock.now_ms();
    let elapsed = ((now - world.last_tick_ms) / 1000.0) as f32;
    world.last_tick_ms = now;
    step_by(world, elapsed)
}

pub(super) fn step_by<C: Clock>(world: &mut PhysicsWorld<C>, dt: f32) -> Vec<BodyPosition> {
    if world.session == SessionState::Idle {
        return Vec::new();
    }
    if world.session == SessionState::Populating {
        debug!("session Populating -> Running with {} bodies", world.registry.len());
        world.session = SessionState::Running;
    }

    let start_ms = world.clock.now_ms();
    let dt = clamp_dt(dt, world.config.max_step_seconds);

    // === INTEGRATION ===
    let bounds = world.config.bounds;
    let integrated = integrate(world.registry.bodies_mut(), dt, bounds);

    // === COLLISIONS ===
    let summary = resolve_all(
        world.registry.bodies_mut(),
        world.broad_phase.as_mut(),
        &mut world.pair_buffer,
    );

    world.frame += 1;
    world.stats.reset();
    world.stats.frame = world.frame;
    world.stats.dt = dt;
    world.stats.bodies = world.registry.len() as u32;
    world.stats.integrated = integrated;
    world.stats.record_collisions(summary);
    world.stats.step_ms = world.clock.now_ms() - start_ms;

    trace!(
        "frame {} dt={:.4}s contacts={} impulses={} skipped={}",
        world.frame, dt, summary.contacts, summary.impulses, summary.skipped
    );

    world.registry.snapshot()
}
