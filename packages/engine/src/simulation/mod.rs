//! PhysicsWorld - one simulation session
//!
//! The world owns the body registry, timing state and config. It only
//! orchestrates; integration lives in `integrator`, contacts in `collision`.
//!
//! Session lifecycle:
//! - Idle: empty registry, `step` is inert
//! - Populating: bodies are being added from the scene
//! - Running: the host ticks `step` once per frame
//! - `reset` returns to Idle from anywhere

use crate::collision::{AllPairs, BroadPhase};
use crate::core::{Clock, SystemClock};
use crate::domain::config::{PhysicsConfig, WorldBounds};
use crate::domain::error::PhysicsResult;
use crate::domain::scene::{SceneComponent, SceneObject};
use crate::registry::BodyRegistry;
use crate::rigid_body::{BodyPosition, RigidBody};

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::PhysicsEngine;
pub use perf_stats::StepStats;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Populating,
    Running,
}

/// Result of offering a scene object to the simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// No enabled rigidbody or collider
    Ignored,
}

pub struct PhysicsWorld<C: Clock = SystemClock> {
    config: PhysicsConfig,
    registry: BodyRegistry,
    broad_phase: Box<dyn BroadPhase>,
    pair_buffer: Vec<(usize, usize)>,
    clock: C,
    last_tick_ms: f64,
    session: SessionState,
    frame: u64,
    stats: StepStats,
}

impl PhysicsWorld<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(PhysicsConfig::default(), SystemClock::new())
    }

    pub fn with_config(config: PhysicsConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl Default for PhysicsWorld<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PhysicsWorld<C> {
    pub fn with_clock(config: PhysicsConfig, clock: C) -> Self {
        let last_tick_ms = clock.now_ms();
        Self {
            config,
            registry: BodyRegistry::new(),
            broad_phase: Box::new(AllPairs),
            pair_buffer: Vec::new(),
            clock,
            last_tick_ms,
            session: SessionState::Idle,
            frame: 0,
            stats: StepStats::default(),
        }
    }

    pub fn config(&self) -> &PhysicsConfig { &self.config }

    pub fn session(&self) -> SessionState { self.session }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn body_count(&self) -> usize { self.registry.len() }

    /// Bodies in registry order
    pub fn bodies(&self) -> &[RigidBody] { self.registry.bodies() }

    pub fn body(&self, id: &str) -> Option<&RigidBody> { self.registry.get(id) }

    /// Current positions without advancing time
    pub fn snapshot(&self) -> Vec<BodyPosition> { self.registry.snapshot() }

    pub fn last_step_stats(&self) -> StepStats { self.stats }

    // === SETTINGS ===

    /// Gravity for bodies added from now on; registered bodies keep theirs.
    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn set_bounds(&mut self, bounds: Option<WorldBounds>) {
        settings::set_bounds(self, bounds);
    }

    pub fn set_broad_phase(&mut self, broad_phase: Box<dyn BroadPhase>) {
        settings::set_broad_phase(self, broad_phase);
    }

    // === SESSION API ===

    /// Drop every body and restart the tick clock. Idempotent.
    pub fn reset(&mut self) {
        commands::reset(self);
    }

    /// Register a scene object if it carries an enabled rigidbody or collider.
    pub fn add_body(
        &mut self,
        object: &SceneObject,
        components: &[SceneComponent],
    ) -> PhysicsResult<AddOutcome> {
        commands::add_body(self, object, components)
    }

    /// `add_body` using the components embedded in the object
    pub fn add_scene_object(&mut self, object: &SceneObject) -> PhysicsResult<AddOutcome> {
        commands::add_body(self, object, object.own_components())
    }

    /// Register a prebuilt body directly
    pub fn add_rigid_body(&mut self, body: RigidBody) -> PhysicsResult<()> {
        commands::add_rigid_body(self, body)
    }

    pub fn remove_body(&mut self, id: &str) -> bool {
        commands::remove_body(self, id)
    }

    /// Advance by the wall-clock time since the last tick (clamped)
    pub fn step(&mut self) -> Vec<BodyPosition> {
        step::step(self)
    }

    /// Advance by an explicit `dt` in seconds (clamped the same way)
    pub fn step_by(&mut self, dt: f32) -> Vec<BodyPosition> {
        step::step_by(self, dt)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
