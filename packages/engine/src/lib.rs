//! Kinetic Engine - 2D rigid-body physics for the sprite editor's play mode
//!
//! Architecture:
//! - core/        - Vector math, clocks, logging
//! - domain/      - Scene records, config, errors
//! - systems/     - Bodies, registry, integrator, collision resolver
//! - simulation/  - Session orchestration and the WASM API

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths used throughout the crate
pub use systems::collision;
pub use systems::integrator;
pub use systems::registry;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook plus console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if self::core::logging::init_console_logger(level).is_ok() {
        log::info!("Kinetic physics engine {} initialized", version());
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use self::core::{Clock, ManualClock, SystemClock, Vec2};
pub use domain::{PhysicsConfig, PhysicsError, PhysicsResult, SceneComponent, SceneObject, WorldBounds};
pub use rigid_body::{BodyPosition, Material, RigidBody};
pub use simulation::{AddOutcome, PhysicsEngine, PhysicsWorld, SessionState, StepStats};
