pub mod config;
pub mod error;
pub mod scene;

pub use config::{PhysicsConfig, WorldBounds};
pub use error::{PhysicsError, PhysicsResult};
pub use scene::{ComponentFlags, ComponentKind, ComponentProperties, SceneComponent, SceneObject};
