//! Editor-side records and their conversion into bodies.
//!
//! The host sends scene objects as JSON with the editor's camelCase field
//! names. Only the transform and physics components are read; everything else
//! (name, color, texture, ...) is ignored.

use serde::{Deserialize, Serialize};

use super::config::PhysicsConfig;
use super::error::{PhysicsError, PhysicsResult};
use crate::core::Vec2;
use crate::rigid_body::{BodyPosition, Material, RigidBody};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Carried for completeness; collision shapes stay axis-aligned
    #[serde(default)]
    pub rotation: Option<f32>,
    #[serde(default)]
    pub scale: Option<Scale>,
    #[serde(default)]
    pub components: Option<Vec<SceneComponent>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Rigidbody,
    BoxCollider,
    Script,
    VisualScript,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneComponent {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default)]
    pub name: String,
    pub enabled: bool,
    #[serde(default)]
    pub properties: Option<ComponentProperties>,
}

/// Physics overrides a component may carry
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComponentProperties {
    pub mass: Option<f32>,
    #[serde(alias = "drag")]
    pub friction: Option<f32>,
    pub bounciness: Option<f32>,
    pub gravity_scale: Option<f32>,
    pub is_static: Option<bool>,
}

impl ComponentProperties {
    /// Fill unset fields from `other`
    fn or(self, other: ComponentProperties) -> Self {
        Self {
            mass: self.mass.or(other.mass),
            friction: self.friction.or(other.friction),
            bounciness: self.bounciness.or(other.bounciness),
            gravity_scale: self.gravity_scale.or(other.gravity_scale),
            is_static: self.is_static.or(other.is_static),
        }
    }
}

/// Enabled physics components of one scene object, collapsed
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComponentFlags {
    pub rigidbody: bool,
    pub collider: bool,
    pub overrides: ComponentProperties,
}

impl ComponentFlags {
    /// Rigidbody properties win over collider properties. Disabled components
    /// are ignored entirely.
    pub fn from_components(components: &[SceneComponent]) -> Self {
        let mut flags = ComponentFlags::default();
        let mut rigidbody_props = ComponentProperties::default();
        let mut collider_props = ComponentProperties::default();

        for component in components.iter().filter(|c| c.enabled) {
            let props = component.properties.unwrap_or_default();
            match component.kind {
                ComponentKind::Rigidbody => {
                    flags.rigidbody = true;
                    rigidbody_props = rigidbody_props.or(props);
                }
                ComponentKind::BoxCollider => {
                    flags.collider = true;
                    collider_props = collider_props.or(props);
                }
                ComponentKind::Script | ComponentKind::VisualScript => {}
            }
        }
        flags.overrides = rigidbody_props.or(collider_props);
        flags
    }

    pub fn is_simulated(&self) -> bool {
        self.rigidbody || self.collider
    }

    /// Collider-only objects are immovable obstacles unless told otherwise
    pub fn is_static(&self) -> bool {
        self.overrides.is_static.unwrap_or(!self.rigidbody)
    }
}

impl SceneObject {
    /// Components attached to the object itself
    pub fn own_components(&self) -> &[SceneComponent] {
        self.components.as_deref().unwrap_or(&[])
    }

    /// Scale with missing or zero factors treated as 1
    pub fn effective_scale(&self) -> Vec2 {
        let scale = self.scale.unwrap_or(Scale { x: 1.0, y: 1.0 });
        let pick = |s: f32| if s == 0.0 { 1.0 } else { s };
        Vec2::new(pick(scale.x), pick(scale.y))
    }

    /// Build the body for this object, or `None` if it carries no enabled
    /// rigidbody or collider.
    pub fn to_body(
        &self,
        flags: &ComponentFlags,
        config: &PhysicsConfig,
    ) -> PhysicsResult<Option<RigidBody>> {
        if !flags.is_simulated() {
            return Ok(None);
        }

        let scale = self.effective_scale();
        if !scale.is_finite() {
            return Err(self.non_finite("scale"));
        }
        let overrides = flags.overrides;
        let mass = overrides.mass.unwrap_or(config.default_mass);
        let friction = overrides.friction.unwrap_or(config.default_friction);
        let bounciness = overrides.bounciness.unwrap_or(config.default_bounciness);
        let gravity_scale = overrides.gravity_scale.unwrap_or(1.0);
        if !(friction.is_finite() && bounciness.is_finite()) {
            return Err(self.non_finite("friction or bounciness"));
        }
        if !gravity_scale.is_finite() {
            return Err(self.non_finite("gravity scale"));
        }

        let size = Vec2::new(self.width, self.height).scale(scale);
        let body = RigidBody::new_rect(self.id.clone(), self.x, self.y, size.x, size.y);
        let body = if flags.is_static() {
            body.into_static()
        } else {
            if !mass.is_finite() {
                return Err(self.non_finite("mass"));
            }
            body.with_acceleration(config.gravity * gravity_scale)
        };
        let body = body.with_material(Material::new(mass, friction, bounciness));
        body.check_finite()?;
        Ok(Some(body))
    }

    /// Copy a simulated position back. Returns true if anything changed.
    pub fn apply_position(&mut self, position: &BodyPosition) -> bool {
        if position.id != self.id || (self.x == position.x && self.y == position.y) {
            return false;
        }
        self.x = position.x;
        self.y = position.y;
        true
    }

    fn non_finite(&self, field: &'static str) -> PhysicsError {
        PhysicsError::NonFinite { id: self.id.clone(), field }
    }
}
