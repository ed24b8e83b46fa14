use log::warn;
use serde::Serialize;

use crate::core::Vec2;
use crate::domain::config::{DEFAULT_BOUNCINESS, DEFAULT_FRICTION, DEFAULT_MASS, MIN_MASS};
use crate::domain::error::{PhysicsError, PhysicsResult};

use super::aabb::Aabb;

/// Opaque id shared with the owning scene object
pub type BodyId = String;

/// Static material configuration, fixed once the body is registered
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Ignored for static bodies
    pub mass: f32,
    /// Fraction of velocity kept per second, in [0, 1]
    pub friction: f32,
    /// Restitution, in [0, 1]
    pub bounciness: f32,
}

impl Material {
    pub fn new(mass: f32, friction: f32, bounciness: f32) -> Self {
        Self {
            mass,
            friction: friction.clamp(0.0, 1.0),
            bounciness: bounciness.clamp(0.0, 1.0),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(DEFAULT_MASS, DEFAULT_FRICTION, DEFAULT_BOUNCINESS)
    }
}

/// Position record handed back to the host after each step
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyPosition {
    pub id: BodyId,
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned rectangular rigid body.
///
/// `pos` is the centre of the box, the same point the editor draws and
/// hit-tests objects around; the box spans `pos ± half_extents`. Rotation never
/// enters the collision shape.
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    id: BodyId,

    // === Kinematic state ===
    pub(crate) pos: Vec2,
    pub(crate) velocity: Vec2,
    /// Constant acceleration (gravity), set at creation
    acceleration: Vec2,

    // === Shape ===
    half_extents: Vec2,

    // === Material ===
    material: Material,
    /// 0 for static bodies
    inv_mass: f32,
    is_static: bool,
}

impl RigidBody {
    /// Create a dynamic rectangle with default material and no acceleration
    pub fn new_rect(id: impl Into<BodyId>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            half_extents: Vec2::new(width * 0.5, height * 0.5),
            material: Material::default(),
            inv_mass: 1.0 / DEFAULT_MASS,
            is_static: false,
        }
    }

    /// Create an immovable rectangle
    pub fn new_static_rect(id: impl Into<BodyId>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new_rect(id, x, y, width, height).into_static()
    }

    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self.velocity = Vec2::zero();
        self.acceleration = Vec2::zero();
        self.inv_mass = 0.0;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        if !self.is_static {
            self.velocity = velocity;
        }
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        if !self.is_static {
            self.acceleration = acceleration;
        }
        self
    }

    /// Set the material. A dynamic mass below `MIN_MASS` is raised to it so the
    /// impulse solver never divides by zero.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        if self.is_static {
            self.inv_mass = 0.0;
            return self;
        }
        if material.mass < MIN_MASS {
            warn!(
                "body `{}` has mass {}, clamping to {}",
                self.id, material.mass, MIN_MASS
            );
            self.material.mass = MIN_MASS;
        }
        self.inv_mass = 1.0 / self.material.mass;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extents)
    }

    pub fn position_record(&self) -> BodyPosition {
        BodyPosition { id: self.id.clone(), x: self.pos.x, y: self.pos.y }
    }

    /// Reject NaN/inf anywhere in the body's state
    pub fn check_finite(&self) -> PhysicsResult<()> {
        let fields: [(&'static str, bool); 6] = [
            ("position", self.pos.is_finite()),
            ("velocity", self.velocity.is_finite()),
            ("acceleration", self.acceleration.is_finite()),
            ("size", self.half_extents.is_finite()),
            ("friction or bounciness", self.material.friction.is_finite() && self.material.bounciness.is_finite()),
            ("mass", self.is_static || (self.material.mass.is_finite() && self.inv_mass.is_finite())),
        ];
        for (field, ok) in fields {
            if !ok {
                return Err(PhysicsError::NonFinite { id: self.id.clone(), field });
            }
        }
        if !(self.half_extents.x > 0.0 && self.half_extents.y > 0.0) {
            let size = self.size();
            return Err(PhysicsError::InvalidShape {
                id: self.id.clone(),
                width: size.x,
                height: size.y,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_body_has_zero_inverse_mass() {
        let body = RigidBody::new_static_rect("floor", 0.0, 0.0, 100.0, 10.0)
            .with_material(Material::new(0.0, 1.0, 0.5));
        assert!(body.is_static());
        assert_eq!(body.inv_mass(), 0.0);
        assert!(body.check_finite().is_ok());
    }

    #[test]
    fn dynamic_mass_is_clamped_to_minimum() {
        let body = RigidBody::new_rect("a", 0.0, 0.0, 10.0, 10.0)
            .with_material(Material::new(-3.0, 1.0, 0.5));
        assert_eq!(body.material().mass, MIN_MASS);
        assert_eq!(body.inv_mass(), 1.0 / MIN_MASS);
    }

    #[test]
    fn material_coefficients_are_clamped() {
        let m = Material::new(1.0, 1.7, -0.2);
        assert_eq!(m.friction, 1.0);
        assert_eq!(m.bounciness, 0.0);
    }

    #[test]
    fn static_body_ignores_velocity_and_acceleration() {
        let body = RigidBody::new_static_rect("wall", 0.0, 0.0, 1.0, 1.0)
            .with_velocity(Vec2::new(5.0, 5.0))
            .with_acceleration(Vec2::new(0.0, 200.0));
        assert_eq!(body.velocity(), Vec2::zero());
        assert_eq!(body.acceleration(), Vec2::zero());
    }

    #[test]
    fn non_finite_state_is_reported_by_field() {
        let body = RigidBody::new_rect("a", f32::NAN, 0.0, 10.0, 10.0);
        match body.check_finite() {
            Err(PhysicsError::NonFinite { id, field }) => {
                assert_eq!(id, "a");
                assert_eq!(field, "position");
            }
            other => panic!("expected NonFinite, got {other:?}"),
        }

        let body = RigidBody::new_rect("b", 0.0, 0.0, 10.0, 10.0)
            .with_velocity(Vec2::new(0.0, f32::INFINITY));
        assert!(matches!(body.check_finite(), Err(PhysicsError::NonFinite { field: "velocity", .. })));
    }

    #[test]
    fn empty_or_negative_size_is_an_invalid_shape() {
        for (w, h) in [(-4.0, 10.0), (0.0, 10.0), (10.0, 0.0)] {
            let body = RigidBody::new_rect("a", 0.0, 0.0, w, h);
            assert!(
                matches!(body.check_finite(), Err(PhysicsError::InvalidShape { .. })),
                "{w}x{h} accepted"
            );
        }
    }
}
