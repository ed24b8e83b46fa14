//! Semi-implicit Euler integration for dynamic bodies.

use crate::domain::config::WorldBounds;
use crate::rigid_body::RigidBody;

/// Advance every dynamic body by `dt` seconds. Returns how many were moved.
pub fn integrate(bodies: &mut [RigidBody], dt: f32, bounds: Option<WorldBounds>) -> u32 {
    let mut moved = 0;
    for body in bodies.iter_mut() {
        if body.is_static() {
            continue;
        }
        integrate_body(body, dt, bounds);
        moved += 1;
    }
    moved
}

pub fn integrate_body(body: &mut RigidBody, dt: f32, bounds: Option<WorldBounds>) {
    // Velocity before position
    body.velocity += body.acceleration() * dt;

    // friction^dt keeps the decay per second independent of the tick size
    let retain = body.material().friction.powf(dt);
    body.velocity = body.velocity * retain;

    body.pos += body.velocity * dt;

    let Some(bounds) = bounds else {
        return;
    };
    let bounciness = body.material().bounciness;
    if body.pos.x < bounds.min_x {
        body.pos.x = bounds.min_x;
        body.velocity.x = body.velocity.x.abs() * bounciness;
    }
    if body.pos.y < bounds.min_y {
        body.pos.y = bounds.min_y;
        body.velocity.y = body.velocity.y.abs() * bounciness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::rigid_body::Material;
    use approx::assert_relative_eq;

    fn falling(y: f32) -> RigidBody {
        RigidBody::new_rect("a", 10.0, y, 4.0, 4.0)
            .with_material(Material::new(1.0, 1.0, 0.5))
            .with_acceleration(Vec2::new(0.0, 100.0))
    }

    #[test]
    fn velocity_updates_before_position() {
        let mut body = falling(10.0);
        integrate_body(&mut body, 0.1, None);
        assert_relative_eq!(body.velocity().y, 10.0);
        // Semi-implicit: position uses the new velocity
        assert_relative_eq!(body.pos().y, 11.0);
    }

    #[test]
    fn static_bodies_are_skipped() {
        let mut bodies = vec![
            RigidBody::new_static_rect("floor", 0.0, 0.0, 10.0, 10.0),
            falling(10.0),
        ];
        let moved = integrate(&mut bodies, 0.1, None);
        assert_eq!(moved, 1);
        assert_eq!(bodies[0].pos(), Vec2::zero());
    }

    #[test]
    fn lower_bound_reflects_with_bounciness() {
        let mut body = RigidBody::new_rect("a", 1.0, 1.0, 4.0, 4.0)
            .with_material(Material::new(1.0, 1.0, 0.5))
            .with_velocity(Vec2::new(-100.0, -40.0));
        integrate_body(&mut body, 0.1, Some(WorldBounds::default()));
        assert_eq!(body.pos(), Vec2::zero());
        assert_relative_eq!(body.velocity().x, 50.0);
        assert_relative_eq!(body.velocity().y, 20.0);
    }

    #[test]
    fn no_upper_bound() {
        let mut body = falling(1.0e6);
        integrate_body(&mut body, 0.1, Some(WorldBounds::default()));
        assert!(body.pos().y > 1.0e6);
    }

    #[test]
    fn disabled_bounds_let_bodies_go_negative() {
        let mut body = RigidBody::new_rect("a", 0.0, 0.0, 4.0, 4.0)
            .with_material(Material::new(1.0, 1.0, 0.5))
            .with_velocity(Vec2::new(-10.0, 0.0));
        integrate_body(&mut body, 0.1, None);
        assert_relative_eq!(body.pos().x, -1.0);
    }
}
