//! Particle kinematics
//!
//! Wall reflection followed by semi-implicit Euler integration. Reflection
//! only flips the velocity component; positions are never clamped, so a fast
//! particle can end a frame slightly past a wall before turning around.

use super::state::Particle;
use crate::settings::ArenaBounds;

/// Flip x/y velocity for a particle at or beyond a wall. No z bounds.
#[inline]
pub fn reflect(particle: &mut Particle, arena: &ArenaBounds) {
    if arena.outside_x(particle.position.x) {
        particle.velocity.x = -particle.velocity.x;
    }
    if arena.outside_y(particle.position.y) {
        particle.velocity.y = -particle.velocity.y;
    }
}

/// Advance one particle: reflect, then velocity, then position
pub fn integrate(particle: &mut Particle, arena: &ArenaBounds, dt: f32) {
    reflect(particle, arena);
    particle.velocity += particle.acceleration * dt;
    particle.position += particle.velocity * dt;
}

/// Advance every particle by `dt`
pub fn integrate_all<'a, I>(particles: I, arena: &ArenaBounds, dt: f32)
where
    I: IntoIterator<Item = &'a mut Particle>,
{
    for particle in particles {
        integrate(particle, arena, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec3;
    use proptest::prelude::*;

    /// The most a particle can overshoot a wall in one step
    fn max_overshoot(velocity: Vec3, dt: f32) -> f32 {
        velocity.length() * dt
    }

    fn particle(position: Vec3, velocity: Vec3) -> Particle {
        Particle::new(0, position, velocity, Vec3::ONE)
    }

    #[test]
    fn test_reflect_right_wall() {
        let arena = ArenaBounds::default();
        let mut p = particle(Vec3::new(RIGHT_WALL, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        integrate(&mut p, &arena, SIM_DT);
        assert!(p.velocity.x < 0.0);
    }

    #[test]
    fn test_reflect_bottom_wall() {
        let arena = ArenaBounds::default();
        let mut p = particle(Vec3::new(0.0, BOTTOM_WALL - 0.01, 0.0), Vec3::new(0.0, -0.5, 0.0));
        p.acceleration = Vec3::ZERO;
        integrate(&mut p, &arena, SIM_DT);
        assert!((p.velocity.y - 0.5).abs() < 1e-6);
        assert!(p.position.y > BOTTOM_WALL - 0.01);
    }

    #[test]
    fn test_no_reflection_inside() {
        let arena = ArenaBounds::default();
        let mut p = particle(Vec3::ZERO, Vec3::new(0.3, -0.2, 0.0));
        p.acceleration = Vec3::ZERO;
        integrate(&mut p, &arena, 0.5);
        assert_eq!(p.velocity, Vec3::new(0.3, -0.2, 0.0));
        assert!((p.position - Vec3::new(0.15, -0.1, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_velocity_updated_before_position() {
        let arena = ArenaBounds::default();
        let mut p = particle(Vec3::ZERO, Vec3::ZERO);
        p.acceleration = Vec3::new(0.0, -1.0, 0.0);
        integrate(&mut p, &arena, 1.0);
        // Semi-implicit: position uses the already-updated velocity
        assert_eq!(p.velocity.y, -1.0);
        assert_eq!(p.position.y, -1.0);
    }

    #[test]
    fn test_z_is_unbounded() {
        let arena = ArenaBounds::default();
        let mut p = particle(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, 1.0));
        p.acceleration = Vec3::ZERO;
        integrate(&mut p, &arena, 1.0);
        assert_eq!(p.velocity.z, 1.0);
        assert_eq!(p.position.z, 101.0);
    }

    #[test]
    fn test_overshoot_is_bounded() {
        let arena = ArenaBounds::default();
        let velocity = Vec3::new(2.0, 0.0, 0.0);
        let mut p = particle(Vec3::new(RIGHT_WALL - 0.001, 0.0, 0.0), velocity);
        p.acceleration = Vec3::ZERO;
        integrate(&mut p, &arena, 0.1);
        assert!(p.position.x > RIGHT_WALL);
        assert!(p.position.x - RIGHT_WALL <= max_overshoot(velocity, 0.1));
        integrate(&mut p, &arena, 0.1);
        assert!(p.velocity.x < 0.0);
    }

    proptest! {
        #[test]
        fn prop_zero_motion_is_idempotent(
            x in -2.0f32..2.0,
            y in -1.5f32..1.5,
            steps in 1usize..50,
            dt in 0.0f32..0.1,
        ) {
            let arena = ArenaBounds::default();
            let mut p = particle(Vec3::new(x, y, 0.0), Vec3::ZERO);
            p.acceleration = Vec3::ZERO;
            for _ in 0..steps {
                integrate(&mut p, &arena, dt);
            }
            prop_assert_eq!(p.position, Vec3::new(x, y, 0.0));
        }

        #[test]
        fn prop_zero_dt_keeps_position(x in -3.0f32..3.0, vx in -1.0f32..1.0) {
            let arena = ArenaBounds::default();
            let mut p = particle(Vec3::new(x, 0.0, 0.0), Vec3::new(vx, 0.0, 0.0));
            integrate(&mut p, &arena, 0.0);
            prop_assert_eq!(p.position.x, x);
        }
    }
}
