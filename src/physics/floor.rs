use crate::body::Body;

/// Floor plane parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    /// Height of the impenetrable plane.
    pub y: f32,
    /// Fraction of vertical speed kept after a bounce.
    pub restitution: f32,
    /// Bounces after which a removable body is despawned.
    pub removal_threshold: u32,
}

/// Clamp a body to the floor and bounce it.
///
/// Bodies already at or above `floor.y` are left untouched. Returns `true`
/// when the body has reached the removal threshold and is not the seed.
pub fn resolve_floor(body: &mut Body, floor: &Floor) -> bool {
    if body.position.y < floor.y {
        body.position.y = floor.y;
        body.velocity.y = body.velocity.y.abs() * floor.restitution;
        body.record_bounce();
    }
    body.should_remove(floor.removal_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const FLOOR: Floor = Floor {
        y: -4.0,
        restitution: 0.8,
        removal_threshold: 3,
    };

    #[test]
    fn test_bounce_clamps_and_reflects() {
        let mut body = Body::new(Vec3::new(1.0, -6.0, 2.0), Vec3::new(3.0, -50.0, 4.0), 5.0).unwrap();
        let remove = resolve_floor(&mut body, &FLOOR);

        assert!(!remove);
        assert_eq!(body.position, Vec3::new(1.0, -4.0, 2.0));
        assert!((body.velocity.y - 40.0).abs() < 1e-4);
        // no friction
        assert_eq!(body.velocity.x, 3.0);
        assert_eq!(body.velocity.z, 4.0);
        assert_eq!(body.bounce_count(), 1);
    }

    #[test]
    fn test_above_floor_untouched() {
        let mut body = Body::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -5.0, 0.0), 5.0).unwrap();
        let before = body.clone();
        assert!(!resolve_floor(&mut body, &FLOOR));
        assert_eq!(body, before);
    }

    #[test]
    fn test_exactly_on_floor_is_not_a_bounce() {
        let mut body = Body::new(Vec3::new(0.0, -4.0, 0.0), Vec3::new(0.0, -1.0, 0.0), 5.0).unwrap();
        resolve_floor(&mut body, &FLOOR);
        assert_eq!(body.bounce_count(), 0);
        assert_eq!(body.velocity.y, -1.0);
    }

    #[test]
    fn test_upward_velocity_below_floor_still_decays() {
        let mut body = Body::new(Vec3::new(0.0, -5.0, 0.0), Vec3::new(0.0, 10.0, 0.0), 5.0).unwrap();
        resolve_floor(&mut body, &FLOOR);
        assert!((body.velocity.y - 8.0).abs() < 1e-5);
    }

    #[test]
    fn test_removal_flag_on_third_bounce() {
        let mut body = Body::new(Vec3::ZERO, Vec3::ZERO, 5.0).unwrap();
        let mut flags = Vec::new();
        for _ in 0..3 {
            body.position.y = -10.0;
            flags.push(resolve_floor(&mut body, &FLOOR));
        }
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_seed_never_flagged() {
        let mut body = Body::seed(Vec3::ZERO, Vec3::ZERO, 5.0).unwrap();
        for _ in 0..5 {
            body.position.y = -10.0;
            assert!(!resolve_floor(&mut body, &FLOOR));
        }
        assert_eq!(body.bounce_count(), 5);
    }
}
