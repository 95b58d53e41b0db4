use crate::body::Body;

/// Advance one body by `dt` seconds under constant downward gravity.
///
/// Velocity is updated first, then position uses the new velocity
/// (semi-implicit Euler).
#[inline]
pub fn integrate(body: &mut Body, gravity: f32, dt: f32) {
    body.velocity.y -= gravity * dt;
    body.position += body.velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_gravity_then_position() {
        let mut body = Body::new(Vec3::ZERO, Vec3::new(1.0, 0.0, -2.0), 1.0).unwrap();
        integrate(&mut body, 100.0, 0.02);

        assert!((body.velocity.y - (-2.0)).abs() < 1e-6);
        // position uses the updated velocity
        assert!((body.position.x - 0.02).abs() < 1e-6);
        assert!((body.position.y - (-0.04)).abs() < 1e-6);
        assert!((body.position.z - (-0.04)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let mut body = Body::new(Vec3::ONE, Vec3::ONE, 1.0).unwrap();
        let before = body.clone();
        integrate(&mut body, 100.0, 0.0);
        assert_eq!(body, before);
    }
}
