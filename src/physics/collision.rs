use crate::body::Body;
use glam::Vec3;

/// Normal used when two overlapping bodies share the exact same center.
pub const FALLBACK_NORMAL: Vec3 = Vec3::Y;

/// Resolve every overlapping pair in a single ordered pass.
///
/// Pairs are visited `(0,1), (0,2), .., (1,2), ..`. Each pair sees the
/// corrections already applied by earlier pairs in the same pass, so the
/// result depends on collection order. Returns the number of pairs resolved.
pub fn resolve_pairs(bodies: &mut [Body]) -> usize {
    let mut resolved = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                resolved += 1;
            }
        }
    }
    resolved
}

/// Separate two overlapping bodies and exchange their normal velocities.
///
/// Both bodies move by half the overlap regardless of size, and the
/// exchange treats them as equal masses. Returns `false` if the bodies do
/// not overlap.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    let delta = b.position - a.position;
    let dist = delta.length();
    let min_dist = a.radius() + b.radius();
    if dist >= min_dist {
        return false;
    }

    let normal = delta.try_normalize().unwrap_or(FALLBACK_NORMAL);

    let overlap = min_dist - dist;
    a.position -= normal * (overlap * 0.5);
    b.position += normal * (overlap * 0.5);

    let a_proj = normal * a.velocity.dot(normal);
    let b_proj = normal * b.velocity.dot(normal);
    a.velocity = a.velocity + b_proj - a_proj;
    b.velocity = b.velocity + a_proj - b_proj;

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f32, vx: f32) -> Body {
        Body::new(Vec3::new(x, 0.0, 0.0), Vec3::new(vx, 0.0, 0.0), 5.0).unwrap()
    }

    #[test]
    fn test_head_on_overlap() {
        let mut a = Body::new(Vec3::ZERO, Vec3::new(10.0, 3.0, 0.0), 5.0).unwrap();
        let mut b = Body::new(Vec3::new(8.0, 0.0, 0.0), Vec3::new(-4.0, 0.0, 7.0), 5.0).unwrap();

        assert!(resolve_pair(&mut a, &mut b));

        let separation = (b.position - a.position).length();
        assert!((separation - 10.0).abs() < 1e-5);
        assert!((a.position.x - (-1.0)).abs() < 1e-5);
        assert!((b.position.x - 9.0).abs() < 1e-5);

        // normal components swapped
        assert!((a.velocity.x - (-4.0)).abs() < 1e-5);
        assert!((b.velocity.x - 10.0).abs() < 1e-5);
        // tangential untouched
        assert_eq!(a.velocity.y, 3.0);
        assert_eq!(b.velocity.z, 7.0);
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let mut a = ball(0.0, 1.0);
        let mut b = ball(10.0, -1.0);
        assert!(!resolve_pair(&mut a, &mut b));
        assert_eq!(a.velocity.x, 1.0);
    }

    #[test]
    fn test_coincident_uses_fallback_normal() {
        let mut a = Body::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 1.0), 5.0).unwrap();
        let mut b = Body::new(Vec3::ZERO, Vec3::new(0.0, -3.0, 1.0), 5.0).unwrap();

        assert!(resolve_pair(&mut a, &mut b));

        assert!(a.position.is_finite() && b.position.is_finite());
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
        assert_eq!(a.position, Vec3::new(0.0, -5.0, 0.0));
        assert_eq!(b.position, Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(a.velocity.y, -3.0);
        assert_eq!(b.velocity.y, 2.0);
    }

    #[test]
    fn test_sequential_pairs_see_earlier_corrections() {
        // b sits between a and c; resolving (a,b) pushes b into c.
        let mut bodies = vec![ball(0.0, 0.0), ball(9.0, 0.0), ball(18.5, 0.0)];
        let resolved = resolve_pairs(&mut bodies);

        // (0,1) overlaps by 1 -> b moves to 9.5, now overlapping c by 1.0
        assert_eq!(resolved, 2);
        assert!((bodies[0].position.x - (-0.5)).abs() < 1e-5);
        assert!((bodies[1].position.x - 9.0).abs() < 1e-5);
        assert!((bodies[2].position.x - 19.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(resolve_pairs(&mut []), 0);
        let mut one = vec![ball(0.0, 1.0)];
        assert_eq!(resolve_pairs(&mut one), 0);
    }
}
