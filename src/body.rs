//! Simulated spheres.
//!
//! Every body, including the seed sphere present at startup, uses the same
//! [`Body`] structure. The simulation assigns ids when a body is inserted.

use crate::error::BodyError;
use glam::Vec3;
use std::fmt;

/// Identifier of a body within one [`Simulation`](crate::Simulation).
///
/// Ids are never reused while the simulation lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    /// Raw numeric value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A sphere with position, velocity, radius and bounce state.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// World-space center.
    pub position: Vec3,
    /// Units per second.
    pub velocity: Vec3,
    radius: f32,
    pub(crate) bounce_count: u32,
    seed: bool,
    color: Vec3,
    pub(crate) id: BodyId,
}

impl Body {
    /// Create a removable body with zero bounces.
    ///
    /// Fails with [`BodyError::InvalidRadius`] if `radius` is not a finite
    /// positive number.
    pub fn new(position: Vec3, velocity: Vec3, radius: f32) -> Result<Self, BodyError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(BodyError::InvalidRadius(radius));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            bounce_count: 0,
            seed: false,
            color: Vec3::ONE,
            id: BodyId::default(),
        })
    }

    /// Create the seed body. It is exempt from removal.
    pub fn seed(position: Vec3, velocity: Vec3, radius: f32) -> Result<Self, BodyError> {
        let mut body = Self::new(position, velocity, radius)?;
        body.seed = true;
        Ok(body)
    }

    /// Set the display color (sRGB, 0-1).
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn id(&self) -> BodyId {
        self.id
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Number of floor contacts so far.
    #[inline]
    pub fn bounce_count(&self) -> u32 {
        self.bounce_count
    }

    #[inline]
    pub fn is_seed(&self) -> bool {
        self.seed
    }

    /// Whether the body may ever be despawned.
    #[inline]
    pub fn is_removable(&self) -> bool {
        !self.seed
    }

    /// Removal rule evaluated after a floor check.
    #[inline]
    pub fn should_remove(&self, removal_threshold: u32) -> bool {
        self.is_removable() && self.bounce_count >= removal_threshold
    }

    pub(crate) fn record_bounce(&mut self) {
        self.bounce_count = self.bounce_count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_radius() {
        assert_eq!(
            Body::new(Vec3::ZERO, Vec3::ZERO, 0.0),
            Err(BodyError::InvalidRadius(0.0))
        );
        assert!(Body::new(Vec3::ZERO, Vec3::ZERO, -1.0).is_err());
        assert!(Body::seed(Vec3::ZERO, Vec3::ZERO, f32::NAN).is_err());
    }

    #[test]
    fn test_new_body_defaults() {
        let body = Body::new(Vec3::Y, Vec3::X, 5.0).unwrap();
        assert_eq!(body.bounce_count(), 0);
        assert!(body.is_removable());
        assert!(!body.is_seed());
        assert_eq!(body.radius(), 5.0);
    }

    #[test]
    fn test_seed_is_never_removable() {
        let mut body = Body::seed(Vec3::ZERO, Vec3::ZERO, 5.0).unwrap();
        for _ in 0..10 {
            body.record_bounce();
        }
        assert_eq!(body.bounce_count(), 10);
        assert!(!body.should_remove(3));
    }

    #[test]
    fn test_should_remove_at_threshold() {
        let mut body = Body::new(Vec3::ZERO, Vec3::ZERO, 1.0).unwrap();
        body.record_bounce();
        body.record_bounce();
        assert!(!body.should_remove(3));
        body.record_bounce();
        assert!(body.should_remove(3));
    }
}
