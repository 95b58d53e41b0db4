//! Spawn policy for new spheres.
//!
//! A [`SpawnPolicy`] owns the RNG used for spawning so that two simulations
//! built with the same [`SimConfig::rng_seed`](crate::SimConfig) produce the
//! same bodies in the same order.

use crate::body::Body;
use crate::config::SpawnConfig;
use crate::error::BodyError;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Builds batches of randomized bodies.
#[derive(Debug, Clone)]
pub struct SpawnPolicy {
    config: SpawnConfig,
    /// Validated once; every spawned body starts as a copy.
    template: Body,
    rng: SmallRng,
}

impl SpawnPolicy {
    /// Create a policy. With `seed == None` the RNG is seeded from the clock.
    ///
    /// Fails if `radius` is not a valid body radius.
    pub fn new(config: SpawnConfig, radius: f32, seed: Option<u64>) -> Result<Self, BodyError> {
        let template = Body::new(Vec3::ZERO, Vec3::ZERO, radius)?;
        let seed = seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(42)
        });

        Ok(Self {
            config,
            template,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    #[inline]
    pub fn batch_size(&self) -> u32 {
        self.config.batch_size
    }

    /// Create one body: random XZ within the spread at the spawn height,
    /// random velocity per axis, random color.
    pub fn spawn_one(&mut self) -> Body {
        let spread = self.config.spread;
        let speed = self.config.speed;

        let position = Vec3::new(
            self.rng.gen_range(-spread..spread),
            self.config.height,
            self.rng.gen_range(-spread..spread),
        );
        let velocity = Vec3::new(
            self.rng.gen_range(-speed..speed),
            self.rng.gen_range(-speed..speed),
            self.rng.gen_range(-speed..speed),
        );
        let color = self.random_color();

        let mut body = self.template.clone().with_color(color);
        body.position = position;
        body.velocity = velocity;
        body
    }

    /// Create a full batch.
    pub fn spawn_batch(&mut self) -> Vec<Body> {
        (0..self.config.batch_size).map(|_| self.spawn_one()).collect()
    }

    /// Random RGB color (each channel 0-1).
    fn random_color(&mut self) -> Vec3 {
        Vec3::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(seed: u64) -> SpawnPolicy {
        SpawnPolicy::new(SpawnConfig::default(), 5.0, Some(seed)).unwrap()
    }

    #[test]
    fn test_batch_size() {
        let bodies = policy(1).spawn_batch();
        assert_eq!(bodies.len(), 100);
    }

    #[test]
    fn test_spawn_ranges() {
        let mut policy = policy(2);
        for _ in 0..500 {
            let body = policy.spawn_one();
            assert!(body.position.x >= -20.0 && body.position.x < 20.0);
            assert!(body.position.z >= -20.0 && body.position.z < 20.0);
            assert_eq!(body.position.y, 100.0);
            for v in body.velocity.to_array() {
                assert!((-100.0..100.0).contains(&v));
            }
            let c = body.color();
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
            assert_eq!(body.bounce_count(), 0);
            assert!(body.is_removable());
            assert_eq!(body.radius(), 5.0);
        }
    }

    #[test]
    fn test_same_seed_same_bodies() {
        let a = policy(99).spawn_batch();
        let b = policy(99).spawn_batch();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let policy = SpawnPolicy::new(SpawnConfig::default(), 0.0, Some(3));
        assert_eq!(policy.err(), Some(BodyError::InvalidRadius(0.0)));
    }
}
