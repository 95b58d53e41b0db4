//! Simulation configuration.
//!
//! Defaults reproduce the reference scene: gravity 100, floor at -4,
//! a fixed 0.02 s step, 0.8 restitution, removal after 3 bounces and
//! batches of 100 spheres per spawn request.
//!
//! ```ignore
//! let config = SimConfig::default()
//!     .with_spawn_batch(25)
//!     .with_rng_seed(7);
//! let sim = Simulation::new(config)?;
//! ```

use crate::error::{BodyError, ConfigError};
use crate::physics::Floor;
use glam::Vec3;

/// Downward acceleration magnitude.
pub const GRAVITY: f32 = 100.0;
/// Apex height used to derive the seed launch speed.
pub const BOUNCE_DISTANCE: f32 = 20.0;
/// Height of the floor plane.
pub const FLOOR_Y: f32 = -4.0;
/// Fixed time step per tick, in seconds.
pub const TIME_STEP: f32 = 0.02;
/// Vertical speed retained per floor bounce.
pub const RESTITUTION: f32 = 0.8;
/// Spheres created per spawn request.
pub const SPAWN_BATCH: u32 = 100;
/// Floor contacts before a removable sphere is despawned.
pub const REMOVAL_THRESHOLD: u32 = 3;
/// Radius of every sphere in the reference scene.
pub const SPHERE_RADIUS: f32 = 5.0;

/// Seed sphere color, pure blue.
pub const SEED_COLOR: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// All tunables of a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub gravity: f32,
    pub bounce_distance: f32,
    pub floor_y: f32,
    pub time_step: f32,
    pub restitution: f32,
    pub removal_threshold: u32,
    /// Radius for the seed and every spawned sphere.
    pub radius: f32,
    pub seed_position: Vec3,
    pub spawn: SpawnConfig,
    /// Fixed RNG seed for reproducible spawning. `None` seeds from the clock.
    pub rng_seed: Option<u64>,
}

/// Parameters of a spawn batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnConfig {
    pub batch_size: u32,
    /// Height at which new spheres appear.
    pub height: f32,
    /// Half-width of the square in XZ where spheres appear.
    pub spread: f32,
    /// Maximum speed per axis; each component is drawn from `-speed..speed`.
    pub speed: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            batch_size: SPAWN_BATCH,
            height: 100.0,
            spread: 20.0,
            speed: 100.0,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            bounce_distance: BOUNCE_DISTANCE,
            floor_y: FLOOR_Y,
            time_step: TIME_STEP,
            restitution: RESTITUTION,
            removal_threshold: REMOVAL_THRESHOLD,
            radius: SPHERE_RADIUS,
            seed_position: Vec3::new(0.0, 5.0, 0.0),
            spawn: SpawnConfig::default(),
            rng_seed: None,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_floor_y(mut self, floor_y: f32) -> Self {
        self.floor_y = floor_y;
        self
    }

    pub fn with_time_step(mut self, dt: f32) -> Self {
        self.time_step = dt;
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_removal_threshold(mut self, bounces: u32) -> Self {
        self.removal_threshold = bounces;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_seed_position(mut self, position: Vec3) -> Self {
        self.seed_position = position;
        self
    }

    pub fn with_bounce_distance(mut self, height: f32) -> Self {
        self.bounce_distance = height;
        self
    }

    /// Set how many spheres one spawn request creates.
    pub fn with_spawn_batch(mut self, batch_size: u32) -> Self {
        self.spawn.batch_size = batch_size;
        self
    }

    pub fn with_spawn(mut self, spawn: SpawnConfig) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Floor parameters derived from this config.
    pub fn floor(&self) -> Floor {
        Floor {
            y: self.floor_y,
            restitution: self.restitution,
            removal_threshold: self.removal_threshold,
        }
    }

    /// Vertical speed that carries a body `bounce_distance` above its
    /// starting point, `g * sqrt(2h / g)`.
    pub fn launch_speed(&self) -> f32 {
        self.gravity * (2.0 * self.bounce_distance / self.gravity).sqrt()
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(ConfigError::TimeStep(self.time_step));
        }
        if !(self.restitution > 0.0 && self.restitution < 1.0) {
            return Err(ConfigError::Restitution(self.restitution));
        }
        if self.removal_threshold == 0 {
            return Err(ConfigError::RemovalThreshold);
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(BodyError::InvalidRadius(self.radius).into());
        }
        if !self.floor_y.is_finite() || !self.seed_position.is_finite() {
            return Err(ConfigError::Spawn("floor and seed position must be finite"));
        }
        if !(self.bounce_distance.is_finite() && self.bounce_distance >= 0.0) {
            return Err(ConfigError::Spawn("bounce distance must be non-negative"));
        }
        let spawn = &self.spawn;
        if !(spawn.spread.is_finite() && spawn.spread > 0.0) {
            return Err(ConfigError::Spawn("spread must be positive"));
        }
        if !(spawn.speed.is_finite() && spawn.speed > 0.0) {
            return Err(ConfigError::Spawn("speed must be positive"));
        }
        if !spawn.height.is_finite() {
            return Err(ConfigError::Spawn("height must be finite"));
        }
        Ok(())
    }
}
