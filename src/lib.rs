//! # bounce3d
//!
//! Spheres falling under gravity, bouncing off a floor and off each other.
//!
//! The simulation core is plain CPU code with no window or GPU dependency:
//! [`Simulation::tick`] integrates every body, resolves floor contacts
//! (despawning bodies that have bounced too often) and then resolves every
//! overlapping pair in a fixed order. A wgpu viewer built on winit is
//! available through [`run`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use bounce3d::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     bounce3d::run(SimConfig::default().with_spawn_batch(50))
//! }
//! ```
//!
//! ## Headless
//!
//! ```
//! use bounce3d::prelude::*;
//!
//! let mut sim = Simulation::new(SimConfig::default().with_rng_seed(7)).unwrap();
//! sim.request_spawn();
//! let stats = sim.tick();
//! assert_eq!(stats.spawned, 100);
//! assert_eq!(sim.body_count(), 101);
//! ```
//!
//! ## Core Concepts
//!
//! ### Bodies
//!
//! Every [`Body`] is a sphere with a position, velocity, radius and a bounce
//! counter. The single seed body created by [`Simulation::new`] is never
//! removed; spawned bodies despawn on the floor bounce that takes their count
//! to [`SimConfig::removal_threshold`].
//!
//! ### Spawning
//!
//! [`Simulation::request_spawn`] only queues a batch. Queued batches are
//! created at the start of the next tick, never in the middle of one.
//!
//! ### Rendering
//!
//! A renderer implements [`SceneGraph`]; a [`SceneSync`] mirrors the
//! simulation's spawn and despawn events into it and writes positions once
//! per frame.

pub mod app;
pub mod body;
pub mod config;
pub mod error;
mod gpu;
pub mod input;
pub mod physics;
pub mod scene;
pub mod simulation;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use app::run;
pub use body::{Body, BodyId};
pub use config::{SimConfig, SpawnConfig};
pub use error::{BodyError, ConfigError, GpuError, SimulationError};
pub use glam::Vec3;
pub use gpu::Camera;
pub use scene::{SceneGraph, SceneSync, SphereHandle, SphereInstance, SphereInstances};
pub use simulation::{SimEvent, Simulation, TickStats};
pub use spawn::SpawnPolicy;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use bounce3d::prelude::*;
/// ```
pub mod prelude {
    pub use crate::body::{Body, BodyId};
    pub use crate::config::{SimConfig, SpawnConfig};
    pub use crate::error::{BodyError, ConfigError, SimulationError};
    pub use crate::scene::{SceneGraph, SceneSync};
    pub use crate::simulation::{SimEvent, Simulation, TickStats};
    pub use crate::Vec3;
}
