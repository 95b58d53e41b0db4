//! The simulation world and its per-tick update.
//!
//! [`Simulation`] owns every body exclusively. Spawn requests coming from
//! input are queued and applied at the start of the next [`Simulation::tick`],
//! never in the middle of one.
//!
//! ```ignore
//! let mut sim = Simulation::new(SimConfig::default())?;
//! sim.request_spawn();
//! loop {
//!     sim.tick();
//!     for body in sim.bodies() {
//!         // draw body.position
//!     }
//! }
//! ```

use crate::body::{Body, BodyId};
use crate::config::{SimConfig, SEED_COLOR};
use crate::error::ConfigError;
use crate::physics::{integrate, resolve_floor, resolve_pairs, Floor};
use crate::spawn::SpawnPolicy;
use glam::Vec3;
use log::{debug, info, trace};

/// Changes to the body collection, for keeping a scene in step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A body entered the simulation.
    Spawned { id: BodyId, radius: f32, color: Vec3 },
    /// A body was removed after reaching the bounce limit.
    Despawned { id: BodyId },
}

/// Counters for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Bodies added from queued spawn requests.
    pub spawned: usize,
    /// Bodies removed by the floor pass.
    pub despawned: usize,
    /// Overlapping pairs resolved.
    pub collisions: usize,
}

/// Bouncing sphere simulation.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    floor: Floor,
    bodies: Vec<Body>,
    spawner: SpawnPolicy,
    pending_spawns: u32,
    events: Vec<SimEvent>,
    record_events: bool,
    next_id: u32,
    tick_count: u64,
}

impl Simulation {
    /// Create a simulation holding only the seed body.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let mut sim = Self::empty(config)?;
        let seed = Body::seed(sim.config.seed_position, Vec3::ZERO, sim.config.radius)?
            .with_color(SEED_COLOR);
        sim.add_body(seed);
        info!(
            "Simulation ready: gravity {}, dt {}, floor {}, batch {}",
            sim.config.gravity, sim.config.time_step, sim.config.floor_y, sim.config.spawn.batch_size
        );
        Ok(sim)
    }

    /// Create a simulation with no bodies at all.
    pub fn empty(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let spawner = SpawnPolicy::new(config.spawn.clone(), config.radius, config.rng_seed)?;
        Ok(Self {
            floor: config.floor(),
            config,
            bodies: Vec::new(),
            spawner,
            pending_spawns: 0,
            events: Vec::new(),
            record_events: false,
            next_id: 1,
            tick_count: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Active bodies in collection order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Ticks completed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// The seed body, if this simulation has one.
    pub fn seed_body(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_seed())
    }

    /// Insert a body at the end of the collection and return its new id.
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        if self.record_events {
            self.events.push(SimEvent::Spawned {
                id,
                radius: body.radius(),
                color: body.color(),
            });
        }
        self.bodies.push(body);
        id
    }

    /// Queue one spawn batch for the start of the next tick.
    pub fn request_spawn(&mut self) {
        self.pending_spawns = self.pending_spawns.saturating_add(1);
    }

    pub fn pending_spawns(&self) -> u32 {
        self.pending_spawns
    }

    /// Apply every queued spawn request now. Returns bodies added.
    pub fn flush_spawns(&mut self) -> usize {
        let mut added = 0;
        while self.pending_spawns > 0 {
            self.pending_spawns -= 1;
            added += self.spawn_batch();
        }
        added
    }

    /// Spawn one batch immediately. Returns bodies added.
    pub fn spawn_batch(&mut self) -> usize {
        let batch = self.spawner.spawn_batch();
        let added = batch.len();
        for body in batch {
            self.add_body(body);
        }
        debug!("Spawned {} bodies ({} active)", added, self.bodies.len());
        added
    }

    /// Kick the seed body upward at [`SimConfig::launch_speed`].
    ///
    /// Returns `false` when there is no seed body.
    pub fn launch_seed(&mut self) -> bool {
        let speed = self.config.launch_speed();
        match self.bodies.iter_mut().find(|b| b.is_seed()) {
            Some(seed) => {
                seed.velocity.y = speed;
                true
            }
            None => false,
        }
    }

    /// Start or stop recording [`SimEvent`]s.
    ///
    /// Recording is off by default so headless runs do not accumulate events.
    pub fn set_record_events(&mut self, record: bool) {
        self.record_events = record;
        if !record {
            self.events.clear();
        }
    }

    pub fn is_recording_events(&self) -> bool {
        self.record_events
    }

    /// Take all events recorded since the last call.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, SimEvent> {
        self.events.drain(..)
    }

    /// Advance the simulation by one fixed time step.
    ///
    /// Queued spawns are applied first. Every body is then integrated and
    /// checked against the floor; bodies that hit the bounce limit leave the
    /// collection at once. Finally all overlapping pairs are resolved over
    /// the remaining bodies.
    pub fn tick(&mut self) -> TickStats {
        let spawned = self.flush_spawns();

        let gravity = self.config.gravity;
        let dt = self.config.time_step;
        let floor = self.floor;
        let record = self.record_events;
        let events = &mut self.events;
        let mut despawned = 0;

        self.bodies.retain_mut(|body| {
            integrate(body, gravity, dt);
            if !resolve_floor(body, &floor) {
                return true;
            }
            debug!("Body {} despawned after {} bounces", body.id, body.bounce_count());
            if record {
                events.push(SimEvent::Despawned { id: body.id });
            }
            despawned += 1;
            false
        });

        let collisions = resolve_pairs(&mut self.bodies);
        self.tick_count += 1;

        trace!(
            "Tick {}: {} bodies, +{} -{}, {} collisions",
            self.tick_count,
            self.bodies.len(),
            spawned,
            despawned,
            collisions
        );

        TickStats {
            spawned,
            despawned,
            collisions,
        }
    }
}
