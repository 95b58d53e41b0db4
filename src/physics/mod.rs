//! Per-body and pairwise physics used by [`Simulation::tick`](crate::Simulation::tick).
//!
//! | Stage | Function |
//! |-------|----------|
//! | Gravity | [`integrate`] |
//! | Floor | [`resolve_floor`] |
//! | Sphere-sphere | [`resolve_pairs`] |
//!
//! The functions are free of simulation state so they can be driven directly
//! by tests or by a host that owns its own body storage.

mod collision;
mod floor;
mod integrator;

pub use collision::{resolve_pair, resolve_pairs, FALLBACK_NORMAL};
pub use floor::{resolve_floor, Floor};
pub use integrator::integrate;
