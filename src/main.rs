//! Interactive viewer.
//!
//! ```text
//! bounce3d [BATCH_SIZE] [RNG_SEED]
//! ```
//!
//! Space spawns a batch, Enter launches the blue seed sphere, P pauses,
//! drag to orbit and scroll to zoom. Set `RUST_LOG=debug` to trace spawns
//! and despawns.

use anyhow::Context;
use bounce3d::SimConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mut config = SimConfig::default();

    if let Some(batch) = args.next() {
        let batch: u32 = batch
            .parse()
            .with_context(|| format!("invalid batch size {:?}", batch))?;
        config = config.with_spawn_batch(batch);
    }
    if let Some(seed) = args.next() {
        let seed: u64 = seed
            .parse()
            .with_context(|| format!("invalid RNG seed {:?}", seed))?;
        config = config.with_rng_seed(seed);
    }

    log::info!(
        "Starting: gravity {}, restitution {}, batch {}",
        config.gravity,
        config.restitution,
        config.spawn.batch_size
    );
    bounce3d::run(config)?;
    Ok(())
}
