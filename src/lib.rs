pub mod benchmarks;
pub mod error;
pub mod objective;
pub mod opt_tools;
pub mod swarm;

pub mod prelude {
    pub use crate::{
        benchmarks,
        error::*,
        objective::*,
        opt_tools::*,
        swarm::{
            COST_COUNT, Particle, ParticleSwarm, ParticleSwarmSolver, PsoConfig, PsoResult,
            SwarmBounds, SwarmState, optimize, optimize_with_rng,
        },
    };
}
