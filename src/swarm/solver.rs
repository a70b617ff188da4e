use argmin::{
    argmin_error_closure,
    core::{
        Error, KV, PopulationState, Problem, Solver, State, TerminationReason, TerminationStatus,
    },
};
use rand::Rng;
use tracing::debug;

use crate::error::{InvalidArgument, PsoError};
use crate::objective::Objective;
use crate::swarm::{bounds::SwarmBounds, config::PsoConfig, particle::Particle};

/// Iteration state of a swarm run.
///
/// `individual` holds the global best as a resting particle (position and best
/// position coincide, velocity is zero) and `cost` its objective value.
/// `population` holds the particles in the order they were seeded.
pub type SwarmState = PopulationState<Particle, f64>;

/// Key under which objective calls are counted in `Problem::counts` and in the
/// state's function counts.
pub const COST_COUNT: &str = "cost_count";

/// Particle swarm solver for argmin's `Executor`.
///
/// `init` evaluates the all-zero vector as the starting global best and then
/// seeds `num_particles` particles; each `next_iter` is one pass of the main
/// loop. Every random value is drawn from the borrowed `rng`.
pub struct ParticleSwarmSolver<'r, R: ?Sized> {
    bounds: SwarmBounds,
    num_particles: usize,
    cfg: PsoConfig,
    rng: &'r mut R,
}

impl<'r, R: Rng + ?Sized> ParticleSwarmSolver<'r, R> {
    pub fn new(
        bounds: SwarmBounds,
        num_particles: usize,
        cfg: PsoConfig,
        rng: &'r mut R,
    ) -> Result<Self, PsoError> {
        if num_particles == 0 {
            return Err(InvalidArgument::NoParticles.into());
        }
        cfg.validate()?;
        Ok(ParticleSwarmSolver {
            bounds,
            num_particles,
            cfg,
            rng,
        })
    }

    fn check_dimensions(
        &self,
        global_best: &Particle,
        particles: &[Particle],
    ) -> Result<(), Error> {
        let expected = self.bounds.num_parameters();
        for particle in std::iter::once(global_best).chain(particles) {
            let lengths = [
                particle.position.len(),
                particle.velocity.len(),
                particle.best_position.len(),
            ];
            if let Some(&found) = lengths.iter().find(|&&len| len != expected) {
                return Err(InvalidArgument::DimensionMismatch { expected, found }.into());
            }
        }
        Ok(())
    }
}

impl<'a, 'r, O, R> Solver<&'a O, SwarmState> for ParticleSwarmSolver<'r, R>
where
    O: Objective + ?Sized,
    R: Rng + ?Sized,
{
    fn name(&self) -> &str {
        "ParticleSwarm"
    }

    fn init(
        &mut self,
        problem: &mut Problem<&'a O>,
        state: SwarmState,
    ) -> Result<(SwarmState, Option<KV>), Error> {
        let origin = vec![0.0; self.bounds.num_parameters()];
        let origin_cost = evaluate(problem, &origin)?;
        let mut global_best = Particle::resting(origin, origin_cost);

        let mut particles = Vec::with_capacity(self.num_particles);
        for _ in 0..self.num_particles {
            let mut particle = Particle::seeded(&self.bounds, &mut *self.rng);
            particle.best_cost = evaluate(problem, &particle.best_position)?;
            if particle.best_cost < global_best.best_cost {
                global_best = Particle::resting(particle.best_position.clone(), particle.best_cost);
            }
            particles.push(particle);
        }
        debug!(
            num_particles = self.num_particles,
            origin_cost,
            best_cost = global_best.best_cost,
            "swarm seeded"
        );

        let cost = global_best.best_cost;
        Ok((state.individual(global_best).cost(cost).population(particles), None))
    }

    /// Moves every particle once, in order.
    ///
    /// Each particle moves, is evaluated, and updates the bests before the
    /// next particle moves, so later particles already see an improved global
    /// best through their social term.
    fn next_iter(
        &mut self,
        problem: &mut Problem<&'a O>,
        mut state: SwarmState,
    ) -> Result<(SwarmState, Option<KV>), Error> {
        let mut global_best = state.take_individual().ok_or_else(argmin_error_closure!(
            PotentialBug,
            "`ParticleSwarm`: No global best in state."
        ))?;
        let mut particles = state.take_population().ok_or_else(argmin_error_closure!(
            PotentialBug,
            "`ParticleSwarm`: No population in state."
        ))?;
        self.check_dimensions(&global_best, &particles)?;

        for (i, particle) in particles.iter_mut().enumerate() {
            particle.advance(&self.cfg, &global_best.position, &mut *self.rng);

            let cost = evaluate(problem, &particle.position)?;
            if particle.offer_position(cost) && cost < global_best.best_cost {
                debug!(
                    iteration = state.get_iter(),
                    particle = i,
                    prev_best_cost = global_best.best_cost,
                    best_cost = cost,
                    "global best improved"
                );
                global_best = Particle::resting(particle.best_position.clone(), cost);
            }
        }

        let cost = global_best.best_cost;
        Ok((state.individual(global_best).cost(cost).population(particles), None))
    }

    // Only the iteration budget stops a run; a cost at or below the target
    // (negative infinity by default) does not.
    fn terminate_internal(&mut self, state: &SwarmState) -> TerminationStatus {
        if state.get_iter() >= state.get_max_iters() {
            TerminationStatus::Terminated(TerminationReason::MaxItersReached)
        } else {
            TerminationStatus::NotTerminated
        }
    }
}

fn evaluate<O>(problem: &mut Problem<&O>, params: &[f64]) -> Result<f64, Error>
where
    O: Objective + ?Sized,
{
    problem.problem(COST_COUNT, |objective| Objective::cost(*objective, params))
}
