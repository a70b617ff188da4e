use argmin::core::{
    Executor, OptimizationResult, State,
    observers::{Observe, ObserverMode},
};
use rand::Rng;
use tracing::info;

use crate::error::{InvalidArgument, PsoError};
use crate::objective::Objective;
use crate::opt_tools::CostHistoryObserver;

pub mod bounds;
pub mod config;
pub mod particle;
pub mod solver;

pub use bounds::SwarmBounds;
pub use config::PsoConfig;
pub use particle::Particle;
pub use solver::{COST_COUNT, ParticleSwarmSolver, SwarmState};

#[cfg(test)]
mod tests;

/// Outcome of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct PsoResult {
    pub best_position: Vec<f64>,
    /// Objective value at `best_position`.
    pub best_cost: f64,
    pub iterations: u64,
    pub cost_evaluations: u64,
}

impl PsoResult {
    pub fn into_parts(self) -> (Vec<f64>, f64) {
        (self.best_position, self.best_cost)
    }
}

/// Particle swarm minimizer over a box-bounded parameter space.
///
/// ```ignore
/// let pso = ParticleSwarm::new(sphere, 2, (vec![-5.0, -5.0], vec![5.0, 5.0]), 20)?
///     .with_max_iterations(200);
/// let result = pso.minimize(&mut StdRng::seed_from_u64(0))?;
/// ```
pub struct ParticleSwarm<O> {
    objective: O,
    bounds: SwarmBounds,
    num_particles: usize,
    cfg: PsoConfig,
}

impl<O: Objective> ParticleSwarm<O> {
    pub fn new(
        objective: O,
        num_parameters: usize,
        (lower_bounds, upper_bounds): (Vec<f64>, Vec<f64>),
        num_particles: usize,
    ) -> Result<Self, PsoError> {
        let bounds = SwarmBounds::new(num_parameters, lower_bounds, upper_bounds)?;
        if num_particles == 0 {
            return Err(InvalidArgument::NoParticles.into());
        }
        Ok(ParticleSwarm {
            objective,
            bounds,
            num_particles,
            cfg: PsoConfig::default(),
        })
    }

    pub fn with_config(mut self, cfg: PsoConfig) -> Result<Self, PsoError> {
        cfg.validate()?;
        self.cfg = cfg;
        Ok(self)
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.cfg.max_iterations = max_iterations;
        self
    }

    pub fn config(&self) -> &PsoConfig {
        &self.cfg
    }

    pub fn bounds(&self) -> &SwarmBounds {
        &self.bounds
    }

    pub fn minimize<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PsoResult, PsoError> {
        self.run(rng, None::<CostHistoryObserver>)
    }

    /// Runs exactly `max_iterations` passes, reporting to `observer` after
    /// initialization and after each pass.
    pub fn minimize_observed<R, Obs>(
        &self,
        rng: &mut R,
        observer: Obs,
    ) -> Result<PsoResult, PsoError>
    where
        R: Rng + ?Sized,
        Obs: Observe<SwarmState> + 'static,
    {
        self.run(rng, Some(observer))
    }

    fn run<R, Obs>(&self, rng: &mut R, observer: Option<Obs>) -> Result<PsoResult, PsoError>
    where
        R: Rng + ?Sized,
        Obs: Observe<SwarmState> + 'static,
    {
        let solver = ParticleSwarmSolver::new(
            self.bounds.clone(),
            self.num_particles,
            self.cfg.clone(),
            rng,
        )?;
        self.log_pre_optimization_summary();

        let max_iters = self.cfg.max_iterations as u64;
        let mut executor = Executor::new(&self.objective, solver)
            .configure(|state: SwarmState| state.max_iters(max_iters).counting(true));
        if let Some(observer) = observer {
            executor = executor.add_observer(observer, ObserverMode::Always);
        }
        let opt_res = executor.run()?;
        self.log_post_optimization_summary(&opt_res);

        let mut state = opt_res.state;
        let best = state.take_individual().ok_or(PsoError::NoGlobalBest)?;
        Ok(PsoResult {
            best_position: best.best_position,
            best_cost: state.get_cost(),
            iterations: state.get_iter(),
            cost_evaluations: state
                .get_func_counts()
                .get(COST_COUNT)
                .copied()
                .unwrap_or(0),
        })
    }

    fn log_pre_optimization_summary(&self) {
        info!(
            objective = %tynm::type_name::<O>(),
            num_particles = self.num_particles,
            num_parameters = self.bounds.num_parameters(),
            cognitive = self.cfg.cognitive_coefficient,
            social = self.cfg.social_coefficient,
            inertia = self.cfg.inertia_weight,
            max_iterations = self.cfg.max_iterations,
            "pre PSO optimization"
        );
    }

    fn log_post_optimization_summary<S>(&self, opt_res: &OptimizationResult<&O, S, SwarmState>) {
        info!(
            objective = %tynm::type_name::<O>(),
            solver = %tynm::type_name::<S>(),
            stop_status = ?opt_res.state.get_termination_status(),
            iterations = opt_res.state.get_iter(),
            cost_evaluations = ?opt_res.state.get_func_counts().get(COST_COUNT),
            best_cost = opt_res.state.get_cost(),
            prev_best_cost = opt_res.state.get_prev_cost(),
            "post PSO optimization"
        );
    }
}

/// Minimizes `objective` with a thread-local random source.
///
/// Returns the best position found and its objective value.
pub fn optimize<O: Objective>(
    objective: O,
    num_parameters: usize,
    num_particles: usize,
    lower_bounds: &[f64],
    upper_bounds: &[f64],
    cfg: PsoConfig,
) -> Result<(Vec<f64>, f64), PsoError> {
    optimize_with_rng(
        objective,
        num_parameters,
        num_particles,
        lower_bounds,
        upper_bounds,
        cfg,
        &mut rand::rng(),
    )
}

/// Same as [`optimize`], drawing every random value from `rng`.
pub fn optimize_with_rng<O, R>(
    objective: O,
    num_parameters: usize,
    num_particles: usize,
    lower_bounds: &[f64],
    upper_bounds: &[f64],
    cfg: PsoConfig,
    rng: &mut R,
) -> Result<(Vec<f64>, f64), PsoError>
where
    O: Objective,
    R: Rng + ?Sized,
{
    let pso = ParticleSwarm::new(
        objective,
        num_parameters,
        (lower_bounds.to_vec(), upper_bounds.to_vec()),
        num_particles,
    )?
    .with_config(cfg)?;
    Ok(pso.minimize(rng)?.into_parts())
}
