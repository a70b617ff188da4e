use argmin::core::{Problem, Solver, State};
use rand::rngs::StdRng;

use crate::objective::Objective;
use crate::swarm::{COST_COUNT, Particle, ParticleSwarmSolver, SwarmState};

mod iteration;

/// Sum of squared distances to `center`.
fn shifted_sphere(center: &[f64]) -> impl Fn(&[f64]) -> f64 + '_ {
    move |x: &[f64]| {
        x.iter()
            .zip(center.iter())
            .map(|(xi, ci)| (xi - ci) * (xi - ci))
            .sum()
    }
}

/// Runs only the seeding phase of `solver`.
fn seed<O: Objective>(
    solver: &mut ParticleSwarmSolver<'_, StdRng>,
    problem: &mut Problem<&O>,
) -> SwarmState {
    let (state, _kv) = solver.init(problem, SwarmState::new()).unwrap();
    state
}

/// Runs one pass of the main loop on `state`.
fn step<O: Objective>(
    solver: &mut ParticleSwarmSolver<'_, StdRng>,
    problem: &mut Problem<&O>,
    state: SwarmState,
) -> SwarmState {
    let (mut state, _kv) = solver.next_iter(problem, state).unwrap();
    state.increment_iter();
    state
}

fn global_best(state: &SwarmState) -> &Particle {
    state.get_param().unwrap()
}

fn particles(state: &SwarmState) -> &[Particle] {
    state.get_population().unwrap()
}

fn evaluations<O>(problem: &Problem<O>) -> u64 {
    problem.counts.get(COST_COUNT).copied().unwrap_or(0)
}
