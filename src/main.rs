use argmin::core::{CostFunction, Error};
use nalgebra::DVector;
use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use swarm_solver::prelude::*;

/// Rosenbrock with its valley shifted to `offset`, expressed as an argmin problem.
struct ShiftedRosenbrock {
    offset: DVector<f64>,
}

impl CostFunction for ShiftedRosenbrock {
    type Param = DVector<f64>;
    type Output = f64;

    fn cost(&self, p: &Self::Param) -> Result<Self::Output, Error> {
        let shifted = p - &self.offset + DVector::from_element(p.len(), 1.0);
        Ok(benchmarks::rosenbrock(shifted.as_slice()))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = PsoConfig {
        cognitive_coefficient: 0.5,
        social_coefficient: 0.5,
        inertia_weight: 0.7,
        max_iterations: 500,
    };
    let mut rng = StdRng::seed_from_u64(0);

    let benchmark_fns: [(&str, fn(&[f64]) -> f64); 3] = [
        ("sphere", benchmarks::sphere),
        ("rosenbrock", benchmarks::rosenbrock),
        ("rastrigin", benchmarks::rastrigin),
    ];
    for (name, f) in benchmark_fns {
        let (best_position, best_cost) =
            optimize_with_rng(f, 3, 30, &[-5.0; 3], &[5.0; 3], cfg.clone(), &mut rng)?;
        info!(benchmark = name, best_cost, ?best_position, "benchmark done");
    }

    let problem = ArgminObjective(ShiftedRosenbrock {
        offset: DVector::from_vec(vec![2.0, -1.0]),
    });
    let result = ParticleSwarm::new(problem, 2, (vec![-4.0, -4.0], vec![4.0, 4.0]), 40)?
        .with_config(cfg)?
        .minimize(&mut rng)?;
    info!(
        best_cost = result.best_cost,
        best_position = ?result.best_position,
        cost_evaluations = result.cost_evaluations,
        "shifted rosenbrock done"
    );

    // default coefficients, shorter run
    let (best_position, best_cost) = optimize(
        benchmarks::sphere,
        2,
        20,
        &[-5.0, -5.0],
        &[5.0, 5.0],
        PsoConfig {
            max_iterations: 200,
            ..PsoConfig::default()
        },
    )?;
    info!(best_cost, ?best_position, "sphere with default coefficients done");

    Ok(())
}
