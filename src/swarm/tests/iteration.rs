use argmin::core::{Problem, Solver, State};
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{evaluations, global_best, particles, seed, shifted_sphere, step};
use crate::{
    benchmarks::sphere,
    error::{InvalidArgument, PsoError},
    swarm::{Particle, ParticleSwarmSolver, PsoConfig, SwarmBounds, SwarmState},
};

fn cfg() -> PsoConfig {
    PsoConfig {
        cognitive_coefficient: 0.7,
        social_coefficient: 0.3,
        inertia_weight: 0.9,
        max_iterations: 2,
    }
}

#[test]
fn single_particle_iterations_match_hand_computation() {
    // the minimum sits at the origin, outside the box, so the zero vector
    // stays the global best and pulls the particle through the social term
    let bounds = SwarmBounds::new(2, vec![2.0, 2.0], vec![4.0, 4.0]).unwrap();
    let cfg = cfg();

    let mut rng = StdRng::seed_from_u64(11);
    let mut draws = rng.clone();

    let mut solver = ParticleSwarmSolver::new(bounds, 1, cfg.clone(), &mut rng).unwrap();
    let mut problem = Problem::new(&sphere);
    let mut state = seed(&mut solver, &mut problem);

    let u: [f64; 2] = [draws.random(), draws.random()];
    let mut x = [2.0 + (4.0 - 2.0) * u[0], 2.0 + (4.0 - 2.0) * u[1]];
    let mut v = [-2.0 + 2.0 * 2.0 * u[0], -2.0 + 2.0 * 2.0 * u[1]];
    let mut pb = x;
    let mut pb_cost = sphere(&x);
    let gb = [0.0, 0.0];
    assert_eq!(global_best(&state).position, gb.to_vec());
    assert_eq!(state.get_cost(), 0.0);

    for iteration in 0..cfg.max_iterations {
        state = step(&mut solver, &mut problem, state);

        for j in 0..2 {
            let r_personal: f64 = draws.random();
            let r_global: f64 = draws.random();
            let social = 0.3 * r_global * (gb[j] - x[j]);
            if iteration == 0 {
                assert!(social < 0.0, "social pull toward the origin must be non-zero");
            }
            v[j] = 0.9 * v[j] + 0.7 * r_personal * (pb[j] - x[j]) + social;
            x[j] += v[j];
        }
        let cost = sphere(&x);
        if cost < pb_cost {
            pb = x;
            pb_cost = cost;
        }

        let particle = &particles(&state)[0];
        assert_eq!(particle.velocity, v.to_vec());
        assert_eq!(particle.position, x.to_vec());
        assert_eq!(particle.best_position, pb.to_vec());
        assert_eq!(particle.best_cost, pb_cost);
        assert_eq!(global_best(&state).position, gb.to_vec());
        assert_eq!(state.get_cost(), 0.0);
    }
    assert_eq!(state.get_iter(), 2);
    assert_eq!(evaluations(&problem), 4);
}

#[test]
fn second_particle_sees_first_particles_improvement() {
    // one dimension, two particles; replays both particles' updates by hand
    let objective = shifted_sphere(&[3.0]);
    let bounds = SwarmBounds::new(1, vec![0.0], vec![10.0]).unwrap();
    let cfg = PsoConfig {
        cognitive_coefficient: 1.2,
        social_coefficient: 1.7,
        inertia_weight: 0.6,
        max_iterations: 2,
    };

    let mut rng = StdRng::seed_from_u64(2024);
    let mut draws = rng.clone();
    let mut solver = ParticleSwarmSolver::new(bounds, 2, cfg.clone(), &mut rng).unwrap();
    let mut problem = Problem::new(&objective);
    let mut state = seed(&mut solver, &mut problem);

    let mut x = [0.0; 2];
    let mut v = [0.0; 2];
    let mut pb = [0.0; 2];
    let mut pb_cost = [0.0; 2];
    let mut gb = 0.0;
    let mut gb_cost = objective(&[0.0]);
    for i in 0..2 {
        let u: f64 = draws.random();
        x[i] = 0.0 + (10.0 - 0.0) * u;
        v[i] = -10.0 + 2.0 * 10.0 * u;
        pb[i] = x[i];
        pb_cost[i] = objective(&[pb[i]]);
        if pb_cost[i] < gb_cost {
            gb = pb[i];
            gb_cost = pb_cost[i];
        }
    }

    for _ in 0..cfg.max_iterations {
        state = step(&mut solver, &mut problem, state);
        for i in 0..2 {
            let r_personal: f64 = draws.random();
            let r_global: f64 = draws.random();
            v[i] = 0.6 * v[i] + 1.2 * r_personal * (pb[i] - x[i]) + 1.7 * r_global * (gb - x[i]);
            x[i] += v[i];
            let cost = objective(&[x[i]]);
            if cost < pb_cost[i] {
                pb[i] = x[i];
                pb_cost[i] = cost;
                if cost < gb_cost {
                    gb = x[i];
                    gb_cost = cost;
                }
            }
        }

        for i in 0..2 {
            let particle = &particles(&state)[i];
            assert_eq!(particle.position, vec![x[i]]);
            assert_eq!(particle.velocity, vec![v[i]]);
            assert_eq!(particle.best_position, vec![pb[i]]);
            assert_eq!(particle.best_cost, pb_cost[i]);
        }
        assert_eq!(global_best(&state).position, vec![gb]);
        assert_eq!(state.get_cost(), gb_cost);
    }
}

#[test]
fn positions_are_not_clamped_to_bounds() {
    // strong inertia and a far-away optimum push particles out of the box
    let objective = shifted_sphere(&[100.0]);
    let bounds = SwarmBounds::new(1, vec![-1.0], vec![1.0]).unwrap();
    let cfg = PsoConfig {
        cognitive_coefficient: 0.5,
        social_coefficient: 0.5,
        inertia_weight: 1.1,
        max_iterations: 50,
    };
    let mut rng = StdRng::seed_from_u64(8);
    let mut solver = ParticleSwarmSolver::new(bounds, 10, cfg.clone(), &mut rng).unwrap();
    let mut problem = Problem::new(&objective);
    let mut state = seed(&mut solver, &mut problem);
    for _ in 0..cfg.max_iterations {
        state = step(&mut solver, &mut problem, state);
    }
    let escaped = particles(&state)
        .iter()
        .any(|p| p.position[0] < -1.0 || p.position[0] > 1.0);
    assert!(escaped);
}

#[test]
fn global_best_of_wrong_dimension_is_rejected() {
    let bounds = SwarmBounds::new(2, vec![-1.0, -1.0], vec![1.0, 1.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mut solver = ParticleSwarmSolver::new(bounds, 1, PsoConfig::default(), &mut rng).unwrap();
    let mut problem = Problem::new(&sphere);

    let state = SwarmState::new()
        .individual(Particle {
            position: vec![0.0],
            velocity: vec![0.0],
            best_position: vec![0.0],
            best_cost: 0.0,
        })
        .cost(0.0)
        .population(vec![Particle {
            position: vec![0.5, 0.5],
            velocity: vec![0.0, 0.0],
            best_position: vec![0.5, 0.5],
            best_cost: 0.5,
        }]);
    let err = solver.next_iter(&mut problem, state).err().unwrap();

    assert_eq!(
        err.downcast_ref::<InvalidArgument>(),
        Some(&InvalidArgument::DimensionMismatch {
            expected: 2,
            found: 1
        })
    );
    assert_eq!(evaluations(&problem), 0);
}

#[test]
fn particle_of_wrong_dimension_is_rejected() {
    let bounds = SwarmBounds::new(1, vec![-1.0], vec![1.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let mut solver = ParticleSwarmSolver::new(bounds, 1, PsoConfig::default(), &mut rng).unwrap();
    let mut problem = Problem::new(&sphere);

    let state = SwarmState::new()
        .individual(Particle {
            position: vec![0.0],
            velocity: vec![0.0],
            best_position: vec![0.0],
            best_cost: 0.0,
        })
        .cost(0.0)
        .population(vec![Particle {
            position: vec![0.5],
            velocity: vec![0.0, 0.0, 0.0],
            best_position: vec![0.5],
            best_cost: 0.25,
        }]);
    let err = solver.next_iter(&mut problem, state).err().unwrap();

    assert_eq!(
        err.downcast_ref::<InvalidArgument>(),
        Some(&InvalidArgument::DimensionMismatch {
            expected: 1,
            found: 3
        })
    );
}

#[test]
fn solver_rejects_non_finite_coefficients() {
    let bounds = SwarmBounds::new(1, vec![-1.0], vec![1.0]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let cfg = PsoConfig {
        inertia_weight: f64::INFINITY,
        ..PsoConfig::default()
    };
    let err = ParticleSwarmSolver::new(bounds, 3, cfg, &mut rng)
        .err()
        .unwrap();
    assert!(matches!(
        err,
        PsoError::InvalidArgument(InvalidArgument::NonFiniteCoefficient {
            name: "inertia_weight",
            ..
        })
    ));
}
