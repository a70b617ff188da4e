use rand::Rng;

use crate::swarm::{bounds::SwarmBounds, config::PsoConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub best_position: Vec<f64>,
    pub best_cost: f64,
}

impl Particle {
    /// Seeds a particle inside `bounds`. One draw per dimension sets both the
    /// position and the velocity, so the two are correlated.
    ///
    /// `best_cost` is left at `f64::INFINITY` until the swarm evaluates it.
    pub fn seeded<R: Rng + ?Sized>(bounds: &SwarmBounds, rng: &mut R) -> Self {
        let draws: Vec<f64> = (0..bounds.num_parameters())
            .map(|_| rng.random::<f64>())
            .collect();

        let position: Vec<f64> = draws
            .iter()
            .enumerate()
            .map(|(j, &u)| bounds.position_from_unit(j, u))
            .collect();
        let velocity = draws
            .iter()
            .enumerate()
            .map(|(j, &u)| bounds.velocity_from_unit(j, u))
            .collect();

        Particle {
            best_position: position.clone(),
            position,
            velocity,
            best_cost: f64::INFINITY,
        }
    }

    /// A particle sitting at `position` with zero velocity, carrying `cost` as
    /// its best. Used to hold the global best.
    pub(crate) fn resting(position: Vec<f64>, cost: f64) -> Self {
        Particle {
            velocity: vec![0.0; position.len()],
            best_position: position.clone(),
            position,
            best_cost: cost,
        }
    }

    /// Applies one velocity and position update to every dimension, in order.
    ///
    /// Two fresh draws are taken per dimension: the cognitive one, then the
    /// social one. Positions are not clamped. `global_best` must have one
    /// entry per dimension.
    pub(crate) fn advance<R: Rng + ?Sized>(
        &mut self,
        cfg: &PsoConfig,
        global_best: &[f64],
        rng: &mut R,
    ) {
        for j in 0..self.position.len() {
            let r_personal: f64 = rng.random();
            let r_global: f64 = rng.random();

            self.velocity[j] = cfg.inertia_weight * self.velocity[j]
                + cfg.cognitive_coefficient
                    * r_personal
                    * (self.best_position[j] - self.position[j])
                + cfg.social_coefficient * r_global * (global_best[j] - self.position[j]);
            self.position[j] += self.velocity[j];
        }
    }

    /// Records the current position as the personal best if `cost` beats it.
    pub(crate) fn offer_position(&mut self, cost: f64) -> bool {
        if cost < self.best_cost {
            self.best_position.clone_from(&self.position);
            self.best_cost = cost;
            true
        } else {
            false
        }
    }
}
