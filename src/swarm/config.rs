use crate::error::InvalidArgument;

/// Tuning knobs for the velocity update and the length of the run.
#[derive(Clone, Debug, PartialEq)]
pub struct PsoConfig {
    /// Pull toward the particle's own best position.
    pub cognitive_coefficient: f64,
    /// Pull toward the swarm's best position.
    pub social_coefficient: f64,
    /// Scales the previous velocity.
    ///
    /// Values above 1.0 let velocities grow from one iteration to the next.
    pub inertia_weight: f64,
    /// Number of full passes over the swarm. There is no early exit.
    pub max_iterations: usize,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            cognitive_coefficient: 0.5,
            social_coefficient: 0.5,
            inertia_weight: 1.1,
            max_iterations: 5000,
        }
    }
}

impl PsoConfig {
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        for (name, value) in [
            ("cognitive_coefficient", self.cognitive_coefficient),
            ("social_coefficient", self.social_coefficient),
            ("inertia_weight", self.inertia_weight),
        ] {
            if !value.is_finite() {
                return Err(InvalidArgument::NonFiniteCoefficient { name, value });
            }
        }
        Ok(())
    }
}
