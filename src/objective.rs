use argmin::core::CostFunction;

/// A scalar cost to be minimized over a parameter vector.
///
/// Implemented for every `Fn(&[f64]) -> f64`, so plain functions and closures
/// can be handed to the swarm directly. Fallible objectives implement the trait
/// themselves; any error they return is handed back to the caller of the
/// optimizer as [`PsoError::ArgminError`](crate::error::PsoError::ArgminError).
///
/// The swarm caches costs of best positions, so objectives are expected to be
/// deterministic for a fixed input.
pub trait Objective {
    fn cost(&self, params: &[f64]) -> Result<f64, anyhow::Error>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn cost(&self, params: &[f64]) -> Result<f64, anyhow::Error> {
        Ok(self(params))
    }
}

/// Lets an `argmin` cost function be minimized by the swarm.
///
/// Any `Param` type that can be built from a `Vec<f64>` works, which covers
/// both `Vec<f64>` and `nalgebra::DVector<f64>`.
#[derive(Clone, Debug)]
pub struct ArgminObjective<C>(pub C);

impl<C> Objective for ArgminObjective<C>
where
    C: CostFunction<Output = f64>,
    C::Param: From<Vec<f64>>,
{
    fn cost(&self, params: &[f64]) -> Result<f64, anyhow::Error> {
        let param = C::Param::from(params.to_vec());
        self.0.cost(&param)
    }
}
