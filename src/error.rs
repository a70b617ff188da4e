use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("Swarm must search at least one parameter")]
    NoParameters,

    #[error("Swarm must contain at least one particle")]
    NoParticles,

    #[error(
        "Number of bounds!=parameters; {n_lower} lower bounds, {n_upper} upper bounds, {n_params} parameters"
    )]
    BoundsLengthMismatch {
        n_params: usize,
        n_lower: usize,
        n_upper: usize,
    },

    #[error("Bounds for parameter {idx} are not finite: [{lower}, {upper}]")]
    NonFiniteBounds { idx: usize, lower: f64, upper: f64 },

    #[error("Bounds for parameter {idx} are inverted: lower={lower} > upper={upper}")]
    InvertedBounds { idx: usize, lower: f64, upper: f64 },

    #[error("Coefficient `{name}` must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },

    #[error("Particle has {found} coordinates, swarm searches {expected} parameters")]
    DimensionMismatch { expected: usize, found: usize },
}

#[derive(Error, Debug)]
pub enum PsoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// Errors raised while the executor runs: objective failures and observer
    /// failures are passed through untouched.
    #[error(transparent)]
    ArgminError(#[from] argmin::core::Error),

    #[error("No global best found in optimization result")]
    NoGlobalBest,
}

impl PsoError {
    pub fn invalid_argument(&self) -> Option<&InvalidArgument> {
        match self {
            PsoError::InvalidArgument(err) => Some(err),
            _ => None,
        }
    }
}
