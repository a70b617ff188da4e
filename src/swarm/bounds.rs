use crate::error::InvalidArgument;

/// Axis-aligned box the swarm is seeded in.
///
/// Particles are only *seeded* inside the box; the position update does not
/// clamp, so positions may leave it once the loop starts.
#[derive(Clone, Debug, PartialEq)]
pub struct SwarmBounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl SwarmBounds {
    /// Builds the box for `num_parameters` dimensions, rejecting mismatched
    /// lengths, non-finite entries and `lower > upper`.
    pub fn new(
        num_parameters: usize,
        lower: Vec<f64>,
        upper: Vec<f64>,
    ) -> Result<Self, InvalidArgument> {
        if num_parameters == 0 {
            return Err(InvalidArgument::NoParameters);
        }
        if lower.len() != num_parameters || upper.len() != num_parameters {
            return Err(InvalidArgument::BoundsLengthMismatch {
                n_params: num_parameters,
                n_lower: lower.len(),
                n_upper: upper.len(),
            });
        }
        for (idx, (&l, &u)) in lower.iter().zip(upper.iter()).enumerate() {
            if !l.is_finite() || !u.is_finite() {
                return Err(InvalidArgument::NonFiniteBounds {
                    idx,
                    lower: l,
                    upper: u,
                });
            }
            if l > u {
                return Err(InvalidArgument::InvertedBounds {
                    idx,
                    lower: l,
                    upper: u,
                });
            }
        }
        Ok(SwarmBounds { lower, upper })
    }

    pub fn num_parameters(&self) -> usize {
        self.lower.len()
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Maps a unit draw `u` in `[0, 1)` to the position in dimension `j`.
    pub(crate) fn position_from_unit(&self, j: usize, u: f64) -> f64 {
        self.lower[j] + (self.upper[j] - self.lower[j]) * u
    }

    /// Maps the same unit draw to a velocity in `[-width, width)`.
    pub(crate) fn velocity_from_unit(&self, j: usize, u: f64) -> f64 {
        let range_width = (self.upper[j] - self.lower[j]).abs();
        -range_width + 2.0 * range_width * u
    }
}
