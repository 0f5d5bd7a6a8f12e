//! Numbers and numerics.

use bytemuck::Pod;
use num_traits as nt;
use std::fmt::Debug;

/// Gathers traits useful for working with generic floating point types.
///
/// Implemented for [`f32`] and [`f64`]. The [`Pod`] bound lets vectors of any
/// implementing type be reinterpreted as plain arrays or bytes.
pub trait Float:
    nt::Float
    + nt::FromPrimitive
    + nt::NumAssignOps
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + Pod
    + Default
    + Debug
    + Send
    + Sync
{
    const ZERO: Self;
}

macro_rules! impl_float {
    ($f:ty) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
        }
    };
}

impl_float!(f32);
impl_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn generic_zero<F: Float>() -> F {
        F::ZERO
    }

    #[test]
    fn zero_constant_is_additive_identity_for_both_precisions() {
        assert_eq!(generic_zero::<f32>() + 1.5, 1.5_f32);
        assert_eq!(generic_zero::<f64>() + 1.5, 1.5_f64);
    }
}
