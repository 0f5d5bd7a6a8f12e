//! Angles in degrees and radians.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    f32::consts::{FRAC_1_PI, PI},
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle in either unit.
pub trait Angle: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f32;

    /// Returns the value of the angle in radians.
    fn radians(self) -> f32;
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f32);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f32);

impl Angle for Degrees {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians(degrees_to_radians(self.0))
    }

    fn degrees(self) -> f32 {
        self.0
    }

    fn radians(self) -> f32 {
        degrees_to_radians(self.0)
    }
}

impl Angle for Radians {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        Degrees(radians_to_degrees(self.0))
    }

    fn as_radians(self) -> Radians {
        self
    }

    fn degrees(self) -> f32 {
        radians_to_degrees(self.0)
    }

    fn radians(self) -> f32 {
        self.0
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        rad.as_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        deg.as_radians()
    }
}

macro_rules! impl_angle_ops {
    ($unit:ident, $other:ident, $value:ident) => {
        impl<A: Angle> Add<A> for $unit {
            type Output = Self;
            fn add(self, rhs: A) -> Self {
                Self(self.0 + rhs.$value())
            }
        }

        impl<A: Angle> Sub<A> for $unit {
            type Output = Self;
            fn sub(self, rhs: A) -> Self {
                Self(self.0 - rhs.$value())
            }
        }

        impl Mul<f32> for $unit {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f32> for $unit {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl Neg for $unit {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl PartialEq<$other> for $unit {
            fn eq(&self, rhs: &$other) -> bool {
                self.0 == rhs.$value()
            }
        }

        impl PartialOrd<$other> for $unit {
            fn partial_cmp(&self, rhs: &$other) -> Option<Ordering> {
                self.0.partial_cmp(&rhs.$value())
            }
        }

        impl AbsDiffEq for $unit {
            type Epsilon = f32;

            fn default_epsilon() -> f32 {
                f32::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl RelativeEq for $unit {
            fn default_max_relative() -> f32 {
                f32::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_ops!(Degrees, Radians, degrees);
impl_angle_ops!(Radians, Degrees, radians);

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * (180.0 * FRAC_1_PI)
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn degrees_to_radians_for_special_angles_work() {
        assert_abs_diff_eq!(Degrees(0.0).radians(), 0.0);
        assert_abs_diff_eq!(Degrees(90.0).radians(), PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Degrees(180.0).radians(), PI, epsilon = 1e-6);
        assert_abs_diff_eq!(Degrees(-270.0).radians(), -3.0 * PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Degrees(360.0).radians(), 2.0 * PI, epsilon = 1e-6);
    }

    #[test]
    fn radians_to_degrees_for_special_angles_work() {
        assert_abs_diff_eq!(Radians(0.0).degrees(), 0.0);
        assert_abs_diff_eq!(Radians(PI / 2.0).degrees(), 90.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Radians(PI).degrees(), 180.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Radians(-3.0 * PI / 2.0).degrees(), -270.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Radians(2.0 * PI).degrees(), 360.0, epsilon = 1e-4);
    }

    #[test]
    fn degree_ops_work() {
        assert_abs_diff_eq!(Degrees(42.0) + Degrees(30.0), Degrees(72.0));
        assert_abs_diff_eq!(Degrees(42.0) - Degrees(30.0), Degrees(12.0));
        assert_abs_diff_eq!(Degrees(42.0) * 2.5, Degrees(105.0));
        assert_abs_diff_eq!(Degrees(42.0) / 4.0, Degrees(10.5));
        assert_abs_diff_eq!(-Degrees(42.0), Degrees(-42.0));
    }

    #[test]
    fn mixed_degree_radian_ops_work() {
        assert_abs_diff_eq!(Degrees(45.0) + Radians(PI / 2.0), Degrees(135.0), epsilon = 1e-4);
        assert_abs_diff_eq!(Radians(PI / 2.0) - Degrees(45.0), Radians(PI / 4.0), epsilon = 1e-6);

        assert_eq!(Degrees(0.0), Radians(0.0));
        assert!(Degrees(42.0) > Radians(0.0));
        assert!(Degrees(42.0) < Radians(PI));
        assert!(Radians(PI) < Degrees(360.0));
    }
}
