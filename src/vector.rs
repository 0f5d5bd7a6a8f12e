//! Vectors.
//!
//! Each vector stores its components in a single array. The named accessors
//! (`x()`, `y()`, ...) and indexing (`v[0]`, `v[1]`, ...) address the same
//! array elements, so the two views can never disagree.

use crate::num::Float;
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vector2<F> {
    components: [F; 2],
}

/// A 3-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vector3<F> {
    components: [F; 3],
}

/// A 4-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vector4<F> {
    components: [F; 4],
}

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;

pub type DVec2 = Vector2<f64>;
pub type DVec3 = Vector3<f64>;
pub type DVec4 = Vector4<f64>;

// SAFETY: The vectors are `repr(transparent)` wrappers around arrays of a
// `Pod` scalar, so they have no padding and every bit pattern is valid.
unsafe impl<F: Float> Zeroable for Vector2<F> {}
unsafe impl<F: Float> Pod for Vector2<F> {}
unsafe impl<F: Float> Zeroable for Vector3<F> {}
unsafe impl<F: Float> Pod for Vector3<F> {}
unsafe impl<F: Float> Zeroable for Vector4<F> {}
unsafe impl<F: Float> Pod for Vector4<F> {}

/// Implements the parts of the vector API that are identical for every
/// dimension.
macro_rules! impl_common_vector_methods {
    ($vector:ident, $n:expr) => {
        impl<F: Float> $vector<F> {
            /// Creates a new vector with all zeros.
            #[inline]
            pub fn zeros() -> Self {
                Self::same(F::ZERO)
            }

            /// Creates a new vector with the same value for all components.
            #[inline]
            pub fn same(value: F) -> Self {
                Self {
                    components: [value; $n],
                }
            }

            /// The components as an array.
            #[inline]
            pub fn as_array(&self) -> &[F; $n] {
                &self.components
            }

            /// The components as a mutable array.
            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [F; $n] {
                &mut self.components
            }

            /// Computes the dot product of this vector with another.
            #[inline]
            pub fn dot(&self, other: &Self) -> F {
                self.components
                    .iter()
                    .zip(&other.components)
                    .fold(F::ZERO, |sum, (&a, &b)| sum + a * b)
            }

            /// Computes the square of the length of the vector.
            #[inline]
            pub fn length_squared(&self) -> F {
                self.dot(self)
            }

            /// Computes the length of the vector.
            #[inline]
            pub fn length(&self) -> F {
                self.length_squared().sqrt()
            }

            /// Computes the normalized version of the vector.
            ///
            /// The vector must have non-zero length. Otherwise the components
            /// of the result are NaN or infinite.
            #[inline]
            pub fn normalized(&self) -> Self {
                self / self.length()
            }

            /// Returns a vector with the given closure applied to each
            /// component.
            #[inline]
            pub fn mapped(&self, f: impl FnMut(F) -> F) -> Self {
                Self {
                    components: self.components.map(f),
                }
            }
        }

        impl<F: Float> From<[F; $n]> for $vector<F> {
            #[inline]
            fn from(components: [F; $n]) -> Self {
                Self { components }
            }
        }

        impl<F: Float> From<$vector<F>> for [F; $n] {
            #[inline]
            fn from(vector: $vector<F>) -> Self {
                vector.components
            }
        }

        impl<F: Float> AsRef<[F; $n]> for $vector<F> {
            #[inline]
            fn as_ref(&self) -> &[F; $n] {
                &self.components
            }
        }

        impl<F: Float> Index<usize> for $vector<F> {
            type Output = F;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                &self.components[index]
            }
        }

        impl<F: Float> IndexMut<usize> for $vector<F> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                &mut self.components[index]
            }
        }

        impl_binop_assign!(AddAssign, add_assign, [F], $vector<F>, $vector<F>, |a, b| {
            for (a, &b) in a.components.iter_mut().zip(&b.components) {
                *a += b;
            }
        });

        impl_binop_assign!(SubAssign, sub_assign, [F], $vector<F>, $vector<F>, |a, b| {
            for (a, &b) in a.components.iter_mut().zip(&b.components) {
                *a -= b;
            }
        });

        impl_binop_assign!(MulAssign, mul_assign, [F], $vector<F>, F, |a, b| {
            for a in &mut a.components {
                *a *= *b;
            }
        });

        impl_binop_assign!(DivAssign, div_assign, [F], $vector<F>, F, |a, b| {
            for a in &mut a.components {
                *a /= *b;
            }
        });

        impl_binop_via_assign!(Add, add, AddAssign, add_assign, [F], $vector<F>, $vector<F>);
        impl_binop_via_assign!(Sub, sub, SubAssign, sub_assign, [F], $vector<F>, $vector<F>);
        impl_binop_via_assign!(Mul, mul, MulAssign, mul_assign, [F], $vector<F>, F);
        impl_binop_via_assign!(Div, div, DivAssign, div_assign, [F], $vector<F>, F);

        impl_abs_diff_eq!([F], $vector<F>, F, |a, b, epsilon| {
            a.components
                .iter()
                .zip(&b.components)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
        });

        impl_relative_eq!([F], $vector<F>, F, |a, b, epsilon, max_relative| {
            a.components
                .iter()
                .zip(&b.components)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
        });
    };
}

/// Implements componentwise multiplication and division by another vector.
macro_rules! impl_componentwise_mul_div {
    ($vector:ident) => {
        impl_binop_assign!(MulAssign, mul_assign, [F], $vector<F>, $vector<F>, |a, b| {
            for (a, &b) in a.components.iter_mut().zip(&b.components) {
                *a *= b;
            }
        });

        impl_binop_assign!(DivAssign, div_assign, [F], $vector<F>, $vector<F>, |a, b| {
            for (a, &b) in a.components.iter_mut().zip(&b.components) {
                *a /= b;
            }
        });

        impl_binop_via_assign!(Mul, mul, MulAssign, mul_assign, [F], $vector<F>, $vector<F>);
        impl_binop_via_assign!(Div, div, DivAssign, div_assign, [F], $vector<F>, $vector<F>);
    };
}

impl_common_vector_methods!(Vector2, 2);
impl_common_vector_methods!(Vector3, 3);
impl_common_vector_methods!(Vector4, 4);

impl_componentwise_mul_div!(Vector3);
impl_componentwise_mul_div!(Vector4);

impl<F: Float> Vector2<F> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: F, y: F) -> Self {
        Self { components: [x, y] }
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> F {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> F {
        self.components[1]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut F {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut F {
        &mut self.components[1]
    }

    /// Computes the z-component of the cross product of the two vectors
    /// extended to 3D with zero z-components. This is the signed area of the
    /// parallelogram they span.
    #[inline]
    pub fn cross(&self, other: &Self) -> F {
        self.x() * other.y() - self.y() * other.x()
    }
}

impl_unary_op!(Neg, neg, [F], Vector2<F>, Vector2<F>, |val| {
    val.mapped(|c| -c)
});

impl<F: Float> fmt::Debug for Vector2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

impl<F: Float> Vector3<F> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: F, y: F, z: F) -> Self {
        Self {
            components: [x, y, z],
        }
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> F {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> F {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> F {
        self.components[2]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut F {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut F {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut F {
        &mut self.components[2]
    }

    /// The 2D vector containing the x- and y-components of this vector.
    #[inline]
    pub fn xy(&self) -> Vector2<F> {
        Vector2::new(self.x(), self.y())
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub fn extended(&self, w: F) -> Vector4<F> {
        Vector4::new(self.x(), self.y(), self.z(), w)
    }
}

impl_unary_op!(Neg, neg, [F], Vector3<F>, Vector3<F>, |val| {
    val.mapped(|c| -c)
});

impl<F: Float> fmt::Debug for Vector3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl<F: Float> Vector4<F> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self {
            components: [x, y, z, w],
        }
    }

    /// Creates a new vector from the given 3D vector and w-component.
    #[inline]
    pub fn from_vector3(xyz: &Vector3<F>, w: F) -> Self {
        xyz.extended(w)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> F {
        self.components[0]
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> F {
        self.components[1]
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> F {
        self.components[2]
    }

    /// The w-component.
    #[inline]
    pub fn w(&self) -> F {
        self.components[3]
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut F {
        &mut self.components[0]
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut F {
        &mut self.components[1]
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut F {
        &mut self.components[2]
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub fn w_mut(&mut self) -> &mut F {
        &mut self.components[3]
    }

    /// The 3D vector containing the x-, y- and z-components of this vector.
    #[inline]
    pub fn xyz(&self) -> Vector3<F> {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

impl<F: Float> fmt::Debug for Vector4<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .field("w", &self.w())
            .finish()
    }
}
