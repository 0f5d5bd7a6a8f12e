//! Matrices.
//!
//! Both matrix types store their elements in row-major order: the element at
//! row `r` and column `c` lives at flat index `r * N + c`. The flat arrays are
//! meant to be copied directly into uniform buffers, so this layout must not
//! change.
//!
//! All transforms act on column vectors, so `a * b` applied to `v` first
//! applies `b` and then `a`.

use crate::vector::{Vec3, Vec4};
use anyhow::{Result, ensure};
use bytemuck::{Pod, Zeroable};

/// A 3x3 matrix for rotations and scaling, stored in row-major order.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix3x3 {
    data: [f32; 9],
}

/// A 4x4 homogeneous matrix for affine and projective transforms, stored in
/// row-major order.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4x4 {
    data: [f32; 16],
}

impl Matrix3x3 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_array([
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_array([0.0; 9])
    }

    /// Creates a matrix from the given elements in row-major order.
    #[inline]
    pub const fn from_array(data: [f32; 9]) -> Self {
        Self { data }
    }

    /// Creates a matrix rotating by the given angle in radians about the
    /// x-axis (counterclockwise when looking down the axis towards the
    /// origin).
    pub fn rotate_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_array([
            1.0, 0.0, 0.0, //
            0.0, c, -s, //
            0.0, s, c,
        ])
    }

    /// Creates a matrix rotating by the given angle in radians about the
    /// y-axis.
    pub fn rotate_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_array([
            c, 0.0, s, //
            0.0, 1.0, 0.0, //
            -s, 0.0, c,
        ])
    }

    /// Creates a matrix rotating by the given angle in radians about the
    /// z-axis.
    pub fn rotate_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_array([
            c, -s, 0.0, //
            s, c, 0.0, //
            0.0, 0.0, 1.0,
        ])
    }

    /// Creates a diagonal matrix scaling each axis by the corresponding
    /// component of the given vector.
    pub fn scale(scaling: &Vec3) -> Self {
        Self::from_array([
            scaling.x(),
            0.0,
            0.0,
            0.0,
            scaling.y(),
            0.0,
            0.0,
            0.0,
            scaling.z(),
        ])
    }

    /// Computes `a * b` and writes it to `result`.
    pub fn multiply(a: &Self, b: &Self, result: &mut Self) {
        *result = Self::from_array(multiply_row_major::<3, 9>(&a.data, &b.data));
    }

    /// Computes `a * vector` and writes it to `result`.
    pub fn multiply_vector(a: &Self, vector: &Vec3, result: &mut Vec3) {
        *result = Vec3::from(multiply_row_major_vector::<3, 9>(&a.data, vector.as_array()));
    }

    /// The elements in row-major order.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 9] {
        &self.data
    }

    /// The elements in row-major order as raw bytes, ready for upload to a
    /// GPU buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Returns the element at row `row` and column `column`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f32 {
        assert!(row < 3 && column < 3, "index out of bounds");
        self.data[row * 3 + column]
    }

    /// Returns a mutable reference to the element at row `row` and column
    /// `column`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, row: usize, column: usize) -> &mut f32 {
        assert!(row < 3 && column < 3, "index out of bounds");
        &mut self.data[row * 3 + column]
    }

    /// Returns the transpose of this matrix. For a pure rotation, this is the
    /// inverse rotation.
    pub fn transposed(&self) -> Self {
        Self::from_array(transpose_row_major::<3, 9>(&self.data))
    }
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 9]> for Matrix3x3 {
    #[inline]
    fn from(data: [f32; 9]) -> Self {
        Self::from_array(data)
    }
}

impl From<Matrix3x3> for [f32; 9] {
    #[inline]
    fn from(matrix: Matrix3x3) -> Self {
        matrix.data
    }
}

impl_binop_assign!(MulAssign, mul_assign, [], Matrix3x3, Matrix3x3, |a, b| {
    let lhs = *a;
    Matrix3x3::multiply(&lhs, b, a);
});

impl_binop_via_assign!(Mul, mul, MulAssign, mul_assign, [], Matrix3x3, Matrix3x3);

impl_binop!(Mul, mul, [], Matrix3x3, Vec3, Vec3, |a, b| {
    let mut result = *b;
    Matrix3x3::multiply_vector(a, b, &mut result);
    result
});

impl_abs_diff_eq!([], Matrix3x3, f32, |a, b, epsilon| {
    a.data
        .iter()
        .zip(&b.data)
        .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
});

impl_relative_eq!([], Matrix3x3, f32, |a, b, epsilon, max_relative| {
    a.data
        .iter()
        .zip(&b.data)
        .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
});

impl Matrix4x4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_array([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_array([0.0; 16])
    }

    /// Creates a matrix from the given elements in row-major order.
    #[inline]
    pub const fn from_array(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from the given slice of elements in row-major order.
    ///
    /// # Errors
    /// Returns an error if the slice does not contain exactly 16 elements.
    pub fn from_slice(elements: &[f32]) -> Result<Self> {
        ensure!(
            elements.len() == 16,
            "Expected 16 matrix elements, got {}",
            elements.len()
        );
        let mut data = [0.0; 16];
        data.copy_from_slice(elements);
        Ok(Self::from_array(data))
    }

    /// Creates a matrix with the given 3x3 matrix as the upper-left block and
    /// the remaining elements taken from the identity matrix.
    pub fn from_matrix33(matrix: &Matrix3x3) -> Self {
        let mut result = Self::identity();
        for row in 0..3 {
            result.data[row * 4..row * 4 + 3]
                .copy_from_slice(&matrix.data[row * 3..row * 3 + 3]);
        }
        result
    }

    /// Creates a matrix translating points by the given vector. The
    /// translation is placed in the last column.
    pub fn translate(translation: &Vec3) -> Self {
        let mut result = Self::identity();
        result.data[3] = translation.x();
        result.data[7] = translation.y();
        result.data[11] = translation.z();
        result
    }

    /// Creates a shear matrix offsetting the x- and y-coordinates by `a` and
    /// `b` times the z-coordinate, respectively.
    pub fn shear(a: f32, b: f32) -> Self {
        let mut result = Self::identity();
        result.data[2] = a;
        result.data[6] = b;
        result
    }

    /// Creates a shear matrix offsetting only the x-coordinate by `a` times
    /// the z-coordinate.
    pub fn shear_x(a: f32) -> Self {
        Self::shear(a, 0.0)
    }

    /// Creates a right-handed perspective projection matrix.
    ///
    /// The camera looks down the negative z-axis. View-space depths from
    /// `-z_near` to `-z_far` are mapped to clip-space depths from -1 to 1
    /// after perspective division, and the clip-space w-component is the
    /// negated view-space z-coordinate.
    ///
    /// `vertical_field_of_view` is in radians and `aspect_ratio` is width over
    /// height. The caller must ensure that both distances are positive and
    /// that `z_near < z_far`; otherwise the result is degenerate.
    pub fn perspective(
        vertical_field_of_view: f32,
        aspect_ratio: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let tan_half_fov_y = (0.5 * vertical_field_of_view).tan();
        let inverse_depth_range = 1.0 / (z_far - z_near);

        let mut result = Self::zeros();
        result.data[0] = 1.0 / (aspect_ratio * tan_half_fov_y);
        result.data[5] = 1.0 / tan_half_fov_y;
        result.data[10] = -(z_far + z_near) * inverse_depth_range;
        result.data[11] = -2.0 * z_far * z_near * inverse_depth_range;
        result.data[14] = -1.0;
        result
    }

    /// Computes `a * b` and writes it to `result`.
    pub fn multiply(a: &Self, b: &Self, result: &mut Self) {
        *result = Self::from_array(multiply_row_major::<4, 16>(&a.data, &b.data));
    }

    /// Computes `a * vector` and writes it to `result`.
    pub fn multiply_vector(a: &Self, vector: &Vec4, result: &mut Vec4) {
        *result = Vec4::from(multiply_row_major_vector::<4, 16>(&a.data, vector.as_array()));
    }

    /// Transforms the 4D vector formed by `point` and `w` and returns the
    /// first three components of the result. No perspective division is
    /// performed.
    pub fn transform(&self, point: &Vec3, w: f32) -> Vec3 {
        (self * point.extended(w)).xyz()
    }

    /// The elements in row-major order.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.data
    }

    /// The elements in row-major order as raw bytes, ready for upload to a
    /// GPU buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Returns the element at row `row` and column `column`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, row: usize, column: usize) -> f32 {
        assert!(row < 4 && column < 4, "index out of bounds");
        self.data[row * 4 + column]
    }

    /// Returns a mutable reference to the element at row `row` and column
    /// `column`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, row: usize, column: usize) -> &mut f32 {
        assert!(row < 4 && column < 4, "index out of bounds");
        &mut self.data[row * 4 + column]
    }

    /// Returns the transpose of this matrix, e.g. for backends expecting
    /// column-major data.
    pub fn transposed(&self) -> Self {
        Self::from_array(transpose_row_major::<4, 16>(&self.data))
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 16]> for Matrix4x4 {
    #[inline]
    fn from(data: [f32; 16]) -> Self {
        Self::from_array(data)
    }
}

impl From<Matrix4x4> for [f32; 16] {
    #[inline]
    fn from(matrix: Matrix4x4) -> Self {
        matrix.data
    }
}

impl From<&Matrix3x3> for Matrix4x4 {
    fn from(matrix: &Matrix3x3) -> Self {
        Self::from_matrix33(matrix)
    }
}

impl_binop_assign!(MulAssign, mul_assign, [], Matrix4x4, Matrix4x4, |a, b| {
    let lhs = *a;
    Matrix4x4::multiply(&lhs, b, a);
});

impl_binop_via_assign!(Mul, mul, MulAssign, mul_assign, [], Matrix4x4, Matrix4x4);

impl_binop!(Mul, mul, [], Matrix4x4, Vec4, Vec4, |a, b| {
    let mut result = *b;
    Matrix4x4::multiply_vector(a, b, &mut result);
    result
});

impl_abs_diff_eq!([], Matrix4x4, f32, |a, b, epsilon| {
    a.data
        .iter()
        .zip(&b.data)
        .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
});

impl_relative_eq!([], Matrix4x4, f32, |a, b, epsilon, max_relative| {
    a.data
        .iter()
        .zip(&b.data)
        .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
});

/// Multiplies two row-major `N`x`N` matrices with `L = N * N` elements. The
/// product is accumulated in a fresh buffer, so the caller may write it back
/// over either operand.
fn multiply_row_major<const N: usize, const L: usize>(a: &[f32; L], b: &[f32; L]) -> [f32; L] {
    let mut product = [0.0; L];
    for row in 0..N {
        for column in 0..N {
            product[row * N + column] = (0..N)
                .map(|k| a[row * N + k] * b[k * N + column])
                .sum();
        }
    }
    product
}

fn multiply_row_major_vector<const N: usize, const L: usize>(
    a: &[f32; L],
    vector: &[f32; N],
) -> [f32; N] {
    let mut product = [0.0; N];
    for (row, element) in product.iter_mut().enumerate() {
        *element = a[row * N..(row + 1) * N]
            .iter()
            .zip(vector)
            .map(|(a, v)| a * v)
            .sum();
    }
    product
}

fn transpose_row_major<const N: usize, const L: usize>(a: &[f32; L]) -> [f32; L] {
    let mut transposed = [0.0; L];
    for row in 0..N {
        for column in 0..N {
            transposed[column * N + row] = a[row * N + column];
        }
    }
    transposed
}
