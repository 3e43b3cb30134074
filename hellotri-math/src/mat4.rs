use std::{fmt, ops::Mul};

use crate::{deg_to_rad, Error, Vec3};

/// A 4x4 `f32` matrix stored row-major: entry `(row, col)` lives at
/// `data[row * 4 + col]`.
///
/// [`Mat4::as_slice`] therefore yields the layout expected by a
/// `glUniformMatrix4fv` call with `transpose = GL_TRUE`; use
/// [`Mat4::to_column_major`] for APIs that cannot transpose on upload.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub const fn zero() -> Self {
        Self { data: [0.0; 16] }
    }

    pub fn new_identity() -> Self {
        let mut data = [0.0; 16];
        data[0] = 1.0;
        data[5] = 1.0;
        data[10] = 1.0;
        data[15] = 1.0;
        Self { data }
    }

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        let mut data = [0.0; 16];
        let mut i = 0;
        while i < 16 {
            data[i] = rows[i / 4][i % 4];
            i += 1;
        }
        Self { data }
    }

    /// Element at zero-based `row` and `col`.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 4 + col]
    }

    fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * 4 + col] = value;
    }

    /// Matrix product `self · rhs`.
    pub fn multiply(&self, rhs: &Mat4) -> Mat4 {
        let mut result = Mat4::zero();
        for row in 0..4 {
            for col in 0..4 {
                let value = (0..4).map(|k| self.at(row, k) * rhs.at(k, col)).sum();
                result.set(row, col, value);
            }
        }

        result
    }

    pub fn transpose(&self) -> Mat4 {
        let mut result = Mat4::zero();
        for row in 0..4 {
            for col in 0..4 {
                result.set(col, row, self.at(row, col));
            }
        }

        result
    }

    /// Multiplies the homogeneous column vector `(point, 1)` by this matrix.
    pub fn transform_point(&self, point: Vec3) -> [f32; 4] {
        let p = [point.x, point.y, point.z, 1.0];
        let mut result = [0.0; 4];
        for (row, out) in result.iter_mut().enumerate() {
            *out = (0..4).map(|k| self.at(row, k) * p[k]).sum();
        }

        result
    }

    /// View transform placing the camera at `eye`, looking toward `target`.
    ///
    /// The rows of the rotation part are the camera's right, up and backward
    /// axes; the fourth column moves `eye` to the origin.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - a non-finite input, `eye` equals `target`, `up`
    ///   is zero or parallel to the view direction, or an entry overflows
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Result<Self, Error> {
        if let Some(v) = [eye, target, up].into_iter().find(|v| !v.is_finite()) {
            return Err(Error::non_finite_vector(v));
        }

        let view_direction = eye - target;
        if !view_direction.is_finite() {
            return Err(Error::non_finite_result("look_at"));
        }
        let forward = view_direction
            .normalize()
            .map_err(|_| Error::coincident_eye_and_target())?;

        let right = up.cross(forward);
        if !right.is_finite() {
            return Err(Error::non_finite_result("look_at"));
        }
        let right = right.normalize().map_err(|_| Error::up_parallel_to_view())?;
        let true_up = forward.cross(right);

        Self::from_rows([
            [right.x, right.y, right.z, -right.dot(eye)],
            [true_up.x, true_up.y, true_up.z, -true_up.dot(eye)],
            [forward.x, forward.y, forward.z, -forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
        .ensure_finite("look_at")
    }

    /// Symmetric perspective projection for a `width` x `height` viewport and
    /// a vertical field of view in degrees.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - zero viewport dimension, non-finite `near` or
    ///   `far`, field of view outside `(0, 180)` degrees, or any
    ///   [`Mat4::frustum`] precondition violated
    pub fn perspective(
        width: u32,
        height: u32,
        near: f32,
        far: f32,
        fov_degrees: f32,
    ) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::zero_aspect(width, height));
        }
        for (name, value) in [("near", near), ("far", far)] {
            if !value.is_finite() {
                return Err(Error::non_finite_argument(name, value));
            }
        }
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(Error::field_of_view_out_of_range(fov_degrees));
        }

        let scale = deg_to_rad(fov_degrees * 0.5).tan() * near;
        let right = (width as f32 / height as f32) * scale;
        let top = scale;

        Self::frustum(-right, right, -top, top, near, far)
    }

    /// OpenGL-style perspective projection for the given clip planes.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - a non-finite argument, `left == right`,
    ///   `bottom == top`, `near == far`, `near <= 0`, or an entry overflows
    pub fn frustum(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Result<Self, Error> {
        let arguments = [
            ("left", left),
            ("right", right),
            ("bottom", bottom),
            ("top", top),
            ("near", near),
            ("far", far),
        ];
        if let Some((name, value)) = arguments.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::non_finite_argument(name, value));
        }
        if !(near > 0.0) {
            return Err(Error::non_positive_near(near));
        }
        if left == right {
            return Err(Error::degenerate_frustum("left/right"));
        }
        if bottom == top {
            return Err(Error::degenerate_frustum("bottom/top"));
        }
        if near == far {
            return Err(Error::degenerate_frustum("near/far"));
        }

        let mut result = Self::zero();
        result.set(0, 0, 2.0 * near / (right - left));
        result.set(0, 2, (right + left) / (right - left));
        result.set(1, 1, 2.0 * near / (top - bottom));
        result.set(1, 2, (top + bottom) / (top - bottom));
        result.set(2, 2, -(far + near) / (far - near));
        result.set(2, 3, -(2.0 * far * near) / (far - near));
        result.set(3, 2, -1.0);

        result.ensure_finite("frustum")
    }

    pub(crate) fn ensure_finite(self, operation: &str) -> Result<Self, Error> {
        if self.data.iter().all(|v| v.is_finite()) {
            Ok(self)
        } else {
            Err(Error::non_finite_result(operation))
        }
    }

    /// Entries in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Entries in column-major order.
    pub fn to_column_major(&self) -> [f32; 16] {
        self.transpose().data
    }

    pub fn approx_eq(&self, other: &Mat4, epsilon: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::new_identity()
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let (open, close) = match row {
                0 => ("[", ","),
                3 => (" ", "]"),
                _ => (" ", ","),
            };
            writeln!(
                f,
                "{open}{:.6}, {:.6}, {:.6}, {:.6}{close}",
                self.at(row, 0),
                self.at(row, 1),
                self.at(row, 2),
                self.at(row, 3),
            )?;
        }

        Ok(())
    }
}
