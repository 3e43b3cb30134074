use std::{fmt, ops::Sub, str::FromStr};

use crate::Error;

/// A 3-component vector or point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Cross product `self × other`.
    ///
    /// Parallel or zero inputs yield the zero vector; that is a valid result,
    /// but it cannot be passed on to [`Vec3::normalize`].
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length, scaled by the largest component so that squaring
    /// neither overflows nor underflows.
    pub fn length(self) -> f32 {
        let scale = self.max_abs_component();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }

        let unit = self.scaled_down(scale);
        scale * unit.dot(unit).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Scales the vector to unit length.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - the vector has zero length or a non-finite component
    pub fn normalize(self) -> Result<Vec3, Error> {
        if !self.is_finite() {
            return Err(Error::non_finite_vector(self));
        }

        let scale = self.max_abs_component();
        if scale == 0.0 {
            return Err(Error::zero_length_vector());
        }

        // largest component is now +-1, so the length lies in [1, sqrt(3)]
        let unit = self.scaled_down(scale);
        let len = unit.dot(unit).sqrt();

        Ok(unit.scaled_down(len))
    }

    fn max_abs_component(self) -> f32 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    fn scaled_down(self, divisor: f32) -> Vec3 {
        Vec3::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vec3::new(x, y, z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Parses `x,y,z`; whitespace around each component is ignored.
impl FromStr for Vec3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s.split(',').map(str::trim).collect();
        if components.len() != 3 {
            return Err(Error::component_count(components.len()));
        }

        let mut parsed = [0.0f32; 3];
        for (slot, component) in parsed.iter_mut().zip(&components) {
            *slot = component
                .parse()
                .map_err(|_| Error::component_not_a_number(component))?;
            if !slot.is_finite() {
                return Err(Error::component_not_finite(component));
            }
        }

        Ok(Vec3::from(parsed))
    }
}
