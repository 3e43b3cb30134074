use crate::{Error, Mat4, Vec3};

/// Perspective projection parameters for a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    /// Viewport width; only the aspect ratio matters
    pub viewport_width: u32,
    /// Viewport height; only the aspect ratio matters
    pub viewport_height: u32,
    /// Distance to the near clip plane, must be positive
    pub near: f32,
    /// Distance to the far clip plane
    pub far: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
}

impl Projection {
    pub fn matrix(&self) -> Result<Mat4, Error> {
        Mat4::perspective(
            self.viewport_width,
            self.viewport_height,
            self.near,
            self.far,
            self.fov_degrees,
        )
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            viewport_width: 4,
            viewport_height: 3,
            near: 0.1,
            far: 100.0,
            fov_degrees: 45.0,
        }
    }
}

/// Camera placement in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Approximate up direction; must not be parallel to `eye - target`
    pub up: Vec3,
}

impl Camera {
    pub fn view(&self) -> Result<Mat4, Error> {
        Mat4::look_at(self.eye, self.target, self.up)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

/// Projection and camera bundled together, e.g. as loaded from a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub projection: Projection,
    pub camera: Camera,
}

impl Scene {
    pub fn model_view_projection(&self) -> Result<Mat4, Error> {
        model_view_projection(&self.projection, &self.camera)
    }
}

/// Composes `projection · view`; the model transform is the identity.
///
/// # Errors
/// * `Error::InvalidInput` - either matrix cannot be built, or the product
///   overflows to a non-finite entry
pub fn model_view_projection(projection: &Projection, camera: &Camera) -> Result<Mat4, Error> {
    (projection.matrix()? * camera.view()?).ensure_finite("model_view_projection")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_mvp() {
        let mvp = Scene::default().model_view_projection().unwrap();

        let projection = Mat4::perspective(4, 3, 0.1, 100.0, 45.0).unwrap();
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y).unwrap();
        assert_eq!(mvp, projection.multiply(&view));

        // the view only translates along z, so x/y scaling survives unchanged
        assert_eq!(mvp.at(0, 0), projection.at(0, 0));
        assert_eq!(mvp.at(1, 1), projection.at(1, 1));
        assert_eq!(mvp.at(3, 3), 3.0);
    }

    #[test]
    fn test_invalid_camera_propagates() {
        let camera = Camera { eye: Vec3::ZERO, ..Camera::default() };
        let result = model_view_projection(&Projection::default(), &camera);
        assert_eq!(result, Err(Error::coincident_eye_and_target()));
    }

    #[test]
    fn test_overflowing_product_is_invalid_input() {
        let camera = Camera { eye: Vec3::new(0.0, 0.0, 3e38), ..Camera::default() };
        let projection = Projection { near: 10.0, far: 11.0, ..Projection::default() };

        // the view alone is finite; only the composition overflows
        assert!(camera.view().is_ok());
        let result = model_view_projection(&projection, &camera);
        assert_eq!(result, Err(Error::non_finite_result("model_view_projection")));
    }

    #[test]
    fn test_invalid_projection_propagates() {
        let projection = Projection { viewport_height: 0, ..Projection::default() };
        let result = model_view_projection(&projection, &Camera::default());
        assert_eq!(result, Err(Error::zero_aspect(4, 0)));
    }
}
