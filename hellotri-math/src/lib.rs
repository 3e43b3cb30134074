mod camera;
mod error;
mod mat4;
mod vec3;

pub use camera::{model_view_projection, Camera, Projection, Scene};
pub use error::Error;
pub use mat4::Mat4;
pub use vec3::Vec3;

/// Converts an angle in degrees to radians.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
