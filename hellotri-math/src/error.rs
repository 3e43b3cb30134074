use crate::Vec3;

/// Error categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Degenerate geometric input that would otherwise produce NaN or infinite entries.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Textual vector representation could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    // Helper constructors for common error scenarios

    // Invalid input errors
    pub fn zero_length_vector() -> Self {
        Self::InvalidInput("Cannot normalize a zero-length vector".to_string())
    }

    pub fn non_finite_vector(v: Vec3) -> Self {
        Self::InvalidInput(format!("Vector ({v}) has a non-finite component"))
    }

    pub fn non_finite_argument(name: &str, value: f32) -> Self {
        Self::InvalidInput(format!("{name} must be finite, got {value}"))
    }

    pub fn non_finite_result(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} overflows to a non-finite matrix entry"))
    }

    pub fn coincident_eye_and_target() -> Self {
        Self::InvalidInput("Eye and target positions coincide".to_string())
    }

    pub fn up_parallel_to_view() -> Self {
        Self::InvalidInput("Up vector is zero or parallel to the view direction".to_string())
    }

    pub fn degenerate_frustum(planes: &str) -> Self {
        Self::InvalidInput(format!("Frustum {planes} planes coincide"))
    }

    pub fn non_positive_near(near: f32) -> Self {
        Self::InvalidInput(format!("Near plane must be positive, got {near}"))
    }

    pub fn zero_aspect(width: u32, height: u32) -> Self {
        Self::InvalidInput(format!("Viewport {width}x{height} has no aspect ratio"))
    }

    pub fn field_of_view_out_of_range(fov_degrees: f32) -> Self {
        Self::InvalidInput(format!(
            "Field of view must be between 0 and 180 degrees, got {fov_degrees}"
        ))
    }

    // Parse errors
    pub fn component_count(found: usize) -> Self {
        Self::Parse(format!("Expected 3 comma-separated components, found {found}"))
    }

    pub fn component_not_a_number(component: &str) -> Self {
        Self::Parse(format!("Component '{component}' is not a number"))
    }

    pub fn component_not_finite(component: &str) -> Self {
        Self::Parse(format!("Component '{component}' is not finite"))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
