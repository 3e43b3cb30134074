use std::fs;

use clap::Parser;
use hellotri_math::{Camera, Projection, Scene, Vec3};

#[derive(Parser, Debug)]
#[command(
    name = "hellotri-mvp",
    about = "Model-view-projection matrix calculator for the hello-triangle demo",
    long_about = "Builds the perspective and look-at matrices from camera parameters and prints their product, the matrix uploaded to the triangle's vertex shader"
)]
pub struct Cli {
    /// Viewport width; only the aspect ratio matters
    #[arg(long, default_value = "4", value_name = "PX")]
    pub width: u32,

    /// Viewport height; only the aspect ratio matters
    #[arg(long, default_value = "3", value_name = "PX")]
    pub height: u32,

    /// Near clip plane distance
    #[arg(short = 'n', long, default_value = "0.1", value_name = "DISTANCE")]
    pub near: f32,

    /// Far clip plane distance
    #[arg(short = 'f', long, default_value = "100.0", value_name = "DISTANCE")]
    pub far: f32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "45.0", value_name = "DEGREES")]
    pub fov: f32,

    /// Camera position
    #[arg(long, default_value = "0,0,3", value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub eye: Vec3,

    /// Point the camera looks at
    #[arg(long, default_value = "0,0,0", value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub target: Vec3,

    /// Approximate up direction
    #[arg(long, default_value = "0,1,0", value_name = "X,Y,Z", allow_hyphen_values = true)]
    pub up: Vec3,

    /// JSON scene file; replaces the projection and camera flags
    #[arg(short = 's', long, value_name = "PATH")]
    pub scene: Option<String>,

    /// Print the matrix as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit entries in column-major order instead of row-major
    #[arg(long)]
    pub column_major: bool,

    /// Skip the configuration summary
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    /// Resolves the scene from the scene file, or from the flags if none was given
    pub fn load_scene(&self) -> Result<Scene, Box<dyn std::error::Error>> {
        match &self.scene {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("Unable to read scene file '{path}': {e}"))?;
                let scene = serde_json::from_str(&json)
                    .map_err(|e| format!("Invalid scene file '{path}': {e}"))?;
                Ok(scene)
            },
            None => Ok(self.scene_from_flags()),
        }
    }

    pub fn scene_from_flags(&self) -> Scene {
        Scene {
            projection: Projection {
                viewport_width: self.width,
                viewport_height: self.height,
                near: self.near,
                far: self.far,
                fov_degrees: self.fov,
            },
            camera: Camera { eye: self.eye, target: self.target, up: self.up },
        }
    }

    /// Validates the scene parameters the library accepts but the demo does not:
    /// a far plane in front of the near plane flips the depth range
    pub fn validate(scene: &Scene) -> Result<(), String> {
        let projection = &scene.projection;

        if projection.far <= projection.near {
            return Err(format!(
                "Far plane ({}) must lie beyond the near plane ({})",
                projection.far, projection.near
            ));
        }

        Ok(())
    }

    /// Prints a summary of the configuration
    pub fn print_summary(&self, scene: &Scene) {
        let Scene { projection, camera } = scene;

        println!("Computing MVP matrix:");
        if let Some(path) = &self.scene {
            println!("  Scene: {path}");
        }
        println!(
            "  Viewport: {}x{} (aspect {:.3})",
            projection.viewport_width,
            projection.viewport_height,
            projection.viewport_width as f32 / projection.viewport_height as f32
        );
        println!("  Clip planes: {} .. {}", projection.near, projection.far);
        println!("  Field of view: {}°", projection.fov_degrees);
        println!("  Eye: {}  Target: {}  Up: {}", camera.eye, camera.target, camera.up);
        println!("  Layout: {}", self.layout_name());
        println!();
    }

    pub fn layout_name(&self) -> &'static str {
        if self.column_major {
            "column-major"
        } else {
            "row-major"
        }
    }
}
