use hellotri_math::{model_view_projection, Camera, Mat4, Projection, Scene, Vec3};

#[test]
fn startup_mvp_maps_triangle_into_clip_volume() {
    let mvp = Scene::default().model_view_projection().unwrap();

    // the demo triangle sits on the z = -1 plane, four units in front of the eye
    let triangle = [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, 1.0, -1.0),
    ];

    for vertex in triangle {
        let clip = mvp.transform_point(vertex);
        assert!((clip[3] - 4.0).abs() < 1e-5, "w = {} for {vertex}", clip[3]);
        for ndc in &clip[..3] {
            let ndc = ndc / clip[3];
            assert!((-1.0..=1.0).contains(&ndc), "{vertex} clipped: {clip:?}");
        }
    }
}

#[test]
fn mvp_is_projection_times_view() {
    let projection = Projection {
        viewport_width: 1920,
        viewport_height: 1080,
        near: 0.5,
        far: 250.0,
        fov_degrees: 60.0,
    };
    let camera = Camera {
        eye: Vec3::new(10.0, 4.0, -6.0),
        target: Vec3::new(0.0, 1.0, 0.0),
        up: Vec3::Y,
    };

    let mvp = model_view_projection(&projection, &camera).unwrap();
    let expected = Mat4::perspective(1920, 1080, 0.5, 250.0, 60.0)
        .unwrap()
        .multiply(&Mat4::look_at(camera.eye, camera.target, camera.up).unwrap());

    assert_eq!(mvp, expected);
}

#[test]
fn target_projects_to_viewport_center() {
    let scene = Scene {
        camera: Camera {
            eye: Vec3::new(3.0, 2.0, 5.0),
            target: Vec3::new(-1.0, 0.0, 0.5),
            up: Vec3::Y,
        },
        ..Scene::default()
    };

    let clip = scene.model_view_projection().unwrap().transform_point(scene.camera.target);
    assert!((clip[0] / clip[3]).abs() < 1e-5);
    assert!((clip[1] / clip[3]).abs() < 1e-5);
}

#[test]
fn upload_layouts() {
    let mvp = Scene::default().model_view_projection().unwrap();
    let row_major = mvp.as_slice();
    let column_major = mvp.to_column_major();

    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(row_major[row * 4 + col], mvp.at(row, col));
            assert_eq!(column_major[col * 4 + row], mvp.at(row, col));
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn scene_json_round_trip() {
    let json = r#"{
        "projection": { "viewport_width": 4, "viewport_height": 3, "near": 0.1, "far": 100.0, "fov_degrees": 45.0 },
        "camera": {
            "eye": { "x": 0.0, "y": 0.0, "z": 3.0 },
            "target": { "x": 0.0, "y": 0.0, "z": 0.0 },
            "up": { "x": 0.0, "y": 1.0, "z": 0.0 }
        }
    }"#;

    let scene: Scene = serde_json::from_str(json).unwrap();
    assert_eq!(scene, Scene::default());

    let encoded = serde_json::to_string(&scene).unwrap();
    assert_eq!(serde_json::from_str::<Scene>(&encoded).unwrap(), scene);
}

#[cfg(feature = "serde")]
#[test]
fn mat4_serializes_as_flat_row_major_array() {
    let m = Mat4::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0).unwrap();
    let value = serde_json::to_value(m).unwrap();

    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 16);
    assert_eq!(entries[14].as_f64().unwrap(), -1.0);
    assert_eq!(serde_json::from_value::<Mat4>(value).unwrap(), m);
}
