use cgmath::{Deg, InnerSpace, Matrix4, Point3, SquareMatrix, Vector3, Vector4};
use instant::Duration;
use quad_lessons::camera::{Camera, CameraController, CameraUniform, Projection};
use winit::{event::ElementState, keyboard::KeyCode};

const EPSILON: f32 = 1e-5;

fn assert_close(actual: Vector3<f32>, expected: Vector3<f32>) {
    assert!(
        (actual - expected).magnitude() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn default_camera_looks_down_negative_z() {
    let camera = Camera::default();
    assert_eq!(camera.position, Point3::new(0.0, 0.0, 3.0));
    assert_close(camera.front(), Vector3::new(0.0, 0.0, -1.0));
    assert_close(camera.right(), Vector3::new(1.0, 0.0, 0.0));
}

#[test]
fn front_is_unit_length_for_any_orientation() {
    for yaw in [-180.0, -90.0, 0.0, 45.0, 170.0] {
        for pitch in [-89.0, -30.0, 0.0, 60.0, 89.0] {
            let camera = Camera::new((1.0, 2.0, 3.0), Deg(yaw), Deg(pitch));
            assert!((camera.front().magnitude() - 1.0).abs() < EPSILON);
            assert!((camera.right().magnitude() - 1.0).abs() < EPSILON);
        }
    }
}

#[test]
fn forward_key_moves_speed_times_dt_along_front() {
    let mut camera = Camera::default();
    let mut controller = CameraController::new(2.5);
    assert_eq!(controller.speed(), 2.5);
    assert!(controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));

    controller.update(&mut camera, Duration::from_millis(400));

    assert_close(
        Vector3::new(camera.position.x, camera.position.y, camera.position.z),
        Vector3::new(0.0, 0.0, 2.0),
    );
}

#[test]
fn strafing_follows_cross_of_front_and_up() {
    let mut camera = Camera::default();
    let mut controller = CameraController::new(1.0);
    controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
    controller.update(&mut camera, Duration::from_secs(1));
    assert_close(
        Vector3::new(camera.position.x, camera.position.y, camera.position.z),
        Vector3::new(-1.0, 0.0, 3.0),
    );

    controller.process_keyboard(KeyCode::KeyA, ElementState::Released);
    controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
    controller.update(&mut camera, Duration::from_secs(2));
    assert_close(
        Vector3::new(camera.position.x, camera.position.y, camera.position.z),
        Vector3::new(1.0, 0.0, 3.0),
    );
}

#[test]
fn opposite_keys_cancel_out() {
    let mut camera = Camera::default();
    let mut controller = CameraController::new(5.0);
    controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
    controller.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
    controller.update(&mut camera, Duration::from_secs(1));
    assert_eq!(camera, Camera::default());
}

#[test]
fn released_and_reset_keys_stop_movement() {
    let mut camera = Camera::default();
    let mut controller = CameraController::new(5.0);
    controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
    controller.process_keyboard(KeyCode::KeyW, ElementState::Released);
    controller.update(&mut camera, Duration::from_secs(1));
    assert_eq!(camera, Camera::default());

    controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
    controller.reset();
    controller.update(&mut camera, Duration::from_secs(1));
    assert_eq!(camera, Camera::default());
}

#[test]
fn non_movement_keys_are_not_consumed() {
    let mut controller = CameraController::new(1.0);
    assert!(!controller.process_keyboard(KeyCode::Escape, ElementState::Pressed));
    assert!(!controller.process_keyboard(KeyCode::Digit1, ElementState::Pressed));
    assert_eq!(controller, CameraController::new(1.0));
}

#[test]
fn zero_dt_does_not_move() {
    let mut camera = Camera::default();
    let mut controller = CameraController::new(100.0);
    controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
    controller.update(&mut camera, Duration::ZERO);
    assert_eq!(camera, Camera::default());
}

#[test]
fn projection_ignores_zero_height() {
    let mut projection = Projection::new(800, 600, Deg(45.0), 0.1, 100.0);
    assert!((projection.aspect() - 800.0 / 600.0).abs() < EPSILON);

    projection.resize(1024, 0);
    assert!((projection.aspect() - 800.0 / 600.0).abs() < EPSILON);

    projection.resize(1000, 500);
    assert!((projection.aspect() - 2.0).abs() < EPSILON);
}

#[test]
fn projection_maps_near_and_far_planes_to_wgpu_depth_range() {
    let projection = Projection::new(800, 600, Deg(45.0), 0.1, 100.0);
    let matrix = projection.calc_matrix();

    let near = matrix * Vector4::new(0.0, 0.0, -0.1, 1.0);
    let far = matrix * Vector4::new(0.0, 0.0, -100.0, 1.0);

    assert!((near.z / near.w).abs() < 1e-4);
    assert!((far.z / far.w - 1.0).abs() < 1e-4);
}

#[test]
fn camera_uniform_starts_as_identity() {
    let uniform = CameraUniform::new();
    let identity: [[f32; 4]; 4] = Matrix4::identity().into();
    assert_eq!(uniform.view_proj, identity);
}

#[test]
fn camera_uniform_places_origin_in_front_of_the_camera() {
    let mut uniform = CameraUniform::new();
    let camera = Camera::default();
    let projection = Projection::new(800, 600, Deg(45.0), 0.1, 100.0);
    uniform.update_view_proj(&camera, &projection);

    let view_proj: Matrix4<f32> = uniform.view_proj.into();
    let clip = view_proj * Vector4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;

    assert!(ndc.x.abs() < EPSILON);
    assert!(ndc.y.abs() < EPSILON);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
