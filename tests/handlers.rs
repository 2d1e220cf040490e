//! Integration tests for the eight camera input handlers
//!
//! Each handler issues no camera call when inactive and exactly one call
//! with its fixed vector when active.

use cambind_core::{CameraCall, CameraOp, RecordingCamera, Scene};
use cambind_input::{BindingTable, CameraCommand};
use cambind_math::Vec3;

const EXPECTED: [(&str, CameraOp, [f32; 3]); 8] = [
    ("MoveForward", CameraOp::Pan, [0.0, 0.0, -1.0]),
    ("MoveBackward", CameraOp::Pan, [0.0, 0.0, 1.0]),
    ("MoveLeft", CameraOp::Pan, [1.0, 0.0, 0.0]),
    ("MoveRight", CameraOp::Pan, [-1.0, 0.0, 0.0]),
    ("RotateLeft", CameraOp::Rotate, [0.0, 0.1, 0.0]),
    ("RotateRight", CameraOp::Rotate, [0.0, -0.1, 0.0]),
    ("MoveUp", CameraOp::Translate, [0.0, 1.0, 0.0]),
    ("MoveDown", CameraOp::Translate, [0.0, -1.0, 0.0]),
];

fn scene() -> Scene<RecordingCamera> {
    let mut scene = Scene::new();
    scene.create_camera("main", 0, RecordingCamera::new("main"));
    scene
}

fn current_calls(scene: &Scene<RecordingCamera>) -> Vec<CameraCall> {
    scene.current_camera().unwrap().calls().to_vec()
}

#[test]
fn test_inactive_handlers_never_call_camera() {
    let table = BindingTable::default();
    let mut scene = scene();

    for (name, _, _) in EXPECTED {
        assert_eq!(table.invoke_current(name, false, &mut scene), Ok(false));
    }
    assert!(current_calls(&scene).is_empty());
}

#[test]
fn test_active_handlers_call_once_with_literal_vector() {
    let table = BindingTable::default();

    for (name, op, vector) in EXPECTED {
        let mut scene = scene();
        assert_eq!(table.invoke_current(name, true, &mut scene), Ok(true));
        assert_eq!(
            current_calls(&scene),
            vec![CameraCall::new(op, Vec3::from(vector))],
            "{} should issue exactly one {} call",
            name,
            op
        );
    }
}

#[test]
fn test_repeated_calls_have_identical_effect() {
    let table = BindingTable::default();
    let mut scene = scene();

    for _ in 0..3 {
        table.invoke_current("RotateLeft", true, &mut scene).unwrap();
    }
    let calls = current_calls(&scene);
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| *c == calls[0]));
}

#[test]
fn test_command_enum_matches_table() {
    for ((name, op, vector), cmd) in EXPECTED.into_iter().zip(CameraCommand::ALL) {
        assert_eq!(cmd.name(), name);

        let mut cam = RecordingCamera::new("direct");
        assert!(cmd.dispatch(true, &mut cam));
        assert!(!cmd.dispatch(false, &mut cam));
        assert_eq!(cam.calls(), &[CameraCall::new(op, Vec3::from(vector))]);
    }
}

#[test]
fn test_handlers_follow_current_camera() {
    let table = BindingTable::default();
    let mut scene = scene();
    let editor = scene.create_camera("editor", 10, RecordingCamera::new("editor"));

    table.invoke_current("MoveUp", true, &mut scene).unwrap();
    assert_eq!(scene.camera(editor).unwrap().call_count(), 1);
    assert_eq!(scene.camera_by_name("main").unwrap().call_count(), 0);

    // Dropping the editor camera hands input back to main
    scene.destroy_camera(editor);
    table.invoke_current("MoveUp", true, &mut scene).unwrap();
    assert_eq!(scene.camera_by_name("main").unwrap().call_count(), 1);
}
